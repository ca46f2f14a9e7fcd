//! Element declarations
//!
//! Builder for the data an element enters the document with. Sizes come in
//! (width, height) pairs matching how layout reports them; internally they
//! land in per-axis storage (vertical = heights/top, horizontal =
//! widths/left).

use scrollin_core::PerAxis;

/// Declared state of an element: computed styles, geometry, initial scroll
/// position, optional string id.
#[derive(Debug, Clone, Default)]
pub struct ElementDecl {
    pub(crate) styles: Vec<(String, String)>,
    pub(crate) scroll_extent: PerAxis<f32>,
    pub(crate) visible_extent: PerAxis<f32>,
    pub(crate) outer_size: PerAxis<f32>,
    pub(crate) offset: PerAxis<f32>,
    pub(crate) scroll_position: PerAxis<f32>,
    pub(crate) string_id: Option<String>,
}

impl ElementDecl {
    pub fn new() -> Self {
        Self::default()
    }

    /// String id for lookup via `Document::select_id`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.string_id = Some(id.into());
        self
    }

    /// Set a computed style, e.g. `.style("overflow-y", "auto")`.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    /// Shorthand for `.style("overflow-y", ..)`.
    pub fn overflow_y(self, value: impl Into<String>) -> Self {
        self.style("overflow-y", value)
    }

    /// Shorthand for `.style("overflow-x", ..)`.
    pub fn overflow_x(self, value: impl Into<String>) -> Self {
        self.style("overflow-x", value)
    }

    /// Total content size (`scrollWidth`, `scrollHeight`).
    pub fn scroll_size(mut self, width: f32, height: f32) -> Self {
        self.scroll_extent = PerAxis::new(height, width);
        self
    }

    /// Visible band size (`clientWidth`, `clientHeight`).
    pub fn client_size(mut self, width: f32, height: f32) -> Self {
        self.visible_extent = PerAxis::new(height, width);
        self
    }

    /// Margin-inclusive outer size (`outerWidth`, `outerHeight`).
    pub fn outer_size(mut self, width: f32, height: f32) -> Self {
        self.outer_size = PerAxis::new(height, width);
        self
    }

    /// Layout offset from the document origin with every ancestor
    /// unscrolled. The document reports `offset().left` / `offset().top`
    /// as this value minus the current scroll of each ancestor.
    pub fn offset(mut self, left: f32, top: f32) -> Self {
        self.offset = PerAxis::new(top, left);
        self
    }

    /// Initial scroll position (`scrollLeft`, `scrollTop`).
    pub fn scroll_position(mut self, left: f32, top: f32) -> Self {
        self.scroll_position = PerAxis::new(top, left);
        self
    }
}

/// Create an empty element declaration.
pub fn element() -> ElementDecl {
    ElementDecl::new()
}
