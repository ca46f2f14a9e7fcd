//! Host primitive traits
//!
//! The scroll logic never touches a concrete document type. Everything it
//! needs from the environment comes through these seams, implemented by the
//! host binding layer (`scrollin_dom` in this workspace, a real UI binding
//! elsewhere).
//!
//! All reads return plain values. An id that the host no longer knows reads
//! as a neutral value (`None` / `0.0`); real failure modes belong to the
//! host's own API, not to these seams.

use crate::axis::{Axis, ScrollCoordinate};
use crate::ElementId;

/// Computed style access.
pub trait StyleRead {
    /// The computed value of a CSS property, e.g. `"overflow-y"` → `"auto"`.
    ///
    /// Returns `None` when the element has no computed value for the
    /// property (or the element is unknown).
    fn computed_style(&self, element: ElementId, property: &str) -> Option<String>;
}

/// Per-axis geometry readings of an element.
pub trait GeometryRead {
    /// Total extent of the element's scrollable content
    /// (`scrollHeight` / `scrollWidth` equivalent).
    fn scroll_extent(&self, element: ElementId, axis: Axis) -> f32;

    /// Extent of the visible band (`clientHeight` / `clientWidth`
    /// equivalent).
    fn visible_extent(&self, element: ElementId, axis: Axis) -> f32;

    /// Outer size of the element including margins
    /// (`outerHeight` / `outerWidth` equivalent).
    fn outer_size(&self, element: ElementId, axis: Axis) -> f32;

    /// Offset of the element's border edge from the document origin along
    /// the axis (`offset().top` / `offset().left` equivalent).
    fn offset_coordinate(&self, element: ElementId, axis: Axis) -> f32;
}

/// Current scroll position of an element, read and written per axis.
pub trait ScrollAccess {
    fn scroll_position(&self, element: ElementId, axis: Axis) -> f32;

    fn set_scroll_position(&self, element: ElementId, axis: Axis, value: f32);
}

/// Animated property access, the tween engine's read/write seam.
///
/// Scroll coordinates are the only animated properties this system drives;
/// hosts route them to the same storage [`ScrollAccess`] exposes.
pub trait AnimatedProperties {
    fn animated_value(&self, element: ElementId, coordinate: ScrollCoordinate) -> f32;

    fn set_animated_value(&self, element: ElementId, coordinate: ScrollCoordinate, value: f32);
}
