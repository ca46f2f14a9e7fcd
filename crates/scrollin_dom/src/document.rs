//! The document: element storage and host primitive implementations
//!
//! A slotmap-backed tree behind a shared handle. Clones are cheap and share
//! the same elements, filter registry, and tween scheduler, so a `Document`
//! can be held wherever selections travel.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use scrollin_animation::{AnimationQueues, Transition, TweenScheduler};
use scrollin_core::{
    AnimatedProperties, Axis, ElementId, GeometryRead, PerAxis, ScrollAccess, ScrollCoordinate,
    StyleRead,
};

use crate::element::ElementDecl;
use crate::error::DomError;
use crate::filter::{FilterFn, FilterRegistry};
use crate::selection::Selection;

struct ElementData {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    styles: IndexMap<String, String>,
    scroll_extent: PerAxis<f32>,
    visible_extent: PerAxis<f32>,
    outer_size: PerAxis<f32>,
    offset: PerAxis<f32>,
    scroll_position: PerAxis<f32>,
    string_id: Option<String>,
}

impl ElementData {
    fn from_decl(parent: Option<ElementId>, decl: ElementDecl) -> Self {
        Self {
            parent,
            children: Vec::new(),
            styles: decl.styles.into_iter().collect(),
            scroll_extent: decl.scroll_extent,
            visible_extent: decl.visible_extent,
            outer_size: decl.outer_size,
            offset: decl.offset,
            scroll_position: decl.scroll_position,
            string_id: decl.string_id,
        }
    }
}

struct DocumentInner {
    elements: SlotMap<ElementId, ElementData>,
    root: ElementId,
    /// String id → element, last registration wins
    ids: FxHashMap<String, ElementId>,
}

/// An in-memory element tree implementing the scroll host primitives.
#[derive(Clone)]
pub struct Document {
    inner: Arc<RwLock<DocumentInner>>,
    filters: Arc<FilterRegistry>,
    tweens: TweenScheduler,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().unwrap();
        f.debug_struct("Document")
            .field("elements", &inner.elements.len())
            .field("filters", &self.filters)
            .finish()
    }
}

impl Document {
    /// Create an empty document containing only the root element.
    pub fn new() -> Self {
        let mut elements = SlotMap::with_key();
        let root = elements.insert(ElementData::from_decl(None, ElementDecl::new()));
        Self {
            inner: Arc::new(RwLock::new(DocumentInner {
                elements,
                root,
                ids: FxHashMap::default(),
            })),
            filters: Arc::new(FilterRegistry::new()),
            tweens: TweenScheduler::new(),
        }
    }

    pub fn root(&self) -> ElementId {
        self.inner.read().unwrap().root
    }

    // =========================================================================
    // Tree construction and mutation
    // =========================================================================

    /// Append a new element under `parent`.
    pub fn append(&self, parent: ElementId, decl: ElementDecl) -> Result<ElementId, DomError> {
        let mut inner = self.inner.write().unwrap();
        if !inner.elements.contains_key(parent) {
            return Err(DomError::MissingParent);
        }

        let string_id = decl.string_id.clone();
        let id = inner
            .elements
            .insert(ElementData::from_decl(Some(parent), decl));
        inner.elements[parent].children.push(id);

        if let Some(string_id) = string_id {
            if let Some(previous) = inner.ids.insert(string_id.clone(), id) {
                tracing::warn!(
                    "duplicate element id '{}' (replacing {:?})",
                    string_id,
                    previous
                );
            }
        }
        Ok(id)
    }

    /// Remove an element and its subtree. Any animations queued against the
    /// removed elements are dropped.
    pub fn remove(&self, element: ElementId) -> Result<(), DomError> {
        let removed = {
            let mut inner = self.inner.write().unwrap();
            if element == inner.root {
                return Err(DomError::RemoveRoot);
            }
            if !inner.elements.contains_key(element) {
                return Err(DomError::MissingElement);
            }

            // Detach from the parent first, then take the whole subtree.
            if let Some(parent) = inner.elements[element].parent {
                inner.elements[parent].children.retain(|&c| c != element);
            }

            let mut removed = Vec::new();
            let mut stack = vec![element];
            while let Some(id) = stack.pop() {
                if let Some(data) = inner.elements.remove(id) {
                    stack.extend(data.children);
                    if let Some(string_id) = data.string_id {
                        // Only drop the registration if it still points here.
                        if inner.ids.get(&string_id) == Some(&id) {
                            inner.ids.remove(&string_id);
                        }
                    }
                    removed.push(id);
                }
            }
            removed
        };

        for id in removed {
            self.tweens.remove_element(id);
        }
        Ok(())
    }

    // =========================================================================
    // Tree queries
    // =========================================================================

    pub fn contains(&self, element: ElementId) -> bool {
        self.inner.read().unwrap().elements.contains_key(element)
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.inner.read().unwrap().elements.get(element)?.parent
    }

    pub fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.inner
            .read()
            .unwrap()
            .elements
            .get(element)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, element: ElementId) -> Vec<ElementId> {
        let inner = self.inner.read().unwrap();
        let mut result = Vec::new();
        let mut current = element;
        while let Some(parent) = inner.elements.get(current).and_then(|data| data.parent) {
            result.push(parent);
            current = parent;
        }
        result
    }

    /// Look up an element by its string id.
    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.inner.read().unwrap().ids.get(id).copied()
    }

    /// The string id an element was declared with, if any.
    pub fn string_id(&self, element: ElementId) -> Option<String> {
        self.inner
            .read()
            .unwrap()
            .elements
            .get(element)?
            .string_id
            .clone()
    }

    /// All elements in document (depth-first) order, root included.
    pub fn all_elements(&self) -> Vec<ElementId> {
        let inner = self.inner.read().unwrap();
        let mut result = Vec::new();
        let mut stack = vec![inner.root];
        while let Some(id) = stack.pop() {
            if let Some(data) = inner.elements.get(id) {
                result.push(id);
                // Reverse so the first child is visited first.
                stack.extend(data.children.iter().rev());
            }
        }
        result
    }

    // =========================================================================
    // Styles and geometry
    // =========================================================================

    pub fn set_style(
        &self,
        element: ElementId,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        let mut inner = self.inner.write().unwrap();
        let data = inner
            .elements
            .get_mut(element)
            .ok_or(DomError::MissingElement)?;
        data.styles.insert(property.into(), value.into());
        Ok(())
    }

    pub fn set_scroll_extent(
        &self,
        element: ElementId,
        axis: Axis,
        value: f32,
    ) -> Result<(), DomError> {
        self.with_data_mut(element, |data| data.scroll_extent.set(axis, value))
    }

    pub fn set_visible_extent(
        &self,
        element: ElementId,
        axis: Axis,
        value: f32,
    ) -> Result<(), DomError> {
        self.with_data_mut(element, |data| data.visible_extent.set(axis, value))
    }

    pub fn set_outer_size(
        &self,
        element: ElementId,
        axis: Axis,
        value: f32,
    ) -> Result<(), DomError> {
        self.with_data_mut(element, |data| data.outer_size.set(axis, value))
    }

    pub fn set_offset(&self, element: ElementId, axis: Axis, value: f32) -> Result<(), DomError> {
        self.with_data_mut(element, |data| data.offset.set(axis, value))
    }

    fn with_data_mut<R>(
        &self,
        element: ElementId,
        f: impl FnOnce(&mut ElementData) -> R,
    ) -> Result<R, DomError> {
        let mut inner = self.inner.write().unwrap();
        inner
            .elements
            .get_mut(element)
            .map(f)
            .ok_or(DomError::MissingElement)
    }

    fn read_axis(&self, element: ElementId, f: impl FnOnce(&ElementData) -> f32) -> f32 {
        self.inner
            .read()
            .unwrap()
            .elements
            .get(element)
            .map(f)
            .unwrap_or(0.0)
    }

    // =========================================================================
    // Selections and filters
    // =========================================================================

    /// A selection holding exactly this element (empty if it is gone).
    pub fn select(&self, element: ElementId) -> Selection {
        if self.contains(element) {
            Selection::new(self.clone(), vec![element])
        } else {
            Selection::new(self.clone(), Vec::new())
        }
    }

    /// A selection holding the element registered under a string id.
    pub fn select_id(&self, id: &str) -> Selection {
        match self.element_by_id(id) {
            Some(element) => Selection::new(self.clone(), vec![element]),
            None => Selection::new(self.clone(), Vec::new()),
        }
    }

    /// A selection of the given elements, skipping any that are gone.
    pub fn select_all(&self, elements: impl IntoIterator<Item = ElementId>) -> Selection {
        let ids = elements.into_iter().filter(|&e| self.contains(e)).collect();
        Selection::new(self.clone(), ids)
    }

    /// Register a named element filter.
    pub fn register_filter<F>(&self, name: impl Into<String>, filter: F)
    where
        F: Fn(&Document, ElementId) -> bool + Send + Sync + 'static,
    {
        self.filters.register(name, filter);
    }

    pub(crate) fn filter_fn(&self, name: &str) -> Option<FilterFn> {
        self.filters.get(name)
    }

    /// Whether an element matches a registered filter. Unregistered names
    /// match nothing.
    pub fn matches_filter(&self, name: &str, element: ElementId) -> bool {
        match self.filter_fn(name) {
            Some(filter) => filter(self, element),
            None => false,
        }
    }

    /// Every element of the document (in document order) matching a
    /// registered filter.
    pub fn elements_matching(&self, name: &str) -> Selection {
        let Some(filter) = self.filter_fn(name) else {
            return Selection::new(self.clone(), Vec::new());
        };
        let ids = self
            .all_elements()
            .into_iter()
            .filter(|&element| filter(self, element))
            .collect();
        Selection::new(self.clone(), ids)
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// The scheduler animations against this document's elements run on.
    pub fn tween_scheduler(&self) -> &TweenScheduler {
        &self.tweens
    }

    /// Advance running animations by `dt_ms`, applying values to this
    /// document. Returns true while animations remain.
    pub fn tick(&self, dt_ms: f32) -> bool {
        self.tweens.tick(dt_ms, self)
    }
}

// ============================================================================
// Host primitive implementations
// ============================================================================

impl StyleRead for Document {
    fn computed_style(&self, element: ElementId, property: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap()
            .elements
            .get(element)?
            .styles
            .get(property)
            .cloned()
    }
}

impl GeometryRead for Document {
    fn scroll_extent(&self, element: ElementId, axis: Axis) -> f32 {
        self.read_axis(element, |data| *data.scroll_extent.get(axis))
    }

    fn visible_extent(&self, element: ElementId, axis: Axis) -> f32 {
        self.read_axis(element, |data| *data.visible_extent.get(axis))
    }

    fn outer_size(&self, element: ElementId, axis: Axis) -> f32 {
        self.read_axis(element, |data| *data.outer_size.get(axis))
    }

    /// Document offset derives from the declared layout offset minus every
    /// ancestor's current scroll position: scrolling a container moves the
    /// reported position of everything inside it, as it does in a real DOM.
    fn offset_coordinate(&self, element: ElementId, axis: Axis) -> f32 {
        let inner = self.inner.read().unwrap();
        let Some(data) = inner.elements.get(element) else {
            return 0.0;
        };
        let mut offset = *data.offset.get(axis);
        let mut current = data.parent;
        while let Some(id) = current {
            let Some(ancestor) = inner.elements.get(id) else {
                break;
            };
            offset -= *ancestor.scroll_position.get(axis);
            current = ancestor.parent;
        }
        offset
    }
}

impl ScrollAccess for Document {
    fn scroll_position(&self, element: ElementId, axis: Axis) -> f32 {
        self.read_axis(element, |data| *data.scroll_position.get(axis))
    }

    fn set_scroll_position(&self, element: ElementId, axis: Axis, value: f32) {
        let mut inner = self.inner.write().unwrap();
        if let Some(data) = inner.elements.get_mut(element) {
            data.scroll_position.set(axis, value);
        }
    }
}

impl AnimatedProperties for Document {
    fn animated_value(&self, element: ElementId, coordinate: ScrollCoordinate) -> f32 {
        self.scroll_position(element, coordinate.axis())
    }

    fn set_animated_value(&self, element: ElementId, coordinate: ScrollCoordinate, value: f32) {
        self.set_scroll_position(element, coordinate.axis(), value);
    }
}

impl AnimationQueues for Document {
    fn stop(&self, element: ElementId, queue: &str) {
        self.tweens.stop(element, queue);
    }

    fn animate(&self, element: ElementId, transition: Transition) {
        self.tweens.animate(element, transition);
    }

    fn dequeue(&self, element: ElementId, queue: &str) {
        self.tweens.dequeue(element, queue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::element;
    use scrollin_animation::Easing;

    #[test]
    fn test_append_and_traverse() {
        let doc = Document::new();
        let pane = doc.append(doc.root(), element()).unwrap();
        let inner = doc.append(pane, element()).unwrap();
        let item = doc.append(inner, element()).unwrap();

        assert_eq!(doc.parent(item), Some(inner));
        assert_eq!(doc.children(pane), vec![inner]);
        assert_eq!(doc.ancestors(item), vec![inner, pane, doc.root()]);
    }

    #[test]
    fn test_append_under_removed_parent_fails() {
        let doc = Document::new();
        let pane = doc.append(doc.root(), element()).unwrap();
        doc.remove(pane).unwrap();

        assert_eq!(
            doc.append(pane, element()).unwrap_err(),
            DomError::MissingParent
        );
    }

    #[test]
    fn test_remove_subtree_and_ids() {
        let doc = Document::new();
        let pane = doc.append(doc.root(), element()).unwrap();
        let item = doc.append(pane, element().id("item")).unwrap();

        doc.remove(pane).unwrap();

        assert!(!doc.contains(pane));
        assert!(!doc.contains(item));
        assert_eq!(doc.element_by_id("item"), None);
        assert_eq!(doc.remove(pane).unwrap_err(), DomError::MissingElement);
        assert_eq!(doc.remove(doc.root()).unwrap_err(), DomError::RemoveRoot);
    }

    #[test]
    fn test_styles_and_geometry() {
        let doc = Document::new();
        let pane = doc
            .append(
                doc.root(),
                element()
                    .overflow_y("auto")
                    .scroll_size(300.0, 1000.0)
                    .client_size(300.0, 200.0)
                    .scroll_position(0.0, 40.0),
            )
            .unwrap();

        assert_eq!(
            doc.computed_style(pane, "overflow-y").as_deref(),
            Some("auto")
        );
        assert_eq!(doc.computed_style(pane, "overflow-x"), None);
        assert_eq!(doc.scroll_extent(pane, Axis::Vertical), 1000.0);
        assert_eq!(doc.visible_extent(pane, Axis::Vertical), 200.0);
        assert_eq!(doc.scroll_position(pane, Axis::Vertical), 40.0);

        doc.set_style(pane, "overflow-y", "hidden").unwrap();
        assert_eq!(
            doc.computed_style(pane, "overflow-y").as_deref(),
            Some("hidden")
        );

        doc.set_scroll_extent(pane, Axis::Vertical, 1200.0).unwrap();
        assert_eq!(doc.scroll_extent(pane, Axis::Vertical), 1200.0);
    }

    #[test]
    fn test_reads_on_missing_element_are_neutral() {
        let doc = Document::new();
        let pane = doc.append(doc.root(), element().scroll_size(10.0, 10.0)).unwrap();
        doc.remove(pane).unwrap();

        assert_eq!(doc.scroll_extent(pane, Axis::Vertical), 0.0);
        assert_eq!(doc.computed_style(pane, "overflow-y"), None);
        assert!(doc.select(pane).is_empty());
    }

    #[test]
    fn test_document_order_matching() {
        let doc = Document::new();
        let a = doc.append(doc.root(), element().id("a")).unwrap();
        let b = doc.append(a, element().id("b")).unwrap();
        let c = doc.append(doc.root(), element().id("c")).unwrap();

        doc.register_filter("named", |doc: &Document, element| {
            doc.string_id(element).is_some()
        });

        assert_eq!(doc.all_elements(), vec![doc.root(), a, b, c]);
        assert_eq!(doc.elements_matching("named").ids(), &[a, b, c]);
        assert!(doc.elements_matching("unregistered").is_empty());
    }

    #[test]
    fn test_offset_tracks_ancestor_scroll() {
        let doc = Document::new();
        let pane = doc
            .append(doc.root(), element().offset(0.0, 100.0))
            .unwrap();
        let item = doc.append(pane, element().offset(0.0, 600.0)).unwrap();

        assert_eq!(doc.offset_coordinate(item, Axis::Vertical), 600.0);

        doc.set_scroll_position(pane, Axis::Vertical, 250.0);
        assert_eq!(doc.offset_coordinate(item, Axis::Vertical), 350.0);
        // The container itself only moves with *its* ancestors' scroll.
        assert_eq!(doc.offset_coordinate(pane, Axis::Vertical), 100.0);
    }

    #[test]
    fn test_tick_moves_scroll_position() {
        let doc = Document::new();
        let pane = doc
            .append(doc.root(), element().scroll_size(0.0, 400.0).client_size(0.0, 100.0))
            .unwrap();

        doc.animate(
            pane,
            Transition::new("q", 100, Easing::Linear).target(ScrollCoordinate::ScrollTop, 300.0),
        );
        doc.dequeue(pane, "q");

        doc.tick(50.0);
        assert!((doc.scroll_position(pane, Axis::Vertical) - 150.0).abs() < 1e-3);

        assert!(!doc.tick(50.0));
        assert_eq!(doc.scroll_position(pane, Axis::Vertical), 300.0);
    }
}
