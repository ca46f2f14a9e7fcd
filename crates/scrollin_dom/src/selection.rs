//! Element selections
//!
//! An ordered set of elements plus the document they live in. Selections
//! are value-like: traversal methods return new selections and the
//! original is untouched, so call chains read naturally.

use scrollin_core::ElementId;

use crate::document::Document;

/// An ordered collection of elements in one document.
#[derive(Clone)]
pub struct Selection {
    document: Document,
    ids: Vec<ElementId>,
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection").field("ids", &self.ids).finish()
    }
}

impl Selection {
    pub(crate) fn new(document: Document, ids: Vec<ElementId>) -> Self {
        Self { document, ids }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.ids.iter().copied()
    }

    /// Selection reduced to its first element (empty stays empty).
    pub fn first(&self) -> Selection {
        Selection::new(
            self.document.clone(),
            self.ids.first().copied().into_iter().collect(),
        )
    }

    /// The first element's id, if any.
    pub fn first_id(&self) -> Option<ElementId> {
        self.ids.first().copied()
    }

    /// The distinct parents of the selected elements, in selection order.
    pub fn parent(&self) -> Selection {
        let mut parents = Vec::new();
        for id in &self.ids {
            if let Some(parent) = self.document.parent(*id) {
                if !parents.contains(&parent) {
                    parents.push(parent);
                }
            }
        }
        Selection::new(self.document.clone(), parents)
    }

    /// For each element, the closest of itself and its ancestors matching
    /// the predicate. Start from `.parent()` for ancestor-only semantics.
    pub fn closest<F>(&self, predicate: F) -> Selection
    where
        F: Fn(&Document, ElementId) -> bool,
    {
        let mut matches = Vec::new();
        for &id in &self.ids {
            let found = std::iter::once(id)
                .chain(self.document.ancestors(id))
                .find(|&candidate| predicate(&self.document, candidate));
            if let Some(found) = found {
                if !matches.contains(&found) {
                    matches.push(found);
                }
            }
        }
        Selection::new(self.document.clone(), matches)
    }

    /// `closest` against a registered named filter. An unregistered name
    /// matches nothing.
    pub fn closest_named(&self, filter: &str) -> Selection {
        match self.document.filter_fn(filter) {
            Some(filter) => self.closest(move |doc, element| filter(doc, element)),
            None => Selection::new(self.document.clone(), Vec::new()),
        }
    }

    /// Elements of this selection matching the predicate.
    pub fn filter<F>(&self, predicate: F) -> Selection
    where
        F: Fn(&Document, ElementId) -> bool,
    {
        let ids = self
            .ids
            .iter()
            .copied()
            .filter(|&id| predicate(&self.document, id))
            .collect();
        Selection::new(self.document.clone(), ids)
    }

    /// Elements of this selection matching a registered named filter.
    pub fn filter_named(&self, filter: &str) -> Selection {
        match self.document.filter_fn(filter) {
            Some(filter) => self.filter(move |doc, element| filter(doc, element)),
            None => Selection::new(self.document.clone(), Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::element;

    fn fixture() -> (Document, ElementId, ElementId, ElementId) {
        let doc = Document::new();
        let outer = doc.append(doc.root(), element().id("outer")).unwrap();
        let inner = doc.append(outer, element().id("inner")).unwrap();
        let leaf = doc.append(inner, element().id("leaf")).unwrap();
        (doc, outer, inner, leaf)
    }

    #[test]
    fn test_first_and_parent() {
        let (doc, outer, inner, leaf) = fixture();

        let selection = doc.select_all([leaf, inner]);
        assert_eq!(selection.first().ids(), &[leaf]);
        assert_eq!(selection.parent().ids(), &[inner, outer]);
        assert!(doc.select_id("missing").first().is_empty());
    }

    #[test]
    fn test_closest_starts_at_self() {
        let (doc, outer, inner, leaf) = fixture();

        // Matching itself wins over matching ancestors.
        let hit = doc
            .select(leaf)
            .closest(|doc, el| doc.string_id(el).as_deref() == Some("leaf"));
        assert_eq!(hit.ids(), &[leaf]);

        // Ancestor-only semantics via .parent().closest(..).
        let hit = doc
            .select(leaf)
            .parent()
            .closest(|doc, el| doc.string_id(el).is_some());
        assert_eq!(hit.ids(), &[inner]);

        let miss = doc.select(outer).parent().closest(|doc, el| {
            doc.string_id(el).as_deref() == Some("nothing")
        });
        assert!(miss.is_empty());
    }

    #[test]
    fn test_named_filters() {
        let (doc, _, inner, leaf) = fixture();
        doc.register_filter("inner-only", |doc: &Document, el| {
            doc.string_id(el).as_deref() == Some("inner")
        });

        assert_eq!(doc.select(leaf).closest_named("inner-only").ids(), &[inner]);
        assert!(doc.select(leaf).filter_named("inner-only").is_empty());
        assert!(doc.select(leaf).closest_named("unknown").is_empty());
    }
}
