//! Scrollable classification
//!
//! An element is scrollable on an axis when its overflow style permits
//! scrolling (`scroll` or `auto`) AND its content actually overflows the
//! visible band on that axis. The predicate holds for the element when it
//! holds for any axis.

use scrollin_core::{ElementId, GeometryRead, StyleRead, AXIS_TABLE};
use scrollin_dom::{Document, Selection};

/// Name the classifier registers under in a document's filter registry.
pub const SCROLLABLE_FILTER: &str = "scrollable";

/// Overflow values that permit scrolling, compared case-insensitively.
const SCROLLABLE_OVERFLOW: [&str; 2] = ["scroll", "auto"];

/// Whether an element can be scrolled on at least one axis.
pub fn is_scrollable<H>(host: &H, element: ElementId) -> bool
where
    H: StyleRead + GeometryRead + ?Sized,
{
    AXIS_TABLE.iter().any(|descriptor| {
        let Some(overflow) = host.computed_style(element, descriptor.overflow_property) else {
            return false;
        };
        SCROLLABLE_OVERFLOW.contains(&overflow.to_ascii_lowercase().as_str())
            && host.scroll_extent(element, descriptor.axis)
                > host.visible_extent(element, descriptor.axis)
    })
}

/// The nearest scrollable ancestor of a selection's elements, starting at
/// each element's immediate parent. Empty when nothing up to the root is
/// scrollable.
pub fn scrollable_ancestor(selection: &Selection) -> Selection {
    selection.parent().closest(is_scrollable::<Document>)
}

/// Expose the classifier as the reusable named filter
/// [`SCROLLABLE_FILTER`], so arbitrary collections can be filtered by it
/// independently of the scroll operation.
pub fn register_scrollable_filter(document: &Document) {
    document.register_filter(SCROLLABLE_FILTER, is_scrollable::<Document>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollin_dom::element;

    #[test]
    fn test_overflow_and_extent_both_required() {
        let doc = Document::new();
        let scrollable = doc
            .append(
                doc.root(),
                element().overflow_y("auto").scroll_size(0.0, 400.0).client_size(0.0, 200.0),
            )
            .unwrap();
        let visible_overflow = doc
            .append(
                doc.root(),
                element()
                    .overflow_y("visible")
                    .scroll_size(0.0, 400.0)
                    .client_size(0.0, 200.0),
            )
            .unwrap();
        let nothing_to_scroll = doc
            .append(
                doc.root(),
                element()
                    .overflow_y("scroll")
                    .scroll_size(0.0, 200.0)
                    .client_size(0.0, 200.0),
            )
            .unwrap();

        assert!(is_scrollable(&doc, scrollable));
        assert!(!is_scrollable(&doc, visible_overflow));
        assert!(!is_scrollable(&doc, nothing_to_scroll));
    }

    #[test]
    fn test_overflow_value_case_insensitive() {
        let doc = Document::new();
        let pane = doc
            .append(
                doc.root(),
                element().overflow_y("Auto").scroll_size(0.0, 400.0).client_size(0.0, 200.0),
            )
            .unwrap();

        assert!(is_scrollable(&doc, pane));
    }

    #[test]
    fn test_either_axis_suffices() {
        let doc = Document::new();
        let horizontal = doc
            .append(
                doc.root(),
                element()
                    .overflow_x("scroll")
                    .scroll_size(900.0, 100.0)
                    .client_size(300.0, 100.0),
            )
            .unwrap();

        assert!(is_scrollable(&doc, horizontal));
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let doc = Document::new();
        let outer = doc
            .append(
                doc.root(),
                element().overflow_y("auto").scroll_size(0.0, 2000.0).client_size(0.0, 500.0),
            )
            .unwrap();
        let inner = doc
            .append(
                outer,
                element().overflow_y("scroll").scroll_size(0.0, 800.0).client_size(0.0, 200.0),
            )
            .unwrap();
        let item = doc.append(inner, element()).unwrap();

        let container = scrollable_ancestor(&doc.select(item));
        assert_eq!(container.first_id(), Some(inner));

        // A scrollable target does not pick itself.
        let container = scrollable_ancestor(&doc.select(inner));
        assert_eq!(container.first_id(), Some(outer));
    }

    #[test]
    fn test_no_scrollable_ancestor() {
        let doc = Document::new();
        let pane = doc.append(doc.root(), element()).unwrap();
        let item = doc.append(pane, element()).unwrap();

        assert!(scrollable_ancestor(&doc.select(item)).is_empty());
    }

    #[test]
    fn test_registered_filter_matches_collections() {
        let doc = Document::new();
        let pane = doc
            .append(
                doc.root(),
                element().overflow_y("auto").scroll_size(0.0, 400.0).client_size(0.0, 200.0),
            )
            .unwrap();
        let plain = doc.append(doc.root(), element()).unwrap();

        register_scrollable_filter(&doc);

        assert_eq!(doc.elements_matching(SCROLLABLE_FILTER).ids(), &[pane]);
        assert!(doc.matches_filter(SCROLLABLE_FILTER, pane));
        assert!(!doc.matches_filter(SCROLLABLE_FILTER, plain));
    }
}
