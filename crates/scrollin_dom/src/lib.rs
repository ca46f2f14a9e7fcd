//! Scrollin host document
//!
//! An in-memory element tree implementing every primitive the scroll logic
//! consumes: computed styles, per-axis geometry, scroll offsets, ancestor
//! traversal, selections, and a registry of named element filters. It also
//! owns a tween scheduler, so animations queued against its elements run
//! when the host calls [`Document::tick`].
//!
//! Geometry is declared, not computed. This crate is a host binding layer,
//! not a layout engine: callers state each element's scroll extent, visible
//! extent, outer size, and document offset, and restate them when layout
//! changes.
//!
//! # Example
//!
//! ```rust
//! use scrollin_dom::{element, Document};
//!
//! let doc = Document::new();
//! let pane = doc
//!     .append(
//!         doc.root(),
//!         element()
//!             .style("overflow-y", "auto")
//!             .scroll_size(300.0, 1000.0)
//!             .client_size(300.0, 200.0),
//!     )
//!     .unwrap();
//! let item = doc
//!     .append(pane, element().id("row-12").outer_size(300.0, 50.0).offset(0.0, 500.0))
//!     .unwrap();
//!
//! assert_eq!(doc.parent(item), Some(pane));
//! assert_eq!(doc.select_id("row-12").first_id(), Some(item));
//! ```

pub mod document;
pub mod element;
pub mod error;
pub mod filter;
pub mod selection;

pub use document::Document;
pub use element::{element, ElementDecl};
pub use error::DomError;
pub use filter::{FilterFn, FilterRegistry};
pub use selection::Selection;
