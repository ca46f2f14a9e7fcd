//! Scrollin
//!
//! Scroll an element into view inside its nearest scrollable ancestor, with
//! block alignment, pixel margins, lazy mode, and animated transitions on a
//! private per-container queue. Also exposes the `scrollable` classifier as
//! a reusable named filter.
//!
//! # Example
//!
//! ```rust
//! use scrollin::prelude::*;
//!
//! let doc = Document::new();
//! let pane = doc
//!     .append(
//!         doc.root(),
//!         element()
//!             .overflow_y("auto")
//!             .scroll_size(300.0, 1000.0)
//!             .client_size(300.0, 200.0),
//!     )
//!     .unwrap();
//! doc.append(
//!     pane,
//!     element().id("row-42").outer_size(300.0, 50.0).offset(0.0, 500.0),
//! )
//! .unwrap();
//!
//! doc.select_id("row-42")
//!     .scroll_in(ScrollOptions::new().block(BlockAlign::Middle).behavior("smooth"));
//!
//! // The host's frame loop drives the transition to completion.
//! while doc.tick(16.0) {}
//! ```

pub mod classify;
pub mod execute;
pub mod options;
pub mod plan;

pub use classify::{is_scrollable, register_scrollable_filter, scrollable_ancestor, SCROLLABLE_FILTER};
pub use execute::execute;
pub use options::{BlockAlign, ResolvedOptions, ScrollArg, ScrollBehavior, ScrollOptions};
pub use plan::{plan, ScrollPlan, SCROLL_QUEUE};

use scrollin_dom::Selection;

/// Scroll the selection's first element into view inside its nearest
/// scrollable ancestor.
///
/// `arg` is `true` (align to start), `false` (align to end), a
/// [`ScrollOptions`] record, or `()` for the defaults. The same selection
/// is returned for chaining. With an empty selection or no scrollable
/// ancestor this is a silent no-op.
///
/// The call only queues the transition; the host's tick loop moves the
/// scroll position afterwards.
pub fn scroll_in(selection: &Selection, arg: impl Into<ScrollArg>) -> Selection {
    let options = ResolvedOptions::resolve(arg);

    let target = selection.first();
    let Some(target_id) = target.first_id() else {
        return selection.clone();
    };

    // The container is looked up fresh on every call; layout may have
    // changed since the last one.
    let Some(container_id) = scrollable_ancestor(&target).first_id() else {
        tracing::debug!("no scrollable ancestor for {:?}, nothing to scroll", target_id);
        return selection.clone();
    };

    let document = selection.document();
    let plan = plan::plan(document, target_id, container_id, &options);
    execute::execute(document, container_id, &plan);

    selection.clone()
}

/// Chaining form of [`scroll_in`].
pub trait ScrollInExt {
    fn scroll_in(&self, arg: impl Into<ScrollArg>) -> Selection;
}

impl ScrollInExt for Selection {
    fn scroll_in(&self, arg: impl Into<ScrollArg>) -> Selection {
        scroll_in(self, arg)
    }
}

pub mod prelude {
    //! Everything needed to build a document and scroll things into view.
    pub use crate::classify::{is_scrollable, register_scrollable_filter, SCROLLABLE_FILTER};
    pub use crate::options::{BlockAlign, ScrollArg, ScrollBehavior, ScrollOptions};
    pub use crate::{scroll_in, ScrollInExt};
    pub use scrollin_core::{Axis, ElementId, ScrollAccess};
    pub use scrollin_dom::{element, Document, ElementDecl, Selection};
}
