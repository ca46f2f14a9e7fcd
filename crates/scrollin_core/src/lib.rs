//! Scrollin core
//!
//! The leaf crate of the workspace: the per-axis parameter table that every
//! other component iterates, the element id type, and the trait seams for
//! the primitives a host environment must supply (computed styles, geometry,
//! scroll offsets, animated property access).
//!
//! Nothing in this crate holds mutable state. The axis table is a process
//! lifetime constant; everything else is a trait.

pub mod axis;
pub mod host;

pub use axis::{Axis, AxisDescriptor, PerAxis, ScrollCoordinate, AXIS_TABLE};
pub use host::{AnimatedProperties, GeometryRead, ScrollAccess, StyleRead};

use slotmap::new_key_type;

new_key_type! {
    /// Stable identifier for an element in a host document.
    ///
    /// Issued by the host's element storage; a removed element's id is never
    /// reused for the life of that storage.
    pub struct ElementId;
}
