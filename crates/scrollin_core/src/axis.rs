//! Per-axis parameter table
//!
//! The scroll logic is identical for both axes, only the parameters differ:
//! which CSS overflow property to read, which scroll coordinate to write,
//! and which geometry readings to dispatch. All components iterate
//! [`AXIS_TABLE`] instead of duplicating vertical/horizontal branches.

/// A scrollable axis of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Top-to-bottom (heights, `overflow-y`, scroll-top)
    Vertical,
    /// Left-to-right (widths, `overflow-x`, scroll-left)
    Horizontal,
}

/// The scroll coordinate written (and animated) along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollCoordinate {
    /// Vertical scroll offset of a container
    ScrollTop,
    /// Horizontal scroll offset of a container
    ScrollLeft,
}

impl ScrollCoordinate {
    /// The axis this coordinate moves along.
    pub fn axis(self) -> Axis {
        match self {
            ScrollCoordinate::ScrollTop => Axis::Vertical,
            ScrollCoordinate::ScrollLeft => Axis::Horizontal,
        }
    }
}

/// Parameters for one axis of the scroll logic.
///
/// Style reads stay keyed by CSS property name (hosts report computed styles
/// as strings); geometry reads dispatch on the [`Axis`] tag; scroll writes
/// and animations use the [`ScrollCoordinate`].
#[derive(Debug, Clone, Copy)]
pub struct AxisDescriptor {
    pub axis: Axis,
    /// CSS overflow property governing this axis
    pub overflow_property: &'static str,
    /// Coordinate written when scrolling this axis
    pub scroll_coordinate: ScrollCoordinate,
}

/// The fixed axis table: vertical first, then horizontal.
pub const AXIS_TABLE: [AxisDescriptor; 2] = [
    AxisDescriptor {
        axis: Axis::Vertical,
        overflow_property: "overflow-y",
        scroll_coordinate: ScrollCoordinate::ScrollTop,
    },
    AxisDescriptor {
        axis: Axis::Horizontal,
        overflow_property: "overflow-x",
        scroll_coordinate: ScrollCoordinate::ScrollLeft,
    },
];

/// A pair of values, one per axis.
///
/// Used by hosts to store per-axis geometry without vertical/horizontal
/// field duplication.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerAxis<T> {
    pub vertical: T,
    pub horizontal: T,
}

impl<T> PerAxis<T> {
    pub fn new(vertical: T, horizontal: T) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Horizontal => &mut self.horizontal,
        }
    }

    pub fn set(&mut self, axis: Axis, value: T) {
        *self.get_mut(axis) = value;
    }
}

impl<T: Copy> PerAxis<T> {
    /// Both axes set to the same value.
    pub fn splat(value: T) -> Self {
        Self {
            vertical: value,
            horizontal: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_table_order() {
        assert_eq!(AXIS_TABLE[0].axis, Axis::Vertical);
        assert_eq!(AXIS_TABLE[1].axis, Axis::Horizontal);
        assert_eq!(AXIS_TABLE[0].overflow_property, "overflow-y");
        assert_eq!(AXIS_TABLE[1].overflow_property, "overflow-x");
    }

    #[test]
    fn test_coordinate_axis_mapping() {
        for descriptor in AXIS_TABLE {
            assert_eq!(descriptor.scroll_coordinate.axis(), descriptor.axis);
        }
    }

    #[test]
    fn test_per_axis_access() {
        let mut pair = PerAxis::new(10.0_f32, 20.0);
        assert_eq!(*pair.get(Axis::Vertical), 10.0);
        assert_eq!(*pair.get(Axis::Horizontal), 20.0);

        pair.set(Axis::Horizontal, 5.0);
        assert_eq!(*pair.get(Axis::Horizontal), 5.0);
        assert_eq!(PerAxis::splat(1.0_f32).vertical, 1.0);
    }
}
