//! Scroll planning
//!
//! Pure geometry: given a target, its scrollable container, and resolved
//! options, decide per axis whether to scroll and to where. The resulting
//! plan is built once, consumed once by execution, and discarded.

use smallvec::SmallVec;

use scrollin_animation::Easing;
use scrollin_core::{Axis, ElementId, GeometryRead, ScrollAccess, ScrollCoordinate, AXIS_TABLE};

use crate::options::{BlockAlign, ResolvedOptions};

/// The private animation queue scroll transitions run on. Unrelated
/// animations on other queues of the same container are never touched.
pub const SCROLL_QUEUE: &str = "scroll-in";

/// Per-axis scroll targets plus the shared animation parameters.
#[derive(Debug, Clone)]
pub struct ScrollPlan {
    targets: SmallVec<[(ScrollCoordinate, f32); 2]>,
    pub duration_ms: u32,
    pub easing: Easing,
    pub queue: &'static str,
}

impl ScrollPlan {
    /// True when no axis needs scrolling.
    pub fn is_noop(&self) -> bool {
        self.targets.is_empty()
    }

    /// The planned coordinate targets, vertical first when present.
    pub fn targets(&self) -> &[(ScrollCoordinate, f32)] {
        &self.targets
    }

    /// The planned target for one axis, if that axis needs scrolling.
    pub fn target_for(&self, axis: Axis) -> Option<f32> {
        self.targets
            .iter()
            .find(|(coordinate, _)| coordinate.axis() == axis)
            .map(|&(_, value)| value)
    }
}

/// Compute the scroll plan for bringing `target` into view inside
/// `container`.
pub fn plan<H>(
    host: &H,
    target: ElementId,
    container: ElementId,
    options: &ResolvedOptions,
) -> ScrollPlan
where
    H: GeometryRead + ScrollAccess + ?Sized,
{
    let mut targets = SmallVec::new();

    for descriptor in AXIS_TABLE {
        let axis = descriptor.axis;
        let scroll_extent = host.scroll_extent(container, axis);
        let visible_extent = host.visible_extent(container, axis);

        // Nothing to scroll along this axis.
        if scroll_extent <= visible_extent {
            continue;
        }

        let scroll = host.scroll_position(container, axis);
        // Target position in the container's content coordinate space.
        let pos = host.offset_coordinate(target, axis) - host.offset_coordinate(container, axis)
            + scroll;
        let outer = host.outer_size(target, axis);

        // Lazy mode skips only when the target sits fully inside the
        // visible band, margin included on both edges.
        let must_scroll = !options.lazy
            || scroll > pos - options.margin
            || pos + options.margin + outer > scroll + visible_extent;
        if !must_scroll {
            tracing::trace!(
                "{:?}: target already visible at {} (scroll {}), lazy skip",
                axis,
                pos,
                scroll
            );
            continue;
        }

        let raw = match options.block {
            BlockAlign::Start => pos - options.margin,
            BlockAlign::End => pos + options.margin - (visible_extent - outer),
            BlockAlign::Middle => pos - options.margin - (visible_extent - outer) / 2.0,
        };
        let max_scroll = scroll_extent - visible_extent;
        let clamped = raw.clamp(0.0, max_scroll);

        tracing::trace!(
            "{:?}: pos {} -> target {} (raw {}, max {})",
            axis,
            pos,
            clamped,
            raw,
            max_scroll
        );
        targets.push((descriptor.scroll_coordinate, clamped));
    }

    ScrollPlan {
        targets,
        duration_ms: options.duration_ms,
        easing: Easing::Linear,
        queue: SCROLL_QUEUE,
    }
}
