//! Transition descriptions
//!
//! A [`Transition`] is what callers hand to the scheduler: target values for
//! one or more scroll coordinates, a duration, an easing curve, and the name
//! of the queue it belongs to. The scheduler turns it into a running tween
//! when its queue slot comes up.

use smallvec::SmallVec;

use scrollin_core::ScrollCoordinate;

use crate::easing::Easing;

/// An animated property change toward absolute target values.
#[derive(Debug, Clone)]
pub struct Transition {
    pub(crate) targets: SmallVec<[(ScrollCoordinate, f32); 2]>,
    pub(crate) duration_ms: u32,
    pub(crate) easing: Easing,
    pub(crate) queue: String,
}

impl Transition {
    /// Create a transition on the named queue.
    ///
    /// Durations are floored to 1 ms; a zero-length tween would complete
    /// before its progress curve is ever sampled.
    pub fn new(queue: impl Into<String>, duration_ms: u32, easing: Easing) -> Self {
        Self {
            targets: SmallVec::new(),
            duration_ms: duration_ms.max(1),
            easing,
            queue: queue.into(),
        }
    }

    /// Add a coordinate target (builder pattern).
    pub fn target(mut self, coordinate: ScrollCoordinate, value: f32) -> Self {
        self.targets.push((coordinate, value));
        self
    }

    /// Queue this transition belongs to.
    pub fn queue(&self) -> &str {
        &self.queue
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Coordinate targets in insertion order.
    pub fn targets(&self) -> &[(ScrollCoordinate, f32)] {
        &self.targets
    }

    /// True when no coordinate target was added.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_floor() {
        let transition = Transition::new("q", 0, Easing::Linear);
        assert_eq!(transition.duration_ms(), 1);

        let transition = Transition::new("q", 400, Easing::Linear);
        assert_eq!(transition.duration_ms(), 400);
    }

    #[test]
    fn test_targets_accumulate() {
        let transition = Transition::new("q", 200, Easing::Linear)
            .target(ScrollCoordinate::ScrollTop, 480.0)
            .target(ScrollCoordinate::ScrollLeft, 20.0);

        assert_eq!(transition.targets().len(), 2);
        assert!(!transition.is_empty());
        assert_eq!(transition.targets()[0], (ScrollCoordinate::ScrollTop, 480.0));
    }
}
