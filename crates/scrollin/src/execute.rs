//! Plan execution
//!
//! Applies a scroll plan to the container through the animation-queue seam:
//! cancel whatever this system had in flight on its private queue, enqueue
//! the replacement transition, release the queue so it starts immediately.
//! Fire-and-forget: the transition progresses as the host ticks.

use scrollin_animation::{AnimationQueues, Transition};
use scrollin_core::ElementId;

use crate::plan::ScrollPlan;

/// Apply a plan to the container. A plan with no targets is a no-op.
///
/// Every plan travels the animation path, including 1 ms ones; there is no
/// separate instant-set branch.
pub fn execute<H>(host: &H, container: ElementId, plan: &ScrollPlan)
where
    H: AnimationQueues + ?Sized,
{
    if plan.is_noop() {
        tracing::trace!("empty scroll plan for {:?}, nothing to do", container);
        return;
    }

    let mut transition = Transition::new(plan.queue, plan.duration_ms, plan.easing);
    for &(coordinate, value) in plan.targets() {
        transition = transition.target(coordinate, value);
    }

    // Cancel-then-replace: the old transition's remaining frames are
    // discarded, never completed, and the new one starts without waiting
    // on the freed queue slot.
    host.stop(container, plan.queue);
    host.animate(container, transition);
    host.dequeue(container, plan.queue);

    tracing::debug!(
        "queued scroll transition for {:?}: {} target(s) over {} ms",
        container,
        plan.targets().len(),
        plan.duration_ms
    );
}
