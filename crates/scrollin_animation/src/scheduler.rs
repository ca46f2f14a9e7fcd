//! Tween scheduler
//!
//! Owns every queued and running transition, keyed by element and queue
//! name. The host drives it with `tick(dt_ms, ..)` from its frame loop;
//! between ticks the scheduler is inert.
//!
//! Queue semantics follow the classic effects-queue model: `animate`
//! enqueues without starting (named queues are manual), `dequeue` promotes
//! the next pending transition into the running slot, `stop` discards the
//! running transition mid-flight and leaves pending entries alone, and a
//! transition that completes auto-advances its own queue.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use scrollin_core::{AnimatedProperties, ElementId, ScrollCoordinate};

use crate::easing::Easing;
use crate::transition::Transition;

/// The animation-queue seam consumed by scroll execution.
///
/// Implemented by [`TweenScheduler`] and, by delegation, by any host type
/// that embeds one.
pub trait AnimationQueues {
    /// Discard the transition currently running on the named queue, leaving
    /// the animated properties wherever this tick left them.
    fn stop(&self, element: ElementId, queue: &str);

    /// Append a transition to its named queue without starting it.
    fn animate(&self, element: ElementId, transition: Transition);

    /// Start the next pending transition on the named queue if none is
    /// running.
    fn dequeue(&self, element: ElementId, queue: &str);
}

// ============================================================================
// Tween state
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct TweenTrack {
    coordinate: ScrollCoordinate,
    /// Captured from the host on the first tick after activation
    start: f32,
    target: f32,
}

#[derive(Debug)]
struct Tween {
    tracks: SmallVec<[TweenTrack; 2]>,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
    /// Start values captured yet?
    started: bool,
}

impl Tween {
    fn from_transition(transition: &Transition) -> Self {
        Self {
            tracks: transition
                .targets()
                .iter()
                .map(|&(coordinate, target)| TweenTrack {
                    coordinate,
                    start: 0.0,
                    target,
                })
                .collect(),
            duration_ms: transition.duration_ms() as f32,
            elapsed_ms: 0.0,
            easing: transition.easing(),
            started: false,
        }
    }

    /// Advance by `dt_ms`, writing eased values through the host.
    ///
    /// Returns true when the tween has reached full duration. The final
    /// write is the exact target: easing curves are fixed at both endpoints.
    fn advance(&mut self, element: ElementId, dt_ms: f32, host: &dyn AnimatedProperties) -> bool {
        if !self.started {
            for track in &mut self.tracks {
                track.start = host.animated_value(element, track.coordinate);
            }
            self.started = true;
        }

        self.elapsed_ms += dt_ms;
        let progress = (self.elapsed_ms / self.duration_ms).min(1.0);
        let eased = self.easing.apply(progress);

        for track in &self.tracks {
            let value = track.start + (track.target - track.start) * eased;
            host.set_animated_value(element, track.coordinate, value);
        }

        self.elapsed_ms >= self.duration_ms
    }
}

#[derive(Debug, Default)]
struct QueueState {
    active: Option<Tween>,
    pending: VecDeque<Tween>,
}

impl QueueState {
    fn is_empty(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }
}

#[derive(Default)]
struct SchedulerInner {
    elements: FxHashMap<ElementId, FxHashMap<String, QueueState>>,
}

// ============================================================================
// Scheduler
// ============================================================================

/// Tick-driven scheduler for queued property transitions.
///
/// Cheap to clone; clones share the same queues.
#[derive(Clone, Default)]
pub struct TweenScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition to its named queue.
    ///
    /// Named queues never auto-start: follow up with [`dequeue`] (or wait
    /// for the queue's running transition to complete).
    ///
    /// [`dequeue`]: TweenScheduler::dequeue
    pub fn animate(&self, element: ElementId, transition: Transition) {
        if transition.is_empty() {
            tracing::trace!("ignoring transition with no targets");
            return;
        }

        let mut inner = self.inner.lock().unwrap();
        inner
            .elements
            .entry(element)
            .or_default()
            .entry(transition.queue().to_string())
            .or_default()
            .pending
            .push_back(Tween::from_transition(&transition));
    }

    /// Discard the transition currently running on the named queue.
    ///
    /// Animated properties stay wherever the last tick put them; no final
    /// value is written. Pending entries are untouched.
    pub fn stop(&self, element: ElementId, queue: &str) {
        let mut inner = self.inner.lock().unwrap();
        let Some(state) = inner
            .elements
            .get_mut(&element)
            .and_then(|queues| queues.get_mut(queue))
        else {
            return;
        };

        if state.active.take().is_some() {
            tracing::debug!("stopped running transition on queue '{}' of {:?}", queue, element);
        }
    }

    /// Start the next pending transition on the named queue if the running
    /// slot is free.
    pub fn dequeue(&self, element: ElementId, queue: &str) {
        let mut inner = self.inner.lock().unwrap();
        let Some(state) = inner
            .elements
            .get_mut(&element)
            .and_then(|queues| queues.get_mut(queue))
        else {
            return;
        };

        if state.active.is_none() {
            state.active = state.pending.pop_front();
        }
    }

    /// Advance all running transitions by `dt_ms`, writing values through
    /// the host's animated-property seam.
    ///
    /// Transitions that reach full duration write their exact target and
    /// auto-advance their queue. Returns true while anything is still
    /// running or queued.
    pub fn tick(&self, dt_ms: f32, host: &dyn AnimatedProperties) -> bool {
        let mut inner = self.inner.lock().unwrap();

        for (&element, queues) in inner.elements.iter_mut() {
            for (queue, state) in queues.iter_mut() {
                let Some(tween) = state.active.as_mut() else {
                    continue;
                };

                if tween.advance(element, dt_ms, host) {
                    tracing::debug!("transition complete on queue '{}' of {:?}", queue, element);
                    state.active = state.pending.pop_front();
                }
            }
            queues.retain(|_, state| !state.is_empty());
        }
        inner.elements.retain(|_, queues| !queues.is_empty());

        !inner.elements.is_empty()
    }

    /// True when a transition is running on the named queue.
    pub fn is_active(&self, element: ElementId, queue: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner
            .elements
            .get(&element)
            .and_then(|queues| queues.get(queue))
            .is_some_and(|state| state.active.is_some())
    }

    /// Number of pending (not yet started) transitions on the named queue.
    pub fn pending_len(&self, element: ElementId, queue: &str) -> usize {
        let inner = self.inner.lock().unwrap();
        inner
            .elements
            .get(&element)
            .and_then(|queues| queues.get(queue))
            .map(|state| state.pending.len())
            .unwrap_or(0)
    }

    /// True while any queue on any element has running or pending work.
    pub fn has_active_animations(&self) -> bool {
        !self.inner.lock().unwrap().elements.is_empty()
    }

    /// Drop every queue belonging to an element (on removal from the host).
    pub fn remove_element(&self, element: ElementId) {
        self.inner.lock().unwrap().elements.remove(&element);
    }
}

impl AnimationQueues for TweenScheduler {
    fn stop(&self, element: ElementId, queue: &str) {
        TweenScheduler::stop(self, element, queue);
    }

    fn animate(&self, element: ElementId, transition: Transition) {
        TweenScheduler::animate(self, element, transition);
    }

    fn dequeue(&self, element: ElementId, queue: &str) {
        TweenScheduler::dequeue(self, element, queue);
    }
}
