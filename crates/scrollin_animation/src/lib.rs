//! Scrollin animation engine
//!
//! Tick-driven property transitions on per-element named queues.
//!
//! # Features
//!
//! - **Eased transitions**: duration + easing over one or more scroll
//!   coordinates, completing at the exact target value
//! - **Named queues**: each (element, queue name) pair is its own ordered
//!   sequence of pending transitions, so one feature's animations never
//!   disturb another's on the same element
//! - **Cancellation**: `stop` discards the running transition mid-flight;
//!   `dequeue` starts the next pending one without waiting
//! - **Cooperative**: nothing runs until the host calls `tick`; no threads
//!
//! ```ignore
//! let tweens = TweenScheduler::new();
//! tweens.animate(container, Transition::new("scroll-in", 200, Easing::Linear)
//!     .target(ScrollCoordinate::ScrollTop, 480.0));
//! tweens.dequeue(container, "scroll-in");
//! while tweens.tick(16.0, &doc) {}
//! ```

pub mod easing;
pub mod scheduler;
pub mod transition;

pub use easing::Easing;
pub use scheduler::{AnimationQueues, TweenScheduler};
pub use transition::Transition;
