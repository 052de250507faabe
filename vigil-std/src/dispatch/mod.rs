//! Behavior dispatch.
//!
//! A [`Dispatcher`] holds exactly one [`Behavior`](vigil_core::Behavior) and
//! forwards the primary and secondary operations to it. The behavior can be
//! swapped at any time with [`Dispatcher::set_behavior`]; there are no
//! automatic transitions.
//!
//! Behaviors come in three shapes:
//! - the closed [`Tool`] set, dispatched through a `match`
//! - any type implementing `Behavior`, boxed as `Box<dyn Behavior>`
//! - [`FnBehavior`], assembled from closures at runtime

pub mod dispatcher;
pub mod fn_behavior;
pub mod tool;

pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use fn_behavior::{FnBehavior, FnBehaviorBuilder};
pub use tool::Tool;
