//! Standard observer implementations.

pub mod announcer;
pub mod func;

pub use announcer::Announcer;
pub use func::{FnObserver, observer_fn};
