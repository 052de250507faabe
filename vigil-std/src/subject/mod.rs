//! Broadcast registry.
//!
//! A [`Subject`] keeps subscriber handles in insertion order and hands every
//! payload to each of them. Handles are compared by identity
//! ([`SubscriberId`](vigil_core::SubscriberId)), never by observer value.

pub mod registry;
pub mod subscriber;

pub use registry::Subject;
pub use subscriber::Subscriber;
