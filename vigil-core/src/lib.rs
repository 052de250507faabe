//! # vigil-core
//!
//! Core traits for the Vigil observer and behavior dispatch library.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that only needs to *implement* observers or behaviors, without pulling in
//! the registry and dispatcher from `vigil-std`.
//!
//! # Two Capabilities
//!
//! ## Broadcast ([`Observer`])
//!
//! An observer receives every payload a subject broadcasts. Observers are
//! registered through identity-carrying handles, so the same observer value
//! can be added twice and removed by identity rather than by equality.
//!
//! - **Fallible**: `update` returns a [`BoxError`]; subjects propagate it
//! - **Composable**: `filter` and `adapt` build new observers from existing ones
//!
//! ## Forwarding ([`Behavior`])
//!
//! A behavior is one state of a dispatcher. The dispatcher holds exactly one
//! behavior and forwards its two operations to it. Both operations are
//! required trait methods, so a behavior that compiles is complete.
//!
//! # Diagnostics ([`Sink`])
//!
//! Both capabilities describe what they did as human-readable lines written
//! to a [`Sink`]. Where those lines end up (a `tracing` subscriber, stdout,
//! an in-memory transcript) is chosen by the caller.
//!
//! # Error Types
//!
//! - [`VigilError`] - Top-level error type
//! - [`NotifyError`] - An observer failed during broadcast
//! - [`BehaviorError`] - A behavior could not be assembled

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod behavior;
mod error;
mod identity;
mod message;
mod observer;
mod sink;

// Re-exports
pub use behavior::{Behavior, Operation};
pub use error::{BehaviorError, BoxError, NotifyError, VigilError};
pub use identity::SubscriberId;
pub use message::Message;
pub use observer::{Adapt, Filter, Observer};
pub use sink::{SharedSink, Sink};
