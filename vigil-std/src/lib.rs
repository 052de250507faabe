//! # vigil-std
//!
//! Standard implementations for the Vigil observer and behavior dispatch
//! library.
//!
//! This crate provides:
//! - **Broadcast**: [`Subject`] and identity-carrying [`Subscriber`] handles
//! - **Forwarding**: [`Dispatcher`], the closed [`Tool`] set, and
//!   closure-built [`FnBehavior`]s
//! - **Standard observers**: [`Announcer`], [`FnObserver`]
//! - **Standard sinks**: [`TracingSink`], [`StdoutSink`]
//! - **Testing utilities**: [`testing`]
//!
//! [`Subject`]: subject::Subject
//! [`Subscriber`]: subject::Subscriber
//! [`Dispatcher`]: dispatch::Dispatcher
//! [`Tool`]: dispatch::Tool
//! [`FnBehavior`]: dispatch::FnBehavior
//! [`Announcer`]: observers::Announcer
//! [`FnObserver`]: observers::FnObserver
//! [`TracingSink`]: sinks::TracingSink
//! [`StdoutSink`]: sinks::StdoutSink

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use vigil_core;

// Modules
pub mod dispatch;
pub mod observers;
pub mod sinks;
pub mod subject;
pub mod testing;
