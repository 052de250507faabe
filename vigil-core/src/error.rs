//! Error types for Vigil.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`VigilError`] - Top-level error type for all Vigil operations
//! - [`NotifyError`] - An observer failed while a subject was broadcasting
//! - [`BehaviorError`] - A behavior was assembled without all its operations

use crate::{behavior::Operation, identity::SubscriberId};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Vigil operations.
#[derive(Error, Debug)]
pub enum VigilError {
    /// An observer failed during broadcast.
    #[error("notify error: {0}")]
    Notify(#[from] NotifyError),

    /// A behavior could not be assembled.
    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// An observer's `update` failed during `notify`.
///
/// The subject stops at the failing subscriber; the original error is kept
/// as the [`source`](std::error::Error::source).
#[derive(Error, Debug)]
#[error("subscriber `{label}` ({id}) failed to handle update")]
pub struct NotifyError {
    /// Identity of the failing subscriber.
    pub id: SubscriberId,
    /// Diagnostic label of the failing subscriber.
    pub label: String,
    /// The error the observer returned.
    #[source]
    pub source: BoxError,
}

/// Errors raised while assembling a behavior.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BehaviorError {
    /// A behavior variant was built without one of its required operations.
    ///
    /// This signals a defect in the variant's definition, not a runtime
    /// condition to recover from.
    #[error("behavior `{variant}` does not implement the {operation} operation")]
    UnimplementedOperation {
        /// Name of the incomplete variant.
        variant: String,
        /// The missing operation.
        operation: Operation,
    },
}

impl From<BoxError> for VigilError {
    fn from(err: BoxError) -> Self {
        VigilError::Custom(err)
    }
}
