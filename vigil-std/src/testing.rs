//! Testing utilities for Vigil.
//!
//! This module provides utilities to make testing observers, subjects and
//! dispatchers easier.
//!
//! # Features
//!
//! - [`Transcript`]: A sink that records every diagnostic line
//! - [`RecordingObserver`]: An observer that records every payload it receives
//! - [`CountingObserver`]: An observer that only counts deliveries
//! - [`FailingObserver`]: An observer whose `update` always fails
//! - [`ProbeBehavior`]: A behavior that records which operations were invoked

use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use vigil_core::{Behavior, BoxError, Message, Observer, Operation, Sink};

// ============================================================================
// Transcript
// ============================================================================

/// A sink that records every line it receives.
///
/// Clones share the same buffer, so one clone can be handed to the code
/// under test while another is inspected.
///
/// # Example
///
/// ```rust,ignore
/// let transcript = Transcript::new();
/// let mut cursor = Dispatcher::builder(Tool::Selection)
///     .sink(transcript.clone())
///     .build();
///
/// cursor.primary_action();
/// assert_eq!(transcript.lines(), ["Selection Tool: Mouse down - Selecting area."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Get the number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drain the recorded lines, leaving the transcript empty.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    /// Clear all recorded lines.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for Transcript {
    fn emit(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

/// An observer that records every payload it receives.
///
/// Recorders created with [`tagged`](Self::tagged) share the log of the
/// recorder they came from, which makes delivery order across several
/// subscribers easy to assert.
///
/// # Example
///
/// ```rust,ignore
/// let log = RecordingObserver::<u32>::new();
/// subject.subscribe(log.tagged("first"));
/// subject.subscribe(log.tagged("second"));
///
/// subject.notify(&1)?;
/// assert_eq!(log.tagged_events(), [("first".into(), 1), ("second".into(), 1)]);
/// ```
pub struct RecordingObserver<P: Clone> {
    tag: String,
    events: Arc<Mutex<Vec<(String, P)>>>,
}

impl<P: Clone> RecordingObserver<P> {
    /// Create a recorder with an empty log.
    pub fn new() -> Self {
        Self {
            tag: "recorder".to_owned(),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a recorder sharing this log under another tag.
    pub fn tagged(&self, tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            events: self.events.clone(),
        }
    }

    /// Get the recorded payloads.
    pub fn events(&self) -> Vec<P> {
        self.events.lock().iter().map(|(_, p)| p.clone()).collect()
    }

    /// Get the recorded payloads together with the tag that received them.
    pub fn tagged_events(&self) -> Vec<(String, P)> {
        self.events.lock().clone()
    }

    /// Get the number of recorded payloads.
    pub fn count(&self) -> usize {
        self.events.lock().len()
    }

    /// Clear the shared log.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<P: Clone> Default for RecordingObserver<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> Clone for RecordingObserver<P> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            events: self.events.clone(),
        }
    }
}

impl<P: Message + Clone> Observer<P> for RecordingObserver<P> {
    fn update(&self, payload: &P) -> Result<(), BoxError> {
        self.events.lock().push((self.tag.clone(), payload.clone()));
        Ok(())
    }

    fn label(&self) -> &str {
        &self.tag
    }
}

// ============================================================================
// Counting Observer
// ============================================================================

/// An observer that counts deliveries.
#[derive(Debug, Clone, Default)]
pub struct CountingObserver {
    count: Arc<AtomicUsize>,
}

impl CountingObserver {
    /// Create a new counting observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<P: Message> Observer<P> for CountingObserver {
    fn update(&self, _payload: &P) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Observer
// ============================================================================

/// An observer whose `update` always returns an error with the given message.
#[derive(Debug, Clone)]
pub struct FailingObserver {
    message: String,
}

impl FailingObserver {
    /// Create a failing observer.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<P: Message> Observer<P> for FailingObserver {
    fn update(&self, _payload: &P) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }

    fn label(&self) -> &str {
        "failing"
    }
}

// ============================================================================
// Probe Behavior
// ============================================================================

/// A behavior that records the operations forwarded to it.
///
/// Each call also emits `"{name}: {operation}"` on the sink.
#[derive(Debug, Clone)]
pub struct ProbeBehavior {
    name: String,
    calls: Arc<Mutex<Vec<Operation>>>,
}

impl ProbeBehavior {
    /// Create a probe with the given variant name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the operations received so far.
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().clone()
    }

    fn record(&self, operation: Operation, sink: &dyn Sink) {
        self.calls.lock().push(operation);
        sink.emit(&format!("{}: {operation}", self.name));
    }
}

impl Behavior for ProbeBehavior {
    fn name(&self) -> &str {
        &self.name
    }

    fn primary(&self, sink: &dyn Sink) {
        self.record(Operation::Primary, sink);
    }

    fn secondary(&self, sink: &dyn Sink) {
        self.record(Operation::Secondary, sink);
    }
}
