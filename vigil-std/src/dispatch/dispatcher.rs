//! Dispatcher: holds one behavior and forwards operations to it.

use crate::sinks::TracingSink;
use std::{borrow::Cow, fmt, sync::Arc};
use vigil_core::{Behavior, Operation, SharedSink, Sink};

const DEFAULT_ROLE: &str = "Tool";

/// Forwards operations to exactly one active behavior.
///
/// A dispatcher cannot exist without a behavior: the initial one is a
/// constructor argument, and [`set_behavior`](Self::set_behavior) only ever
/// replaces it. Every forwarded call reaches the behavior that is active at
/// the moment of the call.
///
/// `B` is usually either a closed enum such as [`Tool`](super::Tool) or
/// `Box<dyn Behavior>` for an open set of variants.
///
/// # Example
/// ```ignore
/// let mut cursor = Dispatcher::new(Tool::Selection);
/// cursor.primary_action();   // Selection Tool: Mouse down - Selecting area.
/// cursor.set_behavior(Tool::Pen);
/// cursor.primary_action();   // Pen Tool: Mouse down - Start drawing.
/// ```
pub struct Dispatcher<B: Behavior = Box<dyn Behavior>> {
    current: B,
    sink: SharedSink,
    role: Cow<'static, str>,
}

impl<B: Behavior> Dispatcher<B> {
    /// Create a dispatcher that writes diagnostics to [`TracingSink`].
    pub fn new(initial: B) -> Self {
        Self::builder(initial).build()
    }

    /// Start configuring a dispatcher around its initial behavior.
    pub fn builder(initial: B) -> DispatcherBuilder<B> {
        DispatcherBuilder::new(initial)
    }

    /// Replace the active behavior. The previous behavior is dropped.
    pub fn set_behavior(&mut self, behavior: B) {
        tracing::debug!(
            from = self.current.name(),
            to = behavior.name(),
            "switching behavior"
        );
        self.current = behavior;
        self.sink
            .emit(&format!("{} switched to {}", self.role, self.current.name()));
    }

    /// Forward the primary operation to the active behavior.
    pub fn primary_action(&self) {
        self.perform(Operation::Primary);
    }

    /// Forward the secondary operation to the active behavior.
    pub fn secondary_action(&self) {
        self.perform(Operation::Secondary);
    }

    /// Forward the given operation to the active behavior.
    pub fn perform(&self, operation: Operation) {
        tracing::debug!(behavior = self.current.name(), %operation, "forwarding");
        self.current.perform(operation, &*self.sink);
    }

    /// The active behavior.
    pub fn current(&self) -> &B {
        &self.current
    }

    /// Name of the active behavior.
    pub fn current_name(&self) -> &str {
        self.current.name()
    }

    /// The role label used in switch diagnostics.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Take the active behavior, consuming the dispatcher.
    pub fn into_inner(self) -> B {
        self.current
    }
}

impl Dispatcher<Box<dyn Behavior>> {
    /// Create a dispatcher over an open set of behaviors.
    pub fn boxed(initial: impl Behavior) -> Self {
        Self::new(Box::new(initial))
    }

    /// Box `behavior` and make it the active one.
    pub fn switch_to(&mut self, behavior: impl Behavior) {
        self.set_behavior(Box::new(behavior));
    }
}

impl<B: Behavior> fmt::Debug for Dispatcher<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("current", &self.current.name())
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Dispatcher`].
///
/// # Example
/// ```ignore
/// let cursor = Dispatcher::builder(Tool::Selection)
///     .sink(StdoutSink)
///     .role("Brush")
///     .build();
/// ```
pub struct DispatcherBuilder<B: Behavior> {
    initial: B,
    sink: Option<SharedSink>,
    role: Cow<'static, str>,
}

impl<B: Behavior> DispatcherBuilder<B> {
    /// Create a builder around the initial behavior.
    pub fn new(initial: B) -> Self {
        Self {
            initial,
            sink: None,
            role: Cow::Borrowed(DEFAULT_ROLE),
        }
    }

    /// Write diagnostics to `sink`.
    pub fn sink(mut self, sink: impl Sink) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Write diagnostics to an already shared sink.
    pub fn shared_sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the role label (`"{role} switched to {name}"`). Defaults to `Tool`.
    pub fn role(mut self, role: impl Into<Cow<'static, str>>) -> Self {
        self.role = role.into();
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Dispatcher<B> {
        let sink = self.sink.unwrap_or_else(|| Arc::new(TracingSink));
        tracing::debug!(initial = self.initial.name(), role = %self.role, "dispatcher created");
        Dispatcher {
            current: self.initial,
            sink,
            role: self.role,
        }
    }
}
