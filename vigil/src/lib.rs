//! # vigil - Observer Registry and Swappable Behavior Dispatch
//!
//! `vigil` bundles two small, synchronous building blocks:
//!
//! - a [`Subject`] that broadcasts payloads to an ordered list of
//!   identity-carrying [`Subscriber`] handles, and
//! - a [`Dispatcher`] that holds one active [`Behavior`] and forwards
//!   operations to whichever behavior is active at call time.
//!
//! ## Quick Start (Broadcast)
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vigil::prelude::*;
//!
//! let sink: SharedSink = Arc::new(StdoutSink);
//! let subject = Subject::new();
//! let first = subject.subscribe(Announcer::new("Observer 1", sink.clone()));
//! subject.subscribe(Announcer::new("Observer 2", sink));
//!
//! subject.notify(&"New data is available!")?;
//! subject.remove(&first);
//! subject.notify(&"Another update!")?;
//! ```
//!
//! ## Quick Start (Dispatch)
//!
//! ```rust,ignore
//! use vigil::prelude::*;
//!
//! let mut cursor = Dispatcher::builder(Tool::Selection).sink(StdoutSink).build();
//! cursor.primary_action();
//! cursor.set_behavior(Tool::Pen);
//! cursor.primary_action();
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use vigil_core::{
    // Observer
    Adapt,
    // Behavior
    Behavior,
    // Error types
    BehaviorError,
    BoxError,
    Filter,
    // Message
    Message,
    NotifyError,
    Observer,
    Operation,
    // Diagnostics
    SharedSink,
    Sink,
    SubscriberId,
    VigilError,
};

// Broadcast
pub use vigil_std::subject::{Subject, Subscriber};

// Dispatch
pub use vigil_std::dispatch::{
    Dispatcher, DispatcherBuilder, FnBehavior, FnBehaviorBuilder, Tool,
};

/// Standard observer implementations.
pub mod observers {
    pub use vigil_std::observers::{Announcer, FnObserver, observer_fn};
}

/// Standard diagnostic sinks.
pub mod sinks {
    pub use vigil_std::sinks::{NullSink, StdoutSink, TracingSink};
}

/// Testing utilities.
pub mod testing {
    pub use vigil_std::testing::{
        CountingObserver, FailingObserver, ProbeBehavior, RecordingObserver, Transcript,
    };
}

/// Prelude module - common imports for Vigil.
///
/// # Usage
///
/// ```rust,ignore
/// use vigil::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Behavior, BoxError, Dispatcher, Message, Observer, Operation, SharedSink, Sink, Subject,
        Subscriber, Tool,
        observers::{Announcer, observer_fn},
        sinks::{StdoutSink, TracingSink},
    };
}
