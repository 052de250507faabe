//! Announcer: writes every payload it receives to a sink.

use std::fmt::Display;
use vigil_core::{BoxError, Message, Observer, SharedSink, Sink};

/// An observer that announces each update on a sink as
/// `"{label} received update: {payload}"`.
#[derive(Clone)]
pub struct Announcer {
    label: String,
    sink: SharedSink,
}

impl Announcer {
    /// Create an announcer writing to `sink`.
    pub fn new(label: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            label: label.into(),
            sink,
        }
    }
}

impl<P: Message + Display> Observer<P> for Announcer {
    fn update(&self, payload: &P) -> Result<(), BoxError> {
        self.sink
            .emit(&format!("{} received update: {payload}", self.label));
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Transcript;
    use std::sync::Arc;

    #[test]
    fn test_announces_with_label() {
        let transcript = Transcript::new();
        let announcer = Announcer::new("Observer 1", Arc::new(transcript.clone()));

        announcer.update(&"New data is available!").unwrap();
        announcer.update(&42u32).unwrap();

        assert_eq!(
            transcript.lines(),
            vec![
                "Observer 1 received update: New data is available!",
                "Observer 1 received update: 42",
            ]
        );
        assert_eq!(Observer::<u32>::label(&announcer), "Observer 1");
    }
}
