#![allow(dead_code)]

use std::sync::{Arc, Weak};
use vigil::{
    BoxError, Message, Observer, SharedSink, Subject, Subscriber, SubscriberId,
    observers::Announcer, testing::Transcript,
};

// ============================================================================
// Fixtures
// ============================================================================

/// A transcript plus the same transcript as a shared sink.
pub fn transcript() -> (Transcript, SharedSink) {
    let transcript = Transcript::new();
    let sink: SharedSink = Arc::new(transcript.clone());
    (transcript, sink)
}

/// Two announcers labelled "Observer 1" and "Observer 2", not yet added.
pub fn two_announcers(sink: &SharedSink) -> (Subscriber<&'static str>, Subscriber<&'static str>) {
    (
        Subscriber::new(Announcer::new("Observer 1", sink.clone())),
        Subscriber::new(Announcer::new("Observer 2", sink.clone())),
    )
}

// ============================================================================
// Re-entrant Observers
// ============================================================================

/// Removes `target` from the subject while handling an update.
pub struct RemovingObserver<P: Message> {
    pub subject: Weak<Subject<P>>,
    pub target: SubscriberId,
}

impl<P: Message> Observer<P> for RemovingObserver<P> {
    fn update(&self, _payload: &P) -> Result<(), BoxError> {
        if let Some(subject) = self.subject.upgrade() {
            subject.remove_id(self.target);
        }
        Ok(())
    }
}

/// Adds `newcomer` to the subject while handling an update.
pub struct AddingObserver<P: Message> {
    pub subject: Weak<Subject<P>>,
    pub newcomer: Subscriber<P>,
}

impl<P: Message> Observer<P> for AddingObserver<P> {
    fn update(&self, _payload: &P) -> Result<(), BoxError> {
        if let Some(subject) = self.subject.upgrade() {
            subject.add(&self.newcomer);
        }
        Ok(())
    }
}
