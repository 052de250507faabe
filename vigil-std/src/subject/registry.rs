//! Subject: ordered subscriber registry with synchronous broadcast.

use super::subscriber::Subscriber;
use parking_lot::RwLock;
use vigil_core::{Message, NotifyError, Observer, SubscriberId};

/// An ordered registry of subscribers that broadcasts payloads to them.
///
/// All methods take `&self`, so a subject can be shared behind an `Arc` and
/// mutated from inside an observer's `update`.
///
/// # Broadcast Semantics
///
/// [`notify`](Self::notify) takes a snapshot of the subscriber list and
/// releases the lock before calling any observer. Adds and removes made
/// while a broadcast is running apply to the next `notify`, not the one in
/// flight.
///
/// # Example
/// ```ignore
/// let subject = Subject::new();
/// let first = subject.subscribe(Announcer::new("Observer 1", sink.clone()));
/// let second = subject.subscribe(Announcer::new("Observer 2", sink.clone()));
///
/// subject.notify(&"New data is available!")?;
/// subject.remove(&first);
/// subject.notify(&"Another update!")?;
/// ```
pub struct Subject<P: Message> {
    subscribers: RwLock<Vec<Subscriber<P>>>,
}

impl<P: Message> Subject<P> {
    /// Create an empty subject.
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Append a subscriber. Adding the same handle twice delivers every
    /// payload to it twice.
    pub fn add(&self, subscriber: &Subscriber<P>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(subscriber.clone());
        tracing::debug!(
            id = %subscriber.id(),
            label = subscriber.label(),
            len = subscribers.len(),
            "subscriber added"
        );
    }

    /// Wrap an observer in a fresh handle, add it, and return the handle.
    pub fn subscribe<O: Observer<P>>(&self, observer: O) -> Subscriber<P> {
        let subscriber = Subscriber::new(observer);
        self.add(&subscriber);
        subscriber
    }

    /// Remove every entry sharing the handle's identity.
    ///
    /// Returns how many entries were removed; removing an absent handle is a
    /// no-op that returns 0.
    pub fn remove(&self, subscriber: &Subscriber<P>) -> usize {
        self.remove_id(subscriber.id())
    }

    /// Remove every entry with the given identity.
    pub fn remove_id(&self, id: SubscriberId) -> usize {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|s| s.id() != id);
        let removed = before - subscribers.len();
        tracing::debug!(%id, removed, len = subscribers.len(), "subscriber removed");
        removed
    }

    /// Broadcast a payload to every subscriber in insertion order.
    ///
    /// Returns the number of subscribers updated. The first observer error
    /// stops the broadcast and is returned as a [`NotifyError`]; later
    /// subscribers are not called.
    pub fn notify(&self, payload: &P) -> Result<usize, NotifyError> {
        let snapshot = self.subscribers();
        for subscriber in &snapshot {
            tracing::trace!(id = %subscriber.id(), label = subscriber.label(), "delivering update");
            if let Err(source) = subscriber.update(payload) {
                tracing::warn!(
                    id = %subscriber.id(),
                    label = subscriber.label(),
                    error = %source,
                    "subscriber failed, stopping broadcast"
                );
                return Err(NotifyError {
                    id: subscriber.id(),
                    label: subscriber.label().to_owned(),
                    source,
                });
            }
        }
        Ok(snapshot.len())
    }

    /// Whether any entry shares the handle's identity.
    pub fn contains(&self, subscriber: &Subscriber<P>) -> bool {
        self.subscribers.read().iter().any(|s| s == subscriber)
    }

    /// A snapshot of the current subscribers, in insertion order.
    pub fn subscribers(&self) -> Vec<Subscriber<P>> {
        self.subscribers.read().clone()
    }

    /// Number of entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Check if the subject has no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }

    /// Remove every subscriber.
    pub fn clear(&self) {
        self.subscribers.write().clear();
    }
}

impl<P: Message> Default for Subject<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingObserver, RecordingObserver};

    #[test]
    fn test_notify_in_insertion_order() {
        let log = RecordingObserver::<u32>::new();
        let subject = Subject::new();
        let a = Subscriber::with_label("a", log.tagged("a"));
        let b = Subscriber::with_label("b", log.tagged("b"));
        subject.add(&a);
        subject.add(&b);

        assert_eq!(subject.notify(&1).unwrap(), 2);
        assert_eq!(log.tagged_events(), vec![("a".to_string(), 1), ("b".to_string(), 1)]);
    }

    #[test]
    fn test_duplicates_and_remove_all() {
        let log = RecordingObserver::<u32>::new();
        let subject = Subject::new();
        let handle = Subscriber::new(log.clone());
        subject.add(&handle);
        subject.add(&handle);
        assert_eq!(subject.len(), 2);

        subject.notify(&5).unwrap();
        assert_eq!(log.events(), vec![5, 5]);

        assert_eq!(subject.remove(&handle), 2);
        assert!(subject.is_empty());
        assert_eq!(subject.remove(&handle), 0);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let subject = Subject::new();
        let kept = subject.subscribe(RecordingObserver::<u32>::new());
        let stranger = Subscriber::new(RecordingObserver::<u32>::new());

        assert_eq!(subject.remove(&stranger), 0);
        assert_eq!(subject.subscribers(), vec![kept]);
    }

    #[test]
    fn test_failure_stops_broadcast() {
        let log = RecordingObserver::<u32>::new();
        let subject = Subject::new();
        subject.subscribe(log.tagged("before"));
        let failing = subject.subscribe(FailingObserver::new("disk full"));
        subject.subscribe(log.tagged("after"));

        let err = subject.notify(&9).unwrap_err();
        assert_eq!(err.id, failing.id());
        assert_eq!(err.source.to_string(), "disk full");
        assert_eq!(log.tagged_events(), vec![("before".to_string(), 9)]);
    }

    #[test]
    fn test_empty_subject_notifies_nobody() {
        let subject = Subject::<u32>::default();
        assert_eq!(subject.notify(&0).unwrap(), 0);
    }
}
