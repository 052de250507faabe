//! Identity-carrying subscriber handles.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};
use vigil_core::{BoxError, Message, Observer, SubscriberId};

/// A handle to an observer, carrying a unique identity and a label.
///
/// The caller owns the handle. A [`Subject`](super::Subject) stores a clone of
/// it, so removing the handle from a subject never drops the observer the
/// caller still holds.
///
/// Cloning a handle keeps its identity; building a second handle around the
/// same (or an equal) observer yields a new identity.
///
/// # Example
///
/// ```rust,ignore
/// let first = Subscriber::new(Announcer::new("Observer 1", sink.clone()));
/// let again = first.clone();
/// assert_eq!(first, again);
///
/// let other = Subscriber::new(Announcer::new("Observer 1", sink));
/// assert_ne!(first, other);
/// ```
pub struct Subscriber<P: Message> {
    id: SubscriberId,
    label: Arc<str>,
    observer: Arc<dyn Observer<P>>,
}

impl<P: Message> Subscriber<P> {
    /// Wraps an observer, labelled with [`Observer::label`].
    pub fn new<O: Observer<P>>(observer: O) -> Self {
        let label = Arc::from(observer.label());
        Self {
            id: SubscriberId::next(),
            label,
            observer: Arc::new(observer),
        }
    }

    /// Wraps an observer under an explicit label.
    pub fn with_label<O: Observer<P>>(label: impl Into<Arc<str>>, observer: O) -> Self {
        Self {
            id: SubscriberId::next(),
            label: label.into(),
            observer: Arc::new(observer),
        }
    }

    /// Wraps an already shared observer.
    pub fn from_shared(observer: Arc<dyn Observer<P>>) -> Self {
        Self {
            id: SubscriberId::next(),
            label: Arc::from(observer.label()),
            observer,
        }
    }

    /// The identity token of this handle.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// The diagnostic label of this handle.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The wrapped observer.
    pub fn observer(&self) -> &dyn Observer<P> {
        &*self.observer
    }

    /// Delivers one payload to the wrapped observer.
    pub fn update(&self, payload: &P) -> Result<(), BoxError> {
        self.observer.update(payload)
    }
}

impl<P: Message> Clone for Subscriber<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            label: Arc::clone(&self.label),
            observer: Arc::clone(&self.observer),
        }
    }
}

impl<P: Message> PartialEq for Subscriber<P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<P: Message> Eq for Subscriber<P> {}

impl<P: Message> Hash for Subscriber<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<P: Message> fmt::Debug for Subscriber<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq)]
    struct Named(&'static str);

    impl Observer<String> for Named {
        fn update(&self, _payload: &String) -> Result<(), BoxError> {
            Ok(())
        }

        fn label(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_clone_keeps_identity() {
        let handle = Subscriber::new(Named("a"));
        let cloned = handle.clone();
        assert_eq!(handle, cloned);
        assert_eq!(handle.id(), cloned.id());
        assert_eq!(cloned.observer().label(), "a");
    }

    #[test]
    fn test_equal_observers_have_distinct_identity() {
        let first = Subscriber::new(Named("a"));
        let second = Subscriber::new(Named("a"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_label_sources() {
        assert_eq!(Subscriber::new(Named("from observer")).label(), "from observer");
        assert_eq!(Subscriber::with_label("explicit", Named("x")).label(), "explicit");

        let shared: Arc<dyn Observer<String>> = Arc::new(Named("shared"));
        assert_eq!(Subscriber::from_shared(shared).label(), "shared");
    }
}
