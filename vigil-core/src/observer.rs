//! # Broadcast Capability (Observer)
//!
//! An observer is the receiving end of a subject's broadcast. The subject
//! calls [`Observer::update`] once per `notify`, in registration order,
//! handing every observer the same payload.
//!
//! Observers compose the same way pipeline stages do: [`Observer::filter`]
//! gates payloads before they reach the inner observer, and
//! [`Observer::adapt`] maps a payload of one type into the type the inner
//! observer understands.

use crate::{error::BoxError, message::Message};
use std::{marker::PhantomData, sync::Arc};

/// Receives payloads broadcast by a subject.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Observer` of `{P}`",
    label = "missing `Observer` implementation",
    note = "Observers must implement the `update` method to receive `{P}`."
)]
pub trait Observer<P: Message>: Send + Sync + 'static {
    /// Called once for every payload the subject broadcasts.
    ///
    /// An error stops the broadcast and is returned to the caller of
    /// `notify`.
    fn update(&self, payload: &P) -> Result<(), BoxError>;

    /// Label used in diagnostics when no explicit label is given.
    fn label(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Only forwards payloads for which `predicate` returns `true`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        Filter {
            observer: self,
            predicate,
        }
    }

    /// Observes payloads of another type by mapping each one into `P`.
    fn adapt<In, F>(self, mapper: F) -> Adapt<Self, F, P>
    where
        Self: Sized,
        In: Message,
        F: Fn(&In) -> P + Send + Sync + 'static,
    {
        Adapt {
            observer: self,
            mapper,
            _phantom: PhantomData,
        }
    }
}

impl<P: Message, O: Observer<P> + ?Sized> Observer<P> for Box<O> {
    fn update(&self, payload: &P) -> Result<(), BoxError> {
        (**self).update(payload)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

impl<P: Message, O: Observer<P> + ?Sized> Observer<P> for Arc<O> {
    fn update(&self, payload: &P) -> Result<(), BoxError> {
        (**self).update(payload)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

/// Observer returned by [`Observer::filter`].
pub struct Filter<O, F> {
    observer: O,
    predicate: F,
}

impl<P, O, F> Observer<P> for Filter<O, F>
where
    P: Message,
    O: Observer<P>,
    F: Fn(&P) -> bool + Send + Sync + 'static,
{
    fn update(&self, payload: &P) -> Result<(), BoxError> {
        if (self.predicate)(payload) {
            self.observer.update(payload)
        } else {
            Ok(())
        }
    }

    fn label(&self) -> &str {
        self.observer.label()
    }
}

/// Observer returned by [`Observer::adapt`].
pub struct Adapt<O, F, Out> {
    observer: O,
    mapper: F,
    _phantom: PhantomData<fn() -> Out>,
}

impl<In, Out, O, F> Observer<In> for Adapt<O, F, Out>
where
    In: Message,
    Out: Message,
    O: Observer<Out>,
    F: Fn(&In) -> Out + Send + Sync + 'static,
{
    fn update(&self, payload: &In) -> Result<(), BoxError> {
        self.observer.update(&(self.mapper)(payload))
    }

    fn label(&self) -> &str {
        self.observer.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Collect(Arc<Mutex<Vec<String>>>);

    impl Observer<String> for Collect {
        fn update(&self, payload: &String) -> Result<(), BoxError> {
            self.0.lock().unwrap().push(payload.clone());
            Ok(())
        }

        fn label(&self) -> &str {
            "collect"
        }
    }

    #[test]
    fn test_filter_skips_rejected_payloads() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let observer = Collect(seen.clone()).filter(|p: &String| p.starts_with('!'));

        observer.update(&"!ping".to_string()).unwrap();
        observer.update(&"pong".to_string()).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["!ping".to_string()]);
        assert_eq!(observer.label(), "collect");
    }

    #[test]
    fn test_adapt_maps_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let observer = Collect(seen.clone()).adapt(|n: &u32| format!("n={n}"));

        observer.update(&7).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["n=7".to_string()]);
    }

    #[test]
    fn test_default_label_is_type_name() {
        struct Quiet;
        impl Observer<()> for Quiet {
            fn update(&self, _payload: &()) -> Result<(), BoxError> {
                Ok(())
            }
        }

        assert!(Quiet.label().ends_with("Quiet"));
        let shared: Arc<dyn Observer<()>> = Arc::new(Quiet);
        assert!(shared.label().ends_with("Quiet"));
    }
}
