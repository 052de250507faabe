//! Closure-backed observers.

use std::marker::PhantomData;
use vigil_core::{BoxError, Message, Observer};

/// An observer that calls a closure for every payload.
pub struct FnObserver<P, F> {
    label: String,
    f: F,
    _phantom: PhantomData<fn(&P)>,
}

/// Create an observer from a labelled closure.
///
/// # Example
///
/// ```rust,ignore
/// let audit = observer_fn("audit", |order: &Order| {
///     ledger.record(order.id)?;
///     Ok(())
/// });
/// subject.subscribe(audit);
/// ```
pub fn observer_fn<P, F>(label: impl Into<String>, f: F) -> FnObserver<P, F>
where
    P: Message,
    F: Fn(&P) -> Result<(), BoxError> + Send + Sync + 'static,
{
    FnObserver {
        label: label.into(),
        f,
        _phantom: PhantomData,
    }
}

impl<P, F> Observer<P> for FnObserver<P, F>
where
    P: Message,
    F: Fn(&P) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn update(&self, payload: &P) -> Result<(), BoxError> {
        (self.f)(payload)
    }

    fn label(&self) -> &str {
        &self.label
    }
}
