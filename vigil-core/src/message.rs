//! Message trait for broadcast payloads.

/// A marker trait for payloads that subjects broadcast.
///
/// Messages must be `Send + Sync + 'static` so subjects and observers can be
/// shared behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// struct PriceChanged { symbol: String, cents: u64 }
///
/// impl Message for PriceChanged {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Payloads broadcast by a Subject must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl Message for () {}
impl Message for bool {}
impl Message for char {}
impl Message for i8 {}
impl Message for i16 {}
impl Message for i32 {}
impl Message for i64 {}
impl Message for isize {}
impl Message for u8 {}
impl Message for u16 {}
impl Message for u32 {}
impl Message for u64 {}
impl Message for usize {}
impl Message for f32 {}
impl Message for f64 {}
impl Message for String {}
impl Message for &'static str {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}
impl<T: Message, E: Message> Message for Result<T, E> {}
