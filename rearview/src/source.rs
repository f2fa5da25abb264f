use crate::{Mirror, Subscription};

/// A push-based producer of values.
///
/// This is the contract a [`Mirror`] consumes; `rearview` does not provide
/// production sources of its own. A source delivers zero or more values to a
/// registered [`Observer`], optionally followed by exactly one terminal
/// callback: [`on_error`][Observer::on_error] if it failed, or
/// [`on_complete`][Observer::on_complete] if it ran out of values.
///
/// Sources must deliver callbacks for one registration non-concurrently and
/// in emission order, and must not deliver anything after a terminal
/// callback. They are free to call back from whatever thread they like,
/// including synchronously from inside [`subscribe`][Self::subscribe].
pub trait Source<T> {
    /// The error type the source may fail with.
    type Error;

    /// Register an observer with this source.
    ///
    /// The returned [`Subscription`] releases the registration when it is
    /// cancelled or dropped.
    fn subscribe(&self, observer: Box<dyn Observer<T, Self::Error> + Send>) -> Subscription;
}

/// The receiving half of a [`Source`] registration.
pub trait Observer<T, E> {
    /// The source produced a new value.
    fn on_value(&mut self, value: T);

    /// The source failed. Terminal – nothing may be delivered afterwards.
    fn on_error(&mut self, error: E);

    /// The source finished without an error. Terminal.
    ///
    /// Empty by default since many observers don't care about the difference
    /// between "no more values" and "no new value right now".
    fn on_complete(&mut self) {}
}

/// Extension trait for [`Source`].
pub trait SourceExt<T>: Source<T> {
    /// Mirror this source's latest value into a read-anytime cell.
    ///
    /// Shorthand for [`Mirror::new`].
    fn mirror(&self, initial: T) -> Mirror<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        Mirror::new(self, initial)
    }
}

impl<S, T> SourceExt<T> for S where S: Source<T> + ?Sized {}
