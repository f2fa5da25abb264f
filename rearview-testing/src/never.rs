use std::{fmt, marker::PhantomData};

use rearview::{Observer, Source, Subscription};

/// Create a source that never delivers anything.
///
/// Subscribing yields an active [`Subscription`] that can be cancelled like
/// any other, but no callback is ever invoked.
pub fn never<T, E>() -> Never<T, E> {
    Never { _phantom: PhantomData }
}

/// See [`never`].
#[derive(Clone, Copy)]
pub struct Never<T, E> {
    _phantom: PhantomData<fn() -> (T, E)>,
}

impl<T, E> fmt::Debug for Never<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Never").finish()
    }
}

impl<T, E> Source<T> for Never<T, E> {
    type Error = E;

    fn subscribe(&self, observer: Box<dyn Observer<T, E> + Send>) -> Subscription {
        // The observer would never be called, dropping it right away is
        // indistinguishable from keeping it.
        drop(observer);
        Subscription::new(|| {})
    }
}
