use std::{fmt, marker::PhantomData};

use rearview::{Observer, Source, Subscription};

/// Create a source that completes right away.
///
/// Every observer gets `on_complete` called from inside `subscribe`, and
/// nothing else, ever.
pub fn empty<T, E>() -> Empty<T, E> {
    Empty { _phantom: PhantomData }
}

/// See [`empty`].
#[derive(Clone, Copy)]
pub struct Empty<T, E> {
    _phantom: PhantomData<fn() -> (T, E)>,
}

impl<T, E> fmt::Debug for Empty<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Empty").finish()
    }
}

impl<T, E> Source<T> for Empty<T, E> {
    type Error = E;

    fn subscribe(&self, mut observer: Box<dyn Observer<T, E> + Send>) -> Subscription {
        observer.on_complete();
        Subscription::empty()
    }
}
