use std::sync::{Arc, RwLock};

use readlock::SharedReadGuard;

use crate::{
    read_guard::MirrorReadGuard,
    source::{Observer, Source},
    state::MirrorState,
    subscription::Subscription,
};

/// A read-only mirror of the most recent value produced by a [`Source`].
///
/// A `Mirror` seeds itself with an initial value and subscribes to its source
/// once, at construction time. From then on, whatever the source delivers
/// becomes the current value, on whatever thread the source delivers it; the
/// current value can always be read back synchronously through
/// [`get`][Self::get] or [`read`][Self::read], without waiting for the next
/// delivery.
///
/// A mirror never fails and never panics on behalf of its source:
///
/// * If the source reports an error, the error is swallowed and the value
///   goes back to the initial one. Code that needs to know *that* the source
///   failed has to observe the source separately.
/// * If the source completes, the mirror keeps its last value.
///
/// The mirror exclusively owns its [`Subscription`]. Calling
/// [`unsubscribe`][Self::unsubscribe] (or dropping the mirror) releases the
/// registration with the source; from that point on the value is frozen.
#[derive(Debug)]
pub struct Mirror<T> {
    state: Arc<RwLock<MirrorState<T>>>,
    subscription: Subscription,
}

impl<T: Clone + Send + Sync + 'static> Mirror<T> {
    /// Create a new `Mirror` fed by the given source, with the given initial
    /// value.
    ///
    /// The initial value is also what the mirror falls back to if the source
    /// fails later, no matter how many values were delivered in between.
    pub fn new<S>(source: &S, initial: T) -> Self
    where
        S: Source<T> + ?Sized,
    {
        let state = Arc::new(RwLock::new(MirrorState::new(initial.clone())));
        let observer = MirrorObserver { state: Arc::clone(&state), initial };

        // The seed must be committed before subscribing: a source that
        // delivers synchronously from inside `subscribe` would otherwise
        // have its first value overwritten.
        let subscription = source.subscribe(Box::new(observer));

        Self { state, subscription }
    }

    /// Create a new `Mirror` with the `Default` value of its type as the
    /// initial value.
    ///
    /// Shorthand for `Mirror::new(source, T::default())`.
    pub fn with_default<S>(source: &S) -> Self
    where
        S: Source<T> + ?Sized,
        T: Default,
    {
        Self::new(source, T::default())
    }
}

impl<T> Mirror<T> {
    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read().clone()
    }

    /// Lock the current value for reading.
    ///
    /// Note that as long as the returned [`MirrorReadGuard`] is kept alive,
    /// deliveries from the source are blocked.
    pub fn read(&self) -> MirrorReadGuard<'_, T> {
        MirrorReadGuard::new(SharedReadGuard::from_inner(self.state.read().unwrap()))
    }

    /// Stop mirroring and release the registration with the source.
    ///
    /// This is synchronous: when it returns, no delivery can change the
    /// value anymore, and [`get`][Self::get] keeps returning whatever was
    /// current at this point. Calling it a second time, or dropping the
    /// mirror afterwards, is a no-op.
    pub fn unsubscribe(&self) {
        // Freeze first and let go of the state lock before cancelling; a
        // source's cancel action may block on an in-flight delivery that
        // itself needs the state lock.
        self.state.write().unwrap().freeze();
        self.subscription.unsubscribe();
    }
}

/// The observer half of a [`Mirror`]: stores every value it receives, and
/// resets the storage to the initial value if the source fails.
struct MirrorObserver<T> {
    state: Arc<RwLock<MirrorState<T>>>,
    initial: T,
}

impl<T: Clone, E> Observer<T, E> for MirrorObserver<T> {
    fn on_value(&mut self, value: T) {
        let _stored = self.state.write().unwrap().store(value);
        #[cfg(feature = "tracing")]
        if _stored {
            tracing::trace!("New value stored");
        } else {
            tracing::debug!("Value delivered after unsubscription, ignored");
        }
    }

    fn on_error(&mut self, _error: E) {
        // The failure is absorbed entirely; its one visible effect is the
        // value going back to the initial one.
        let _stored = self.state.write().unwrap().store(self.initial.clone());
        #[cfg(feature = "tracing")]
        if _stored {
            tracing::debug!("Source failed, mirror reset to its initial value");
        }
    }

    // No `on_complete` override: completion leaves the last value in place.
}
