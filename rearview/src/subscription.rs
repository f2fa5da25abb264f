use std::{fmt, sync::Mutex};

type CancelFn = Box<dyn FnOnce() + Send>;

/// A cancellable handle to an active registration with a [`Source`].
///
/// The handle owns the registration: cancelling it through
/// [`unsubscribe`][Self::unsubscribe] releases the observer from the source,
/// and dropping the handle does the same. Cancellation is synchronous and
/// idempotent – the cancel action supplied by the source runs at most once,
/// no matter how often or from how many threads `unsubscribe` is called.
///
/// [`Source`]: crate::Source
pub struct Subscription {
    cancel: Mutex<Option<CancelFn>>,
}

impl Subscription {
    /// Create a subscription that runs `cancel` when it is unsubscribed or
    /// dropped, whichever happens first.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self { cancel: Mutex::new(Some(Box::new(cancel))) }
    }

    /// Create a subscription with nothing left to cancel.
    ///
    /// Sources that terminate while `subscribe` is still running, or that
    /// never hold on to their observer in the first place, return this.
    pub fn empty() -> Self {
        Self { cancel: Mutex::new(None) }
    }

    /// Cancel the registration.
    ///
    /// The first call runs the source's cancel action; any further calls are
    /// no-ops. The cancel action is invoked after the internal lock is
    /// released, so it is free to take locks of its own.
    pub fn unsubscribe(&self) {
        let cancel = self.cancel.lock().unwrap().take();
        run_cancel(cancel);
    }

    /// Whether this handle still holds its cancel action, i.e. whether
    /// [`unsubscribe`][Self::unsubscribe] has run yet.
    ///
    /// This only reflects the handle itself. It does not know whether the
    /// source on the other end is still delivering values.
    pub fn is_active(&self) -> bool {
        self.cancel.lock().unwrap().is_some()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Like `unsubscribe`, except that a poisoned lock must not trigger a
        // second panic while unwinding.
        let cancel = match self.cancel.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        run_cancel(cancel);
    }
}

fn run_cancel(cancel: Option<CancelFn>) {
    if let Some(cancel) = cancel {
        #[cfg(feature = "tracing")]
        tracing::debug!("Subscription cancelled");
        cancel();
    }
}
