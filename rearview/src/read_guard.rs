use std::{fmt, ops};

use readlock::SharedReadGuard;

use crate::state::MirrorState;

/// A read guard for the current value of a mirror.
///
/// Note that as long as a `MirrorReadGuard` is kept alive, value deliveries
/// from the associated mirror's source are blocked.
#[must_use]
#[clippy::has_significant_drop]
pub struct MirrorReadGuard<'a, T> {
    inner: SharedReadGuard<'a, MirrorState<T>>,
}

impl<'a, T> MirrorReadGuard<'a, T> {
    pub(crate) fn new(inner: SharedReadGuard<'a, MirrorState<T>>) -> Self {
        Self { inner }
    }
}

impl<T: fmt::Debug> fmt::Debug for MirrorReadGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T> ops::Deref for MirrorReadGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.inner.get()
    }
}
