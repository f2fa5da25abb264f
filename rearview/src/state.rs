/// Storage shared between a [`Mirror`][crate::Mirror] and the observer it
/// plants inside its source.
///
/// Every mutation goes through the methods here so that the `frozen` flag is
/// checked under the same lock that guards the value. That is what makes
/// unsubscription synchronous: once the flag is set, a delivery that is still
/// on its way can no longer commit a write.
#[derive(Debug)]
pub(crate) struct MirrorState<T> {
    /// The mirrored value.
    value: T,

    /// Set on unsubscription. A frozen state ignores all further writes.
    frozen: bool,
}

impl<T> MirrorState<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value, frozen: false }
    }

    /// Get a reference to the current value.
    pub(crate) fn get(&self) -> &T {
        &self.value
    }

    /// Store a new value.
    ///
    /// Returns whether the value was actually stored, i.e. whether the state
    /// was not frozen yet.
    pub(crate) fn store(&mut self, value: T) -> bool {
        if self.frozen {
            return false;
        }

        self.value = value;
        true
    }

    /// Freeze the state – ignore all writes from here on.
    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
    }
}
