use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use rearview::{Observer, Source, Subscription};

/// A push-by-hand [`Source`].
///
/// A `Subject` has no behavior of its own; it delivers exactly the events
/// that test code pushes into it, synchronously, on the pushing thread:
///
/// - [`emit`][Self::emit] delivers a value to every current observer.
/// - [`error`][Self::error] and [`complete`][Self::complete] close the
///   subject for good. Later events are discarded, and observers that
///   subscribe afterwards get the terminal event replayed right away.
///
/// Cloning a `Subject` is cheap and yields a handle to the same set of
/// observers.
///
/// Events must not be pushed from inside an observer callback; doing so
/// deadlocks.
pub struct Subject<T, E> {
    inner: Arc<Mutex<SubjectCore<T, E>>>,
}

struct SubjectCore<T, E> {
    observers: Vec<ObserverEntry<T, E>>,
    terminal: Option<Terminal<E>>,
}

struct ObserverEntry<T, E> {
    observer: Box<dyn Observer<T, E> + Send>,
    alive: Arc<AtomicBool>,
}

enum Terminal<E> {
    Failed(E),
    Completed,
}

impl<T, E> Subject<T, E> {
    /// Create a new, open subject with no observers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SubjectCore { observers: Vec::new(), terminal: None })),
        }
    }

    /// Deliver a value to all current observers.
    ///
    /// Does nothing if the subject is already closed.
    pub fn emit(&self, value: T)
    where
        T: Clone,
    {
        let mut core = self.inner.lock().unwrap();
        if core.terminal.is_some() {
            return;
        }

        core.sweep();
        for entry in &mut core.observers {
            entry.observer.on_value(value.clone());
        }
    }

    /// Fail the subject.
    ///
    /// The error is delivered to all current observers, then the subject is
    /// closed.
    pub fn error(&self, error: E)
    where
        E: Clone,
    {
        let mut core = self.inner.lock().unwrap();
        if core.terminal.is_some() {
            return;
        }

        core.sweep();
        for entry in &mut core.observers {
            entry.observer.on_error(error.clone());
        }
        core.observers.clear();
        core.terminal = Some(Terminal::Failed(error));
    }

    /// Complete the subject.
    ///
    /// Like [`error`][Self::error], this closes the subject for good.
    pub fn complete(&self) {
        let mut core = self.inner.lock().unwrap();
        if core.terminal.is_some() {
            return;
        }

        core.sweep();
        for entry in &mut core.observers {
            entry.observer.on_complete();
        }
        core.observers.clear();
        core.terminal = Some(Terminal::Completed);
    }

    /// The number of live registrations.
    pub fn observer_count(&self) -> usize {
        let mut core = self.inner.lock().unwrap();
        core.sweep();
        core.observers.len()
    }

    /// Whether a terminal event was already delivered.
    pub fn is_closed(&self) -> bool {
        self.inner.lock().unwrap().terminal.is_some()
    }
}

impl<T, E> SubjectCore<T, E> {
    fn sweep(&mut self) {
        self.observers.retain(|entry| entry.alive.load(Ordering::Acquire));
    }
}

impl<T, E> Clone for Subject<T, E> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T, E> fmt::Debug for Subject<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject").finish_non_exhaustive()
    }
}

impl<T, E> Default for Subject<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E: Clone> Source<T> for Subject<T, E> {
    type Error = E;

    fn subscribe(&self, mut observer: Box<dyn Observer<T, E> + Send>) -> Subscription {
        let mut core = self.inner.lock().unwrap();
        match &core.terminal {
            Some(Terminal::Failed(error)) => {
                let error = error.clone();
                // Replay outside the lock, the observer may call back into
                // the subject's owner.
                drop(core);
                observer.on_error(error);
                Subscription::empty()
            }
            Some(Terminal::Completed) => {
                drop(core);
                observer.on_complete();
                Subscription::empty()
            }
            None => {
                let alive = Arc::new(AtomicBool::new(true));
                core.observers.push(ObserverEntry { observer, alive: Arc::clone(&alive) });

                // Cancellation only flips the flag, without taking the
                // subject lock. The entry is swept on the next delivery.
                Subscription::new(move || alive.store(false, Ordering::Release))
            }
        }
    }
}
