use std::{
    collections::VecDeque,
    fmt,
    sync::{Arc, Mutex},
};

use rearview::{Observer, Source, Subscription};

use crate::Subject;

/// A [`Subject`] that holds events back until it is driven.
///
/// Instead of delivering synchronously, a `DeferredSubject` parks every
/// pushed event in a queue. Nothing reaches the observers until test code
/// calls [`drive_one`][Self::drive_one] or [`drive`][Self::drive]. This
/// makes it easy to test the window between an event being produced and it
/// being delivered.
pub struct DeferredSubject<T, E> {
    subject: Subject<T, E>,
    queue: Arc<Mutex<VecDeque<QueuedEvent<T, E>>>>,
}

enum QueuedEvent<T, E> {
    Value(T),
    Error(E),
    Complete,
}

impl<T, E> DeferredSubject<T, E> {
    /// Create a new deferred subject with an empty queue.
    pub fn new() -> Self {
        Self { subject: Subject::new(), queue: Arc::new(Mutex::new(VecDeque::new())) }
    }

    /// Queue a value.
    pub fn emit(&self, value: T) {
        self.queue.lock().unwrap().push_back(QueuedEvent::Value(value));
    }

    /// Queue an error.
    pub fn error(&self, error: E) {
        self.queue.lock().unwrap().push_back(QueuedEvent::Error(error));
    }

    /// Queue completion.
    pub fn complete(&self) {
        self.queue.lock().unwrap().push_back(QueuedEvent::Complete);
    }

    /// The number of live registrations.
    pub fn observer_count(&self) -> usize {
        self.subject.observer_count()
    }
}

impl<T: Clone, E: Clone> DeferredSubject<T, E> {
    /// Deliver the oldest queued event, if any.
    ///
    /// Returns whether an event was drained from the queue. Events queued
    /// after a terminal one are drained but discarded, like on [`Subject`].
    pub fn drive_one(&self) -> bool {
        // Pop first so that the queue is not locked while observer
        // callbacks run.
        let event = self.queue.lock().unwrap().pop_front();
        match event {
            Some(QueuedEvent::Value(value)) => self.subject.emit(value),
            Some(QueuedEvent::Error(error)) => self.subject.error(error),
            Some(QueuedEvent::Complete) => self.subject.complete(),
            None => return false,
        }
        true
    }

    /// Deliver all queued events, in order.
    ///
    /// Returns the number of events drained from the queue.
    pub fn drive(&self) -> usize {
        let mut delivered = 0;
        while self.drive_one() {
            delivered += 1;
        }
        delivered
    }
}

impl<T, E> Clone for DeferredSubject<T, E> {
    fn clone(&self) -> Self {
        Self { subject: self.subject.clone(), queue: Arc::clone(&self.queue) }
    }
}

impl<T, E> fmt::Debug for DeferredSubject<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSubject").finish_non_exhaustive()
    }
}

impl<T, E> Default for DeferredSubject<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E: Clone> Source<T> for DeferredSubject<T, E> {
    type Error = E;

    fn subscribe(&self, observer: Box<dyn Observer<T, E> + Send>) -> Subscription {
        self.subject.subscribe(observer)
    }
}
