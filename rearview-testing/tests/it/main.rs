#![allow(missing_docs)]

use std::sync::{Arc, Mutex};

use rearview::Observer;

mod subject;

#[derive(Debug, Clone, PartialEq)]
enum Event<T, E> {
    Value(T),
    Error(E),
    Complete,
}

/// An observer that appends everything it sees to a shared log.
struct Recorder<T, E> {
    log: Arc<Mutex<Vec<Event<T, E>>>>,
}

impl<T, E> Recorder<T, E> {
    fn new() -> (Self, Arc<Mutex<Vec<Event<T, E>>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (Self { log: Arc::clone(&log) }, log)
    }
}

impl<T, E> Observer<T, E> for Recorder<T, E> {
    fn on_value(&mut self, value: T) {
        self.log.lock().unwrap().push(Event::Value(value));
    }

    fn on_error(&mut self, error: E) {
        self.log.lock().unwrap().push(Event::Error(error));
    }

    fn on_complete(&mut self) {
        self.log.lock().unwrap().push(Event::Complete);
    }
}
