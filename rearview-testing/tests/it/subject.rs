use assert_matches::assert_matches;
use rearview::Source as _;
use rearview_testing::Subject;

use crate::{Event, Recorder};

#[test]
fn delivers_in_order() {
    let subject: Subject<i32, &str> = Subject::new();
    let (recorder, log) = Recorder::new();
    let _subscription = subject.subscribe(Box::new(recorder));

    subject.emit(1);
    subject.emit(2);
    subject.emit(3);

    assert_eq!(*log.lock().unwrap(), [Event::Value(1), Event::Value(2), Event::Value(3)]);
}

#[test]
fn fan_out() {
    let subject: Subject<i32, &str> = Subject::new();
    let (first, first_log) = Recorder::new();
    let (second, second_log) = Recorder::new();
    let _first_subscription = subject.subscribe(Box::new(first));
    let _second_subscription = subject.subscribe(Box::new(second));

    subject.emit(7);

    assert_eq!(*first_log.lock().unwrap(), [Event::Value(7)]);
    assert_eq!(*second_log.lock().unwrap(), [Event::Value(7)]);
}

#[test]
fn closes_on_error() {
    let subject: Subject<i32, &str> = Subject::new();
    let (recorder, log) = Recorder::new();
    let _subscription = subject.subscribe(Box::new(recorder));

    subject.emit(1);
    subject.error("boom");
    assert!(subject.is_closed());

    // Late events fall on the floor.
    subject.emit(2);
    subject.complete();

    assert_eq!(*log.lock().unwrap(), [Event::Value(1), Event::Error("boom")]);
}

#[test]
fn closes_on_completion() {
    let subject: Subject<i32, &str> = Subject::new();
    let (recorder, log) = Recorder::new();
    let _subscription = subject.subscribe(Box::new(recorder));

    subject.complete();
    assert!(subject.is_closed());

    subject.emit(1);
    subject.error("boom");

    assert_eq!(*log.lock().unwrap(), [Event::Complete]);
}

#[test]
fn replays_terminal_event() {
    let subject: Subject<i32, &str> = Subject::new();
    subject.error("boom");

    let (recorder, log) = Recorder::new();
    let subscription = subject.subscribe(Box::new(recorder));

    assert!(!subscription.is_active());
    assert_matches!(log.lock().unwrap().as_slice(), [Event::Error("boom")]);
}

#[test]
fn unsubscribed_observers_are_skipped() {
    let subject: Subject<i32, &str> = Subject::new();
    let (kept, kept_log) = Recorder::new();
    let (dropped, dropped_log) = Recorder::new();
    let _kept_subscription = subject.subscribe(Box::new(kept));
    let dropped_subscription = subject.subscribe(Box::new(dropped));

    subject.emit(1);
    dropped_subscription.unsubscribe();
    subject.emit(2);

    assert_eq!(*kept_log.lock().unwrap(), [Event::Value(1), Event::Value(2)]);
    assert_eq!(*dropped_log.lock().unwrap(), [Event::Value(1)]);
    assert_eq!(subject.observer_count(), 1);
}

#[test]
fn clones_share_observers() {
    let subject: Subject<i32, &str> = Subject::new();
    let (recorder, log) = Recorder::new();
    let _subscription = subject.subscribe(Box::new(recorder));

    let other = subject.clone();
    other.emit(5);

    assert_eq!(*log.lock().unwrap(), [Event::Value(5)]);
    assert_eq!(other.observer_count(), 1);
}
