use rearview::SourceExt as _;
use rearview_testing::Subject;

#[test]
fn reset_on_error() {
    let subject: Subject<i32, &str> = Subject::new();
    let mirror = subject.mirror(10);

    subject.emit(1);
    subject.emit(2);
    assert_eq!(mirror.get(), 2);

    subject.error("oh no");
    assert_eq!(mirror.get(), 10);
}

#[test]
fn error_before_any_value() {
    let subject: Subject<i32, &str> = Subject::new();
    let mirror = subject.mirror(10);

    subject.error("oh no");
    assert_eq!(mirror.get(), 10);
}

#[test]
fn reads_after_failure() {
    let subject: Subject<String, &str> = Subject::new();
    let mirror = subject.mirror("initial".to_owned());

    subject.emit("ok".to_owned());
    subject.error("boom");

    // The mirror stays fully usable, reads just yield the initial value
    // again.
    assert_eq!(mirror.get(), "initial");
    assert_eq!(*mirror.read(), "initial");
    assert_eq!(mirror.get(), "initial");
}

#[test]
fn subscribe_after_failure() {
    let subject: Subject<i32, &str> = Subject::new();
    subject.emit(1);
    subject.error("boom");

    // The terminal error is replayed to the late subscriber; for a mirror
    // that is a reset, so it sits at its initial value.
    let mirror = subject.mirror(10);
    assert_eq!(mirror.get(), 10);
}
