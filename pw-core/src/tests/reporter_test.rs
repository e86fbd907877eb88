use super::*;
use crate::logging;

#[rstest]
fn test_tracing_reporter_current() {
    assert_contains!(TracingReporter::current().name(), "test_tracing_reporter_current");
}

#[rstest]
#[traced_test]
fn test_tracing_reporter_log() {
    let t = TracingReporter::new("some-test");
    t.log("hello there");
    assert!(logs_contain("hello there"));
    assert!(logs_contain("some-test"));
}

#[rstest]
#[should_panic(expected = "some-test: it broke")]
fn test_tracing_reporter_fail_now() {
    TracingReporter::new("some-test").fail_now("it broke");
}

#[rstest]
fn test_logging_setup_for_tests_idempotent() {
    logging::setup_for_tests();
    logging::setup_for_tests();
}

#[rstest]
fn test_recording_reporter_log() {
    let t = RecordingReporter::new();
    t.log("first");
    t.log("second");
    assert_eq!(t.lines(), vec!["first", "second"]);
}

#[rstest]
#[should_panic(expected = "it broke")]
fn test_recording_reporter_fail_now() {
    RecordingReporter::new().fail_now("it broke");
}
