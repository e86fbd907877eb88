mod reporter_test;

use std::time::Duration;

use assertables::*;
use pw_testutils::*;
use rstest::*;
use tokio::time::Instant;
use tracing_test::traced_test;

use crate::errors::*;
use crate::k8s::MockPodLister;
use crate::prelude::*;

const TIMEOUT: Duration = Duration::from_secs(30);
const INTERVAL: Duration = Duration::from_secs(5);

fn lister_returning(pods: Vec<corev1::Pod>, times: usize) -> MockPodLister {
    let mut lister = MockPodLister::new();
    lister
        .expect_list_pods()
        .withf(|sel| sel.label_selector == TEST_LABEL_SELECTOR)
        .times(times)
        .returning(move |_| Ok(pods.clone()));
    lister
}

// The paused test clock jumps straight to each timer deadline, so this should be exact, modulo
// the timer wheel's millisecond rounding
fn assert_elapsed(start: Instant, expected: Duration) {
    let elapsed = start.elapsed();
    assert!(elapsed >= expected && elapsed <= expected + Duration::from_millis(10), "elapsed: {elapsed:?}");
}
