use std::time::Duration;

use tracing::*;

use crate::errors::*;
use crate::prelude::*;
use crate::retry::do_with_retry;

#[derive(Debug, Error)]
pub enum PodWaitError {
    #[error("found {found} pods ({selector}), need at least {min_pods}")]
    NotEnoughPods { found: usize, selector: Selector, min_pods: usize },

    #[error("Pod {name} is not available, reason: {reason}, message: {message}")]
    PodNotAvailable { name: String, reason: String, message: String },
}

impl PodWaitError {
    pub fn not_enough_pods(found: usize, selector: &Selector, min_pods: usize) -> anyhow::Error {
        anyhow!(PodWaitError::NotEnoughPods { found, selector: selector.clone(), min_pods })
    }

    pub fn pod_not_available(pod: &corev1::Pod) -> anyhow::Error {
        let (reason, message) = match pod.status() {
            Ok(status) => (status.reason.clone().unwrap_or_default(), status.message.clone().unwrap_or_default()),
            Err(_) => Default::default(),
        };
        anyhow!(PodWaitError::PodNotAvailable { name: pod.name_any(), reason, message })
    }
}

// How many times we'll retry after the first attempt; this is plain integer division, so
// an interval that's zero or longer than the total wait gives a single attempt and no retries
pub fn retry_budget(sleep_duration: Duration, sleep_between_retries: Duration) -> usize {
    sleep_duration
        .as_nanos()
        .checked_div(sleep_between_retries.as_nanos())
        .map_or(0, |r| usize::try_from(r).unwrap_or(usize::MAX))
}

// Same as wait_until_pods_available_e, but fails the test instead of returning an error
pub async fn wait_until_pods_available<L: PodLister + ?Sized>(
    t: &dyn TestReporter,
    lister: &L,
    selector: &Selector,
    min_pods: usize,
    sleep_duration: Duration,
    sleep_between_retries: Duration,
) {
    if let Err(err) =
        wait_until_pods_available_e(t, lister, selector, min_pods, sleep_duration, sleep_between_retries).await
    {
        t.fail_now(&format!("{err:#}"));
    }
}

/// Wait until at least `min_pods` pods match `selector` and all of them are available (see
/// [`PodExt::is_available`]), polling every `sleep_between_retries` for up to `sleep_duration`.
///
/// Note that the availability check is trivially satisfied if nothing matches the selector;
/// set `min_pods` to something greater than zero if you need the pods to actually exist.
///
/// On failure the returned error carries the last attempt's error, so you can downcast it to
/// [`PodWaitError`] (or `kube::Error` if the list call itself failed).
#[instrument(skip_all, fields(selector = %selector, min_pods = min_pods))]
pub async fn wait_until_pods_available_e<L: PodLister + ?Sized>(
    t: &dyn TestReporter,
    lister: &L,
    selector: &Selector,
    min_pods: usize,
    sleep_duration: Duration,
    sleep_between_retries: Duration,
) -> EmptyResult {
    let retries = retry_budget(sleep_duration, sleep_between_retries);
    let description = format!("WaitUntilPodsAvailable({selector})");
    debug!(retries, "waiting for pods");

    let res = do_with_retry(t, &description, retries, sleep_between_retries, || {
        check_pods_available(lister, selector, min_pods)
    })
    .await;

    match res {
        Ok(message) => {
            t.log(&message);
            Ok(())
        },
        Err(err) => {
            t.log(&format!("Timed out waiting for pods ({selector}) to be available: {err:#}"));
            Err(err)
        },
    }
}

async fn check_pods_available<L: PodLister + ?Sized>(
    lister: &L,
    selector: &Selector,
    min_pods: usize,
) -> anyhow::Result<String> {
    let pods = lister.list_pods(selector).await?;
    if pods.len() < min_pods {
        return Err(PodWaitError::not_enough_pods(pods.len(), selector, min_pods));
    }

    if let Some(pod) = pods.iter().find(|pod| !pod.is_available()) {
        return Err(PodWaitError::pod_not_available(pod));
    }

    Ok(format!("Pods ({selector}) are now available."))
}
