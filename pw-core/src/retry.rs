use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::*;

use crate::errors::*;
use crate::reporter::TestReporter;

// Marks an error that retrying can't fix; do_with_retry gives up as soon as it sees one and hands
// back the wrapped error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct FatalError(#[from] anyhow::Error);

impl FatalError {
    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum RetryError {
    #[error("'{description}' unsuccessful after {max_retries} retries")]
    MaxRetriesExceeded { description: String, max_retries: usize },
}

pub fn fatal(err: impl Into<anyhow::Error>) -> anyhow::Error {
    anyhow!(FatalError(err.into()))
}

pub fn is_fatal(err: &anyhow::Error) -> bool {
    err.downcast_ref::<FatalError>().is_some()
}

// Run `action` until it succeeds, at most `max_retries + 1` times, sleeping `sleep_between_retries`
// in between attempts (but not after the last one).  If every attempt fails, the last error is
// returned with a `RetryError::MaxRetriesExceeded` context attached, so callers can still
// downcast to whatever the action actually returned.
pub async fn do_with_retry<F, Fut>(
    t: &dyn TestReporter,
    description: &str,
    max_retries: usize,
    sleep_between_retries: Duration,
    mut action: F,
) -> anyhow::Result<String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<String>>,
{
    let mut attempt = 0;
    loop {
        t.log(description);
        let err = match action().await {
            Ok(output) => {
                debug!(attempt, "{description} succeeded");
                return Ok(output);
            },
            Err(err) => err,
        };

        let err = match err.downcast::<FatalError>() {
            Ok(FatalError(inner)) => {
                t.log(&format!("Returning due to fatal error: {inner}"));
                return Err(inner);
            },
            Err(err) => err,
        };

        if attempt >= max_retries {
            debug!(attempt, "{description} out of retries");
            return Err(err.context(RetryError::MaxRetriesExceeded { description: description.into(), max_retries }));
        }

        t.log(&format!(
            "{description} returned an error: {err}. Sleeping for {} and will try again.",
            humantime::format_duration(sleep_between_retries),
        ));
        sleep(sleep_between_retries).await;
        attempt += 1;
    }
}
