use async_trait::async_trait;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use tracing::*;

use crate::prelude::*;
use crate::retry::fatal;

// The read-only query the poller runs on every attempt.  Implementations decide which of their
// errors are worth retrying: anything wrapped with `retry::fatal` stops the poll immediately.
#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait PodLister {
    async fn list_pods(&self, selector: &Selector) -> anyhow::Result<Vec<corev1::Pod>>;
}

#[derive(Clone)]
pub struct KubePodLister {
    api: kube::Api<corev1::Pod>,
}

impl KubePodLister {
    // With no namespace we fall back to the client's default, i.e., whatever the kubeconfig
    // context (or in-cluster service account) says
    pub fn new(client: kube::Client, namespace: Option<&str>) -> KubePodLister {
        let api = match namespace {
            Some(ns) => kube::Api::namespaced(client, ns),
            None => kube::Api::default_namespaced(client),
        };
        KubePodLister { api }
    }
}

#[async_trait]
impl PodLister for KubePodLister {
    async fn list_pods(&self, selector: &Selector) -> anyhow::Result<Vec<corev1::Pod>> {
        debug!("listing pods ({selector})");
        match self.api.list(&selector.list_params()).await {
            Ok(pod_list) => Ok(pod_list.items),
            Err(err) if is_non_retryable(&err) => {
                warn!("pod list failed with non-retryable error: {err}");
                Err(fatal(err))
            },
            Err(err) => Err(err.into()),
        }
    }
}

// Malformed selectors and auth failures will fail the same way every time, so there's no point
// in burning the rest of the wait budget on them
fn is_non_retryable(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if NON_RETRYABLE_STATUS_CODES.contains(&resp.code))
}
