pub mod config;
pub mod constants;
pub mod errors;
pub mod k8s;
pub mod logging;
pub mod macros;
pub mod poller;
pub mod reporter;
pub mod retry;
pub mod selector;

pub mod prelude {
    pub use k8s_openapi::api::core::v1 as corev1;
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::ResourceExt;

    pub use crate::config::{
        ClusterOptions,
        WaitOptions,
    };
    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
    pub use crate::k8s::{
        KubePodLister,
        PodExt,
        PodLister,
    };
    pub use crate::poller::{
        PodWaitError,
        wait_until_pods_available,
        wait_until_pods_available_e,
    };
    #[cfg(any(test, feature = "mock"))]
    pub use crate::reporter::RecordingReporter;
    pub use crate::reporter::{
        TestReporter,
        TracingReporter,
    };
    pub use crate::selector::Selector;
}

#[cfg(test)]
mod tests;
