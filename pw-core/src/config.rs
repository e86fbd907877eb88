use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};
use serde::{
    Deserialize,
    Serialize,
};
use tracing::*;

use crate::prelude::*;

// Which cluster to talk to and where to look for pods.  Everything is optional; with nothing
// set we use the same inference rules as kubectl (KUBECONFIG, ~/.kube/config, then the
// in-cluster service account).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterOptions {
    pub kubeconfig_path: Option<PathBuf>,
    pub context: Option<String>,
    pub namespace: Option<String>,
}

impl ClusterOptions {
    pub async fn client(&self) -> anyhow::Result<kube::Client> {
        let kube_opts = KubeConfigOptions { context: self.context.clone(), ..Default::default() };
        let config = match (&self.kubeconfig_path, &self.context) {
            (Some(path), _) => {
                debug!("loading kubeconfig from {}", path.display());
                kube::Config::from_custom_kubeconfig(Kubeconfig::read_from(path)?, &kube_opts).await?
            },
            (None, Some(_)) => kube::Config::from_kubeconfig(&kube_opts).await?,
            (None, None) => kube::Config::infer().await?,
        };
        Ok(kube::Client::try_from(config)?)
    }

    pub async fn pod_lister(&self) -> anyhow::Result<KubePodLister> {
        Ok(KubePodLister::new(self.client().await?, self.namespace.as_deref()))
    }
}

// Everything needed for one wait, in a form that can live in a test suite's YAML fixtures:
//
// ---
// labelSelector: app=foo
// fieldSelector: status.phase!=Failed
// minPods: 2
// timeout: 2m
// interval: 5s
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitOptions {
    #[serde(flatten)]
    pub selector: Selector,

    #[serde(default = "default_min_pods")]
    pub min_pods: usize,

    #[serde(default = "default_timeout", with = "humantime_duration")]
    pub timeout: Duration,

    #[serde(default = "default_interval", with = "humantime_duration")]
    pub interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        WaitOptions {
            selector: Default::default(),
            min_pods: default_min_pods(),
            timeout: default_timeout(),
            interval: default_interval(),
        }
    }
}

impl WaitOptions {
    pub fn load(filename: &str) -> anyhow::Result<WaitOptions> {
        Ok(serde_yaml::from_reader(File::open(filename)?)?)
    }

    pub async fn wait<L: PodLister + ?Sized>(&self, t: &dyn TestReporter, lister: &L) {
        wait_until_pods_available(t, lister, &self.selector, self.min_pods, self.timeout, self.interval).await;
    }

    pub async fn wait_e<L: PodLister + ?Sized>(&self, t: &dyn TestReporter, lister: &L) -> EmptyResult {
        wait_until_pods_available_e(t, lister, &self.selector, self.min_pods, self.timeout, self.interval).await
    }
}

fn default_min_pods() -> usize {
    DEFAULT_MIN_PODS
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_WAIT_TIMEOUT_SECONDS)
}

fn default_interval() -> Duration {
    Duration::from_secs(DEFAULT_RETRY_DELAY_SECONDS)
}

mod humantime_duration {
    use std::time::Duration;

    use serde::de::Error as _;
    use serde::{
        Deserialize,
        Deserializer,
        Serializer,
    };

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&humantime::format_duration(*d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(d)?;
        humantime::parse_duration(&s).map_err(D::Error::custom)
    }
}
