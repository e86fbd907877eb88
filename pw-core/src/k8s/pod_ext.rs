use super::*;
use crate::prelude::*;

impl PodExt for corev1::Pod {
    fn status(&self) -> anyhow::Result<&corev1::PodStatus> {
        match self.status.as_ref() {
            None => bail!(KubernetesError::field_not_found("pod status")),
            Some(ps) => Ok(ps),
        }
    }

    // A pod is available once it's Running and every container is both started and ready.
    // A container that doesn't report `started` at all counts as started.
    fn is_available(&self) -> bool {
        let Ok(status) = self.status() else {
            return false;
        };

        let containers_ok = status
            .container_statuses
            .iter()
            .flatten()
            .all(|cs| cs.ready && cs.started != Some(false));

        containers_ok && status.phase.as_deref() == Some(POD_PHASE_RUNNING)
    }
}
