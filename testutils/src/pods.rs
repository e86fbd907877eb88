use pw_core::klabel;
use pw_core::prelude::*;
use rstest::fixture;

use crate::constants::*;

const CONTAINER_PREFIX: &str = "container";

// A freshly-scheduled pod: Pending, no containers reporting yet
#[fixture]
pub fn test_pod(#[default(TEST_POD)] name: &str) -> corev1::Pod {
    corev1::Pod {
        metadata: metav1::ObjectMeta {
            namespace: Some(TEST_NAMESPACE.into()),
            name: Some(name.into()),
            labels: klabel!(TEST_APP_LABEL_KEY => TEST_APP_LABEL_VALUE),
            ..Default::default()
        },
        spec: Some(corev1::PodSpec { ..Default::default() }),
        status: Some(corev1::PodStatus {
            phase: Some(POD_PHASE_PENDING.into()),
            ..Default::default()
        }),
    }
}

#[fixture]
pub fn available_pod(#[default(TEST_POD)] name: &str) -> corev1::Pod {
    let mut pod = test_pod(name);
    set_phase(&mut pod, POD_PHASE_RUNNING);
    add_container(&mut pod, true, Some(true));
    pod
}

pub fn available_pods(count: usize) -> Vec<corev1::Pod> {
    (0..count).map(|i| available_pod(&format!("pod-{i}"))).collect()
}

pub fn set_phase(pod: &mut corev1::Pod, phase: &str) {
    pod.status.get_or_insert(Default::default()).phase = Some(phase.into());
}

pub fn set_reason(pod: &mut corev1::Pod, reason: &str, message: &str) {
    let status = pod.status.get_or_insert(Default::default());
    status.reason = Some(reason.into());
    status.message = Some(message.into());
}

pub fn add_container(pod: &mut corev1::Pod, ready: bool, started: Option<bool>) {
    let spec = pod.spec.get_or_insert(Default::default());
    let status = pod.status.get_or_insert(Default::default());
    let statuses = status.container_statuses.get_or_insert(vec![]);
    let name = format!("{}-{}", CONTAINER_PREFIX, spec.containers.len());

    spec.containers.push(corev1::Container { name: name.clone(), ..Default::default() });
    statuses.push(corev1::ContainerStatus { name, ready, started, ..Default::default() });
}
