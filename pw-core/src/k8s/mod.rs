mod lister;
mod pod_ext;

pub use lister::*;

use crate::errors::*;
use crate::prelude::*;

err_impl! {KubernetesError,
    #[error("field not found in struct: {0}")]
    FieldNotFound(String),
}

pub trait PodExt {
    fn status(&self) -> anyhow::Result<&corev1::PodStatus>;
    fn is_available(&self) -> bool;
}

#[cfg(test)]
pub mod tests;
