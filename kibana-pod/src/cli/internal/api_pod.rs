use std::time::Duration;

use k8s_openapi::api::core::v1::Pod;
use kube::{
    Api,
    runtime::wait::{Condition, await_condition},
};
use snafu::ResultExt;

use crate::{
    cli::{Error, error},
    ext::PodExt,
};

/// Extension trait for `kube::Api<Pod>`.
pub trait ApiPodExt {
    /// Waits until the pod reports the `Ready` condition, i.e. until its
    /// readiness probe has passed.
    ///
    /// # Errors
    ///
    /// * [`Error::WaitForPodReady`] if `timeout` elapses first.
    /// * [`Error::GetPodStatus`] if watching the pod fails.
    /// * [`Error::GetPod`] if the pod vanished and cannot be fetched again.
    async fn await_ready(
        &self,
        pod_name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<Pod, Error>;
}

impl ApiPodExt for Api<Pod> {
    async fn await_ready(
        &self,
        pod_name: &str,
        namespace: &str,
        timeout: Duration,
    ) -> Result<Pod, Error> {
        let maybe_pod =
            tokio::time::timeout(timeout, await_condition(self.clone(), pod_name, is_pod_ready()))
                .await
                .map_err(|_| Error::WaitForPodReady {
                    namespace: namespace.to_string(),
                    pod_name: pod_name.to_string(),
                })?
                .with_context(|_| error::GetPodStatusSnafu {
                    namespace: namespace.to_string(),
                    pod_name: pod_name.to_string(),
                })?;
        match maybe_pod {
            Some(pod) => Ok(pod),
            None => self.get(pod_name).await.with_context(|_| error::GetPodSnafu {
                namespace: namespace.to_string(),
                pod_name: pod_name.to_string(),
            }),
        }
    }
}

fn is_pod_ready() -> impl Condition<Pod> {
    |pod: Option<&Pod>| pod.is_some_and(PodExt::is_ready)
}
