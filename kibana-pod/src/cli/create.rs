use std::time::Duration;

use clap::Args;
use k8s_openapi::api::core::v1::Pod;
use kibana_pod_spec::new_pod;
use kube::{Api, api::PostParams};
use snafu::ResultExt;

use crate::{
    cli::{
        Error, error,
        internal::{ApiPodExt, ResolvedResources, ResourceResolver},
        source::Source,
    },
    config::Config,
};

#[derive(Args, Clone)]
pub struct CreateCommand {
    #[arg(
        short = 'n',
        long = "namespace",
        help = "Kubernetes namespace to create the pod in. Defaults to the current Kubernetes \
                context's namespace."
    )]
    pub namespace: Option<String>,

    #[arg(
        short = 'p',
        long = "pod-name",
        help = "Name of the Kibana pod. Defaults to the configured default pod name."
    )]
    pub pod_name: Option<String>,

    #[arg(
        short = 'w',
        long = "wait",
        help = "Wait until the pod passes its readiness probe before returning."
    )]
    pub wait: bool,

    #[arg(
        short = 't',
        long = "timeout-seconds",
        default_value = "120",
        help = "The maximum time in seconds to wait for the pod to become ready."
    )]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub source: Option<Source>,
}

impl CreateCommand {
    /// Creates the Kibana pod unless a pod with that name already exists,
    /// then optionally waits for it to become ready.
    ///
    /// # Arguments
    ///
    /// * `kube_client` - The client used to talk to the API server.
    /// * `config` - Supplies presets and the default pod name.
    ///
    /// # Errors
    ///
    /// * [`Error::PresetNotFound`] when the selected preset does not exist.
    /// * [`Error::InvalidParams`] when the parameters fail validation; nothing
    ///   is submitted in that case.
    /// * [`Error::GetPod`] or [`Error::CreatePod`] when the API server rejects
    ///   a request.
    /// * [`Error::WaitForPodReady`] when `--wait` times out.
    pub async fn run(self, kube_client: kube::Client, config: Config) -> Result<(), Error> {
        let Self { namespace, pod_name, wait, timeout_secs, source } = self;

        let ResolvedResources { namespace, pod_name } =
            ResourceResolver::from((&kube_client, &config)).resolve(namespace, pod_name);

        let params = Source::resolve(source, &config)?;
        params
            .validate()
            .with_context(|_| error::InvalidParamsSnafu { pod_name: pod_name.clone() })?;

        let api = Api::<Pod>::namespaced(kube_client, &namespace);

        let pod_exists = api.get_opt(&pod_name).await.with_context(|_| error::GetPodSnafu {
            namespace: namespace.clone(),
            pod_name: pod_name.clone(),
        })?;
        if pod_exists.is_some() {
            println!("pod/{pod_name} already exists in namespace {namespace}");
        } else {
            let pod = new_pod(&pod_name, &namespace, &params);
            tracing::debug!("Creating pod/{pod_name} with image {}", params.image());
            let _resource =
                api.create(&PostParams::default(), &pod).await.with_context(|_| {
                    error::CreatePodSnafu { pod_name: pod_name.clone(), namespace: namespace.clone() }
                })?;

            println!("pod/{pod_name} created in namespace {namespace}");
        }

        if wait {
            let _pod =
                api.await_ready(&pod_name, &namespace, Duration::from_secs(timeout_secs)).await?;
            println!("pod/{pod_name} is ready in namespace {namespace}");
        }

        Ok(())
    }
}
