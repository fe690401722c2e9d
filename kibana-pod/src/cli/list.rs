//! Lists Kibana pods created by this tool.

use clap::Args;
use k8s_openapi::api::core::v1::Pod;
use kube::{Api, api::ListParams};
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::{
        error::{self, Error},
        internal::{ResolvedResources, ResourceResolver},
    },
    config::Config,
    ui::table::PodListExt,
};

#[derive(Args, Clone)]
pub struct ListCommand {
    #[arg(
        short,
        long,
        help = "Kubernetes namespace to list Kibana pods from. Defaults to the current \
                Kubernetes context's namespace."
    )]
    pub namespace: Option<String>,

    #[arg(
        short = 'A',
        long,
        help = "List Kibana pods created by this tool across all Kubernetes namespaces."
    )]
    pub all_namespaces: bool,
}

impl ListCommand {
    /// Prints a table of the pods labelled
    /// `app.kubernetes.io/managed-by=kibana-pod`, in one namespace or, with
    /// `--all-namespaces`, in every namespace.
    ///
    /// # Errors
    ///
    /// * [`Error::ListPods`] or [`Error::ListPodsWithNamespace`] when the API
    ///   server cannot list pods.
    /// * [`Error::WriteStdout`] when the table cannot be written.
    pub async fn run(self, kube_client: kube::Client, config: Config) -> Result<(), Error> {
        let Self { namespace, all_namespaces } = self;

        let ResolvedResources { namespace, .. } =
            ResourceResolver::from((&kube_client, &config)).resolve(namespace, None);

        let list_params = ListParams::default().labels(&super::managed_by_selector());

        let pods = if all_namespaces {
            Api::<Pod>::all(kube_client).list(&list_params).await.context(error::ListPodsSnafu)?
        } else {
            Api::<Pod>::namespaced(kube_client, &namespace)
                .list(&list_params)
                .await
                .context(error::ListPodsWithNamespaceSnafu { namespace })?
        };

        let mut stdout = tokio::io::stdout();
        stdout.write_all(pods.render_table().as_bytes()).await.context(error::WriteStdoutSnafu)?;
        stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)
    }
}
