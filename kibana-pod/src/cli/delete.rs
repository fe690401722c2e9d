//! Deletes Kibana pods created by this tool.

use clap::{ArgAction, Args};
use futures::{StreamExt, TryStreamExt};
use k8s_openapi::api::core::v1::Pod;
use kube::{
    Api, ResourceExt,
    api::{DeleteParams, ListParams},
};
use snafu::ResultExt;

use crate::{
    cli::{
        error::{self, Error},
        internal::{ResolvedResources, ResourceResolver},
    },
    config::Config,
};

/// Maximum number of deletions in flight.
const CONCURRENT_DELETIONS: usize = 5;

#[derive(Args, Clone)]
pub struct DeleteCommand {
    #[arg(
        short,
        long,
        help = "Kubernetes namespace where the Kibana pods are located. Defaults to the current \
                Kubernetes context's namespace."
    )]
    pub namespace: Option<String>,

    #[arg(
        short = 'p',
        long = "pod-names",
        action = ArgAction::Append,
        num_args = 1..,
        conflicts_with = "all",
        help = "Names of the Kibana pods to delete."
    )]
    pub pod_names: Vec<String>,

    #[arg(
        long = "all",
        help = "Delete every Kibana pod created by this tool in the namespace."
    )]
    pub all: bool,
}

impl DeleteCommand {
    /// Deletes the named pods, or every managed pod in the namespace with
    /// `--all`. Pods that do not exist are reported and skipped.
    ///
    /// # Errors
    ///
    /// * [`Error::NoPodSelected`] when neither names nor `--all` are given.
    /// * [`Error::ListPodsWithNamespace`] when `--all` cannot list pods.
    /// * [`Error::DeletePod`] when a deletion fails.
    pub async fn run(self, kube_client: kube::Client, config: Config) -> Result<(), Error> {
        let Self { namespace, pod_names, all } = self;

        let ResolvedResources { namespace, .. } =
            ResourceResolver::from((&kube_client, &config)).resolve(namespace, None);

        let selection = PodSelection::from_args(pod_names, all)?;

        let api = Api::<Pod>::namespaced(kube_client, &namespace);
        let pod_names = match selection {
            PodSelection::Named(pod_names) => pod_names,
            PodSelection::AllManaged => {
                let list_params = ListParams::default().labels(&super::managed_by_selector());
                api.list(&list_params)
                    .await
                    .with_context(|_| error::ListPodsWithNamespaceSnafu {
                        namespace: namespace.clone(),
                    })?
                    .iter()
                    .map(ResourceExt::name_any)
                    .collect()
            }
        };

        if pod_names.is_empty() {
            println!("No Kibana pods found in namespace {namespace}");
            return Ok(());
        }

        let futs = pod_names.into_iter().map(|pod_name| {
            let api = api.clone();
            let namespace = namespace.clone();
            async move {
                let pod_exists = api.get_opt(&pod_name).await.with_context(|_| {
                    error::GetPodSnafu { namespace: namespace.clone(), pod_name: pod_name.clone() }
                })?;
                if pod_exists.is_some() {
                    let _resource = api.delete(&pod_name, &DeleteParams::default()).await.context(
                        error::DeletePodSnafu {
                            pod_name: pod_name.clone(),
                            namespace: namespace.clone(),
                        },
                    )?;
                    println!("pod/{pod_name} deleted in namespace {namespace}");
                } else {
                    println!("pod/{pod_name} does not exist in namespace {namespace}");
                }

                Ok::<(), Error>(())
            }
        });
        let _unused = futures::stream::iter(futs)
            .buffer_unordered(CONCURRENT_DELETIONS)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(())
    }
}

/// The pods a `delete` invocation targets.
#[derive(Clone, Debug, Eq, PartialEq)]
enum PodSelection {
    Named(Vec<String>),
    AllManaged,
}

impl PodSelection {
    /// Turns the `--pod-names` and `--all` arguments into a selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPodSelected`] when no names are given and `--all` is
    /// not set, so that a bare `delete` never removes anything.
    fn from_args(pod_names: Vec<String>, all: bool) -> Result<Self, Error> {
        if all {
            Ok(Self::AllManaged)
        } else if pod_names.is_empty() {
            error::NoPodSelectedSnafu.fail()
        } else {
            Ok(Self::Named(pod_names))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        delete: DeleteCommand,
    }

    #[test]
    fn test_no_names_without_all_selects_nothing() {
        let err = PodSelection::from_args(Vec::new(), false).unwrap_err();
        assert!(matches!(err, Error::NoPodSelected));
    }

    #[test]
    fn test_named_selection() {
        let selection =
            PodSelection::from_args(vec!["kibana".to_string(), "kibana-2".to_string()], false)
                .unwrap();
        assert_eq!(
            selection,
            PodSelection::Named(vec!["kibana".to_string(), "kibana-2".to_string()])
        );
    }

    #[test]
    fn test_all_selects_every_managed_pod() {
        assert_eq!(PodSelection::from_args(Vec::new(), true).unwrap(), PodSelection::AllManaged);
    }

    #[test]
    fn test_pod_names_conflict_with_all() {
        let cmd = TestCli::try_parse_from(["delete", "-p", "kibana", "--all"]);
        assert!(cmd.is_err());

        let cmd = TestCli::try_parse_from(["delete", "-n", "observability"]).unwrap().delete;
        assert!(cmd.pod_names.is_empty());
        assert!(!cmd.all);
        assert_eq!(cmd.namespace.as_deref(), Some("observability"));
    }
}
