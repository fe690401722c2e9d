use crate::config::Config;

/// Fills in the namespace and pod name a subcommand was not given: the
/// namespace from the Kubernetes client context, the pod name from the
/// configuration.
pub struct ResourceResolver {
    default_namespace: String,
    default_pod_name: String,
}

/// The namespace and pod name a subcommand operates on.
pub struct ResolvedResources {
    /// The Kubernetes namespace.
    pub namespace: String,
    /// The name of the Kibana pod.
    pub pod_name: String,
}

impl From<(&kube::Client, &Config)> for ResourceResolver {
    /// Captures the defaults from a Kubernetes client and the configuration.
    ///
    /// # Arguments
    ///
    /// * `(kube_client, config)` - The client supplies the namespace of the
    ///   current context, the configuration supplies `defaultPodName`.
    fn from((kube_client, config): (&kube::Client, &Config)) -> Self {
        Self {
            default_namespace: kube_client.default_namespace().to_string(),
            default_pod_name: config.default_pod_name.clone(),
        }
    }
}

impl ResourceResolver {
    /// Resolves the namespace and pod name, falling back to the defaults.
    ///
    /// # Arguments
    ///
    /// * `namespace` - The requested namespace. `None` or an empty string
    ///   selects the client's default namespace.
    /// * `pod_name` - The requested pod name. `None` or an empty string
    ///   selects the configured default pod name.
    pub fn resolve(
        &self,
        namespace: Option<String>,
        pod_name: Option<String>,
    ) -> ResolvedResources {
        let namespace =
            namespace.filter(|s| !s.is_empty()).unwrap_or_else(|| self.default_namespace.clone());
        let pod_name =
            pod_name.filter(|s| !s.is_empty()).unwrap_or_else(|| self.default_pod_name.clone());

        ResolvedResources { namespace, pod_name }
    }
}
