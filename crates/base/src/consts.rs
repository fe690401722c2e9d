pub mod k8s {
    //! Kubernetes keys written onto pods created by Kibana Pod.

    pub mod labels {
        /// Well-known application name label.
        pub const NAME: &str = "app.kubernetes.io/name";

        /// Version of the application running in the pod.
        pub const VERSION: &str = "app.kubernetes.io/version";

        /// Marks resources created by this tool; used as the list/delete
        /// selector.
        pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
    }

    pub mod annotations {
        use std::sync::LazyLock;

        use crate::PROJECT_NAME;

        /// The resolved container image the pod was rendered with.
        pub static IMAGE: LazyLock<String> = LazyLock::new(|| format!("{PROJECT_NAME}.image"));

        /// The version of the tool that created the pod.
        pub static VERSION: LazyLock<String> = LazyLock::new(|| format!("{PROJECT_NAME}.version"));
    }
}

/// Value of the `app.kubernetes.io/name` label.
pub const APP_NAME: &str = "kibana";

pub const DEFAULT_POD_NAME: &str = "kibana";

pub const DEFAULT_PRESET: &str = "default";

pub const DEFAULT_ELASTICSEARCH_URL: &str = "http://elasticsearch:9200";

/// Namespace written into rendered manifests when none is given.
pub const DEFAULT_NAMESPACE: &str = "default";
