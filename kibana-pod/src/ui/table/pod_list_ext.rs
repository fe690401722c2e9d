//! Renders `ObjectList<Pod>` as a table.

use k8s_openapi::api::core::v1::Pod;
use kube::api::ObjectList;

use crate::ext::PodExt;

/// Extension trait for `ObjectList<Pod>` to provide table rendering
/// capabilities.
pub trait PodListExt {
    /// Renders the pods with the columns `NAME`, `IMAGE`, `VERSION`, `READY`,
    /// `STATUS`, `NAMESPACE` and `NODE`.
    fn render_table(&self) -> String;
}

impl PodListExt for ObjectList<Pod> {
    fn render_table(&self) -> String {
        super::new_table(
            ["NAME", "IMAGE", "VERSION", "READY", "STATUS", "NAMESPACE", "NODE"],
            self.items.iter().map(pod_column),
        )
    }
}

fn pod_column(pod: &Pod) -> [String; 7] {
    [
        pod.metadata.name.clone().unwrap_or_default(),
        pod.kibana_image().unwrap_or_default(),
        pod.kibana_version().unwrap_or_else(|| "-".to_string()),
        if pod.is_ready() { "true" } else { "false" }.to_string(),
        pod.status.as_ref().and_then(|s| s.phase.clone()).unwrap_or_else(|| "Unknown".to_string()),
        pod.metadata.namespace.clone().unwrap_or_default(),
        pod.spec.as_ref().and_then(|s| s.node_name.clone()).unwrap_or_default(),
    ]
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1::PodStatus;
    use kibana_pod_spec::{PodSpecParams, new_pod};

    use super::*;

    #[test]
    fn test_pod_column() {
        let mut pod =
            new_pod("kibana-a", "observability", &PodSpecParams::new("7.1.0", "http://es:9200"));
        pod.status = Some(PodStatus { phase: Some("Pending".to_string()), ..PodStatus::default() });

        assert_eq!(
            pod_column(&pod),
            [
                "kibana-a".to_string(),
                "docker.elastic.co/kibana/kibana:7.1.0".to_string(),
                "7.1.0".to_string(),
                "false".to_string(),
                "Pending".to_string(),
                "observability".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_render_table() {
        let pod = new_pod("kibana-a", "default", &PodSpecParams::new("6.8.23", "http://es:9200"));
        let list: ObjectList<Pod> = serde_json::from_value(serde_json::json!({
            "apiVersion": "v1",
            "kind": "PodList",
            "metadata": {},
            "items": [pod],
        }))
        .unwrap();

        let table = list.render_table();
        assert!(table.contains("NAME"));
        assert!(table.contains("READY"));
        assert!(table.contains("kibana-a"));
        assert!(table.contains("Unknown"));
    }
}
