use k8s_openapi::{Metadata, api::core::v1::Pod};
use kibana_pod_base::consts::k8s::{annotations, labels};
use kibana_pod_spec::consts::CONTAINER_NAME;

/// Kibana-specific accessors for [`Pod`].
pub trait PodExt {
    /// Image of the Kibana container, falling back to the image annotation.
    fn kibana_image(&self) -> Option<String>;

    /// Kibana version from the `app.kubernetes.io/version` label, if set.
    fn kibana_version(&self) -> Option<String>;

    /// Whether the pod reports the `Ready` condition as `True`.
    fn is_ready(&self) -> bool;
}

impl PodExt for Pod {
    fn kibana_image(&self) -> Option<String> {
        self.spec
            .as_ref()
            .and_then(|spec| {
                spec.containers.iter().find(|container| container.name == CONTAINER_NAME)
            })
            .and_then(|container| container.image.clone())
            .or_else(|| {
                self.metadata()
                    .annotations
                    .as_ref()
                    .and_then(|annotations| annotations.get(annotations::IMAGE.as_str()).cloned())
            })
    }

    fn kibana_version(&self) -> Option<String> {
        self.metadata().labels.as_ref().and_then(|labels| labels.get(labels::VERSION).cloned())
    }

    fn is_ready(&self) -> bool {
        self.status
            .as_ref()
            .and_then(|status| status.conditions.as_ref())
            .into_iter()
            .flatten()
            .any(|condition| condition.type_ == "Ready" && condition.status == "True")
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1::{PodCondition, PodStatus};
    use kibana_pod_spec::{PodSpecParams, new_pod};

    use super::*;

    fn with_conditions(mut pod: Pod, conditions: &[(&str, &str)]) -> Pod {
        pod.status = Some(PodStatus {
            conditions: Some(
                conditions
                    .iter()
                    .map(|(type_, status)| PodCondition {
                        type_: (*type_).to_string(),
                        status: (*status).to_string(),
                        ..PodCondition::default()
                    })
                    .collect(),
            ),
            ..PodStatus::default()
        });
        pod
    }

    #[test]
    fn test_image_and_version() {
        let pod = new_pod("kibana", "default", &PodSpecParams::new("7.1.0", "http://es:9200"));
        assert_eq!(pod.kibana_image().as_deref(), Some("docker.elastic.co/kibana/kibana:7.1.0"));
        assert_eq!(pod.kibana_version().as_deref(), Some("7.1.0"));
    }

    #[test]
    fn test_image_falls_back_to_annotation() {
        let mut pod =
            new_pod("kibana", "default", &PodSpecParams::new("7.1.0", "http://es:9200"));
        pod.spec = None;
        assert_eq!(pod.kibana_image().as_deref(), Some("docker.elastic.co/kibana/kibana:7.1.0"));

        assert_eq!(Pod::default().kibana_image(), None);
        assert_eq!(Pod::default().kibana_version(), None);
    }

    #[test]
    fn test_readiness() {
        let pod = new_pod("kibana", "default", &PodSpecParams::new("7.1.0", "http://es:9200"));
        assert!(!pod.is_ready());

        let ready = with_conditions(pod.clone(), &[("PodScheduled", "True"), ("Ready", "True")]);
        assert!(ready.is_ready());

        let not_ready = with_conditions(pod, &[("Ready", "False")]);
        assert!(!not_ready.is_ready());
    }
}
