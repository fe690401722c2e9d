use std::collections::BTreeMap;

use k8s_openapi::{api::core::v1::Pod, apimachinery::pkg::apis::meta::v1::ObjectMeta};
use kibana_pod_base::{
    PROJECT_NAME, PROJECT_VERSION,
    consts::{
        APP_NAME,
        k8s::{annotations, labels},
    },
};

use crate::{PodSpecParams, new_pod_spec};

/// Wraps [`new_pod_spec`] in a named, labelled [`Pod`] ready for submission.
///
/// Pods are labelled `app.kubernetes.io/managed-by=kibana-pod` so they can be
/// found again by `list` and `delete`. The Kibana version label is omitted when
/// the version is empty.
#[must_use]
pub fn new_pod(
    pod_name: impl Into<String>,
    namespace: impl Into<String>,
    params: &PodSpecParams,
) -> Pod {
    let labels = [
        (labels::NAME.to_string(), APP_NAME.to_string()),
        (labels::MANAGED_BY.to_string(), PROJECT_NAME.to_string()),
    ]
    .into_iter()
    .chain(
        (!params.version.is_empty())
            .then(|| (labels::VERSION.to_string(), params.version.clone())),
    )
    .collect::<BTreeMap<_, _>>();

    let annotations = BTreeMap::from_iter([
        (annotations::IMAGE.to_string(), params.image()),
        (annotations::VERSION.to_string(), PROJECT_VERSION.to_string()),
    ]);

    Pod {
        metadata: ObjectMeta {
            name: Some(pod_name.into()),
            namespace: Some(namespace.into()),
            labels: Some(labels),
            annotations: Some(annotations),
            ..ObjectMeta::default()
        },
        spec: Some(new_pod_spec(params)),
        ..Pod::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        let params = PodSpecParams::new("7.1.0", "http://es:9200");
        let pod = new_pod("kibana", "observability", &params);

        assert_eq!(pod.metadata.name.as_deref(), Some("kibana"));
        assert_eq!(pod.metadata.namespace.as_deref(), Some("observability"));

        let labels = pod.metadata.labels.as_ref().unwrap();
        assert_eq!(labels.get(labels::NAME).map(String::as_str), Some("kibana"));
        assert_eq!(labels.get(labels::MANAGED_BY).map(String::as_str), Some("kibana-pod"));
        assert_eq!(labels.get(labels::VERSION).map(String::as_str), Some("7.1.0"));

        let annotations = pod.metadata.annotations.as_ref().unwrap();
        assert_eq!(
            annotations.get(annotations::IMAGE.as_str()).map(String::as_str),
            Some("docker.elastic.co/kibana/kibana:7.1.0")
        );
        assert_eq!(
            annotations.get(annotations::VERSION.as_str()).map(String::as_str),
            Some(PROJECT_VERSION)
        );
    }

    #[test]
    fn test_empty_version_has_no_version_label() {
        let params = PodSpecParams::default().with_custom_image_name("myrepo/kibana:custom");
        let pod = new_pod("kibana", "default", &params);

        let labels = pod.metadata.labels.as_ref().unwrap();
        assert!(!labels.contains_key(labels::VERSION));
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_spec_matches_builder() {
        let params = PodSpecParams::new("7.1.0", "http://es:9200");
        let pod = new_pod("kibana", "default", &params);

        assert_eq!(pod.spec, Some(new_pod_spec(&params)));
        assert!(pod.status.is_none());
    }
}
