use k8s_openapi::{
    api::core::v1::{
        Container, ContainerPort, EnvVar, HTTPGetAction, PodSecurityContext, PodSpec, Probe,
    },
    apimachinery::pkg::util::intstr::IntOrString,
};

use crate::{PodSpecParams, consts};

/// Builds the pod specification for a single Kibana container.
///
/// The function is total: it performs no validation, so degenerate parameters
/// (e.g. an empty version) flow straight into the result. Call
/// [`PodSpecParams::validate`] first when that matters.
#[must_use]
pub fn new_pod_spec(params: &PodSpecParams) -> PodSpec {
    let probe = http_probe();

    PodSpec {
        termination_grace_period_seconds: Some(consts::DEFAULT_TERMINATION_GRACE_PERIOD_SECONDS),
        restart_policy: Some(consts::DEFAULT_RESTART_POLICY.to_string()),
        dns_policy: Some(consts::DEFAULT_DNS_POLICY.to_string()),
        security_context: Some(PodSecurityContext::default()),
        scheduler_name: Some(consts::DEFAULT_SCHEDULER_NAME.to_string()),
        containers: vec![Container {
            name: consts::CONTAINER_NAME.to_string(),
            image: Some(params.image()),
            image_pull_policy: Some(consts::DEFAULT_IMAGE_PULL_POLICY.to_string()),
            env: Some(vec![EnvVar {
                name: consts::ELASTICSEARCH_URL_ENV.to_string(),
                value: Some(params.elasticsearch_url.clone()),
                ..EnvVar::default()
            }]),
            ports: Some(vec![ContainerPort {
                name: Some(consts::HTTP_PORT_NAME.to_string()),
                container_port: i32::from(consts::HTTP_PORT),
                protocol: Some(consts::PROTOCOL_TCP.to_string()),
                ..ContainerPort::default()
            }]),
            termination_message_path: Some(consts::DEFAULT_TERMINATION_MESSAGE_PATH.to_string()),
            termination_message_policy: Some(
                consts::DEFAULT_TERMINATION_MESSAGE_POLICY.to_string(),
            ),
            liveness_probe: Some(probe.clone()),
            readiness_probe: Some(probe),
            ..Container::default()
        }],
        ..PodSpec::default()
    }
}

// Liveness and readiness share this probe.
fn http_probe() -> Probe {
    Probe {
        failure_threshold: Some(consts::probe::FAILURE_THRESHOLD),
        initial_delay_seconds: Some(consts::probe::INITIAL_DELAY_SECONDS),
        period_seconds: Some(consts::probe::PERIOD_SECONDS),
        success_threshold: Some(consts::probe::SUCCESS_THRESHOLD),
        timeout_seconds: Some(consts::probe::TIMEOUT_SECONDS),
        http_get: Some(HTTPGetAction {
            path: Some(consts::probe::PATH.to_string()),
            port: IntOrString::Int(i32::from(consts::HTTP_PORT)),
            scheme: Some(consts::URI_SCHEME_HTTP.to_string()),
            ..HTTPGetAction::default()
        }),
        ..Probe::default()
    }
}
