//! Fixed defaults baked into every Kibana pod.

/// The (default) port Kibana listens on.
pub const HTTP_PORT: u16 = 5601;
pub const HTTP_PORT_NAME: &str = "http";

pub const CONTAINER_NAME: &str = "kibana";

pub const DEFAULT_IMAGE_REPOSITORY_AND_NAME: &str = "docker.elastic.co/kibana/kibana";

/// Environment variable Kibana reads to locate its Elasticsearch cluster.
pub const ELASTICSEARCH_URL_ENV: &str = "ELASTICSEARCH_URL";

pub const DEFAULT_IMAGE_PULL_POLICY: &str = "IfNotPresent";

pub const DEFAULT_TERMINATION_GRACE_PERIOD_SECONDS: i64 = 20;
pub const DEFAULT_RESTART_POLICY: &str = "Always";
pub const DEFAULT_DNS_POLICY: &str = "ClusterFirst";
pub const DEFAULT_SCHEDULER_NAME: &str = "default-scheduler";
pub const DEFAULT_TERMINATION_MESSAGE_POLICY: &str = "File";
pub const DEFAULT_TERMINATION_MESSAGE_PATH: &str = "/dev/termination-log";

pub const PROTOCOL_TCP: &str = "TCP";
pub const URI_SCHEME_HTTP: &str = "HTTP";

pub mod probe {
    //! Shared liveness and readiness probe settings.

    pub const PATH: &str = "/";
    pub const INITIAL_DELAY_SECONDS: i32 = 10;
    pub const PERIOD_SECONDS: i32 = 10;
    pub const TIMEOUT_SECONDS: i32 = 5;
    pub const SUCCESS_THRESHOLD: i32 = 1;
    pub const FAILURE_THRESHOLD: i32 = 3;
}
