use snafu::Snafu;

/// Reasons a set of [`PodSpecParams`](crate::PodSpecParams) is rejected by
/// [`PodSpecParams::validate`](crate::PodSpecParams::validate).
///
/// The builder itself never fails; these errors exist for callers that want to
/// refuse degenerate input before submitting a pod to a cluster.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Either a Kibana version or a custom image name must be provided"))]
    MissingImageVersion,

    #[snafu(display(
        "Kibana version '{version}' is not a valid label value, it must be at most 63 \
         characters of alphanumerics, '-', '_' or '.', starting and ending with an alphanumeric"
    ))]
    InvalidVersionLabel { version: String },

    #[snafu(display("Kibana version '{version}' is not a valid semantic version, error: {source}"))]
    InvalidVersion { version: String, source: semver::Error },

    #[snafu(display("Elasticsearch URL must not be empty"))]
    MissingElasticsearchUrl,
}
