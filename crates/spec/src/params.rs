use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::{consts::DEFAULT_IMAGE_REPOSITORY_AND_NAME, error, error::Error};

/// The externally supplied overrides a Kibana pod is built from.
///
/// Everything not listed here is a fixed default (see [`crate::consts`]).
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpecParams {
    /// Kibana version; becomes the image tag unless a custom image is set.
    #[serde(default)]
    pub version: String,

    /// Value of the `ELASTICSEARCH_URL` environment variable.
    #[serde(default)]
    pub elasticsearch_url: String,

    /// Replaces the default image reference verbatim. An empty string counts
    /// as unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image_name: Option<String>,
}

impl PodSpecParams {
    pub fn new(version: impl Into<String>, elasticsearch_url: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            elasticsearch_url: elasticsearch_url.into(),
            custom_image_name: None,
        }
    }

    #[must_use]
    pub fn with_custom_image_name(mut self, image: impl Into<String>) -> Self {
        self.custom_image_name = Some(image.into());
        self
    }

    /// The custom image, if one was supplied and is non-empty.
    #[must_use]
    pub fn custom_image(&self) -> Option<&str> {
        self.custom_image_name.as_deref().filter(|image| !image.is_empty())
    }

    /// Resolves the container image reference.
    ///
    /// A custom image wins unconditionally. Otherwise the default repository
    /// is tagged with [`Self::version`], even when the version is empty.
    #[must_use]
    pub fn image(&self) -> String {
        self.custom_image().map_or_else(
            || image_with_version(DEFAULT_IMAGE_REPOSITORY_AND_NAME, &self.version),
            ToString::to_string,
        )
    }

    /// Rejects parameters that would build a syntactically valid but useless
    /// pod.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingImageVersion`] when neither a version nor a custom
    ///   image is set.
    /// * [`Error::InvalidVersionLabel`] when a non-empty version cannot be used
    ///   as the `app.kubernetes.io/version` label value. This applies even with
    ///   a custom image, since the label is set either way.
    /// * [`Error::InvalidVersion`] when the version is used as the image tag
    ///   and is not a semantic version.
    /// * [`Error::MissingElasticsearchUrl`] when the URL is empty.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.version.is_empty() && !is_label_value(&self.version) {
            return error::InvalidVersionLabelSnafu { version: self.version.clone() }.fail();
        }

        if self.custom_image().is_none() {
            if self.version.is_empty() {
                return error::MissingImageVersionSnafu.fail();
            }
            let _version = semver::Version::parse(&self.version)
                .with_context(|_| error::InvalidVersionSnafu { version: self.version.clone() })?;
        }

        if self.elasticsearch_url.is_empty() {
            return error::MissingElasticsearchUrlSnafu.fail();
        }

        Ok(())
    }
}

fn image_with_version(image: &str, version: &str) -> String { format!("{image}:{version}") }

/// Maximum length of a Kubernetes label value.
const MAX_LABEL_VALUE_LENGTH: usize = 63;

/// Whether `value` is a non-empty Kubernetes label value:
/// `[A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?`, at most 63 characters.
fn is_label_value(value: &str) -> bool {
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_LABEL_VALUE_LENGTH
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes
                    .iter()
                    .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        }
        _ => false,
    }
}
