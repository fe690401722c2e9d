//! Prints the generated Kibana pod without talking to a cluster.

use std::io::Write;

use clap::{Args, ValueEnum};
use kibana_pod_base::consts::DEFAULT_NAMESPACE;
use kibana_pod_spec::{new_pod, new_pod_spec};
use serde::Serialize;
use snafu::ResultExt;

use crate::{
    cli::{Error, error, source::Source},
    config::Config,
};

/// Serialization format of `render`.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Args, Clone)]
pub struct RenderCommand {
    #[arg(
        short = 'n',
        long = "namespace",
        help = "Namespace written into the pod metadata. Defaults to `default`."
    )]
    pub namespace: Option<String>,

    #[arg(
        short = 'p',
        long = "pod-name",
        help = "Name written into the pod metadata. Defaults to the configured default pod name."
    )]
    pub pod_name: Option<String>,

    #[arg(short = 'o', long = "output", value_enum, default_value_t, help = "Output format.")]
    pub output: OutputFormat,

    #[arg(
        long = "spec-only",
        help = "Print only the pod spec instead of the whole Pod manifest."
    )]
    pub spec_only: bool,

    #[command(subcommand)]
    pub source: Option<Source>,
}

impl RenderCommand {
    /// Writes the manifest to stdout without contacting a cluster.
    ///
    /// Parameters that fail validation are reported as a warning and rendered
    /// anyway.
    ///
    /// # Errors
    ///
    /// Fails when the preset is missing, serialization fails or stdout cannot
    /// be written.
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let rendered = self.render(config)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes()).context(error::WriteStdoutSnafu)?;
        if !rendered.ends_with('\n') {
            stdout.write_all(b"\n").context(error::WriteStdoutSnafu)?;
        }
        Ok(())
    }

    fn render(self, config: &Config) -> Result<String, Error> {
        let Self { namespace, pod_name, output, spec_only, source } = self;
        let params = Source::resolve(source, config)?;

        // Rendering is total, like the builder; only warn about inputs that
        // `create` would reject.
        if let Err(err) = params.validate() {
            tracing::warn!("{err}");
        }

        if spec_only {
            serialize(&new_pod_spec(&params), output)
        } else {
            let namespace = namespace
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
            let pod_name = pod_name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| config.default_pod_name.clone());
            serialize(&new_pod(pod_name, namespace, &params), output)
        }
    }
}

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context(error::SerializeYamlSnafu),
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context(error::SerializeJsonSnafu)
        }
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::core::v1::{Pod, PodSpec};

    use super::*;

    fn command(output: OutputFormat, spec_only: bool, source: Option<Source>) -> RenderCommand {
        RenderCommand { namespace: None, pod_name: None, output, spec_only, source }
    }

    #[test]
    fn test_render_default_preset_as_yaml() {
        let rendered =
            command(OutputFormat::Yaml, false, None).render(&Config::default()).unwrap();
        let pod: Pod = serde_yaml::from_str(&rendered).unwrap();

        assert_eq!(pod.metadata.name.as_deref(), Some("kibana"));
        assert_eq!(pod.metadata.namespace.as_deref(), Some("default"));
        assert_eq!(
            pod.spec.unwrap().containers[0].image.as_deref(),
            Some("docker.elastic.co/kibana/kibana:6.8.23")
        );
        assert!(rendered.contains("kind: Pod"));
    }

    #[test]
    fn test_render_manual_spec_only_as_json() {
        let source = Source::Manual {
            version: "7.1.0".to_string(),
            elasticsearch_url: "http://es:9200".to_string(),
            custom_image_name: None,
        };
        let rendered = command(OutputFormat::Json, true, Some(source))
            .render(&Config::default())
            .unwrap();
        let spec: PodSpec = serde_json::from_str(&rendered).unwrap();

        let container = &spec.containers[0];
        assert_eq!(container.image.as_deref(), Some("docker.elastic.co/kibana/kibana:7.1.0"));
        assert_eq!(
            container.env.as_ref().unwrap()[0].value.as_deref(),
            Some("http://es:9200")
        );
    }

    #[test]
    fn test_render_keeps_degenerate_input() {
        let source = Source::Manual {
            version: String::new(),
            elasticsearch_url: String::new(),
            custom_image_name: None,
        };
        let rendered = command(OutputFormat::Json, true, Some(source))
            .render(&Config::default())
            .unwrap();
        let spec: PodSpec = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            spec.containers[0].image.as_deref(),
            Some("docker.elastic.co/kibana/kibana:")
        );
    }
}
