use clap::Parser;
use kibana_pod_spec::PodSpecParams;
use snafu::OptionExt;

use crate::{
    cli::{Error, error},
    config::Config,
};

/// Where the pod parameters come from.
#[derive(Clone, Debug, Parser)]
pub enum Source {
    /// Use the default preset from the configuration file.
    Default,

    /// Use a named preset from the configuration file.
    Preset {
        #[arg(help = "Name of the preset to use from the configuration file.")]
        preset_name: String,
    },

    /// Specify the parameters on the command line.
    Manual {
        #[arg(
            long = "kibana-version",
            default_value = "",
            help = "Kibana version; selects the image tag when no custom image is given."
        )]
        version: String,

        #[arg(
            long = "elasticsearch-url",
            help = "URL of the Elasticsearch cluster, passed to Kibana as ELASTICSEARCH_URL."
        )]
        elasticsearch_url: String,

        #[arg(
            long = "image",
            help = "Custom container image. Overrides the default image and the version tag."
        )]
        custom_image_name: Option<String>,
    },
}

impl Source {
    /// Resolves the parameters against `config`. `None` means the default
    /// preset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PresetNotFound`] when a named preset does not exist.
    pub fn resolve(source: Option<Self>, config: &Config) -> Result<PodSpecParams, Error> {
        match source {
            None | Some(Self::Default) => Ok(config.find_default_preset().params()),
            Some(Self::Preset { preset_name }) => config
                .find_preset_by_name(&preset_name)
                .map(|preset| preset.params())
                .context(error::PresetNotFoundSnafu { preset_name }),
            Some(Self::Manual { version, elasticsearch_url, custom_image_name }) => {
                Ok(PodSpecParams { version, elasticsearch_url, custom_image_name })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    fn config() -> Config {
        Config {
            presets: vec![
                Preset::default(),
                Preset {
                    name: "prod".to_string(),
                    params: PodSpecParams::new("7.1.0", "http://es-prod:9200"),
                },
            ],
            ..Config::default()
        }
    }

    #[test]
    fn test_resolve_default() {
        let params = Source::resolve(None, &config()).unwrap();
        assert_eq!(params, Preset::default().params);
        assert_eq!(Source::resolve(Some(Source::Default), &config()).unwrap(), params);
    }

    #[test]
    fn test_resolve_preset() {
        let params =
            Source::resolve(Some(Source::Preset { preset_name: "prod".to_string() }), &config())
                .unwrap();
        assert_eq!(params.elasticsearch_url, "http://es-prod:9200");
    }

    #[test]
    fn test_resolve_missing_preset() {
        let err =
            Source::resolve(Some(Source::Preset { preset_name: "nope".to_string() }), &config())
                .unwrap_err();
        assert!(matches!(err, Error::PresetNotFound { ref preset_name } if preset_name == "nope"));
    }

    #[test]
    fn test_resolve_manual() {
        let source = Source::Manual {
            version: "7.1.0".to_string(),
            elasticsearch_url: "http://es:9200".to_string(),
            custom_image_name: Some("myrepo/kibana:custom".to_string()),
        };
        let params = Source::resolve(Some(source), &config()).unwrap();
        assert_eq!(params.image(), "myrepo/kibana:custom");
    }

    #[test]
    fn test_parse_manual_flags() {
        let source = Source::try_parse_from([
            "source",
            "manual",
            "--kibana-version",
            "7.1.0",
            "--elasticsearch-url",
            "http://es:9200",
        ])
        .unwrap();
        let params = Source::resolve(Some(source), &config()).unwrap();
        assert_eq!(params, PodSpecParams::new("7.1.0", "http://es:9200"));
    }
}
