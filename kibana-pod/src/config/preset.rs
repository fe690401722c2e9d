use kibana_pod_base::consts;
use kibana_pod_spec::PodSpecParams;
use serde::{Deserialize, Serialize};

/// Kibana version used by the built-in preset.
pub const DEFAULT_KIBANA_VERSION: &str = "6.8.23";

/// A named set of pod parameters stored in the configuration file.
///
/// ```yaml
/// presets:
///   - name: staging
///     version: 6.8.23
///     elasticsearchUrl: http://elasticsearch.staging:9200
///     customImageName: registry.local/kibana:6.8.23-patched
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,

    #[serde(flatten)]
    pub params: PodSpecParams,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            name: consts::DEFAULT_PRESET.to_string(),
            params: PodSpecParams::new(DEFAULT_KIBANA_VERSION, consts::DEFAULT_ELASTICSEARCH_URL),
        }
    }
}

impl Preset {
    #[must_use]
    pub fn params(&self) -> PodSpecParams { self.params.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flattened_params() {
        let preset: Preset = serde_yaml::from_str(
            "name: staging\nversion: 7.1.0\nelasticsearchUrl: http://es:9200\n\
             customImageName: myrepo/kibana:custom\n",
        )
        .unwrap();

        assert_eq!(preset.name, "staging");
        assert_eq!(preset.params.version, "7.1.0");
        assert_eq!(preset.params.elasticsearch_url, "http://es:9200");
        assert_eq!(preset.params().image(), "myrepo/kibana:custom");
    }

    #[test]
    fn test_default_preset_is_valid() {
        let preset = Preset::default();
        assert_eq!(preset.name, "default");
        preset.params().validate().unwrap();
        assert_eq!(preset.params().image(), "docker.elastic.co/kibana/kibana:6.8.23");
    }
}
