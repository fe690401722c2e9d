mod error;
mod preset;

use std::path::{Path, PathBuf};

use kibana_pod_base::consts;
use kibana_pod_cli::config::LogConfig;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{error::Error, preset::Preset};

/// The `kibana-pod` configuration file.
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Pod name used when a command is not given `--pod-name`.
    #[serde(default = "default_pod_name")]
    pub default_pod_name: String,

    /// Name of the preset used by the `default` source.
    #[serde(default = "default_preset")]
    pub default_preset: String,

    /// Named pod parameters.
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,

    /// Logging sinks, level and format.
    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_pod_name: default_pod_name(),
            default_preset: default_preset(),
            presets: default_presets(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Returns the first configuration file that exists, searching
    /// [`Self::default_path`] and then `~/.config/kibana-pod/config.yaml` and
    /// `~/.kibana-pod/config.yaml`.
    ///
    /// # Returns
    ///
    /// The first existing path, or [`Self::default_path`] when none exists.
    pub fn search_config_file_path() -> PathBuf {
        let paths = vec![Self::default_path()]
            .into_iter()
            .chain(kibana_pod_base::fallback_project_config_directories().into_iter().map(
                |mut path| {
                    path.push(kibana_pod_base::CLI_CONFIG_NAME);
                    path
                },
            ))
            .collect::<Vec<_>>();
        for path in paths {
            let Ok(exists) = path.try_exists() else {
                continue;
            };
            if exists {
                return path;
            }
        }
        Self::default_path()
    }

    /// `config.yaml` in the platform configuration directory.
    #[inline]
    pub fn default_path() -> PathBuf {
        [
            kibana_pod_base::PROJECT_CONFIG_DIR.to_path_buf(),
            PathBuf::from(kibana_pod_base::CLI_CONFIG_NAME),
        ]
        .into_iter()
        .collect()
    }

    /// Reads the configuration file at `path`, expanding `~` in it and in the
    /// configured log file path.
    ///
    /// # Errors
    ///
    /// Fails when a path cannot be resolved, the file cannot be read, or its
    /// content is not a valid configuration.
    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = resolve_file_path(path.as_ref())?;
        let data =
            std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
        let mut config = Self::from_slice(&data)
            .with_context(|_| error::ParseConfigSnafu { filename: path.clone() })?;

        config.log.file_path =
            config.log.file_path.as_deref().map(resolve_file_path).transpose()?;

        Ok(config)
    }

    /// Like [`Self::load`], but a file that does not exist yields
    /// [`Config::default`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        if path.try_exists().unwrap_or(false) {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn from_slice(data: &[u8]) -> Result<Self, serde_yaml::Error> { serde_yaml::from_slice(data) }

    /// The default configuration rendered as YAML.
    ///
    /// # Errors
    ///
    /// Fails only if the configuration cannot be serialized.
    pub fn template_basic() -> Result<String, Error> {
        serde_yaml::to_string(&Self::default()).context(error::SerializeConfigSnafu)
    }

    /// The preset named by `defaultPreset`, or [`Preset::default`] when no
    /// preset has that name.
    pub fn find_default_preset(&self) -> Preset {
        self.find_preset_by_name(&self.default_preset).unwrap_or_default()
    }

    pub fn find_preset_by_name(&self, name: &str) -> Option<Preset> {
        self.presets.iter().find(|preset| preset.name == name).cloned()
    }
}

fn resolve_file_path(path: &Path) -> Result<PathBuf, Error> {
    path.try_resolve()
        .map(|path| path.to_path_buf())
        .with_context(|_| error::ResolveFilePathSnafu { file_path: path.to_path_buf() })
}

fn default_pod_name() -> String { consts::DEFAULT_POD_NAME.to_string() }

fn default_preset() -> String { consts::DEFAULT_PRESET.to_string() }

fn default_presets() -> Vec<Preset> { vec![Preset::default()] }

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_slice(b"{}").unwrap();
        assert_eq!(config.default_pod_name, "kibana");
        assert_eq!(config.default_preset, "default");
        assert_eq!(config.presets, vec![Preset::default()]);
    }

    #[test]
    fn test_find_presets() {
        let config = Config::from_slice(
            br"
defaultPreset: prod
presets:
  - name: prod
    version: 7.1.0
    elasticsearchUrl: http://es-prod:9200
  - name: custom
    customImageName: myrepo/kibana:custom
    elasticsearchUrl: http://es:9200
",
        )
        .unwrap();

        let prod = config.find_default_preset();
        assert_eq!(prod.name, "prod");
        assert_eq!(prod.params().image(), "docker.elastic.co/kibana/kibana:7.1.0");

        let custom = config.find_preset_by_name("custom").unwrap();
        assert_eq!(custom.params().image(), "myrepo/kibana:custom");
        assert!(custom.params.version.is_empty());

        assert!(config.find_preset_by_name("missing").is_none());
    }

    #[test]
    fn test_missing_default_preset_falls_back() {
        let config = Config::from_slice(b"defaultPreset: nope\npresets: []\n").unwrap();
        assert_eq!(config.find_default_preset(), Preset::default());
    }

    #[test]
    fn test_template_round_trips() {
        let template = Config::template_basic().unwrap();
        let config = Config::from_slice(template.as_bytes()).unwrap();
        assert_eq!(config.presets, Config::default().presets);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path =
            std::env::temp_dir().join(format!("kibana-pod-test-{}.yaml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"defaultPodName: my-kibana\nlog:\n  level: debug\n").unwrap();
        drop(file);

        let config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.default_pod_name, "my-kibana");
        assert_eq!(config.log.level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("kibana-pod-test-does-not-exist.yaml");
        assert!(Config::load(&path).is_err());
        assert_eq!(Config::load_or_default(&path).unwrap().presets, Config::default().presets);
    }
}
