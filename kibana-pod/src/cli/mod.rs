//! The `kibana-pod` command-line interface.
//!
//! # Examples
//!
//! ```bash
//! # Print the pod manifest for the default preset
//! kibana-pod render
//!
//! # Print only the pod spec for explicit parameters, as JSON
//! kibana-pod render --spec-only -o json manual --kibana-version 7.1.0 \
//!     --elasticsearch-url http://es:9200
//!
//! # Create a Kibana pod from a preset and wait until it is ready
//! kibana-pod create -n observability --wait preset staging
//!
//! # List and delete Kibana pods created by this tool
//! kibana-pod list -A
//! kibana-pod delete -n observability --all
//! ```

mod create;
mod delete;
pub mod error;
mod internal;
mod list;
mod preset;
mod render;
mod source;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use futures::FutureExt;
use kibana_pod_base::{CLI_PROGRAM_NAME, PROJECT_NAME, consts::k8s::labels};
use snafu::ResultExt;
use tokio::runtime::Runtime;

pub use self::error::Error;
use self::{
    create::CreateCommand, delete::DeleteCommand, list::ListCommand, preset::PresetCommands,
    render::RenderCommand,
};
use crate::{config::Config, shadow};

#[derive(Parser)]
#[command(
    name = CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "Build, render and run Kibana pods on Kubernetes.",
    long_about = "kibana-pod turns a Kibana version, an Elasticsearch URL and an optional \
                  custom image into a Kubernetes pod specification with fixed defaults \
                  (probes, ports, scheduling policy). It can print the result or create \
                  the pod in a cluster, and keeps named parameter presets in a YAML \
                  configuration file.",
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    #[clap(
        long = "config",
        short = 'c',
        env = "KIBANA_POD_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/kibana-pod/config.yaml or \
                KIBANA_POD_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "log-level",
        env = "KIBANA_POD_LOG_LEVEL",
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display client and server version information")]
    Version {
        #[clap(long = "client", help = "If true, shows client version only (no server required).")]
        client: bool,
    },

    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    #[command(alias = "r", about = "Print the Kibana pod manifest without contacting a cluster")]
    Render(RenderCommand),

    #[command(alias = "c", about = "Create a Kibana pod in the cluster")]
    Create(CreateCommand),

    #[command(alias = "d", about = "Delete Kibana pods created by this tool")]
    Delete(DeleteCommand),

    #[command(alias = "l", about = "List Kibana pods created by this tool")]
    List(ListCommand),

    #[command(alias = "p", about = "Manage parameter presets")]
    Preset {
        #[command(subcommand)]
        commands: PresetCommands,
    },
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration and applies the `--log-level` override.
    ///
    /// An explicitly given config file must exist; when the file is looked up
    /// in the default locations and none exists, the defaults are used.
    fn load_config(&self) -> Result<Config, Error> {
        let mut config = match &self.config_file {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(Config::search_config_file_path())?,
        };

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }

        Ok(config)
    }

    /// Runs the parsed command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be loaded, the
    /// Kubernetes client or the Tokio runtime cannot be initialized, or the
    /// subcommand fails.
    ///
    /// # Panics
    ///
    /// Panics if writing the version or help text to stdout/stderr fails.
    pub fn run(self) -> Result<i32, Error> {
        let client_version = Self::command().get_version().unwrap_or_default().to_string();
        match self.commands {
            Some(Commands::Version { client }) if client => {
                std::io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .expect("Failed to write to stdout");
                std::io::stdout()
                    .write_all(format!("Client Version: {client_version}\n").as_bytes())
                    .expect("Failed to write to stdout");

                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                let template = Config::template_basic()?;
                std::io::stdout()
                    .write_all(template.as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();

        let fut = async move {
            match self.commands {
                Some(Commands::Version { .. }) => {
                    let kube_client = new_kube_client().await?;
                    let server_version = kube_client.apiserver_version().await.map_or_else(
                        |_| "unknown".to_string(),
                        |info| format!("{}.{}", info.major, info.minor),
                    );
                    let info = format!(
                        "Client Version: {client_version}\nServer Version: {server_version}\n",
                    );
                    std::io::stdout()
                        .write_all(Self::command().render_long_version().as_bytes())
                        .expect("Failed to write to stdout");
                    std::io::stdout()
                        .write_all(info.as_bytes())
                        .expect("Failed to write to stdout");
                }
                Some(Commands::Render(cmd)) => cmd.run(&config)?,
                Some(Commands::Preset { commands }) => commands.run(config).await?,
                Some(Commands::Create(cmd)) => {
                    cmd.run(new_kube_client().await?, config).boxed().await?;
                }
                Some(Commands::List(cmd)) => cmd.run(new_kube_client().await?, config).await?,
                Some(Commands::Delete(cmd)) => cmd.run(new_kube_client().await?, config).await?,
                _ => {
                    let help = Self::command().render_long_help().ansi().to_string();
                    std::io::stderr()
                        .write_all(help.as_bytes())
                        .expect("Failed to write to stderr");
                    return Ok(-1);
                }
            }

            Ok(0)
        };

        Runtime::new().context(error::InitializeTokioRuntimeSnafu)?.block_on(fut)
    }
}

async fn new_kube_client() -> Result<kube::Client, Error> {
    kube::Client::try_default().await.context(error::KubeConfigSnafu)
}

/// Label selector matching every pod created by this tool.
fn managed_by_selector() -> String { format!("{}={PROJECT_NAME}", labels::MANAGED_BY) }
