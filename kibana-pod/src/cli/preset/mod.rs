mod list;

use clap::Subcommand;

use crate::{cli::Error, config::Config};

#[derive(Clone, Subcommand)]
pub enum PresetCommands {
    #[command(alias = "l", about = "List the presets defined in the configuration file")]
    List(list::ListCommand),
}

impl PresetCommands {
    /// Runs the selected preset subcommand.
    ///
    /// # Errors
    ///
    /// Propagates the error of the subcommand.
    pub async fn run(self, config: Config) -> Result<(), Error> {
        match self {
            Self::List(cmd) => cmd.run(config).await,
        }
    }
}
