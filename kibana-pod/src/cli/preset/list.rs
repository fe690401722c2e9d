use clap::Args;
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::{Error, error},
    config::Config,
    ui::table::PresetExt,
};

#[derive(Args, Clone)]
pub struct ListCommand {}

impl ListCommand {
    /// Prints the configured presets as a table, marking the default one.
    ///
    /// # Errors
    ///
    /// Fails only if writing to stdout fails.
    pub async fn run(self, config: Config) -> Result<(), Error> {
        let table = config.presets.render_table(&config.default_preset);
        let mut stdout = tokio::io::stdout();
        stdout.write_all(table.as_bytes()).await.context(error::WriteStdoutSnafu)?;
        stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)
    }
}
