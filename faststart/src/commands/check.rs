use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use faststart_config::{FaststartToml, MANIFEST_FILE};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to faststart.toml (defaults to ./faststart.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory the configuration would generate into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let faststart_toml = FaststartToml::open(&self.config).unwrap_or_exit();
        let config = faststart_toml
            .manifest()
            .to_config(&self.output)
            .unwrap_or_exit();

        ops::check(&config, faststart_toml.path()).render(&mut TerminalOutput::new());

        Ok(())
    }
}
