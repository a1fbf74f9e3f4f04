use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use faststart_config::{FaststartToml, MANIFEST_FILE};

use super::{Overrides, UnwrapOrExit};
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to faststart.toml (defaults to ./faststart.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub overrides: Overrides,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let faststart_toml = FaststartToml::open(&self.config).unwrap_or_exit();

        // CLI flags win over faststart.toml
        let mut manifest = faststart_toml.manifest().clone();
        self.overrides.apply(&mut manifest.project);
        let config = manifest.to_config(&self.output).unwrap_or_exit();

        let report = ops::bake(
            &config,
            BakeOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
