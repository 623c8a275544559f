use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gradlegen_manifest::{GradleToml, MANIFEST_FILENAME};

use super::UnwrapOrExit;
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to gradle.toml (defaults to ./gradle.toml)
    #[arg(short, long, default_value = MANIFEST_FILENAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let gradle_toml = GradleToml::open(&self.config).unwrap_or_exit();

        CheckReport::new(&self.config, gradle_toml.manifest()).render(&mut TerminalOutput::new());

        Ok(())
    }
}
