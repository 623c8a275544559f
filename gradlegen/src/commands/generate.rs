use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use gradlegen_android::Generator;
use gradlegen_manifest::{GradleToml, MANIFEST_FILENAME};

use super::UnwrapOrExit;
use crate::reports::{GenerateReport, PreviewReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to gradle.toml (defaults to ./gradle.toml)
    #[arg(short, long, default_value = MANIFEST_FILENAME)]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let gradle_toml = GradleToml::open(&self.config).unwrap_or_exit();
        let manifest = gradle_toml.manifest();
        tracing::debug!(config = %self.config.display(), "loaded manifest");

        let generator = Generator::new(manifest).with_base_dir(gradle_toml.base_dir());
        let mut out = TerminalOutput::new();

        if self.dry_run {
            PreviewReport {
                files: generator.preview(),
            }
            .render(&mut out);
            return Ok(());
        }

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate build script")?;

        GenerateReport {
            project: manifest.project.name.clone(),
            output_dir: self.output.clone(),
            result,
        }
        .render(&mut out);

        Ok(())
    }
}
