use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use gradlegen_core::{GeneratedFile, WriteResult};
use gradlegen_manifest::Manifest;
use gradlegen_script::{Node, Script};

use crate::{
    BuildGradle,
    sections::{allprojects_block, buildscript_block, model_block},
};

/// A file that would be generated
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of writing generated files
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Every generated file and what happened to it
    pub files: Vec<(PathBuf, WriteResult)>,
}

impl GenerateResult {
    /// Files whose content actually changed on disk
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|(_, result)| *result == WriteResult::Written)
            .map(|(path, _)| path.as_path())
    }
}

/// Android build script generator
pub struct Generator<'a> {
    manifest: &'a Manifest,
    base_dir: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            base_dir: PathBuf::from("."),
        }
    }

    /// Directory that relative source and include paths are resolved against.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Build the top-level node sequence of `build.gradle`.
    pub fn script(&self) -> Script {
        let project = &self.manifest.project;
        let mut script = Script::new();

        for plugin in &project.plugins {
            script.push(Node::plugin(plugin.as_str()));
        }
        tracing::debug!(plugins = project.plugins.len(), "applied plugins");

        script.push(buildscript_block(
            &project.repositories,
            &self.manifest.buildscript.dependencies,
        ));
        script.push(allprojects_block(&project.repositories));
        script.push(model_block(self.manifest, &self.base_dir));
        tracing::debug!(
            model = %project.model,
            native = self.manifest.has_native_sources(),
            build_types = self.manifest.build_types.len(),
            "built model block"
        );

        script
    }

    /// Preview generated files without writing to disk
    pub fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: BuildGradle::FILENAME.to_string(),
            content: BuildGradle::new(self.script()).render(),
        }]
    }

    /// Generate all files into the specified output directory
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let build_gradle = BuildGradle::new(self.script());
        let path = build_gradle.path(output_dir);
        let result = build_gradle
            .write(output_dir)
            .wrap_err_with(|| format!("failed to generate '{}'", path.display()))?;

        match result {
            WriteResult::Written => tracing::info!(path = %path.display(), "wrote build script"),
            WriteResult::Unchanged | WriteResult::Skipped => {
                tracing::info!(path = %path.display(), "build script up to date")
            }
        }

        Ok(GenerateResult {
            files: vec![(path, result)],
        })
    }
}
