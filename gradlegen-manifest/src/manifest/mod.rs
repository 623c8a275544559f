//! Manifest types and parsing for gradle.toml files.

mod file;
mod parse;
mod validate;

use indexmap::IndexMap;
use serde::Deserialize;

pub use file::GradleToml;
pub use validate::ParseContext;

use crate::{AndroidConfig, BuildType, BuildscriptConfig, ProjectConfig, SourcesConfig};

/// Root manifest for gradle.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project metadata, plugins and repositories
    pub project: ProjectConfig,

    /// Dependencies of the build script itself
    #[serde(default)]
    pub buildscript: BuildscriptConfig,

    /// Android application settings
    pub android: AndroidConfig,

    /// Build types in output order
    #[serde(default = "default_build_types")]
    pub build_types: IndexMap<String, BuildType>,

    /// Source directories of the `main` source set
    #[serde(default)]
    pub sources: SourcesConfig,
}

fn default_build_types() -> IndexMap<String, BuildType> {
    ["Debug", "Release"]
        .into_iter()
        .map(|name| (name.to_string(), BuildType::default()))
        .collect()
}

impl Manifest {
    /// Whether the project builds native code.
    pub fn has_native_sources(&self) -> bool {
        self.android.ndk.is_some()
    }
}
