//! `gradle.toml` manifest parsing and validation.
//!
//! The manifest describes an Android project the way the build-script
//! generator needs it: plugins, repositories, SDK levels, native build
//! settings, build types and source directories. Every optional setting
//! falls back to the defaults the generated `build.gradle` expects.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod android;
mod build_type;
mod de;
mod error;
mod manifest;
mod project;
mod sources;

pub use android::{AndroidConfig, NdkConfig};
pub use build_type::{BuildType, ConfigType};
pub use error::{Error, Result, SourceContext};
pub use manifest::{GradleToml, Manifest, ParseContext};
pub use project::{BuildscriptConfig, Dependency, ProjectConfig};
pub use sources::{SourceGroup, SourcesConfig};

/// Default manifest filename.
pub const MANIFEST_FILENAME: &str = "gradle.toml";
