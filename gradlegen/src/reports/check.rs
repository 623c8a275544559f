//! Check command report data structures.

use std::path::PathBuf;

use gradlegen_manifest::Manifest;

use super::output::{Output, Report};

/// Summary of a valid manifest.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub project: String,
    pub plugins: Vec<String>,
    pub application_id: String,
    pub compile_sdk_version: String,
    /// Native module name, when the project builds native code.
    pub native_module: Option<String>,
    /// Build type names paired with their resolved config type.
    pub build_types: Vec<(String, String)>,
}

impl CheckReport {
    pub fn new(config_path: impl Into<PathBuf>, manifest: &Manifest) -> Self {
        let project = &manifest.project;
        let android = &manifest.android;
        Self {
            config_path: config_path.into(),
            project: project.name.clone(),
            plugins: project.plugins.clone(),
            application_id: android.application_id.clone(),
            compile_sdk_version: android.compile_sdk_version.clone(),
            native_module: android
                .ndk
                .as_ref()
                .map(|ndk| ndk.module_name_for(&project.name)),
            build_types: manifest
                .build_types
                .iter()
                .map(|(name, build_type)| {
                    let config = build_type.resolve_config_type(name);
                    (name.clone(), config.to_string())
                })
                .collect(),
        }
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section(&self.project);
        out.key_value("application", &self.application_id);
        out.key_value("compile sdk", &self.compile_sdk_version);
        if let Some(module) = &self.native_module {
            out.key_value("native module", module);
        }

        if !self.plugins.is_empty() {
            out.section("plugins");
            for plugin in &self.plugins {
                out.list_item(plugin);
            }
        }

        out.section("build types");
        for (name, config) in &self.build_types {
            out.list_item(&format!("{} ({})", name, config));
        }
    }
}
