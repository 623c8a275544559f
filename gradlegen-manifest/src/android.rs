use indexmap::IndexMap;
use serde::Deserialize;

use crate::de::scalar;

/// `[android]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AndroidConfig {
    /// Application id written into `defaultConfig`
    pub application_id: String,

    #[serde(default = "default_compile_sdk_version", deserialize_with = "scalar")]
    pub compile_sdk_version: String,

    #[serde(default = "default_build_tools_version", deserialize_with = "scalar")]
    pub build_tools_version: String,

    #[serde(default = "default_min_sdk_api_level", deserialize_with = "scalar")]
    pub min_sdk_api_level: String,

    #[serde(default = "default_target_sdk_api_level", deserialize_with = "scalar")]
    pub target_sdk_api_level: String,

    /// Global switch for `minifyEnabled` in build types
    #[serde(default = "default_true")]
    pub minify_enabled: bool,

    /// ABIs to create product flavors for; every known ABI when absent
    #[serde(default)]
    pub supported_abis: Option<Vec<String>>,

    /// Flavor architecture overrides, keyed by ABI
    #[serde(default)]
    pub abi_architectures: IndexMap<String, String>,

    /// Native build settings; absent for Java-only projects
    #[serde(default)]
    pub ndk: Option<NdkConfig>,
}

fn default_compile_sdk_version() -> String {
    "23".to_string()
}

fn default_build_tools_version() -> String {
    "23.0.2".to_string()
}

fn default_min_sdk_api_level() -> String {
    "4".to_string()
}

fn default_target_sdk_api_level() -> String {
    "23".to_string()
}

fn default_true() -> bool {
    true
}

/// `[android.ndk]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NdkConfig {
    #[serde(default = "default_platform_version", deserialize_with = "scalar")]
    pub platform_version: String,

    /// Native module name; `<project>-jni` when absent
    #[serde(default)]
    pub module_name: Option<String>,

    pub toolchain: String,

    /// Compiler flags, separated by spaces
    #[serde(default)]
    pub flags: String,

    /// Include directories, added as `-I<dir>` flags
    #[serde(default)]
    pub include_dirs: Vec<String>,
}

fn default_platform_version() -> String {
    "9".to_string()
}

impl NdkConfig {
    /// Resolve the module name for the given project.
    pub fn module_name_for(&self, project_name: &str) -> String {
        self.module_name
            .clone()
            .unwrap_or_else(|| format!("{project_name}-jni"))
    }
}
