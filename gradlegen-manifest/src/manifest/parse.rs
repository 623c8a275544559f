//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::validate_manifest};
use crate::{Error, MANIFEST_FILENAME, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILENAME)
    }
}

impl Manifest {
    /// Parse a gradle.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a gradle.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigType, Dependency};

    const MINIMAL: &str = r#"
        [project]
        name = "hello"

        [android]
        application_id = "com.example.hello"
    "#;

    #[test]
    fn test_minimal_manifest_defaults() {
        let manifest = Manifest::from_str(MINIMAL).unwrap();
        assert_eq!(manifest.project.name, "hello");
        assert_eq!(
            manifest.buildscript.dependencies,
            vec![Dependency::new(
                "classpath",
                "com.android.tools.build:gradle-experimental:0.7.0"
            )]
        );
        assert_eq!(
            manifest.build_types.keys().collect::<Vec<_>>(),
            ["Debug", "Release"]
        );
        assert!(!manifest.has_native_sources());
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [project]
            name = "hello"
            model = "model"
            plugins = ["com.android.model.application"]
            repositories = ["jcenter", "mavenCentral"]

            [[buildscript.dependencies]]
            configuration = "classpath"
            notation = "com.android.tools.build:gradle-experimental:0.8.0"

            [android]
            application_id = "com.example.hello"
            compile_sdk_version = 24
            supported_abis = ["x86", "armeabi-v7a"]

            [android.abi_architectures]
            x86 = "intel"

            [android.ndk]
            toolchain = "clang"
            flags = "-Wall"
            include_dirs = ["include"]

            [build_types.Profile]
            config_type = "release"
            minify_enabled = false

            [build_types.Debug]
            flags = "-g -O0"

            [sources]
            java = ["src/main/java"]
            "#,
        )
        .unwrap();

        assert_eq!(manifest.project.repositories, ["jcenter", "mavenCentral"]);
        assert_eq!(manifest.android.compile_sdk_version, "24");
        assert_eq!(manifest.android.abi_architectures["x86"], "intel");
        assert!(manifest.has_native_sources());
        assert_eq!(
            manifest.build_types.keys().collect::<Vec<_>>(),
            ["Profile", "Debug"]
        );
        assert_eq!(
            manifest.build_types["Profile"].config_type,
            Some(ConfigType::Release)
        );
        assert_eq!(manifest.build_types["Debug"].flags, "-g -O0");
    }

    #[test]
    fn test_missing_android_section() {
        let err = Manifest::from_str("[project]\nname = \"hello\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Manifest::from_str(&format!("{MINIMAL}\n[extra]\nkey = 1\n")).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("gradle.toml");
        std::fs::write(&path, MINIMAL).unwrap();
        assert_eq!(Manifest::from_file(&path).unwrap().project.name, "hello");
    }
}
