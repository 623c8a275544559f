//! Build types and their configuration kind.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Whether a build type behaves like a debug or a release build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ConfigType {
    Debug,
    Release,
}

impl ConfigType {
    /// Returns the config type as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigType::Debug => "debug",
            ConfigType::Release => "release",
        }
    }

    /// Guess the config type from a build type name.
    ///
    /// Names containing "debug" are debug builds, names containing "release"
    /// are release builds (case-insensitive). Returns `None` otherwise.
    pub fn detect(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        if name.contains("debug") {
            Some(ConfigType::Debug)
        } else if name.contains("release") {
            Some(ConfigType::Release)
        } else {
            None
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConfigType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(ConfigType::Debug),
            "release" => Ok(ConfigType::Release),
            _ => Err(format!(
                "unknown config type '{}', expected 'debug' or 'release'",
                s
            )),
        }
    }
}

impl TryFrom<String> for ConfigType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// `[build_types.<name>]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildType {
    /// Extra compiler flags for this build type, separated by spaces
    #[serde(default)]
    pub flags: String,

    /// Explicit `minifyEnabled`; derived from the config type when absent
    #[serde(default)]
    pub minify_enabled: Option<bool>,

    /// Explicit config type; detected from the name when absent
    #[serde(default)]
    pub config_type: Option<ConfigType>,
}

impl BuildType {
    /// Resolve the config type for a build type called `name`.
    ///
    /// Unknown names fall back to [`ConfigType::Release`].
    pub fn resolve_config_type(&self, name: &str) -> ConfigType {
        self.config_type
            .or_else(|| ConfigType::detect(name))
            .unwrap_or(ConfigType::Release)
    }

    /// Resolve `minifyEnabled`: explicit value, else true for release builds.
    pub fn resolve_minify(&self, name: &str) -> bool {
        self.minify_enabled
            .unwrap_or_else(|| self.resolve_config_type(name) == ConfigType::Release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ConfigType::from_str("debug").unwrap(), ConfigType::Debug);
        assert_eq!(ConfigType::from_str("RELEASE").unwrap(), ConfigType::Release);
        assert!(ConfigType::from_str("profile").is_err());
    }

    #[test]
    fn test_detect() {
        assert_eq!(ConfigType::detect("Debug"), Some(ConfigType::Debug));
        assert_eq!(ConfigType::detect("myDEBUGbuild"), Some(ConfigType::Debug));
        assert_eq!(ConfigType::detect("Release"), Some(ConfigType::Release));
        assert_eq!(ConfigType::detect("RelWithDebInfo"), None);
    }

    #[test]
    fn test_resolve_config_type() {
        let explicit = BuildType {
            config_type: Some(ConfigType::Debug),
            ..Default::default()
        };
        assert_eq!(explicit.resolve_config_type("Release"), ConfigType::Debug);
        assert_eq!(
            BuildType::default().resolve_config_type("MinSizeRel"),
            ConfigType::Release
        );
    }

    #[test]
    fn test_resolve_minify() {
        assert!(!BuildType::default().resolve_minify("Debug"));
        assert!(BuildType::default().resolve_minify("Release"));
        assert!(BuildType::default().resolve_minify("Profile"));

        let forced = BuildType {
            minify_enabled: Some(true),
            ..Default::default()
        };
        assert!(forced.resolve_minify("Debug"));
    }

    #[test]
    fn test_deserialize_config_type() {
        let build_type: BuildType = toml::from_str(r#"config_type = "Debug""#).unwrap();
        assert_eq!(build_type.config_type, Some(ConfigType::Debug));

        let err = toml::from_str::<BuildType>(r#"config_type = "fast""#).unwrap_err();
        assert!(err.message().contains("unknown config type 'fast'"));
    }
}
