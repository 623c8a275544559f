use serde::Deserialize;

/// Project metadata and the top of the build script
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name, used to derive the default native module name
    pub name: String,

    /// Name of the top-level model block
    #[serde(default = "default_model")]
    pub model: String,

    /// Plugins applied at the top of the script, in order
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Repositories used by both `buildscript` and `allprojects`
    #[serde(default = "default_repositories")]
    pub repositories: Vec<String>,
}

fn default_model() -> String {
    "model".to_string()
}

fn default_repositories() -> Vec<String> {
    vec!["jcenter".to_string()]
}

/// `[buildscript]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildscriptConfig {
    #[serde(default = "default_dependencies")]
    pub dependencies: Vec<Dependency>,
}

impl Default for BuildscriptConfig {
    fn default() -> Self {
        Self {
            dependencies: default_dependencies(),
        }
    }
}

/// A buildscript dependency such as `classpath 'group:artifact:version'`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    /// Dependency configuration (`classpath`)
    pub configuration: String,
    /// Dependency notation (`group:artifact:version`)
    pub notation: String,
}

impl Dependency {
    pub fn new(configuration: impl Into<String>, notation: impl Into<String>) -> Self {
        Self {
            configuration: configuration.into(),
            notation: notation.into(),
        }
    }
}

fn default_dependencies() -> Vec<Dependency> {
    vec![Dependency::new(
        "classpath",
        "com.android.tools.build:gradle-experimental:0.7.0",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_defaults() {
        let project: ProjectConfig = toml::from_str(r#"name = "hello""#).unwrap();
        assert_eq!(project.model, "model");
        assert!(project.plugins.is_empty());
        assert_eq!(project.repositories, vec!["jcenter"]);
    }

    #[test]
    fn test_buildscript_default_dependency() {
        let buildscript = BuildscriptConfig::default();
        assert_eq!(
            buildscript.dependencies,
            vec![Dependency::new(
                "classpath",
                "com.android.tools.build:gradle-experimental:0.7.0"
            )]
        );
    }

    #[test]
    fn test_buildscript_dependencies() {
        let buildscript: BuildscriptConfig = toml::from_str(
            r#"
            [[dependencies]]
            configuration = "classpath"
            notation = "com.android.tools.build:gradle:2.2.0"
            "#,
        )
        .unwrap();
        assert_eq!(buildscript.dependencies.len(), 1);
        assert_eq!(
            buildscript.dependencies[0].notation,
            "com.android.tools.build:gradle:2.2.0"
        );
    }
}
