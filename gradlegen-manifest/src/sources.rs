use serde::Deserialize;

/// Source groups of the `main` source set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceGroup {
    Java,
    Jni,
    Res,
}

impl SourceGroup {
    /// Groups in the order they appear in the build script.
    pub const ALL: [SourceGroup; 3] = [SourceGroup::Java, SourceGroup::Jni, SourceGroup::Res];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceGroup::Java => "java",
            SourceGroup::Jni => "jni",
            SourceGroup::Res => "res",
        }
    }
}

/// `[sources]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default)]
    pub java: Vec<String>,
    #[serde(default)]
    pub jni: Vec<String>,
    #[serde(default)]
    pub res: Vec<String>,
}

impl SourcesConfig {
    /// Directories of a group, exactly as written in the manifest.
    pub fn dirs(&self, group: SourceGroup) -> &[String] {
        match group {
            SourceGroup::Java => &self.java,
            SourceGroup::Jni => &self.jni,
            SourceGroup::Res => &self.res,
        }
    }
}
