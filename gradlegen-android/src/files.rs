use std::path::{Path, PathBuf};

use gradlegen_core::{FileRules, GeneratedFile};
use gradlegen_script::Script;

/// The project's `build.gradle`
pub struct BuildGradle {
    script: Script,
}

impl BuildGradle {
    pub const FILENAME: &'static str = "build.gradle";

    pub fn new(script: Script) -> Self {
        Self { script }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }
}

impl GeneratedFile for BuildGradle {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILENAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed()
    }

    fn render(&self) -> String {
        self.script.render()
    }
}
