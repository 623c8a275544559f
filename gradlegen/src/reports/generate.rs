//! Generate command report data structures.

use std::path::PathBuf;

use gradlegen_android::{GenerateResult, PreviewFile};
use gradlegen_core::WriteResult;

use super::output::{Output, Report};

/// Files that would be generated by a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }
        out.divider("Summary");
        out.title(&format!(
            "{} file{} would be generated",
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" }
        ));
    }
}

/// Files written by a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub project: String,
    pub output_dir: PathBuf,
    pub result: GenerateResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!(
            "{} -> {}",
            self.project,
            self.output_dir.display()
        ));

        for (path, result) in &self.result.files {
            match result {
                WriteResult::Written => out.added_item(&path.display().to_string()),
                WriteResult::Unchanged | WriteResult::Skipped => {
                    out.list_item(&format!("{} (unchanged)", path.display()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_preview_report() {
        let report = PreviewReport {
            files: vec![PreviewFile {
                path: "build.gradle".into(),
                content: "model {\n}\n".into(),
            }],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "-- build.gradle --",
                "model {\n}\n",
                "-- Summary --",
                "1 file would be generated",
            ]
        );
    }

    #[test]
    fn test_generate_report() {
        let report = GenerateReport {
            project: "hello".into(),
            output_dir: PathBuf::from("out"),
            result: GenerateResult {
                files: vec![
                    (PathBuf::from("out/build.gradle"), WriteResult::Written),
                    (PathBuf::from("out/other.gradle"), WriteResult::Unchanged),
                ],
            },
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "hello -> out",
                "+ out/build.gradle",
                "- out/other.gradle (unchanged)",
            ]
        );
    }
}
