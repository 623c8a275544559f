//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, so nested validation can report
/// `android.ndk.toolchain` instead of just `toolchain`.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "gradle.toml");
/// let ndk = ctx.push("android").push("ndk");
/// ndk.require_non_empty("toolchain", &config.toolchain)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["android", "ndk"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the dotted path of `field` under the current context.
    pub fn field_path(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path.join("."), field)
        }
    }

    /// Fail when `value` is empty or only whitespace.
    pub fn require_non_empty(&self, field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(self
                .source
                .empty_value_error(self.field_path(field), find_key_span(self.src(), field)));
        }
        Ok(())
    }

    /// Fail when any entry of a string list is empty.
    pub fn require_non_empty_entries(&self, field: &str, values: &[String]) -> Result<()> {
        for value in values {
            if value.trim().is_empty() {
                let span = find_value_span(self.src(), "").or_else(|| find_key_span(self.src(), field));
                return Err(self
                    .source
                    .empty_value_error(format!("{} entry", self.field_path(field)), span));
            }
        }
        Ok(())
    }

    /// Validate a name that becomes a block header in the build script.
    pub fn validate_block_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = block_name_problem(name) {
            return Err(self.source.invalid_block_name_error(
                name,
                kind,
                reason,
                find_name_span(self.src(), name).or_else(|| find_value_span(self.src(), name)),
            ));
        }
        Ok(())
    }

    /// Fail on the first value listed twice.
    pub fn reject_duplicates(&self, values: &[String]) -> Result<()> {
        for (i, value) in values.iter().enumerate() {
            if values[..i].contains(value) {
                let spans = find_value_spans(self.src(), value);
                let first = spans.first().copied();
                let second = spans.get(1).copied();
                return Err(match (first, second) {
                    (Some(first), Some(second)) => {
                        self.source.duplicate_abi_error(value, first, second)
                    }
                    _ => self
                        .source
                        .validation_error(format!("duplicate ABI '{value}'"), first),
                });
            }
        }
        Ok(())
    }
}

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    let project = ctx.push("project");
    project.require_non_empty("name", &manifest.project.name)?;
    project.require_non_empty("model", &manifest.project.model)?;
    project.validate_block_name(&manifest.project.model, "model")?;
    project.require_non_empty_entries("plugins", &manifest.project.plugins)?;
    project.require_non_empty_entries("repositories", &manifest.project.repositories)?;

    let buildscript = ctx.push("buildscript").push("dependencies");
    for dependency in &manifest.buildscript.dependencies {
        buildscript.require_non_empty("configuration", &dependency.configuration)?;
        buildscript.require_non_empty("notation", &dependency.notation)?;
    }

    let android = ctx.push("android");
    android.require_non_empty("application_id", &manifest.android.application_id)?;
    if let Some(abis) = &manifest.android.supported_abis {
        android.require_non_empty_entries("supported_abis", abis)?;
        android.reject_duplicates(abis)?;
    }
    if let Some(ndk) = &manifest.android.ndk {
        android.push("ndk").require_non_empty("toolchain", &ndk.toolchain)?;
    }

    if manifest.build_types.is_empty() {
        return Err(ctx.source_context().validation_error(
            "at least one build type is required",
            find_name_span(src, "build_types"),
        ));
    }
    for name in manifest.build_types.keys() {
        ctx.validate_block_name(name, "build type")?;
    }

    Ok(())
}

/// Returns why `name` cannot be used as a block header, if it can't.
fn block_name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("block names must not be empty")
    } else if name.chars().any(char::is_whitespace) {
        Some("block names must not contain whitespace")
    } else if name.contains(['{', '}']) {
        Some("block names must not contain braces")
    } else {
        None
    }
}

/// Find the span of a `key = ...` line in the TOML source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }
    None
}

/// Find the span of a name used as a table header segment, e.g. `[build_types.Debug]`.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!(".{}]", name), // [build_types.name]
        format!(".{}.", name), // [build_types.name.something]
        format!("[{}]", name), // [name]
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot or bracket
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

/// Find the span of the first quoted occurrence of `value`.
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    find_value_spans(src, value).into_iter().next()
}

/// Spans of every quoted occurrence of `value`, quotes included.
fn find_value_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let double = format!("\"{}\"", value);
    let single = format!("'{}'", value);
    let mut spans: Vec<SourceSpan> = src
        .match_indices(double.as_str())
        .chain(src.match_indices(single.as_str()))
        .map(|(pos, m)| SourceSpan::from((pos, m.len())))
        .collect();
    spans.sort_by_key(|span| span.offset());
    spans
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    fn parse(src: &str) -> Result<Manifest> {
        Manifest::from_str(src)
    }

    #[test]
    fn test_empty_application_id() {
        let src = "[project]\nname = \"hello\"\n\n[android]\napplication_id = \"\"\n";
        let err = parse(src).unwrap_err();
        match *err {
            Error::EmptyValue { field, span, .. } => {
                assert_eq!(field, "android.application_id");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "application_id");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_ndk_toolchain() {
        let src = "[project]\nname = \"hello\"\n\n[android]\napplication_id = \"a.b\"\n\n[android.ndk]\ntoolchain = \" \"\n";
        let err = parse(src).unwrap_err();
        assert!(matches!(*err, Error::EmptyValue { ref field, .. } if field == "android.ndk.toolchain"));
    }

    #[test]
    fn test_empty_plugin_entry() {
        let src = "[project]\nname = \"hello\"\nplugins = [\"\"]\n\n[android]\napplication_id = \"a.b\"\n";
        let err = parse(src).unwrap_err();
        assert!(matches!(*err, Error::EmptyValue { ref field, .. } if field == "project.plugins entry"));
    }

    #[test]
    fn test_duplicate_abi() {
        let src = "[project]\nname = \"hello\"\n\n[android]\napplication_id = \"a.b\"\nsupported_abis = [\"x86\", \"mips\", \"x86\"]\n";
        let err = parse(src).unwrap_err();
        match *err {
            Error::DuplicateAbi {
                abi,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(abi, "x86");
                assert!(first_span.offset() < second_span.offset());
                assert_eq!(
                    &src[second_span.offset()..second_span.offset() + second_span.len()],
                    "\"x86\""
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_build_types() {
        let src = "[project]\nname = \"hello\"\n\n[android]\napplication_id = \"a.b\"\n\n[build_types]\n";
        let err = parse(src).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_build_type_name() {
        let src = "[project]\nname = \"hello\"\n\n[android]\napplication_id = \"a.b\"\n\n[build_types.\"my debug\"]\n";
        let err = parse(src).unwrap_err();
        assert!(matches!(*err, Error::InvalidBlockName { ref name, .. } if name == "my debug"));
    }

    #[test]
    fn test_invalid_model_name() {
        let src = "[project]\nname = \"hello\"\nmodel = \"my model\"\n\n[android]\napplication_id = \"a.b\"\n";
        let err = parse(src).unwrap_err();
        match *err {
            Error::InvalidBlockName {
                name,
                context,
                span,
                ..
            } => {
                assert_eq!(name, "my model");
                assert_eq!(context, "model");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"my model\"");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let src = "[project]\nname = \"hello\"\nmodel = \"model{\"\n\n[android]\napplication_id = \"a.b\"\n";
        assert!(matches!(*parse(src).unwrap_err(), Error::InvalidBlockName { .. }));
    }

    #[test]
    fn test_block_name_problem() {
        assert!(block_name_problem("Debug").is_none());
        assert!(block_name_problem("").is_some());
        assert!(block_name_problem("a b").is_some());
        assert!(block_name_problem("a{").is_some());
    }

    #[test]
    fn test_find_key_span() {
        let src = "[android]\n  application_id = \"x\"\n";
        let span = find_key_span(src, "application_id").unwrap();
        assert_eq!(span.offset(), 12);
        assert!(find_key_span(src, "application").is_none());
    }

    #[test]
    fn test_field_path() {
        let ctx = ParseContext::new("", "gradle.toml");
        assert_eq!(ctx.field_path("name"), "name");
        assert_eq!(ctx.push("android").push("ndk").field_path("toolchain"), "android.ndk.toolchain");
    }
}
