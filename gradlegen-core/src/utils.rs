//! Shared string and path helpers.

use std::path::{Component, Path, PathBuf};

/// Split a flags string on single spaces, dropping empty pieces.
///
/// Only the space character separates; tabs stay part of a flag.
pub fn split_by_spaces(s: &str) -> Vec<String> {
    s.split(' ')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve `path` against `base` when relative, then drop `.` and fold `..`
/// components lexically. The filesystem is never consulted.
pub fn collapse_path(path: impl AsRef<Path>, base: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.as_ref().join(path)
    };

    let mut result = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    result.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    result.pop();
                } else if !result.has_root() {
                    result.push("..");
                }
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_by_spaces() {
        assert_eq!(split_by_spaces("-Wall -O2"), vec!["-Wall", "-O2"]);
        assert_eq!(split_by_spaces("  -g   -DDEBUG "), vec!["-g", "-DDEBUG"]);
        assert!(split_by_spaces("").is_empty());
        assert!(split_by_spaces("   ").is_empty());
        assert_eq!(split_by_spaces("a\tb"), vec!["a\tb"]);
    }

    #[test]
    fn test_collapse_relative_path() {
        assert_eq!(
            collapse_path("src/../include/./jni", "/work/app"),
            PathBuf::from("/work/app/include/jni")
        );
    }

    #[test]
    fn test_collapse_absolute_path_ignores_base() {
        assert_eq!(
            collapse_path("/opt/ndk/include", "/work/app"),
            PathBuf::from("/opt/ndk/include")
        );
    }

    #[test]
    fn test_collapse_parent_past_root() {
        assert_eq!(collapse_path("../../x", "/a"), PathBuf::from("/x"));
        assert_eq!(collapse_path("../x", "rel"), PathBuf::from("x"));
        assert_eq!(collapse_path("../../x", "rel"), PathBuf::from("../x"));
    }
}
