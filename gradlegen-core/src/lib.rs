//! Core utilities and types for the gradlegen build-script generator.
//!
//! This crate provides file writing and string helpers shared across
//! the gradlegen crates.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String and path utilities
pub use utils::{collapse_path, split_by_spaces};
