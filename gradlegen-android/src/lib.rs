//! Android `build.gradle` generator.
//!
//! Turns a parsed [`Manifest`](gradlegen_manifest::Manifest) into the node
//! tree of an experimental-plugin Android build script and writes it out.

mod abi;
mod files;
mod flags;
mod generator;
mod sections;

pub use abi::{KNOWN_ABIS, default_architecture, default_supported_abis};
pub use files::BuildGradle;
pub use flags::{CFLAGS_FUNCTION, flags_call};
pub use generator::{GenerateResult, Generator, PreviewFile};
