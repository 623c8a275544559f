//! Gradle build-script node tree and emitter.
//!
//! A build script is an ordered sequence of top-level [`Node`]s. Every node
//! writes itself to an [`std::io::Write`] stream, threading a shared
//! [`RenderState`] that tracks the current indentation depth.
//!
//! # Module Organization
//!
//! - [`value`] - Inline values (quoted/raw scalars, booleans, lists)
//! - [`node`] - Statement nodes (plugins, blocks, assignments, calls, comments)
//! - [`state`] - Indentation state for a single render pass
//! - [`script`] - Top-level driver that groups nodes into sections
//!
//! # Example
//!
//! ```
//! use gradlegen_script::{Assignment, Block, Node, Quote, Script, SimpleValue};
//!
//! let mut android = Block::new("android");
//! android.append_child(Assignment::new(
//!     "buildToolsVersion",
//!     SimpleValue::new("23.0.2", Quote::Simple),
//! ));
//!
//! let mut script = Script::new();
//! script.push(Node::plugin("com.android.model.application"));
//! script.push(android);
//!
//! assert_eq!(
//!     script.render(),
//!     "apply plugin: 'com.android.model.application'\n\
//!      \n\
//!      android {\n\
//!      \tbuildToolsVersion = '23.0.2'\n\
//!      }\n"
//! );
//! ```

pub mod node;
pub mod script;
pub mod state;
pub mod value;

mod comment;

pub use comment::Comment;
pub use node::{Assignment, Block, Category, Equality, FunctionCall, Node, Plugin};
pub use script::{Script, write_nodes};
pub use state::RenderState;
pub use value::{ListValue, Quote, SimpleValue, Value};
