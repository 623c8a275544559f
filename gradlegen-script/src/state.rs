//! Indentation state for a single render pass.

use std::io::{self, Write};

/// One indentation level in an emitted script.
pub const INDENT: &str = "\t";

/// Mutable indentation cursor shared by every node of one render pass.
///
/// A fresh state starts at depth zero. Each render pass must own its own
/// state; the driver in [`crate::Script`] creates one per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderState {
    indent_depth: usize,
}

impl RenderState {
    /// Create a state at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current indentation depth.
    pub fn indent_depth(&self) -> usize {
        self.indent_depth
    }

    /// Write `indent_depth` tab characters.
    pub fn write_indent<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for _ in 0..self.indent_depth {
            out.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }

    /// Run `f` one level deeper, restoring the depth afterwards even if `f` fails.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> io::Result<T>) -> io::Result<T> {
        self.indent_depth += 1;
        let result = f(self);
        self.indent_depth -= 1;
        result
    }
}
