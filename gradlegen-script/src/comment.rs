use std::io::{self, Write};

use crate::RenderState;

/// A line comment, or a block comment when the text spans several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
    multiline: bool,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let multiline = text.contains('\n');
        Self { text, multiline }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text contains a line break.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, state: &mut RenderState) -> io::Result<()> {
        state.write_indent(out)?;
        if !self.multiline {
            return writeln!(out, "// {}", self.text);
        }

        // `lines` drops a trailing break and folds `\r\n` pairs.
        let mut lines = self.text.lines();
        writeln!(out, "/* {}", lines.next().unwrap_or_default())?;
        for line in lines {
            state.write_indent(out)?;
            writeln!(out, " * {line}")?;
        }
        state.write_indent(out)?;
        writeln!(out, " */")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_at(comment: &Comment, depth: usize) -> String {
        let mut state = RenderState::new();
        let mut out = Vec::new();
        fn descend(
            comment: &Comment,
            out: &mut Vec<u8>,
            state: &mut RenderState,
            remaining: usize,
        ) -> io::Result<()> {
            if remaining == 0 {
                comment.write(out, state)
            } else {
                state.nested(|s| descend(comment, out, s, remaining - 1))
            }
        }
        descend(comment, &mut out, &mut state, depth).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_line() {
        let comment = Comment::new("one line");
        assert!(!comment.is_multiline());
        assert_eq!(render_at(&comment, 0), "// one line\n");
        assert_eq!(render_at(&comment, 1), "\t// one line\n");
    }

    #[test]
    fn test_multiline() {
        let comment = Comment::new("a\nb");
        assert!(comment.is_multiline());
        assert_eq!(render_at(&comment, 0), "/* a\n * b\n */\n");
    }

    #[test]
    fn test_multiline_indented() {
        let comment = Comment::new("first\nsecond\nthird");
        assert_eq!(
            render_at(&comment, 2),
            "\t\t/* first\n\t\t * second\n\t\t * third\n\t\t */\n"
        );
    }

    #[test]
    fn test_trailing_break_and_crlf() {
        assert_eq!(render_at(&Comment::new("a\r\nb\n"), 0), "/* a\n * b\n */\n");
        assert_eq!(render_at(&Comment::new("a\n\nb"), 0), "/* a\n * \n * b\n */\n");
    }

    #[test]
    fn test_lone_break() {
        assert_eq!(render_at(&Comment::new("\n"), 0), "/* \n */\n");
    }
}
