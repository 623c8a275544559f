//! Top-level driver.

use std::io::{self, Write};

use crate::{Category, Node, RenderState};

/// Category the driver assumes before the first node.
///
/// A leading plugin is therefore written flush with the top of the file,
/// while a leading node of any other category is preceded by a blank line.
const INITIAL_CATEGORY: Category = Category::Plugin;

/// An ordered sequence of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    nodes: Vec<Node>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level node.
    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Write the script to `out` with a fresh [`RenderState`].
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_nodes(&self.nodes, out)
    }

    /// Render the script into a string.
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)
            .expect("writing to an in-memory buffer cannot fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl FromIterator<Node> for Script {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Node> for Script {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

/// Write `nodes` in order, inserting one blank line whenever the category
/// changes from the previous node.
pub fn write_nodes<W: Write + ?Sized>(nodes: &[Node], out: &mut W) -> io::Result<()> {
    let mut state = RenderState::new();
    let mut previous = INITIAL_CATEGORY;
    for node in nodes {
        let category = node.category();
        if category != previous {
            tracing::trace!(?previous, ?category, "section break");
            out.write_all(b"\n")?;
            previous = category;
        }
        node.write(out, &mut state)?;
    }
    Ok(())
}
