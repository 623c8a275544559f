//! Statement nodes.
//!
//! Every statement writes its own indentation and terminates its own line.

use std::io::{self, Write};

use crate::{Comment, RenderState, SimpleValue, Value};

/// Coarse node kind, used by the driver to separate sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Plugin,
    Block,
    Assignment,
    Value,
    FunctionCall,
    Comment,
}

/// Separator policy for an [`Assignment`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Equality {
    /// `name = value`
    #[default]
    Use,
    /// `name value`
    DoNotUse,
}

impl Equality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Use => " = ",
            Self::DoNotUse => " ",
        }
    }
}

/// `apply plugin: 'name'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    name: String,
}

impl Plugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, state: &mut RenderState) -> io::Result<()> {
        state.write_indent(out)?;
        writeln!(out, "apply plugin: '{}'", self.name)
    }
}

/// A named `{ ... }` container. Children are written in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    name: String,
    children: Vec<Node>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child after any existing ones.
    pub fn append_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Consuming variant of [`Block::append_child`] for building trees inline.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, state: &mut RenderState) -> io::Result<()> {
        state.write_indent(out)?;
        writeln!(out, "{} {{", self.name)?;
        state.nested(|state| {
            for child in &self.children {
                child.write(out, state)?;
            }
            Ok(())
        })?;
        state.write_indent(out)?;
        writeln!(out, "}}")
    }
}

/// A setting bound to a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    name: String,
    value: Value,
    equality: Equality,
}

impl Assignment {
    /// Create an assignment using `name = value`.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_equality(name, value, Equality::Use)
    }

    pub fn with_equality(
        name: impl Into<String>,
        value: impl Into<Value>,
        equality: Equality,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            equality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn equality(&self) -> Equality {
        self.equality
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, state: &mut RenderState) -> io::Result<()> {
        state.write_indent(out)?;
        write!(out, "{}{}", self.name, self.equality.as_str())?;
        self.value.write(out, state)?;
        writeln!(out)
    }
}

/// `name(argument)`, or `name()` without an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    name: String,
    argument: Option<Value>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: None,
        }
    }

    pub fn with_argument(name: impl Into<String>, argument: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            argument: Some(argument.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> Option<&Value> {
        self.argument.as_ref()
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, state: &mut RenderState) -> io::Result<()> {
        state.write_indent(out)?;
        write!(out, "{}(", self.name)?;
        if let Some(argument) = &self.argument {
            argument.write(out, state)?;
        }
        writeln!(out, ")")
    }
}

/// Any node of a build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Plugin(Plugin),
    Block(Block),
    Assignment(Assignment),
    FunctionCall(FunctionCall),
    Comment(Comment),
    Value(Value),
}

impl Node {
    pub fn plugin(name: impl Into<String>) -> Self {
        Self::Plugin(Plugin::new(name))
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(Comment::new(text))
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Plugin(_) => Category::Plugin,
            Self::Block(_) => Category::Block,
            Self::Assignment(_) => Category::Assignment,
            Self::FunctionCall(_) => Category::FunctionCall,
            Self::Comment(_) => Category::Comment,
            Self::Value(_) => Category::Value,
        }
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, state: &mut RenderState) -> io::Result<()> {
        match self {
            Self::Plugin(n) => n.write(out, state),
            Self::Block(n) => n.write(out, state),
            Self::Assignment(n) => n.write(out, state),
            Self::FunctionCall(n) => n.write(out, state),
            Self::Comment(n) => n.write(out, state),
            Self::Value(n) => n.write(out, state),
        }
    }
}

impl From<Plugin> for Node {
    fn from(node: Plugin) -> Self {
        Self::Plugin(node)
    }
}

impl From<Block> for Node {
    fn from(node: Block) -> Self {
        Self::Block(node)
    }
}

impl From<Assignment> for Node {
    fn from(node: Assignment) -> Self {
        Self::Assignment(node)
    }
}

impl From<FunctionCall> for Node {
    fn from(node: FunctionCall) -> Self {
        Self::FunctionCall(node)
    }
}

impl From<Comment> for Node {
    fn from(node: Comment) -> Self {
        Self::Comment(node)
    }
}

impl From<Value> for Node {
    fn from(node: Value) -> Self {
        Self::Value(node)
    }
}

impl From<SimpleValue> for Node {
    fn from(value: SimpleValue) -> Self {
        Self::Value(value.into())
    }
}
