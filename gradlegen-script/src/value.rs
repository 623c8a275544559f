//! Inline values.
//!
//! Values are always written inline: no indentation, no line break.

use std::io::{self, Write};

use crate::RenderState;

/// Quoting policy for a [`SimpleValue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quote {
    /// Wrap the text in apostrophes (`'text'`).
    Simple,
    /// Write the text as-is.
    #[default]
    None,
}

impl Quote {
    /// The quote character(s) written on each side of the text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "'",
            Self::None => "",
        }
    }
}

/// A literal scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleValue {
    text: String,
    quote: Quote,
}

impl SimpleValue {
    pub fn new(text: impl Into<String>, quote: Quote) -> Self {
        Self {
            text: text.into(),
            quote,
        }
    }

    /// An apostrophe-quoted string literal.
    pub fn quoted(text: impl Into<String>) -> Self {
        Self::new(text, Quote::Simple)
    }

    /// A raw literal (numbers, identifiers, expressions).
    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, Quote::None)
    }

    /// A boolean literal, always lowercase and never quoted.
    pub fn bool(value: bool) -> Self {
        Self::raw(if value { "true" } else { "false" })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn quote(&self) -> Quote {
        self.quote
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let quote = self.quote.as_str();
        write!(out, "{quote}{}{quote}", self.text)
    }
}

/// A bracketed, comma-separated list of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListValue {
    values: Vec<Value>,
}

impl ListValue {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Build a list of [`SimpleValue`]s sharing one quoting policy.
    pub fn from_simples<I, S>(values: I, quote: Quote) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|v| Value::Simple(SimpleValue::new(v, quote)))
                .collect(),
        }
    }

    /// Append a value to the end of the list.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, state: &mut RenderState) -> io::Result<()> {
        out.write_all(b"[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                out.write_all(b", ")?;
            }
            value.write(out, state)?;
        }
        out.write_all(b"]")
    }
}

/// Any inline value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Simple(SimpleValue),
    List(ListValue),
}

impl Value {
    pub fn write<W: Write + ?Sized>(&self, out: &mut W, state: &mut RenderState) -> io::Result<()> {
        match self {
            Self::Simple(v) => v.write(out),
            Self::List(v) => v.write(out, state),
        }
    }
}

impl From<SimpleValue> for Value {
    fn from(value: SimpleValue) -> Self {
        Self::Simple(value)
    }
}

impl From<ListValue> for Value {
    fn from(value: ListValue) -> Self {
        Self::List(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Simple(SimpleValue::bool(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: impl Into<Value>) -> String {
        let value: Value = value.into();
        let mut out = Vec::new();
        value.write(&mut out, &mut RenderState::new()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_simple_value_quoting() {
        assert_eq!(render(SimpleValue::quoted("23.0.2")), "'23.0.2'");
        assert_eq!(render(SimpleValue::raw("23")), "23");
        assert_eq!(render(SimpleValue::new("x", Quote::default())), "x");
    }

    #[test]
    fn test_bool_value() {
        assert_eq!(render(true), "true");
        assert_eq!(render(SimpleValue::bool(false)), "false");
        assert_eq!(SimpleValue::bool(true).quote(), Quote::None);
    }

    #[test]
    fn test_list_from_simples() {
        assert_eq!(
            render(ListValue::from_simples(["a", "b"], Quote::Simple)),
            "['a', 'b']"
        );
        assert_eq!(
            render(ListValue::from_simples(["a", "b"], Quote::None)),
            "[a, b]"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(ListValue::default()), "[]");
    }

    #[test]
    fn test_nested_list_with_mixed_values() {
        let mut list = ListValue::default();
        list.push(SimpleValue::quoted("-Wall"));
        list.push(true);
        list.push(ListValue::from_simples(["1", "2"], Quote::None));
        assert_eq!(list.len(), 3);
        assert_eq!(render(list), "['-Wall', true, [1, 2]]");
    }

    #[test]
    fn test_values_stay_inline_at_depth() {
        let mut state = RenderState::new();
        let mut out = Vec::new();
        state
            .nested(|s| Value::from(SimpleValue::quoted("v")).write(&mut out, s))
            .unwrap();
        assert_eq!(out, b"'v'");
    }
}
