//! Compound selector parsing and matching.
//!
//! Supports exactly the shapes the page layer queries with: a tag, `#id`,
//! `.class`, `[attr]`, `[attr="value"]`, `[attr^="value"]`, compounds of
//! those (`input[name="phone"]`), and comma-separated lists. No combinators:
//! descendant scoping goes through `Document::query_within`.

use thiserror::Error;

use crate::{Document, NodeId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected character {found:?} in selector {selector:?}")]
    Unexpected { selector: String, found: char },
    #[error("unterminated attribute test in selector {selector:?}")]
    UnterminatedAttr { selector: String },
}

/// One compound selector: every listed test must hold on the same element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    Present(String),
    Equals(String, String),
    Prefix(String, String),
}

/// Comma-separated selector alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    alternatives: Vec<Selector>,
}

impl SelectorList {
    pub fn parse(raw: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        for part in raw.split(',') {
            alternatives.push(Selector::parse(part)?);
        }
        if alternatives.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { alternatives })
    }

    /// Whether any alternative matches `node`.
    #[must_use]
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        self.alternatives.iter().any(|sel| sel.matches(doc, node))
    }
}

impl Selector {
    pub fn parse(raw: &str) -> Result<Self, SelectorError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Self {
            tag: None,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
        };
        let mut chars = raw.chars().peekable();

        if chars.peek().is_some_and(|c| is_ident_char(*c)) {
            selector.tag = Some(take_ident(&mut chars));
        }

        while let Some(c) = chars.next() {
            match c {
                '#' => selector.id = Some(take_ident(&mut chars)),
                '.' => selector.classes.push(take_ident(&mut chars)),
                '[' => selector.attrs.push(take_attr_test(&mut chars, raw)?),
                found => {
                    return Err(SelectorError::Unexpected {
                        selector: raw.to_string(),
                        found,
                    });
                }
            }
        }
        Ok(selector)
    }

    #[must_use]
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(tag) = doc.tag(node) else {
            return false;
        };
        if let Some(wanted) = &self.tag
            && wanted != tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && doc.attr(node, "id") != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|class| doc.has_class(node, class)) {
            return false;
        }
        self.attrs.iter().all(|test| test.matches(doc, node))
    }
}

impl AttrTest {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        match self {
            AttrTest::Present(name) => doc.attr(node, name).is_some(),
            AttrTest::Equals(name, value) => doc.attr(node, name) == Some(value.as_str()),
            AttrTest::Prefix(name, value) => {
                doc.attr(node, name).is_some_and(|v| v.starts_with(value))
            }
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn take_ident<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if is_ident_char(c) {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

fn take_attr_test<I: Iterator<Item = char>>(
    chars: &mut std::iter::Peekable<I>,
    raw: &str,
) -> Result<AttrTest, SelectorError> {
    let name = take_ident(chars);
    match chars.next() {
        Some(']') => Ok(AttrTest::Present(name)),
        Some('^') if chars.next_if_eq(&'=').is_some() => {
            let value = take_attr_value(chars, raw)?;
            Ok(AttrTest::Prefix(name, value))
        }
        Some('=') => {
            let value = take_attr_value(chars, raw)?;
            Ok(AttrTest::Equals(name, value))
        }
        _ => Err(SelectorError::UnterminatedAttr {
            selector: raw.to_string(),
        }),
    }
}

fn take_attr_value<I: Iterator<Item = char>>(
    chars: &mut std::iter::Peekable<I>,
    raw: &str,
) -> Result<String, SelectorError> {
    let unterminated = || SelectorError::UnterminatedAttr {
        selector: raw.to_string(),
    };
    let mut value = String::new();

    if let Some(quote) = chars.next_if(|c| *c == '"' || *c == '\'') {
        let mut closed = false;
        for c in chars.by_ref() {
            if c == quote {
                closed = true;
                break;
            }
            value.push(c);
        }
        if closed && chars.next() == Some(']') {
            Ok(value)
        } else {
            Err(unterminated())
        }
    } else {
        for c in chars.by_ref() {
            if c == ']' {
                return Ok(value);
            }
            value.push(c);
        }
        Err(unterminated())
    }
}
