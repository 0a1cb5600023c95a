//! Structural elements of a parsed document.

use serde::{Deserialize, Serialize};

use crate::document::line_ranges;

/// The kind of a structural element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Heading,
    Paragraph,
    /// Fenced or indented code block.
    CodeBlock,
    /// GFM table.
    Table,
    List,
    ListItem,
    BlockQuote,
    Html,
    ThematicBreak,
    /// Link reference definition (`[id]: url`).
    Definition,
    FootnoteDefinition,
    Link,
    Image,
    /// Any other inline content (text, emphasis, inline code, ...).
    Inline,
    Other,
}

/// A structural element produced by a parser.
///
/// `location` is the 1-indexed line the element starts on. Parsers leave it
/// `None` when they cannot attribute a position, and consumers skip such
/// elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// The element kind.
    pub kind: ElementKind,

    /// Starting line (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<u32>,

    /// Literal text, set for code blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Nested elements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an element with no location, value or children.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            location: None,
            value: None,
            children: Vec::new(),
        }
    }

    /// Sets the starting line.
    pub fn at(mut self, line: u32) -> Self {
        self.location = Some(line);
        self
    }

    /// Sets the literal value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the children.
    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    /// Number of lines in the literal value; zero without a value.
    ///
    /// Lines are split the same way as [`Document`](crate::Document) lines.
    pub fn value_line_count(&self) -> u32 {
        self.value
            .as_deref()
            .map_or(0, |value| line_ranges(value).len() as u32)
    }

    /// Returns true if this element is of the given kind.
    #[inline]
    pub fn is(&self, kind: ElementKind) -> bool {
        self.kind == kind
    }
}
