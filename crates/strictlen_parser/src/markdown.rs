//! Markdown parser using markdown-rs (wooorm/markdown-rs).
//!
//! The mdast tree is flattened into [`Element`]s that only keep what
//! line-level rules need: the kind, the starting line and, for code blocks,
//! the literal content.

use markdown::mdast::Node;
use markdown::{ParseOptions, to_mdast};
use strictlen_ast::{Document, Element, ElementKind};

use crate::{ParseError, Parser};

/// Markdown parser implementation.
///
/// Parses CommonMark with the GFM extensions (tables, strikethrough,
/// autolink literals, footnotes, task lists).
pub struct MarkdownParser;

impl MarkdownParser {
    /// Creates a new Markdown parser with default options.
    pub fn new() -> Self {
        Self
    }

    /// Gets default parse options (GFM).
    fn default_options() -> ParseOptions {
        ParseOptions::gfm()
    }

    /// Converts an mdast node and its descendants to an element.
    fn convert_node(node: &Node) -> Element {
        let mut element = Element::new(Self::kind_of(node));
        element.location = node
            .position()
            .and_then(|pos| u32::try_from(pos.start.line).ok());

        if let Node::Code(code) = node {
            element.value = Some(code.value.clone());
        }

        if let Some(children) = node.children() {
            element.children = Self::convert_children(children);
        }

        element
    }

    fn convert_children(children: &[Node]) -> Vec<Element> {
        children.iter().map(Self::convert_node).collect()
    }

    fn kind_of(node: &Node) -> ElementKind {
        match node {
            Node::Heading(_) => ElementKind::Heading,
            Node::Paragraph(_) => ElementKind::Paragraph,
            Node::Code(_) => ElementKind::CodeBlock,
            Node::Table(_) => ElementKind::Table,
            Node::List(_) => ElementKind::List,
            Node::ListItem(_) => ElementKind::ListItem,
            Node::Blockquote(_) => ElementKind::BlockQuote,
            Node::Html(_) => ElementKind::Html,
            Node::ThematicBreak(_) => ElementKind::ThematicBreak,
            Node::Definition(_) => ElementKind::Definition,
            Node::FootnoteDefinition(_) => ElementKind::FootnoteDefinition,
            Node::Link(_) | Node::LinkReference(_) => ElementKind::Link,
            Node::Image(_) | Node::ImageReference(_) => ElementKind::Image,
            Node::Text(_)
            | Node::Emphasis(_)
            | Node::Strong(_)
            | Node::Delete(_)
            | Node::InlineCode(_)
            | Node::Break(_)
            | Node::FootnoteReference(_) => ElementKind::Inline,
            _ => ElementKind::Other,
        }
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MarkdownParser {
    fn name(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown", "mdown", "mkdn", "mkd"]
    }

    fn parse<'a>(&self, source: &'a str) -> Result<Document<'a>, ParseError> {
        let options = Self::default_options();
        let mdast =
            to_mdast(source, &options).map_err(|e| ParseError::invalid_source(e.to_string()))?;

        let elements = match mdast {
            Node::Root(root) => Self::convert_children(&root.children),
            other => {
                return Err(ParseError::internal(format!(
                    "expected a root node, got {other:?}"
                )));
            }
        };

        Ok(Document::new(source, elements))
    }
}
