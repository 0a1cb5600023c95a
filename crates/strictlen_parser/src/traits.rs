//! Parser trait definition.

use strictlen_ast::Document;

use crate::ParseError;

/// Trait for turning source text into a [`Document`].
///
/// # Example
///
/// ```rust
/// use strictlen_ast::Document;
/// use strictlen_parser::{ParseError, Parser};
///
/// struct LinesOnly;
///
/// impl Parser for LinesOnly {
///     fn name(&self) -> &str {
///         "lines-only"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["txt"]
///     }
///
///     fn parse<'a>(&self, source: &'a str) -> Result<Document<'a>, ParseError> {
///         Ok(Document::from_source(source))
///     }
/// }
///
/// assert_eq!(LinesOnly.parse("a\nb").unwrap().line_count(), 2);
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["md", "markdown"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a document.
    fn parse<'a>(&self, source: &'a str) -> Result<Document<'a>, ParseError>;
}
