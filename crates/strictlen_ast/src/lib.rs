//! # strictlen_ast
//!
//! Document model for strictlen.
//!
//! A [`Document`] is the source text split into 1-indexed lines plus the
//! ordered list of top-level [`Element`]s a parser found in it. Rules read
//! the model; they never mutate it.
//!
//! ## Example
//!
//! ```rust
//! use strictlen_ast::{Document, Element, ElementKind};
//!
//! let source = "```\nlet x = 1;\n```\n";
//! let doc = Document::new(
//!     source,
//!     vec![Element::new(ElementKind::CodeBlock).at(1).with_value("let x = 1;")],
//! );
//!
//! assert_eq!(doc.line_count(), 3);
//! assert_eq!(doc.find_type_elements(ElementKind::CodeBlock).len(), 1);
//! ```

mod document;
mod element;
mod span;

pub use document::{Document, LineInfo};
pub use element::{Element, ElementKind};
pub use span::{Location, Position, Span};
