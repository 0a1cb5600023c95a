//! # strictlen_parser
//!
//! Parser abstraction layer for strictlen.
//!
//! This crate provides:
//! - A `Parser` trait for turning source text into a [`Document`](strictlen_ast::Document)
//! - A Markdown parser built on `markdown-rs`
//!
//! ## Example
//!
//! ```rust
//! use strictlen_ast::ElementKind;
//! use strictlen_parser::{MarkdownParser, Parser};
//!
//! let parser = MarkdownParser::new();
//! let doc = parser.parse("# Hello\n\n| a | b |\n|---|---|\n").unwrap();
//!
//! assert_eq!(doc.elements()[1].kind, ElementKind::Table);
//! ```

mod error;
mod markdown;
mod traits;

pub use error::ParseError;
pub use markdown::MarkdownParser;
pub use traits::Parser;
