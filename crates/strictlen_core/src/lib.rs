//! # strictlen_core
//!
//! Core linter engine for strictlen.
//!
//! This crate provides:
//! - The `MY000` / `stricter-line-length` rule
//! - The main `Linter` orchestrator
//! - Configuration loading
//! - File discovery and filtering
//! - Parallel processing
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use strictlen_core::{Linter, LinterConfig};
//!
//! let config = LinterConfig::from_jsonc(r#"{ "options": { "MY000": { "line_length": 20 } } }"#)?;
//! let linter = Linter::new(config)?;
//!
//! let result = linter.lint_content(
//!     Path::new("README.md"),
//!     "# Title\n\nThis sentence is much longer than twenty characters.\n",
//! )?;
//! assert_eq!(result.diagnostics[0].line(), Some(3));
//! # Ok::<(), strictlen_core::LinterError>(())
//! ```

mod config;
mod diagnostic;
mod error;
pub mod file_finder;
pub mod line_length;
mod linter;
mod result;
pub mod rule;

pub use config::{LinterConfig, RuleOption, RuleSettings};
pub use diagnostic::{Diagnostic, Severity};
pub use error::LinterError;
pub use file_finder::FileFinder;
pub use line_length::{LineLengthOptions, find_violations};
pub use linter::{LintFilesResult, Linter, MAX_FILE_SIZE};
pub use result::{LintResult, LintSummary};
pub use rule::{LINE_LENGTH_RULE, RuleManifest};
