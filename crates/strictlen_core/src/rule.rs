//! The `MY000` / `stricter-line-length` rule.

use serde::Serialize;
use strictlen_ast::{Document, Location, Position};

use crate::diagnostic::{Diagnostic, Severity};
use crate::line_length::{LineLengthOptions, find_violations};

/// Static description of a rule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RuleManifest {
    /// Unique rule identifier.
    pub id: &'static str,
    /// Alternative names accepted in configuration.
    pub aliases: &'static [&'static str],
    /// Grouping tags.
    pub tags: &'static [&'static str],
    /// Human-readable description.
    pub description: &'static str,
}

impl RuleManifest {
    /// Returns true if `name` is the rule ID or one of its aliases (case-insensitive).
    pub fn matches_name(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Returns `ID/alias` for display.
    pub fn display_name(&self) -> String {
        match self.aliases.first() {
            Some(alias) => format!("{}/{}", self.id, alias),
            None => self.id.to_string(),
        }
    }
}

/// Manifest of the stricter line-length rule.
pub const LINE_LENGTH_RULE: RuleManifest = RuleManifest {
    id: "MY000",
    aliases: &["stricter-line-length"],
    tags: &["line_length"],
    description: "A more strict version of MD013 to enforce line length limits excluding links and their trailing punctuation",
};

/// Runs the line-length check and returns one diagnostic per violating line.
pub fn check(
    document: &Document<'_>,
    options: &LineLengthOptions,
    severity: Severity,
) -> Vec<Diagnostic> {
    find_violations(document, options)
        .into_iter()
        .filter_map(|line| {
            let info = document.line_info(line)?;
            let message = format!(
                "Line length is {} characters, exceeding the limit of {} ({})",
                info.char_count,
                options.line_length,
                LINE_LENGTH_RULE.display_name()
            );
            let loc = Location::new(
                Position::new(line, 0),
                Position::new(line, info.char_count),
            );
            Some(
                Diagnostic::new(LINE_LENGTH_RULE.id, message, info.span())
                    .with_severity(severity)
                    .with_location(loc),
            )
        })
        .collect()
}
