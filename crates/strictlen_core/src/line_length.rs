//! Line classification for the stricter line-length check.
//!
//! [`find_violations`] reports every line longer than the configured limit,
//! except lines that belong to a code block, a table, or that end in a link.
//!
//! # Configuration
//!
//! | Option | Type | Default | Description |
//! |--------|------|---------|-------------|
//! | line_length | number | 120 | Maximum line length in characters |
//! | ignore_code_blocks | boolean | true | Skip lines inside code blocks |
//! | ignore_tables | boolean | true | Skip lines inside tables |
//! | ignore_links | boolean | true | Skip lines ending in `[text](url)` or `<url>` |
//! | ignore_link_punctuation | boolean | true | Allow `,.?;:!` after the trailing link |

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strictlen_ast::{Document, Element, ElementKind};
use tracing::debug;

const DEFAULT_LINE_LENGTH: usize = 120;

/// Characters allowed after a trailing link when `ignore_link_punctuation` is set.
pub const LINK_PUNCTUATION: &str = ",.?;:!";

/// Options for the line-length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineLengthOptions {
    /// Maximum line length in characters.
    pub line_length: usize,
    /// Skip lines inside code blocks.
    pub ignore_code_blocks: bool,
    /// Skip lines inside tables.
    pub ignore_tables: bool,
    /// Skip lines that end in a link.
    pub ignore_links: bool,
    /// Allow trailing punctuation after the link. Only used with `ignore_links`.
    pub ignore_link_punctuation: bool,
}

impl Default for LineLengthOptions {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            ignore_code_blocks: true,
            ignore_tables: true,
            ignore_links: true,
            ignore_link_punctuation: true,
        }
    }
}

impl LineLengthOptions {
    /// Minimum character count of a reported line.
    ///
    /// One character above `line_length` is allowed for the line terminator.
    pub fn effective_limit(&self) -> usize {
        self.line_length.saturating_add(1)
    }
}

/// Why a span of lines is exempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExemptReason {
    CodeBlock,
    Table,
}

/// An inclusive range of 1-indexed lines excluded from the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExemptSpan {
    /// First line (inclusive).
    pub start: u32,
    /// Last line (inclusive).
    pub end: u32,
    /// The element kind that produced this span.
    pub reason: ExemptReason,
}

impl ExemptSpan {
    /// Builds a span limited to `1..=line_count`.
    ///
    /// Returns `None` when the start lies outside the document or the span
    /// would be empty.
    fn clamped(start: u32, end: u32, reason: ExemptReason, line_count: u32) -> Option<Self> {
        if start == 0 || start > line_count {
            return None;
        }
        let end = end.min(line_count);
        (end >= start).then_some(Self { start, end, reason })
    }
}

/// Returns the line numbers that exceed the limit and are not exempt.
pub fn find_violations(document: &Document<'_>, options: &LineLengthOptions) -> BTreeSet<u32> {
    let threshold = options.effective_limit();
    let line_count = document.line_count();

    // Indexed by line number; slot 0 is unused.
    let mut exempt = vec![false; line_count as usize + 1];
    for span in exempt_spans(document, options) {
        debug!("Exempting lines {}..={} ({:?})", span.start, span.end, span.reason);
        for line in span.start..=span.end {
            exempt[line as usize] = true;
        }
    }

    document
        .matching_lines(|text| {
            text.chars().count() >= threshold
                && !(options.ignore_links && ends_with_link(text, options.ignore_link_punctuation))
        })
        .into_iter()
        .filter(|line| !exempt[*line as usize])
        .collect()
}

/// Collects the code-block and table spans enabled by `options`.
pub fn exempt_spans(document: &Document<'_>, options: &LineLengthOptions) -> Vec<ExemptSpan> {
    let mut spans = Vec::new();
    if options.ignore_code_blocks {
        spans.extend(code_block_spans(document));
    }
    if options.ignore_tables {
        spans.extend(table_spans(document));
    }
    spans
}

/// Spans of every code block, at any depth.
///
/// A block starting on line `n` with `k` lines of content covers `n..=n+k`.
/// For a fenced block `n` is the opening fence, so the span ends on the last
/// content line; an indented block also claims the line after it.
fn code_block_spans(document: &Document<'_>) -> Vec<ExemptSpan> {
    let line_count = document.line_count();
    document
        .find_type_elements(ElementKind::CodeBlock)
        .into_iter()
        .filter_map(|element| {
            let start = element.location?;
            let end = start.saturating_add(element.value_line_count());
            ExemptSpan::clamped(start, end, ExemptReason::CodeBlock, line_count)
        })
        .collect()
}

/// Spans of top-level tables.
///
/// A table runs until the line before the next located top-level element, or
/// to the end of the document when it is the last one.
fn table_spans(document: &Document<'_>) -> Vec<ExemptSpan> {
    let line_count = document.line_count();
    let located: Vec<(u32, &Element)> = document
        .elements()
        .iter()
        .filter_map(|element| element.location.map(|line| (line, element)))
        .collect();

    located
        .iter()
        .enumerate()
        .filter(|(_, (_, element))| element.is(ElementKind::Table))
        .filter_map(|(idx, (start, _))| {
            let end = match located.get(idx + 1) {
                Some((next, _)) => next.saturating_sub(1),
                None => line_count,
            };
            ExemptSpan::clamped(*start, end, ExemptReason::Table, line_count)
        })
        .collect()
}

/// Returns true if `line` ends in `[text](url)` or `<url>`.
///
/// With `allow_punctuation`, any run of [`LINK_PUNCTUATION`] may follow the link.
pub fn ends_with_link(line: &str, allow_punctuation: bool) -> bool {
    static WITH_PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    static EXACT: OnceLock<Regex> = OnceLock::new();

    let pattern = if allow_punctuation {
        WITH_PUNCTUATION.get_or_init(|| {
            let pattern = format!(
                r"(?:\[.*\]\(.*\)|<.*>)[{}]*$",
                regex::escape(LINK_PUNCTUATION)
            );
            Regex::new(&pattern).expect("Invalid link pattern")
        })
    } else {
        EXACT.get_or_init(|| Regex::new(r"(?:\[.*\]\(.*\)|<.*>)$").expect("Invalid link pattern"))
    };

    pattern.is_match(line)
}
