//! Document model handed to line-level rules.

use crate::{Element, ElementKind, Span};

/// Pre-computed metadata for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// Byte offset of line start (inclusive).
    pub start: u32,
    /// Byte offset of end of line content, excluding the line terminator.
    pub end: u32,
    /// Number of characters in the line.
    pub char_count: u32,
}

impl LineInfo {
    /// Creates a new LineInfo from a line's content (without terminator).
    pub fn from_line(start: u32, line_text: &str) -> Self {
        Self {
            start,
            end: start + line_text.len() as u32,
            char_count: line_text.chars().count() as u32,
        }
    }

    /// Returns the byte span of the line content.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// A source text split into lines, together with its top-level elements.
///
/// Lines are 1-indexed. `\r\n`, `\n` and a bare `\r` each terminate a line
/// and are not part of it; a trailing terminator does not start an extra line.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    source: &'a str,
    lines: Vec<LineInfo>,
    elements: Vec<Element>,
}

impl<'a> Document<'a> {
    /// Creates a document from source text and the parser's top-level elements.
    pub fn new(source: &'a str, elements: Vec<Element>) -> Self {
        Self {
            source,
            lines: Self::compute_lines(source),
            elements,
        }
    }

    /// Creates a document without structural elements.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source, Vec::new())
    }

    fn compute_lines(source: &str) -> Vec<LineInfo> {
        line_ranges(source)
            .into_iter()
            .map(|(start, end)| LineInfo::from_line(start as u32, &source[start..end]))
            .collect()
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Returns line information for the given line number (1-indexed).
    pub fn line_info(&self, line: u32) -> Option<&LineInfo> {
        if line == 0 {
            return None;
        }
        self.lines.get(line as usize - 1)
    }

    /// Iterates over `(line_number, text)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (u32, &'a str)> + '_ {
        self.lines.iter().enumerate().map(|(idx, info)| {
            let text = &self.source[info.start as usize..info.end as usize];
            (idx as u32 + 1, text)
        })
    }

    /// Returns the numbers of every line satisfying `predicate`, ascending.
    pub fn matching_lines<F>(&self, mut predicate: F) -> Vec<u32>
    where
        F: FnMut(&str) -> bool,
    {
        self.lines()
            .filter(|(_, text)| predicate(text))
            .map(|(line, _)| line)
            .collect()
    }

    /// Returns the top-level elements in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns every element of `kind` at any depth, in document order.
    pub fn find_type_elements(&self, kind: ElementKind) -> Vec<&Element> {
        let mut found = Vec::new();
        let mut stack: Vec<&Element> = self.elements.iter().rev().collect();
        while let Some(element) = stack.pop() {
            if element.is(kind) {
                found.push(element);
            }
            stack.extend(element.children.iter().rev());
        }
        found
    }
}

/// Returns the `(start, end)` byte range of each line's content.
///
/// Splits at `\r\n`, `\n` and bare `\r`, the line endings markdown-rs
/// recognizes, so line numbers agree with parser positions.
pub(crate) fn line_ranges(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => {
                ranges.push((start, idx));
                idx += 1;
                start = idx;
            }
            b'\r' => {
                ranges.push((start, idx));
                idx += if bytes.get(idx + 1) == Some(&b'\n') { 2 } else { 1 };
                start = idx;
            }
            _ => idx += 1,
        }
    }

    if start < bytes.len() {
        ranges.push((start, bytes.len()));
    }
    ranges
}
