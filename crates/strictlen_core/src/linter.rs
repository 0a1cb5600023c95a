//! Core linter engine.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use strictlen_parser::{MarkdownParser, Parser};

use crate::config::RuleSettings;
use crate::file_finder::FileFinder;
use crate::rule;
use crate::{LintResult, LinterConfig, LinterError};

/// Files larger than this are reported as failures instead of being read.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Result type for lint_files and lint_patterns methods.
///
/// Contains a tuple of:
/// - Successful lint results
/// - Failed files with their errors (path and error)
pub type LintFilesResult = Result<(Vec<LintResult>, Vec<(PathBuf, LinterError)>), LinterError>;

/// The core linter engine.
///
/// Orchestrates file discovery, parsing and the line-length check.
pub struct Linter {
    /// Linter configuration.
    config: LinterConfig,
    /// Resolved rule settings, `None` when the rule is turned off.
    settings: Option<RuleSettings>,
    /// Markdown parser.
    parser: MarkdownParser,
    /// File discovery with include/exclude filtering.
    finder: FileFinder,
}

impl Linter {
    /// Creates a new linter with the given configuration.
    pub fn new(config: LinterConfig) -> Result<Self, LinterError> {
        let settings = config.rule_settings()?;
        Self::with_settings(config, settings)
    }

    /// Creates a linter with already resolved rule settings.
    ///
    /// Used when command-line flags override the config file.
    pub fn with_settings(
        config: LinterConfig,
        settings: Option<RuleSettings>,
    ) -> Result<Self, LinterError> {
        let parser = MarkdownParser::new();
        let finder = FileFinder::new(&config.include, &config.exclude, parser.extensions())?;

        match &settings {
            Some(s) => debug!(
                "Line-length rule enabled: severity={}, line_length={}",
                s.severity, s.options.line_length
            ),
            None => debug!("Line-length rule disabled"),
        }

        Ok(Self {
            config,
            settings,
            parser,
            finder,
        })
    }

    /// Returns the resolved rule settings.
    pub fn settings(&self) -> Option<&RuleSettings> {
        self.settings.as_ref()
    }

    /// Lints files matching the given patterns.
    ///
    /// Returns a tuple of (successful results, failed files with errors).
    pub fn lint_patterns(&self, patterns: &[String]) -> LintFilesResult {
        let base_dir = self
            .config
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let files = self.finder.discover_files(patterns, &base_dir)?;
        self.lint_files(&files)
    }

    /// Lints the given files in parallel.
    pub fn lint_files(&self, paths: &[PathBuf]) -> LintFilesResult {
        let results: Vec<Result<LintResult, (PathBuf, LinterError)>> = paths
            .par_iter()
            .map(|path| self.lint_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(lint_result) => successes.push(lint_result),
                Err((path, error)) => {
                    warn!("Failed to lint {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        Ok((successes, failures))
    }

    /// Reads and lints a single file.
    pub fn lint_file(&self, path: &Path) -> Result<LintResult, LinterError> {
        debug!("Linting {}", path.display());

        let metadata = fs::metadata(path).map_err(|e| {
            LinterError::file(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                e
            ))
        })?;

        if !metadata.is_file() {
            return Err(LinterError::file(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(LinterError::file(format!(
                "File size exceeds limit of {} bytes: {}",
                MAX_FILE_SIZE,
                path.display()
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;

        self.lint_content(path, &content)
    }

    /// Lints in-memory content as if it were read from `path`.
    pub fn lint_content(&self, path: &Path, content: &str) -> Result<LintResult, LinterError> {
        let Some(settings) = &self.settings else {
            return Ok(LintResult::new(path.to_path_buf(), Vec::new()));
        };

        let document = self.parser.parse(content)?;
        let diagnostics = rule::check(&document, &settings.options, settings.severity);

        debug!(
            "{}: {} lines parsed as {}, {} violations",
            path.display(),
            document.line_count(),
            self.parser.name(),
            diagnostics.len()
        );

        Ok(LintResult::new(path.to_path_buf(), diagnostics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;
    use crate::line_length::LineLengthOptions;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    fn linter_with_limit(line_length: usize) -> Linter {
        let settings = RuleSettings {
            severity: Severity::Error,
            options: LineLengthOptions {
                line_length,
                ..Default::default()
            },
        };
        Linter::with_settings(LinterConfig::new(), Some(settings)).unwrap()
    }

    fn lines_of(result: &LintResult) -> Vec<u32> {
        result.diagnostics.iter().filter_map(|d| d.line()).collect()
    }

    #[test]
    fn test_linter_new_defaults() {
        let linter = Linter::new(LinterConfig::new()).unwrap();
        let settings = linter.settings().unwrap();
        assert_eq!(settings.options.line_length, 120);
        assert_eq!(settings.severity, Severity::Error);
    }

    #[test]
    fn test_linter_new_rejects_bad_rule_options() {
        let config =
            LinterConfig::from_jsonc(r#"{ "options": { "MY000": { "max": 80 } } }"#).unwrap();
        assert!(Linter::new(config).is_err());
    }

    #[test]
    fn test_linter_new_rejects_bad_globs() {
        let config = LinterConfig {
            exclude: vec!["[broken".to_string()],
            ..Default::default()
        };
        assert!(Linter::new(config).is_err());
    }

    #[test]
    fn test_lint_content_reports_long_lines() {
        let linter = linter_with_limit(10);
        let content = "short\naaaaaaaaaaaaaaa\n\n```\naaaaaaaaaaaaaaa\n```\n";

        let result = linter.lint_content(Path::new("doc.md"), content).unwrap();

        assert_eq!(result.path, PathBuf::from("doc.md"));
        assert_eq!(lines_of(&result), vec![2]);
    }

    #[test]
    fn test_lint_content_exempts_tables_and_links() {
        let linter = linter_with_limit(10);
        let content = "\
| column one | column two |
|------------|------------|
| long value | other cell |

See [the documentation](https://example.com/docs).
Plain text that is far too long.
";

        let result = linter.lint_content(Path::new("doc.md"), content).unwrap();

        assert_eq!(lines_of(&result), vec![6]);
    }

    #[rstest]
    #[case::lf("\n")]
    #[case::crlf("\r\n")]
    #[case::cr("\r")]
    fn test_code_block_exempt_with_any_line_ending(#[case] eol: &str) {
        let linter = linter_with_limit(10);
        let content = "short\n\n```\naaaaaaaaaaaaaaaaaaaa\n```\nbbbbbbbbbbbbbbbbbbbb\n"
            .replace('\n', eol);

        let result = linter.lint_content(Path::new("doc.md"), &content).unwrap();

        assert_eq!(lines_of(&result), vec![6]);
    }

    #[test]
    fn test_disabled_rule_reports_nothing() {
        let config =
            LinterConfig::from_jsonc(r#"{ "options": { "stricter-line-length": false } }"#)
                .unwrap();
        let linter = Linter::new(config).unwrap();
        assert!(linter.settings().is_none());

        let long_line = "x".repeat(500);
        let result = linter
            .lint_content(Path::new("doc.md"), &long_line)
            .unwrap();
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_configured_severity_is_applied() {
        let config = LinterConfig::from_jsonc(
            r#"{ "options": { "MY000": { "severity": "warning", "line_length": 5 } } }"#,
        )
        .unwrap();
        let linter = Linter::new(config).unwrap();

        let result = linter
            .lint_content(Path::new("doc.md"), "a long line\n")
            .unwrap();

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Warning);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_lint_file_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "ok\nthis line is long\n").unwrap();

        let result = linter_with_limit(10).lint_file(&path).unwrap();

        assert_eq!(lines_of(&result), vec![2]);
    }

    #[test]
    fn test_lint_file_rejects_directory() {
        let dir = tempdir().unwrap();
        let err = linter_with_limit(10).lint_file(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_lint_files_parallel_empty() {
        let (successes, failures) = linter_with_limit(10).lint_files(&[]).unwrap();
        assert!(successes.is_empty());
        assert!(failures.is_empty());
    }

    #[test]
    fn test_lint_files_collects_failures() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.md");
        fs::write(&good, "fine\n").unwrap();
        let missing = dir.path().join("missing.md");

        let (successes, failures) = linter_with_limit(10)
            .lint_files(&[good.clone(), missing.clone()])
            .unwrap();

        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].path, good);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, missing);
    }

    #[test]
    fn test_lint_patterns_uses_config_base_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "this line is long\n").unwrap();
        fs::write(dir.path().join("b.md"), "short\n").unwrap();
        fs::write(dir.path().join("c.txt"), "this line is long\n").unwrap();

        let config = LinterConfig {
            base_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let settings = RuleSettings {
            options: LineLengthOptions {
                line_length: 10,
                ..Default::default()
            },
            ..Default::default()
        };
        let linter = Linter::with_settings(config, Some(settings)).unwrap();

        let (results, failures) = linter.lint_patterns(&["*.md".to_string()]).unwrap();

        assert!(failures.is_empty());
        assert_eq!(results.len(), 2);
        let flagged: Vec<_> = results
            .iter()
            .filter(|r| r.has_errors())
            .map(|r| r.path.file_name().unwrap().to_owned())
            .collect();
        assert_eq!(flagged, vec![std::ffi::OsString::from("a.md")]);
    }
}
