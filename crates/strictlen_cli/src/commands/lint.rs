//! Lint command implementation

use miette::{IntoDiagnostic, Result};
use strictlen_core::{Linter, LinterConfig, RuleSettings};
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat, RuleOverrides};
use crate::output::output_results;

pub fn run_lint(
    cli: &Cli,
    patterns: &[String],
    format: OutputFormat,
    overrides: &RuleOverrides,
) -> Result<bool> {
    let config = if let Some(ref path) = cli.config {
        LinterConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    let settings = config
        .rule_settings()
        .into_diagnostic()?
        .map(|settings| overrides.apply(settings));

    let linter = Linter::with_settings(config, settings).into_diagnostic()?;

    let (results, failures) = linter.lint_patterns(patterns).into_diagnostic()?;

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to lint:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    let has_errors = output_results(&results, format)?;

    Ok(has_errors || !failures.is_empty())
}

pub fn find_config() -> Result<LinterConfig> {
    if let Some(path) = LinterConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LinterConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(LinterConfig::new())
}

impl RuleOverrides {
    /// Applies command-line flags on top of the configured settings.
    pub fn apply(&self, mut settings: RuleSettings) -> RuleSettings {
        let options = &mut settings.options;
        if let Some(line_length) = self.line_length {
            debug!("Overriding line_length: {}", line_length);
            options.line_length = line_length;
        }
        if self.no_ignore_code_blocks {
            options.ignore_code_blocks = false;
        }
        if self.no_ignore_tables {
            options.ignore_tables = false;
        }
        if self.no_ignore_links {
            options.ignore_links = false;
        }
        if self.no_ignore_link_punctuation {
            options.ignore_link_punctuation = false;
        }
        settings
    }
}
