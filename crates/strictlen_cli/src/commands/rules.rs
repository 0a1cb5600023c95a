//! Rules command implementation

use std::fmt::Write;

use miette::{IntoDiagnostic, Result};
use strictlen_core::{LINE_LENGTH_RULE, RuleManifest};

use crate::cli::OutputFormat;

const RULES: &[RuleManifest] = &[LINE_LENGTH_RULE];

pub fn run_rules(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_rules_text(RULES)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(RULES).into_diagnostic()?)
        }
    }
    Ok(())
}

fn render_rules_text(rules: &[RuleManifest]) -> String {
    let mut out = String::new();
    for rule in rules {
        let _ = writeln!(out, "{} [{}]", rule.display_name(), rule.tags.join(", "));
        let _ = writeln!(out, "    {}", rule.description);
    }
    out
}
