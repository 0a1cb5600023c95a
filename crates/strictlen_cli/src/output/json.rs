//! JSON output formatter

use miette::{IntoDiagnostic, Result};
use strictlen_core::LintResult;

pub fn output_json(results: &[LintResult]) -> Result<()> {
    println!("{}", render_json(results).into_diagnostic()?);
    Ok(())
}

fn render_json(results: &[LintResult]) -> serde_json::Result<String> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "path": r.path.display().to_string(),
                "diagnostics": r.diagnostics,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output)
}
