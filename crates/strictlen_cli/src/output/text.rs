//! Text output formatter

use std::fmt::Write;

use strictlen_core::{LintResult, LintSummary};

pub fn output_text(results: &[LintResult]) {
    print!("{}", render_text(results));
}

fn render_text(results: &[LintResult]) -> String {
    let mut out = String::new();

    for result in results {
        for diag in &result.diagnostics {
            let (line, column) = diag
                .loc
                .map_or((0, 0), |loc| (loc.start.line, loc.start.column + 1));
            let _ = writeln!(
                out,
                "{}:{}:{} {} [{}]: {}",
                result.path.display(),
                line,
                column,
                diag.severity,
                diag.rule_id,
                diag.message
            );
        }
    }

    let summary = LintSummary::from_results(results);
    let _ = writeln!(
        out,
        "\nChecked {} files, found {} issues ({} files with errors)",
        summary.files_checked, summary.total_diagnostics, summary.files_with_errors
    );

    out
}
