use crate::report::model::{Report, Verdict};

pub const BANNER_PREFIX: &str = "RISK GATE";

/// Renders the human-readable gate output.
///
/// ```text
/// RISK GATE: FAIL
///  - path/to/file.py: <reason>
/// ```
pub fn render_text(report: &Report) -> String {
    let verdict = &report.verdict;
    let mut out = format!("{BANNER_PREFIX}: {}\n", verdict.overall);

    if verdict.overall == Verdict::Fail {
        for failure in &verdict.failures {
            let reason = failure.reason.as_deref().unwrap_or_default();
            out.push_str(&format!(" - {}: {}\n", failure.path, reason));
        }
    }

    out
}
