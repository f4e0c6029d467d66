//! Run-level aggregation.
//!
//! Combines per-file outcomes into one verdict for the whole invocation:
//!
//!   - Any failing file → FAIL (exit 1)
//!   - Otherwise        → PASS (exit 0)
//!
//! Failures keep the order in which their files were supplied, so repeated
//! runs over the same input produce identical reports.

use crate::report::model::{FileOutcome, RunVerdict, Verdict};

pub const EXIT_PASS: i32 = 0;
pub const EXIT_FAIL: i32 = 1;
/// No paths supplied. Raised by the command-line parser before any
/// evaluation runs.
pub const EXIT_USAGE: i32 = 2;

/// Derives the run verdict from outcomes already in input order.
pub fn aggregate(outcomes: &[FileOutcome]) -> RunVerdict {
    let failures: Vec<FileOutcome> = outcomes
        .iter()
        .filter(|o| o.verdict == Verdict::Fail)
        .cloned()
        .collect();

    let overall = if failures.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let exit_code = match overall {
        Verdict::Pass => EXIT_PASS,
        Verdict::Fail => EXIT_FAIL,
    };

    RunVerdict {
        overall,
        failures,
        exit_code,
    }
}
