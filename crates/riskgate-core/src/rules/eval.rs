//! Per-file gate decision.
//!
//! The decision table, first match wins:
//!
//!   1. content not decodable           → FAIL (fail-closed)
//!   2. no disk-write signal            → PASS (out of scope)
//!   3. disk write + encryption signal  → PASS
//!   4. disk write, no encryption       → FAIL
//!
//! The table is exhaustive. The outcome is a pure function of the file's
//! bytes.

use tracing::debug;

use crate::report::model::{FileOutcome, Verdict};
use crate::signals::extract::extract_signals;
use crate::signals::model::Finding;
use crate::source::decode::Decoded;
use crate::source::read::SourceFile;

pub const DECODE_FAILURE_REASON: &str =
    "content could not be decoded as text; treated as a violation.";

pub const MISSING_ENCRYPTION_REASON: &str = "writes to persistent storage without an accompanying encryption signal; expected a recognized crypto usage or approved safe-storage wrapper";

pub fn evaluate(file: &SourceFile) -> FileOutcome {
    let mut outcome = FileOutcome {
        path: file.path.clone(),
        verdict: Verdict::Pass,
        reason: None,
        finding: Finding::NoSignal,
        matched: Vec::new(),
        sha256: Some(file.sha256.clone()),
    };

    let text = match &file.content {
        Decoded::Text(text) => text,
        Decoded::Failure => {
            // Deliberately ahead of any pattern check: undecodable content
            // fails even when no write signal could ever be present.
            outcome.verdict = Verdict::Fail;
            outcome.finding = Finding::DecodeFailure;
            outcome.reason = Some(DECODE_FAILURE_REASON.to_string());
            debug!(path = %file.path, "decode failure");
            return outcome;
        }
    };

    let signals = extract_signals(text);
    outcome.matched = signals.matched();

    if !signals.write.any() {
        outcome.finding = Finding::NoSignal;
    } else if signals.encryption.accepted() {
        outcome.finding = Finding::EncryptionSignalDetected;
    } else {
        outcome.verdict = Verdict::Fail;
        outcome.finding = Finding::DiskWriteDetected;
        outcome.reason = Some(MISSING_ENCRYPTION_REASON.to_string());
    }

    debug!(
        path = %file.path,
        verdict = %outcome.verdict,
        finding = ?outcome.finding,
        "evaluated"
    );

    outcome
}
