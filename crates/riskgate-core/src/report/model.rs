use serde::{Deserialize, Serialize};

use crate::rules::catalog::PatternId;
use crate::signals::model::Finding;
use crate::{RULE_CATALOG_VERSION, SCHEMA_VERSION};

/// Top-level gate report.
///
/// Deterministic for identical inputs given in identical order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub catalog: RulesCatalogInfo,
    /// Every evaluated file, in input order. Skipped paths are absent.
    pub files: Vec<FileOutcome>,
    pub verdict: RunVerdict,
}

impl Report {
    pub fn new(tool: ToolInfo, files: Vec<FileOutcome>, verdict: RunVerdict) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            catalog: RulesCatalogInfo::default(),
            files,
            verdict,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Pattern catalog metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesCatalogInfo {
    pub catalog_version: String,
    pub ruleset: String,
}

impl Default for RulesCatalogInfo {
    fn default() -> Self {
        Self {
            catalog_version: RULE_CATALOG_VERSION.to_string(),
            ruleset: "encrypt-before-write".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => f.write_str("PASS"),
            Verdict::Fail => f.write_str("FAIL"),
        }
    }
}

/// Result of evaluating one file. Never mutated once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: String,
    pub verdict: Verdict,
    /// Present only on failure.
    pub reason: Option<String>,
    pub finding: Finding,
    /// Catalog entries that matched, in catalog order.
    pub matched: Vec<PatternId>,
    pub sha256: Option<String>,
}

/// Aggregate decision over one invocation.
///
/// `overall` is `Fail` iff `failures` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunVerdict {
    pub overall: Verdict,
    pub failures: Vec<FileOutcome>,
    pub exit_code: i32,
}
