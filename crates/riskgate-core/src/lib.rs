pub mod error;
pub mod report;
pub mod rules;
pub mod signals;
pub mod source;
pub mod util;

use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::error::GateError;
use crate::report::model::{FileOutcome, Report, ToolInfo};
use crate::util::deterministic::{Indexed, partition, restore_input_order};

/// JSON schema version of gate reports.
pub const SCHEMA_VERSION: &str = "0.1.0";

pub const RULE_CATALOG_VERSION: &str = "0.1.0";

/// Read, decode and evaluate a single source file.
pub fn inspect_file(path: &Path) -> Result<FileOutcome, GateError> {
    let file = source::read::read_source(path)?;
    Ok(rules::eval::evaluate(&file))
}

/// Run the gate over `paths` and build the report.
///
/// Missing paths and non-`.py` paths are skipped. With `jobs > 1` files are
/// evaluated on scoped worker threads; the report is identical to a
/// sequential run either way.
pub fn inspect_paths(paths: &[PathBuf], tool: ToolInfo, jobs: usize) -> Result<Report> {
    let targets: Vec<Indexed<&Path>> = paths
        .iter()
        .enumerate()
        .filter_map(|(index, path)| {
            if source::read::is_target(path) {
                Some(Indexed {
                    index,
                    value: path.as_path(),
                })
            } else {
                debug!(path = %path.display(), "skipping non-target path");
                None
            }
        })
        .collect();

    debug!(targets = targets.len(), supplied = paths.len(), jobs, "starting gate run");

    let files: Result<Vec<FileOutcome>, GateError> = if jobs > 1 && targets.len() > 1 {
        inspect_parallel(&targets, jobs)
    } else {
        targets.iter().map(|t| inspect_file(t.value)).collect()
    };
    let files = files.context("gate run aborted")?;

    let verdict = rules::classify::aggregate(&files);
    info!(
        overall = %verdict.overall,
        evaluated = files.len(),
        failures = verdict.failures.len(),
        "gate run finished"
    );

    Ok(Report::new(tool, files, verdict))
}

fn inspect_parallel(
    targets: &[Indexed<&Path>],
    jobs: usize,
) -> Result<Vec<FileOutcome>, GateError> {
    let chunks = partition(targets, jobs);

    let results: Vec<Indexed<Result<FileOutcome, GateError>>> = thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|t| Indexed {
                            index: t.index,
                            value: inspect_file(t.value),
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| GateError::WorkerPanicked))
            .collect::<Result<Vec<_>, _>>()
            .map(|batches| batches.into_iter().flatten().collect())
    })?;

    // First error in input order wins, matching the sequential path.
    restore_input_order(results).into_iter().collect()
}
