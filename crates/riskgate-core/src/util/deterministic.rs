//! Deterministic ordering helpers.
//!
//! Parallel evaluation finishes files in arbitrary order. These helpers tag
//! each result with the position of its path in the caller's input and
//! restore that order before aggregation, so reports never depend on
//! scheduling.

/// A value tagged with its position in the original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    pub index: usize,
    pub value: T,
}

/// Sort results back into input order and drop the tags.
pub fn restore_input_order<T>(mut items: Vec<Indexed<T>>) -> Vec<T> {
    items.sort_by_key(|item| item.index);
    items.into_iter().map(|item| item.value).collect()
}

/// Split `items` into at most `jobs` contiguous, non-empty chunks.
pub fn partition<T>(items: &[T], jobs: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    let jobs = jobs.clamp(1, items.len());
    let chunk_len = items.len().div_ceil(jobs);
    items.chunks(chunk_len).collect()
}
