//! Entry selection pipeline: bounded top-K accumulation, threshold search
//! and tree pruning.

mod accumulator;
mod prune;
mod threshold;

pub use accumulator::TopAccumulator;
pub use prune::prune;
pub use threshold::threshold_search;

use serde::Serialize;

use crate::error::Result;

/// One filesystem object with its cumulative disk usage.
///
/// The path is kept as root-to-leaf segments; two entries are the same
/// object iff their segment sequences are equal. Segments never contain
/// the path separator, so `joined()` is lossless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Cumulative size in bytes
    pub size: u64,

    /// Path segments, root to leaf
    pub path: Vec<String>,
}

impl Entry {
    pub fn new(path: Vec<String>, size: u64) -> Self {
        Self { size, path }
    }

    /// Depth of the entry, measured as the number of path segments.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Path re-joined with `/`. An empty leading segment restores the
    /// leading `/` of an absolute path.
    pub fn joined(&self) -> String {
        self.path.join("/")
    }
}

/// Final outcome of the selection pipeline: the chosen entries, size
/// descending and distinct by path, plus the grand total reported by
/// the source.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult {
    pub entries: Vec<Entry>,
    pub total: u64,
}

/// Run the threshold search over an accumulator snapshot and re-sort the
/// outcome for display.
///
/// `snapshot` must be size-descending, as [`TopAccumulator::snapshot`]
/// produces it. The result keeps that ordering: size descending, ties
/// broken by snapshot position.
pub fn select(snapshot: Vec<Entry>, total: u64, lines: usize) -> Result<SelectionResult> {
    let chosen = threshold_search(&snapshot, lines)?;

    // The filter does not guarantee any order, and the non-convergence
    // fallback may return entries in pass order. Re-filtering the
    // snapshot restores size-descending order with original tie order.
    let chosen_paths: std::collections::HashSet<&[String]> =
        chosen.iter().map(|e| e.path.as_slice()).collect();
    let entries = snapshot
        .into_iter()
        .filter(|e| chosen_paths.contains(e.path.as_slice()))
        .collect();

    Ok(SelectionResult { entries, total })
}

#[cfg(test)]
pub(crate) fn entry(path: &str, size: u64) -> Entry {
    Entry::new(path.split('/').map(String::from).collect(), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_depth_and_join() {
        let e = entry("a/b/c", 10);
        assert_eq!(e.depth(), 3);
        assert_eq!(e.joined(), "a/b/c");
    }

    #[test]
    fn absolute_path_joins_losslessly() {
        let e = Entry::new(
            "/var/log".split('/').map(String::from).collect(),
            1,
        );
        assert_eq!(e.path[0], "");
        assert_eq!(e.joined(), "/var/log");
    }

    #[test]
    fn select_orders_by_size_descending() {
        let snapshot = vec![entry("a", 100), entry("a/b", 90), entry("a/c", 5)];
        let result = select(snapshot, 100, 2).unwrap();
        assert_eq!(result.total, 100);
        let sizes: Vec<u64> = result.entries.iter().map(|e| e.size).collect();
        let mut sorted = sizes.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sizes, sorted);
    }

    #[test]
    fn select_empty_snapshot_is_an_error() {
        let err = select(vec![], 0, 3).unwrap_err();
        assert!(matches!(err, crate::error::DuscopeError::EmptyInput));
    }

    // A directory whose displayed child explains most of its size is
    // still kept once the threshold drops below its unexplained residue.
    #[test]
    fn parent_with_unexplained_residue_is_kept() {
        let snapshot = vec![entry("a", 100), entry("a/b", 90), entry("a/c", 5)];
        let result = select(snapshot, 100, 2).unwrap();
        let paths: Vec<String> = result.entries.iter().map(Entry::joined).collect();
        assert_eq!(paths, vec!["a".to_string(), "a/b".to_string()]);
    }
}
