use std::collections::HashSet;

use super::{prune, Entry};
use crate::error::{DuscopeError, Result};

/// Find a size threshold whose pruned result has exactly `target`
/// entries, by bisection between 1 and the largest observed size.
///
/// `entries` must be size-descending. When many entries share a size
/// the search can reach a fixed point that never hits the target; that
/// pass is detected by its `(working set, mean, count)` signature and
/// the last filtered result is truncated to `target` instead of looping
/// forever. The truncation is designed degradation, not an error.
pub fn threshold_search(entries: &[Entry], target: usize) -> Result<Vec<Entry>> {
    let first = entries.first().ok_or(DuscopeError::EmptyInput)?;

    let mut low: u64 = 1;
    let mut high: u64 = first.size.max(1);
    let mut seen: HashSet<(usize, u64, usize)> = HashSet::new();

    loop {
        // floor((low + high) / 2 + 0.5), written without overflow.
        let mean = low + (high - low + 1) / 2;

        // entries is sorted, so the working set is a prefix.
        let cut = entries.partition_point(|e| e.size >= mean);
        let working = &entries[..cut];

        let mut filtered = if working.is_empty() {
            // Every candidate is below the threshold; counts as an
            // empty pass rather than a pruning fault.
            Vec::new()
        } else {
            prune(working, mean)?
        };
        let count = filtered.len();

        if count == target {
            return Ok(filtered);
        }

        if !seen.insert((working.len(), mean, count)) {
            tracing::debug!(mean, count, target, "threshold search reached a fixed point");
            filtered.sort_by(|a, b| b.size.cmp(&a.size));
            filtered.truncate(target);
            return Ok(filtered);
        }

        if count > target {
            low = mean;
        } else {
            high = mean;
        }
    }
}
