use std::collections::HashSet;

use super::size::format_size;
use crate::select::{Entry, SelectionResult};

/// Indented tree, grouped by shared path prefix.
///
/// The longest common prefix across all selected paths is stripped for
/// compactness (capped so no entry loses its last segment), and each
/// entry nests under its nearest *displayed* ancestor. Indentation
/// therefore scales with display depth, not raw path depth: a deep
/// unbranched chain of undisplayed ancestors adds nothing.
pub fn render(result: &SelectionResult, total_label: &str) -> Vec<String> {
    let entries = &result.entries;
    let mut lines = Vec::with_capacity(entries.len() + 1);

    if !entries.is_empty() {
        let strip = common_prefix_len(entries);

        // Nearest displayed ancestor of each entry, by longest proper
        // path prefix. The selection is small, quadratic is fine.
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); entries.len()];
        let mut roots: Vec<usize> = Vec::new();
        for (i, e) in entries.iter().enumerate() {
            let parent = entries
                .iter()
                .enumerate()
                .filter(|(j, p)| *j != i && is_proper_prefix(&p.path, &e.path))
                .max_by_key(|(_, p)| p.path.len())
                .map(|(j, _)| j);
            match parent {
                // Entries come in size-descending order, so each child
                // list stays size-descending too.
                Some(j) => children[j].push(i),
                None => roots.push(i),
            }
        }

        let mut printed: HashSet<&[String]> = HashSet::new();
        for root in roots {
            emit(root, 0, strip, entries, &children, &mut printed, &mut lines);
        }
    }

    lines.push(format!("{:>9}  {}", format_size(result.total), total_label));
    lines
}

fn emit<'a>(
    idx: usize,
    depth: usize,
    strip: usize,
    entries: &'a [Entry],
    children: &[Vec<usize>],
    printed: &mut HashSet<&'a [String]>,
    lines: &mut Vec<String>,
) {
    let entry = &entries[idx];
    if !printed.insert(entry.path.as_slice()) {
        return;
    }

    lines.push(format!(
        "{:>9}  {}{}",
        format_size(entry.size),
        "  ".repeat(depth),
        entry.path[strip..].join("/")
    ));

    for &child in &children[idx] {
        emit(child, depth + 1, strip, entries, children, printed, lines);
    }
}

fn is_proper_prefix(prefix: &[String], path: &[String]) -> bool {
    prefix.len() < path.len() && path.starts_with(prefix)
}

/// Longest common prefix length across all paths, capped below the
/// shortest path length so every entry keeps at least one segment.
fn common_prefix_len(entries: &[Entry]) -> usize {
    let min_len = entries
        .iter()
        .map(Entry::depth)
        .min()
        .unwrap_or(0);
    let cap = min_len.saturating_sub(1);

    let first = &entries[0].path;
    let mut lcp = 0;
    while lcp < cap && entries.iter().all(|e| e.path[lcp] == first[lcp]) {
        lcp += 1;
    }
    lcp
}
