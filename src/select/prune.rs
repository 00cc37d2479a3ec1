use super::Entry;
use crate::error::{DuscopeError, Result};

/// Filter a candidate set down to the entries worth displaying at a
/// given size threshold.
///
/// A directory is kept only when its own content, beyond what its
/// displayed immediate children already explain, reaches `minsize`, or
/// when it has more than one sizable immediate child (a busy directory
/// is worth naming even with a small unexplained residue). Leaf-level
/// entries are kept by plain size comparison. Output order is not
/// specified; callers re-sort.
pub fn prune(entries: &[Entry], minsize: u64) -> Result<Vec<Entry>> {
    let refs: Vec<&Entry> = entries.iter().collect();
    let mut selected = Vec::new();
    prune_level(&refs, 0, minsize, &mut selected)?;
    Ok(selected.into_iter().cloned().collect())
}

fn prune_level<'a>(
    entries: &[&'a Entry],
    depth: usize,
    minsize: u64,
    out: &mut Vec<&'a Entry>,
) -> Result<()> {
    let (level, deep): (Vec<&'a Entry>, Vec<&'a Entry>) =
        entries.iter().copied().partition(|e| e.depth() == depth + 1);

    if level.is_empty() && deep.is_empty() {
        // Unreachable from a non-empty candidate set; an empty call here
        // means the input data is inconsistent upstream.
        return Err(DuscopeError::InvariantViolation(format!(
            "no entries at or below depth {depth}"
        )));
    }

    if deep.is_empty() {
        out.extend(level.into_iter().filter(|e| e.size >= minsize));
        return Ok(());
    }

    for &entry in &level {
        let prefix = &entry.path[..depth + 1];
        let content: Vec<&Entry> = deep
            .iter()
            .copied()
            .filter(|e| e.depth() == depth + 2 && e.path.starts_with(prefix))
            .collect();
        let content_size: u64 = content.iter().map(|e| e.size).sum();

        if entry.size.saturating_sub(content_size) >= minsize || content.len() > 1 {
            out.push(entry);
        }
    }

    prune_level(&deep, depth + 1, minsize, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::entry;

    fn paths(selected: &[Entry]) -> Vec<String> {
        let mut p: Vec<String> = selected.iter().map(Entry::joined).collect();
        p.sort();
        p
    }

    #[test]
    fn leaf_only_input_filters_by_size_exactly() {
        let entries = vec![entry("a", 10), entry("b", 3), entry("c", 7)];
        let selected = prune(&entries, 5).unwrap();
        assert_eq!(paths(&selected), vec!["a", "c"]);
    }

    #[test]
    fn leaf_only_input_is_idempotent() {
        let entries = vec![entry("a", 10), entry("b", 7)];
        let once = prune(&entries, 5).unwrap();
        let twice = prune(&once, 5).unwrap();
        assert_eq!(paths(&once), paths(&twice));
    }

    #[test]
    fn empty_input_fails_loudly() {
        let err = prune(&[], 5).unwrap_err();
        assert!(matches!(err, DuscopeError::InvariantViolation(_)));
    }

    #[test]
    fn parent_dropped_when_children_explain_its_size() {
        // 100 = 95 explained by b, residue 5 below the threshold, only
        // one immediate child.
        let entries = vec![entry("a", 100), entry("a/b", 95)];
        let selected = prune(&entries, 20).unwrap();
        assert_eq!(paths(&selected), vec!["a/b"]);
    }

    #[test]
    fn parent_kept_on_large_residue() {
        let entries = vec![entry("a", 100), entry("a/b", 60)];
        let selected = prune(&entries, 30).unwrap();
        assert_eq!(paths(&selected), vec!["a", "a/b"]);
    }

    #[test]
    fn parent_kept_with_multiple_content_children() {
        // Residue is 0, but two immediate children make the directory
        // worth naming.
        let entries = vec![entry("a", 100), entry("a/b", 60), entry("a/c", 40)];
        let selected = prune(&entries, 30).unwrap();
        assert_eq!(paths(&selected), vec!["a", "a/b", "a/c"]);
    }

    #[test]
    fn grandchildren_do_not_count_as_content() {
        // a/b/c is two levels below a, so a's content is only a/b and
        // its residue stays at 50. Counting the grandchild would drop a.
        let entries = vec![entry("a", 100), entry("a/b", 50), entry("a/b/c", 45)];
        let selected = prune(&entries, 30).unwrap();
        assert_eq!(paths(&selected), vec!["a", "a/b/c"]);
    }

    #[test]
    fn unrelated_siblings_are_not_mixed() {
        let entries = vec![
            entry("a", 100),
            entry("a/x", 95),
            entry("b", 80),
            entry("b/y", 30),
        ];
        let selected = prune(&entries, 40).unwrap();
        // a is explained by a/x; b keeps a 50-byte residue.
        assert_eq!(paths(&selected), vec!["a/x", "b"]);
    }

    #[test]
    fn level_without_parents_recurses_into_deep_entries() {
        // No depth-1 entries at all; the filter must still reach a/b.
        let entries = vec![entry("a/b", 50)];
        let selected = prune(&entries, 10).unwrap();
        assert_eq!(paths(&selected), vec!["a/b"]);
    }

    #[test]
    fn oversized_children_do_not_underflow_the_residue() {
        // Block-unit rounding can make children sum above the parent.
        let entries = vec![entry("a", 100), entry("a/b", 120)];
        let selected = prune(&entries, 10).unwrap();
        assert_eq!(paths(&selected), vec!["a/b"]);
    }
}
