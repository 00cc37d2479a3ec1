use super::size::format_size;
use crate::select::SelectionResult;

/// Flat list, largest first, human-readable sizes.
pub fn render_human(result: &SelectionResult, total_label: &str) -> Vec<String> {
    let mut lines: Vec<String> = result
        .entries
        .iter()
        .map(|e| format!("{:>9}  {}", format_size(e.size), e.joined()))
        .collect();
    lines.push(format!("{:>9}  {}", format_size(result.total), total_label));
    lines
}

/// Tab-delimited raw byte counts. Splitting each row on the tab and
/// integer-parsing the first field reproduces the selection exactly.
pub fn render_parseable(result: &SelectionResult, total_label: &str) -> Vec<String> {
    let mut lines: Vec<String> = result
        .entries
        .iter()
        .map(|e| format!("{}\t{}", e.size, e.joined()))
        .collect();
    lines.push(format!("{}\t{}", result.total, total_label));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::entry;

    fn result() -> SelectionResult {
        SelectionResult {
            entries: vec![
                entry("a", 1048576),
                entry("a/b", 2048),
                entry("c", 512),
            ],
            total: 1051136,
        }
    }

    #[test]
    fn human_list_is_size_descending_with_full_paths() {
        let lines = render_human(&result(), "total");
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("  a"));
        assert!(lines[0].contains("1.00 MB"));
        assert!(lines[1].ends_with("  a/b"));
        assert!(lines[2].ends_with("  c"));
        assert!(lines[3].contains("total"));
    }

    #[test]
    fn parseable_round_trips_bit_for_bit() {
        let original = result();
        let lines = render_parseable(&original, "total");

        let mut reparsed: Vec<(u64, String)> = Vec::new();
        for line in &lines {
            let (size, path) = line.split_once('\t').unwrap();
            reparsed.push((size.parse().unwrap(), path.to_string()));
        }

        let (total_size, total_label) = reparsed.pop().unwrap();
        assert_eq!(total_size, original.total);
        assert_eq!(total_label, "total");
        let expected: Vec<(u64, String)> = original
            .entries
            .iter()
            .map(|e| (e.size, e.joined()))
            .collect();
        assert_eq!(reparsed, expected);
    }

    #[test]
    fn parseable_uses_raw_byte_counts() {
        let lines = render_parseable(&result(), "total");
        assert_eq!(lines[0], "1048576\ta");
        assert_eq!(lines[3], "1051136\ttotal");
    }
}
