use crate::error::{DuscopeError, Result};

/// Reserved path printed by `du -c` for the grand-total row.
pub const TOTAL_SENTINEL: &str = "total";

/// One record of a usage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A real filesystem object: size in bytes and path segments.
    Entry { size: u64, path: Vec<String> },

    /// The grand-total pseudo-entry, keyed by the reserved sentinel.
    Total(u64),
}

/// Parse one `SIZE<TAB>PATH` line of du output.
///
/// `scale` converts the reported unit to bytes (1024 for `-k` block
/// counts, 1 for `-b`). `line_no` is 1-based and only used for
/// diagnostics.
pub fn parse_line(line: &str, scale: u64, line_no: usize) -> Result<Record> {
    let (size_field, path_field) = line.split_once('\t').ok_or_else(|| DuscopeError::Parse {
        line: line_no,
        reason: "missing tab separator".into(),
    })?;

    let size: u64 = size_field
        .trim()
        .parse()
        .map_err(|_| DuscopeError::Parse {
            line: line_no,
            reason: format!("invalid size '{size_field}'"),
        })?;
    let size = size.saturating_mul(scale);

    if path_field == TOTAL_SENTINEL {
        return Ok(Record::Total(size));
    }

    if path_field.is_empty() {
        return Err(DuscopeError::Parse {
            line: line_no,
            reason: "empty path".into(),
        });
    }

    // Splitting on '/' keeps an empty first segment for absolute paths,
    // so joining the segments back restores the original string.
    let path = path_field.split('/').map(String::from).collect();
    Ok(Record::Entry { size, path })
}
