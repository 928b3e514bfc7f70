//! Recordline parser for colon-delimited `tmux -F` output.

/// Field separator used by every format string in this crate.
pub const FIELD_SEPARATOR: &str = ":";

/// Split raw tmux output into per-line field lists.
///
/// The output is trimmed, split on newlines, and each non-empty line is split
/// on `:`. Lines with fewer than `min_fields` fields are dropped.
pub fn parse_records(output: &str, min_fields: usize) -> Vec<Vec<&str>> {
    output
        .trim()
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            if fields.len() < min_fields {
                tracing::trace!(line, min_fields, "dropping short record line");
                return None;
            }
            Some(fields)
        })
        .collect()
}

/// tmux flag fields are `1` when set.
pub(crate) fn parse_flag(s: &str) -> bool {
    s == "1"
}
