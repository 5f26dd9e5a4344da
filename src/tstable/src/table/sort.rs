//! Row ordering.

/// Returns the rows ordered by the cell at `key`.
///
/// Cells compare by codepoint, not by locale. The sort is stable, so rows
/// with equal keys keep their insertion order.
pub(super) fn sorted_rows(rows: &[Vec<String>], key: usize) -> Vec<&[String]> {
    let mut sorted: Vec<&[String]> = rows.iter().map(Vec::as_slice).collect();
    sorted.sort_by(|a, b| a.get(key).cmp(&b.get(key)));
    sorted
}
