//! Line numbering for status output

/// Separator printed between an index and its entry
pub const LABEL_SEPARATOR: &str = " >> ";

/// Number of decimal digits in `n` (at least one).
pub fn digit_count(n: usize) -> usize {
    let mut digits = 1;
    let mut rest = n / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// Width every index is padded to for a list of `total` entries.
pub fn index_width(total: usize) -> usize {
    digit_count(total)
}

/// Zero-padded 1-based index for the entry at `index` (0-based).
///
/// All labels of one list share the width of the last index: with 12
/// entries the first label is `01`, with 5 entries it is `1`.
pub fn number_label(total: usize, index: usize) -> String {
    format!("{:0width$}", index + 1, width = index_width(total))
}

/// Status line for an entry: `01 >> "path"`.
pub fn format_entry_line(total: usize, index: usize, entry: &str) -> String {
    format!(
        "{}{}\"{}\"",
        number_label(total, index),
        LABEL_SEPARATOR,
        entry
    )
}
