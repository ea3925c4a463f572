use std::fmt::Write;

use crate::stats::{Counts, SortStats};

/// Running totals appended to every non-terminal explanation.
pub(crate) fn totals(counts: Counts, moves_label: &str) -> String {
    format!(
        "Comparisons: {}\n{}: {}",
        counts.comparisons, moves_label, counts.moves
    )
}

pub(crate) fn with_totals(headline: impl AsRef<str>, counts: Counts, moves_label: &str) -> String {
    format!("{}\n{}", headline.as_ref(), totals(counts, moves_label))
}

pub(crate) fn summary(title: &str, stats: &SortStats, moves_label: &str) -> String {
    format!(
        "{}\nTime: {:.3}ms\n{}\nTime Complexity: {}\nSpace Complexity: {}",
        title,
        stats.elapsed_ms(),
        totals(stats.counts(), moves_label),
        stats.time_complexity,
        stats.space_complexity,
    )
}

pub fn format_float_array(values: &[f64]) -> String {
    let mut out = String::with_capacity(values.len() * 6);
    for (i, v) in values.iter().enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v:.2}");
    }
    out
}
