use regex::Regex;
use std::sync::LazyLock;

use crate::models::snapshot::ActivitySnapshot;

static SUMMARY_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9][0-9,]*)\s+contributions?\s+in\s+the\s+last\s+year")
        .expect("summary count pattern is valid")
});

/// Resolve the yearly contribution count from whichever field the snapshot
/// generator happened to write.
///
/// Numeric fields are consulted first, in a fixed order, and the first finite
/// non-negative value wins. Older snapshots only carried the number inside the
/// free-text summary, so that is mined last.
pub fn resolve_contribution_count(snapshot: &ActivitySnapshot) -> Option<f64> {
    [
        snapshot.yearly_contributions,
        snapshot.total_contributions,
        snapshot.contributions_last_year,
        snapshot.annual_contributions,
    ]
    .into_iter()
    .flatten()
    .find(|value| is_valid_count(*value))
    .or_else(|| snapshot.summary.as_deref().and_then(count_from_summary))
}

/// Extract "<n> contributions in the last year" from free text
pub fn count_from_summary(summary: &str) -> Option<f64> {
    let digits: String = SUMMARY_COUNT
        .captures(summary)?
        .get(1)?
        .as_str()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    digits.parse::<f64>().ok().filter(|value| is_valid_count(*value))
}

/// Format a count the way it is shown to visitors (no trailing ".0")
pub fn format_count(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0 into "0"
        return "0".to_string();
    }
    format!("{}", value)
}

fn is_valid_count(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
