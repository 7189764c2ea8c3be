use std::iter;

use chrono::NaiveDate;
use nutripi_model::profile::LoggedWeight;

/// Replaces the entry for `date`, if any, and appends the new value.
/// Other entries keep their relative order.
pub fn upsert_logged_weight(
    history: &[LoggedWeight],
    date: NaiveDate,
    value_kg: f64,
) -> Vec<LoggedWeight> {
    history
        .iter()
        .filter(|entry| entry.date != date)
        .cloned()
        .chain(iter::once(LoggedWeight::new(date, value_kg)))
        .collect()
}

/// Collapses duplicate dates, keeping the last value logged for each.
pub fn normalize_history(entries: &[LoggedWeight]) -> Vec<LoggedWeight> {
    entries.iter().fold(Vec::new(), |history, entry| {
        upsert_logged_weight(&history, entry.date, entry.value)
    })
}

/// Most recent entry by calendar date.
pub fn latest_weight(history: &[LoggedWeight]) -> Option<&LoggedWeight> {
    history.iter().max_by_key(|entry| entry.date)
}
