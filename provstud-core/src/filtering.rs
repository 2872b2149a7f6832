use crate::dates;
use crate::models::{Batch, DateRange, QueryState, TextField};
use crate::sorting::{normalize_text, sort_batches};
use chrono::{DateTime, Utc};

/// Check whether a batch matches a free-text search term over the given
/// fields. Matching is a case-insensitive substring test on normalized
/// text; a blank term matches everything. Fields the batch does not carry
/// are skipped.
pub fn matches_search(batch: &Batch, term: &str, fields: &[TextField]) -> bool {
    let needle = normalize_text(term);
    if needle.is_empty() {
        return true;
    }

    fields.iter().any(|&field| {
        batch
            .text_field(field)
            .map(|text| normalize_text(text).contains(&needle))
            .unwrap_or(false)
    })
}

/// Check whether a batch satisfies every active constraint in the query
/// (AND across the search, status, category and date axes).
///
/// Categorical constraints are exact token matches; a batch missing the
/// field never matches a specific constraint. `now` anchors the date-range
/// classification so results are deterministic for a given instant.
pub fn matches_query(batch: &Batch, query: &QueryState, now: DateTime<Utc>) -> bool {
    if !matches_search(batch, &query.search, &query.search_fields) {
        return false;
    }

    if let Some(required) = &query.status {
        if batch.status.as_deref() != Some(required.as_str()) {
            return false;
        }
    }

    if let Some(required) = &query.category {
        if batch.category.as_deref() != Some(required.as_str()) {
            return false;
        }
    }

    dates::in_range(batch.last_scan.as_deref(), now, query.date_range)
}

/// Apply the query's filters to a list of batches, returning only those
/// that match, in input order
pub fn apply_filters(batches: &[Batch], query: &QueryState, now: DateTime<Utc>) -> Vec<Batch> {
    batches
        .iter()
        .filter(|batch| matches_query(batch, query, now))
        .cloned()
        .collect()
}

/// Evaluate a full query: filter, then sort when the query asks for an
/// ordering. Pure with respect to its inputs; the result is always a
/// subset of `batches` and never aliases it.
pub fn apply_query(batches: &[Batch], query: &QueryState, now: DateTime<Utc>) -> Vec<Batch> {
    let mut visible = apply_filters(batches, query, now);
    if let Some(spec) = query.sort {
        sort_batches(&mut visible, spec);
    }
    visible
}

/// Check if the query constrains anything beyond "show all"
pub fn has_constraints(query: &QueryState) -> bool {
    !query.search.trim().is_empty()
        || query.status.is_some()
        || query.category.is_some()
        || query.date_range != DateRange::AllTime
}
