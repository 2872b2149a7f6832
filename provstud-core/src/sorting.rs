use crate::dates::parse_timestamp;
use crate::models::{Batch, SortDirection, SortKey, SortSpec};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Sort batches in place by the given spec.
///
/// The sort is stable: batches whose keys compare equal keep their relative
/// input order, with no secondary tie-break. String keys compare on a
/// normalized form (see [`normalize_text`]); `lastScan` compares
/// chronologically on the parsed timestamp. Batches with a missing or
/// unparseable key compare equal to each other and order after batches
/// that have one, in either direction.
pub fn sort_batches(batches: &mut [Batch], spec: SortSpec) {
    batches.sort_by(|a, b| compare_batches(a, b, spec));
}

fn compare_batches(a: &Batch, b: &Batch, spec: SortSpec) -> Ordering {
    if spec.key == SortKey::LastScan {
        let a_ts = a.last_scan.as_deref().and_then(parse_timestamp);
        let b_ts = b.last_scan.as_deref().and_then(parse_timestamp);
        compare_keys(a_ts, b_ts, spec.direction)
    } else {
        compare_keys(string_key(a, spec.key), string_key(b, spec.key), spec.direction)
    }
}

fn string_key(batch: &Batch, key: SortKey) -> Option<String> {
    let raw = match key {
        SortKey::ProductName => Some(batch.product_name.as_str()),
        SortKey::BatchId => Some(batch.batch_id.as_str()),
        SortKey::Status => batch.status.as_deref(),
        SortKey::Category => batch.category.as_deref(),
        SortKey::LastScan => batch.last_scan.as_deref(),
    };
    raw.map(normalize_text)
}

/// Direction applies between present keys only; a missing key is always
/// greater than a present one, so incomplete batches sink to the bottom
fn compare_keys<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(&b),
            SortDirection::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Normalize text for comparison and matching
/// - Unicode normalization (NFD decomposition) and lowercase
/// - Trim and collapse internal whitespace
pub fn normalize_text(s: &str) -> String {
    let normalized: String = s.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}
