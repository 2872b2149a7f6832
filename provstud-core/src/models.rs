use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One traced product batch. Field names follow the portal's wire format
/// (camelCase JSON). Unknown fields are preserved round-trip via `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: String,
    pub batch_id: String,
    pub product_name: String,
    pub manufacturer: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    /// Last scan timestamp as written in the dataset (RFC 3339 or a bare
    /// date). Kept as a string so malformed values survive loading; the
    /// query engine parses it lazily and tolerates unparseable values.
    pub last_scan: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Batch {
    /// Text of a searchable field, if the batch carries it
    pub fn text_field(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::ProductName => Some(&self.product_name),
            TextField::BatchId => Some(&self.batch_id),
            TextField::Manufacturer => self.manufacturer.as_deref(),
        }
    }

    /// Token of a categorical field, if the batch carries it
    pub fn categorical_value(&self, field: CategoricalField) -> Option<&str> {
        match field {
            CategoricalField::Status => self.status.as_deref(),
            CategoricalField::Category => self.category.as_deref(),
        }
    }
}

/// A dataset document: the batches plus a relative reference to the
/// catalog schema file that defines the allowed status/category tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchData {
    pub schema: String,
    pub batches: Vec<Batch>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Catalog schema: token vocabularies for the categorical fields, plus the
/// raw JSON Schema document when the file carries validation keywords
#[derive(Debug, Clone)]
pub struct ProvenanceSchema {
    pub schema_id: String,
    pub title: String,
    pub description: Option<String>,
    pub statuses: Vec<String>,
    pub categories: Vec<String>,
    pub json_schema: Option<serde_json::Value>,
}

/// Fields that free-text search may cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ProductName,
    BatchId,
    Manufacturer,
}

/// Fields restricted to a catalog-defined token set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    Status,
    Category,
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoricalField::Status => write!(f, "status"),
            CategoricalField::Category => write!(f, "category"),
        }
    }
}

impl FromStr for CategoricalField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(CategoricalField::Status),
            "category" => Ok(CategoricalField::Category),
            other => Err(format!(
                "Unknown categorical field '{}' (expected 'status' or 'category')",
                other
            )),
        }
    }
}

/// Named relative date ranges, classified against an explicit "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    AllTime,
    Today,
    Week,
    Month,
    Quarter,
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DateRange::AllTime),
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "quarter" => Ok(DateRange::Quarter),
            other => Err(format!(
                "Unknown date range '{}' (expected all, today, week, month or quarter)",
                other
            )),
        }
    }
}

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ProductName,
    BatchId,
    Status,
    Category,
    LastScan,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" | "productName" => Ok(SortKey::ProductName),
            "batchId" => Ok(SortKey::BatchId),
            "status" => Ok(SortKey::Status),
            "category" => Ok(SortKey::Category),
            "lastScan" => Ok(SortKey::LastScan),
            other => Err(format!(
                "Unknown sort field '{}' (expected name, batchId, status, category or lastScan)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

/// The combined query: search term, categorical constraints, date range and
/// sort. The default matches every batch and applies no ordering. An absent
/// constraint (`None`, empty search, `AllTime`) means "match everything"
/// on that axis.
#[derive(Debug, Clone)]
pub struct QueryState {
    pub search: String,
    /// Required status token, or `None` for all statuses
    pub status: Option<String>,
    /// Required category token, or `None` for all categories
    pub category: Option<String>,
    pub date_range: DateRange,
    pub sort: Option<SortSpec>,
    /// Which fields free-text search covers
    pub search_fields: Vec<TextField>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            category: None,
            date_range: DateRange::AllTime,
            sort: None,
            search_fields: vec![TextField::ProductName, TextField::BatchId],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_deserializes_camel_case() {
        let batch: Batch = serde_json::from_value(json!({
            "id": "1",
            "batchId": "TUR_2025_001",
            "productName": "Turmeric Powder",
            "manufacturer": "Himalayan Herbs Co.",
            "status": "verified",
            "category": "powders",
            "lastScan": "2025-01-05T14:30:00Z"
        }))
        .unwrap();

        assert_eq!(batch.batch_id, "TUR_2025_001");
        assert_eq!(batch.status.as_deref(), Some("verified"));
        assert_eq!(batch.categorical_value(CategoricalField::Category), Some("powders"));
    }

    #[test]
    fn test_batch_tolerates_missing_optional_fields() {
        let batch: Batch = serde_json::from_value(json!({
            "id": "2",
            "batchId": "ASH_2025_002",
            "productName": "Ashwagandha"
        }))
        .unwrap();

        assert!(batch.status.is_none());
        assert!(batch.last_scan.is_none());
        assert_eq!(batch.text_field(TextField::Manufacturer), None);
    }

    #[test]
    fn test_batch_preserves_extra_fields() {
        let value = json!({
            "id": "3",
            "batchId": "BRA_2025_001",
            "productName": "Brahmi",
            "complianceBadges": [{"name": "Organic", "icon": "Leaf"}]
        });

        let batch: Batch = serde_json::from_value(value).unwrap();
        assert!(batch.extra.contains_key("complianceBadges"));

        let back = serde_json::to_value(&batch).unwrap();
        assert_eq!(back["complianceBadges"][0]["name"], "Organic");
    }

    #[test]
    fn test_date_range_tokens() {
        assert_eq!("all".parse::<DateRange>().unwrap(), DateRange::AllTime);
        assert_eq!("quarter".parse::<DateRange>().unwrap(), DateRange::Quarter);
        assert!("yesterday".parse::<DateRange>().is_err());
    }

    #[test]
    fn test_sort_key_tokens() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::ProductName);
        assert_eq!("lastScan".parse::<SortKey>().unwrap(), SortKey::LastScan);
        assert!("compliance".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_default_query_has_no_constraints() {
        let query = QueryState::default();
        assert!(query.search.is_empty());
        assert!(query.status.is_none());
        assert!(query.category.is_none());
        assert_eq!(query.date_range, DateRange::AllTime);
        assert!(query.sort.is_none());
    }
}
