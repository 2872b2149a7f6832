use crate::models::ProvenanceSchema;
use serde_json::Value;

/// Extract the status token vocabulary from a catalog schema document
/// Looks for a "statuses" top-level property
pub fn extract_statuses(json_schema: &Value) -> Result<Vec<String>, String> {
    let statuses_value = json_schema
        .get("statuses")
        .ok_or("Catalog schema missing 'statuses' property")?;

    serde_json::from_value(statuses_value.clone())
        .map_err(|e| format!("Failed to parse statuses: {}", e))
}

/// Extract the category token vocabulary from a catalog schema document
/// Looks for a "categories" top-level property
pub fn extract_categories(json_schema: &Value) -> Result<Vec<String>, String> {
    let categories_value = json_schema
        .get("categories")
        .ok_or("Catalog schema missing 'categories' property")?;

    serde_json::from_value(categories_value.clone())
        .map_err(|e| format!("Failed to parse categories: {}", e))
}

/// Build a ProvenanceSchema from a catalog schema JSON document
pub fn build_schema_from_json(json_schema: Value) -> Result<ProvenanceSchema, String> {
    // Schema metadata
    let schema_id = json_schema
        .get("$id")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown")
        .to_string();

    let title = json_schema
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or("Untitled Catalog")
        .to_string();

    let description = json_schema
        .get("description")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let statuses = extract_statuses(&json_schema)?;
    let categories = extract_categories(&json_schema)?;

    Ok(ProvenanceSchema {
        schema_id,
        title,
        description,
        statuses,
        categories,
        json_schema: Some(json_schema),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_statuses() {
        let schema = json!({
            "statuses": ["verified", "pending", "failed", "expired"]
        });

        let statuses = extract_statuses(&schema).unwrap();
        assert_eq!(statuses, ["verified", "pending", "failed", "expired"]);
    }

    #[test]
    fn test_extract_categories() {
        let schema = json!({
            "categories": ["herbs", "powders", "oils", "tablets"]
        });

        let categories = extract_categories(&schema).unwrap();
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn test_build_schema_from_json() {
        let json_schema = json!({
            "$id": "provenance-catalog",
            "title": "Provenance Catalog",
            "description": "Batch status and category vocabularies",
            "statuses": ["verified", "pending"],
            "categories": ["herbs"]
        });

        let schema = build_schema_from_json(json_schema).unwrap();
        assert_eq!(schema.schema_id, "provenance-catalog");
        assert_eq!(schema.title, "Provenance Catalog");
        assert_eq!(
            schema.description,
            Some("Batch status and category vocabularies".to_string())
        );
        assert_eq!(schema.statuses.len(), 2);
        assert_eq!(schema.categories, ["herbs"]);
        assert!(schema.json_schema.is_some());
    }

    #[test]
    fn test_missing_statuses() {
        let schema = json!({
            "categories": []
        });

        assert!(extract_statuses(&schema).is_err());
    }

    #[test]
    fn test_non_string_statuses() {
        let schema = json!({
            "statuses": [1, 2, 3]
        });

        assert!(extract_statuses(&schema).is_err());
    }
}
