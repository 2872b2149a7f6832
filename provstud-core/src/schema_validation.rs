use serde_json::Value;

/// Validate a dataset document against the JSON Schema keywords of the
/// catalog file. Collects every violation, each tagged with the instance
/// path it occurred at. Returns Ok(()) when the document conforms.
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset_schema() -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "schema": {"type": "string"},
                "batches": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "string"},
                            "batchId": {"type": "string"},
                            "productName": {"type": "string"},
                            "status": {
                                "type": "string",
                                "enum": ["verified", "pending", "failed", "expired"]
                            }
                        },
                        "required": ["id", "batchId", "productName"]
                    }
                }
            },
            "required": ["schema", "batches"]
        })
    }

    #[test]
    fn test_conforming_dataset_passes() {
        let data = json!({
            "schema": "schema.json",
            "batches": [{
                "id": "1",
                "batchId": "TUR_2025_001",
                "productName": "Turmeric Powder",
                "status": "verified"
            }]
        });

        assert!(validate_against_schema(&dataset_schema(), &data).is_ok());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let data = json!({
            "schema": "schema.json",
            "batches": [{
                "id": "1",
                "batchId": "TUR_2025_001"
            }]
        });

        let errors = validate_against_schema(&dataset_schema(), &data).unwrap_err();
        assert!(!errors.is_empty());
        assert!(errors[0].contains("/batches/0"));
    }

    #[test]
    fn test_unknown_status_token_fails() {
        let data = json!({
            "schema": "schema.json",
            "batches": [{
                "id": "1",
                "batchId": "TUR_2025_001",
                "productName": "Turmeric Powder",
                "status": "recalled"
            }]
        });

        assert!(validate_against_schema(&dataset_schema(), &data).is_err());
    }

    #[test]
    fn test_all_violations_are_collected() {
        let data = json!({
            "schema": "schema.json",
            "batches": [
                {"id": "1"},
                {"id": "2"}
            ]
        });

        let errors = validate_against_schema(&dataset_schema(), &data).unwrap_err();
        // both incomplete batches are reported, not just the first
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_error_at_document_root() {
        let errors = validate_against_schema(&dataset_schema(), &json!([])).unwrap_err();
        assert!(errors[0].contains("at root"));
    }
}
