use crate::models::{BatchData, ProvenanceSchema};
use crate::schema::build_schema_from_json;
use crate::schema_validation::validate_against_schema;
use crate::validation::{validate_dataset, validate_schema};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a dataset from a JSON file without validating it
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<BatchData, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let data: BatchData = serde_json::from_str(&contents)?;
    Ok(data)
}

/// Save a dataset to a JSON file with pretty printing
pub fn save_dataset<P: AsRef<Path>>(data: &BatchData, path: P) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a catalog schema from a JSON file
pub fn load_schema<P: AsRef<Path>>(path: P) -> Result<ProvenanceSchema, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let schema = build_schema_from_json(json)?;

    validate_schema(&schema).map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;

    Ok(schema)
}

/// Load a dataset together with an explicit catalog schema file and
/// validate it: first against the catalog's JSON Schema keywords when the
/// file carries any, then against the catalog vocabularies
pub fn load_dataset_with_schema<P: AsRef<Path>, Q: AsRef<Path>>(
    data_path: P,
    schema_path: Q,
) -> Result<(BatchData, ProvenanceSchema), Box<dyn Error>> {
    let schema = load_schema(schema_path)?;

    let contents = fs::read_to_string(data_path)?;
    let raw: serde_json::Value = serde_json::from_str(&contents)?;

    if let Some(json_schema) = schema.json_schema.as_ref().filter(|s| has_schema_keywords(s)) {
        validate_against_schema(json_schema, &raw)
            .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;
    }

    let data: BatchData = serde_json::from_value(raw)?;

    validate_dataset(&data, &schema)
        .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;

    Ok((data, schema))
}

/// Load a dataset and the catalog schema it references
/// The dataset's "schema" field is resolved relative to the dataset file
pub fn load_dataset_with_auto_schema<P: AsRef<Path>>(
    path: P,
) -> Result<(BatchData, ProvenanceSchema), Box<dyn Error>> {
    let path = path.as_ref();

    // Peek at the schema reference before full validation
    let data = load_dataset(path)?;
    let data_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let schema_path = data_dir.join(&data.schema);

    load_dataset_with_schema(path, schema_path)
}

fn has_schema_keywords(schema: &serde_json::Value) -> bool {
    schema.get("type").is_some() || schema.get("properties").is_some()
}
