use crate::dates::parse_timestamp;
use crate::models::{BatchData, ProvenanceSchema};
use regex::Regex;
use std::collections::HashSet;

/// Batch identifiers look like TUR_2025_001: a product prefix, a year and a
/// running number
const BATCH_ID_PATTERN: &str = r"^[A-Z]{2,4}_[0-9]{4}_[0-9]{3}$";

/// Validate a catalog schema
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_schema(schema: &ProvenanceSchema) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_token_list("statuses", &schema.statuses, &mut errors);
    validate_token_list("categories", &schema.categories, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_token_list(list_name: &str, tokens: &[String], errors: &mut Vec<String>) {
    if tokens.is_empty() {
        errors.push(format!("Catalog '{}' must have at least one value", list_name));
    }

    let mut seen = HashSet::new();
    for token in tokens {
        if token.trim().is_empty() {
            errors.push(format!("Catalog '{}' contains empty value", list_name));
        }
        if !seen.insert(token) {
            errors.push(format!("Catalog '{}' has duplicate value: '{}'", list_name, token));
        }
    }
}

/// Validate a dataset against its catalog schema
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_dataset(data: &BatchData, schema: &ProvenanceSchema) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let id_format = Regex::new(BATCH_ID_PATTERN).unwrap();
    let mut seen_ids = HashSet::new();

    for (idx, batch) in data.batches.iter().enumerate() {
        let batch_ref = format!("Batch #{} ('{}')", idx + 1, batch.batch_id);

        if batch.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", batch_ref));
        }

        if !seen_ids.insert(&batch.id) {
            errors.push(format!("{}: duplicate id '{}'", batch_ref, batch.id));
        }

        if batch.product_name.trim().is_empty() {
            errors.push(format!("{}: product name cannot be empty", batch_ref));
        }

        if batch.batch_id.trim().is_empty() {
            errors.push(format!("{}: batch id cannot be empty", batch_ref));
        } else if !id_format.is_match(&batch.batch_id) {
            errors.push(format!(
                "{}: batch id does not match the PREFIX_YEAR_NUMBER format",
                batch_ref
            ));
        }

        if let Some(status) = &batch.status {
            if !schema.statuses.contains(status) {
                errors.push(format!(
                    "{}: status '{}' is not in the catalog (allowed: {})",
                    batch_ref,
                    status,
                    schema.statuses.join(", ")
                ));
            }
        }

        if let Some(category) = &batch.category {
            if !schema.categories.contains(category) {
                errors.push(format!(
                    "{}: category '{}' is not in the catalog (allowed: {})",
                    batch_ref,
                    category,
                    schema.categories.join(", ")
                ));
            }
        }

        if let Some(last_scan) = &batch.last_scan {
            if parse_timestamp(last_scan).is_none() {
                errors.push(format!(
                    "{}: lastScan '{}' is not a valid timestamp",
                    batch_ref, last_scan
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
