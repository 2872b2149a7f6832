use crate::models::{Batch, CategoricalField};
use std::collections::HashMap;

/// Group batches by a categorical field
/// Batches that do not carry the field go to the "_unspecified_" group
pub fn group_batches_by(batches: &[Batch], field: CategoricalField) -> HashMap<String, Vec<Batch>> {
    let mut groups: HashMap<String, Vec<Batch>> = HashMap::new();

    for batch in batches {
        let key = batch
            .categorical_value(field)
            .unwrap_or("_unspecified_")
            .to_string();
        groups.entry(key).or_default().push(batch.clone());
    }

    groups
}

/// Get sorted group names from a grouped batches map
pub fn sorted_group_names(groups: &HashMap<String, Vec<Batch>>) -> Vec<String> {
    let mut group_names: Vec<String> = groups.keys().cloned().collect();
    group_names.sort();
    group_names
}
