// Public modules
pub mod dates;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod schema;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use dates::{in_range, parse_timestamp};
pub use filtering::{apply_filters, apply_query, has_constraints, matches_query, matches_search};
pub use grouping::{group_batches_by, sorted_group_names};
pub use io::{
    load_dataset, load_dataset_with_auto_schema, load_dataset_with_schema, load_schema,
    save_dataset,
};
pub use models::{
    Batch, BatchData, CategoricalField, DateRange, ProvenanceSchema, QueryState, SortDirection,
    SortKey, SortSpec, TextField,
};
pub use schema::{build_schema_from_json, extract_categories, extract_statuses};
pub use schema_validation::validate_against_schema;
pub use sorting::{normalize_text, sort_batches};
pub use validation::{validate_dataset, validate_schema};
