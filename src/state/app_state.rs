use chrono::{DateTime, Utc};
use provstud_core::*;
use std::path::PathBuf;

/// Application state - the loaded dataset plus the mutable query
///
/// The query engine itself is pure; this struct owns the query the user is
/// editing and re-projects the visible batches from it on demand.
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded catalog schema (status/category vocabularies)
    pub schema: Option<ProvenanceSchema>,
    /// Currently loaded dataset
    pub data: Option<BatchData>,
    /// Path to current dataset file
    pub current_file: Option<PathBuf>,
    /// Path to current schema file (for reference)
    pub schema_file: Option<PathBuf>,
    /// Active query
    pub query: QueryState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            schema: None,
            data: None,
            current_file: None,
            schema_file: None,
            query: QueryState::default(),
        }
    }

    /// Load a dataset file with the catalog schema it references
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let (data, schema) = load_dataset_with_auto_schema(&path)?;

        // Reconstruct the schema file path the dataset pointed at
        let data_dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        self.schema_file = Some(data_dir.join(&data.schema));

        self.data = Some(data);
        self.schema = Some(schema);
        self.current_file = Some(path);
        self.query = QueryState::default();

        Ok(())
    }

    /// Load a dataset file with an explicitly chosen catalog schema
    pub fn load_with_schema(
        &mut self,
        path: PathBuf,
        schema_path: PathBuf,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (data, schema) = load_dataset_with_schema(&path, &schema_path)?;

        self.data = Some(data);
        self.schema = Some(schema);
        self.current_file = Some(path);
        self.schema_file = Some(schema_path);
        self.query = QueryState::default();

        Ok(())
    }

    /// All loaded batches, in dataset order
    pub fn batches(&self) -> &[Batch] {
        self.data.as_ref().map(|d| d.batches.as_slice()).unwrap_or(&[])
    }

    /// Project the batches visible under the active query at `now`
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<Batch> {
        apply_query(self.batches(), &self.query, now)
    }

    /// Column-header click semantics: selecting a new column sorts it
    /// ascending; selecting the current column flips the direction
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.query.sort = Some(match self.query.sort {
            Some(spec) if spec.key == key && spec.direction == SortDirection::Ascending => {
                SortSpec::descending(key)
            }
            _ => SortSpec::ascending(key),
        });
    }

    /// Title line with the loaded file name
    pub fn headline(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        format!("Provenance Studio - {}", file_name)
    }
}
