use std::path::PathBuf;
use std::process;

use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use provstud_core::{group_batches_by, has_constraints, sorted_group_names, CategoricalField};

mod errors;
mod operations;
mod output;
mod state;

use errors::map_file_load_error;
use operations::{parse_categorical_filter, parse_date_range, parse_group_field, parse_sort};
use state::AppState;

/// Provenance Studio - query and display product batch provenance records
///
/// Examples:
///   # Display all batches
///   provstud batches.json
///
///   # Search product names and batch ids
///   provstud batches.json --search ash
///
///   # Filter by status and category
///   provstud batches.json --status verified --category powders
///
///   # Batches scanned this week, latest first
///   provstud batches.json --date week --sort lastScan --desc
///
///   # Group results by status
///   provstud batches.json --group-by status
#[derive(Parser, Debug)]
#[command(name = "provstud")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - The search term matches case-insensitively against product names and batch ids\n  \
    - Status, category and date constraints combine with AND\n  \
    - 'all' (the default) leaves an axis unconstrained\n\n\
Date Ranges:\n  \
    - today: scanned on the current calendar day (UTC)\n  \
    - week: scanned within the trailing 7 days\n  \
    - month/quarter: scanned in the current calendar month/quarter\n\n\
Sorting:\n  \
    - name, batchId, status, category: alphabetical\n  \
    - lastScan: chronological\n  \
    - batches missing the sort field are listed last")]
struct Cli {
    /// Path to the batch dataset JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Catalog schema file (defaults to the schema the dataset references)
    #[arg(long, value_name = "FILE")]
    schema: Option<PathBuf>,

    /// Free-text search term
    #[arg(short, long, value_name = "TERM")]
    search: Option<String>,

    /// Status filter: 'all' or a catalog status token
    #[arg(long, value_name = "STATUS", default_value = "all")]
    status: String,

    /// Category filter: 'all' or a catalog category token
    #[arg(long, value_name = "CATEGORY", default_value = "all")]
    category: String,

    /// Date range: all, today, week, month or quarter
    #[arg(short, long, value_name = "RANGE", default_value = "all")]
    date: String,

    /// Sort column: name, batchId, status, category or lastScan
    #[arg(long, value_name = "FIELD")]
    sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Group output by a categorical field (status or category)
    #[arg(short = 'G', long = "group-by", value_name = "FIELD")]
    group_by: Option<String>,

    /// Validate the dataset against its catalog and exit
    #[arg(long)]
    validate_only: bool,

    /// Emit matching batches as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut app = AppState::new();
    let load_result = match &cli.schema {
        Some(schema_path) => app.load_with_schema(cli.file.clone(), schema_path.clone()),
        None => app.load_from_file(cli.file.clone()),
    };

    if let Err(e) = load_result {
        let (title, message, details) = map_file_load_error(&*e, &cli.file);
        eprintln!("{}", title.red().bold());
        eprintln!("{}", message);
        eprintln!("\n{}", details);
        process::exit(1);
    }

    if cli.validate_only {
        // Loading already ran schema and catalog validation
        println!(
            "{} {} batches, catalog '{}'",
            "Dataset is valid:".green().bold(),
            app.batches().len(),
            app.schema.as_ref().map(|s| s.title.as_str()).unwrap_or("unknown")
        );
        return;
    }

    let group_by = match cli.group_by.as_deref().map(parse_group_field).transpose() {
        Ok(field) => field,
        Err(e) => {
            eprintln!("{} {}", "Invalid query:".red().bold(), e);
            process::exit(2);
        }
    };

    if let Err(e) = configure_query(&mut app, &cli) {
        eprintln!("{} {}", "Invalid query:".red().bold(), e);
        process::exit(2);
    }

    let now = Utc::now();
    let visible = app.visible(now);

    if cli.json {
        match serde_json::to_string_pretty(&visible) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{} {}", "Failed to encode results:".red().bold(), e);
                process::exit(1);
            }
        }
        return;
    }

    output::print_header(&app.headline(), visible.len(), app.batches().len());
    if has_constraints(&app.query) || app.query.sort.is_some() {
        output::print_active_filters(&app.query);
    }

    if visible.is_empty() {
        output::print_empty_state();
        return;
    }

    match group_by {
        Some(field) => {
            let groups = group_batches_by(&visible, field);
            for name in sorted_group_names(&groups) {
                if let Some(group) = groups.get(&name) {
                    output::print_group_header(field, &name, group.len());
                    output::print_table(group);
                }
            }
        }
        None => output::print_table(&visible),
    }
}

/// Translate CLI arguments into the application's query state
fn configure_query(app: &mut AppState, cli: &Cli) -> Result<(), operations::ValidationError> {
    let schema = app.schema.clone();
    let (statuses, categories) = match &schema {
        Some(s) => (s.statuses.as_slice(), s.categories.as_slice()),
        None => (&[][..], &[][..]),
    };

    app.query.search = cli.search.clone().unwrap_or_default();
    app.query.status = parse_categorical_filter(CategoricalField::Status, &cli.status, statuses)?;
    app.query.category =
        parse_categorical_filter(CategoricalField::Category, &cli.category, categories)?;
    app.query.date_range = parse_date_range(&cli.date)?;
    app.query.sort = parse_sort(cli.sort.as_deref(), cli.desc)?;

    Ok(())
}
