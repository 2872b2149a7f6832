use colored::{ColoredString, Colorize};
use provstud_core::{parse_timestamp, Batch, CategoricalField, DateRange, QueryState, SortDirection, SortKey};

const PRODUCT_WIDTH: usize = 26;
const BATCH_ID_WIDTH: usize = 14;
const TOKEN_WIDTH: usize = 10;

/// Title line plus the "N of M batches" summary
pub fn print_header(headline: &str, shown: usize, total: usize) {
    println!("{}", headline.bold());
    println!("{} of {} batches\n", shown, total);
}

/// One-line recap of every active constraint
pub fn print_active_filters(query: &QueryState) {
    let mut parts = Vec::new();

    if !query.search.trim().is_empty() {
        parts.push(format!("search '{}'", query.search.trim()));
    }
    if let Some(status) = &query.status {
        parts.push(format!("status {}", status));
    }
    if let Some(category) = &query.category {
        parts.push(format!("category {}", category));
    }
    if query.date_range != DateRange::AllTime {
        parts.push(date_range_label(query.date_range).to_lowercase());
    }
    if let Some(spec) = query.sort {
        parts.push(format!("sorted by {}", sort_key_label(spec.key, spec.direction)));
    }

    println!("{} {}\n", "Filters:".bold(), parts.join(", "));
}

pub fn print_empty_state() {
    println!("{}", "No batches found".bold());
    println!("Try adjusting your search criteria or filters");
}

pub fn print_group_header(field: CategoricalField, name: &str, count: usize) {
    println!("{} ({})", format!("{}: {}", field, name).bold(), count);
}

/// Render batches as a fixed-width table with a colored status column
pub fn print_table(batches: &[Batch]) {
    println!(
        "{}",
        format!(
            "{:<product$} {:<batch$} {:<token$} {:<token$} {}",
            "PRODUCT",
            "BATCH ID",
            "STATUS",
            "CATEGORY",
            "LAST SCAN",
            product = PRODUCT_WIDTH,
            batch = BATCH_ID_WIDTH,
            token = TOKEN_WIDTH,
        )
        .dimmed()
    );

    for batch in batches {
        println!(
            "{:<product$} {:<batch$} {} {:<token$} {}",
            fit(&batch.product_name, PRODUCT_WIDTH),
            fit(&batch.batch_id, BATCH_ID_WIDTH),
            status_cell(batch.status.as_deref()),
            fit(batch.category.as_deref().unwrap_or("-"), TOKEN_WIDTH),
            format_last_scan(batch.last_scan.as_deref()),
            product = PRODUCT_WIDTH,
            batch = BATCH_ID_WIDTH,
            token = TOKEN_WIDTH,
        );
    }
    println!();
}

/// Status token padded first so the ANSI codes don't skew the column,
/// colored the way the portal badges are
fn status_cell(status: Option<&str>) -> ColoredString {
    let padded = format!("{:<width$}", status.unwrap_or("-"), width = TOKEN_WIDTH);

    match status {
        Some("verified") => padded.green(),
        Some("pending") => padded.yellow(),
        Some("failed") => padded.red(),
        Some("expired") => padded.dimmed(),
        _ => padded.normal(),
    }
}

fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }

    let truncated: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", truncated)
}

fn format_last_scan(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_string(),
        Some(raw) => match parse_timestamp(raw) {
            Some(ts) => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
            // unparseable values are still shown, verbatim
            None => raw.to_string(),
        },
    }
}

fn date_range_label(range: DateRange) -> &'static str {
    match range {
        DateRange::AllTime => "All Time",
        DateRange::Today => "Today",
        DateRange::Week => "This Week",
        DateRange::Month => "This Month",
        DateRange::Quarter => "This Quarter",
    }
}

fn sort_key_label(key: SortKey, direction: SortDirection) -> String {
    let name = match key {
        SortKey::ProductName => "Product Name",
        SortKey::BatchId => "Batch ID",
        SortKey::Status => "Status",
        SortKey::Category => "Category",
        SortKey::LastScan => "Last Scan",
    };
    let arrow = match direction {
        SortDirection::Ascending => "ascending",
        SortDirection::Descending => "descending",
    };
    format!("{} ({})", name, arrow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_leaves_short_text_alone() {
        assert_eq!(fit("Turmeric Powder", PRODUCT_WIDTH), "Turmeric Powder");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        let long = "An Extraordinarily Long Product Name For A Batch";
        let fitted = fit(long, PRODUCT_WIDTH);
        assert_eq!(fitted.chars().count(), PRODUCT_WIDTH);
        assert!(fitted.ends_with('…'));
    }

    #[test]
    fn test_format_last_scan() {
        assert_eq!(
            format_last_scan(Some("2025-01-05T14:30:00Z")),
            "2025-01-05 14:30 UTC"
        );
        assert_eq!(format_last_scan(Some("around noon")), "around noon");
        assert_eq!(format_last_scan(None), "-");
    }

    #[test]
    fn test_status_cell_is_padded_before_coloring() {
        colored::control::set_override(false);
        let cell = status_cell(Some("verified"));
        assert_eq!(cell.to_string(), format!("{:<width$}", "verified", width = TOKEN_WIDTH));
    }

    #[test]
    fn test_date_range_labels() {
        assert_eq!(date_range_label(DateRange::Week), "This Week");
        assert_eq!(date_range_label(DateRange::AllTime), "All Time");
    }
}
