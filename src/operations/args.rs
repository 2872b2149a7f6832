use provstud_core::{CategoricalField, DateRange, SortDirection, SortKey, SortSpec};

/// Validation error with field and message
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parse a categorical filter argument
/// "all" (in any case) leaves the axis unconstrained; anything else must be
/// one of the catalog's tokens
pub fn parse_categorical_filter(
    axis: CategoricalField,
    raw: &str,
    allowed: &[String],
) -> Result<Option<String>, ValidationError> {
    let raw = raw.trim();

    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if !allowed.iter().any(|token| token == raw) {
        return Err(ValidationError {
            field: axis.to_string(),
            message: format!("'{}' is not a catalog value (allowed: {})", raw, allowed.join(", ")),
        });
    }

    Ok(Some(raw.to_string()))
}

/// Parse a date range argument
pub fn parse_date_range(raw: &str) -> Result<DateRange, ValidationError> {
    raw.trim().parse().map_err(|message| ValidationError {
        field: "date".to_string(),
        message,
    })
}

/// Parse the sort column and direction arguments into a sort spec
pub fn parse_sort(
    field: Option<&str>,
    descending: bool,
) -> Result<Option<SortSpec>, ValidationError> {
    let field = match field {
        Some(field) => field,
        None => return Ok(None),
    };

    let key: SortKey = field.trim().parse().map_err(|message| ValidationError {
        field: "sort".to_string(),
        message,
    })?;

    let direction = if descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };

    Ok(Some(SortSpec { key, direction }))
}

/// Parse a group-by argument
pub fn parse_group_field(raw: &str) -> Result<CategoricalField, ValidationError> {
    raw.trim().parse().map_err(|message| ValidationError {
        field: "group-by".to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses() -> Vec<String> {
        ["verified", "pending", "failed", "expired"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_all_leaves_axis_unconstrained() {
        let allowed = statuses();
        assert_eq!(
            parse_categorical_filter(CategoricalField::Status, "all", &allowed).unwrap(),
            None
        );
        assert_eq!(
            parse_categorical_filter(CategoricalField::Status, "All", &allowed).unwrap(),
            None
        );
        assert_eq!(
            parse_categorical_filter(CategoricalField::Status, "", &allowed).unwrap(),
            None
        );
    }

    #[test]
    fn test_catalog_token_is_accepted() {
        let allowed = statuses();
        assert_eq!(
            parse_categorical_filter(CategoricalField::Status, "verified", &allowed).unwrap(),
            Some("verified".to_string())
        );
    }

    #[test]
    fn test_unknown_token_is_rejected_with_allowed_list() {
        let allowed = statuses();
        let err =
            parse_categorical_filter(CategoricalField::Status, "recalled", &allowed).unwrap_err();
        assert_eq!(err.field, "status");
        assert!(err.message.contains("verified, pending"));
    }

    #[test]
    fn test_token_match_is_case_sensitive() {
        let allowed = statuses();
        assert!(parse_categorical_filter(CategoricalField::Status, "Verified", &allowed).is_err());
    }

    #[test]
    fn test_parse_date_range() {
        assert_eq!(parse_date_range("week").unwrap(), DateRange::Week);
        assert_eq!(parse_date_range(" all ").unwrap(), DateRange::AllTime);
        assert_eq!(parse_date_range("fortnight").unwrap_err().field, "date");
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort(None, false).unwrap(), None);
        assert_eq!(
            parse_sort(Some("lastScan"), true).unwrap(),
            Some(SortSpec::descending(SortKey::LastScan))
        );
        assert_eq!(
            parse_sort(Some("name"), false).unwrap(),
            Some(SortSpec::ascending(SortKey::ProductName))
        );
        assert!(parse_sort(Some("compliance"), false).is_err());
    }

    #[test]
    fn test_parse_group_field() {
        assert_eq!(parse_group_field("status").unwrap(), CategoricalField::Status);
        assert_eq!(parse_group_field("category").unwrap(), CategoricalField::Category);
        assert!(parse_group_field("manufacturer").is_err());
    }
}
