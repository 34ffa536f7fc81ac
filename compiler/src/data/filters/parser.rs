//! Filter parsing
//!
//! Parses JSON filter definitions into Filter structs with validation.

use crate::data::error::FilterError;

use super::types::Filter;

/// Maximum size of filter JSON in bytes (64KB)
pub const MAX_FILTER_JSON_SIZE: usize = 64 * 1024;

/// Maximum number of filters in one clause
pub const MAX_FILTERS: usize = 50;

/// Parse a JSON array of filters
///
/// Checks the payload size, deserializes, then validates every filter.
pub fn parse_filters(json_str: &str) -> Result<Vec<Filter>, FilterError> {
    if json_str.len() > MAX_FILTER_JSON_SIZE {
        return Err(FilterError::FilterJsonTooLarge {
            max_bytes: MAX_FILTER_JSON_SIZE,
        });
    }

    let filters: Vec<Filter> = serde_json::from_str(json_str)
        .map_err(|e| FilterError::InvalidFilterJson(e.to_string()))?;

    if filters.len() > MAX_FILTERS {
        return Err(FilterError::TooManyFilters {
            max: MAX_FILTERS,
            actual: filters.len(),
        });
    }

    for filter in &filters {
        filter.validate()?;
    }

    tracing::debug!(count = filters.len(), "Parsed filters");
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::types::FilterValueKind;

    #[test]
    fn parse_filters_valid_json() {
        let json = r#"[
            {
                "filter_id_name": { "display_name": "Region", "field_name": "RegionId" },
                "items": [
                    { "filter_id": "1", "filter_val": "North", "selected": true },
                    { "filter_id": "2", "filter_val": "South" }
                ]
            }
        ]"#;
        let filters = parse_filters(json).unwrap();
        assert_eq!(filters.len(), 1);
        assert!(filters[0].is_id_filter());
        assert_eq!(filters[0].items().len(), 2);
        assert!(!filters[0].items()[1].is_selected());
    }

    #[test]
    fn parse_filters_multiple() {
        let json = r#"[
            { "filter_name": { "display_name": "City", "field_name": "City" } },
            {
                "filter_name": { "display_name": "Amount", "field_name": "Amount" },
                "kind": "range",
                "value_type": "numeric",
                "required": true
            }
        ]"#;
        let filters = parse_filters(json).unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[1].kind(), FilterValueKind::Range);
        assert!(filters[1].is_required());
    }

    #[test]
    fn parse_filters_empty_array() {
        assert!(parse_filters("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_filters_invalid_json() {
        let result = parse_filters("not valid json");
        assert!(matches!(result, Err(FilterError::InvalidFilterJson(_))));
    }

    #[test]
    fn parse_filters_unknown_kind() {
        let json = r#"[{
            "filter_name": { "display_name": "A", "field_name": "A" },
            "kind": "fuzzy"
        }]"#;
        assert!(matches!(
            parse_filters(json),
            Err(FilterError::InvalidFilterJson(_))
        ));
    }

    #[test]
    fn parse_filters_ambiguous_column() {
        let json = r#"[
            {
                "filter_id_name": { "display_name": "A", "field_name": "AId" },
                "filter_name": { "display_name": "A", "field_name": "AName" }
            }
        ]"#;
        assert!(matches!(
            parse_filters(json),
            Err(FilterError::AmbiguousColumn { .. })
        ));
    }

    #[test]
    fn parse_filters_too_large() {
        let json = " ".repeat(MAX_FILTER_JSON_SIZE + 1);
        assert_eq!(
            parse_filters(&json).unwrap_err(),
            FilterError::FilterJsonTooLarge {
                max_bytes: MAX_FILTER_JSON_SIZE
            }
        );
    }

    #[test]
    fn parse_filters_too_many() {
        let one = r#"{ "filter_name": { "display_name": "A", "field_name": "A" } }"#;
        let json = format!("[{}]", vec![one; MAX_FILTERS + 1].join(","));
        assert_eq!(
            parse_filters(&json).unwrap_err(),
            FilterError::TooManyFilters {
                max: MAX_FILTERS,
                actual: MAX_FILTERS + 1
            }
        );
    }
}
