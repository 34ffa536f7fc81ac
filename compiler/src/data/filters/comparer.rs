//! Value comparers
//!
//! Order two filter items so a selection can be collapsed to its extremes.
//! Items holding the NULL sentinel must be removed before comparing.

use std::cmp::Ordering;
use std::fmt;

use crate::data::error::FilterError;
use crate::utils::time::parse_with_format;

use super::types::FilterItem;

/// Ordering strategy for one value shape
pub trait ValueComparer: Send + Sync + fmt::Debug {
    /// Comparer name (for logging)
    fn name(&self) -> &'static str;

    /// Compare two raw literals
    fn compare_values(&self, a: &str, b: &str) -> Result<Ordering, FilterError>;

    /// Compare the side of two items the filter compiles against
    fn compare(
        &self,
        a: &FilterItem,
        b: &FilterItem,
        is_id_filter: bool,
    ) -> Result<Ordering, FilterError> {
        self.compare_values(a.value_for(is_id_filter), b.value_for(is_id_filter))
    }
}

/// Chronological order using a chrono format string
#[derive(Debug, Clone)]
pub struct DateComparer {
    format: String,
}

impl DateComparer {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn parse(&self, value: &str) -> Result<chrono::NaiveDateTime, FilterError> {
        parse_with_format(value, &self.format).ok_or_else(|| {
            FilterError::invalid_literal(value, &format!("date for format '{}'", self.format))
        })
    }
}

impl ValueComparer for DateComparer {
    fn name(&self) -> &'static str {
        "date"
    }

    fn compare_values(&self, a: &str, b: &str) -> Result<Ordering, FilterError> {
        Ok(self.parse(a)?.cmp(&self.parse(b)?))
    }
}

/// Numeric order over decimal literals
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericComparer;

impl NumericComparer {
    fn parse(value: &str) -> Result<f64, FilterError> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| FilterError::invalid_literal(value, "number"))
    }
}

impl ValueComparer for NumericComparer {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn compare_values(&self, a: &str, b: &str) -> Result<Ordering, FilterError> {
        Ok(Self::parse(a)?.total_cmp(&Self::parse(b)?))
    }
}

/// Plain string order
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalComparer;

impl ValueComparer for OrdinalComparer {
    fn name(&self) -> &'static str {
        "ordinal"
    }

    fn compare_values(&self, a: &str, b: &str) -> Result<Ordering, FilterError> {
        Ok(a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_comparer_orders_chronologically() {
        let comparer = DateComparer::new("%d.%m.%Y");
        assert_eq!(
            comparer.compare_values("02.01.2024", "01.02.2024").unwrap(),
            Ordering::Less
        );
        assert_eq!(
            comparer.compare_values("01.01.2024", "01.01.2024").unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn test_date_comparer_rejects_unparseable_literal() {
        let comparer = DateComparer::new("%Y-%m-%d");
        let err = comparer
            .compare_values("2024-01-01", "yesterday")
            .unwrap_err();

        assert!(matches!(err, FilterError::InvalidArgument(_)));
        assert!(err.to_string().contains("'yesterday'"));
    }

    #[test]
    fn test_date_comparer_uses_selected_side() {
        let comparer = DateComparer::new("%Y-%m-%d");
        let a = FilterItem::new("1", "2024-05-01", true, false);
        let b = FilterItem::new("2", "2023-05-01", true, false);
        assert_eq!(comparer.compare(&a, &b, false).unwrap(), Ordering::Greater);
        // ID side is not a date
        assert!(comparer.compare(&a, &b, true).is_err());
    }

    #[test]
    fn test_numeric_comparer_is_not_lexicographic() {
        let comparer = NumericComparer;
        assert_eq!(comparer.compare_values("9", "10").unwrap(), Ordering::Less);
        assert_eq!(
            comparer.compare_values("-1.5", "-2").unwrap(),
            Ordering::Greater
        );
    }

    #[test]
    fn test_numeric_comparer_rejects_text() {
        let err = NumericComparer.compare_values("ten", "10").unwrap_err();
        assert_eq!(err, FilterError::invalid_literal("ten", "number"));
    }

    #[test]
    fn test_numeric_comparer_rejects_nan() {
        assert!(NumericComparer.compare_values("NaN", "1").is_err());
    }

    #[test]
    fn test_ordinal_comparer() {
        let comparer = OrdinalComparer;
        assert_eq!(comparer.compare_values("9", "10").unwrap(), Ordering::Greater);
        assert_eq!(comparer.compare_values("a", "b").unwrap(), Ordering::Less);
    }
}
