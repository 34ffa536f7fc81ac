//! Condition-value builders
//!
//! Turn the selected, non-null items of one filter into the literal part of
//! a predicate: a list for IN, a single value or min/max pair for ranges, a
//! keyword for IS.

use crate::data::error::FilterError;
use crate::utils::sql::inline_literal;

use super::comparer::ValueComparer;
use super::types::FilterItem;

/// Which value builder a condition needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueBuilderKind {
    In,
    Between,
    Is,
}

/// Comma separated literal list for IN conditions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListValues {
    literals: Vec<String>,
}

impl ListValues {
    pub fn collect(items: &[&FilterItem], is_id_filter: bool) -> Self {
        Self {
            literals: items
                .iter()
                .map(|item| inline_literal(item.value_for(is_id_filter), is_id_filter))
                .collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.literals.len()
    }

    pub fn render(&self) -> String {
        self.literals.join(",")
    }
}

/// Extremes of a selection for range conditions
///
/// Only the count and the extremes are kept; once two or more values are
/// present the values in between do not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeValues {
    count: usize,
    min: Option<String>,
    max: Option<String>,
}

impl RangeValues {
    /// Find min and max in one pass; comparer failures propagate
    pub fn collect(
        items: &[&FilterItem],
        comparer: &dyn ValueComparer,
        is_id_filter: bool,
    ) -> Result<Self, FilterError> {
        let Some((first, rest)) = items.split_first() else {
            return Ok(Self::default());
        };

        let mut min = *first;
        let mut max = *first;
        for &item in rest {
            if comparer.compare(item, min, is_id_filter)?.is_lt() {
                min = item;
            }
            if comparer.compare(item, max, is_id_filter)?.is_gt() {
                max = item;
            }
        }

        tracing::trace!(
            comparer = comparer.name(),
            count = items.len(),
            min = min.value_for(is_id_filter),
            max = max.value_for(is_id_filter),
            "Collected range values"
        );

        Ok(Self {
            count: items.len(),
            min: Some(inline_literal(min.value_for(is_id_filter), is_id_filter)),
            max: Some(inline_literal(max.value_for(is_id_filter), is_id_filter)),
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    /// "" for none, the value for one, "min AND max" for more
    pub fn render(&self) -> String {
        match (self.count, &self.min, &self.max) {
            (0, _, _) => String::new(),
            (1, Some(value), _) => value.clone(),
            (_, Some(min), Some(max)) => format!("{} AND {}", min, max),
            _ => String::new(),
        }
    }
}

/// Keyword operand of an IS condition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullCheck {
    #[default]
    Null,
    NotNull,
}

impl NullCheck {
    pub fn render(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::NotNull => "NOT NULL",
        }
    }
}

/// Built operand for one condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValues {
    In(ListValues),
    Between(RangeValues),
    Is(NullCheck),
}

impl ConditionValues {
    pub fn kind(&self) -> ValueBuilderKind {
        match self {
            Self::In(_) => ValueBuilderKind::In,
            Self::Between(_) => ValueBuilderKind::Between,
            Self::Is(_) => ValueBuilderKind::Is,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::In(values) => values.count(),
            Self::Between(values) => values.count(),
            Self::Is(_) => 1,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::In(values) => values.render(),
            Self::Between(values) => values.render(),
            Self::Is(check) => check.render().to_string(),
        }
    }
}
