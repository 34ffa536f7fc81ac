//! Condition nodes
//!
//! Each node renders one SQL predicate fragment, or an empty string when it
//! has nothing usable to compare against. Nodes are plain values: a clone is
//! independent of the original and reconfiguring one never affects the other.

use std::fmt;

use crate::utils::sql::qualify_column;

use super::values::{ListValues, NullCheck, RangeValues};

/// `[alias.]field IN (values)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InCondition {
    field: String,
    alias: String,
    values: ListValues,
}

impl InCondition {
    pub fn new(field: impl Into<String>, values: ListValues, alias: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            alias: alias.into(),
            values,
        }
    }

    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    pub fn set_values(&mut self, values: ListValues) {
        self.values = values;
    }

    pub fn is_valid(&self) -> bool {
        !self.values.render().trim().is_empty()
    }

    pub fn invalid_message(&self) -> Option<String> {
        (!self.is_valid()).then(|| {
            format!(
                "No values provided for evaluation. Values are '{}'.",
                self.values.render()
            )
        })
    }

    pub fn render(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }
        format!(
            "{} IN ({})",
            qualify_column(&self.alias, &self.field),
            self.values.render()
        )
    }
}

/// `[alias.]field IS value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsCondition {
    field: String,
    alias: String,
    value: String,
}

impl IsCondition {
    pub fn new(
        field: impl Into<String>,
        value: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            alias: alias.into(),
            value: value.into(),
        }
    }

    /// `field IS NULL` / `field IS NOT NULL`
    pub fn null_check(
        field: impl Into<String>,
        check: NullCheck,
        alias: impl Into<String>,
    ) -> Self {
        Self::new(field, check.render(), alias)
    }

    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_valid(&self) -> bool {
        !self.value.trim().is_empty()
    }

    pub fn invalid_message(&self) -> Option<String> {
        (!self.is_valid()).then(|| {
            format!(
                "No value provided for evaluation. Value is '{}'.",
                self.value
            )
        })
    }

    pub fn render(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }
        format!("{} IS {}", qualify_column(&self.alias, &self.field), self.value)
    }
}

/// `field BETWEEN min AND max`, or a one-sided comparison for one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetweenCondition {
    field: String,
    alias: String,
    values: RangeValues,
    greater_or_equal: bool,
}

impl BetweenCondition {
    pub fn new(field: impl Into<String>, values: RangeValues, alias: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            alias: alias.into(),
            values,
            greater_or_equal: true,
        }
    }

    pub fn with_greater_or_equal(mut self, greater_or_equal: bool) -> Self {
        self.greater_or_equal = greater_or_equal;
        self
    }

    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    pub fn set_values(&mut self, values: RangeValues) {
        self.values = values;
    }

    pub fn set_greater_or_equal(&mut self, greater_or_equal: bool) {
        self.greater_or_equal = greater_or_equal;
    }

    pub fn is_valid(&self) -> bool {
        self.values.count() > 0
    }

    pub fn invalid_message(&self) -> Option<String> {
        (!self.is_valid()).then(|| "No values provided for range evaluation.".to_string())
    }

    pub fn render(&self) -> String {
        let column = qualify_column(&self.alias, &self.field);
        match self.values.count() {
            0 => String::new(),
            1 => {
                let op = if self.greater_or_equal { ">=" } else { "<=" };
                format!("{} {} {}", column, op, self.values.render())
            }
            _ => format!("{} BETWEEN {}", column, self.values.render()),
        }
    }
}

/// Any condition node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    In(InCondition),
    Is(IsCondition),
    Between(BetweenCondition),
}

impl Condition {
    pub fn is_valid(&self) -> bool {
        match self {
            Self::In(c) => c.is_valid(),
            Self::Is(c) => c.is_valid(),
            Self::Between(c) => c.is_valid(),
        }
    }

    /// Reason the condition renders empty, `None` when valid
    pub fn invalid_message(&self) -> Option<String> {
        match self {
            Self::In(c) => c.invalid_message(),
            Self::Is(c) => c.invalid_message(),
            Self::Between(c) => c.invalid_message(),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::In(c) => c.render(),
            Self::Is(c) => c.render(),
            Self::Between(c) => c.render(),
        }
    }

    pub fn set_alias(&mut self, alias: &str) {
        match self {
            Self::In(c) => c.set_alias(alias),
            Self::Is(c) => c.set_alias(alias),
            Self::Between(c) => c.set_alias(alias),
        }
    }
}

impl From<InCondition> for Condition {
    fn from(c: InCondition) -> Self {
        Self::In(c)
    }
}

impl From<IsCondition> for Condition {
    fn from(c: IsCondition) -> Self {
        Self::Is(c)
    }
}

impl From<BetweenCondition> for Condition {
    fn from(c: BetweenCondition) -> Self {
        Self::Between(c)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
