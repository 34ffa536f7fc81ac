//! Filter model
//!
//! Value objects describing one filterable column and its selectable values.
//! Built once by the caller and read by the compiler, never mutated.

use serde::{Deserialize, Serialize};

use crate::data::error::FilterError;

/// Item value standing in for SQL NULL
pub const NULL_SENTINEL: &str = "-";

/// One selectable value of a filter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterItem {
    filter_id: String,
    filter_val: String,
    #[serde(default)]
    selected: bool,
    #[serde(default)]
    disabled: bool,
}

impl FilterItem {
    pub fn new(
        filter_id: impl Into<String>,
        filter_val: impl Into<String>,
        selected: bool,
        disabled: bool,
    ) -> Self {
        Self {
            filter_id: filter_id.into(),
            filter_val: filter_val.into(),
            selected,
            disabled,
        }
    }

    /// Selected, enabled item where id and value are the same literal
    pub fn selected(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), value, true, false)
    }

    pub fn filter_id(&self) -> &str {
        &self.filter_id
    }

    pub fn filter_val(&self) -> &str {
        &self.filter_val
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disabled items never contribute, even when marked selected
    pub fn is_active(&self) -> bool {
        self.selected && !self.disabled
    }

    /// The side of the item a filter compiles against
    pub fn value_for(&self, is_id_filter: bool) -> &str {
        if is_id_filter {
            &self.filter_id
        } else {
            &self.filter_val
        }
    }

    pub fn is_null_for(&self, is_id_filter: bool) -> bool {
        self.value_for(is_id_filter) == NULL_SENTINEL
    }
}

/// Display and column name pair
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterName {
    display_name: String,
    field_name: String,
}

impl FilterName {
    pub fn new(display_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            field_name: field_name.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

/// Whether selected values are listed or collapsed to a range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValueKind {
    #[default]
    Discrete,
    Range,
}

/// Declared shape of the values, used to order them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Ordinal,
    Numeric,
    Date,
}

/// Comparison used when a range filter has a single value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleBound {
    /// `field >= value`
    #[default]
    AtLeast,
    /// `field <= value`
    AtMost,
}

impl SingleBound {
    pub fn is_greater_or_equal(&self) -> bool {
        matches!(self, Self::AtLeast)
    }
}

/// A named, user-selectable predicate over one column
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Filter {
    #[serde(default)]
    filter_id_name: Option<FilterName>,
    #[serde(default)]
    filter_name: Option<FilterName>,
    #[serde(default)]
    items: Vec<FilterItem>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    kind: FilterValueKind,
    #[serde(default)]
    value_type: ValueType,
    #[serde(default)]
    single_bound: SingleBound,
}

impl Filter {
    /// Filter compiled against the ID side of its items
    pub fn by_id(name: FilterName, items: Vec<FilterItem>) -> Self {
        Self::from_parts(Some(name), None, items)
    }

    /// Filter compiled against the value side of its items
    pub fn by_value(name: FilterName, items: Vec<FilterItem>) -> Self {
        Self::from_parts(None, Some(name), items)
    }

    /// Raw constructor; `validate()` rejects both or neither name
    pub fn from_parts(
        filter_id_name: Option<FilterName>,
        filter_name: Option<FilterName>,
        items: Vec<FilterItem>,
    ) -> Self {
        Self {
            filter_id_name,
            filter_name,
            items,
            required: false,
            kind: FilterValueKind::default(),
            value_type: ValueType::default(),
            single_bound: SingleBound::default(),
        }
    }

    pub fn with_kind(mut self, kind: FilterValueKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn with_single_bound(mut self, single_bound: SingleBound) -> Self {
        self.single_bound = single_bound;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn filter_id_name(&self) -> Option<&FilterName> {
        self.filter_id_name.as_ref()
    }

    pub fn filter_name(&self) -> Option<&FilterName> {
        self.filter_name.as_ref()
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> FilterValueKind {
        self.kind
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn single_bound(&self) -> SingleBound {
        self.single_bound
    }

    pub fn is_id_filter(&self) -> bool {
        self.filter_id_name.is_some()
    }

    /// The name the filter compiles against
    pub fn column(&self) -> Result<&FilterName, FilterError> {
        match (&self.filter_id_name, &self.filter_name) {
            (Some(id_name), None) => Ok(id_name),
            (None, Some(name)) => Ok(name),
            _ => Err(FilterError::ambiguous_column(self.display_name())),
        }
    }

    /// Column name used in generated SQL
    pub fn field_name(&self) -> Result<&str, FilterError> {
        self.column().map(FilterName::field_name)
    }

    pub fn display_name(&self) -> &str {
        self.filter_id_name
            .as_ref()
            .or(self.filter_name.as_ref())
            .map(FilterName::display_name)
            .unwrap_or("<unnamed>")
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        self.column().map(|_| ())
    }

    /// Selected, enabled items
    pub fn active_items(&self) -> impl Iterator<Item = &FilterItem> {
        self.items.iter().filter(|item| item.is_active())
    }

    pub fn has_active_items(&self) -> bool {
        self.active_items().next().is_some()
    }
}
