//! Filter list to WHERE clause

use crate::data::error::FilterError;
use crate::utils::time::DEFAULT_DATE_FORMAT;

use super::clause::{WhereClauseBuilder, WhereClauseCommand};
use super::factory;
use super::organizer::OrganizerKind;
use super::types::Filter;

/// Settings for one compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Section registration policy
    pub mode: OrganizerKind,
    /// Table alias prefixed to every column, empty for none
    pub table_alias: String,
    /// Field name of the filter the user changed last (global mode only)
    pub last_selected_field_name: Option<String>,
    /// chrono format for date filter literals
    pub date_format: String,
    /// OR the last selected filter with the whole clause (global mode only)
    pub duplicate_last_selected: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            mode: OrganizerKind::Default,
            table_alias: String::new(),
            last_selected_field_name: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            duplicate_last_selected: true,
        }
    }
}

impl CompileOptions {
    /// Global filters mode for the given last selected field
    pub fn global(last_selected_field_name: impl Into<String>) -> Self {
        Self {
            mode: OrganizerKind::Global,
            last_selected_field_name: Some(last_selected_field_name.into()),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.table_alias = alias.into();
        self
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }
}

/// Compile filters into a WHERE clause
///
/// Filters without any selected value are skipped unless they are required,
/// in which case their empty section makes the command invalid. Hard
/// failures (ambiguous column names, unparseable range literals) abort the
/// whole compilation.
pub fn compile(
    filters: &[Filter],
    options: &CompileOptions,
) -> Result<WhereClauseCommand, FilterError> {
    tracing::debug!(
        filters = filters.len(),
        mode = %options.mode,
        alias = %options.table_alias,
        "Compiling WHERE clause"
    );

    let mut builder = WhereClauseBuilder::new();
    for filter in filters {
        filter.validate()?;

        if !filter.has_active_items() && !filter.is_required() {
            tracing::debug!(filter = filter.display_name(), "Skipping filter without selection");
            continue;
        }

        factory::organizer_for(options.mode, filter, options).organize(&mut builder)?;
    }

    let command = builder.build();
    if let Some(message) = command.invalid_message() {
        tracing::warn!(message = %message, "Compiled WHERE clause is invalid");
    }
    Ok(command)
}
