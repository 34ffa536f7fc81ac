//! Condition organizers
//!
//! An organizer turns one filter into a section and decides how that section
//! joins the clause.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::error::FilterError;

use super::clause::{SectionKind, WhereClauseBuilder};
use super::compile::CompileOptions;
use super::condition::IsCondition;
use super::factory;
use super::section::{ConditionSection, Separator};
use super::types::{Filter, FilterItem};
use super::values::NullCheck;

/// Registration policy for filter sections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizerKind {
    /// Every filter is a plain AND member
    #[default]
    Default,
    /// The most recently changed filter is also OR-ed with the whole clause
    Global,
}

impl fmt::Display for OrganizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizerKind::Default => write!(f, "default"),
            OrganizerKind::Global => write!(f, "global"),
        }
    }
}

/// Builds the section(s) for one filter and registers them
pub trait ConditionOrganizer {
    fn organize(&self, builder: &mut WhereClauseBuilder) -> Result<(), FilterError>;
}

/// Build the section for one filter
///
/// - only NULL selected: `field IS NULL`
/// - values selected: IN list or range, depending on the filter kind
/// - values and NULL selected: `(<values> OR field IS NULL)`
/// - nothing selected: a section with an empty (invalid) IN list
pub fn build_section(
    filter: &Filter,
    options: &CompileOptions,
) -> Result<ConditionSection, FilterError> {
    let field = filter.field_name()?;
    let is_id_filter = filter.is_id_filter();
    let alias = options.table_alias.as_str();

    let (nulls, values): (Vec<&FilterItem>, Vec<&FilterItem>) = filter
        .active_items()
        .partition(|item| item.is_null_for(is_id_filter));

    let null_check = || IsCondition::null_check(field, NullCheck::Null, alias);

    if values.is_empty() && !nulls.is_empty() {
        return Ok(ConditionSection::new(null_check()));
    }

    let comparer = factory::comparer_for(filter.value_type(), &options.date_format);
    let builder_kind = factory::value_builder_kind(filter.kind());
    let built = factory::build_values(builder_kind, &values, comparer.as_ref(), is_id_filter)?;
    let primary = factory::condition_for(
        field,
        built,
        alias,
        filter.single_bound().is_greater_or_equal(),
    );

    let mut section = ConditionSection::new(primary);
    if !nulls.is_empty() {
        section = section
            .with_child(ConditionSection::new(null_check()).with_separator(Separator::Or));
    }

    tracing::trace!(
        filter = filter.display_name(),
        comparer = comparer.name(),
        sql = %section,
        "Built filter section"
    );
    Ok(section)
}

/// Registers one `Default` section per filter
#[derive(Debug)]
pub struct DefaultOrganizer<'a> {
    filter: &'a Filter,
    options: &'a CompileOptions,
}

impl<'a> DefaultOrganizer<'a> {
    pub fn new(filter: &'a Filter, options: &'a CompileOptions) -> Self {
        Self { filter, options }
    }
}

impl ConditionOrganizer for DefaultOrganizer<'_> {
    fn organize(&self, builder: &mut WhereClauseBuilder) -> Result<(), FilterError> {
        let section = build_section(self.filter, self.options)?;
        builder.add_section(Some(section), SectionKind::Default);
        Ok(())
    }
}

/// Registers the `Default` section, plus an identical `LastSelected` twin
/// when this filter is the one the user changed last
/// (`CompileOptions::last_selected_field_name`)
#[derive(Debug)]
pub struct GlobalFiltersOrganizer<'a> {
    filter: &'a Filter,
    options: &'a CompileOptions,
}

impl<'a> GlobalFiltersOrganizer<'a> {
    pub fn new(filter: &'a Filter, options: &'a CompileOptions) -> Self {
        Self { filter, options }
    }

    fn is_last_selected(&self) -> Result<bool, FilterError> {
        let field = self.filter.field_name()?;
        Ok(self.options.last_selected_field_name.as_deref() == Some(field))
    }
}

impl ConditionOrganizer for GlobalFiltersOrganizer<'_> {
    fn organize(&self, builder: &mut WhereClauseBuilder) -> Result<(), FilterError> {
        let section = build_section(self.filter, self.options)?;

        let twin = if !self.is_last_selected()? {
            None
        } else if self.options.duplicate_last_selected {
            Some(section.clone())
        } else {
            tracing::debug!(
                filter = self.filter.display_name(),
                "Last selected duplication disabled"
            );
            None
        };

        builder.add_section(Some(section), SectionKind::Default);
        if let Some(twin) = twin {
            builder.add_section(Some(twin), SectionKind::LastSelected);
        }
        Ok(())
    }
}
