//! WHERE clause builder
//!
//! Collects the sections of every filter in one query and renders the final
//! clause. `Default` sections are AND-ed together; each `LastSelected` section
//! is OR-ed with the whole `Default` block.

use std::fmt;

use super::section::ConditionSection;

/// How a section joins the clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Plain AND member of the clause
    Default,
    /// OR-ed with the full block of default sections
    LastSelected,
}

/// Accumulates sections for one query
#[derive(Debug, Clone, Default)]
pub struct WhereClauseBuilder {
    sections: Vec<(SectionKind, Option<ConditionSection>)>,
}

impl WhereClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section; `None` is kept and makes the clause invalid
    pub fn add_section(&mut self, section: Option<ConditionSection>, kind: SectionKind) {
        let sql = section.as_ref().map(ConditionSection::render);
        tracing::trace!(kind = ?kind, sql = sql.as_deref(), "Adding section");
        self.sections.push((kind, section));
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn build(self) -> WhereClauseCommand {
        let command = WhereClauseCommand {
            sections: self.sections,
        };
        tracing::debug!(
            sections = command.sections.len(),
            valid = command.is_valid(),
            "Built WHERE clause"
        );
        command
    }
}

/// Rendered WHERE clause for one query
#[derive(Debug, Clone)]
pub struct WhereClauseCommand {
    sections: Vec<(SectionKind, Option<ConditionSection>)>,
}

impl WhereClauseCommand {
    fn rendered(&self, kind: SectionKind) -> Vec<String> {
        self.sections
            .iter()
            .filter(|(k, _)| *k == kind)
            .filter_map(|(_, section)| section.as_ref())
            .map(ConditionSection::render)
            .filter(|sql| !sql.is_empty())
            .collect()
    }

    /// Clause body without the `WHERE ` prefix, with one trailing space
    ///
    /// Empty when nothing renders.
    pub fn value(&self) -> String {
        let mut sql = self.rendered(SectionKind::Default).join(" AND ");
        for last in self.rendered(SectionKind::LastSelected) {
            if sql.is_empty() {
                sql = last;
            } else {
                sql = format!("{} OR {}", sql, last);
            }
        }

        if sql.is_empty() {
            return sql;
        }
        sql.push(' ');
        sql
    }

    /// Full clause text (`WHERE ...`), empty when nothing renders
    pub fn render(&self) -> String {
        let value = self.value();
        if value.is_empty() {
            value
        } else {
            format!("WHERE {}", value)
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_valid(&self) -> bool {
        !self.sections.is_empty()
            && self
                .sections
                .iter()
                .all(|(_, section)| section.as_ref().is_some_and(ConditionSection::is_valid))
    }

    /// Reason the clause is invalid, `None` when valid
    pub fn invalid_message(&self) -> Option<String> {
        if self.sections.is_empty() {
            return Some("No sections were added to the WHERE clause.".to_string());
        }

        let failures: Vec<String> = self
            .sections
            .iter()
            .filter_map(|(_, section)| match section {
                None => Some("null".to_string()),
                Some(section) => section.invalid_message(),
            })
            .collect();

        if failures.is_empty() {
            None
        } else {
            Some(failures.join(", "))
        }
    }
}

impl fmt::Display for WhereClauseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::condition::{InCondition, IsCondition};
    use crate::data::filters::section::Separator;
    use crate::data::filters::types::FilterItem;
    use crate::data::filters::values::{ListValues, NullCheck};

    fn in_section(field: &str, values: &[&str]) -> ConditionSection {
        let items: Vec<FilterItem> = values.iter().map(|v| FilterItem::selected(*v)).collect();
        let refs: Vec<&FilterItem> = items.iter().collect();
        ConditionSection::new(InCondition::new(field, ListValues::collect(&refs, true), ""))
    }

    #[test]
    fn test_single_default_section() {
        let mut builder = WhereClauseBuilder::new();
        builder.add_section(Some(in_section("FilterId1", &["1", "2", "3"])), SectionKind::Default);
        let command = builder.build();

        assert!(command.is_valid());
        assert_eq!(command.render(), "WHERE FilterId1 IN (1,2,3) ");
        assert_eq!(command.value(), "FilterId1 IN (1,2,3) ");
        assert_eq!(command.to_string(), command.render());
    }

    #[test]
    fn test_default_sections_are_and_joined() {
        let mut builder = WhereClauseBuilder::new();
        builder.add_section(Some(in_section("A", &["1"])), SectionKind::Default);
        builder.add_section(Some(in_section("B", &["2", "3"])), SectionKind::Default);

        assert_eq!(builder.build().render(), "WHERE A IN (1) AND B IN (2,3) ");
    }

    #[test]
    fn test_last_selected_is_or_ed_with_default_block() {
        let mut builder = WhereClauseBuilder::new();
        builder.add_section(Some(in_section("A", &["1"])), SectionKind::Default);
        builder.add_section(Some(in_section("B", &["2"])), SectionKind::Default);
        builder.add_section(Some(in_section("B", &["2"])), SectionKind::LastSelected);

        assert_eq!(
            builder.build().render(),
            "WHERE A IN (1) AND B IN (2) OR B IN (2) "
        );
    }

    #[test]
    fn test_parenthesized_section_in_clause() {
        let section = in_section("FilterId1", &["1", "2"]).with_child(
            ConditionSection::new(IsCondition::null_check("FilterId1", NullCheck::Null, ""))
                .with_separator(Separator::Or),
        );
        let mut builder = WhereClauseBuilder::new();
        builder.add_section(Some(section), SectionKind::Default);

        assert_eq!(
            builder.build().render(),
            "WHERE (FilterId1 IN (1,2) OR FilterId1 IS NULL) "
        );
    }

    #[test]
    fn test_empty_builder_is_invalid() {
        let builder = WhereClauseBuilder::new();
        assert!(builder.is_empty());
        let command = builder.build();

        assert!(!command.is_valid());
        assert_eq!(command.render(), "");
        assert_eq!(command.value(), "");
        assert_eq!(
            command.invalid_message().unwrap(),
            "No sections were added to the WHERE clause."
        );
    }

    #[test]
    fn test_invalid_and_null_sections_are_enumerated() {
        let mut builder = WhereClauseBuilder::new();
        builder.add_section(Some(in_section("A", &["1"])), SectionKind::Default);
        builder.add_section(None, SectionKind::Default);
        builder.add_section(
            Some(ConditionSection::new(InCondition::new("B", ListValues::default(), ""))),
            SectionKind::Default,
        );
        assert_eq!(builder.len(), 3);
        let command = builder.build();

        assert!(!command.is_valid());
        assert_eq!(
            command.invalid_message().unwrap(),
            "null, The main FilterConditionSection is not valid. \
             Message 'No values provided for evaluation. Values are ''.'."
        );
        // valid sections still render
        assert_eq!(command.render(), "WHERE A IN (1) ");
        assert_eq!(command.section_count(), 3);
    }

    #[test]
    fn test_valid_command_has_no_message() {
        let mut builder = WhereClauseBuilder::new();
        builder.add_section(Some(in_section("A", &["1"])), SectionKind::Default);
        assert!(builder.build().invalid_message().is_none());
    }
}
