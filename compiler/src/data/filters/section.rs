//! Condition sections
//!
//! A section is one primary condition plus nested child sections. Childless
//! sections render the primary untouched; otherwise the whole group is
//! wrapped in parentheses and each child is joined with its own separator.

use std::fmt;

use super::condition::Condition;

/// Boolean operator joining a section to whatever precedes it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Separator {
    #[default]
    And,
    Or,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composition node: `primary` or `(primary <sep> child ...)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSection {
    primary: Option<Condition>,
    separator: Separator,
    children: Vec<Option<ConditionSection>>,
}

impl ConditionSection {
    pub fn new(primary: impl Into<Condition>) -> Self {
        Self {
            primary: Some(primary.into()),
            ..Self::default()
        }
    }

    /// Section whose primary may be missing; such a section is invalid
    pub fn from_primary(primary: Option<Condition>) -> Self {
        Self {
            primary,
            ..Self::default()
        }
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_child(mut self, child: ConditionSection) -> Self {
        self.children.push(Some(child));
        self
    }

    /// Append a child; `None` entries are kept and reported as "null"
    pub fn push_child(&mut self, child: Option<ConditionSection>) {
        self.children.push(child);
    }

    pub fn primary(&self) -> Option<&Condition> {
        self.primary.as_ref()
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn children(&self) -> &[Option<ConditionSection>] {
        &self.children
    }

    pub fn is_valid(&self) -> bool {
        self.primary.as_ref().is_some_and(Condition::is_valid)
            && self.children.iter().flatten().all(ConditionSection::is_valid)
    }

    /// Reason the section is invalid, `None` when valid
    pub fn invalid_message(&self) -> Option<String> {
        let Some(primary) = &self.primary else {
            return Some("The main FilterConditionSection cannot be null.".to_string());
        };

        if let Some(message) = primary.invalid_message() {
            return Some(format!(
                "The main FilterConditionSection is not valid. Message '{}'.",
                message
            ));
        }

        if self.children.iter().flatten().all(ConditionSection::is_valid) {
            return None;
        }

        let messages: Vec<String> = self
            .children
            .iter()
            .filter_map(|child| match child {
                None => Some("null".to_string()),
                Some(child) => child.invalid_message(),
            })
            .collect();
        Some(messages.join(", "))
    }

    /// SQL fragment, empty when the section is invalid
    pub fn render(&self) -> String {
        let Some(primary) = self.primary.as_ref().filter(|_| self.is_valid()) else {
            return String::new();
        };

        let mut children = self.children.iter().flatten().peekable();
        if children.peek().is_none() {
            return primary.render();
        }

        let mut sql = format!("({}", primary.render());
        for child in children {
            sql.push(' ');
            sql.push_str(&child.render_in_list(false));
        }
        sql.push(')');
        sql
    }

    /// Render as a list member; the separator is prefixed unless first
    pub fn render_in_list(&self, first: bool) -> String {
        let body = self.render();
        if first || body.is_empty() {
            body
        } else {
            format!("{} {}", self.separator, body)
        }
    }
}

impl fmt::Display for ConditionSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::condition::{InCondition, IsCondition};
    use crate::data::filters::types::FilterItem;
    use crate::data::filters::values::{ListValues, NullCheck};

    fn in_condition(field: &str, values: &[&str]) -> InCondition {
        let items: Vec<FilterItem> = values.iter().map(|v| FilterItem::selected(*v)).collect();
        let refs: Vec<&FilterItem> = items.iter().collect();
        InCondition::new(field, ListValues::collect(&refs, true), "")
    }

    fn is_null(field: &str) -> IsCondition {
        IsCondition::null_check(field, NullCheck::Null, "")
    }

    #[test]
    fn test_childless_section_renders_primary_verbatim() {
        let condition = in_condition("FilterId1", &["1", "2"]);
        let section = ConditionSection::new(condition.clone());
        assert_eq!(section.render(), condition.render());
        assert_eq!(section.render(), "FilterId1 IN (1,2)");
    }

    #[test]
    fn test_childless_section_has_no_prefix_when_first() {
        let section = ConditionSection::new(is_null("A")).with_separator(Separator::Or);
        assert_eq!(section.render_in_list(true), "A IS NULL");
        assert_eq!(section.render_in_list(false), "OR A IS NULL");
    }

    #[test]
    fn test_section_with_child_is_parenthesized() {
        let section = ConditionSection::new(in_condition("FilterId1", &["1", "2"]))
            .with_child(ConditionSection::new(is_null("FilterId1")).with_separator(Separator::Or));
        assert_eq!(
            section.render(),
            "(FilterId1 IN (1,2) OR FilterId1 IS NULL)"
        );
    }

    #[test]
    fn test_section_with_children_prefixes_operator_when_not_first() {
        let section = ConditionSection::new(in_condition("A", &["1"]))
            .with_separator(Separator::And)
            .with_child(ConditionSection::new(is_null("A")).with_separator(Separator::Or));
        assert_eq!(section.render_in_list(true), "(A IN (1) OR A IS NULL)");
        assert_eq!(section.render_in_list(false), "AND (A IN (1) OR A IS NULL)");
    }

    #[test]
    fn test_nested_sections_get_their_own_parentheses() {
        let inner = ConditionSection::new(in_condition("B", &["2"]))
            .with_separator(Separator::And)
            .with_child(ConditionSection::new(is_null("B")).with_separator(Separator::Or));
        let outer = ConditionSection::new(in_condition("A", &["1"]))
            .with_child(inner)
            .with_child(ConditionSection::new(is_null("C")).with_separator(Separator::Or));

        assert_eq!(
            outer.render(),
            "(A IN (1) AND (B IN (2) OR B IS NULL) OR C IS NULL)"
        );
    }

    #[test]
    fn test_missing_primary_is_invalid() {
        let section = ConditionSection::from_primary(None);
        assert!(!section.is_valid());
        assert_eq!(section.render(), "");
        assert_eq!(
            section.invalid_message().unwrap(),
            "The main FilterConditionSection cannot be null."
        );
    }

    #[test]
    fn test_invalid_primary_message_wraps_condition_message() {
        let section = ConditionSection::new(InCondition::new("A", ListValues::default(), ""));
        assert!(!section.is_valid());
        assert_eq!(
            section.invalid_message().unwrap(),
            "The main FilterConditionSection is not valid. \
             Message 'No values provided for evaluation. Values are ''.'."
        );
    }

    #[test]
    fn test_invalid_children_messages_are_joined() {
        let mut section = ConditionSection::new(is_null("A"));
        section.push_child(Some(ConditionSection::from_primary(None)));
        section.push_child(None);
        section.push_child(Some(ConditionSection::new(IsCondition::new("B", "", ""))));
        section.push_child(Some(ConditionSection::new(is_null("C"))));

        assert!(!section.is_valid());
        assert_eq!(
            section.invalid_message().unwrap(),
            "The main FilterConditionSection cannot be null., null, \
             The main FilterConditionSection is not valid. \
             Message 'No value provided for evaluation. Value is ''.'."
        );
    }

    #[test]
    fn test_null_child_alone_does_not_invalidate() {
        let mut section = ConditionSection::new(is_null("A"));
        section.push_child(None);

        assert!(section.is_valid());
        assert!(section.invalid_message().is_none());
        assert_eq!(section.render(), "A IS NULL");
        assert_eq!(section.children().len(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = ConditionSection::new(in_condition("A", &["1"]));
        let mut modified = original.clone();
        modified.push_child(Some(
            ConditionSection::new(is_null("A")).with_separator(Separator::Or),
        ));

        assert_eq!(original.render(), "A IN (1)");
        assert_eq!(modified.render(), "(A IN (1) OR A IS NULL)");
    }

    #[test]
    fn test_separator_display() {
        assert_eq!(Separator::And.to_string(), "AND");
        assert_eq!(Separator::Or.to_string(), "OR");
        assert_eq!(Separator::default(), Separator::And);
    }
}
