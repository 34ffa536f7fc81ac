//! Filter to WHERE clause compiler
//!
//! Turns end-user filter selections into SQL boolean expressions: IN lists,
//! BETWEEN / one-sided range comparisons, IS NULL handling and parenthesized
//! AND/OR groups. Values are inlined as literals.
//!
//! ## Usage
//!
//! ```
//! use filterql::data::filters::{compile, CompileOptions, Filter, FilterItem, FilterName};
//!
//! let filter = Filter::by_id(
//!     FilterName::new("Region", "RegionId"),
//!     vec![FilterItem::selected("1"), FilterItem::selected("-")],
//! );
//! let command = compile(&[filter], &CompileOptions::default()).unwrap();
//! assert_eq!(command.render(), "WHERE (RegionId IN (1) OR RegionId IS NULL) ");
//! ```

mod clause;
mod comparer;
mod compile;
mod condition;
mod factory;
mod organizer;
mod parser;
mod section;
mod types;
mod values;

pub use clause::{SectionKind, WhereClauseBuilder, WhereClauseCommand};
pub use comparer::{DateComparer, NumericComparer, OrdinalComparer, ValueComparer};
pub use compile::{CompileOptions, compile};
pub use condition::{BetweenCondition, Condition, InCondition, IsCondition};
pub use factory::{build_values, comparer_for, condition_for, organizer_for, value_builder_kind};
pub use organizer::{
    ConditionOrganizer, DefaultOrganizer, GlobalFiltersOrganizer, OrganizerKind, build_section,
};
pub use parser::{MAX_FILTER_JSON_SIZE, MAX_FILTERS, parse_filters};
pub use section::{ConditionSection, Separator};
pub use types::{
    Filter, FilterItem, FilterName, FilterValueKind, NULL_SENTINEL, SingleBound, ValueType,
};
pub use values::{ConditionValues, ListValues, NullCheck, RangeValues, ValueBuilderKind};
