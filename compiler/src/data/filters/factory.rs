//! Strategy factories
//!
//! Each table maps an enum variant to the constructor of its strategy. The
//! tables are built on first use and never change afterwards.

use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashMap;

use crate::data::error::FilterError;

use super::comparer::{DateComparer, NumericComparer, OrdinalComparer, ValueComparer};
use super::compile::CompileOptions;
use super::condition::{BetweenCondition, Condition, InCondition, IsCondition};
use super::organizer::{
    ConditionOrganizer, DefaultOrganizer, GlobalFiltersOrganizer, OrganizerKind,
};
use super::types::{Filter, FilterItem, FilterValueKind, ValueType};
use super::values::{ConditionValues, ListValues, NullCheck, RangeValues, ValueBuilderKind};

type ComparerCtor = fn(&str) -> Arc<dyn ValueComparer>;

type ValueBuilderCtor =
    fn(&[&FilterItem], &dyn ValueComparer, bool) -> Result<ConditionValues, FilterError>;

type OrganizerCtor =
    for<'a> fn(&'a Filter, &'a CompileOptions) -> Box<dyn ConditionOrganizer + 'a>;

static COMPARERS: LazyLock<FxHashMap<ValueType, ComparerCtor>> = LazyLock::new(|| {
    let mut map: FxHashMap<ValueType, ComparerCtor> = FxHashMap::default();
    map.insert(ValueType::Date, date_comparer);
    map.insert(ValueType::Numeric, numeric_comparer);
    map.insert(ValueType::Ordinal, ordinal_comparer);
    map
});

static VALUE_BUILDERS: LazyLock<FxHashMap<ValueBuilderKind, ValueBuilderCtor>> =
    LazyLock::new(|| {
        let mut map: FxHashMap<ValueBuilderKind, ValueBuilderCtor> = FxHashMap::default();
        map.insert(ValueBuilderKind::In, in_values);
        map.insert(ValueBuilderKind::Between, between_values);
        map.insert(ValueBuilderKind::Is, is_values);
        map
    });

static ORGANIZERS: LazyLock<FxHashMap<OrganizerKind, OrganizerCtor>> = LazyLock::new(|| {
    let mut map: FxHashMap<OrganizerKind, OrganizerCtor> = FxHashMap::default();
    map.insert(OrganizerKind::Default, default_organizer);
    map.insert(OrganizerKind::Global, global_organizer);
    map
});

fn date_comparer(date_format: &str) -> Arc<dyn ValueComparer> {
    Arc::new(DateComparer::new(date_format))
}

fn numeric_comparer(_date_format: &str) -> Arc<dyn ValueComparer> {
    Arc::new(NumericComparer)
}

fn ordinal_comparer(_date_format: &str) -> Arc<dyn ValueComparer> {
    Arc::new(OrdinalComparer)
}

fn in_values(
    items: &[&FilterItem],
    _comparer: &dyn ValueComparer,
    is_id_filter: bool,
) -> Result<ConditionValues, FilterError> {
    Ok(ConditionValues::In(ListValues::collect(items, is_id_filter)))
}

fn between_values(
    items: &[&FilterItem],
    comparer: &dyn ValueComparer,
    is_id_filter: bool,
) -> Result<ConditionValues, FilterError> {
    RangeValues::collect(items, comparer, is_id_filter).map(ConditionValues::Between)
}

fn is_values(
    _items: &[&FilterItem],
    _comparer: &dyn ValueComparer,
    _is_id_filter: bool,
) -> Result<ConditionValues, FilterError> {
    Ok(ConditionValues::Is(NullCheck::Null))
}

fn default_organizer<'a>(
    filter: &'a Filter,
    options: &'a CompileOptions,
) -> Box<dyn ConditionOrganizer + 'a> {
    Box::new(DefaultOrganizer::new(filter, options))
}

fn global_organizer<'a>(
    filter: &'a Filter,
    options: &'a CompileOptions,
) -> Box<dyn ConditionOrganizer + 'a> {
    Box::new(GlobalFiltersOrganizer::new(filter, options))
}

/// Comparer for a declared value shape
pub fn comparer_for(value_type: ValueType, date_format: &str) -> Arc<dyn ValueComparer> {
    match COMPARERS.get(&value_type) {
        Some(ctor) => ctor(date_format),
        None => ordinal_comparer(date_format),
    }
}

/// Value builder used by a filter kind
pub fn value_builder_kind(kind: FilterValueKind) -> ValueBuilderKind {
    match kind {
        FilterValueKind::Discrete => ValueBuilderKind::In,
        FilterValueKind::Range => ValueBuilderKind::Between,
    }
}

/// Run the value builder registered for `kind`
pub fn build_values(
    kind: ValueBuilderKind,
    items: &[&FilterItem],
    comparer: &dyn ValueComparer,
    is_id_filter: bool,
) -> Result<ConditionValues, FilterError> {
    match VALUE_BUILDERS.get(&kind) {
        Some(ctor) => ctor(items, comparer, is_id_filter),
        None => in_values(items, comparer, is_id_filter),
    }
}

/// Condition node matching the built values
pub fn condition_for(
    field: &str,
    values: ConditionValues,
    alias: &str,
    greater_or_equal: bool,
) -> Condition {
    match values {
        ConditionValues::In(values) => InCondition::new(field, values, alias).into(),
        ConditionValues::Between(values) => BetweenCondition::new(field, values, alias)
            .with_greater_or_equal(greater_or_equal)
            .into(),
        ConditionValues::Is(check) => IsCondition::null_check(field, check, alias).into(),
    }
}

/// Organizer registered for `kind`
pub fn organizer_for<'a>(
    kind: OrganizerKind,
    filter: &'a Filter,
    options: &'a CompileOptions,
) -> Box<dyn ConditionOrganizer + 'a> {
    match ORGANIZERS.get(&kind) {
        Some(ctor) => ctor(filter, options),
        None => default_organizer(filter, options),
    }
}
