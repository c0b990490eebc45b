//! Wire records of the common filter messages.
//!
//! These mirror the remote service's `filters_common` messages in their
//! JSON mapping: camelCase field names, enums spelled by their full
//! constant name, 64-bit integers as decimal strings, timestamps as
//! RFC 3339 strings.
//!
//! ```text
//! Filters { or: [ FiltersAnd { and: [ FilterField { field, filterString | ... } ] } ] }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use armonik_filter::{FieldKind, Operator};

// =============================================================================
// Operators
// =============================================================================

/// Operators of string filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterStringOperator {
    /// Equal.
    #[serde(rename = "FILTER_STRING_OPERATOR_EQUAL")]
    Equal,
    /// Not equal.
    #[serde(rename = "FILTER_STRING_OPERATOR_NOT_EQUAL")]
    NotEqual,
    /// Contains.
    #[serde(rename = "FILTER_STRING_OPERATOR_CONTAINS")]
    Contains,
    /// Not contains.
    #[serde(rename = "FILTER_STRING_OPERATOR_NOT_CONTAINS")]
    NotContains,
    /// Starts with.
    #[serde(rename = "FILTER_STRING_OPERATOR_STARTS_WITH")]
    StartsWith,
    /// Ends with.
    #[serde(rename = "FILTER_STRING_OPERATOR_ENDS_WITH")]
    EndsWith,
}

/// Operators of number filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterNumberOperator {
    /// Equal.
    #[serde(rename = "FILTER_NUMBER_OPERATOR_EQUAL")]
    Equal,
    /// Not equal.
    #[serde(rename = "FILTER_NUMBER_OPERATOR_NOT_EQUAL")]
    NotEqual,
    /// Less than.
    #[serde(rename = "FILTER_NUMBER_OPERATOR_LESS_THAN")]
    LessThan,
    /// Less than or equal.
    #[serde(rename = "FILTER_NUMBER_OPERATOR_LESS_THAN_OR_EQUAL")]
    LessThanOrEqual,
    /// Greater than or equal.
    #[serde(rename = "FILTER_NUMBER_OPERATOR_GREATER_THAN_OR_EQUAL")]
    GreaterThanOrEqual,
    /// Greater than.
    #[serde(rename = "FILTER_NUMBER_OPERATOR_GREATER_THAN")]
    GreaterThan,
}

/// Operators of date filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterDateOperator {
    /// Equal.
    #[serde(rename = "FILTER_DATE_OPERATOR_EQUAL")]
    Equal,
    /// Not equal.
    #[serde(rename = "FILTER_DATE_OPERATOR_NOT_EQUAL")]
    NotEqual,
    /// Strictly before.
    #[serde(rename = "FILTER_DATE_OPERATOR_BEFORE")]
    Before,
    /// Before or equal.
    #[serde(rename = "FILTER_DATE_OPERATOR_BEFORE_OR_EQUAL")]
    BeforeOrEqual,
    /// After or equal.
    #[serde(rename = "FILTER_DATE_OPERATOR_AFTER_OR_EQUAL")]
    AfterOrEqual,
    /// Strictly after.
    #[serde(rename = "FILTER_DATE_OPERATOR_AFTER")]
    After,
}

/// Operators of status filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterStatusOperator {
    /// Equal.
    #[serde(rename = "FILTER_STATUS_OPERATOR_EQUAL")]
    Equal,
    /// Not equal.
    #[serde(rename = "FILTER_STATUS_OPERATOR_NOT_EQUAL")]
    NotEqual,
}

/// Operators of array filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterArrayOperator {
    /// Array contains the value.
    #[serde(rename = "FILTER_ARRAY_OPERATOR_CONTAINS")]
    Contains,
    /// Array does not contain the value.
    #[serde(rename = "FILTER_ARRAY_OPERATOR_NOT_CONTAINS")]
    NotContains,
}

/// Maps a generic operator to and from a kind's wire operator.
pub trait WireOperator: Sized + Copy {
    /// Kind the operator enum belongs to.
    const KIND: FieldKind;

    /// Wire spelling of `op`, if the kind has one.
    fn from_operator(op: Operator) -> Option<Self>;

    /// Generic operator for this wire constant.
    fn to_operator(self) -> Operator;
}

macro_rules! wire_operator {
    ($ty:ident, $kind:expr, { $($op:ident => $wire:ident),* $(,)? }) => {
        impl WireOperator for $ty {
            const KIND: FieldKind = $kind;

            fn from_operator(op: Operator) -> Option<Self> {
                match op {
                    $(Operator::$op => Some($ty::$wire),)*
                    _ => None,
                }
            }

            fn to_operator(self) -> Operator {
                match self {
                    $($ty::$wire => Operator::$op,)*
                }
            }
        }
    };
}

wire_operator!(FilterStringOperator, FieldKind::Text, {
    Equal => Equal,
    NotEqual => NotEqual,
    Contains => Contains,
    NotContains => NotContains,
    StartsWith => StartsWith,
    EndsWith => EndsWith,
});

wire_operator!(FilterNumberOperator, FieldKind::Number, {
    Equal => Equal,
    NotEqual => NotEqual,
    LessThan => LessThan,
    LessOrEqual => LessThanOrEqual,
    GreaterOrEqual => GreaterThanOrEqual,
    GreaterThan => GreaterThan,
});

wire_operator!(FilterDateOperator, FieldKind::Date, {
    Equal => Equal,
    NotEqual => NotEqual,
    LessThan => Before,
    LessOrEqual => BeforeOrEqual,
    GreaterOrEqual => AfterOrEqual,
    GreaterThan => After,
});

wire_operator!(FilterStatusOperator, FieldKind::Status, {
    Equal => Equal,
    NotEqual => NotEqual,
});

wire_operator!(FilterArrayOperator, FieldKind::Array, {
    Contains => Contains,
    NotContains => NotContains,
});

/// `int64` in its JSON mapping: written as a string, read from a string or
/// a number.
mod int64 {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(Int64Visitor)
    }

    struct Int64Visitor;

    impl Visitor<'_> for Int64Visitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a 64-bit integer or its decimal string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }
}

// =============================================================================
// Inner records
// =============================================================================

/// `{ value, operator }` for string fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterString {
    /// Compared string.
    pub value: String,
    /// Operator.
    pub operator: FilterStringOperator,
}

/// `{ value, operator }` for number fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterNumber {
    /// Compared integer.
    #[serde(with = "int64")]
    pub value: i64,
    /// Operator.
    pub operator: FilterNumberOperator,
}

/// `{ value, operator }` for date fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDate {
    /// Compared timestamp.
    pub value: DateTime<Utc>,
    /// Operator.
    pub operator: FilterDateOperator,
}

/// `{ value }` for boolean fields; the operator is implicitly `is`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterBoolean {
    /// Expected flag.
    pub value: bool,
}

/// `{ value, operator }` for status fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStatus {
    /// Wire integer of the status enumerant.
    pub value: i32,
    /// Operator.
    pub operator: FilterStatusOperator,
}

/// `{ value, operator }` for array fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterArray {
    /// Element looked up in the array.
    pub value: String,
    /// Operator.
    pub operator: FilterArrayOperator,
}

// =============================================================================
// Outer records
// =============================================================================

/// The `filter_<kind>` one-of of a single-field record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// `filterString`
    #[serde(rename = "filterString")]
    String(FilterString),
    /// `filterNumber`
    #[serde(rename = "filterNumber")]
    Number(FilterNumber),
    /// `filterDate`
    #[serde(rename = "filterDate")]
    Date(FilterDate),
    /// `filterBoolean`
    #[serde(rename = "filterBoolean")]
    Boolean(FilterBoolean),
    /// `filterStatus`
    #[serde(rename = "filterStatus")]
    Status(FilterStatus),
    /// `filterArray`
    #[serde(rename = "filterArray")]
    Array(FilterArray),
}

impl FilterKind {
    /// Field kind of the inner record.
    pub fn field_kind(&self) -> FieldKind {
        match self {
            FilterKind::String(_) => FieldKind::Text,
            FilterKind::Number(_) => FieldKind::Number,
            FilterKind::Date(_) => FieldKind::Date,
            FilterKind::Boolean(_) => FieldKind::Boolean,
            FilterKind::Status(_) => FieldKind::Status,
            FilterKind::Array(_) => FieldKind::Array,
        }
    }
}

/// Single-field record: `{ field, filter<Kind> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    /// Identifier of the targeted field.
    pub field: String,
    /// The typed comparison.
    #[serde(flatten)]
    pub filter: FilterKind,
}

/// `and` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltersAnd {
    /// Members, all of which must hold.
    pub and: Vec<FilterField>,
}

/// `or` record: the whole filter in DNF.
///
/// An empty record places no constraint and matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Members, any of which may hold.
    pub or: Vec<FiltersAnd>,
}

impl Filters {
    /// A filter without constraint.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Returns true if the filter places no constraint.
    pub fn is_match_all(&self) -> bool {
        self.or.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_mapping_is_bijective_on_table() {
        for op in armonik_filter::operators_for(FieldKind::Number) {
            let wire = FilterNumberOperator::from_operator(*op).unwrap();
            assert_eq!(wire.to_operator(), *op);
        }
        for op in armonik_filter::operators_for(FieldKind::Date) {
            let wire = FilterDateOperator::from_operator(*op).unwrap();
            assert_eq!(wire.to_operator(), *op);
        }
        assert_eq!(FilterStringOperator::from_operator(Operator::LessThan), None);
        assert_eq!(FilterArrayOperator::from_operator(Operator::Equal), None);
    }

    #[test]
    fn test_field_record_json_shape() {
        let record = FilterField {
            field: "session.name".to_string(),
            filter: FilterKind::String(FilterString {
                value: "foo".to_string(),
                operator: FilterStringOperator::StartsWith,
            }),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "field": "session.name",
                "filterString": {
                    "value": "foo",
                    "operator": "FILTER_STRING_OPERATOR_STARTS_WITH"
                }
            })
        );
        let back: FilterField = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_number_value_is_a_string() {
        let record = FilterNumber {
            value: -9_007_199_254_740_993,
            operator: FilterNumberOperator::LessThan,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["value"], "-9007199254740993");
        assert_eq!(serde_json::from_value::<FilterNumber>(json).unwrap(), record);

        let from_number: FilterNumber = serde_json::from_str(
            r#"{"value":12,"operator":"FILTER_NUMBER_OPERATOR_EQUAL"}"#,
        )
        .unwrap();
        assert_eq!(from_number.value, 12);

        assert!(serde_json::from_str::<FilterNumber>(
            r#"{"value":"twelve","operator":"FILTER_NUMBER_OPERATOR_EQUAL"}"#,
        )
        .is_err());
    }

    #[test]
    fn test_match_all() {
        let all = Filters::match_all();
        assert!(all.is_match_all());
        assert_eq!(serde_json::to_string(&all).unwrap(), r#"{"or":[]}"#);
    }
}
