//! Leaf predicates: one typed comparison on one field.

use crate::error::{FilterError, FilterResult};
use crate::field::{Field, FieldRef};
use crate::kind::FieldKind;
use crate::operator::{is_supported, Operator};
use crate::value::FilterValue;

use super::{Conjunction, Disjunction, Expression};

/// A single-field, single-operator predicate.
///
/// Built through [`Field`] or [`SimpleFilter::construct`]; once built it is
/// never mutated. The operator is always legal for the kind and the value
/// always has the type the kind declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimpleFilter {
    field: FieldRef,
    kind: FieldKind,
    operator: Operator,
    value: FilterValue,
}

impl SimpleFilter {
    /// Builds a predicate, checking the operator and then the value type.
    ///
    /// # Errors
    ///
    /// - [`FilterError::UnsupportedOperator`] if `operator` is not in the
    ///   table of `kind`.
    /// - [`FilterError::TypeMismatch`] if `value` does not have the type
    ///   `kind` declares. Status fields declare none and accept any value.
    ///
    /// On status fields, a number within `i32` range is stored as the
    /// enumerant [`FilterValue::Status`], the form the wire carries.
    pub fn construct(
        field: FieldRef,
        kind: FieldKind,
        value: FilterValue,
        operator: Operator,
    ) -> FilterResult<Self> {
        if !is_supported(kind, operator) {
            tracing::debug!(field = %field, %kind, %operator, "rejected unsupported operator");
            return Err(FilterError::UnsupportedOperator { kind, operator });
        }

        let value = match (kind, value) {
            (FieldKind::Status, FilterValue::Number(n)) => match i32::try_from(n) {
                Ok(status) => FilterValue::Status(status),
                Err(_) => FilterValue::Number(n),
            },
            (_, value) => value,
        };

        if let Some(expected) = kind.value_type() {
            let found = value.value_type();
            if found != expected {
                tracing::debug!(field = %field, %kind, %expected, %found, "rejected value type");
                return Err(FilterError::TypeMismatch {
                    field: field.to_string(),
                    kind,
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            field,
            kind,
            operator,
            value,
        })
    }

    /// The targeted field.
    pub fn field(&self) -> &FieldRef {
        &self.field
    }

    /// Kind of the targeted field.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The relational operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The compared value.
    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    /// A [`Field`] handle for the targeted field, to build sibling predicates.
    pub fn field_handle(&self) -> Field {
        Field::new(self.field.clone(), self.kind)
    }

    /// The complementary predicate.
    ///
    /// Swaps `equal`/`not_equal`, `less_than`/`greater_or_equal`,
    /// `less_or_equal`/`greater_than` and `contains`/`not_contains`. Boolean
    /// predicates keep their `is` operator and flip their value.
    ///
    /// # Errors
    ///
    /// [`FilterError::NoInverse`] for `starts_with` and `ends_with`.
    pub fn invert(&self) -> FilterResult<SimpleFilter> {
        if let FilterValue::Boolean(b) = self.value {
            if self.kind == FieldKind::Boolean {
                return Ok(Self {
                    value: FilterValue::Boolean(!b),
                    ..self.clone()
                });
            }
        }

        match self.operator.inverse() {
            Some(inverse) => {
                Self::construct(self.field.clone(), self.kind, self.value.clone(), inverse)
            }
            None => Err(FilterError::NoInverse {
                target: format!(
                    "{} operator {} for field `{}`",
                    self.kind,
                    self.operator.label(self.kind),
                    self.field
                ),
            }),
        }
    }

    /// Widens to a singleton conjunction.
    pub fn to_conjunction(&self) -> Conjunction {
        Conjunction::singleton(self.clone())
    }

    /// Widens to a singleton disjunction of a singleton conjunction.
    pub fn to_disjunction(&self) -> Disjunction {
        self.to_conjunction().to_disjunction()
    }

    /// ANDs this predicate with a predicate or conjunction of the same kind.
    ///
    /// The result lists `self` first, then the members of `other`.
    pub fn and(&self, other: impl Into<Expression>) -> FilterResult<Conjunction> {
        self.to_conjunction().and(other)
    }

    /// ORs this predicate with any expression of the same kind.
    pub fn or(&self, other: impl Into<Expression>) -> FilterResult<Disjunction> {
        self.to_disjunction().or(other)
    }
}

impl std::fmt::Display for SimpleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.field,
            self.operator.label(self.kind),
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ValueType;

    fn leaf(
        kind: FieldKind,
        value: impl Into<FilterValue>,
        op: Operator,
    ) -> FilterResult<SimpleFilter> {
        SimpleFilter::construct(FieldRef::new("f"), kind, value.into(), op)
    }

    #[test]
    fn test_construct_checks_operator_first() {
        let err = leaf(FieldKind::Number, "nope", Operator::Contains).unwrap_err();
        assert_eq!(
            err,
            FilterError::UnsupportedOperator {
                kind: FieldKind::Number,
                operator: Operator::Contains,
            }
        );
    }

    #[test]
    fn test_construct_type_mismatch() {
        let err = leaf(FieldKind::Text, 42, Operator::Equal).unwrap_err();
        assert_eq!(
            err,
            FilterError::TypeMismatch {
                field: "f".to_string(),
                kind: FieldKind::Text,
                expected: ValueType::Text,
                found: ValueType::Number,
            }
        );
        assert!(leaf(FieldKind::Array, true, Operator::Contains).is_err());
        assert!(leaf(FieldKind::Boolean, 1, Operator::Is).is_err());
    }

    #[test]
    fn test_status_skips_type_check() {
        assert!(leaf(FieldKind::Status, FilterValue::Status(3), Operator::Equal).is_ok());
        assert!(leaf(FieldKind::Status, 3, Operator::NotEqual).is_ok());
        assert!(leaf(FieldKind::Status, "running", Operator::Equal).is_ok());
    }

    #[test]
    fn test_status_numbers_become_enumerants() {
        let from_number = leaf(FieldKind::Status, 4, Operator::Equal).unwrap();
        assert_eq!(from_number.value(), &FilterValue::Status(4));
        assert_eq!(
            from_number,
            leaf(FieldKind::Status, FilterValue::Status(4), Operator::Equal).unwrap()
        );

        let too_large = leaf(FieldKind::Status, i64::MAX, Operator::Equal).unwrap();
        assert_eq!(too_large.value(), &FilterValue::Number(i64::MAX));

        let number = leaf(FieldKind::Number, 4, Operator::Equal).unwrap();
        assert_eq!(number.value(), &FilterValue::Number(4));
    }

    #[test]
    fn test_every_illegal_pair_is_rejected() {
        let samples = [
            (FieldKind::Text, FilterValue::from("x")),
            (FieldKind::Status, FilterValue::Status(1)),
            (FieldKind::Date, FilterValue::Date(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH)),
            (FieldKind::Number, FilterValue::Number(1)),
            (FieldKind::Boolean, FilterValue::Boolean(true)),
            (FieldKind::Array, FilterValue::from("x")),
        ];
        for (kind, value) in samples {
            for op in Operator::ALL {
                let result = leaf(kind, value.clone(), op);
                if is_supported(kind, op) {
                    assert!(result.is_ok(), "{kind} {op}");
                } else {
                    assert_eq!(
                        result.unwrap_err(),
                        FilterError::UnsupportedOperator { kind, operator: op }
                    );
                }
            }
        }
    }

    #[test]
    fn test_invert_relational() {
        let lt = leaf(FieldKind::Number, 5, Operator::LessThan).unwrap();
        let ge = lt.invert().unwrap();
        assert_eq!(ge.operator(), Operator::GreaterOrEqual);
        assert_eq!(ge.value(), lt.value());
        assert_eq!(ge.invert().unwrap(), lt);
    }

    #[test]
    fn test_invert_boolean_flips_value() {
        let is_true = leaf(FieldKind::Boolean, true, Operator::Is).unwrap();
        let inverted = is_true.invert().unwrap();
        assert_eq!(inverted.operator(), Operator::Is);
        assert_eq!(inverted.value(), &FilterValue::Boolean(false));
        assert_eq!(inverted.invert().unwrap().value(), is_true.value());
    }

    #[test]
    fn test_invert_affix_fails() {
        let starts = leaf(FieldKind::Text, "ab", Operator::StartsWith).unwrap();
        let err = starts.invert().unwrap_err();
        assert!(matches!(err, FilterError::NoInverse { .. }));
        assert_eq!(
            err.to_string(),
            "text operator starts_with for field `f` has no inverted equivalent"
        );
    }

    #[test]
    fn test_widening() {
        let l = leaf(FieldKind::Text, "a", Operator::Equal).unwrap();
        assert_eq!(l.to_conjunction().filters(), &[l.clone()]);
        let d = l.to_disjunction();
        assert_eq!(d.len(), 1);
        assert_eq!(d.conjunctions()[0].filters(), &[l]);
    }

    #[test]
    fn test_display_date_label() {
        let date = chrono::DateTime::<chrono::Utc>::UNIX_EPOCH;
        let before = leaf(FieldKind::Date, date, Operator::LessThan).unwrap();
        assert_eq!(before.to_string(), "f before 1970-01-01T00:00:00Z");
    }
}
