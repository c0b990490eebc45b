//! Error types for filter construction.

use thiserror::Error;

use crate::kind::{FieldKind, ValueType};
use crate::operator::Operator;

/// Errors raised while building or combining filter expressions.
///
/// Every variant is a construction-time error in the calling code. Nothing
/// here is retried or recovered: a failed combinator leaves its inputs
/// untouched and the error is returned to the caller as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Operator is not legal for the field kind.
    #[error("operator {operator} is not available for {kind} fields")]
    UnsupportedOperator {
        /// Kind of the field the operator was applied to.
        kind: FieldKind,
        /// The rejected operator.
        operator: Operator,
    },

    /// Supplied value does not have the type declared by the field kind.
    #[error("expected {expected} value for {kind} field `{field}`, got {found} instead")]
    TypeMismatch {
        /// Field the value was supplied for.
        field: String,
        /// Kind of that field.
        kind: FieldKind,
        /// Value type declared by the kind.
        expected: ValueType,
        /// Value type actually supplied.
        found: ValueType,
    },

    /// Attempt to combine expressions over different field kinds.
    #[error("cannot combine {left} filter with {right} filter: field kinds are different")]
    KindMismatch {
        /// Kind of the left operand.
        left: FieldKind,
        /// Kind of the right operand.
        right: FieldKind,
    },

    /// Inversion requested on something without a defined complement.
    #[error("{target} has no inverted equivalent")]
    NoInverse {
        /// Description of what was asked to invert.
        target: String,
    },

    /// Attempt to narrow a disjunction to a conjunction.
    #[error("cannot transform a disjunction into a conjunction")]
    CannotNarrow,

    /// Attempt to use an expression as a plain boolean.
    #[error(
        "filter cannot be converted to bool; use the `and`, `or` and `invert` \
         combinators instead of native boolean operators"
    )]
    BooleanCoercion,
}

/// Result type for filter operations.
pub type FilterResult<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unsupported_operator() {
        let err = FilterError::UnsupportedOperator {
            kind: FieldKind::Status,
            operator: Operator::LessThan,
        };
        assert_eq!(
            err.to_string(),
            "operator less_than is not available for status fields"
        );
    }

    #[test]
    fn test_display_type_mismatch() {
        let err = FilterError::TypeMismatch {
            field: "task.retries".to_string(),
            kind: FieldKind::Number,
            expected: ValueType::Number,
            found: ValueType::Text,
        };
        assert_eq!(
            err.to_string(),
            "expected number value for number field `task.retries`, got text instead"
        );
    }

    #[test]
    fn test_display_kind_mismatch() {
        let err = FilterError::KindMismatch {
            left: FieldKind::Text,
            right: FieldKind::Date,
        };
        assert_eq!(
            err.to_string(),
            "cannot combine text filter with date filter: field kinds are different"
        );
    }

    #[test]
    fn test_boolean_coercion_points_at_combinators() {
        let msg = FilterError::BooleanCoercion.to_string();
        assert!(msg.contains("`and`"));
        assert!(msg.contains("`invert`"));
    }
}
