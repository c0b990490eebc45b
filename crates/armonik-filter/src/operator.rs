//! Relational operators and the per-kind operator tables.

use crate::kind::FieldKind;

/// Relational operator of a leaf predicate.
///
/// The set is closed; each [`FieldKind`] allows a subset of it, see
/// [`operators_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`, or "before" for dates.
    LessThan,
    /// `<=`, or "before or equal" for dates.
    LessOrEqual,
    /// `>`, or "after" for dates.
    GreaterThan,
    /// `>=`, or "after or equal" for dates.
    GreaterOrEqual,
    /// Substring match on text, element match on arrays.
    Contains,
    /// Negated [`Operator::Contains`].
    NotContains,
    /// Text prefix match.
    StartsWith,
    /// Text suffix match.
    EndsWith,
    /// Boolean identity; the only operator of boolean fields.
    Is,
}

const TEXT_OPERATORS: &[Operator] = &[
    Operator::Equal,
    Operator::NotEqual,
    Operator::Contains,
    Operator::NotContains,
    Operator::StartsWith,
    Operator::EndsWith,
];

const STATUS_OPERATORS: &[Operator] = &[Operator::Equal, Operator::NotEqual];

const ORDERED_OPERATORS: &[Operator] = &[
    Operator::Equal,
    Operator::NotEqual,
    Operator::LessThan,
    Operator::LessOrEqual,
    Operator::GreaterThan,
    Operator::GreaterOrEqual,
];

const BOOLEAN_OPERATORS: &[Operator] = &[Operator::Is];

const ARRAY_OPERATORS: &[Operator] = &[Operator::Contains, Operator::NotContains];

/// Operators legal for a field kind.
pub fn operators_for(kind: FieldKind) -> &'static [Operator] {
    match kind {
        FieldKind::Text => TEXT_OPERATORS,
        FieldKind::Status => STATUS_OPERATORS,
        FieldKind::Date | FieldKind::Number => ORDERED_OPERATORS,
        FieldKind::Boolean => BOOLEAN_OPERATORS,
        FieldKind::Array => ARRAY_OPERATORS,
    }
}

/// Returns true if `operator` may be used on fields of `kind`.
pub fn is_supported(kind: FieldKind, operator: Operator) -> bool {
    operators_for(kind).contains(&operator)
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 11] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::LessThan,
        Operator::LessOrEqual,
        Operator::GreaterThan,
        Operator::GreaterOrEqual,
        Operator::Contains,
        Operator::NotContains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Is,
    ];

    /// The complement of this operator, if one is defined.
    ///
    /// Prefix and suffix matches have no complement. [`Operator::Is`] has
    /// none either: boolean predicates are inverted by flipping their value.
    pub fn inverse(self) -> Option<Operator> {
        match self {
            Operator::Equal => Some(Operator::NotEqual),
            Operator::NotEqual => Some(Operator::Equal),
            Operator::LessThan => Some(Operator::GreaterOrEqual),
            Operator::GreaterOrEqual => Some(Operator::LessThan),
            Operator::LessOrEqual => Some(Operator::GreaterThan),
            Operator::GreaterThan => Some(Operator::LessOrEqual),
            Operator::Contains => Some(Operator::NotContains),
            Operator::NotContains => Some(Operator::Contains),
            Operator::StartsWith | Operator::EndsWith | Operator::Is => None,
        }
    }

    /// Snake-case name of the operator.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
            Operator::LessThan => "less_than",
            Operator::LessOrEqual => "less_or_equal",
            Operator::GreaterThan => "greater_than",
            Operator::GreaterOrEqual => "greater_or_equal",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::Is => "is",
        }
    }

    /// Name of the operator as the remote schema spells it for `kind`.
    pub fn label(self, kind: FieldKind) -> &'static str {
        match (kind, self) {
            (FieldKind::Date, Operator::LessThan) => "before",
            (FieldKind::Date, Operator::LessOrEqual) => "before_or_equal",
            (FieldKind::Date, Operator::GreaterThan) => "after",
            (FieldKind::Date, Operator::GreaterOrEqual) => "after_or_equal",
            _ => self.name(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for op in Operator::ALL {
            if let Some(inv) = op.inverse() {
                assert_eq!(inv.inverse(), Some(op), "{op}");
            }
        }
    }

    #[test]
    fn test_no_inverse_for_affix_matches() {
        assert_eq!(Operator::StartsWith.inverse(), None);
        assert_eq!(Operator::EndsWith.inverse(), None);
        assert_eq!(Operator::Is.inverse(), None);
    }

    #[test]
    fn test_operator_table() {
        assert!(is_supported(FieldKind::Text, Operator::StartsWith));
        assert!(!is_supported(FieldKind::Text, Operator::LessThan));
        assert!(!is_supported(FieldKind::Status, Operator::Contains));
        assert!(is_supported(FieldKind::Date, Operator::GreaterOrEqual));
        assert!(is_supported(FieldKind::Number, Operator::LessOrEqual));
        assert!(!is_supported(FieldKind::Number, Operator::Contains));
        assert_eq!(operators_for(FieldKind::Boolean), &[Operator::Is]);
        assert!(!is_supported(FieldKind::Array, Operator::Equal));
    }

    #[test]
    fn test_inverse_stays_in_table() {
        for kind in FieldKind::ALL {
            for op in operators_for(kind) {
                if let Some(inv) = op.inverse() {
                    assert!(is_supported(kind, inv), "{kind}: {op} -> {inv}");
                }
            }
        }
    }

    #[test]
    fn test_date_labels() {
        assert_eq!(Operator::LessThan.label(FieldKind::Date), "before");
        assert_eq!(Operator::GreaterOrEqual.label(FieldKind::Date), "after_or_equal");
        assert_eq!(Operator::LessThan.label(FieldKind::Number), "less_than");
    }
}
