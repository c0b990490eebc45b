//! AND-groups of leaf predicates.

use crate::error::{FilterError, FilterResult};
use crate::kind::FieldKind;

use super::{Disjunction, Expression, SimpleFilter};

/// Ordered AND-group of predicates sharing one field kind.
///
/// Never empty. Member order is construction order and is what the wire
/// record lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Conjunction {
    kind: FieldKind,
    filters: Vec<SimpleFilter>,
}

impl Conjunction {
    pub(crate) fn singleton(filter: SimpleFilter) -> Self {
        Self {
            kind: filter.kind(),
            filters: vec![filter],
        }
    }

    /// Builds a conjunction from a first predicate and further ones.
    ///
    /// # Errors
    ///
    /// [`FilterError::KindMismatch`] if any predicate has another kind than
    /// `first`.
    pub fn from_filters(
        first: SimpleFilter,
        rest: impl IntoIterator<Item = SimpleFilter>,
    ) -> FilterResult<Self> {
        rest.into_iter()
            .try_fold(Self::singleton(first), |acc, filter| acc.and(filter))
    }

    /// Field kind shared by all members.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Members, in order.
    pub fn filters(&self) -> &[SimpleFilter] {
        &self.filters
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Always false; kept for API symmetry with [`Conjunction::len`].
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// ANDs in a predicate or a conjunction of the same kind.
    ///
    /// A predicate is appended; a conjunction has its members appended, so
    /// chains of `and` stay flat.
    ///
    /// # Errors
    ///
    /// - [`FilterError::KindMismatch`] if `other` has another kind.
    /// - [`FilterError::CannotNarrow`] if `other` is a disjunction.
    pub fn and(&self, other: impl Into<Expression>) -> FilterResult<Conjunction> {
        let other = other.into();
        check_kind(self.kind, other.kind())?;

        let mut filters = self.filters.clone();
        match other {
            Expression::Simple(filter) => filters.push(filter),
            Expression::Conjunction(conjunction) => filters.extend(conjunction.filters),
            Expression::Disjunction(_) => return Err(FilterError::CannotNarrow),
        }

        tracing::trace!(kind = %self.kind, members = filters.len(), "conjunction extended");
        Ok(Self {
            kind: self.kind,
            filters,
        })
    }

    /// ORs with any expression of the same kind, after widening `self`.
    pub fn or(&self, other: impl Into<Expression>) -> FilterResult<Disjunction> {
        self.to_disjunction().or(other)
    }

    /// Always fails.
    ///
    /// Negating a conjunction would need a De Morgan expansion into a
    /// disjunction of inverted predicates, which is not part of this
    /// algebra. Only leaves can be inverted.
    ///
    /// # Errors
    ///
    /// [`FilterError::NoInverse`], unconditionally.
    pub fn invert(&self) -> FilterResult<Expression> {
        Err(FilterError::NoInverse {
            target: format!("{} conjunction", self.kind),
        })
    }

    /// Returns a copy of `self`.
    pub fn to_conjunction(&self) -> Conjunction {
        self.clone()
    }

    /// Widens to a singleton disjunction.
    pub fn to_disjunction(&self) -> Disjunction {
        Disjunction::singleton(self.clone())
    }
}

pub(crate) fn check_kind(left: FieldKind, right: FieldKind) -> FilterResult<()> {
    if left == right {
        Ok(())
    } else {
        tracing::debug!(%left, %right, "rejected mixed-kind combination");
        Err(FilterError::KindMismatch { left, right })
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{}", filter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn ages() -> (SimpleFilter, SimpleFilter, SimpleFilter) {
        let age = Field::number("age");
        (
            age.greater_than(10).unwrap(),
            age.less_or_equal(20).unwrap(),
            age.not_equal(15).unwrap(),
        )
    }

    #[test]
    fn test_and_stays_flat() {
        let (a, b, c) = ages();
        let abc = a.and(&b).unwrap().and(&c).unwrap();
        assert_eq!(abc.filters(), &[a.clone(), b.clone(), c.clone()]);

        let grouped = a.and(b.and(&c).unwrap()).unwrap();
        assert_eq!(grouped, abc);
    }

    #[test]
    fn test_and_keeps_left_to_right_order() {
        let (a, b, c) = ages();
        let bc = b.and(&c).unwrap();
        let result = a.and(&bc).unwrap();
        assert_eq!(result.filters(), &[a, b, c]);
    }

    #[test]
    fn test_and_kind_mismatch() {
        let (a, _, _) = ages();
        let name = Field::text("name").equal("x").unwrap();
        let err = a.to_conjunction().and(&name).unwrap_err();
        assert_eq!(
            err,
            FilterError::KindMismatch {
                left: FieldKind::Number,
                right: FieldKind::Text,
            }
        );
    }

    #[test]
    fn test_and_with_disjunction_cannot_narrow() {
        let (a, b, c) = ages();
        let d = b.or(&c).unwrap();
        assert_eq!(a.and(d).unwrap_err(), FilterError::CannotNarrow);
    }

    #[test]
    fn test_from_filters() {
        let (a, b, c) = ages();
        let conj = Conjunction::from_filters(a.clone(), [b.clone(), c.clone()]).unwrap();
        assert_eq!(conj.filters(), &[a.clone(), b, c]);

        let name = Field::text("name").equal("x").unwrap();
        assert!(Conjunction::from_filters(a, [name]).is_err());
    }

    #[test]
    fn test_invert_is_undefined() {
        let (a, b, _) = ages();
        let err = a.and(&b).unwrap().invert().unwrap_err();
        assert_eq!(
            err,
            FilterError::NoInverse {
                target: "number conjunction".to_string()
            }
        );
    }

    #[test]
    fn test_display() {
        let (a, b, _) = ages();
        assert_eq!(
            a.and(&b).unwrap().to_string(),
            "age greater_than 10 and age less_or_equal 20"
        );
    }

    #[test]
    fn test_inputs_untouched_on_failure() {
        let (a, b, _) = ages();
        let conj = a.and(&b).unwrap();
        let before = conj.clone();
        let _ = conj.and(Field::text("name").equal("x").unwrap());
        assert_eq!(conj, before);
    }
}
