//! OR-groups of conjunctions: the DNF root.

use crate::error::{FilterError, FilterResult};
use crate::kind::FieldKind;

use super::conjunction::check_kind;
use super::{Conjunction, Expression};

/// Ordered OR-group of conjunctions sharing one field kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Disjunction {
    kind: FieldKind,
    conjunctions: Vec<Conjunction>,
}

impl Disjunction {
    pub(crate) fn singleton(conjunction: Conjunction) -> Self {
        Self {
            kind: conjunction.kind(),
            conjunctions: vec![conjunction],
        }
    }

    /// Field kind shared by all members.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Members, in order.
    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.conjunctions
    }

    /// Number of member conjunctions.
    pub fn len(&self) -> usize {
        self.conjunctions.len()
    }

    /// Always false; kept for API symmetry with [`Disjunction::len`].
    pub fn is_empty(&self) -> bool {
        self.conjunctions.is_empty()
    }

    /// Total number of leaf predicates across all members.
    pub fn predicate_count(&self) -> usize {
        self.conjunctions.iter().map(Conjunction::len).sum()
    }

    /// ORs in any expression of the same kind.
    ///
    /// A predicate becomes a new singleton conjunction, a conjunction is
    /// appended as is, and a disjunction has its members appended.
    ///
    /// # Errors
    ///
    /// [`FilterError::KindMismatch`] if `other` has another kind.
    pub fn or(&self, other: impl Into<Expression>) -> FilterResult<Disjunction> {
        let other = other.into();
        check_kind(self.kind, other.kind())?;

        let mut conjunctions = self.conjunctions.clone();
        match other {
            Expression::Simple(filter) => conjunctions.push(filter.to_conjunction()),
            Expression::Conjunction(conjunction) => conjunctions.push(conjunction),
            Expression::Disjunction(disjunction) => conjunctions.extend(disjunction.conjunctions),
        }

        tracing::trace!(kind = %self.kind, members = conjunctions.len(), "disjunction extended");
        Ok(Self {
            kind: self.kind,
            conjunctions,
        })
    }

    /// Always fails: a disjunction cannot be expressed as one conjunction.
    ///
    /// # Errors
    ///
    /// [`FilterError::CannotNarrow`], unconditionally.
    pub fn to_conjunction(&self) -> FilterResult<Conjunction> {
        Err(FilterError::CannotNarrow)
    }

    /// Returns a copy of `self`.
    pub fn to_disjunction(&self) -> Disjunction {
        self.clone()
    }

    /// Always fails; only leaves can be inverted.
    ///
    /// # Errors
    ///
    /// [`FilterError::NoInverse`], unconditionally.
    pub fn invert(&self) -> FilterResult<Expression> {
        Err(FilterError::NoInverse {
            target: format!("{} disjunction", self.kind),
        })
    }
}

impl std::fmt::Display for Disjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, conjunction) in self.conjunctions.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            write!(f, "( {} )", conjunction)?;
        }
        Ok(())
    }
}
