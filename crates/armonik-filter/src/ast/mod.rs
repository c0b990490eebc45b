//! Expression tree: leaves, conjunctions, disjunctions.
//!
//! ```text
//! Expression
//! ├── Simple(SimpleFilter)        field op value
//! ├── Conjunction([SimpleFilter]) a and b and ...
//! └── Disjunction([Conjunction])  ( a and b ) or ( c ) or ...
//! ```
//!
//! Every node widens losslessly to the next level up. Combinators never
//! mutate their operands; they return new nodes.

mod conjunction;
mod disjunction;
mod simple;

pub use conjunction::Conjunction;
pub use disjunction::Disjunction;
pub use simple::SimpleFilter;

use crate::error::{FilterError, FilterResult};
use crate::kind::FieldKind;

/// Any filter expression.
///
/// Expressions are never truthy. Rust offers no implicit boolean conversion,
/// and the `TryFrom` conversions to `bool` defined here exist only to fail
/// with [`FilterError::BooleanCoercion`]:
///
/// ```compile_fail
/// use armonik_filter::{Expression, Field};
///
/// let expr: Expression = Field::number("age").equal(1).unwrap().into();
/// if expr {}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Expression {
    /// A leaf predicate.
    Simple(SimpleFilter),
    /// An AND-group of leaves.
    Conjunction(Conjunction),
    /// An OR-group of conjunctions.
    Disjunction(Disjunction),
}

impl Expression {
    /// Field kind of the expression.
    pub fn kind(&self) -> FieldKind {
        match self {
            Expression::Simple(f) => f.kind(),
            Expression::Conjunction(c) => c.kind(),
            Expression::Disjunction(d) => d.kind(),
        }
    }

    /// ANDs two expressions after widening both to conjunctions.
    ///
    /// # Errors
    ///
    /// - [`FilterError::CannotNarrow`] if either side is a disjunction.
    /// - [`FilterError::KindMismatch`] if the kinds differ.
    pub fn and(&self, other: impl Into<Expression>) -> FilterResult<Conjunction> {
        let other = other.into();
        let left = self.to_conjunction()?;
        let right = other.to_conjunction()?;
        left.and(right)
    }

    /// ORs two expressions after widening `self` to a disjunction.
    ///
    /// # Errors
    ///
    /// [`FilterError::KindMismatch`] if the kinds differ.
    pub fn or(&self, other: impl Into<Expression>) -> FilterResult<Disjunction> {
        self.to_disjunction().or(other)
    }

    /// Inverts a leaf; composite expressions have no inverse.
    ///
    /// # Errors
    ///
    /// [`FilterError::NoInverse`] for composites and for leaves whose
    /// operator has no complement.
    pub fn invert(&self) -> FilterResult<Expression> {
        match self {
            Expression::Simple(f) => f.invert().map(Expression::Simple),
            Expression::Conjunction(c) => c.invert(),
            Expression::Disjunction(d) => d.invert(),
        }
    }

    /// Widens to a conjunction.
    ///
    /// # Errors
    ///
    /// [`FilterError::CannotNarrow`] for disjunctions.
    pub fn to_conjunction(&self) -> FilterResult<Conjunction> {
        match self {
            Expression::Simple(f) => Ok(f.to_conjunction()),
            Expression::Conjunction(c) => Ok(c.clone()),
            Expression::Disjunction(d) => d.to_conjunction(),
        }
    }

    /// Widens to a disjunction; the canonical DNF shape.
    pub fn to_disjunction(&self) -> Disjunction {
        match self {
            Expression::Simple(f) => f.to_disjunction(),
            Expression::Conjunction(c) => c.to_disjunction(),
            Expression::Disjunction(d) => d.clone(),
        }
    }

    /// Returns the leaf if this is one.
    pub fn as_simple(&self) -> Option<&SimpleFilter> {
        match self {
            Expression::Simple(f) => Some(f),
            _ => None,
        }
    }

    /// Returns the conjunction if this is one.
    pub fn as_conjunction(&self) -> Option<&Conjunction> {
        match self {
            Expression::Conjunction(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the disjunction if this is one.
    pub fn as_disjunction(&self) -> Option<&Disjunction> {
        match self {
            Expression::Disjunction(d) => Some(d),
            _ => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<SimpleFilter> for Expression {
    fn from(filter: SimpleFilter) -> Self {
        Expression::Simple(filter)
    }
}

impl From<&SimpleFilter> for Expression {
    fn from(filter: &SimpleFilter) -> Self {
        Expression::Simple(filter.clone())
    }
}

impl From<Conjunction> for Expression {
    fn from(conjunction: Conjunction) -> Self {
        Expression::Conjunction(conjunction)
    }
}

impl From<&Conjunction> for Expression {
    fn from(conjunction: &Conjunction) -> Self {
        Expression::Conjunction(conjunction.clone())
    }
}

impl From<Disjunction> for Expression {
    fn from(disjunction: Disjunction) -> Self {
        Expression::Disjunction(disjunction)
    }
}

impl From<&Disjunction> for Expression {
    fn from(disjunction: &Disjunction) -> Self {
        Expression::Disjunction(disjunction.clone())
    }
}

impl From<&Expression> for Expression {
    fn from(expression: &Expression) -> Self {
        expression.clone()
    }
}

// =============================================================================
// Boolean coercion guard
// =============================================================================

macro_rules! refuse_bool {
    ($($node:ty),*) => {
        $(
            impl TryFrom<&$node> for bool {
                type Error = FilterError;

                fn try_from(_: &$node) -> Result<Self, Self::Error> {
                    Err(FilterError::BooleanCoercion)
                }
            }
        )*
    };
}

refuse_bool!(Expression, SimpleFilter, Conjunction, Disjunction);

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Simple(s) => write!(f, "{}", s),
            Expression::Conjunction(c) => write!(f, "{}", c),
            Expression::Disjunction(d) => write!(f, "{}", d),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
