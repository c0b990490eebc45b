//! Serialization of expressions into wire records.
//!
//! The record types belong to the remote schema, not to this crate. A
//! [`WireSchema`] implementation supplies one factory per field kind plus
//! the `and` and `or` wrappers; the expression tree drives it.
//!
//! # Example: a schema rendering records as strings
//!
//! ```rust
//! use armonik_filter::{Field, FieldRef, FilterValue, Operator, WireSchema};
//!
//! struct Plain;
//!
//! impl WireSchema for Plain {
//!     type Filter = String;
//!     type Conjunction = Vec<String>;
//!     type Disjunction = Vec<Vec<String>>;
//!     type Error = std::convert::Infallible;
//!
//!     fn text_filter(&self, f: &FieldRef, op: Operator, v: &FilterValue) -> Result<String, Self::Error> {
//!         Ok(format!("{f} {op} {v}"))
//!     }
//!     fn status_filter(&self, f: &FieldRef, op: Operator, v: &FilterValue) -> Result<String, Self::Error> {
//!         Ok(format!("{f} {op} {v}"))
//!     }
//!     fn date_filter(&self, f: &FieldRef, op: Operator, v: &FilterValue) -> Result<String, Self::Error> {
//!         Ok(format!("{f} {op} {v}"))
//!     }
//!     fn number_filter(&self, f: &FieldRef, op: Operator, v: &FilterValue) -> Result<String, Self::Error> {
//!         Ok(format!("{f} {op} {v}"))
//!     }
//!     fn boolean_filter(&self, f: &FieldRef, v: &FilterValue) -> Result<String, Self::Error> {
//!         Ok(format!("{f} is {v}"))
//!     }
//!     fn array_filter(&self, f: &FieldRef, op: Operator, v: &FilterValue) -> Result<String, Self::Error> {
//!         Ok(format!("{f} {op} {v}"))
//!     }
//!     fn conjunction(&self, and: Vec<String>) -> Vec<String> {
//!         and
//!     }
//!     fn disjunction(&self, or: Vec<Vec<String>>) -> Vec<Vec<String>> {
//!         or
//!     }
//! }
//!
//! let n = Field::number("n");
//! let expr = n.greater_than(1).unwrap().and(n.less_than(5).unwrap()).unwrap();
//! let dnf = expr.to_disjunction().to_wire(&Plain).unwrap();
//! assert_eq!(dnf, vec![vec!["n greater_than 1", "n less_than 5"]]);
//! ```

use crate::ast::{Conjunction, Disjunction, Expression, SimpleFilter};
use crate::field::FieldRef;
use crate::kind::FieldKind;
use crate::operator::Operator;
use crate::value::FilterValue;

/// Record factories of the remote filter schema.
///
/// The leaf factories are only ever called with an operator that is legal
/// for their kind and a value of the declared type (any value for status).
/// `conjunction` and `disjunction` receive members in construction order.
pub trait WireSchema {
    /// Single-field record: `{ field, filter_<kind> }`.
    type Filter;
    /// `and` record: ordered single-field records.
    type Conjunction;
    /// `or` record: ordered `and` records.
    type Disjunction;
    /// Failure to represent a leaf in this schema.
    type Error;

    /// Text record with `{ value, operator }`.
    fn text_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> Result<Self::Filter, Self::Error>;

    /// Status record with `{ value, operator }`.
    fn status_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> Result<Self::Filter, Self::Error>;

    /// Date record with `{ value, operator }`.
    fn date_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> Result<Self::Filter, Self::Error>;

    /// Number record with `{ value, operator }`.
    fn number_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> Result<Self::Filter, Self::Error>;

    /// Boolean record with `{ value }`; the operator is implicitly `is`.
    fn boolean_filter(
        &self,
        field: &FieldRef,
        value: &FilterValue,
    ) -> Result<Self::Filter, Self::Error>;

    /// Array record with `{ value, operator }`.
    fn array_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> Result<Self::Filter, Self::Error>;

    /// Wraps single-field records into an `and` record.
    fn conjunction(&self, and: Vec<Self::Filter>) -> Self::Conjunction;

    /// Wraps `and` records into an `or` record.
    fn disjunction(&self, or: Vec<Self::Conjunction>) -> Self::Disjunction;
}

/// The record produced by [`Expression::to_wire`], one per node type.
pub enum Wire<S: WireSchema> {
    /// From a leaf.
    Filter(S::Filter),
    /// From a conjunction.
    Conjunction(S::Conjunction),
    /// From a disjunction.
    Disjunction(S::Disjunction),
}

impl<S: WireSchema> Wire<S> {
    /// Returns the single-field record if this came from a leaf.
    pub fn into_filter(self) -> Option<S::Filter> {
        match self {
            Wire::Filter(f) => Some(f),
            _ => None,
        }
    }

    /// Returns the `and` record if this came from a conjunction.
    pub fn into_conjunction(self) -> Option<S::Conjunction> {
        match self {
            Wire::Conjunction(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the `or` record if this came from a disjunction.
    pub fn into_disjunction(self) -> Option<S::Disjunction> {
        match self {
            Wire::Disjunction(d) => Some(d),
            _ => None,
        }
    }
}

impl<S: WireSchema> std::fmt::Debug for Wire<S>
where
    S::Filter: std::fmt::Debug,
    S::Conjunction: std::fmt::Debug,
    S::Disjunction: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Wire::Filter(r) => f.debug_tuple("Filter").field(r).finish(),
            Wire::Conjunction(r) => f.debug_tuple("Conjunction").field(r).finish(),
            Wire::Disjunction(r) => f.debug_tuple("Disjunction").field(r).finish(),
        }
    }
}

impl SimpleFilter {
    /// Builds the single-field record for this leaf.
    pub fn to_wire<S: WireSchema>(&self, schema: &S) -> Result<S::Filter, S::Error> {
        let (field, op, value) = (self.field(), self.operator(), self.value());
        match self.kind() {
            FieldKind::Text => schema.text_filter(field, op, value),
            FieldKind::Status => schema.status_filter(field, op, value),
            FieldKind::Date => schema.date_filter(field, op, value),
            FieldKind::Number => schema.number_filter(field, op, value),
            FieldKind::Boolean => schema.boolean_filter(field, value),
            FieldKind::Array => schema.array_filter(field, op, value),
        }
    }
}

impl Conjunction {
    /// Builds the `and` record listing every member in order.
    pub fn to_wire<S: WireSchema>(&self, schema: &S) -> Result<S::Conjunction, S::Error> {
        let and = self
            .filters()
            .iter()
            .map(|f| f.to_wire(schema))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(schema.conjunction(and))
    }
}

impl Disjunction {
    /// Builds the `or` record listing every member in order.
    pub fn to_wire<S: WireSchema>(&self, schema: &S) -> Result<S::Disjunction, S::Error> {
        let or = self
            .conjunctions()
            .iter()
            .map(|c| c.to_wire(schema))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(schema.disjunction(or))
    }
}

impl Expression {
    /// Builds the record matching this node's type.
    pub fn to_wire<S: WireSchema>(&self, schema: &S) -> Result<Wire<S>, S::Error> {
        Ok(match self {
            Expression::Simple(f) => Wire::Filter(f.to_wire(schema)?),
            Expression::Conjunction(c) => Wire::Conjunction(c.to_wire(schema)?),
            Expression::Disjunction(d) => Wire::Disjunction(d.to_wire(schema)?),
        })
    }

    /// Widens to DNF and builds the `or` record.
    ///
    /// This is the shape the remote service expects for a whole filter.
    pub fn to_dnf_wire<S: WireSchema>(&self, schema: &S) -> Result<S::Disjunction, S::Error> {
        self.to_disjunction().to_wire(schema)
    }
}
