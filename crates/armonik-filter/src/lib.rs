//! # armonik-filter
//!
//! Typed filter-expression algebra for the ArmoniK query API.
//!
//! This crate builds boolean predicates over typed fields and serializes
//! them into the disjunctive normal form the remote service consumes:
//! an `or` of `and`s of single-field filters. It does not evaluate filters.
//!
//! ## Usage
//!
//! ```rust
//! use armonik_filter::{Expression, Field, FieldKind};
//!
//! let age = Field::number("age");
//!
//! // (age > 10 and age <= 20) or (age == 0)
//! let filter = age
//!     .greater_than(10)?
//!     .and(age.less_or_equal(20)?)?
//!     .or(age.equal(0)?)?;
//!
//! assert_eq!(filter.kind(), FieldKind::Number);
//! assert_eq!(filter.len(), 2);
//! assert_eq!(
//!     filter.to_string(),
//!     "( age greater_than 10 and age less_or_equal 20 ) or ( age equal 0 )"
//! );
//!
//! // Leaves invert through their operator table.
//! let not_zero = age.equal(0)?.invert()?;
//! assert_eq!(not_zero.to_string(), "age not_equal 0");
//! # Ok::<(), armonik_filter::FilterError>(())
//! ```
//!
//! ## Operator Tables
//!
//! | Kind | equal | not_equal | lt / le / gt / ge | contains / not_contains | starts_with / ends_with |
//! |------|-------|-----------|-------------------|-------------------------|-------------------------|
//! | Text | Yes | Yes | - | Yes | Yes |
//! | Status | Yes | Yes | - | - | - |
//! | Date | Yes | Yes | Yes (before / after) | - | - |
//! | Number | Yes | Yes | Yes | - | - |
//! | Boolean | `is` | `is` with negated value | - | - | - |
//! | Array | - | - | - | Yes | - |
//!
//! ## Combining Rules
//!
//! - `and` accepts leaves and conjunctions and always produces a flat
//!   [`Conjunction`].
//! - `or` accepts any expression and always produces a flat [`Disjunction`].
//! - Operands must share a [`FieldKind`].
//! - Only leaves invert; conjunctions and disjunctions have no inverse.
//! - No expression converts to `bool`: use the combinators, not `&&`,
//!   `||` or `!`.
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize` for the expression tree, `Serialize` and
//!   `Deserialize` for fields, kinds, operators and values

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
mod error;
mod field;
mod kind;
mod operator;
mod value;
mod wire;

pub use ast::{Conjunction, Disjunction, Expression, SimpleFilter};
pub use error::{FilterError, FilterResult};
pub use field::{Field, FieldRef};
pub use kind::{FieldKind, ValueType};
pub use operator::{is_supported, operators_for, Operator};
pub use value::FilterValue;
pub use wire::{Wire, WireSchema};
