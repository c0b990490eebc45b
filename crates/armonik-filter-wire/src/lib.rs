//! # armonik-filter-wire
//!
//! Wire records and DNF encoder for [`armonik_filter`] expressions.
//!
//! The remote service takes every filter as an `or` of `and`s of
//! single-field records. This crate provides those records with their JSON
//! mapping, a [`WireSchema`](armonik_filter::WireSchema) implementation
//! building them, and an encoder that widens any expression to that shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use armonik_filter::Field;
//! use armonik_filter_wire::FilterEncoder;
//!
//! let name = Field::text("session.name");
//! let filter = name.equal("foo")?.or(name.starts_with("bar")?)?;
//!
//! let json = FilterEncoder::new().encode_json(&filter)?;
//! assert_eq!(
//!     json,
//!     concat!(
//!         r#"{"or":["#,
//!         r#"{"and":[{"field":"session.name","filterString":{"value":"foo","operator":"FILTER_STRING_OPERATOR_EQUAL"}}]},"#,
//!         r#"{"and":[{"field":"session.name","filterString":{"value":"bar","operator":"FILTER_STRING_OPERATOR_STARTS_WITH"}}]}"#,
//!         r#"]}"#,
//!     )
//! );
//! # Ok::<(), armonik_filter_wire::WireError>(())
//! ```
//!
//! ## Record Mapping
//!
//! | Field kind | Record | Operators |
//! |------------|--------|-----------|
//! | Text | `filterString` | equal, not equal, contains, not contains, starts with, ends with |
//! | Status | `filterStatus` | equal, not equal |
//! | Date | `filterDate` | equal, not equal, before, before or equal, after or equal, after |
//! | Number | `filterNumber` | equal, not equal, less than, less or equal, greater or equal, greater than |
//! | Boolean | `filterBoolean` | none (`is`) |
//! | Array | `filterArray` | contains, not contains |
//!
//! An empty `or` record matches everything; see [`Filters::match_all`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod encoder;
mod error;
mod records;
mod result;
mod schema;

pub use config::{EncoderConfig, EncoderConfigBuilder};
pub use encoder::FilterEncoder;
pub use error::{WireError, WireResult};
pub use records::{
    FilterArray, FilterArrayOperator, FilterBoolean, FilterDate, FilterDateOperator, FilterField,
    FilterKind, FilterNumber, FilterNumberOperator, FilterStatus, FilterStatusOperator,
    FilterString, FilterStringOperator, Filters, FiltersAnd, WireOperator,
};
pub use result::{EncodedFilter, FilterStats};
pub use schema::CommonSchema;
