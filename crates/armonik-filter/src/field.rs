//! Field references and the typed builders hanging off them.

use chrono::{DateTime, Utc};

use crate::ast::SimpleFilter;
use crate::error::FilterResult;
use crate::kind::FieldKind;
use crate::operator::Operator;
use crate::value::FilterValue;

/// Opaque identifier of the remote schema field a predicate targets.
///
/// The algebra never inspects it; the wire schema decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldRef(String);

impl FieldRef {
    /// Wraps a field identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as given by the caller.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FieldRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for FieldRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A field reference paired with its kind.
///
/// This is the entry point for building leaf predicates:
///
/// ```rust
/// use armonik_filter::Field;
///
/// let name = Field::text("session.name");
/// let filter = name.equal("foo").unwrap();
/// assert_eq!(filter.to_string(), "session.name equal \"foo\"");
/// ```
///
/// Every builder returns a new [`SimpleFilter`]; the field is left as is
/// and can be reused for further predicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    field: FieldRef,
    kind: FieldKind,
}

impl Field {
    /// Creates a field handle of the given kind.
    pub fn new(field: impl Into<FieldRef>, kind: FieldKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Text field.
    pub fn text(field: impl Into<FieldRef>) -> Self {
        Self::new(field, FieldKind::Text)
    }

    /// Status field.
    pub fn status(field: impl Into<FieldRef>) -> Self {
        Self::new(field, FieldKind::Status)
    }

    /// Date field.
    pub fn date(field: impl Into<FieldRef>) -> Self {
        Self::new(field, FieldKind::Date)
    }

    /// Number field.
    pub fn number(field: impl Into<FieldRef>) -> Self {
        Self::new(field, FieldKind::Number)
    }

    /// Boolean field.
    pub fn boolean(field: impl Into<FieldRef>) -> Self {
        Self::new(field, FieldKind::Boolean)
    }

    /// Array-of-text field.
    pub fn array(field: impl Into<FieldRef>) -> Self {
        Self::new(field, FieldKind::Array)
    }

    /// The field reference.
    pub fn field(&self) -> &FieldRef {
        &self.field
    }

    /// The field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Builds a predicate with an explicit operator.
    ///
    /// See [`SimpleFilter::construct`] for the checks applied.
    pub fn construct(
        &self,
        value: impl Into<FilterValue>,
        operator: Operator,
    ) -> FilterResult<SimpleFilter> {
        SimpleFilter::construct(self.field.clone(), self.kind, value.into(), operator)
    }

    /// `field == value`.
    ///
    /// On boolean fields this is the `is` operator.
    pub fn equal(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        match self.kind {
            FieldKind::Boolean => self.construct(value, Operator::Is),
            _ => self.construct(value, Operator::Equal),
        }
    }

    /// `field != value`.
    ///
    /// Boolean fields have no such operator; the predicate is built as `is`
    /// with the negated value instead, so a non-boolean value is a type
    /// mismatch as it is for [`Field::equal`].
    pub fn not_equal(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        match (self.kind, value.into()) {
            (FieldKind::Boolean, FilterValue::Boolean(b)) => {
                self.construct(FilterValue::Boolean(!b), Operator::Is)
            }
            (FieldKind::Boolean, value) => self.construct(value, Operator::Is),
            (_, value) => self.construct(value, Operator::NotEqual),
        }
    }

    /// `field < value`, "before" on dates.
    pub fn less_than(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        self.construct(value, Operator::LessThan)
    }

    /// `field <= value`, "before or equal" on dates.
    pub fn less_or_equal(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        self.construct(value, Operator::LessOrEqual)
    }

    /// `field > value`, "after" on dates.
    pub fn greater_than(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        self.construct(value, Operator::GreaterThan)
    }

    /// `field >= value`, "after or equal" on dates.
    pub fn greater_or_equal(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        self.construct(value, Operator::GreaterOrEqual)
    }

    /// Substring match on text, element match on arrays.
    pub fn contains(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        self.construct(value, Operator::Contains)
    }

    /// Negated [`Field::contains`].
    pub fn not_contains(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        self.construct(value, Operator::NotContains)
    }

    /// Text prefix match.
    pub fn starts_with(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        self.construct(value, Operator::StartsWith)
    }

    /// Text suffix match.
    pub fn ends_with(&self, value: impl Into<FilterValue>) -> FilterResult<SimpleFilter> {
        self.construct(value, Operator::EndsWith)
    }

    /// Date shorthand for [`Field::less_than`].
    pub fn before(&self, value: DateTime<Utc>) -> FilterResult<SimpleFilter> {
        self.less_than(value)
    }

    /// Date shorthand for [`Field::greater_than`].
    pub fn after(&self, value: DateTime<Utc>) -> FilterResult<SimpleFilter> {
        self.greater_than(value)
    }

    /// `field is true`.
    pub fn is_true(&self) -> FilterResult<SimpleFilter> {
        self.equal(true)
    }

    /// `field is false`.
    pub fn is_false(&self) -> FilterResult<SimpleFilter> {
        self.equal(false)
    }
}
