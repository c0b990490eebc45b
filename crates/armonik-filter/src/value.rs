//! Values carried by leaf predicates.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::kind::ValueType;

/// Right-hand operand of a leaf predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FilterValue {
    /// String value (text fields and array elements).
    Text(String),
    /// Integer value.
    Number(i64),
    /// Timestamp value.
    Date(DateTime<Utc>),
    /// Boolean value.
    Boolean(bool),
    /// Wire integer of a status enumerant.
    Status(i32),
}

impl FilterValue {
    /// Semantic type of the value.
    pub fn value_type(&self) -> ValueType {
        match self {
            FilterValue::Text(_) => ValueType::Text,
            FilterValue::Number(_) => ValueType::Number,
            FilterValue::Date(_) => ValueType::Date,
            FilterValue::Boolean(_) => ValueType::Boolean,
            FilterValue::Status(_) => ValueType::Status,
        }
    }

    /// Returns the string if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a number value.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the timestamp if this is a date value.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FilterValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer form of the value, for status enumerants.
    ///
    /// Numbers within `i32` range are narrowed as well; any other value has
    /// no enumerant form.
    pub fn as_status(&self) -> Option<i32> {
        match self {
            FilterValue::Status(s) => Some(*s),
            FilterValue::Number(n) => i32::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Number(i64::from(value))
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::Date(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Text(s) => write!(f, "\"{}\"", s),
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Date(d) => write!(f, "{}", d.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            FilterValue::Boolean(b) => write!(f, "{}", b),
            FilterValue::Status(s) => write!(f, "#{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_conversions() {
        assert_eq!(FilterValue::from("a"), FilterValue::Text("a".to_string()));
        assert_eq!(FilterValue::from(3_i32), FilterValue::Number(3));
        assert_eq!(FilterValue::from(true).value_type(), ValueType::Boolean);
    }

    #[test]
    fn test_display() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(FilterValue::from("foo").to_string(), "\"foo\"");
        assert_eq!(FilterValue::Number(-4).to_string(), "-4");
        assert_eq!(FilterValue::Date(date).to_string(), "2024-05-01T12:00:00Z");
        assert_eq!(FilterValue::Status(2).to_string(), "#2");
    }

    #[test]
    fn test_as_status_accepts_integers() {
        assert_eq!(FilterValue::Status(4).as_status(), Some(4));
        assert_eq!(FilterValue::Number(7).as_status(), Some(7));
        assert_eq!(FilterValue::Number(i64::MAX).as_status(), None);
        assert_eq!(FilterValue::from("x").as_status(), None);
        assert_eq!(FilterValue::Boolean(true).as_status(), None);
    }
}
