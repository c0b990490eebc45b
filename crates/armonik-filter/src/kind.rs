//! Field kinds and the value types they declare.

/// Type category of a remote schema field.
///
/// The kind decides which operators a predicate may use and which value
/// type it must carry. Predicates of different kinds never share a
/// conjunction or a disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKind {
    /// Free-form string field.
    Text,
    /// Enumerated status field; values are externally typed enumerants.
    Status,
    /// Timestamp field.
    Date,
    /// Integer field.
    Number,
    /// Boolean field.
    Boolean,
    /// Array of strings.
    Array,
}

/// Semantic type of a filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueType {
    /// String value.
    Text,
    /// Integer value.
    Number,
    /// Timestamp value.
    Date,
    /// Boolean value.
    Boolean,
    /// Enumerant of an externally defined status enum.
    Status,
}

impl FieldKind {
    /// All kinds, in declaration order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Text,
        FieldKind::Status,
        FieldKind::Date,
        FieldKind::Number,
        FieldKind::Boolean,
        FieldKind::Array,
    ];

    /// Stable lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Status => "status",
            FieldKind::Date => "date",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
        }
    }

    /// Value type the kind declares, if any.
    ///
    /// Arrays are filtered element-wise, so they declare the element type.
    /// Status values come from an enum owned by the remote schema and are
    /// not checked here.
    pub fn value_type(self) -> Option<ValueType> {
        match self {
            FieldKind::Text | FieldKind::Array => Some(ValueType::Text),
            FieldKind::Number => Some(ValueType::Number),
            FieldKind::Date => Some(ValueType::Date),
            FieldKind::Boolean => Some(ValueType::Boolean),
            FieldKind::Status => None,
        }
    }
}

impl ValueType {
    /// Stable lowercase name of the value type.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Date => "date",
            ValueType::Boolean => "boolean",
            ValueType::Status => "status",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_value_types() {
        assert_eq!(FieldKind::Text.value_type(), Some(ValueType::Text));
        assert_eq!(FieldKind::Array.value_type(), Some(ValueType::Text));
        assert_eq!(FieldKind::Number.value_type(), Some(ValueType::Number));
        assert_eq!(FieldKind::Date.value_type(), Some(ValueType::Date));
        assert_eq!(FieldKind::Boolean.value_type(), Some(ValueType::Boolean));
        assert_eq!(FieldKind::Status.value_type(), None);
    }

    #[test]
    fn test_display() {
        let names: Vec<String> = FieldKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            vec!["text", "status", "date", "number", "boolean", "array"]
        );
    }
}
