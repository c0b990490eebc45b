//! [`WireSchema`] implementation for the common filter records.

use armonik_filter::{
    Conjunction, Disjunction, Field, FieldKind, FieldRef, FilterError, FilterValue, Operator,
    SimpleFilter, WireSchema,
};

use crate::error::{WireError, WireResult};
use crate::records::{
    FilterArray, FilterArrayOperator, FilterBoolean, FilterDate, FilterDateOperator, FilterField,
    FilterKind, FilterNumber, FilterNumberOperator, FilterStatus, FilterStatusOperator,
    FilterString, FilterStringOperator, Filters, FiltersAnd, WireOperator,
};

/// Builds and reads the common filter records.
///
/// Field references are carried verbatim in the `field` member.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonSchema;

impl CommonSchema {
    /// Creates the schema.
    pub fn new() -> Self {
        Self
    }

    /// Reads a single-field record back into a leaf predicate.
    pub fn decode_field(&self, record: &FilterField) -> WireResult<SimpleFilter> {
        let field = Field::new(record.field.as_str(), record.filter.field_kind());
        let filter = match &record.filter {
            FilterKind::String(f) => field.construct(f.value.as_str(), f.operator.to_operator()),
            FilterKind::Number(f) => field.construct(f.value, f.operator.to_operator()),
            FilterKind::Date(f) => field.construct(f.value, f.operator.to_operator()),
            FilterKind::Boolean(f) => field.construct(f.value, Operator::Is),
            FilterKind::Status(f) => {
                field.construct(FilterValue::Status(f.value), f.operator.to_operator())
            }
            FilterKind::Array(f) => field.construct(f.value.as_str(), f.operator.to_operator()),
        }?;
        Ok(filter)
    }

    /// Reads an `or` record back into an expression.
    ///
    /// Returns `None` for the match-all record.
    ///
    /// # Errors
    ///
    /// - [`WireError::EmptyConjunction`] for an `and` record without member.
    /// - [`WireError::Filter`] if the records mix field kinds or carry an
    ///   operator the algebra rejects.
    pub fn decode(&self, filters: &Filters) -> WireResult<Option<Disjunction>> {
        let mut result: Option<Disjunction> = None;
        for (index, and) in filters.or.iter().enumerate() {
            let conjunction = self.decode_conjunction(index, and)?;
            result = Some(match result {
                None => conjunction.to_disjunction(),
                Some(d) => d.or(conjunction)?,
            });
        }
        Ok(result)
    }

    fn decode_conjunction(&self, index: usize, and: &FiltersAnd) -> WireResult<Conjunction> {
        let mut members = and.and.iter();
        let first = match members.next() {
            Some(record) => self.decode_field(record)?,
            None => return Err(WireError::EmptyConjunction { index }),
        };
        let rest = members
            .map(|record| self.decode_field(record))
            .collect::<WireResult<Vec<_>>>()?;
        Ok(Conjunction::from_filters(first, rest)?)
    }
}

fn wire_operator<O: WireOperator>(op: Operator) -> WireResult<O> {
    O::from_operator(op).ok_or(WireError::Filter(FilterError::UnsupportedOperator {
        kind: O::KIND,
        operator: op,
    }))
}

fn unrepresentable(field: &FieldRef, kind: FieldKind, value: &FilterValue) -> WireError {
    tracing::debug!(field = %field, %kind, %value, "value has no wire representation");
    WireError::UnrepresentableValue {
        field: field.to_string(),
        kind,
        value: value.to_string(),
    }
}

fn record(field: &FieldRef, filter: FilterKind) -> FilterField {
    FilterField {
        field: field.to_string(),
        filter,
    }
}

impl WireSchema for CommonSchema {
    type Filter = FilterField;
    type Conjunction = FiltersAnd;
    type Disjunction = Filters;
    type Error = WireError;

    fn text_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> WireResult<FilterField> {
        let value = value
            .as_text()
            .ok_or_else(|| unrepresentable(field, FieldKind::Text, value))?;
        Ok(record(
            field,
            FilterKind::String(FilterString {
                value: value.to_string(),
                operator: wire_operator::<FilterStringOperator>(operator)?,
            }),
        ))
    }

    fn status_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> WireResult<FilterField> {
        let value = value
            .as_status()
            .ok_or_else(|| unrepresentable(field, FieldKind::Status, value))?;
        Ok(record(
            field,
            FilterKind::Status(FilterStatus {
                value,
                operator: wire_operator::<FilterStatusOperator>(operator)?,
            }),
        ))
    }

    fn date_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> WireResult<FilterField> {
        let value = value
            .as_date()
            .ok_or_else(|| unrepresentable(field, FieldKind::Date, value))?;
        Ok(record(
            field,
            FilterKind::Date(FilterDate {
                value,
                operator: wire_operator::<FilterDateOperator>(operator)?,
            }),
        ))
    }

    fn number_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> WireResult<FilterField> {
        let value = value
            .as_number()
            .ok_or_else(|| unrepresentable(field, FieldKind::Number, value))?;
        Ok(record(
            field,
            FilterKind::Number(FilterNumber {
                value,
                operator: wire_operator::<FilterNumberOperator>(operator)?,
            }),
        ))
    }

    fn boolean_filter(&self, field: &FieldRef, value: &FilterValue) -> WireResult<FilterField> {
        let value = value
            .as_bool()
            .ok_or_else(|| unrepresentable(field, FieldKind::Boolean, value))?;
        Ok(record(field, FilterKind::Boolean(FilterBoolean { value })))
    }

    fn array_filter(
        &self,
        field: &FieldRef,
        operator: Operator,
        value: &FilterValue,
    ) -> WireResult<FilterField> {
        let value = value
            .as_text()
            .ok_or_else(|| unrepresentable(field, FieldKind::Array, value))?;
        Ok(record(
            field,
            FilterKind::Array(FilterArray {
                value: value.to_string(),
                operator: wire_operator::<FilterArrayOperator>(operator)?,
            }),
        ))
    }

    fn conjunction(&self, and: Vec<FilterField>) -> FiltersAnd {
        FiltersAnd { and }
    }

    fn disjunction(&self, or: Vec<FiltersAnd>) -> Filters {
        Filters { or }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_date_operators_map_to_before_after() {
        let created = Field::date("session.created_at");
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let leaf = created.greater_or_equal(at).unwrap();
        let record = leaf.to_wire(&CommonSchema).unwrap();
        assert_eq!(
            record.filter,
            FilterKind::Date(FilterDate {
                value: at,
                operator: FilterDateOperator::AfterOrEqual,
            })
        );
    }

    #[test]
    fn test_boolean_record_has_no_operator() {
        let leaf = Field::boolean("session.client_submission").is_false().unwrap();
        let record = leaf.to_wire(&CommonSchema).unwrap();
        assert_eq!(
            record.filter,
            FilterKind::Boolean(FilterBoolean { value: false })
        );
    }

    #[test]
    fn test_status_accepts_integers() {
        let leaf = Field::status("session.status").not_equal(4).unwrap();
        let record = leaf.to_wire(&CommonSchema).unwrap();
        assert_eq!(
            record.filter,
            FilterKind::Status(FilterStatus {
                value: 4,
                operator: FilterStatusOperator::NotEqual,
            })
        );
    }

    #[test]
    fn test_status_rejects_text() {
        let leaf = Field::status("session.status").equal("running").unwrap();
        let err = leaf.to_wire(&CommonSchema).unwrap_err();
        assert!(matches!(
            err,
            WireError::UnrepresentableValue {
                kind: FieldKind::Status,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_field() {
        let leaf = Field::array("session.partition_ids")
            .not_contains("gpu")
            .unwrap();
        let record = leaf.to_wire(&CommonSchema).unwrap();
        assert_eq!(CommonSchema.decode_field(&record).unwrap(), leaf);
    }

    #[test]
    fn test_decode_match_all() {
        assert_eq!(CommonSchema.decode(&Filters::match_all()).unwrap(), None);
    }

    #[test]
    fn test_decode_empty_conjunction() {
        let filters = Filters {
            or: vec![FiltersAnd::default()],
        };
        assert!(matches!(
            CommonSchema.decode(&filters),
            Err(WireError::EmptyConjunction { index: 0 })
        ));
    }

    #[test]
    fn test_decode_mixed_kinds() {
        let text = Field::text("name").equal("a").unwrap();
        let number = Field::number("age").equal(1).unwrap();
        let filters = Filters {
            or: vec![FiltersAnd {
                and: vec![
                    text.to_wire(&CommonSchema).unwrap(),
                    number.to_wire(&CommonSchema).unwrap(),
                ],
            }],
        };
        assert!(matches!(
            CommonSchema.decode(&filters),
            Err(WireError::Filter(FilterError::KindMismatch { .. }))
        ));
    }
}
