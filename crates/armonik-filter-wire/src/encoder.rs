//! Filter encoder implementation.

use std::time::Instant;

use armonik_filter::{Disjunction, Expression};

use crate::config::EncoderConfig;
use crate::error::{WireError, WireResult};
use crate::records::Filters;
use crate::result::{EncodedFilter, FilterStats};
use crate::schema::CommonSchema;

/// Turns filter expressions into the records the remote service consumes.
///
/// Every expression is widened to DNF before encoding, so the output is
/// always an `or` record.
///
/// # Example
///
/// ```rust
/// use armonik_filter::Field;
/// use armonik_filter_wire::FilterEncoder;
///
/// let status = Field::status("session.status");
/// let filter = status.equal(1)?.or(status.equal(2)?)?;
///
/// let encoder = FilterEncoder::new();
/// let encoded = encoder.encode(&filter)?;
/// assert_eq!(encoded.stats.conjunctions, 2);
///
/// let json = encoder.encode_json(&filter)?;
/// assert!(json.starts_with(r#"{"or":[{"and":[{"field":"session.status""#));
/// # Ok::<(), armonik_filter_wire::WireError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterEncoder {
    schema: CommonSchema,
    config: EncoderConfig,
}

impl FilterEncoder {
    /// Creates an encoder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder with custom configuration.
    ///
    /// ```rust
    /// use armonik_filter_wire::{EncoderConfig, FilterEncoder};
    ///
    /// let config = EncoderConfig::builder().with_max_conjunctions(32).build();
    /// let encoder = FilterEncoder::with_config(config);
    /// assert_eq!(encoder.config().max_conjunctions, Some(32));
    /// ```
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            schema: CommonSchema::new(),
            config,
        }
    }

    /// Returns a reference to the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes an expression into an `or` record.
    ///
    /// # Errors
    ///
    /// - [`WireError::TooManyConjunctions`] or [`WireError::ConjunctionTooWide`]
    ///   if the DNF exceeds the configured limits.
    /// - [`WireError::UnrepresentableValue`] if a leaf value has no wire form.
    pub fn encode(&self, expr: impl Into<Expression>) -> WireResult<EncodedFilter> {
        let start = Instant::now();
        let dnf = expr.into().to_disjunction();
        self.check_limits(&dnf)?;

        let filters = dnf.to_wire(&self.schema)?;
        let stats = FilterStats::of(&dnf).with_duration(start.elapsed());
        tracing::debug!(
            kind = %stats.kind,
            conjunctions = stats.conjunctions,
            predicates = stats.predicates,
            elapsed_us = stats.duration.as_micros() as u64,
            "encoded filter"
        );
        Ok(EncodedFilter::new(filters, stats))
    }

    /// Encodes an expression and renders the record as JSON.
    ///
    /// Indentation follows [`EncoderConfig::pretty_json`].
    pub fn encode_json(&self, expr: impl Into<Expression>) -> WireResult<String> {
        let filters = self.encode(expr)?.into_filters();
        let json = if self.config.pretty_json {
            serde_json::to_string_pretty(&filters)?
        } else {
            serde_json::to_string(&filters)?
        };
        Ok(json)
    }

    /// Reads an `or` record back into an expression.
    ///
    /// Returns `None` for the match-all record.
    pub fn decode(&self, filters: &Filters) -> WireResult<Option<Disjunction>> {
        self.schema.decode(filters)
    }

    /// Parses a JSON `or` record back into an expression.
    pub fn decode_json(&self, json: &str) -> WireResult<Option<Disjunction>> {
        let filters: Filters = serde_json::from_str(json)?;
        self.decode(&filters)
    }

    fn check_limits(&self, dnf: &Disjunction) -> WireResult<()> {
        if let Some(limit) = self.config.max_conjunctions {
            if dnf.len() > limit {
                tracing::warn!(count = dnf.len(), limit, "filter rejected");
                return Err(WireError::TooManyConjunctions {
                    count: dnf.len(),
                    limit,
                });
            }
        }
        if let Some(limit) = self.config.max_filters_per_conjunction {
            for (index, conjunction) in dnf.conjunctions().iter().enumerate() {
                if conjunction.len() > limit {
                    tracing::warn!(index, count = conjunction.len(), limit, "filter rejected");
                    return Err(WireError::ConjunctionTooWide {
                        index,
                        count: conjunction.len(),
                        limit,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armonik_filter::Field;

    fn number_range() -> Disjunction {
        let n = Field::number("task.retries");
        n.greater_than(0)
            .unwrap()
            .and(n.less_than(5).unwrap())
            .unwrap()
            .or(n.equal(9).unwrap())
            .unwrap()
    }

    #[test]
    fn test_encoder_new_has_no_limits() {
        let encoder = FilterEncoder::new();
        assert!(encoder.config().max_conjunctions.is_none());
        let encoded = encoder.encode(number_range()).unwrap();
        assert_eq!(encoded.filters.or.len(), 2);
        assert_eq!(encoded.filters.or[0].and.len(), 2);
    }

    #[test]
    fn test_encoder_leaf_is_widened() {
        let leaf = Field::text("session.name").equal("x").unwrap();
        let encoded = FilterEncoder::new().encode(&leaf).unwrap();
        assert_eq!(encoded.stats.conjunctions, 1);
        assert_eq!(encoded.stats.predicates, 1);
    }

    #[test]
    fn test_encoder_max_conjunctions() {
        let config = EncoderConfig::builder().with_max_conjunctions(1).build();
        let err = FilterEncoder::with_config(config)
            .encode(number_range())
            .unwrap_err();
        assert!(matches!(
            err,
            WireError::TooManyConjunctions { count: 2, limit: 1 }
        ));
    }

    #[test]
    fn test_encoder_max_filters_per_conjunction() {
        let config = EncoderConfig::builder()
            .with_max_filters_per_conjunction(1)
            .build();
        let err = FilterEncoder::with_config(config)
            .encode(number_range())
            .unwrap_err();
        assert!(matches!(
            err,
            WireError::ConjunctionTooWide {
                index: 0,
                count: 2,
                limit: 1
            }
        ));
    }

    #[test]
    fn test_encoder_pretty_json() {
        let config = EncoderConfig::builder().with_pretty_json(true).build();
        let leaf = Field::boolean("flag").is_true().unwrap();
        let json = FilterEncoder::with_config(config).encode_json(leaf).unwrap();
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_encoder_decode_json_round_trip() {
        let encoder = FilterEncoder::new();
        let dnf = number_range();
        let json = encoder.encode_json(&dnf).unwrap();
        assert_eq!(encoder.decode_json(&json).unwrap(), Some(dnf));
    }

    #[test]
    fn test_encoder_decode_json_invalid() {
        let err = FilterEncoder::new().decode_json("{\"or\": 3}").unwrap_err();
        assert!(matches!(err, WireError::Json(_)));
    }
}
