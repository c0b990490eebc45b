//! Configuration types for the filter encoder.

/// Configuration for the filter encoder.
///
/// # Example
///
/// ```rust
/// use armonik_filter_wire::EncoderConfig;
///
/// let config = EncoderConfig::builder()
///     .with_max_conjunctions(64)
///     .with_max_filters_per_conjunction(16)
///     .with_pretty_json(true)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Maximum number of conjunctions in one filter (None = unlimited).
    pub max_conjunctions: Option<usize>,
    /// Maximum number of predicates in one conjunction (None = unlimited).
    pub max_filters_per_conjunction: Option<usize>,
    /// Render JSON with indentation.
    pub pretty_json: bool,
}

impl EncoderConfig {
    /// Creates a new builder for EncoderConfig.
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::default()
    }
}

/// Builder for EncoderConfig.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfigBuilder {
    max_conjunctions: Option<usize>,
    max_filters_per_conjunction: Option<usize>,
    pretty_json: bool,
}

impl EncoderConfigBuilder {
    /// Caps the number of conjunctions.
    pub fn with_max_conjunctions(mut self, limit: usize) -> Self {
        self.max_conjunctions = Some(limit);
        self
    }

    /// Caps the number of predicates per conjunction.
    pub fn with_max_filters_per_conjunction(mut self, limit: usize) -> Self {
        self.max_filters_per_conjunction = Some(limit);
        self
    }

    /// Enables or disables indented JSON.
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Builds the EncoderConfig.
    pub fn build(self) -> EncoderConfig {
        EncoderConfig {
            max_conjunctions: self.max_conjunctions,
            max_filters_per_conjunction: self.max_filters_per_conjunction,
            pretty_json: self.pretty_json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_config_default() {
        let config = EncoderConfig::default();
        assert!(config.max_conjunctions.is_none());
        assert!(config.max_filters_per_conjunction.is_none());
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_encoder_config_builder() {
        let config = EncoderConfig::builder()
            .with_max_conjunctions(8)
            .with_max_filters_per_conjunction(4)
            .with_pretty_json(true)
            .build();

        assert_eq!(config.max_conjunctions, Some(8));
        assert_eq!(config.max_filters_per_conjunction, Some(4));
        assert!(config.pretty_json);
    }
}
