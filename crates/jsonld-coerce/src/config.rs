/*!
 * Coercion configuration options
 */

use serde::{Deserialize, Serialize};

/// Options controlling how datatype IRIs are recognised.
///
/// The defaults reproduce plain JSON-LD type coercion: only full XSD IRIs are
/// recognised and anything else passes through untouched. Deserializing from
/// an empty object yields the defaults, so the struct can be embedded in a host
/// application's own config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoercerConfig {
    /// Fail on an IRI inside the XSD namespace that has no conversion rule
    /// (`xsd:integer`, `xsd:gYear`, ...) instead of passing the literal through.
    pub strict_datatypes: bool,

    /// Also recognise compact IRIs using the conventional `xsd:` prefix, as
    /// left behind by compaction against a context that defines it.
    pub accept_compact_iris: bool,
}

impl CoercerConfig {
    /// Returns a builder for `CoercerConfig`
    /// Example:
    /// ```
    /// use jsonld_coerce::config::CoercerConfig;
    ///
    /// let config = CoercerConfig::builder().with_strict_datatypes(true).build();
    /// assert!(config.strict_datatypes);
    /// ```
    pub fn builder() -> CoercerConfigBuilder {
        CoercerConfigBuilder::default()
    }
}

/// Builder for `CoercerConfig`.
/// Example:
/// ```
/// use jsonld_coerce::config::CoercerConfig;
///
/// // Create a new `CoercerConfig` with defaults
/// let config = CoercerConfig::builder().build();
/// ```
#[derive(Default)]
pub struct CoercerConfigBuilder {
    /// Default: false
    strict_datatypes: bool,

    /// Default: false
    accept_compact_iris: bool,
}

impl CoercerConfigBuilder {
    /// Default starting constructor for `CoercerConfigBuilder`
    pub fn new() -> CoercerConfigBuilder {
        CoercerConfigBuilder::default()
    }

    /// Build the `CoercerConfig` from the builder
    pub fn build(self) -> CoercerConfig {
        CoercerConfig {
            strict_datatypes: self.strict_datatypes,
            accept_compact_iris: self.accept_compact_iris,
        }
    }

    /// Reject unsupported XSD datatypes instead of passing them through
    pub fn with_strict_datatypes(mut self, strict: bool) -> Self {
        self.strict_datatypes = strict;
        self
    }

    /// Recognise `xsd:`-prefixed compact IRIs
    /// Example:
    /// ```
    /// use jsonld_coerce::{Coercer, NativeValue, config::CoercerConfig};
    /// use serde_json::json;
    ///
    /// let coercer = Coercer::new(CoercerConfig::builder().with_compact_iris(true).build());
    /// let value = coercer.coerce(&json!({"@type": "xsd:boolean", "@value": "1"})).unwrap();
    /// assert_eq!(value, NativeValue::Boolean(true));
    /// ```
    pub fn with_compact_iris(mut self, accept: bool) -> Self {
        self.accept_compact_iris = accept;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CoercerConfig::builder().build();
        assert!(!config.strict_datatypes);
        assert!(!config.accept_compact_iris);
        assert_eq!(config, CoercerConfig::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: CoercerConfig =
            serde_json::from_str(r#"{"accept_compact_iris": true}"#).unwrap();
        assert!(config.accept_compact_iris);
        assert!(!config.strict_datatypes);
    }
}
