use serde_json::Value;
use tracing::{debug, trace};

use crate::config::CoercerConfig;
use crate::error::{CoercionError, LexicalError, Result};
use crate::lexical::{
    decode_base64, decode_hex, parse_date, parse_date_time, parse_decimal, parse_double,
    parse_duration, parse_time, parse_uri,
};
use crate::model::{Datatype, NativeValue, TaggedValue, xsd};

/// Coerce a JSON-LD value with the default configuration.
///
/// A value object carrying `@type` is converted according to its datatype;
/// anything else is returned unchanged as [`NativeValue::Untyped`].
pub fn coerce(value: &Value) -> Result<NativeValue> {
    Coercer::default().coerce(value)
}

/// Coerce an already-split datatype/literal pair with the default configuration.
pub fn coerce_tagged(tagged: TaggedValue<'_>) -> Result<NativeValue> {
    Coercer::default().coerce_tagged(tagged)
}

/// Type coercion with an explicit [`CoercerConfig`].
///
/// Holds no state besides its configuration, so a single instance can be
/// shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Coercer {
    config: CoercerConfig,
}

impl Coercer {
    pub fn new(config: CoercerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoercerConfig {
        &self.config
    }

    pub fn coerce(&self, value: &Value) -> Result<NativeValue> {
        self.coerce_tagged(TaggedValue::from_json(value))
    }

    pub fn coerce_tagged(&self, tagged: TaggedValue<'_>) -> Result<NativeValue> {
        let Some(iri) = tagged.datatype else {
            return Ok(NativeValue::Untyped(tagged.literal.clone()));
        };

        let Some(datatype) = self.resolve(iri) else {
            if self.config.strict_datatypes && is_xsd_iri(iri) {
                debug!(datatype = %iri, "no conversion rule for XSD datatype");
                return Err(CoercionError::new(
                    tagged.literal,
                    iri,
                    LexicalError::UnsupportedDatatype(iri.to_string()),
                ));
            }
            trace!(datatype = %iri, "unknown datatype, passing literal through");
            return Ok(NativeValue::Untyped(tagged.literal.clone()));
        };

        trace!(datatype = %iri, literal = %tagged.literal, "coercing typed literal");
        convert(datatype, &tagged).map_err(|source| {
            debug!(datatype = %iri, literal = %tagged.literal, error = %source, "coercion failed");
            CoercionError::new(tagged.literal, iri, source)
        })
    }

    fn resolve(&self, iri: &str) -> Option<Datatype> {
        Datatype::from_iri(iri).or_else(|| {
            if self.config.accept_compact_iris {
                iri.strip_prefix(xsd::PREFIX)
                    .and_then(Datatype::from_local_name)
            } else {
                None
            }
        })
    }
}

fn is_xsd_iri(iri: &str) -> bool {
    iri.starts_with(xsd::NAMESPACE)
}

/// The dispatch table: one conversion rule per datatype.
fn convert(
    datatype: Datatype,
    tagged: &TaggedValue<'_>,
) -> std::result::Result<NativeValue, LexicalError> {
    match datatype {
        Datatype::String => Ok(NativeValue::String(as_string(tagged.literal))),
        Datatype::Boolean => Ok(NativeValue::Boolean(as_boolean(tagged.literal))),
        Datatype::Decimal => parse_decimal(&lexical(tagged)?).map(NativeValue::Decimal),
        Datatype::Float | Datatype::Double => {
            parse_double(&lexical(tagged)?).map(NativeValue::Double)
        }
        Datatype::Duration => parse_duration(&lexical(tagged)?).map(NativeValue::Duration),
        Datatype::DateTime => parse_date_time(&lexical(tagged)?).map(NativeValue::DateTime),
        Datatype::Time => parse_time(&lexical(tagged)?).map(NativeValue::Time),
        Datatype::Date => parse_date(&lexical(tagged)?).map(NativeValue::Date),
        Datatype::HexBinary => decode_hex(&lexical(tagged)?).map(NativeValue::Bytes),
        Datatype::Base64Binary => decode_base64(&lexical(tagged)?).map(NativeValue::Bytes),
        Datatype::AnyUri => Ok(NativeValue::Uri(parse_uri(&lexical(tagged)?))),
    }
}

fn lexical<'a>(
    tagged: &TaggedValue<'a>,
) -> std::result::Result<std::borrow::Cow<'a, str>, LexicalError> {
    tagged
        .lexical_form()
        .ok_or_else(|| LexicalError::NotALiteral(tagged.literal.to_string()))
}

/// Booleans render as `true`/`false`, other scalars in their JSON form and
/// anything else as JSON text. Never fails.
fn as_string(literal: &Value) -> String {
    match literal {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Only the strings `"true"` and `"1"` are true. Everything else is false,
/// including unrecognised text and JSON `true`/`1`.
fn as_boolean(literal: &Value) -> bool {
    matches!(literal, Value::String(s) if s == "true" || s == "1")
}
