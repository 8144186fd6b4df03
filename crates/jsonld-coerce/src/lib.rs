//! XML Schema datatype coercion for JSON-LD typed literals.
//!
//! A JSON-LD value object such as
//! `{"@type": "http://www.w3.org/2001/XMLSchema#dateTime", "@value": "2014-02-18T16:07:52-05:00"}`
//! is converted into the matching native value; untyped values pass through.
//!
//! ```
//! use jsonld_coerce::{NativeValue, coerce};
//! use serde_json::json;
//!
//! let v = coerce(&json!({
//!     "@type": "http://www.w3.org/2001/XMLSchema#boolean",
//!     "@value": "1"
//! }))
//! .unwrap();
//! assert_eq!(v, NativeValue::Boolean(true));
//!
//! assert_eq!(coerce(&json!(1)).unwrap(), NativeValue::Untyped(json!(1)));
//! ```

pub mod coerce;
pub mod compact;
pub mod config;
pub mod error;
pub mod lexical;
pub mod model;
pub mod node;

pub use coerce::{Coercer, coerce, coerce_tagged};
pub use config::{CoercerConfig, CoercerConfigBuilder};
pub use error::{CoercionError, CompactionError, LexicalError, Result};
pub use model::{
    Datatype, DateTimeValue, Duration, NativeValue, TaggedValue, TimeValue, UriParts, xsd,
};
pub use node::{coerce_properties, node_id, node_type, node_value};
