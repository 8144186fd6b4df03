//! Lexical-space parsers for the supported XSD datatypes.
//!
//! Each parser takes the literal's lexical form and returns either the native
//! value or a [`LexicalError`](crate::error::LexicalError).

pub mod binary;
pub mod duration;
pub mod numeric;
pub mod temporal;
pub mod uri;

pub use binary::{decode_base64, decode_hex};
pub use duration::parse_duration;
pub use numeric::{parse_decimal, parse_double};
pub use temporal::{parse_date, parse_date_time, parse_time};
pub use uri::parse_uri;
