use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::LexicalError;

/// Standard alphabet, canonical padding required, non-zero trailing bits
/// tolerated.
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Decode `xsd:hexBinary`. Either case is accepted; an empty string is an
/// empty byte sequence.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, LexicalError> {
    hex::decode(text.trim()).map_err(LexicalError::hex)
}

/// Decode `xsd:base64Binary`. ASCII whitespace anywhere in the input (line
/// breaks in MIME-style blocks, a trailing newline) is ignored.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, LexicalError> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    BASE64_LENIENT
        .decode(compact.as_bytes())
        .map_err(LexicalError::base64)
}
