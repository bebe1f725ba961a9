//! Binary transcoding between UTF-8 text and space-delimited octet strings.
//!
//! Each byte of the input becomes its base-2 digits without leading zeros
//! (65 → "1000001", 5 → "101"), joined with single spaces. This is the
//! human-readable intermediate form that the zero-width mapper turns
//! invisible.

use thiserror::Error;

/// Errors that can occur when recovering text from a binary string.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid binary token '{0}'")]
    InvalidToken(String),

    #[error("recovered bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Converts text into a space-delimited binary string.
///
/// Operates on the UTF-8 bytes of the input, so multi-byte characters
/// contribute one token per byte. The empty string produces an empty
/// binary string.
pub fn text_to_binary(text: &str) -> String {
    text.bytes()
        .map(|byte| format!("{:b}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts a space-delimited binary string back into text.
///
/// The exact inverse of [`text_to_binary`]: each whitespace-separated
/// token is parsed as a base-2 byte value and the resulting byte
/// sequence is decoded as UTF-8.
///
/// # Errors
/// Returns [`DecodeError::InvalidToken`] if a token is not a base-2
/// numeral or exceeds byte range, and [`DecodeError::InvalidUtf8`] if
/// the reconstructed bytes are not valid UTF-8.
pub fn binary_to_text(binary: &str) -> Result<String, DecodeError> {
    let bytes = binary
        .split_whitespace()
        .map(|token| {
            u8::from_str_radix(token, 2)
                .map_err(|_| DecodeError::InvalidToken(token.to_string()))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(String::from_utf8(bytes)?)
}
