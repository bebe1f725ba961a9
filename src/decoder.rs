//! Message extraction.
//!
//! The decoding pipeline:
//! 1. Locate the payload between boundary markers
//! 2. Map zero-width characters back to the binary alphabet
//! 3. Transcode the binary string back to text
//! 4. Normalize legacy HTML-escaped ampersands
//! 5. Substitute a notice when nothing meaningful was recovered
//!
//! An absent marker is not an error: the whole input is then treated
//! as hidden-encoded binary. Transcoding failures do propagate.

use crate::binary::{binary_to_text, DecodeError};
use crate::boundary::unwrap;
use crate::hidden::from_hidden;

/// Returned by [`decode`] when the recovered message is shorter than
/// two characters. Callers must not mistake it for a real message.
pub const NO_MESSAGE_NOTICE: &str = "Notice: No private message was found.";

/// Recovers the private message hidden in a composite string.
///
/// When no boundary marker is present the entire input is decoded as
/// hidden binary, so payloads stripped of their markers (or never
/// wrapped at all) still decode. A recovered message of fewer than two
/// characters is replaced with [`NO_MESSAGE_NOTICE`].
///
/// # Arguments
/// * `composite` - The output of [`encode`], or any hidden-encoded text
///
/// # Errors
/// Propagates [`DecodeError`] from binary transcoding when the payload
/// holds malformed tokens or decodes to invalid UTF-8.
///
/// [`encode`]: crate::encoder::encode
pub fn decode(composite: &str) -> Result<String, DecodeError> {
    let payload = unwrap(composite).unwrap_or(composite);

    // Hidden text from legacy sources arrives HTML-escaped
    let message = binary_to_text(&from_hidden(payload))?.replace("&amp;", "&");

    if message.chars().count() < 2 {
        return Ok(NO_MESSAGE_NOTICE.to_string());
    }

    Ok(message)
}
