//! Message embedding.
//!
//! The encoding pipeline:
//! 1. Transcode the private message to a binary string
//! 2. Map the binary alphabet to zero-width characters
//! 3. Wrap the invisible payload with boundary markers
//! 4. Splice it into the public message at its midpoint

use crate::binary::text_to_binary;
use crate::boundary::wrap;
use crate::hidden::to_hidden;

/// Hides a private message inside a public one.
///
/// The public message is split at its midpoint, counted in Unicode
/// code points with the half point rounded up, and the wrapped
/// invisible payload is inserted there. The result displays as the
/// public message alone.
///
/// # Arguments
/// * `public` - The visible message the result will display as
/// * `private` - The message to hide; may be empty
///
/// # Returns
/// The composite string to transmit. Feed it to [`decode`] to recover
/// the private message.
///
/// [`decode`]: crate::decoder::decode
pub fn encode(public: &str, private: &str) -> String {
    let mid = (public.chars().count() + 1) / 2;
    let split = public
        .char_indices()
        .nth(mid)
        .map(|(index, _)| index)
        .unwrap_or(public.len());

    let payload = wrap(&to_hidden(&text_to_binary(private)));

    format!("{}{}{}", &public[..split], payload, &public[split..])
}
