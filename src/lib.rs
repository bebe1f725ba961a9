//! # Zerohide - Hide text in plain sight
//!
//! Zerohide hides an arbitrary private message inside an arbitrary public
//! message using zero-width Unicode characters. The composite string
//! displays as the public message only; a decoder recovers the private
//! message exactly.
//!
//! ## How it works
//!
//! Encoding runs the private message through four stages:
//! - The message becomes a space-delimited binary string, one token per
//!   UTF-8 byte with no leading zeros
//! - The ones, zeros, and spaces are replaced with zero-width code points
//! - The invisible payload is wrapped with a boundary marker (U+FEFF)
//! - The result is spliced into the public message at its midpoint
//!
//! Decoding reverses the pipeline. When no boundary marker is found the
//! whole input is treated as hidden binary; when the recovered message is
//! shorter than two characters a fixed notice string is returned instead.
//!
//! This is obfuscation, not encryption: anyone who knows the mapping can
//! decode, and the payload does not survive transformations that strip or
//! normalize zero-width characters.
//!
//! ## Example Usage
//!
//! ```rust
//! use zerohide::{encode, decode};
//!
//! let composite = encode("hello world", "meet at dawn");
//!
//! // Renders as "hello world"; the payload is invisible
//! let recovered = decode(&composite).unwrap();
//! assert_eq!(recovered, "meet at dawn");
//! ```
//!
//! ## Modules
//!
//! - [`binary`]: UTF-8 text to/from space-delimited binary strings
//! - [`hidden`]: binary alphabet to/from zero-width characters
//! - [`boundary`]: payload boundary marking and extraction
//! - [`encoder`]: midpoint splicing of the hidden payload
//! - [`decoder`]: payload location and recovery

pub mod binary;
pub mod boundary;
pub mod decoder;
pub mod encoder;
pub mod hidden;

// Re-export the whole function surface at the crate root
pub use binary::{binary_to_text, text_to_binary, DecodeError};
pub use boundary::{unwrap, wrap, BOUNDARY};
pub use decoder::{decode, NO_MESSAGE_NOTICE};
pub use encoder::encode;
pub use hidden::{from_hidden, to_hidden, HIDDEN_ONE, HIDDEN_SPACE, HIDDEN_ZERO};
