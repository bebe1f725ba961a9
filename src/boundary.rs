//! Boundary marking so a decoder can locate the payload in host text.
//!
//! The marker is ZERO WIDTH NO-BREAK SPACE (U+FEFF), distinct from all
//! three mapped code points. It must not occur in the payload's encoded
//! form or extraction becomes ambiguous.

/// The payload boundary marker (ZERO WIDTH NO-BREAK SPACE).
pub const BOUNDARY: char = '\u{FEFF}';

/// Wraps a string with the boundary marker on both sides.
pub fn wrap(text: &str) -> String {
    format!("{BOUNDARY}{text}{BOUNDARY}")
}

/// Extracts the payload between the first pair of boundary markers.
///
/// Returns `None` when the marker does not occur at all. When it does,
/// the piece after the first marker is returned; anything after a
/// second marker is ignored, so only the first embedded payload in
/// multiply-marked text is recovered.
pub fn unwrap(text: &str) -> Option<&str> {
    let mut pieces = text.split(BOUNDARY);
    pieces.next();
    pieces.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unwrap_roundtrip() {
        for s in ["", "payload", "with space", "día 🦀"] {
            assert_eq!(unwrap(&wrap(s)), Some(s), "failed for {:?}", s);
        }
    }

    #[test]
    fn test_unwrap_absent_marker() {
        assert_eq!(unwrap("no marker here"), None);
        assert_eq!(unwrap(""), None);
    }

    #[test]
    fn test_unwrap_takes_first_payload() {
        let text = format!("head{}first{}mid{}second{}tail", BOUNDARY, BOUNDARY, BOUNDARY, BOUNDARY);
        assert_eq!(unwrap(&text), Some("first"));
    }

    #[test]
    fn test_unwrap_single_marker_returns_tail() {
        let text = format!("head{}tail", BOUNDARY);
        assert_eq!(unwrap(&text), Some("tail"));
    }
}
