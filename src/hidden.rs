//! Mapping between the binary alphabet and zero-width characters.
//!
//! The three characters a binary string is made of ('0', '1', ' ') map
//! to three invisible code points. The three sources and three targets
//! are disjoint sets, so the substitutions are applied in a single pass
//! with no ordering concerns.

/// Maps to the space separating binary tokens (WORD JOINER).
pub const HIDDEN_SPACE: char = '\u{2060}';

/// Maps to the digit '0' (ZERO WIDTH SPACE).
pub const HIDDEN_ZERO: char = '\u{200B}';

/// Maps to the digit '1' (ZERO WIDTH NON-JOINER).
pub const HIDDEN_ONE: char = '\u{200C}';

/// Replaces the ones, zeros, and spaces of a binary string with their
/// zero-width counterparts.
///
/// Characters outside the binary alphabet pass through unchanged; the
/// input is expected to be a pure binary string, but unrelated content
/// is never corrupted.
pub fn to_hidden(binary: &str) -> String {
    binary
        .chars()
        .map(|c| match c {
            ' ' => HIDDEN_SPACE,
            '0' => HIDDEN_ZERO,
            '1' => HIDDEN_ONE,
            other => other,
        })
        .collect()
}

/// Replaces zero-width characters with the binary alphabet they encode.
/// The exact inverse of [`to_hidden`].
pub fn from_hidden(hidden: &str) -> String {
    hidden
        .chars()
        .map(|c| match c {
            HIDDEN_SPACE => ' ',
            HIDDEN_ZERO => '0',
            HIDDEN_ONE => '1',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_alphabet_roundtrip() {
        for s in ["", "0", "1", " ", "1000001", "110 01 0111", "  10  "] {
            assert_eq!(from_hidden(&to_hidden(s)), s, "failed for {:?}", s);
        }
    }

    #[test]
    fn test_hidden_output_is_invisible() {
        let hidden = to_hidden("10 01");
        assert!(hidden
            .chars()
            .all(|c| matches!(c, HIDDEN_SPACE | HIDDEN_ZERO | HIDDEN_ONE)));
    }

    #[test]
    fn test_non_binary_characters_pass_through() {
        assert_eq!(to_hidden("abc"), "abc");
        assert_eq!(from_hidden("abc"), "abc");
        assert_eq!(from_hidden(&to_hidden("x0y1z 2")), "x0y1z 2");
    }

    #[test]
    fn test_code_points_are_distinct() {
        assert_ne!(HIDDEN_SPACE, HIDDEN_ZERO);
        assert_ne!(HIDDEN_SPACE, HIDDEN_ONE);
        assert_ne!(HIDDEN_ZERO, HIDDEN_ONE);
    }
}
