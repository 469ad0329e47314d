use std::fmt;

/// Opaque player identifier.
///
/// Tokens are compared by id, so any number of players can participate
/// without collision. The display glyph is derived from the id and is only
/// used when rendering the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u32);

impl Token {
    /// Create a token with the given id.
    pub const fn new(id: u32) -> Self {
        Token(id)
    }

    pub fn id(self) -> u32 {
        self.0
    }

    /// Single-character glyph for rendering. Glyphs repeat after 26 players;
    /// token identity does not.
    pub fn glyph(self) -> char {
        char::from(b'A' + (self.0 % 26) as u8)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_ids_are_distinct_tokens() {
        assert_ne!(Token::new(0), Token::new(1));
        assert_eq!(Token::new(3), Token::new(3));
    }

    #[test]
    fn test_glyph_is_stable() {
        assert_eq!(Token::new(0).glyph(), 'A');
        assert_eq!(Token::new(1).glyph(), 'B');
        assert_eq!(Token::new(25).glyph(), 'Z');
        // Wraps beyond 26
        assert_eq!(Token::new(26).glyph(), 'A');
    }

    #[test]
    fn test_display_matches_glyph() {
        assert_eq!(Token::new(1).to_string(), "B");
    }
}
