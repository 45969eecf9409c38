use std::fmt::{Display, Formatter};

/// One LZ77 triple: copy `length` bytes from `offset` bytes back, then emit `next`.
/// An offset and length of zero means `next` is a bare literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub offset: usize,
    pub length: usize,
    pub next: u8,
}

/// Ordered tokens for a single chunk.
pub type TokenStream = Vec<Token>;

impl Token {
    pub fn new(offset: usize, length: usize, next: u8) -> Self {
        Self {
            offset,
            length,
            next,
        }
    }

    pub fn literal(next: u8) -> Self {
        Self::new(0, 0, next)
    }

    pub fn is_literal(&self) -> bool {
        self.length == 0
    }

    /// Number of output bytes this token expands to.
    pub fn span(&self) -> usize {
        self.length.saturating_add(1)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ Offset: {}, Length: {}, Next: '{}' }}",
            self.offset,
            self.length,
            self.next.escape_ascii()
        )
    }
}

/// Total bytes a token stream decodes to.
pub fn covered_len(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .fold(0, |total: usize, t| total.saturating_add(t.span()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn span_test() {
        assert_eq!(Token::literal(b'x').span(), 1);
        assert_eq!(Token::new(3, 4, b'x').span(), 5);
        assert!(Token::literal(b'x').is_literal());
        assert!(!Token::new(1, 1, b'x').is_literal());
    }

    #[test]
    fn covered_len_test() {
        let tokens = vec![Token::literal(b'a'), Token::new(1, 8, b'a')];
        assert_eq!(covered_len(&tokens), 10);
        assert_eq!(covered_len(&[]), 0);
    }

    #[test]
    fn display_test() {
        assert_eq!(
            Token::new(2, 3, b'q').to_string(),
            "{ Offset: 2, Length: 3, Next: 'q' }"
        );
        assert_eq!(
            Token::literal(b'\n').to_string(),
            "{ Offset: 0, Length: 0, Next: '\\n' }"
        );
    }
}
