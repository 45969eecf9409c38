//! Rebuild one chunk's bytes from its token stream.

use super::token::Token;

/// Where and why a token stream could not be expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandFault {
    /// Index of the offending token within its stream
    pub token: usize,
    pub offset: usize,
    /// Bytes of this stream already produced when the token was reached
    pub available: usize,
}

/// Append the bytes described by `tokens` to `out`.
///
/// Copies only read bytes produced by this call, never anything already in `out`.
/// Each copy runs a byte at a time so a run may read bytes written earlier in the same run.
/// Nothing of a rejected token is written.
pub fn expand_tokens(tokens: &[Token], out: &mut Vec<u8>) -> Result<(), ExpandFault> {
    let base = out.len();

    for (idx, t) in tokens.iter().enumerate() {
        if t.length > 0 {
            let available = out.len() - base;
            if t.offset == 0 || t.offset > available {
                return Err(ExpandFault {
                    token: idx,
                    offset: t.offset,
                    available,
                });
            }
            let start = out.len() - t.offset;
            for k in 0..t.length {
                let byte = out[start + k];
                out.push(byte);
            }
        }
        out.push(t.next);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn literals_test() {
        let mut out = Vec::new();
        let tokens: Vec<Token> = b"hello".iter().map(|&b| Token::literal(b)).collect();
        expand_tokens(&tokens, &mut out).unwrap();
        assert_eq!(out, b"hello");
    }

    #[test]
    fn overlapping_copy_test() {
        let mut out = Vec::new();
        expand_tokens(&[Token::literal(b'a'), Token::new(1, 8, b'a')], &mut out).unwrap();
        assert_eq!(out, b"aaaaaaaaaa");
    }

    #[test]
    fn repeating_pair_test() {
        let mut out = Vec::new();
        let tokens = [Token::literal(b'a'), Token::literal(b'b'), Token::new(2, 5, b'!')];
        expand_tokens(&tokens, &mut out).unwrap();
        assert_eq!(out, b"abababa!");
    }

    #[test]
    fn offset_past_start_test() {
        let mut out = Vec::new();
        let tokens = [Token::literal(b'a'), Token::new(2, 1, b'b')];
        assert_eq!(
            expand_tokens(&tokens, &mut out),
            Err(ExpandFault {
                token: 1,
                offset: 2,
                available: 1
            })
        );
        assert_eq!(out, b"a");
    }

    #[test]
    fn zero_offset_with_length_test() {
        let mut out = Vec::new();
        let err = expand_tokens(&[Token::new(0, 3, b'x')], &mut out).unwrap_err();
        assert_eq!(err.token, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn never_reads_existing_output_test() {
        // Bytes already in the buffer belong to someone else.
        let mut out = b"xyz".to_vec();
        let err = expand_tokens(&[Token::new(1, 1, b'q')], &mut out).unwrap_err();
        assert_eq!(err.available, 0);
        assert_eq!(out, b"xyz");
    }
}
