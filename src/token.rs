//! Line tokenizer
//!
//! Splits an input line on runs of whitespace and remembers where each token
//! starts, so diagnostics can point at the exact operator that failed even
//! when the same operator appears several times on a line.
//!
//! Positions are 1-based character offsets into the original, untrimmed line.

/// One whitespace-delimited unit of an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// 1-based character offset of the token's first character
    pub position: usize,
}

/// Tokenize a line, left to right
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    // (byte offset, character column) of the token being read
    let mut start: Option<(usize, usize)> = None;

    for (column, (offset, ch)) in line.char_indices().enumerate() {
        if ch.is_whitespace() {
            if let Some((begin, begin_column)) = start.take() {
                tokens.push(Token {
                    text: &line[begin..offset],
                    position: begin_column + 1,
                });
            }
        } else if start.is_none() {
            start = Some((offset, column));
        }
    }

    if let Some((begin, begin_column)) = start {
        tokens.push(Token {
            text: &line[begin..],
            position: begin_column + 1,
        });
    }

    tokens
}
