use std::ops::Range;

use tracing::trace;

use super::token::Token;

/// Pull-based tokenizer over a single line of input.
///
/// The cursor only moves forward. Once the input is exhausted every call to
/// [`Lexer::next_token`] returns [`Token::End`].
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, cursor: 0 }
    }

    /// Byte offset of the first unconsumed character.
    pub fn offset(&self) -> usize {
        self.cursor
    }

    pub fn next_token(&mut self) -> Token {
        self.next_spanned().0
    }

    /// Produces the next token together with the byte range it was read from.
    /// `End` carries an empty range at the end of the input.
    pub fn next_spanned(&mut self) -> (Token, Range<usize>) {
        let rest = &self.input[self.cursor..];
        let trimmed = rest.trim_start();
        self.cursor += rest.len() - trimmed.len();

        let start = self.cursor;
        let token = match trimmed.chars().next() {
            None => Token::End,
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(c) => {
                self.cursor += c.len_utf8();
                match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '(' => Token::LeftParen,
                    ')' => Token::RightParen,
                    other => Token::Invalid(other),
                }
            }
        };

        trace!(%token, start, end = self.cursor, "lexed token");
        (token, start..self.cursor)
    }

    // Consumes the whole digit run even when the value overflows.
    fn number(&mut self) -> Token {
        let mut value: Option<i64> = Some(0);

        for b in self.input[self.cursor..].bytes() {
            if !b.is_ascii_digit() {
                break;
            }
            let digit = i64::from(b - b'0');
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(digit));
            self.cursor += 1;
        }

        match value {
            Some(v) => Token::Number(v),
            None => Token::Oversized,
        }
    }
}

/// Yields every token before `End`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::End => None,
            token => Some(token),
        }
    }
}
