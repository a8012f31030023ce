use std::fmt;

/// One lexical unit of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    /// A digit run whose value does not fit in an `i64`.
    Oversized,
    Plus,
    Minus,
    Star,
    Slash,
    LeftParen,
    RightParen,
    /// Input exhausted. Produced again on every request once reached.
    End,
    /// Any character the lexer does not recognise.
    Invalid(char),
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Star | Token::Slash)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Oversized => write!(f, "<oversized number>"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::End => write!(f, "<end>"),
            Token::Invalid(c) => write!(f, "{}", c),
        }
    }
}
