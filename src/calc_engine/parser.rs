use tracing::debug;

use super::error::{EvalError, EvalResult};
use super::lexer::Lexer;
use super::token::Token;
use super::trace::EvaluationTrace;

/// Binary operators of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        }
    }

    /// Applies the operator with overflow checking. Division truncates
    /// toward zero and rejects a zero divisor before dividing.
    pub fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        let result = match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Subtract => left.checked_sub(right),
            BinaryOp::Multiply => left.checked_mul(right),
            BinaryOp::Divide => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };
        result.ok_or(EvalError::Overflow)
    }
}

/// Recursive-descent parser that evaluates while it parses.
///
/// ```text
/// expression := term ( ('+' | '-') term )*
/// term       := factor ( ('*' | '/') factor )*
/// factor     := NUMBER | '(' expression ')'
/// ```
///
/// Each rule expects `current` to hold its first token and leaves `current`
/// just past what it consumed.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

/// Deepest parenthesis nesting accepted. Recursion depth follows nesting, so
/// this bounds stack use regardless of input length.
pub const MAX_NESTING: usize = 256;

impl<'a> Parser<'a> {
    /// Creates a parser with the first token already fetched.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Parser {
            lexer,
            current,
            depth: 0,
        }
    }

    /// Evaluates a whole line: one expression followed by end of input.
    pub fn parse(&mut self, trace: &mut EvaluationTrace) -> EvalResult<i64> {
        let result = self.expr(trace)?;
        if self.current != Token::End {
            debug!(token = %self.current, offset = self.lexer.offset(), "trailing input");
            return Err(EvalError::TrailingInput);
        }
        Ok(result)
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn expr(&mut self, trace: &mut EvaluationTrace) -> EvalResult<i64> {
        let mut left = self.term(trace)?;

        loop {
            let op = match self.current {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.term(trace)?;
            left = fold(op, left, right, trace)?;
        }
        Ok(left)
    }

    fn term(&mut self, trace: &mut EvaluationTrace) -> EvalResult<i64> {
        let mut left = self.factor(trace)?;

        loop {
            let op = match self.current {
                Token::Star => BinaryOp::Multiply,
                Token::Slash => BinaryOp::Divide,
                _ => break,
            };
            self.advance();
            let right = self.factor(trace)?;
            left = fold(op, left, right, trace)?;
        }
        Ok(left)
    }

    fn factor(&mut self, trace: &mut EvaluationTrace) -> EvalResult<i64> {
        match self.current {
            Token::Number(n) => {
                self.advance();
                Ok(n)
            }
            Token::LeftParen => {
                if self.depth == MAX_NESTING {
                    debug!(offset = self.lexer.offset(), "nesting limit reached");
                    return Err(EvalError::NestingTooDeep);
                }
                self.depth += 1;
                self.advance();
                let value = self.expr(trace)?;
                if self.current != Token::RightParen {
                    return Err(EvalError::UnmatchedParenthesis);
                }
                self.advance();
                self.depth -= 1;
                Ok(value)
            }
            Token::Oversized => Err(EvalError::Overflow),
            token => {
                debug!(%token, offset = self.lexer.offset(), "expected a number or '('");
                Err(EvalError::UnexpectedToken)
            }
        }
    }
}

fn fold(op: BinaryOp, left: i64, right: i64, trace: &mut EvaluationTrace) -> EvalResult<i64> {
    let result = op.apply(left, right)?;
    debug!(left, op = %op.symbol(), right, result, "folded");
    trace.add_step(op, left, right, result);
    Ok(result)
}
