//! Integer expression engine.
//!
//! A [`Lexer`] hands out one [`Token`] at a time to a recursive-descent
//! [`Parser`] which computes the value as it goes. No syntax tree is built.

mod error;
mod lexer;
mod parser;
mod token;
mod trace;

use tracing::debug;

pub use error::{EvalError, EvalResult};
pub use lexer::Lexer;
pub use parser::{BinaryOp, Parser, MAX_NESTING};
pub use token::Token;
pub use trace::{EvaluationTrace, Step};

/// Evaluates one line of input to an integer.
pub fn evaluate(input: &str) -> EvalResult<i64> {
    evaluate_traced(input, &mut EvaluationTrace::new(false))
}

/// Like [`evaluate`], recording each arithmetic step into `trace` when it is
/// in detailed mode.
pub fn evaluate_traced(input: &str, trace: &mut EvaluationTrace) -> EvalResult<i64> {
    debug!(input, "evaluating expression");
    let result = Parser::new(input).parse(trace);
    match &result {
        Ok(value) => debug!(value, "evaluation finished"),
        Err(e) => debug!(error = %e, "evaluation failed"),
    }
    result
}

/// Re-spaces an expression for display: binary operators get one space on
/// each side, parentheses hug their contents. Unrecognised characters are
/// kept so error output still shows what was typed.
pub fn format_with_spaces(expr: &str) -> String {
    let mut result = String::new();
    let mut lexer = Lexer::new(expr);
    // End offset of the previous token when it was unrecognised.
    let mut invalid_end = None;

    loop {
        let (token, span) = lexer.next_spanned();
        let glued = matches!(token, Token::Invalid(_)) && invalid_end == Some(span.start);
        invalid_end = matches!(token, Token::Invalid(_)).then_some(span.end);

        match token {
            Token::End => break,
            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                result.push(' ');
                result.push_str(&expr[span]);
                result.push(' ');
            }
            Token::RightParen => result.push(')'),
            _ => {
                if !glued && !result.is_empty() && !result.ends_with(|c: char| c == '(' || c == ' ') {
                    result.push(' ');
                }
                result.push_str(&expr[span]);
            }
        }
    }

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_spaces_operators_only() {
        assert_eq!(format_with_spaces("(2+3)*4"), "(2 + 3) * 4");
        assert_eq!(format_with_spaces("  10 -2-   3 "), "10 - 2 - 3");
        assert_eq!(format_with_spaces("3+4 5"), "3 + 4 5");
    }

    #[test]
    fn format_keeps_invalid_characters() {
        assert_eq!(format_with_spaces("2$3"), "2 $ 3");
        assert_eq!(format_with_spaces("2(3)"), "2 (3)");
        assert_eq!(format_with_spaces("2*abc"), "2 * abc");
        assert_eq!(format_with_spaces("x y"), "x y");
        assert_eq!(format_with_spaces(""), "");
    }

    #[test]
    fn disabled_trace_matches_plain_evaluate() {
        let mut trace = EvaluationTrace::new(false);
        assert_eq!(evaluate_traced("6 / 4", &mut trace), evaluate("6 / 4"));
        assert!(trace.steps.is_empty());
    }
}
