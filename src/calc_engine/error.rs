use thiserror::Error;

/// The result of evaluating an expression.
pub type EvalResult<T> = Result<T, EvalError>;

/// Why an evaluation stopped. The first error raised aborts the whole
/// evaluation and is returned unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of `/` evaluated to zero.
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    /// An opening parenthesis was not closed after its inner expression.
    #[error("Missing closing parenthesis.")]
    UnmatchedParenthesis,

    /// A number or `(` was expected. Covers unknown characters and input
    /// that ends too early.
    #[error("Invalid input.")]
    UnexpectedToken,

    /// A complete expression was followed by more input.
    #[error("Unexpected input at the end.")]
    TrailingInput,

    /// Parentheses nested deeper than the parser accepts.
    #[error("Expression nested too deeply.")]
    NestingTooDeep,

    /// A literal or an intermediate result does not fit in an `i64`.
    #[error("Integer overflow.")]
    Overflow,
}
