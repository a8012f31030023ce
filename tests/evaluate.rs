use rdcalc::calc_engine::{Lexer, Token, MAX_NESTING};
use rdcalc::{evaluate, evaluate_traced, EvalError, EvaluationTrace};

#[test_log::test]
fn precedence() {
    assert_eq!(evaluate("2 + 3 * 4"), Ok(14));
}

#[test_log::test]
fn left_associativity() {
    assert_eq!(evaluate("10 - 2 - 3"), Ok(5));
}

#[test_log::test]
fn parentheses_override_precedence() {
    assert_eq!(evaluate("(2 + 3) * 4"), Ok(20));
}

#[test_log::test]
fn division_by_zero() {
    assert_eq!(evaluate("5 / 0"), Err(EvalError::DivisionByZero));
}

#[test_log::test]
fn unmatched_parenthesis() {
    assert_eq!(evaluate("(1 + 2"), Err(EvalError::UnmatchedParenthesis));
}

#[test_log::test]
fn trailing_garbage() {
    assert_eq!(evaluate("3 + 4 5"), Err(EvalError::TrailingInput));
}

#[test_log::test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("  2  +   3  "), Ok(5));
    assert_eq!(evaluate("  2  +   3  "), evaluate("2+3"));
    assert_eq!(evaluate("\t(1\n+\r2)"), Ok(3));
}

#[test_log::test]
fn end_token_repeats() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token(), Token::Number(1));
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Token::End);
    }
}

#[test_log::test]
fn matches_native_integer_arithmetic() {
    let cases: &[(&str, i64)] = &[
        ("1", 1),
        ("1 + 2 + 3 + 4", 1 + 2 + 3 + 4),
        ("100 / 7 / 2", 100 / 7 / 2),
        ("100 / (7 / 2)", 100 / (7 / 2)),
        ("2 * 3 - 4 * 5", 2 * 3 - 4 * 5),
        ("1 - 2 * 3 + 4 / 2", 1 - 2 * 3 + 4 / 2),
        ("(1 - 10) / 4", (1 - 10) / 4),
        ("((2 + 3) * (4 - 1)) / 2", ((2 + 3) * (4 - 1)) / 2),
        ("17 - 17 / 5 * 5", 17 - 17 / 5 * 5),
        ("0 * 999999 + 0", 0),
        ("((((((((((1))))))))))", 1),
    ];

    for (input, expected) in cases {
        assert_eq!(evaluate(input), Ok(*expected), "input: {input}");
    }
}

#[test_log::test]
fn malformed_input_reports_unexpected_token() {
    for input in ["", "   ", "+1", "1 +", "()", "(", "1 * * 2", "abc", "1 + x"] {
        assert_eq!(evaluate(input), Err(EvalError::UnexpectedToken), "input: {input:?}");
    }
}

#[test_log::test]
fn overflow_is_an_error_not_a_wraparound() {
    assert_eq!(evaluate("9223372036854775808"), Err(EvalError::Overflow));
    assert_eq!(evaluate("9223372036854775807 + 1"), Err(EvalError::Overflow));
    assert_eq!(evaluate("4611686018427387904 * 2"), Err(EvalError::Overflow));
    assert_eq!(evaluate("0 - 9223372036854775807 - 1"), Ok(i64::MIN));
}

#[test_log::test]
fn deep_nesting_is_fine() {
    let depth = MAX_NESTING;
    let input = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&input), Ok(7));

    let unclosed = format!("{}7{}", "(".repeat(depth), ")".repeat(depth - 1));
    assert_eq!(evaluate(&unclosed), Err(EvalError::UnmatchedParenthesis));
}

#[test_log::test]
fn pathological_nesting_returns_an_error() {
    assert_eq!(
        evaluate(&"(".repeat(200_000)),
        Err(EvalError::NestingTooDeep)
    );
    let closed = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert_eq!(evaluate(&closed), Err(EvalError::NestingTooDeep));
}

#[test_log::test]
fn evaluation_is_repeatable() {
    let input = "(8 - 3) * (2 + 2) / 3";
    let first = evaluate(input);
    for _ in 0..3 {
        assert_eq!(evaluate(input), first);
    }
}

#[test_log::test]
fn trace_follows_evaluation_order() {
    let mut trace = EvaluationTrace::new(true);
    assert_eq!(evaluate_traced("10 - 2 - 3", &mut trace), Ok(5));

    let steps: Vec<(&str, i64)> = trace
        .steps
        .iter()
        .map(|s| (s.operation.as_str(), s.result))
        .collect();
    assert_eq!(steps, vec![("10 - 2", 8), ("8 - 3", 5)]);
}

#[test_log::test]
fn trace_keeps_steps_before_the_error() {
    let mut trace = EvaluationTrace::new(true);
    assert_eq!(
        evaluate_traced("1 + 2 + 3 / 0", &mut trace),
        Err(EvalError::DivisionByZero)
    );
    assert_eq!(trace.steps.len(), 1);
    assert_eq!(trace.steps[0].operation, "1 + 2");
}

#[test_log::test]
fn error_messages() {
    assert_eq!(
        EvalError::DivisionByZero.to_string(),
        "Division by zero is not allowed."
    );
    assert_eq!(
        EvalError::UnmatchedParenthesis.to_string(),
        "Missing closing parenthesis."
    );
    assert_eq!(EvalError::UnexpectedToken.to_string(), "Invalid input.");
    assert_eq!(
        EvalError::TrailingInput.to_string(),
        "Unexpected input at the end."
    );
    assert_eq!(EvalError::Overflow.to_string(), "Integer overflow.");
    assert_eq!(
        EvalError::NestingTooDeep.to_string(),
        "Expression nested too deeply."
    );
}
