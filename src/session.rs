/// What a submitted line asks the interactive front ends to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Quit,
    Clear,
    Help,
    /// `details` with nothing to evaluate.
    MissingExpression,
    Evaluate { detailed: bool, expression: &'a str },
}

const DETAILS: &str = "details";

/// Classifies a line. `details` may be given as a prefix or a suffix word,
/// in any letter case.
pub fn parse_command(input: &str) -> Command<'_> {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    match input.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => return Command::Quit,
        "clear" | "reset" => return Command::Clear,
        "help" => return Command::Help,
        DETAILS => return Command::MissingExpression,
        _ => {}
    }

    if let Some(rest) = strip_details_prefix(input) {
        return evaluate_detailed(rest);
    }
    if let Some(rest) = strip_details_suffix(input) {
        return evaluate_detailed(rest);
    }

    Command::Evaluate {
        detailed: false,
        expression: input,
    }
}

fn evaluate_detailed(expression: &str) -> Command<'_> {
    let expression = expression.trim();
    if expression.is_empty() {
        Command::MissingExpression
    } else {
        Command::Evaluate {
            detailed: true,
            expression,
        }
    }
}

fn strip_details_prefix(input: &str) -> Option<&str> {
    let head = input.get(..DETAILS.len())?;
    let rest = &input[DETAILS.len()..];
    (head.eq_ignore_ascii_case(DETAILS) && rest.starts_with(char::is_whitespace)).then_some(rest)
}

fn strip_details_suffix(input: &str) -> Option<&str> {
    let split = input.len().checked_sub(DETAILS.len())?;
    let tail = input.get(split..)?;
    let rest = &input[..split];
    (tail.eq_ignore_ascii_case(DETAILS) && rest.ends_with(char::is_whitespace)).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_expression() {
        assert_eq!(
            parse_command("  1 + 2 "),
            Command::Evaluate {
                detailed: false,
                expression: "1 + 2"
            }
        );
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("Reset"), Command::Clear);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("   "), Command::Empty);
    }

    #[test]
    fn details_prefix_and_suffix() {
        let expected = Command::Evaluate {
            detailed: true,
            expression: "2 * (3 + 4)",
        };
        assert_eq!(parse_command("details 2 * (3 + 4)"), expected);
        assert_eq!(parse_command("DETAILS   2 * (3 + 4)"), expected);
        assert_eq!(parse_command("2 * (3 + 4) details"), expected);
    }

    #[test]
    fn details_alone_needs_an_expression() {
        assert_eq!(parse_command("details"), Command::MissingExpression);
        assert_eq!(parse_command("Details"), Command::MissingExpression);
    }

    #[test]
    fn details_must_be_a_separate_word() {
        assert_eq!(
            parse_command("details1"),
            Command::Evaluate {
                detailed: false,
                expression: "details1"
            }
        );
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert_eq!(
            parse_command("été"),
            Command::Evaluate {
                detailed: false,
                expression: "été"
            }
        );
    }
}
