use std::io::{stdin, stdout, Write};

use anyhow::Result;
use rdcalc::calc_engine::{evaluate_traced, format_with_spaces, EvaluationTrace};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};

use crate::input_limit::check_input_len;
use crate::input_line::InputLine;
use crate::session::{parse_command, Command};

const PROMPT: &str = "Expression: ";

/// 1-based terminal column of the cursor, pinned to the last column the
/// terminal can address.
fn cursor_column(cursor_width: usize) -> u16 {
    let column = 1 + PROMPT.len() + cursor_width;
    u16::try_from(column).unwrap_or(u16::MAX)
}

pub fn run_line() -> Result<()> {
    println!("rdcalc - integer calculator");
    println!("Supports: +, -, *, / and parentheses");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Special commands: 'quit' to exit, 'clear' to reset history");
    println!("\rAdd 'details' before expression for step-by-step evaluation\n");

    let mut stdout = stdout().into_raw_mode()?;
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;

    loop {
        write!(stdout, "{}{}", ClearLine, PROMPT)?;
        stdout.flush()?;

        let mut line = InputLine::new();
        let (_, initial_y) = stdout.cursor_pos()?;

        let stdin = stdin();
        let mut keys = stdin.keys();

        loop {
            write!(
                stdout,
                "{}{}{}{}",
                Goto(1, initial_y),
                ClearLine,
                PROMPT,
                line.as_str()
            )?;
            write!(stdout, "{}", Goto(cursor_column(line.cursor_width()), initial_y))?;
            stdout.flush()?;

            let Some(key) = keys.next() else {
                return Ok(());
            };

            match key? {
                Key::Char('\n') => break,
                Key::Ctrl('c') | Key::Ctrl('d') => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
                Key::Ctrl('u') => line.clear(),
                Key::Char(c) => line.insert(c),
                Key::Backspace => line.backspace(),
                Key::Delete => line.delete(),
                Key::Left => line.move_left(),
                Key::Right => line.move_right(),
                Key::Home => line.home(),
                Key::End => line.end(),
                Key::Up => {
                    if history_index > 0 {
                        history_index -= 1;
                        line.set(&history[history_index]);
                    }
                }
                Key::Down => {
                    if history_index < history.len().saturating_sub(1) {
                        history_index += 1;
                        line.set(&history[history_index]);
                    } else {
                        history_index = history.len();
                        line.clear();
                    }
                }
                _ => {}
            }
        }

        let input = line.as_str().trim().to_string();
        let (detailed_mode, expression) = match parse_command(&input) {
            Command::Empty => {
                write!(stdout, "\r\n")?;
                continue;
            }
            Command::Quit => {
                write!(stdout, "\r\nGoodbye!\r\n")?;
                return Ok(());
            }
            Command::Clear => {
                history.clear();
                history_index = 0;
                write!(stdout, "\r\nHistory cleared\r\n\n")?;
                continue;
            }
            Command::Help => {
                write!(
                    stdout,
                    "\r\nType an expression such as (2 + 3) * 4 and press Enter.\r\n\n"
                )?;
                continue;
            }
            Command::MissingExpression => {
                write!(stdout, "\r\nPlease enter a valid expression after 'details'\r\n\n")?;
                continue;
            }
            Command::Evaluate {
                detailed,
                expression,
            } => (detailed, expression),
        };

        history.push(input.clone());
        history_index = history.len();

        let expression = match check_input_len(expression) {
            Ok(expression) => expression,
            Err(e) => {
                write!(stdout, "\r\n  Error: {}\r\n\n", e)?;
                continue;
            }
        };
        let mut trace = EvaluationTrace::new(detailed_mode);
        let formatted_expr = format_with_spaces(expression);

        match evaluate_traced(expression, &mut trace) {
            Ok(result) => {
                write!(stdout, "\r\n  {} = {}\r\n", formatted_expr, result)?;

                if detailed_mode && !trace.steps.is_empty() {
                    write!(stdout, "\r\n  Step-by-step evaluation:\r\n")?;
                    for (i, step) in trace.steps.iter().enumerate() {
                        write!(
                            stdout,
                            "  Step {}: {} = {}\r\n",
                            i + 1,
                            step.operation,
                            step.result
                        )?;
                    }
                }
                write!(stdout, "\r\n")?;
            }
            Err(e) => {
                write!(stdout, "\r\n  {} = Error: {}\r\n\n", formatted_expr, e)?;
            }
        }
    }
}
