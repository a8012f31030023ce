use std::time::{Duration, Instant};

use rdcalc::calc_engine::{evaluate_traced, EvaluationTrace, Step};

use crate::input_limit::check_input_len;
use crate::input_line::InputLine;
use crate::session::{parse_command, Command};

pub struct HistoryEntry {
    pub input: String,
    pub result: Result<i64, String>,
    pub detailed_steps: Vec<Step>,
    pub detailed_mode: bool,
    pub duration: Duration,
}

pub struct App {
    pub input: InputLine,
    pub input_scroll: usize,
    pub history: Vec<HistoryEntry>,
    pub cursor_history: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub list_height: usize,
    pub item_start_indices: Vec<usize>,
    pub history_scroll: usize,
    pub scroll_to_bottom: bool,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            input: InputLine::new(),
            input_scroll: 0,
            history: Vec::new(),
            cursor_history: 0,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            list_height: 5,
            item_start_indices: Vec::new(),
            history_scroll: 0,
            scroll_to_bottom: false,
            terminal_too_small: false,
        }
    }

    /// Keeps the cursor inside the visible part of the input box.
    pub fn adjust_input_scroll(&mut self, visible_width: usize) {
        let total = self.input.len();
        let cursor_pos = self.input.cursor();

        if cursor_pos < self.input_scroll {
            self.input_scroll = cursor_pos;
        } else if cursor_pos >= self.input_scroll + visible_width {
            self.input_scroll = cursor_pos + 1 - visible_width;
        }

        if self.input_scroll > total.saturating_sub(visible_width) {
            self.input_scroll = total.saturating_sub(visible_width);
        }
    }

    pub fn submit(&mut self) {
        let raw = self.input.as_str().trim().to_string();

        match parse_command(&raw) {
            Command::Empty => {}
            Command::Quit => self.should_quit = true,
            Command::Clear => {
                self.history.clear();
                self.cursor_history = 0;
                self.history_scroll = 0;
                self.clear_input();
            }
            Command::Help => {
                self.show_help = true;
                self.help_scroll = 0;
                self.clear_input();
            }
            Command::MissingExpression => {
                self.history.push(HistoryEntry {
                    input: raw.clone(),
                    result: Err("Please enter a valid expression after 'details'".to_string()),
                    detailed_steps: Vec::new(),
                    detailed_mode: false,
                    duration: Duration::ZERO,
                });
                self.finish_submit();
            }
            Command::Evaluate {
                detailed,
                expression,
            } => {
                let start_time = Instant::now();
                let mut trace = EvaluationTrace::new(detailed);
                let result = match check_input_len(expression) {
                    Ok(expression) => {
                        evaluate_traced(expression, &mut trace).map_err(|e| e.to_string())
                    }
                    Err(e) => Err(e.to_string()),
                };
                let duration = start_time.elapsed();

                self.history.push(HistoryEntry {
                    input: expression.to_string(),
                    result,
                    detailed_steps: trace.steps,
                    detailed_mode: detailed,
                    duration,
                });
                self.finish_submit();
            }
        }
    }

    fn finish_submit(&mut self) {
        self.cursor_history = self.history.len().saturating_sub(1);
        self.clear_input();
        self.scroll_to_bottom = true;
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len().saturating_sub(1) {
            self.cursor_history += 1;
        }

        match self.history.get(self.cursor_history) {
            Some(entry) => self.input.set(&entry.input),
            None => self.input.clear(),
        }
        self.input_scroll = 0;
        self.scroll_to_bottom = false;
    }

    pub fn scroll_history(&mut self, direction: i32) {
        let step = self.list_height.saturating_sub(1);
        if direction < 0 {
            self.cursor_history = self.cursor_history.saturating_sub(step);
        } else {
            self.cursor_history = self
                .cursor_history
                .saturating_add(step)
                .min(self.history.len().saturating_sub(1));
        }

        if let Some(entry) = self.history.get(self.cursor_history) {
            self.input.set(&entry.input);
        }
        self.input_scroll = 0;
        self.scroll_to_bottom = false;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(app: &mut App, line: &str) {
        app.input.set(line);
        app.submit();
    }

    #[test]
    fn submit_records_result_and_clears_input() {
        let mut app = App::new();
        submit(&mut app, "2 + 3 * 4");
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].result, Ok(14));
        assert!(app.input.is_empty());
        assert!(app.scroll_to_bottom);
    }

    #[test]
    fn errors_are_kept_as_messages() {
        let mut app = App::new();
        submit(&mut app, "(1 + 2");
        assert_eq!(
            app.history[0].result,
            Err("Missing closing parenthesis.".to_string())
        );
    }

    #[test]
    fn overlong_input_becomes_an_error_entry() {
        let mut app = App::new();
        submit(&mut app, &"(".repeat(200_000));
        assert_eq!(app.history.len(), 1);
        assert_eq!(
            app.history[0].result,
            Err("Input longer than 255 characters.".to_string())
        );
        assert!(app.input.is_empty());
    }

    #[test]
    fn details_collects_steps() {
        let mut app = App::new();
        submit(&mut app, "details (2 + 3) * 4");
        let entry = &app.history[0];
        assert!(entry.detailed_mode);
        assert_eq!(entry.input, "(2 + 3) * 4");
        assert_eq!(entry.detailed_steps.len(), 2);
    }

    #[test]
    fn commands_do_not_touch_history() {
        let mut app = App::new();
        submit(&mut app, "1 + 1");
        submit(&mut app, "help");
        assert!(app.show_help);
        submit(&mut app, "clear");
        assert!(app.history.is_empty());
        submit(&mut app, "q");
        assert!(app.should_quit);
    }

    #[test]
    fn history_navigation_recalls_input() {
        let mut app = App::new();
        submit(&mut app, "1 + 1");
        submit(&mut app, "2 * 2");
        app.navigate_history(-1);
        assert_eq!(app.input.as_str(), "1 + 1");
        app.navigate_history(1);
        assert_eq!(app.input.as_str(), "2 * 2");
    }

    #[test]
    fn input_scroll_follows_cursor() {
        let mut app = App::new();
        app.input.set("123456789");
        app.adjust_input_scroll(4);
        assert_eq!(app.input_scroll, 5);
        app.input.home();
        app.adjust_input_scroll(4);
        assert_eq!(app.input_scroll, 0);
    }
}
