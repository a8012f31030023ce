use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use rdcalc::calc_engine::{Lexer, Token};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Splits `text` into lines at most `width` columns wide, breaking on
/// whitespace. Words wider than a line are cut.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }

            let mut chunk = String::new();
            let mut chunk_width = 0;
            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if chunk_width + char_width > width && !chunk.is_empty() {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(c);
                chunk_width += char_width;
            }
            current_line = chunk;
            current_width = chunk_width;
            continue;
        }

        if !current_line.is_empty() && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Colours an expression by token class. Whitespace is passed through as-is
/// and characters the calculator rejects are shown in red.
pub fn highlight_expression(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let number_style = Style::default().fg(Color::LightGreen);

    let error_style = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::UNDERLINED);

    let mut spans = Vec::new();
    let mut lexer = Lexer::new(expr);
    let mut last = 0;

    loop {
        let (token, range) = lexer.next_spanned();
        if range.start > last {
            spans.push(Span::raw(expr[last..range.start].to_string()));
        }
        if token == Token::End {
            break;
        }

        let style = match token {
            Token::Number(_) => number_style,
            Token::Oversized | Token::Invalid(_) => error_style,
            t if t.is_operator() => operator_style,
            _ => base_style,
        };
        spans.push(Span::styled(expr[range.clone()].to_string(), style));
        last = range.end;
    }

    spans
}
