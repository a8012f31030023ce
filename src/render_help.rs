use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui_mode::app::App;

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" rdcalc Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(Span::styled(
            "rdcalc - Integer Terminal Calculator",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Operations:"),
        Line::from("  + : Addition        (e.g., 5 + 3 = 8)"),
        Line::from("  - : Subtraction     (e.g., 10 - 4 = 6)"),
        Line::from("  * : Multiplication  (e.g., 6 * 7 = 42)"),
        Line::from("  / : Division        (e.g., 7 / 2 = 3, truncates)"),
        Line::from("  ( ) : Grouping      (e.g., (2 + 3) * 4 = 20)"),
        Line::from(""),
        heading("Rules:"),
        Line::from("  * and / bind tighter than + and -"),
        Line::from("  Operators of equal precedence evaluate left to right"),
        Line::from("  Only non-negative integer literals; no unary minus"),
        Line::from("  Results must fit in a signed 64-bit integer"),
        Line::from(""),
        heading("Errors:"),
        Line::from("  Division by zero is not allowed."),
        Line::from("  Missing closing parenthesis."),
        Line::from("  Invalid input.                (number or '(' expected)"),
        Line::from("  Unexpected input at the end.  (e.g., 3 + 4 5)"),
        Line::from("  Integer overflow."),
        Line::from(""),
        heading("Commands:"),
        Line::from("  details <expression> : Show step-by-step evaluation with time"),
        Line::from("  clear : Clear calculation history"),
        Line::from("  help : Show this help screen"),
        Line::from("  quit : Exit the calculator"),
        Line::from(""),
        heading("Keys:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  ↑ ↓ : Navigate calculation history"),
        Line::from("  PgUp/PgDn : Page through history"),
        Line::from("  Mouse wheel : Scroll through history"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  Esc : Close this screen"),
        Line::from(""),
        heading("Examples:"),
        Line::from("  2 + 3 * 4"),
        Line::from("  (100 - 1) / (2 + 7)"),
        Line::from("  details 10 - 2 - 3"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
