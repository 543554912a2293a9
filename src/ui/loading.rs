use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, ThrobberState};

/// Renders a bordered pending state with an animated throbber
pub fn render_loading(
    frame: &mut Frame,
    title: &str,
    label: &str,
    throbber: &mut ThrobberState,
    area: Rect,
) {
    let loading_block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default());

    let inner = loading_block.inner(area);
    frame.render_widget(loading_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let spinner = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX);

    frame.render_stateful_widget(spinner, rows[1], throbber);
}

/// Uniform "nothing to show" block for empty and failed fetches
pub fn render_empty(frame: &mut Frame, title: &str, area: Rect) {
    let empty_block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default());

    let empty_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No data found",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press (r) to try again or (Esc) to go back",
            Style::default().fg(Color::Gray),
        )),
    ];

    let empty_paragraph = Paragraph::new(empty_text)
        .block(empty_block)
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(empty_paragraph, area);
}
