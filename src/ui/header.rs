use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title bar with the navigation trail
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let trail = std::iter::once(&app.root)
        .chain(app.stack.iter())
        .map(|s| s.title())
        .collect::<Vec<_>>()
        .join(" › ");

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Marquee",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(trail, Style::default().fg(Color::Gray)),
    ]))
    .block(title_block);

    frame.render_widget(title, area);
}
