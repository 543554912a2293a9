use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tui_big_text::{BigText, PixelSize};

/// Renders missing credential instructions with big text
pub fn render_setup(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Big text
            Constraint::Min(5),    // Instructions
        ])
        .split(area);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .lines(vec!["TOKEN".into(), "REQUIRED!".into()])
        .alignment(Alignment::Center)
        .build();

    frame.render_widget(big_text, chunks[0]);

    let instructions = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Please set a TMDB API read access token to browse movies",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "1. Create one at: https://www.themoviedb.org/settings/api",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "2. Set environment variable: export TMDB_BEARER_TOKEN=your_token_here",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "   (or put it in a .env file next to where you start marquee)",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "3. Restart the application",
            Style::default().fg(Color::White),
        )),
    ];

    let instructions_paragraph = Paragraph::new(instructions)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(instructions_paragraph, chunks[1]);
}
