use crate::app::Popup;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render_popup(frame: &mut Frame, popup: &Popup) {
    let (title, lines) = match popup {
        Popup::ConfirmExit => (
            "Quit",
            vec![
                Line::from(""),
                Line::from("Leave Marquee?"),
                Line::from(""),
                Line::from(Span::styled(
                    "(y) yes   (n) no",
                    Style::default().fg(Color::Gray),
                )),
            ],
        ),
        Popup::Booking { title } => (
            "Booking Confirmed",
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from("Movie is confirmed!"),
                Line::from(""),
                Line::from(Span::styled(
                    "Press any key to continue",
                    Style::default().fg(Color::Gray),
                )),
            ],
        ),
    };

    let area = centered_rect(50, 9, frame.area());
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// A box `percent_x` wide and `height` rows tall in the middle of `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
