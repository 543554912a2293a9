use crate::app::format::{rating_label, release_year};
use crate::app::{Carousel, HomeFocus, HomeScreen, LoadState};
use crate::tmdb::Movie;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use throbber_widgets_tui::ThrobberState;

use super::loading::{render_empty, render_loading};

pub fn render_home(
    frame: &mut Frame,
    home: &HomeScreen,
    throbber: &mut ThrobberState,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Min(1),    // Feeds
        ])
        .split(area);

    render_greeting(frame, chunks[0]);

    let feeds = match &home.feeds {
        LoadState::Pending => {
            render_loading(frame, "Home", "Loading movies...", throbber, chunks[1]);
            return;
        }
        LoadState::Empty => {
            render_empty(frame, "Home", chunks[1]);
            return;
        }
        LoadState::Ready(feeds) => feeds,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Now Playing heading
            Constraint::Length(7), // Carousel
            Constraint::Length(1), // Dots
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Coming Soon heading
            Constraint::Length(6), // Coming Soon strip
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    let carousel_focused = home.focus == HomeFocus::NowPlaying;

    render_heading(frame, "Now Playing", Some("(a) See All"), carousel_focused, rows[0]);
    render_strip(
        frame,
        &feeds.now_playing,
        &home.now_playing,
        carousel_focused,
        rows[1],
    );
    render_dots(frame, &home.now_playing, rows[2]);

    render_heading(frame, "Coming Soon", Some("(c) See All"), !carousel_focused, rows[4]);
    render_strip(
        frame,
        &feeds.upcoming,
        &home.coming_soon,
        !carousel_focused,
        rows[5],
    );
}

fn render_greeting(frame: &mut Frame, area: Rect) {
    let greeting = vec![
        Line::from(Span::styled(
            "Welcome Back 👋",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Let’s relax and watch a movie.",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(greeting), area);
}

fn render_heading(
    frame: &mut Frame,
    title: &str,
    action: Option<&str>,
    focused: bool,
    area: Rect,
) {
    let marker = if focused { "▶ " } else { "  " };
    let mut spans = vec![Span::styled(
        format!("{marker}{title}"),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(action) = action {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(action.to_string(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the first cards of `movies` side by side
fn render_strip(
    frame: &mut Frame,
    movies: &[Movie],
    carousel: &Carousel,
    focused: bool,
    area: Rect,
) {
    if carousel.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "  No movies to show",
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let count = carousel.len();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area);

    for (index, (movie, card)) in movies.iter().zip(cards.iter()).enumerate() {
        render_card(frame, movie, index == carousel.active(), focused, *card);
    }
}

fn render_card(frame: &mut Frame, movie: &Movie, active: bool, focused: bool, area: Rect) {
    let border_style = match (active, focused) {
        (true, true) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White),
        _ => Style::default().fg(Color::DarkGray),
    };
    let title_style = if active {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let year = release_year(movie.release_date.as_deref())
        .map(|y| y.to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(movie.title.clone(), title_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("⭐ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                rating_label(movie.vote_average),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled(year, Style::default().fg(Color::Gray))),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(card, area);
}

/// Pagination dots under the carousel, `1`-`5` jump to a dot
fn render_dots(frame: &mut Frame, carousel: &Carousel, area: Rect) {
    let dots: Vec<Span> = (0..carousel.len())
        .map(|i| {
            if i == carousel.active() {
                Span::styled("● ", Style::default().fg(Color::Yellow))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        area,
    );
}
