use crate::app::format::{
    genres_label, overview_label, rating_label, release_date_label, release_year, runtime_label,
};
use crate::app::{CINEMAS, LoadState, MovieDetailScreen, PosterState};
use crate::tmdb::Movie;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};
use throbber_widgets_tui::ThrobberState;

use super::loading::{render_empty, render_loading};

/// Renders the movie detail screen
pub fn render_movie_detail(
    frame: &mut Frame,
    detail: &mut MovieDetailScreen,
    throbber: &mut ThrobberState,
    area: Rect,
) {
    let MovieDetailScreen { movie, poster, .. } = detail;
    match movie {
        LoadState::Pending => render_loading(
            frame,
            "Movie Details",
            "Fetching movie details...",
            throbber,
            area,
        ),
        LoadState::Empty => render_empty(frame, "Movie Details", area),
        LoadState::Ready(movie) => render_movie_info(frame, movie, poster, area),
    }
}

/// Renders movie information next to its poster
fn render_movie_info(frame: &mut Frame, movie: &Movie, poster: &mut PosterState, area: Rect) {
    let outer_block = Block::default()
        .title(format!("Movie Details - {}", movie.title))
        .borders(Borders::ALL)
        .style(Style::default());

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Poster
            Constraint::Min(20),        // Info card
        ])
        .split(inner_area);

    render_poster_section(frame, columns[0], poster);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title, genres, info row
            Constraint::Min(4),    // Synopsis
            Constraint::Length(cinema_rows()),
            Constraint::Length(3), // Book now
        ])
        .split(columns[1]);

    render_title_section(frame, rows[0], movie);
    render_synopsis(frame, rows[1], movie);
    render_cinemas(frame, rows[2]);
    render_book_now(frame, rows[3]);
}

/// Renders the poster section
fn render_poster_section(frame: &mut Frame, area: Rect, poster: &mut PosterState) {
    match poster {
        PosterState::Loading => {
            let loading_paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled(
                    "Downloading poster...",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Poster"));

            frame.render_widget(loading_paragraph, area);
        }
        PosterState::Ready(protocol) => {
            let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));

            let poster_block = Block::default().borders(Borders::ALL).title("Poster");

            let inner_area = poster_block.inner(area);
            frame.render_widget(poster_block, area);
            frame.render_stateful_widget(image, inner_area, protocol);
        }
        PosterState::Missing => {
            let placeholder_paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled(
                    "No poster available",
                    Style::default().fg(Color::Gray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Poster"));

            frame.render_widget(placeholder_paragraph, area);
        }
    }
}

/// Renders the title, genres and the year · runtime · rating row
fn render_title_section(frame: &mut Frame, area: Rect, movie: &Movie) {
    let mut info_row = Vec::new();
    if let Some(year) = release_year(movie.release_date.as_deref()) {
        info_row.push(Span::styled(year.to_string(), Style::default().fg(Color::White)));
        info_row.push(Span::raw(" · "));
    }
    info_row.push(Span::styled(
        runtime_label(movie.runtime),
        Style::default().fg(Color::White),
    ));
    info_row.push(Span::raw(" · "));
    info_row.push(Span::styled("⭐ ", Style::default().fg(Color::Yellow)));
    info_row.push(Span::styled(
        rating_label(movie.vote_average),
        Style::default()
            .fg(get_rating_color(movie.vote_average))
            .add_modifier(Modifier::BOLD),
    ));

    let title_info = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            genres_label(movie.genres.as_deref()),
            Style::default().fg(Color::LightRed),
        )),
        Line::from(info_row),
        Line::from(vec![
            Span::styled("Release Date: ", Style::default().fg(Color::Gray)),
            Span::styled(
                release_date_label(movie.release_date.as_deref()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(title_info).alignment(Alignment::Center),
        area,
    );
}

fn render_synopsis(frame: &mut Frame, area: Rect, movie: &Movie) {
    let content = vec![
        Line::from(Span::styled(
            "Synopsis",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            overview_label(movie.overview.as_deref()).to_string(),
            Style::default().fg(Color::White),
        )),
    ];

    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), area);
}

// Section label plus a name line and an optional info line per cinema
fn cinema_rows() -> u16 {
    let lines: usize = CINEMAS.iter().map(|c| 1 + usize::from(c.info.is_some())).sum();
    u16::try_from(lines + 1).unwrap_or(u16::MAX)
}

fn render_cinemas(frame: &mut Frame, area: Rect) {
    let mut content = vec![Line::from(Span::styled(
        "Cinema",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    for cinema in CINEMAS {
        content.push(Line::from(Span::styled(
            format!("▸ {}", cinema.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(info) = cinema.info {
            content.push(Line::from(Span::styled(
                format!("  {info}"),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(content), area);
}

fn render_book_now(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new(Line::from(Span::styled(
        "(b) Book Now",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(button, area);
}

/// Green from 7, yellow from 5, red below, white when unrated
fn get_rating_color(vote_average: Option<f64>) -> Color {
    match vote_average {
        Some(score) if score >= 7.0 => Color::Green,
        Some(score) if score >= 5.0 => Color::Yellow,
        Some(score) if score > 0.0 => Color::Red,
        _ => Color::White,
    }
}
