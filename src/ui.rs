mod footer;
mod header;
mod home;
mod loading;
mod movie_detail;
mod movie_list;
mod popup;
mod setup;

use crate::app::{App, ScreenKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use footer::render_footer;
use header::render_header;
use home::render_home;
use movie_detail::render_movie_detail;
use movie_list::render_movie_list;
use popup::render_popup;
use setup::render_setup;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let App {
        root,
        stack,
        throbber,
        ..
    } = &mut *app;
    let screen = stack.last_mut().unwrap_or(root);
    match &mut screen.kind {
        ScreenKind::Setup => render_setup(frame, chunks[1]),
        ScreenKind::Home(home) => render_home(frame, home, throbber, chunks[1]),
        ScreenKind::MovieList(list) => render_movie_list(frame, list, throbber, chunks[1]),
        ScreenKind::MovieDetail(detail) => {
            render_movie_detail(frame, detail, throbber, chunks[1])
        }
    }

    render_footer(frame, app, chunks[2]);

    if let Some(popup) = &app.popup {
        render_popup(frame, popup);
    }
}
