use crate::app::{App, ListSource, LoadState, Popup, Screen, ScreenKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    if let Some(popup) = &app.popup {
        return match popup {
            Popup::ConfirmExit => "(y) to quit, (n) to cancel",
            Popup::Booking { .. } => "Press any key to continue",
        };
    }

    screen_hint(app.current())
}

/// Key hints for the visible screen; `(r)` only where a refetch would run
fn screen_hint(screen: &Screen) -> &'static str {
    if screen.is_pending() {
        return "Loading... (Esc) back, (q) quit";
    }

    match &screen.kind {
        ScreenKind::Setup => "(q) to quit",
        ScreenKind::Home(home) => match home.feeds {
            LoadState::Ready(_) => {
                "(←→/hl) browse, (Tab) switch row, (Enter) details, (a) see all, (c) coming soon, (p) popular, (q) quit"
            }
            _ => "(r) retry, (p) popular, (q) quit",
        },
        ScreenKind::MovieList(list) if list.editing_filter => {
            "Type to filter, (Enter) keep, (Esc) clear"
        }
        ScreenKind::MovieList(list) if list.source == ListSource::Provided => {
            "(↑↓/jk) scroll, (Enter) details, (/) filter, (Esc) back, (q) quit"
        }
        ScreenKind::MovieList(_) => {
            "(↑↓/jk) scroll, (Enter) details, (/) filter, (r) refresh, (Esc) back, (q) quit"
        }
        ScreenKind::MovieDetail(_) if screen.is_fetching() => "(b) book now, (Esc) back, (q) quit",
        ScreenKind::MovieDetail(_) => "(b) book now, (r) refresh, (Esc) back, (q) quit",
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let instruction_text = get_instruction_text(app);
    let bottom =
        Paragraph::new(Text::styled(instruction_text, Style::default())).block(bottom_block);

    frame.render_widget(bottom, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PosterState, Route};
    use crate::tmdb::Movie;

    fn list(route: Route) -> Screen {
        let (mut screen, _) = Screen::activate(1, route);
        if let ScreenKind::MovieList(list) = &mut screen.kind {
            list.apply(Ok(vec![Movie::new(1, "Alien")]));
        }
        screen
    }

    #[test]
    fn refresh_hint_only_where_refresh_runs() {
        let popular = list(Route::Popular);
        assert!(screen_hint(&popular).contains("(r) refresh"));

        let see_all = list(Route::see_all("Now Playing", &[Movie::new(1, "Alien")]));
        assert!(!screen_hint(&see_all).contains("(r)"));

        let (mut detail, _) = Screen::activate(2, Route::MovieDetail { id: 1 });
        if let ScreenKind::MovieDetail(d) = &mut detail.kind {
            d.apply(Ok(Movie::new(1, "Alien")));
        }
        assert!(!screen_hint(&detail).contains("(r)"));
        if let ScreenKind::MovieDetail(d) = &mut detail.kind {
            d.poster = PosterState::Missing;
        }
        assert!(screen_hint(&detail).contains("(r) refresh"));
    }
}
