use crate::app::format::{rating_label, release_year};
use crate::app::{LoadState, MovieListScreen};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use throbber_widgets_tui::ThrobberState;

use super::loading::{render_empty, render_loading};

/// Renders a movie list screen, its filter and its selection
pub fn render_movie_list(
    frame: &mut Frame,
    list: &mut MovieListScreen,
    throbber: &mut ThrobberState,
    area: Rect,
) {
    match &list.movies {
        LoadState::Pending => {
            render_loading(frame, &list.title, "Loading movies...", throbber, area);
            return;
        }
        LoadState::Empty => {
            render_empty(frame, &list.title, area);
            return;
        }
        LoadState::Ready(_) => {}
    }

    let visible = list.visible();
    let mut title = format!("{} ({})", list.title, visible.len());
    if list.editing_filter || !list.filter.is_empty() {
        let cursor = if list.editing_filter { "_" } else { "" };
        title.push_str(&format!(" - filter: {}{}", list.filter, cursor));
    }

    if visible.is_empty() {
        let empty_block = Block::default()
            .title(format!("{title} - no movies match"))
            .borders(Borders::ALL)
            .style(Style::default());

        frame.render_widget(empty_block, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|movie| {
            let mut details = vec![
                Span::styled("  ⭐ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    rating_label(movie.vote_average),
                    Style::default().fg(Color::Gray),
                ),
            ];
            if let Some(year) = release_year(movie.release_date.as_deref()) {
                details.push(Span::styled(
                    format!("  ·  {year}"),
                    Style::default().fg(Color::Gray),
                ));
            }

            ListItem::new(vec![
                Line::from(Span::styled(
                    movie.title.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(details),
            ])
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list_widget, area, &mut list.list_state);
}
