use ratatui::widgets::ListState;
use ratatui_image::protocol::StatefulProtocol;
use tracing::warn;

use super::carousel::{CAROUSEL_LIMIT, Carousel};
use super::fetch::{FetchJob, HomeFeeds, ScreenId};
use super::navigation::Route;
use crate::tmdb::{FetchError, Movie, MovieId};

/// Observable state of a screen's fetched data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Ready(T),
    /// Nothing to show, whatever the reason.
    Empty,
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                warn!(error = %e, "showing empty state");
                LoadState::Empty
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    NowPlaying,
    ComingSoon,
}

pub struct HomeScreen {
    pub feeds: LoadState<HomeFeeds>,
    pub focus: HomeFocus,
    pub now_playing: Carousel,
    pub coming_soon: Carousel,
}

impl HomeScreen {
    fn new() -> Self {
        Self {
            feeds: LoadState::Pending,
            focus: HomeFocus::NowPlaying,
            now_playing: Carousel::default(),
            coming_soon: Carousel::default(),
        }
    }

    pub fn apply(&mut self, result: Result<HomeFeeds, FetchError>) {
        self.feeds = LoadState::from_result(result);
        let feeds = self.feeds.ready();
        let strip = |movies: Option<&Vec<Movie>>| {
            Carousel::new(movies.map_or(0, |m| m.len().min(CAROUSEL_LIMIT)))
        };
        self.now_playing = strip(feeds.map(|f| &f.now_playing));
        self.coming_soon = strip(feeds.map(|f| &f.upcoming));
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            HomeFocus::NowPlaying => HomeFocus::ComingSoon,
            HomeFocus::ComingSoon => HomeFocus::NowPlaying,
        };
    }

    pub fn focused_strip(&mut self) -> &mut Carousel {
        match self.focus {
            HomeFocus::NowPlaying => &mut self.now_playing,
            HomeFocus::ComingSoon => &mut self.coming_soon,
        }
    }

    pub fn focused_movie(&self) -> Option<&Movie> {
        let feeds = self.feeds.ready()?;
        match self.focus {
            HomeFocus::NowPlaying => feeds.now_playing.get(self.now_playing.active()),
            HomeFocus::ComingSoon => feeds.upcoming.get(self.coming_soon.active()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Fetched on activation.
    Popular,
    /// Handed over by the previous screen.
    Provided,
}

pub struct MovieListScreen {
    pub title: String,
    pub source: ListSource,
    pub movies: LoadState<Vec<Movie>>,
    pub selected: usize,
    pub list_state: ListState,
    pub filter: String,
    pub editing_filter: bool,
}

impl MovieListScreen {
    fn new(title: String, source: ListSource, movies: LoadState<Vec<Movie>>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            title,
            source,
            movies,
            selected: 0,
            list_state,
            filter: String::new(),
            editing_filter: false,
        }
    }

    pub fn apply(&mut self, result: Result<Vec<Movie>, FetchError>) {
        self.movies = LoadState::from_result(result);
        self.reset_selection();
    }

    /// Movies matching the title filter, in fetched order.
    pub fn visible(&self) -> Vec<&Movie> {
        let Some(movies) = self.movies.ready() else {
            return Vec::new();
        };
        let needle = self.filter.trim().to_lowercase();
        movies
            .iter()
            .filter(|m| needle.is_empty() || m.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.visible().get(self.selected).copied()
    }

    pub fn next(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
        self.list_state.select(Some(self.selected));
    }

    pub fn previous(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
        self.list_state.select(Some(self.selected));
    }

    pub fn push_filter(&mut self, c: char) {
        self.filter.push(c);
        self.reset_selection();
    }

    pub fn pop_filter(&mut self) {
        self.filter.pop();
        self.reset_selection();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.editing_filter = false;
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.list_state.select(Some(0));
    }
}

pub enum PosterState {
    Loading,
    Ready(StatefulProtocol),
    Missing,
}

pub struct MovieDetailScreen {
    pub id: MovieId,
    pub movie: LoadState<Movie>,
    pub poster: PosterState,
}

impl MovieDetailScreen {
    fn new(id: MovieId) -> Self {
        Self {
            id,
            movie: LoadState::Pending,
            poster: PosterState::Loading,
        }
    }

    pub fn apply(&mut self, result: Result<Movie, FetchError>) {
        self.movie = LoadState::from_result(result);
        if self.movie.ready().is_none() {
            self.poster = PosterState::Missing;
        }
    }
}

pub enum ScreenKind {
    /// Shown instead of Home when no credential is configured.
    Setup,
    Home(HomeScreen),
    MovieList(MovieListScreen),
    MovieDetail(MovieDetailScreen),
}

pub struct Screen {
    pub id: ScreenId,
    pub kind: ScreenKind,
}

impl Screen {
    /// Builds the screen for `route` and the job its activation needs.
    pub fn activate(id: ScreenId, route: Route) -> (Self, Option<FetchJob>) {
        let (kind, job) = match route {
            Route::Home => (ScreenKind::Home(HomeScreen::new()), Some(FetchJob::HomeFeeds)),
            Route::Popular => (
                ScreenKind::MovieList(MovieListScreen::new(
                    "Popular".to_string(),
                    ListSource::Popular,
                    LoadState::Pending,
                )),
                Some(FetchJob::Popular),
            ),
            Route::SeeAll { title, movies } => (
                ScreenKind::MovieList(MovieListScreen::new(
                    title,
                    ListSource::Provided,
                    LoadState::Ready(movies),
                )),
                None,
            ),
            Route::MovieDetail { id } => (
                ScreenKind::MovieDetail(MovieDetailScreen::new(id)),
                Some(FetchJob::Detail(id)),
            ),
        };
        (Self { id, kind }, job)
    }

    pub fn setup(id: ScreenId) -> Self {
        Self {
            id,
            kind: ScreenKind::Setup,
        }
    }

    pub fn title(&self) -> String {
        match &self.kind {
            ScreenKind::Setup => "Setup".to_string(),
            ScreenKind::Home(_) => "Home".to_string(),
            ScreenKind::MovieList(list) => list.title.clone(),
            ScreenKind::MovieDetail(_) => "Movie Details".to_string(),
        }
    }

    pub fn is_pending(&self) -> bool {
        match &self.kind {
            ScreenKind::Setup => false,
            ScreenKind::Home(home) => home.feeds.is_pending(),
            ScreenKind::MovieList(list) => list.movies.is_pending(),
            ScreenKind::MovieDetail(detail) => detail.movie.is_pending(),
        }
    }

    /// True while any part of the activation's job can still deliver,
    /// including a detail poster that trails the detail body.
    pub fn is_fetching(&self) -> bool {
        match &self.kind {
            ScreenKind::MovieDetail(detail) => {
                detail.movie.is_pending() || matches!(detail.poster, PosterState::Loading)
            }
            _ => self.is_pending(),
        }
    }

    /// Puts the screen back into pending and returns the job to run, unless
    /// a fetch is already in flight or the screen has nothing to fetch.
    pub fn refresh(&mut self) -> Option<FetchJob> {
        if self.is_fetching() {
            return None;
        }
        match &mut self.kind {
            ScreenKind::Home(home) => {
                home.feeds = LoadState::Pending;
                Some(FetchJob::HomeFeeds)
            }
            ScreenKind::MovieList(list) if list.source == ListSource::Popular => {
                list.movies = LoadState::Pending;
                Some(FetchJob::Popular)
            }
            ScreenKind::MovieDetail(detail) => {
                detail.movie = LoadState::Pending;
                detail.poster = PosterState::Loading;
                Some(FetchJob::Detail(detail.id))
            }
            _ => None,
        }
    }
}
