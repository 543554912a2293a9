mod carousel;
mod fetch;
pub mod format;
mod navigation;
mod screen;

pub use carousel::{CAROUSEL_LIMIT, Carousel};
pub use fetch::{Delivery, FetchJob, FetchMessage, Fetcher, HomeFeeds, ScreenId};
pub use navigation::Route;
pub use screen::{
    HomeFocus, HomeScreen, ListSource, LoadState, MovieDetailScreen, MovieListScreen,
    PosterState, Screen, ScreenKind,
};

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui_image::picker::Picker;
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info};

use crate::tmdb::MovieApi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    ConfirmExit,
    Booking { title: String },
}

/// A cinema offered on the detail screen before booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cinema {
    pub name: &'static str,
    /// Distance and address, when known.
    pub info: Option<&'static str>,
}

pub const CINEMAS: &[Cinema] = &[
    Cinema {
        name: "HARTONO MALL CGV",
        info: Some("4.53 Km | Jl. Ring Road Utara Jl. Kaliwar"),
    },
    Cinema {
        name: "LIPPO PLAZA JOGJA CINEPOLIS",
        info: None,
    },
];

/// What happened to a fetch result when it reached the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The screen that asked for it has been closed.
    Discarded,
}

pub struct App {
    /// Bottom of the navigation stack; never popped.
    pub root: Screen,
    /// Screens pushed on top of the root, last is visible.
    pub stack: Vec<Screen>,
    pub popup: Option<Popup>,
    pub exit: bool,
    pub throbber: ThrobberState,
    fetcher: Option<Fetcher>,
    receiver: Receiver<Delivery>,
    picker: Option<Picker>,
    next_id: ScreenId,
}

impl App {
    /// Without an API the app can only show the setup instructions.
    pub fn new(api: Option<Arc<dyn MovieApi>>) -> Self {
        let (sender, receiver) = mpsc::channel();
        let fetcher = api.map(|api| Fetcher::new(api, sender));

        let (root, job) = if fetcher.is_some() {
            Screen::activate(1, Route::Home)
        } else {
            (Screen::setup(1), None)
        };

        let app = Self {
            root,
            stack: Vec::new(),
            popup: None,
            exit: false,
            throbber: ThrobberState::default(),
            fetcher,
            receiver,
            picker: None,
            next_id: 2,
        };
        if let Some(job) = job {
            app.spawn(app.root.id, job);
        }
        app
    }

    /// Enables inline posters on terminals that can draw images.
    pub fn with_picker(mut self, picker: Picker) -> Self {
        self.picker = Some(picker);
        self
    }

    pub fn current(&self) -> &Screen {
        self.stack.last().unwrap_or(&self.root)
    }

    fn current_mut(&mut self) -> &mut Screen {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    pub fn is_configured(&self) -> bool {
        self.fetcher.is_some()
    }

    pub fn navigate(&mut self, route: Route) {
        if !self.is_configured() {
            return;
        }
        let id = self.next_id;
        self.next_id += 1;
        info!(route = route.name(), screen = id, "navigate");

        let (screen, job) = Screen::activate(id, route);
        self.stack.push(screen);
        if let Some(job) = job {
            self.spawn(id, job);
        }
    }

    /// Pops the visible screen. Returns false on the root screen.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(screen) => {
                debug!(screen = screen.id, "screen closed");
                true
            }
            None => false,
        }
    }

    pub fn refresh(&mut self) {
        let screen = self.current_mut();
        let id = screen.id;
        if let Some(job) = screen.refresh() {
            self.spawn(id, job);
        }
    }

    fn spawn(&self, screen: ScreenId, job: FetchJob) {
        if let Some(fetcher) = &self.fetcher {
            fetcher.spawn(screen, job);
        }
    }

    /// Applies every fetch result that has arrived so far.
    pub fn pump(&mut self) {
        while let Ok(delivery) = self.receiver.try_recv() {
            self.deliver(delivery);
        }
    }

    /// Waits up to `timeout` for the next fetch result and applies it.
    pub fn receive(&mut self, timeout: Duration) -> Option<Outcome> {
        let delivery = self.receiver.recv_timeout(timeout).ok()?;
        Some(self.deliver(delivery))
    }

    fn deliver(&mut self, delivery: Delivery) -> Outcome {
        let Delivery { screen, message } = delivery;
        let target = std::iter::once(&mut self.root)
            .chain(self.stack.iter_mut())
            .find(|s| s.id == screen);
        let Some(target) = target else {
            debug!(screen, "result for a closed screen discarded");
            return Outcome::Discarded;
        };

        match (&mut target.kind, message) {
            (ScreenKind::Home(home), FetchMessage::HomeFeeds(result)) => home.apply(result),
            (ScreenKind::MovieList(list), FetchMessage::Movies(result)) => list.apply(result),
            (ScreenKind::MovieDetail(detail), FetchMessage::Detail(result)) => {
                detail.apply(result)
            }
            (ScreenKind::MovieDetail(detail), FetchMessage::Poster(image)) => {
                detail.poster = match (image, &self.picker) {
                    (Some(image), Some(picker)) => {
                        PosterState::Ready(picker.new_resize_protocol(image))
                    }
                    _ => PosterState::Missing,
                };
            }
            _ => {
                debug!(screen, "result does not belong to this screen");
                return Outcome::Discarded;
            }
        }
        Outcome::Applied
    }

    /// Advances animations and picks up finished fetches.
    pub fn on_tick(&mut self) {
        self.pump();
        if self.current().is_pending() {
            self.throbber.calc_next();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if let Some(popup) = self.popup.clone() {
            match (popup, key.code) {
                (Popup::ConfirmExit, KeyCode::Char('y')) => self.exit = true,
                (Popup::ConfirmExit, KeyCode::Char('n') | KeyCode::Esc) => self.popup = None,
                (Popup::ConfirmExit, _) => {}
                (Popup::Booking { .. }, _) => self.popup = None,
            }
            return;
        }

        if let ScreenKind::MovieList(list) = &mut self.current_mut().kind {
            if list.editing_filter {
                match key.code {
                    KeyCode::Char(c) => list.push_filter(c),
                    KeyCode::Backspace => list.pop_filter(),
                    KeyCode::Enter => list.editing_filter = false,
                    KeyCode::Esc => list.clear_filter(),
                    _ => {}
                }
                return;
            }
        }

        match key.code {
            KeyCode::Char('q') => self.popup = Some(Popup::ConfirmExit),
            KeyCode::Esc | KeyCode::Backspace => {
                if !self.back() {
                    self.popup = Some(Popup::ConfirmExit);
                }
            }
            KeyCode::Char('r') => self.refresh(),
            code => self.handle_screen_key(code),
        }
    }

    fn handle_screen_key(&mut self, code: KeyCode) {
        let mut route = None;
        let mut popup = None;

        match &mut self.current_mut().kind {
            ScreenKind::Setup => {}
            ScreenKind::Home(home) => match code {
                KeyCode::Left | KeyCode::Char('h') => home.focused_strip().previous(),
                KeyCode::Right | KeyCode::Char('l') => home.focused_strip().next(),
                KeyCode::Tab => home.toggle_focus(),
                KeyCode::Char(dot @ '1'..='5') => {
                    home.focus = HomeFocus::NowPlaying;
                    home.now_playing.select((dot as u8 - b'1') as usize);
                }
                KeyCode::Enter => {
                    route = home.focused_movie().map(|m| Route::MovieDetail { id: m.id });
                }
                KeyCode::Char('a') => {
                    route = home
                        .feeds
                        .ready()
                        .map(|f| Route::see_all("Now Playing", &f.now_playing));
                }
                KeyCode::Char('c') => {
                    route = home
                        .feeds
                        .ready()
                        .map(|f| Route::see_all("Coming Soon", &f.upcoming));
                }
                KeyCode::Char('p') => route = Some(Route::Popular),
                _ => {}
            },
            ScreenKind::MovieList(list) => match code {
                KeyCode::Down | KeyCode::Char('j') => list.next(),
                KeyCode::Up | KeyCode::Char('k') => list.previous(),
                KeyCode::Enter => {
                    route = list
                        .selected_movie()
                        .map(|m| Route::MovieDetail { id: m.id });
                }
                KeyCode::Char('/') if list.movies.ready().is_some() => {
                    list.editing_filter = true;
                }
                _ => {}
            },
            ScreenKind::MovieDetail(detail) => {
                if let (KeyCode::Char('b'), Some(movie)) = (code, detail.movie.ready()) {
                    info!(id = movie.id, "booking confirmed");
                    popup = Some(Popup::Booking {
                        title: movie.title.clone(),
                    });
                }
            }
        }

        if popup.is_some() {
            self.popup = popup;
        }
        if let Some(route) = route {
            self.navigate(route);
        }
    }

    /// Mouse wheel: moves whatever selection the visible screen has.
    pub fn scroll(&mut self, forward: bool) {
        match &mut self.current_mut().kind {
            ScreenKind::Home(home) if forward => home.focused_strip().next(),
            ScreenKind::Home(home) => home.focused_strip().previous(),
            ScreenKind::MovieList(list) if forward => list.next(),
            ScreenKind::MovieList(list) => list.previous(),
            _ => {}
        }
    }
}
