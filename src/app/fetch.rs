use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::tmdb::{FetchError, Movie, MovieApi, MovieId};

/// Identifies one screen activation. Never reused within a process.
pub type ScreenId = u64;

/// The work a screen asks for when it activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchJob {
    /// Now playing followed by upcoming, as one unit.
    HomeFeeds,
    Popular,
    /// Detail body, then the poster image when there is one.
    Detail(MovieId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeFeeds {
    pub now_playing: Vec<Movie>,
    pub upcoming: Vec<Movie>,
}

pub enum FetchMessage {
    HomeFeeds(Result<HomeFeeds, FetchError>),
    Movies(Result<Vec<Movie>, FetchError>),
    Detail(Result<Movie, FetchError>),
    Poster(Option<DynamicImage>),
}

/// A result addressed to the screen activation that asked for it.
pub struct Delivery {
    pub screen: ScreenId,
    pub message: FetchMessage,
}

/// Runs fetch jobs on background threads and reports back over a channel.
#[derive(Clone)]
pub struct Fetcher {
    api: Arc<dyn MovieApi>,
    sender: Sender<Delivery>,
}

impl Fetcher {
    pub fn new(api: Arc<dyn MovieApi>, sender: Sender<Delivery>) -> Self {
        Self { api, sender }
    }

    pub fn spawn(&self, screen: ScreenId, job: FetchJob) {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        debug!(screen, ?job, "starting fetch");

        thread::spawn(move || {
            run_job(api.as_ref(), screen, job, &sender);
        });
    }
}

fn run_job(api: &dyn MovieApi, screen: ScreenId, job: FetchJob, sender: &Sender<Delivery>) {
    // A closed channel means the app is gone; the result has nowhere to go.
    let send = |message: FetchMessage| {
        let _ = sender.send(Delivery { screen, message });
    };

    match job {
        FetchJob::HomeFeeds => {
            let result = api.now_playing_movies().and_then(|now_playing| {
                Ok(HomeFeeds {
                    now_playing,
                    upcoming: api.upcoming_movies()?,
                })
            });
            if let Ok(feeds) = &result {
                info!(
                    now_playing = feeds.now_playing.len(),
                    upcoming = feeds.upcoming.len(),
                    "home feeds loaded"
                );
            }
            send(FetchMessage::HomeFeeds(result));
        }
        FetchJob::Popular => {
            let result = api.popular_movies();
            if let Ok(movies) = &result {
                info!(count = movies.len(), "popular movies loaded");
            }
            send(FetchMessage::Movies(result));
        }
        FetchJob::Detail(id) => {
            let result = api.movie_details(id);
            let poster_path = result.as_ref().ok().and_then(|m| m.poster_path.clone());
            let found = result.is_ok();
            send(FetchMessage::Detail(result));

            if found {
                let image = poster_path.and_then(|path| load_poster(api, &path));
                send(FetchMessage::Poster(image));
            }
        }
    }
}

fn load_poster(api: &dyn MovieApi, poster_path: &str) -> Option<DynamicImage> {
    let bytes = api
        .poster(poster_path)
        .inspect_err(|e| warn!(error = %e, "poster download failed"))
        .ok()?;
    image::load_from_memory(&bytes)
        .inspect_err(|e| warn!(error = %e, poster_path, "poster could not be decoded"))
        .ok()
}
