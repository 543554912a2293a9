use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::images::poster_url;
use super::model::{Movie, MovieId, MoviePage};
use super::transport::{HttpTransport, Transport};
use super::FetchError;
use crate::config::{ApiConfig, LANGUAGE};

/// Error bodies longer than this are cut before they reach the log.
const BODY_EXCERPT_CHARS: usize = 200;

/// Operations the screens depend on.
///
/// Every call is one fresh round trip: nothing is cached, retried or
/// paginated past the first page.
pub trait MovieApi: Send + Sync {
    fn popular_movies(&self) -> Result<Vec<Movie>, FetchError>;
    fn now_playing_movies(&self) -> Result<Vec<Movie>, FetchError>;
    fn upcoming_movies(&self) -> Result<Vec<Movie>, FetchError>;
    fn movie_details(&self, id: MovieId) -> Result<Movie, FetchError>;
    /// Raw bytes of the poster image at `poster_path`.
    fn poster(&self, poster_path: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieList {
    Popular,
    NowPlaying,
    Upcoming,
}

impl MovieList {
    pub fn path(self) -> &'static str {
        match self {
            MovieList::Popular => "movie/popular",
            MovieList::NowPlaying => "movie/now_playing",
            MovieList::Upcoming => "movie/upcoming",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient<T = HttpTransport> {
    config: Arc<ApiConfig>,
    transport: T,
}

impl TmdbClient<HttpTransport> {
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> TmdbClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list(&self, list: MovieList) -> Result<Vec<Movie>, FetchError> {
        let page: MoviePage =
            self.get_json(list.path(), &[("language", LANGUAGE), ("page", "1")])?;
        debug!(?list, count = page.results.len(), "movie list fetched");
        Ok(page.results)
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, FetchError> {
        let raw = format!("{}/{}", self.config.api_base(), path);
        let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn get_json<D: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<D, FetchError> {
        let url = self.endpoint(path, query)?;
        let response = self
            .transport
            .get(&url, Some(self.config.bearer_token()))
            .inspect_err(|e| warn!(error = %e, "request failed"))?;
        if !response.is_success() {
            let err = FetchError::Status {
                url: url.to_string(),
                status: response.status,
                body: body_excerpt(&response.body),
            };
            warn!(error = %err, "request rejected");
            return Err(err);
        }
        serde_json::from_slice(&response.body).map_err(|source| {
            let err = FetchError::Decode {
                url: url.to_string(),
                source,
            };
            warn!(error = %err, "response not understood");
            err
        })
    }
}

impl<T: Transport> MovieApi for TmdbClient<T> {
    fn popular_movies(&self) -> Result<Vec<Movie>, FetchError> {
        self.list(MovieList::Popular)
    }

    fn now_playing_movies(&self) -> Result<Vec<Movie>, FetchError> {
        self.list(MovieList::NowPlaying)
    }

    fn upcoming_movies(&self) -> Result<Vec<Movie>, FetchError> {
        self.list(MovieList::Upcoming)
    }

    fn movie_details(&self, id: MovieId) -> Result<Movie, FetchError> {
        let movie: Movie = self.get_json(&format!("movie/{id}"), &[("language", LANGUAGE)])?;
        debug!(id, title = %movie.title, "movie details fetched");
        Ok(movie)
    }

    fn poster(&self, poster_path: &str) -> Result<Vec<u8>, FetchError> {
        let raw = poster_url(&self.config, Some(poster_path)).ok_or_else(|| {
            FetchError::InvalidUrl {
                url: poster_path.to_string(),
                reason: "empty poster path".to_string(),
            }
        })?;
        let url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        let response = self.transport.get(&url, None)?;
        if !response.is_success() {
            return Err(FetchError::Status {
                url: raw,
                status: response.status,
                body: body_excerpt(&response.body),
            });
        }
        Ok(response.body)
    }
}

fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    match text.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bodies_are_cut() {
        assert_eq!(body_excerpt(b" {\"status_code\":7} \n"), r#"{"status_code":7}"#);
        assert_eq!(body_excerpt(b""), "");

        let long = "é".repeat(BODY_EXCERPT_CHARS + 50);
        let excerpt = body_excerpt(long.as_bytes());
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), BODY_EXCERPT_CHARS + 3);
    }

    #[test]
    fn list_paths() {
        assert_eq!(MovieList::Popular.path(), "movie/popular");
        assert_eq!(MovieList::NowPlaying.path(), "movie/now_playing");
        assert_eq!(MovieList::Upcoming.path(), "movie/upcoming");
    }
}
