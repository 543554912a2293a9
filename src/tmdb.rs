//! Access layer for The Movie Database v3 API.

mod client;
mod images;
mod model;
mod transport;

pub use client::{MovieApi, MovieList, TmdbClient};
pub use images::poster_url;
pub use model::{Genre, Movie, MovieId};
pub use transport::{HttpTransport, RawResponse, Transport};

use thiserror::Error;

/// The single failure class of the client.
///
/// Variants only exist to carry diagnostics into the log; callers are
/// expected to treat all of them the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetch failed: cannot build request url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("fetch failed: request to {url} did not complete: {reason}")]
    Network { url: String, reason: String },
    #[error("fetch failed: {url} answered with status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        /// Start of the response body, cut to a log-friendly length.
        body: String,
    },
    #[error("fetch failed: unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
