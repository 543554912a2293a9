use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type MovieId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A film as returned by the list and detail endpoints.
///
/// `genres` and `runtime` are only filled by the detail endpoint. Fields
/// this crate does not read are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            vote_average: None,
            release_date: None,
            overview: None,
            genres: None,
            runtime: None,
            extra: Map::new(),
        }
    }
}

/// Envelope of the list endpoints. Only `results` is read.
#[derive(Debug, Deserialize)]
pub(crate) struct MoviePage {
    pub results: Vec<Movie>,
}
