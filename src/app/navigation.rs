use crate::tmdb::{Movie, MovieId};

/// Navigation targets and the parameters each one requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Popular,
    /// A list fetched elsewhere, shown without another round trip.
    SeeAll { title: String, movies: Vec<Movie> },
    MovieDetail { id: MovieId },
}

impl Route {
    pub fn see_all(title: impl Into<String>, movies: &[Movie]) -> Self {
        Route::SeeAll {
            title: title.into(),
            movies: movies.to_vec(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Popular => "popular",
            Route::SeeAll { .. } => "see-all",
            Route::MovieDetail { .. } => "movie-detail",
        }
    }
}
