//! Terminal browser for The Movie Database: now playing, coming soon,
//! popular titles and movie details.

pub mod app;
pub mod config;
pub mod tmdb;
pub mod ui;
