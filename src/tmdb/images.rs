use crate::config::{ApiConfig, POSTER_SIZE};

/// Builds the displayable URL of a poster.
///
/// Returns `None` when the movie has no usable `poster_path`, so callers
/// render a placeholder instead of requesting a bogus address.
pub fn poster_url(config: &ApiConfig, poster_path: Option<&str>) -> Option<String> {
    let path = poster_path?.trim();
    if path.is_empty() || path == "null" || path == "undefined" {
        return None;
    }
    let file = path.trim_start_matches('/');
    if file.is_empty() {
        return None;
    }
    Some(format!("{}/{POSTER_SIZE}/{file}", config.image_base()))
}
