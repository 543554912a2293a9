use chrono::{Datelike, NaiveDate};

use crate::tmdb::Genre;

pub const NOT_AVAILABLE: &str = "N/A";

/// One decimal, or `N/A` for unrated movies. The service reports 0 for
/// titles nobody has voted on yet, so 0 counts as unrated.
pub fn rating_label(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(v) if v > 0.0 && v.is_finite() => format!("{v:.1}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// 147 -> "2h 27m"
pub fn runtime_label(runtime: Option<u32>) -> String {
    match runtime {
        Some(minutes) if minutes > 0 => format!("{}h {}m", minutes / 60, minutes % 60),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn genres_label(genres: Option<&[Genre]>) -> String {
    match genres {
        Some(list) if !list.is_empty() => list
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => "Unknown Genre".to_string(),
    }
}

/// Year of a full `YYYY-MM-DD` date, or the leading four digits of a
/// partial one such as "2025" or "2025-06".
pub fn release_year(release_date: Option<&str>) -> Option<i32> {
    let raw = release_date?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }
    raw.get(..4)
        .filter(|year| year.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|year| year.parse().ok())
}

pub fn release_date_label(release_date: Option<&str>) -> String {
    match release_date.map(str::trim) {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn overview_label(overview: Option<&str>) -> &str {
    match overview.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => "No synopsis provided.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(rating_label(Some(7.26)), "7.3");
        assert_eq!(rating_label(Some(8.0)), "8.0");
        assert_eq!(rating_label(Some(0.0)), "N/A");
        assert_eq!(rating_label(None), "N/A");
    }

    #[test]
    fn runtime_in_hours_and_minutes() {
        assert_eq!(runtime_label(Some(147)), "2h 27m");
        assert_eq!(runtime_label(Some(45)), "0h 45m");
        assert_eq!(runtime_label(Some(0)), "N/A");
        assert_eq!(runtime_label(None), "N/A");
    }

    #[test]
    fn genres_are_joined_in_order() {
        let genres = vec![
            Genre {
                id: 18,
                name: "Drama".to_string(),
            },
            Genre {
                id: 53,
                name: "Thriller".to_string(),
            },
        ];
        assert_eq!(genres_label(Some(genres.as_slice())), "Drama, Thriller");
        assert_eq!(genres_label(Some(&[][..])), "Unknown Genre");
        assert_eq!(genres_label(None), "Unknown Genre");
    }

    #[test]
    fn release_year_from_full_or_partial_dates() {
        assert_eq!(release_year(Some("1999-10-15")), Some(1999));
        assert_eq!(release_year(Some("2025")), Some(2025));
        assert_eq!(release_year(Some(" 2025-06 ")), Some(2025));
        assert_eq!(release_year(Some("")), None);
        assert_eq!(release_year(Some("20x5-01-01")), None);
        assert_eq!(release_year(Some("soon")), None);
        assert_eq!(release_year(None), None);
    }

    #[test]
    fn placeholders_for_missing_text() {
        assert_eq!(release_date_label(Some("2025-01-31")), "2025-01-31");
        assert_eq!(release_date_label(Some(" ")), "N/A");
        assert_eq!(overview_label(None), "No synopsis provided.");
        assert_eq!(overview_label(Some("A plot.")), "A plot.");
    }
}
