use std::collections::HashMap;
use std::sync::Mutex;

use marquee::config::ApiConfig;
use marquee::tmdb::{FetchError, MovieApi, RawResponse, TmdbClient, Transport};
use reqwest::Url;
use serde_json::{Value, json};

const TOKEN: &str = "test-token";

/// Canned responses keyed by URL path, plus a log of what was requested.
#[derive(Default)]
struct FakeTransport {
    responses: HashMap<String, Result<RawResponse, String>>,
    requests: Mutex<Vec<(Url, Option<String>)>>,
}

impl FakeTransport {
    fn respond(mut self, path: &str, status: u16, body: &Value) -> Self {
        self.responses.insert(
            path.to_string(),
            Ok(RawResponse::new(status, body.to_string())),
        );
        self
    }

    fn respond_raw(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(path.to_string(), Ok(RawResponse::new(status, body)));
        self
    }

    fn fail(mut self, path: &str, reason: &str) -> Self {
        self.responses
            .insert(path.to_string(), Err(reason.to_string()));
        self
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &Url, bearer_token: Option<&str>) -> Result<RawResponse, FetchError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.clone(), bearer_token.map(str::to_string)));
        match self.responses.get(url.path()) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(reason)) => Err(FetchError::Network {
                url: url.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(RawResponse::new(404, r#"{"status_code":34}"#)),
        }
    }
}

fn client(transport: FakeTransport) -> TmdbClient<FakeTransport> {
    TmdbClient::with_transport(ApiConfig::new(TOKEN), transport)
}

fn sample_results() -> Value {
    json!([
        {
            "id": 1022789,
            "title": "Inside Out 2",
            "poster_path": "/vpnVM9B6NMmQpWeZvzLvDESb2QY.jpg",
            "vote_average": 7.6,
            "release_date": "2024-06-11",
            "overview": "Teenager Riley's mind headquarters...",
            "adult": false,
            "genre_ids": [16, 10751]
        },
        {
            "id": 519182,
            "title": "Despicable Me 4",
            "poster_path": "/wWba3TaojhK7NdycRhoQpsG0FaH.jpg",
            "vote_average": 7.1,
            "release_date": "2024-06-20",
            "overview": "Gru and Lucy...",
            "adult": false,
            "genre_ids": [16]
        },
        {
            "id": 573435,
            "title": "Bad Boys: Ride or Die",
            "vote_average": 7.5,
            "release_date": "2024-06-05",
            "overview": "After their late former Captain...",
            "adult": false,
            "genre_ids": [28, 80]
        }
    ])
}

fn page(results: &Value) -> Value {
    json!({ "page": 1, "results": results, "total_pages": 12, "total_results": 230 })
}

#[test]
fn list_operations_pass_results_through_unchanged() {
    let results = sample_results();
    let api = client(
        FakeTransport::default()
            .respond("/3/movie/popular", 200, &page(&results))
            .respond("/3/movie/now_playing", 200, &page(&results))
            .respond("/3/movie/upcoming", 200, &page(&results)),
    );

    for movies in [
        api.popular_movies().unwrap(),
        api.now_playing_movies().unwrap(),
        api.upcoming_movies().unwrap(),
    ] {
        assert_eq!(serde_json::to_value(&movies).unwrap(), results);
    }
}

#[test]
fn list_order_is_preserved() {
    let api = client(FakeTransport::default().respond(
        "/3/movie/upcoming",
        200,
        &page(&sample_results()),
    ));

    let ids: Vec<u64> = api.upcoming_movies().unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, [1022789, 519182, 573435]);
}

#[test]
fn detail_fetch_returns_the_requested_movie() {
    let body = json!({
        "id": 550,
        "title": "Fight Club",
        "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
        "vote_average": 8.4,
        "release_date": "1999-10-15",
        "runtime": 139,
        "overview": "A ticking-time-bomb insomniac...",
        "genres": [{ "id": 18, "name": "Drama" }],
        "tagline": "Mischief. Mayhem. Soap."
    });
    let api = client(FakeTransport::default().respond("/3/movie/550", 200, &body));

    let movie = api.movie_details(550).unwrap();
    assert_eq!(movie.id, 550);
    assert_eq!(movie.runtime, Some(139));
    assert_eq!(movie.genres.as_ref().map(Vec::len), Some(1));
    assert_eq!(serde_json::to_value(&movie).unwrap(), body);
}

#[test]
fn requests_carry_token_language_and_first_page() {
    let api = client(
        FakeTransport::default()
            .respond("/3/movie/now_playing", 200, &page(&json!([])))
            .respond("/3/movie/550", 200, &json!({ "id": 550, "title": "Fight Club" })),
    );

    api.now_playing_movies().unwrap();
    api.movie_details(550).unwrap();

    let transport = api_transport_requests(&api);
    assert_eq!(transport.len(), 2);

    let (list_url, list_token) = &transport[0];
    assert_eq!(
        list_url.as_str(),
        "https://api.themoviedb.org/3/movie/now_playing?language=en-US&page=1"
    );
    assert_eq!(list_token.as_deref(), Some(TOKEN));

    let (detail_url, detail_token) = &transport[1];
    assert_eq!(
        detail_url.as_str(),
        "https://api.themoviedb.org/3/movie/550?language=en-US"
    );
    assert_eq!(detail_token.as_deref(), Some(TOKEN));
}

#[test]
fn every_call_is_a_fresh_round_trip() {
    let api = client(FakeTransport::default().respond(
        "/3/movie/popular",
        200,
        &page(&sample_results()),
    ));

    api.popular_movies().unwrap();
    api.popular_movies().unwrap();
    assert_eq!(api_transport_requests(&api).len(), 2);
}

#[test]
fn server_errors_reject() {
    let api = client(
        FakeTransport::default()
            .respond("/3/movie/popular", 500, &json!({ "status_message": "boom" }))
            .respond("/3/movie/now_playing", 401, &json!({ "status_code": 7 }))
            .respond("/3/movie/upcoming", 429, &json!({ "status_code": 25 }))
            .respond("/3/movie/550", 503, &json!({})),
    );

    let err = api.popular_movies().unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));
    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("boom"), "{message}");
    assert!(api.now_playing_movies().is_err());
    assert!(api.upcoming_movies().is_err());
    assert!(api.movie_details(550).is_err());
}

#[test]
fn unknown_movie_rejects() {
    let api = client(FakeTransport::default());
    assert!(matches!(
        api.movie_details(999_999_999),
        Err(FetchError::Status { status: 404, .. })
    ));
}

#[test]
fn network_failures_reject() {
    let api = client(
        FakeTransport::default()
            .fail("/3/movie/popular", "operation timed out")
            .fail("/3/movie/now_playing", "connection refused")
            .fail("/3/movie/upcoming", "dns error")
            .fail("/3/movie/550", "connection reset"),
    );

    assert!(matches!(api.popular_movies(), Err(FetchError::Network { .. })));
    assert!(api.now_playing_movies().is_err());
    assert!(api.upcoming_movies().is_err());
    assert!(api.movie_details(550).is_err());
}

#[test]
fn malformed_bodies_reject() {
    let api = client(
        FakeTransport::default()
            .respond_raw("/3/movie/popular", 200, "<html>gateway</html>")
            .respond("/3/movie/upcoming", 200, &json!({ "page": 1 }))
            .respond("/3/movie/550", 200, &json!({ "title": "no id" })),
    );

    assert!(matches!(api.popular_movies(), Err(FetchError::Decode { .. })));
    assert!(matches!(api.upcoming_movies(), Err(FetchError::Decode { .. })));
    assert!(matches!(api.movie_details(550), Err(FetchError::Decode { .. })));
}

#[test]
fn poster_download_skips_the_token() {
    let api = client(FakeTransport::default().respond_raw("/t/p/w500/abc.jpg", 200, "jpeg-bytes"));

    let bytes = api.poster("/abc.jpg").unwrap();
    assert_eq!(bytes, b"jpeg-bytes");

    let requests = api_transport_requests(&api);
    assert_eq!(
        requests[0].0.as_str(),
        "https://image.tmdb.org/t/p/w500/abc.jpg"
    );
    assert_eq!(requests[0].1, None);
}

#[test]
fn failed_poster_download_reports_the_body() {
    let api = client(FakeTransport::default().respond_raw("/t/p/w500/gone.jpg", 404, "Not Found"));

    match api.poster("/gone.jpg") {
        Err(FetchError::Status { status, body, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
fn blank_poster_path_is_not_requested() {
    let api = client(FakeTransport::default());
    assert!(api.poster("  ").is_err());
    assert!(api_transport_requests(&api).is_empty());
}

#[test]
fn custom_api_base_is_honoured() {
    let config = ApiConfig::new(TOKEN).with_api_base("http://localhost:8080/proxy/3/");
    let api = TmdbClient::with_transport(
        config,
        FakeTransport::default().respond("/proxy/3/movie/popular", 200, &page(&json!([]))),
    );

    assert!(api.popular_movies().unwrap().is_empty());
}

fn api_transport_requests(api: &TmdbClient<FakeTransport>) -> Vec<(Url, Option<String>)> {
    api.transport().requests.lock().unwrap().clone()
}
