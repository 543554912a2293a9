use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::trace;

use super::FetchError;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One blocking GET. Implementations never look at the status code.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url, bearer_token: Option<&str>) -> Result<RawResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// `None` leaves requests without a deadline.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url, bearer_token: Option<&str>) -> Result<RawResponse, FetchError> {
        let mut request = self.client.get(url.clone()).header(ACCEPT, "application/json");
        if let Some(token) = bearer_token {
            request = request.bearer_auth(token);
        }

        let network = |e: reqwest::Error| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        };
        let response = request.send().map_err(network)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(network)?;
        trace!(%url, status, bytes = body.len(), "response received");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
