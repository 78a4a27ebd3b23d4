//! Reqwest-backed API client.
//!
//! Owns transport details only: URL joining, query encoding, JSON bodies and
//! the request timeout. Status codes are interpreted by the panel.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use tracing::{debug, warn};

use super::client::{ApiClient, ApiRequest, ApiResponse, TransportError};

pub struct ReqwestApiClient {
    client: Client,
    base_url: Url,
}

impl ReqwestApiClient {
    /// Build a client for `base_url` with an explicit per-request timeout.
    ///
    /// A missing trailing slash is added so relative paths join below the
    /// base path instead of replacing its last segment.
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        self.base_url
            .join(&request.path)
            .map_err(|_| TransportError::InvalidTarget(request.target()))
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request)?;
        let target = request.target();
        debug!(method = %request.method, target = %target, "sending request");

        let mut builder = self
            .client
            .request(request.method, url)
            .header(header::ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(target = %target, status = %status, bytes = body.len(), "response received");

        Ok(ApiResponse::new(status, body.to_vec()))
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    warn!(error = %error, "request failed before a response arrived");
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}
