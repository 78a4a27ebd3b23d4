use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// One call against the employees API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, without a leading slash.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            method,
            path: path.trim_start_matches('/').to_owned(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_json(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PUT, path).with_json(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Logical request target, e.g. `/employees?email=a@example.com`.
    ///
    /// Query values are shown as given; the transport does the encoding.
    pub fn target(&self) -> String {
        let mut target = format!("/{}", self.path);
        if !self.query.is_empty() {
            let pairs = self
                .query
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("&");
            target.push('?');
            target.push_str(&pairs);
        }
        target
    }
}

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The request never produced an HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid request target `{0}`")]
    InvalidTarget(String),
    #[error("the request timed out")]
    Timeout,
    #[error("could not reach the server: {0}")]
    Connect(String),
    #[error("transport failure: {0}")]
    Other(String),
}

/// Generic HTTP verbs against a configured base URL.
///
/// Implementors only provide [`ApiClient::send`]; the verb helpers build the
/// matching [`ApiRequest`].
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;

    async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<ApiResponse, TransportError> {
        let request = query
            .into_iter()
            .fold(ApiRequest::get(path), |request, (key, value)| {
                request.with_query(key, value)
            });
        self.send(request).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, TransportError> {
        self.send(ApiRequest::post(path, body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<ApiResponse, TransportError> {
        self.send(ApiRequest::put(path, body)).await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.send(ApiRequest::delete(path)).await
    }
}
