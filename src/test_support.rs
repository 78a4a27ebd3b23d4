//! Scripted collaborators for panel and terminal tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};

use crate::api::{ApiClient, ApiRequest, ApiResponse, TransportError};
use crate::notify::{Confirmation, Notice, NoticeLevel, Notifier};

pub fn page_of<T: Serialize>(records: &[T]) -> Value {
    json!({ "content": records })
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct FakeApi {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: StatusCode, body: Value) {
        let body = serde_json::to_vec(&body).unwrap();
        self.push(Ok(ApiResponse::new(status, body)));
    }

    pub fn respond_empty(&self, status: StatusCode) {
        self.push(Ok(ApiResponse::new(status, Vec::new())));
    }

    pub fn fail(&self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(&self, response: Result<ApiResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<String> {
        self.requests().iter().map(ApiRequest::target).collect()
    }
}

#[async_trait]
impl ApiClient for FakeApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_owned())))
    }
}

/// Records notices; answers confirmations from a queue (default: cancel).
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
    answers: Mutex<VecDeque<bool>>,
    confirmations: Mutex<Vec<Confirmation>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn answer(&self, confirmed: bool) {
        self.answers.lock().unwrap().push_back(confirmed);
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.with_level(NoticeLevel::Success, |notice| notice.title.clone())
    }

    pub fn errors(&self) -> Vec<String> {
        self.with_level(NoticeLevel::Error, |notice| notice.text.clone())
    }

    pub fn confirmations(&self) -> usize {
        self.confirmations.lock().unwrap().len()
    }

    fn with_level(&self, level: NoticeLevel, pick: impl Fn(&Notice) -> String) -> Vec<String> {
        self.notices()
            .iter()
            .filter(|notice| notice.level == level)
            .map(pick)
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    async fn confirm(&self, confirmation: &Confirmation) -> bool {
        self.confirmations
            .lock()
            .unwrap()
            .push(confirmation.clone());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}
