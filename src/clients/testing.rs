//! In-memory request sender for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use reqwest::Url;
use serde_json::Value;

use crate::clients::{HttpError, HttpRequest, HttpResponse, HttpResponseError, RequestSender};

pub(crate) const TEST_BASE_URL: &str = "https://api.test/shops/demo/";

/// Replays canned responses in order and records every request it sees.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSender {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedSender {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_json(self, code: u16, body: Value) -> Self {
        self.push(Ok(HttpResponse::new(code, HashMap::new(), body)));
        self
    }

    pub(crate) fn with_status(self, code: u16, body: &str) -> Self {
        self.push(Err(HttpError::Response(HttpResponseError {
            code,
            body: body.to_string(),
            request_id: None,
        })));
        self
    }

    fn push(&self, response: Result<HttpResponse, HttpError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl RequestSender for ScriptedSender {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("ScriptedSender ran out of responses")
    }

    fn resolve_url(&self, path: &str) -> String {
        Url::parse(TEST_BASE_URL)
            .and_then(|base| base.join(path))
            .map(String::from)
            .unwrap()
    }
}
