use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use super::{check_response, Transport};
use crate::error::RequestSummary;
use crate::request::Request;
use crate::session::Session;
use crate::Result;

/// Replays scripted responses and records every request it is handed.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<(u16, Bytes)>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<MockTransport> {
        Arc::new(MockTransport::default())
    }

    pub(crate) fn push(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .push_back((status, Bytes::copy_from_slice(body.as_bytes())));
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().clone()
    }

    pub(crate) fn session(self: &Arc<Self>) -> Session {
        Session::new("Bot token", self.clone())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch_raw(&self, _session: &Session, request: Request) -> Result<Bytes> {
        let summary = RequestSummary::new(request.method.clone(), request.endpoint.clone(), &request.headers);
        self.requests.lock().push(request);

        let (status, body) = self
            .responses
            .lock()
            .pop_front()
            .expect("no scripted response left");
        let status = StatusCode::from_u16(status).expect("invalid status");

        check_response(summary, status, HeaderMap::new(), body)
    }
}
