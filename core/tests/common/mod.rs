//! Test doubles shared by the integration test files.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::error::Error;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;
use todo_store::{
    ClientConfig, DiagnosticSink, HttpRequest, HttpResponse, TodoItem, TodoStore, Transport, TransportError,
};
use uuid::Uuid;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn config() -> ClientConfig {
    ClientConfig {
        base_url: BASE_URL.to_string(),
        ..ClientConfig::default()
    }
}

pub fn todo(title: &str, status: bool) -> TodoItem {
    TodoItem {
        id: Uuid::new_v4(),
        title: title.to_string(),
        status,
    }
}

/// A 200 list response with `count` open todos and the given total.
pub fn list_response(count: usize, total: u64) -> HttpResponse {
    let items: Vec<TodoItem> = (0..count).map(|i| todo(&format!("todo {i}"), false)).collect();
    HttpResponse {
        status: 200,
        headers: Vec::new(),
        body: serde_json::json!({ "items": items, "total": total }).to_string(),
    }
}

/// A 201 create response echoing `title`/`status`.
pub fn created_response(title: &str, status: bool) -> HttpResponse {
    HttpResponse {
        status: 201,
        headers: Vec::new(),
        body: serde_json::to_string(&todo(title, status)).unwrap(),
    }
}

/// Replays canned results in order and records every request.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<Result<HttpResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no canned response left")))
    }
}

/// Each call waits on the next receiver, so a test decides when and in
/// which order in-flight calls resolve.
pub struct GatedTransport {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<HttpResponse, TransportError>>>>,
    calls: Mutex<usize>,
}

impl GatedTransport {
    pub fn new(
        count: usize,
    ) -> (Arc<Self>, Vec<oneshot::Sender<Result<HttpResponse, TransportError>>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) = (0..count).map(|_| oneshot::channel()).unzip();
        let transport = Arc::new(Self {
            gates: Mutex::new(receivers),
            calls: Mutex::new(0),
        });
        (transport, senders)
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let gate = {
            *self.calls.lock().unwrap() += 1;
            self.gates.lock().unwrap().pop_front()
        };
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(TransportError::new("gate dropped"))),
            None => Err(TransportError::new("no gate left")),
        }
    }
}

/// Keeps the display string of every reported error.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, error: &(dyn Error + 'static)) {
        self.reports.lock().unwrap().push(error.to_string());
    }
}

pub fn store_with(transport: Arc<dyn Transport>, sink: Arc<RecordingSink>) -> TodoStore {
    TodoStore::new(&config(), transport, sink)
}
