//! In-memory backend for driving the client without a browser.

use crate::api::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::{ApiResult, AppError};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub(crate) use futures::executor::block_on;

type RouteKey = (Method, String);

#[derive(Default)]
struct MockInner {
    routes: HashMap<RouteKey, ApiResult<HttpResponse>>,
    gates: HashMap<RouteKey, oneshot::Receiver<()>>,
    requests: Vec<HttpRequest>,
}

/// Scripted transport. Each route answers with the last response set for it;
/// unknown routes fail like an unreachable server.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    inner: Rc<RefCell<MockInner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.inner.borrow_mut().routes.insert(
            (method, path.to_string()),
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: Method, path: &str) {
        self.inner.borrow_mut().routes.insert(
            (method, path.to_string()),
            Err(AppError::transport("connection refused")),
        );
    }

    /// Holds the next request to `path` until the returned sender fires (or is dropped).
    pub fn hold(&self, method: Method, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner
            .borrow_mut()
            .gates
            .insert((method, path.to_string()), rx);
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let key = (request.method, request.path.clone());
        let gate = {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(request);
            inner.gates.remove(&key)
        };

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.inner
            .borrow()
            .routes
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(AppError::transport(format!("no route for {key:?}"))))
    }
}
