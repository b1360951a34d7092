use crate::config::CSRF_HEADER;
use crate::error::{ApiResult, AppError};
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path below the API base url, e.g. `/api/stats`.
    pub path: String,
    pub csrf_token: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request to the backend and back.
///
/// Implementations report only transport-level failures; HTTP status handling
/// lives in [`super::ApiClient`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

/// Browser `fetch` transport (via reqwest's wasm backend).
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut req = self
            .client
            .request(request.method.into(), url)
            .header("Content-Type", "application/json");

        if let Some(token) = request.csrf_token {
            req = req.header(CSRF_HEADER, token);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }
        // Session cookie rides along on cross-origin calls.
        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }

        let res = req.send().await.map_err(AppError::transport)?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(AppError::transport)?;

        Ok(HttpResponse { status, body })
    }
}
