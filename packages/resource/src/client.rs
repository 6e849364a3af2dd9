//! Injected client configuration.
//!
//! A [`RestClient`] is constructed once by the caller and passed into every
//! resource handle, so the base origin is explicit per client instead of
//! process-wide state.

use std::collections::HashMap;
use std::sync::Arc;

use url::Url;

use crate::error::Error;
use crate::executor::{HttpExecutor, ReqwestExecutor};
use crate::types::{HttpRequest, HttpResponse};

/// Origin of the bundled local backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// Client configuration shared by every resource handle built on it.
///
/// Owns the base origin, the executor, and headers applied to every
/// request. Cloning is cheap; clones share the executor.
#[derive(Clone)]
pub struct RestClient {
    executor: Arc<dyn HttpExecutor>,
    base_url: Url,
    default_headers: HashMap<String, String>,
}

impl RestClient {
    /// Create a client for the given base origin.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            executor: Arc::new(ReqwestExecutor::new()),
            base_url: Url::parse(base_url)?,
            default_headers: HashMap::new(),
        })
    }

    /// Client for the local development backend at [`DEFAULT_BASE_URL`].
    pub fn local() -> Result<Self, Error> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Replace the executor, keeping base origin and headers.
    pub fn with_executor(mut self, executor: Arc<dyn HttpExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// Add a header sent with every request. Request-level headers win.
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// The configured base origin.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute a request; a non-success status becomes [`Error::Status`]
    /// before the caller sees the response.
    pub async fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, Error> {
        let url = self.base_url.join(&request.path)?;

        for (name, value) in &self.default_headers {
            request
                .headers
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }

        let response = self.executor.execute(url, &request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(Error::Status {
                status: response.status,
                status_text: response.status_text,
            })
        }
    }
}
