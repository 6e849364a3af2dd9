//! HTTP execution abstraction.
//!
//! The wrapper talks to the network through this trait, so tests can inject
//! scripted responses and callers can swap the transport without touching
//! resource semantics.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::Error;
use crate::types::{HttpRequest, HttpResponse};

/// Trait for executing HTTP requests.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Execute a single request against an absolute URL.
    ///
    /// Returns `Err` only when no response was produced; a response with an
    /// error status is still `Ok` and classified by the caller.
    async fn execute(&self, url: Url, request: &HttpRequest) -> Result<HttpResponse, Error>;
}

/// Production executor backed by reqwest.
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    /// Create an executor with no request deadline; the underlying transport
    /// decides when a request is dead.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create an executor that fails requests after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Default for ReqwestExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, url: Url, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self.client.request(request.method.into(), url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let body_text = response.text().await?;
        let body = serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null);

        Ok(HttpResponse {
            status,
            status_text,
            body,
            body_text: Some(body_text),
        })
    }
}

/// Scripted executor for unit tests.
#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::types::Method;

    /// One request as the executor saw it, with the URL already resolved.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub headers: HashMap<String, String>,
        pub body: Option<serde_json::Value>,
    }

    /// A mock executor that records requests and replays scripted responses.
    #[derive(Clone, Default)]
    pub struct MockExecutor {
        /// Responses keyed by URL path.
        responses: Arc<Mutex<HashMap<String, HttpResponse>>>,
        /// Fallback when no path matches.
        default_response: Arc<Mutex<Option<HttpResponse>>>,
        /// Every request seen, in order.
        recorded: Arc<Mutex<Vec<RecordedRequest>>>,
        /// When set, all requests fail as transport errors with this message.
        failure: Arc<Mutex<Option<String>>>,
    }

    impl MockExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script a response for a specific URL path.
        pub fn with_response(self, path: impl Into<String>, response: HttpResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(path.into(), response);
            self
        }

        /// Script a fallback response for unmatched paths.
        pub fn with_default_response(self, response: HttpResponse) -> Self {
            *self.default_response.lock().unwrap() = Some(response);
            self
        }

        /// Make every request fail as a transport error.
        pub fn fail_with(self, message: impl Into<String>) -> Self {
            *self.failure.lock().unwrap() = Some(message.into());
            self
        }

        /// Every request executed so far, in order.
        pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
            self.recorded.lock().unwrap().clone()
        }

        /// The recorded requests reduced to (method, URL path) pairs.
        pub fn recorded_paths(&self) -> Vec<(Method, String)> {
            self.recorded_requests()
                .into_iter()
                .map(|request| (request.method, request.path))
                .collect()
        }

        /// A 200 response carrying `body`.
        pub fn ok(body: serde_json::Value) -> HttpResponse {
            let body_text = body.to_string();
            HttpResponse {
                status: 200,
                status_text: "OK".to_string(),
                body,
                body_text: Some(body_text),
            }
        }

        /// An error response with the given status line.
        pub fn error(status: u16, status_text: &str) -> HttpResponse {
            HttpResponse {
                status,
                status_text: status_text.to_string(),
                body: serde_json::Value::Null,
                body_text: None,
            }
        }
    }

    #[async_trait]
    impl HttpExecutor for MockExecutor {
        async fn execute(&self, url: Url, request: &HttpRequest) -> Result<HttpResponse, Error> {
            self.recorded.lock().unwrap().push(RecordedRequest {
                method: request.method,
                path: url.path().to_string(),
                headers: request.headers.clone(),
                body: request.body.clone(),
            });

            if let Some(message) = self.failure.lock().unwrap().clone() {
                return Err(Error::Transport { message });
            }

            if let Some(response) = self.responses.lock().unwrap().get(url.path()) {
                return Ok(response.clone());
            }

            if let Some(response) = self.default_response.lock().unwrap().clone() {
                return Ok(response);
            }

            Ok(Self::error(404, "Not Found"))
        }
    }
}
