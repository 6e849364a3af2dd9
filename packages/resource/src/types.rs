use std::collections::HashMap;

use serde::Serialize;

/// HTTP method for resource operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// A single resource request before base-URL resolution.
///
/// `path` is relative to the client's base origin, e.g. `artists/5/edit`.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    /// Headers for this request; they take precedence over the client's
    /// default headers.
    pub headers: HashMap<String, String>,
    /// JSON body, when the operation ships a payload.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            ..Default::default()
        }
    }

    /// Attach a serialized payload as the JSON body.
    pub fn with_body(mut self, body: impl Serialize) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Response from an executed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,

    /// Status text (e.g. "OK", "Not Found").
    pub status_text: String,

    /// Response body as a JSON value; `Null` if the body was empty or not
    /// valid JSON.
    pub body: serde_json::Value,

    /// Raw body text, useful when the body isn't JSON.
    pub body_text: Option<String>,
}

impl HttpResponse {
    /// Whether the status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Try to deserialize the body into a specific type.
    pub fn json<T: for<'de> serde::Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_method_and_path() {
        let request = HttpRequest::get("artists");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "artists");
        assert!(request.body.is_none());

        assert_eq!(HttpRequest::post("artists/new").method, Method::Post);
        assert_eq!(HttpRequest::put("artists/5/edit").method, Method::Put);
        assert_eq!(HttpRequest::delete("artists/5/delete").method, Method::Delete);
    }

    #[test]
    fn with_body_serializes_payload() {
        let request = HttpRequest::post("genres/new")
            .with_body(serde_json::json!({"name": "Ambient"}))
            .unwrap();
        assert_eq!(request.body, Some(serde_json::json!({"name": "Ambient"})));
    }

    #[test]
    fn with_header_accumulates() {
        let request = HttpRequest::get("artists")
            .with_header("Accept", "application/json")
            .with_header("X-Trace", "1");
        assert_eq!(request.headers.len(), 2);
        assert_eq!(
            request.headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn method_converts_to_http() {
        assert_eq!(http::Method::from(Method::Get), http::Method::GET);
        assert_eq!(http::Method::from(Method::Post), http::Method::POST);
        assert_eq!(http::Method::from(Method::Put), http::Method::PUT);
        assert_eq!(http::Method::from(Method::Delete), http::Method::DELETE);
    }

    #[test]
    fn response_status_classes() {
        let response = HttpResponse {
            status: 204,
            status_text: "No Content".to_string(),
            body: serde_json::Value::Null,
            body_text: None,
        };
        assert!(response.is_success());

        let response = HttpResponse {
            status: 404,
            status_text: "Not Found".to_string(),
            body: serde_json::Value::Null,
            body_text: None,
        };
        assert!(!response.is_success());
    }

    #[test]
    fn response_json_decodes_body() {
        let response = HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: serde_json::json!([{"id": 1}]),
            body_text: None,
        };
        let decoded: Vec<serde_json::Value> = response.json().unwrap();
        assert_eq!(decoded.len(), 1);
    }
}
