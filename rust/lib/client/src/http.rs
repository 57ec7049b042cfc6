use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::TokenSource;
use crate::client::Transport;
use crate::error::ApiError;
use crate::request::{ApiRequest, Body, Method, Part};

/// reqwest-backed [`Transport`].
///
/// URLs are `{base_url}{path}?{query}`; a bearer token is attached when
/// the token source yields one.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    token_source: Arc<dyn TokenSource>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, token_source: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_source,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }

    /// Build a request with auth header.
    async fn authed(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = self
            .token_source
            .token()
            .await
            .map_err(|e| {
                if matches!(e, ApiError::Auth(_)) {
                    e
                } else {
                    ApiError::Auth(e.to_string())
                }
            })?;
        match token {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    fn form(parts: Vec<Part>) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part {
                Part::Text { name, value } => form.text(name, value),
                Part::File {
                    name,
                    file_name,
                    mime,
                    bytes,
                } => {
                    let mut file = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                    if let Some(mime) = mime {
                        file = file.mime_str(&mime).map_err(|e| {
                            ApiError::Decode(format!("content type '{}': {}", mime, e))
                        })?;
                    }
                    form.part(name, file)
                }
            };
        }
        Ok(form)
    }

    /// Parse an API response, mapping HTTP errors to `ApiError`.
    async fn parse(resp: reqwest::Response) -> Result<serde_json::Value, ApiError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError> {
        let url = self.url(&request);
        debug!(method = %request.method, %url, "api request");

        let builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        let builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart(parts) => builder.multipart(Self::form(parts)?),
        };
        let builder = self.authed(builder).await?;

        let resp = builder.send().await?;
        let result = Self::parse(resp).await;
        if let Err(ref e) = result {
            warn!(method = %request.method, %url, error = %e, "api request failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::NoAuth;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let t = HttpTransport::new("http://localhost:8000/", Arc::new(NoAuth));
        assert_eq!(t.base_url(), "http://localhost:8000");
        let req = ApiRequest::get("/api/quizzes").query("courseId", "c 1");
        assert_eq!(t.url(&req), "http://localhost:8000/api/quizzes?courseId=c%201");
    }

    #[test]
    fn form_accepts_files_and_text() {
        let form = HttpTransport::form(vec![
            Part::File {
                name: "files".into(),
                file_name: "a.txt".into(),
                mime: Some("text/plain".into()),
                bytes: b"hello".to_vec(),
            },
            Part::Text {
                name: "comment".into(),
                value: "ok".into(),
            },
        ]);
        assert!(form.is_ok());
    }

    #[test]
    fn form_rejects_bad_mime() {
        let form = HttpTransport::form(vec![Part::File {
            name: "files".into(),
            file_name: "a.bin".into(),
            mime: Some("not a mime".into()),
            bytes: Vec::new(),
        }]);
        assert!(matches!(form, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let t = HttpTransport::new("http://127.0.0.1:9", Arc::new(NoAuth));
        let err = t.send(ApiRequest::get("/api/courses")).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
