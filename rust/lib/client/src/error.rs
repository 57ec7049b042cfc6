use thiserror::Error;

/// Client-side API error.
///
/// The display text of every variant is the message a user would see,
/// with no category prefix. A variant whose text is blank carries no
/// message of its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response: connection refused, DNS failure, broken body stream.
    #[error("{0}")]
    Network(String),

    /// Non-2xx response. `message` is the server's error text, or
    /// `HTTP <status>` when the body had none.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body is not JSON or does not have the expected shape.
    #[error("{0}")]
    Decode(String),

    /// The token source failed to produce a credential.
    #[error("{0}")]
    Auth(String),

    /// A required request argument (usually an ID) was blank.
    #[error("{0} is required")]
    MissingArgument(&'static str),
}

impl ApiError {
    /// Build a `Server` error from a status code and raw response body.
    ///
    /// JSON bodies of the form `{"detail": ..}`, `{"message": ..}` or
    /// `{"error": ..}` contribute that field; any other non-blank body is
    /// used as is.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["detail", "message", "error"] {
            if let Some(serde_json::Value::String(text)) = map.get(field) {
                if !text.trim().is_empty() {
                    return Some(text.clone());
                }
            }
        }
    }
    Some(body.to_string())
}
