use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::request::ApiRequest;

/// The HTTP port: send one request, get the response JSON back.
///
/// An empty successful response resolves to `Value::Null`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError>;
}

/// Typed client over a [`Transport`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send `request` and decode the response into `R`.
    pub async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let value = self.transport.send(request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }
}
