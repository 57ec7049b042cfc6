use std::future::Future;
use std::sync::Arc;

use campus_client::{ApiClient, ApiError, Transport};
use campus_flux::{I18nStore, Operations, Outcome, Signal, Slice, StalePolicy, StateStore};
use tracing::{debug, warn};

use crate::api::AcademicApi;
use crate::messages;

/// Backend context shared by every academic request handler.
pub struct AcademicContext {
    pub api: AcademicApi,
    pub ops: Operations,
    pub i18n: I18nStore,
}

impl AcademicContext {
    pub fn new(transport: Arc<dyn Transport>, policy: StalePolicy, locale: &str) -> Self {
        let i18n = I18nStore::new(locale);
        messages::register_all(&i18n);
        Self {
            api: AcademicApi::new(ApiClient::new(transport)),
            ops: Operations::new(policy),
            i18n,
        }
    }

    /// Run one API call as the operation `key` against slice `S`.
    pub async fn run<S, T, Fut, W>(
        &self,
        store: &StateStore,
        key: &str,
        wrap: W,
        call: Fut,
    ) -> Outcome
    where
        S: Slice,
        Fut: Future<Output = Result<T, ApiError>>,
        W: Fn(Signal<T>) -> S::Action,
    {
        let fallback = messages::fallback(&self.i18n, key);
        let outcome = self
            .ops
            .run::<S, T, ApiError, Fut, W>(store, key, &fallback, wrap, call)
            .await;
        match &outcome {
            Outcome::Succeeded => debug!(key, "request succeeded"),
            Outcome::Failed(message) => warn!(key, error = %message, "request failed"),
            Outcome::Stale => debug!(key, "request superseded"),
        }
        outcome
    }
}
