use std::any::Any;
use std::sync::Arc;

use campus_client::Transport;
use campus_flux::{Flux, Slice, StalePolicy};
use campus_kv::KVStore;

use crate::context::AcademicContext;
use crate::prefs::Preferences;

/// Session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub stale_policy: StalePolicy,
    pub locale: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stale_policy: StalePolicy::default(),
            locale: "fr".to_string(),
        }
    }
}

/// One initialized store with its handlers and preferences.
///
/// Lives from process start to end (CLI) or for one user session.
pub struct Session {
    flux: Flux,
    ctx: Arc<AcademicContext>,
    prefs: Preferences,
}

impl Session {
    pub fn new(transport: Arc<dyn Transport>, kv: Arc<dyn KVStore>, config: SessionConfig) -> Self {
        let flux = Flux::new();
        let ctx = Arc::new(AcademicContext::new(transport, config.stale_policy, &config.locale));
        crate::init(&flux, Arc::clone(&ctx));
        Self {
            flux,
            ctx,
            prefs: Preferences::new(kv),
        }
    }

    /// Emit a request and wait for its handler.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.flux.emit(path, payload).await;
    }

    /// Apply a local action to slice `S`.
    pub fn dispatch<S: Slice>(&self, action: S::Action) {
        self.flux.dispatch::<S>(action);
    }

    /// Snapshot of slice `S`. Always present after `init`.
    pub fn slice<S: Slice>(&self) -> Arc<S> {
        self.flux.slice::<S>().unwrap_or_default()
    }

    pub fn flux(&self) -> &Flux {
        &self.flux
    }

    pub fn context(&self) -> &Arc<AcademicContext> {
        &self.ctx
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
}
