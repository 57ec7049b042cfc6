#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use campus_academic::{Session, SessionConfig};
use campus_client::{ApiError, ApiRequest, Transport};
use campus_flux::StalePolicy;
use campus_kv::{KVStore, MemoryKV};
use serde_json::Value;
use tokio::sync::oneshot;

type Response = Result<Value, ApiError>;

enum Reply {
    Now(Response),
    Gated(oneshot::Receiver<Response>),
}

/// In-process transport answering from per-route queues.
///
/// Routes are keyed `"<METHOD> <path?query>"`. A request with nothing
/// queued fails with a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, VecDeque<Reply>>>,
    log: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, route: &str, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .entry(route.to_string())
            .or_default()
            .push_back(reply);
    }

    pub fn reply(&self, route: &str, value: Value) {
        self.push(route, Reply::Now(Ok(value)));
    }

    pub fn fail(&self, route: &str, error: ApiError) {
        self.push(route, Reply::Now(Err(error)));
    }

    /// Queue a reply that is held until the returned sender fires.
    pub fn gate(&self, route: &str) -> oneshot::Sender<Response> {
        let (tx, rx) = oneshot::channel();
        self.push(route, Reply::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.log.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let route = format!("{} {}", request.method, request.path_and_query());
        self.log.lock().unwrap().push(request);
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get_mut(&route)
            .and_then(|queue| queue.pop_front());
        match reply {
            Some(Reply::Now(response)) => response,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".into()))),
            None => Err(ApiError::from_response(404, &format!("no scripted reply for {}", route))),
        }
    }
}

pub fn session_with(
    transport: &Arc<ScriptedTransport>,
    kv: Arc<dyn KVStore>,
    policy: StalePolicy,
    locale: &str,
) -> Session {
    Session::new(
        transport.clone(),
        kv,
        SessionConfig {
            stale_policy: policy,
            locale: locale.to_string(),
        },
    )
}

pub fn session(transport: &Arc<ScriptedTransport>) -> Session {
    session_with(transport, Arc::new(MemoryKV::new()), StalePolicy::KeepAll, "fr")
}

/// Yield until the transport has seen `n` requests.
pub async fn wait_for_requests(transport: &ScriptedTransport, n: usize) {
    while transport.request_count() < n {
        tokio::task::yield_now().await;
    }
}
