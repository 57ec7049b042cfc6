use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::router::{Payload, Router};
use crate::slice::Slice;
use crate::store::StateStore;
use crate::value::{StateValue, SubscriptionId};

/// The state engine: one store, one request router.
///
/// - `emit(path, payload)` routes a request to its handler(s)
/// - `slice::<S>()` / `get(path)` read state
/// - `subscribe(pattern, ..)` / `watch::<S>(..)` observe changes
///
/// There is no global instance: construct one per process or session and
/// pass it to whoever needs it.
///
/// ```ignore
/// let flux = Flux::new();
/// flux.on("courses/fetch", |_, _, store| async move { /* ... */ });
/// flux.watch::<CoursesState, _>(|s| println!("{} courses", s.courses.len()));
/// flux.emit("courses/fetch", FetchCoursesReq).await;
/// ```
pub struct Flux {
    store: Arc<StateStore>,
    router: Router,
}

impl Flux {
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            router: Router::new(),
        }
    }

    // ====================================================================
    // State — read
    // ====================================================================

    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.store.get(path)
    }

    /// Snapshot of slice `S`.
    pub fn slice<S: Slice>(&self) -> Option<Arc<S>> {
        self.store.slice::<S>()
    }

    // ====================================================================
    // State — synchronous local mutations
    // ====================================================================

    /// Apply a local (non-network) action to slice `S`.
    pub fn dispatch<S: Slice>(&self, action: S::Action) {
        self.store.dispatch::<S>(action);
    }

    // ====================================================================
    // Requests
    // ====================================================================

    /// Emit a request and wait for its handler(s) to finish.
    ///
    /// A path with no handler is a no-op.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.emit_arc(path, Arc::new(payload)).await;
    }

    pub async fn emit_arc(&self, path: &str, payload: Payload) {
        let ran = self.router.dispatch(path, payload, Arc::clone(&self.store)).await;
        if ran == 0 {
            debug!(path, "no handler for request");
        }
    }

    /// Register an async request handler for a path pattern.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.router.on(pattern, handler);
    }

    pub fn has_handler(&self, path: &str) -> bool {
        self.router.matches(path)
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler)
    }

    pub fn watch<S, F>(&self, handler: F) -> SubscriptionId
    where
        S: Slice,
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.store.watch::<S, F>(handler)
    }

    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.store.unsubscribe(pattern, id);
    }

    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }
}

impl Default for Flux {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::{Signal, Status};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Default)]
    struct Inbox {
        messages: Vec<String>,
        selected: Option<String>,
        status: Status,
    }

    enum InboxAction {
        Fetch(Signal<Vec<String>>),
        Select(Option<String>),
    }

    impl Slice for Inbox {
        const PATH: &'static str = "inbox/state";
        type Action = InboxAction;

        fn reduce(&mut self, action: InboxAction) {
            match action {
                InboxAction::Fetch(signal) => {
                    if let Some(messages) = self.status.apply(signal) {
                        self.messages = messages;
                    }
                }
                InboxAction::Select(id) => self.selected = id,
            }
        }
    }

    struct FetchInbox {
        fail: bool,
    }

    fn wire(flux: &Flux) {
        flux.store().install(Inbox::default());
        flux.on("inbox/fetch", |_, payload, store: Arc<StateStore>| async move {
            let Some(req) = payload.downcast_ref::<FetchInbox>() else {
                return;
            };
            store.dispatch::<Inbox>(InboxAction::Fetch(Signal::Started));
            let signal = if req.fail {
                Signal::Failed("network down".into())
            } else {
                Signal::Succeeded(vec!["hello".to_string()])
            };
            store.dispatch::<Inbox>(InboxAction::Fetch(signal));
        });
    }

    #[test]
    fn new_flux_is_empty() {
        let flux = Flux::default();
        assert!(flux.store().is_empty());
        assert!(flux.slice::<Inbox>().is_none());
    }

    #[tokio::test]
    async fn emit_runs_handler_and_updates_slice() {
        let flux = Flux::new();
        wire(&flux);

        flux.emit("inbox/fetch", FetchInbox { fail: false }).await;
        let inbox = flux.slice::<Inbox>().unwrap();
        assert_eq!(inbox.messages, vec!["hello"]);
        assert!(!inbox.status.loading);
    }

    #[tokio::test]
    async fn failure_keeps_previous_items() {
        let flux = Flux::new();
        wire(&flux);

        flux.emit("inbox/fetch", FetchInbox { fail: false }).await;
        flux.emit("inbox/fetch", FetchInbox { fail: true }).await;
        let inbox = flux.slice::<Inbox>().unwrap();
        assert_eq!(inbox.messages, vec!["hello"]);
        assert_eq!(inbox.status.error.as_deref(), Some("network down"));
    }

    #[tokio::test]
    async fn emit_without_handler_is_noop() {
        let flux = Flux::new();
        flux.emit("nobody/home", ()).await;
        assert!(flux.store().is_empty());
    }

    #[tokio::test]
    async fn watchers_see_every_transition() {
        let flux = Flux::new();
        wire(&flux);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        flux.watch::<Inbox, _>(move |inbox| {
            s.lock().unwrap().push(inbox.status.loading);
        });

        flux.emit("inbox/fetch", FetchInbox { fail: false }).await;
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn local_dispatch_and_unsubscribe() {
        let flux = Flux::new();
        let count = Arc::new(AtomicU64::new(0));
        let c = count.clone();
        let id = flux.subscribe(Inbox::PATH, move |_, _| {
            c.fetch_add(1, Ordering::Relaxed);
        });

        flux.dispatch::<Inbox>(InboxAction::Select(Some("m1".into())));
        flux.unsubscribe(Inbox::PATH, id);
        flux.dispatch::<Inbox>(InboxAction::Select(None));

        assert_eq!(count.load(Ordering::Relaxed), 1);
        assert!(flux.slice::<Inbox>().unwrap().selected.is_none());
        assert!(flux.get(Inbox::PATH).is_some());
    }

    #[test]
    fn has_handler_uses_matching() {
        let flux = Flux::new();
        flux.on("quiz/#", |_, _, _| async {});
        assert!(flux.has_handler("quiz/create"));
        assert!(!flux.has_handler("courses/fetch"));
    }

    fn _assert_flux_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Flux>();
        assert_sync::<Flux>();
    }
}
