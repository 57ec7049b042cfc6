use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::slice::Slice;
use crate::trie::Trie;
use crate::value::{StateValue, SubscriptionId};

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Path-addressed state container with Trie-routed change notifications.
///
/// Every write goes through [`StateStore::update`]: the new value is
/// computed and stored under one write lock, then subscribers matching
/// the path are called after the lock is released. A subscriber may
/// therefore read the store (and sees the new value) from inside its
/// callback.
///
/// Slices are stored under `S::PATH` and mutated only through
/// [`StateStore::dispatch`], which runs the slice's reducer atomically.
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    handlers: Trie<HandlerEntry>,
    next_id: AtomicU64,
}

#[derive(Clone)]
struct HandlerEntry {
    id: SubscriptionId,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            handlers: Trie::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store a typed value at `path` and notify matching subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    /// Store a pre-built value at `path` and notify matching subscribers.
    pub fn set_value(&self, path: &str, value: StateValue) {
        self.update(path, move |_| value);
    }

    /// Replace the value at `path` with `f(current)`.
    ///
    /// `f` runs under the store's write lock, so concurrent updates to the
    /// same path never interleave. Subscribers are notified afterwards.
    pub fn update<F>(&self, path: &str, f: F)
    where
        F: FnOnce(Option<&StateValue>) -> StateValue,
    {
        let next = {
            let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
            let next = f(values.get(path));
            values.insert(path.to_string(), next.clone());
            next
        };
        for entry in self.handlers.match_topic(path) {
            (entry.handler)(path, &next);
        }
    }

    /// Current value at `path`, if any.
    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.contains_key(path)
    }

    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored paths, in order.
    pub fn paths(&self) -> Vec<String> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.keys().cloned().collect()
    }

    // ====================================================================
    // Slices
    // ====================================================================

    /// Install `state` as the initial value of slice `S`.
    pub fn install<S: Slice>(&self, state: S) {
        self.set(S::PATH, state);
    }

    /// Snapshot of slice `S`. `None` until the slice is installed.
    pub fn slice<S: Slice>(&self) -> Option<Arc<S>> {
        self.get(S::PATH).and_then(|v| v.downcast_arc::<S>())
    }

    /// Apply `action` to slice `S` through its reducer.
    ///
    /// An uninstalled slice starts from `S::default()`.
    pub fn dispatch<S: Slice>(&self, action: S::Action) {
        self.update(S::PATH, move |current| {
            let mut next = current
                .and_then(|v| v.downcast_ref::<S>())
                .cloned()
                .unwrap_or_default();
            next.reduce(action);
            StateValue::new(next)
        });
    }

    // ====================================================================
    // Subscriptions
    // ====================================================================

    /// Call `handler` for every change on a path matching `pattern`.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.insert(
            pattern,
            HandlerEntry {
                id,
                handler: Arc::new(handler),
            },
        );
        id
    }

    /// Typed subscription to slice `S`.
    pub fn watch<S, F>(&self, handler: F) -> SubscriptionId
    where
        S: Slice,
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.subscribe(S::PATH, move |_, value| {
            if let Some(state) = value.downcast_ref::<S>() {
                handler(state);
            }
        })
    }

    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.handlers.remove(pattern, |entry| entry.id == id);
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::{Signal, Status};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter {
        value: u32,
        status: Status,
    }

    enum CounterAction {
        Add(u32),
        Load(Signal<u32>),
    }

    impl Slice for Counter {
        const PATH: &'static str = "counter/state";
        type Action = CounterAction;

        fn reduce(&mut self, action: CounterAction) {
            match action {
                CounterAction::Add(n) => self.value += n,
                CounterAction::Load(signal) => {
                    if let Some(v) = self.status.apply(signal) {
                        self.value = v;
                    }
                }
            }
        }
    }

    // ========================================================================
    // Plain values
    // ========================================================================

    #[test]
    fn set_then_get() {
        let store = StateStore::new();
        store.set("prefs/locale", "fr".to_string());

        let v = store.get("prefs/locale").unwrap();
        assert_eq!(v.downcast_ref::<String>().unwrap(), "fr");
        assert!(store.contains("prefs/locale"));
        assert!(store.get("prefs/theme").is_none());
    }

    #[test]
    fn set_overwrites() {
        let store = StateStore::new();
        store.set("n", 1u32);
        store.set("n", 2u32);
        assert_eq!(store.get("n").unwrap().downcast_ref::<u32>(), Some(&2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_sees_previous_value() {
        let store = StateStore::new();
        store.set("n", 41u32);
        store.update("n", |cur| {
            let n = cur.and_then(|v| v.downcast_ref::<u32>()).copied().unwrap_or(0);
            StateValue::new(n + 1)
        });
        assert_eq!(store.get("n").unwrap().downcast_ref::<u32>(), Some(&42));
    }

    #[test]
    fn paths_are_ordered() {
        let store = StateStore::new();
        store.set("quiz/state", 1u8);
        store.set("assignments/state", 1u8);
        store.set("courses/state", 1u8);
        assert_eq!(
            store.paths(),
            vec!["assignments/state", "courses/state", "quiz/state"]
        );
        assert!(!store.is_empty());
    }

    // ========================================================================
    // Slices
    // ========================================================================

    #[test]
    fn slice_is_none_until_installed() {
        let store = StateStore::new();
        assert!(store.slice::<Counter>().is_none());
        store.install(Counter::default());
        assert_eq!(*store.slice::<Counter>().unwrap(), Counter::default());
    }

    #[test]
    fn dispatch_runs_reducer() {
        let store = StateStore::new();
        store.install(Counter::default());
        store.dispatch::<Counter>(CounterAction::Add(2));
        store.dispatch::<Counter>(CounterAction::Add(3));
        assert_eq!(store.slice::<Counter>().unwrap().value, 5);
    }

    #[test]
    fn dispatch_on_missing_slice_starts_from_default() {
        let store = StateStore::new();
        store.dispatch::<Counter>(CounterAction::Add(7));
        assert_eq!(store.slice::<Counter>().unwrap().value, 7);
    }

    #[test]
    fn old_snapshot_is_unchanged_by_dispatch() {
        let store = StateStore::new();
        store.install(Counter::default());
        let before = store.slice::<Counter>().unwrap();
        store.dispatch::<Counter>(CounterAction::Add(1));
        assert_eq!(before.value, 0);
        assert_eq!(store.slice::<Counter>().unwrap().value, 1);
    }

    #[test]
    fn signals_drive_status() {
        let store = StateStore::new();
        store.install(Counter::default());

        store.dispatch::<Counter>(CounterAction::Load(Signal::Started));
        assert!(store.slice::<Counter>().unwrap().status.loading);

        store.dispatch::<Counter>(CounterAction::Load(Signal::Succeeded(9)));
        let s = store.slice::<Counter>().unwrap();
        assert!(!s.status.loading);
        assert_eq!(s.value, 9);
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    #[test]
    fn subscriber_called_once_per_transition() {
        let store = StateStore::new();
        let seen = Arc::new(AtomicU64::new(0));
        let s = seen.clone();
        store.subscribe(Counter::PATH, move |_, _| {
            s.fetch_add(1, Ordering::Relaxed);
        });

        store.install(Counter::default());
        store.dispatch::<Counter>(CounterAction::Add(1));
        store.dispatch::<Counter>(CounterAction::Add(1));
        assert_eq!(seen.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn subscriber_can_read_store_in_callback() {
        let store = Arc::new(StateStore::new());
        let reader = Arc::clone(&store);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        store.subscribe(Counter::PATH, move |_, _| {
            let value = reader.slice::<Counter>().map(|c| c.value);
            s.lock().unwrap().push(value);
        });

        store.dispatch::<Counter>(CounterAction::Add(4));
        assert_eq!(*seen.lock().unwrap(), vec![Some(4)]);
    }

    #[test]
    fn watch_is_typed() {
        let store = StateStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        store.watch::<Counter, _>(move |c| s.lock().unwrap().push(c.value));

        store.dispatch::<Counter>(CounterAction::Add(1));
        store.dispatch::<Counter>(CounterAction::Add(2));
        assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
    }

    #[test]
    fn wildcard_subscription_sees_every_slice() {
        let store = StateStore::new();
        let paths = Arc::new(Mutex::new(Vec::<String>::new()));
        let p = paths.clone();
        store.subscribe("+/state", move |path, _| p.lock().unwrap().push(path.to_string()));

        store.set("courses/state", 1u8);
        store.set("quiz/state", 1u8);
        store.set("prefs/theme", 1u8);
        assert_eq!(*paths.lock().unwrap(), vec!["courses/state", "quiz/state"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = StateStore::new();
        let seen = Arc::new(AtomicU64::new(0));
        let s = seen.clone();
        let id = store.subscribe("#", move |_, _| {
            s.fetch_add(1, Ordering::Relaxed);
        });

        store.set("a", 1u8);
        store.unsubscribe("#", id);
        store.set("a", 2u8);
        assert_eq!(seen.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn subscription_ids_are_unique() {
        let store = StateStore::new();
        let a = store.subscribe("a", |_, _| {});
        let b = store.subscribe("a", |_, _| {});
        assert_ne!(a, b);
    }

    // ========================================================================
    // Thread safety
    // ========================================================================

    #[test]
    fn concurrent_dispatch_loses_no_updates() {
        use std::thread;

        let store = Arc::new(StateStore::new());
        store.install(Counter::default());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..250 {
                        store.dispatch::<Counter>(CounterAction::Add(1));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.slice::<Counter>().unwrap().value, 1000);
    }

    fn _assert_store_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<StateStore>();
        assert_sync::<StateStore>();
    }
}
