//! Slices and the request lifecycle signals they consume.
//!
//! A slice is one typed state record stored at a fixed path. It changes
//! only through [`Slice::reduce`], a pure function of (state, action).
//! Network-backed actions carry a [`Signal`], and every slice keeps a
//! [`Status`] that the three signal phases drive the same way:
//!
//! | signal          | loading | error          |
//! |-----------------|---------|----------------|
//! | `Started`       | `true`  | cleared        |
//! | `Succeeded(v)`  | `false` | unchanged      |
//! | `Failed(msg)`   | `false` | `Some(msg)`    |

use serde::Serialize;

/// One lifecycle signal of an asynchronous operation.
///
/// An operation emits `Started` first, then exactly one terminal signal.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal<T> {
    Started,
    Succeeded(T),
    Failed(String),
}

impl<T> Signal<T> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Signal::Started)
    }
}

/// The `loading`/`error` pair carried by every slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub loading: bool,
    pub error: Option<String>,
}

impl Status {
    /// Fold a signal into the status. Returns the payload on success so the
    /// caller can place it in the slice.
    pub fn apply<T>(&mut self, signal: Signal<T>) -> Option<T> {
        match signal {
            Signal::Started => {
                self.loading = true;
                self.error = None;
                None
            }
            Signal::Succeeded(payload) => {
                self.loading = false;
                Some(payload)
            }
            Signal::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
                None
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// A named subdivision of application state plus its transition function.
pub trait Slice: Default + Clone + Send + Sync + 'static {
    /// Store path the slice lives at, e.g. `courses/state`.
    const PATH: &'static str;

    type Action: Send;

    fn reduce(&mut self, action: Self::Action);
}

/// Replace the first element with the same key as `item`, or append it.
pub fn upsert_by<T, K, F>(items: &mut Vec<T>, item: T, key: F)
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let wanted = key(&item);
    match items.iter().position(|existing| key(existing) == wanted) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}
