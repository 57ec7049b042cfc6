//! Flux — request/state synchronization engine.
//!
//! A path-addressed store of typed slices, a request router, and an
//! operation runner that turns each server call into lifecycle signals.
//!
//! # Primitives
//!
//! - `emit(path, payload)`: send a request, Trie-routed to handler(s)
//! - `slice::<S>()`: read a slice snapshot (Arc, zero-copy)
//! - `subscribe(pattern)` / `watch::<S>()`: observe state changes
//!
//! # Slices and signals
//!
//! A [`Slice`] is a state record at a fixed path (`courses/state`) with a
//! pure reducer. Network-backed actions carry a [`Signal`]:
//! `Started`, then exactly one of `Succeeded(payload)` or
//! `Failed(message)`. [`Operations::run`] emits them around a future and
//! applies them through [`StateStore::dispatch`], which reduces
//! atomically and then notifies subscribers.
//!
//! # Path patterns
//!
//! Subscriptions and request handlers use MQTT-style wildcards:
//! `courses/state` (exact), `+/state` (one level), `quiz/#` (remaining
//! levels), `#` (everything).

pub mod app;
pub mod i18n;
pub mod operation;
pub mod router;
pub mod slice;
pub mod store;
pub mod trie;
pub mod value;

pub use app::Flux;
pub use i18n::{I18nHandler, I18nStore};
pub use operation::{Operations, Outcome, StalePolicy, Ticket, rejection_message};
pub use router::{BoxFuture, Payload, Router};
pub use slice::{Signal, Slice, Status, upsert_by};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
