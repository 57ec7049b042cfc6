//! Asynchronous operation runner.
//!
//! Wraps one server interaction into the three lifecycle signals and
//! applies them to a slice: `Started` before the future is polled, then
//! exactly one terminal signal once it resolves. Nothing is retried,
//! deduplicated, timed out or cancelled.
//!
//! Every run takes a per-key sequence number. Under
//! [`StalePolicy::KeepAll`] the number is informational and terminal
//! signals land in arrival order (last applied wins). Under
//! [`StalePolicy::DropStale`] a terminal signal is applied only if no
//! newer run on the same key has started since. The check and the apply
//! are one step, so a superseded run can never overwrite a newer one.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::slice::{Signal, Slice};
use crate::store::StateStore;

/// What to do with a terminal signal that arrives after a newer run on the
/// same key has started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Apply every terminal signal in arrival order.
    #[default]
    KeepAll,
    /// Drop terminal signals of superseded runs.
    DropStale,
}

impl FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep-all" | "keep" => Ok(StalePolicy::KeepAll),
            "drop-stale" | "drop" => Ok(StalePolicy::DropStale),
            other => Err(format!("unknown stale policy '{}'", other)),
        }
    }
}

impl fmt::Display for StalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StalePolicy::KeepAll => "keep-all",
            StalePolicy::DropStale => "drop-stale",
        })
    }
}

/// Sequence number of one run on one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub key: String,
    pub seq: u64,
}

/// How a run ended, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed(String),
    /// The terminal signal was dropped because a newer run had started.
    Stale,
}

/// Issues tickets and applies lifecycle signals under a [`StalePolicy`].
pub struct Operations {
    policy: StalePolicy,
    latest: Mutex<HashMap<String, u64>>,
}

impl Operations {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            latest: Mutex::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    fn sequences(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.latest.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a new run on `key`, superseding any earlier one.
    pub fn begin(&self, key: &str) -> Ticket {
        issue(&mut self.sequences(), key)
    }

    /// Whether `ticket` is still the newest run on its key.
    pub fn is_latest(&self, ticket: &Ticket) -> bool {
        self.sequences().get(&ticket.key).copied() == Some(ticket.seq)
    }

    /// Run `call` as one operation against slice `S`.
    ///
    /// `wrap` lifts a signal into the slice's action. A rejection whose
    /// message is blank is reported with `fallback` instead.
    ///
    /// Taking a ticket with its `Started` dispatch, and the staleness check
    /// with the terminal dispatch, each happen under the sequence lock. A
    /// store subscriber must therefore not start an operation synchronously.
    pub async fn run<S, T, E, Fut, W>(
        &self,
        store: &StateStore,
        key: &str,
        fallback: &str,
        wrap: W,
        call: Fut,
    ) -> Outcome
    where
        S: Slice,
        E: fmt::Display,
        Fut: Future<Output = Result<T, E>>,
        W: Fn(Signal<T>) -> S::Action,
    {
        let ticket = {
            let mut latest = self.sequences();
            let ticket = issue(&mut latest, key);
            debug!(key, seq = ticket.seq, "operation started");
            store.dispatch::<S>(wrap(Signal::Started));
            ticket
        };

        let (signal, outcome) = match call.await {
            Ok(payload) => (Signal::Succeeded(payload), Outcome::Succeeded),
            Err(e) => {
                let message = rejection_message(&e, fallback);
                (Signal::Failed(message.clone()), Outcome::Failed(message))
            }
        };
        debug_assert!(signal.is_terminal());

        let latest = self.sequences();
        if self.policy == StalePolicy::DropStale
            && latest.get(&ticket.key).copied() != Some(ticket.seq)
        {
            debug!(key, seq = ticket.seq, "dropping stale response");
            return Outcome::Stale;
        }
        debug!(key, seq = ticket.seq, ?outcome, "operation finished");
        store.dispatch::<S>(wrap(signal));
        drop(latest);
        outcome
    }
}

fn issue(latest: &mut HashMap<String, u64>, key: &str) -> Ticket {
    let seq = latest.entry(key.to_string()).or_insert(0);
    *seq += 1;
    Ticket {
        key: key.to_string(),
        seq: *seq,
    }
}

impl Default for Operations {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}

/// The error's own text, or `fallback` when it has none.
pub fn rejection_message<E: fmt::Display>(error: &E, fallback: &str) -> String {
    let text = error.to_string();
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
