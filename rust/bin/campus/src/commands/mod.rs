//! Subcommand implementations.
//!
//! Every network command emits one request on the session, then reads
//! the slice it feeds and prints it.

pub mod assignments;
pub mod courses;
pub mod prefs;
pub mod quiz;
pub mod settings;

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use campus_academic::{Preferences, Session, SessionConfig};
use campus_client::{HttpTransport, StaticToken};
use campus_flux::Status;
use campus_kv::{KVStore, RedbStore};
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;

/// Output format: table or json.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Table,
    Json,
}

impl FromStr for Output {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Output::Table),
            "json" => Ok(Output::Json),
            other => Err(format!("unknown output format '{}' (expected table or json)", other)),
        }
    }
}

fn open_kv(config: &ClientConfig) -> Result<Arc<dyn KVStore>> {
    let path = config.prefs_db_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let kv = RedbStore::open(&path)
        .map_err(|e| anyhow::anyhow!("failed to open preferences: {}", e))?;
    Ok(Arc::new(kv))
}

/// Preferences only, no server needed.
pub fn open_prefs(config: &ClientConfig) -> Result<Preferences> {
    Ok(Preferences::new(open_kv(config)?))
}

/// A session talking to the configured server.
pub fn open_session(config: &ClientConfig) -> Result<Session> {
    if config.server.is_empty() {
        anyhow::bail!("No server URL set. Run `campus config set --server <url>`.");
    }
    debug!(server = %config.server, policy = %config.stale_policy, "opening session");
    let transport = HttpTransport::new(&config.server, Arc::new(StaticToken::new(&config.token)));
    Ok(Session::new(
        Arc::new(transport),
        open_kv(config)?,
        SessionConfig {
            stale_policy: config.stale_policy,
            locale: config.locale.clone(),
        },
    ))
}

/// Fail with the slice's error message, if it holds one.
pub fn check(status: &Status) -> Result<()> {
    match &status.error {
        Some(message) => anyhow::bail!("{}", message),
        None => Ok(()),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Cut `text` to `width` characters for table cells.
pub fn cell(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_parses() {
        assert_eq!("json".parse::<Output>(), Ok(Output::Json));
        assert_eq!("table".parse::<Output>(), Ok(Output::Table));
        assert!("yaml".parse::<Output>().is_err());
    }

    #[test]
    fn cell_truncates_long_text() {
        assert_eq!(cell("Algorithmique", 20), "Algorithmique");
        assert_eq!(cell("Algorithmique", 6), "Algor…");
        assert_eq!(cell("Épreuve", 3), "Ép…");
    }

    #[test]
    fn check_reports_slice_error() {
        let mut status = Status::default();
        assert!(check(&status).is_ok());
        status.error = Some("Une erreur est survenue.".into());
        assert_eq!(check(&status).unwrap_err().to_string(), "Une erreur est survenue.");
    }

    #[test]
    fn session_requires_server() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            prefs_path: dir.path().join("prefs.redb").display().to_string(),
            ..Default::default()
        };
        assert!(open_session(&config).is_err());
        assert!(open_prefs(&config).is_ok());
    }
}
