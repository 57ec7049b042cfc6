//! `campus config ...`

use std::path::Path;

use anyhow::Result;
use campus_flux::StalePolicy;

use crate::config::ClientConfig;

pub fn show(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let server = if config.server.is_empty() { "(none)" } else { config.server.as_str() };
    let token = if config.token.is_empty() { "(none)" } else { "(set)" };
    println!("Config:        {}", config_path.display());
    println!("Server:        {}", server);
    println!("Token:         {}", token);
    println!("Locale:        {}", config.locale);
    println!("Stale policy:  {}", config.stale_policy);
    println!("Preferences:   {}", config.prefs_db_path().display());
    Ok(())
}

pub fn set(
    config_path: &Path,
    server: Option<String>,
    token: Option<String>,
    locale: Option<String>,
    stale_policy: Option<StalePolicy>,
    prefs_path: Option<String>,
) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    if let Some(server) = server {
        config.server = server;
    }
    if let Some(token) = token {
        config.token = token;
    }
    if let Some(locale) = locale {
        config.locale = locale;
    }
    if let Some(policy) = stale_policy {
        config.stale_policy = policy;
    }
    if let Some(path) = prefs_path {
        config.prefs_path = path;
    }
    config.save(config_path)?;
    println!("Config saved to {}.", config_path.display());
    Ok(())
}
