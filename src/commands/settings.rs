//! The `config` command: read and edit the persisted settings file.
//!
//! These run without an open work tree; configuration is per-user, not
//! per-repository, and must be reachable before any repository exists.

use crate::domain::areas::settings::{Language, Settings};
use std::io::Write;

pub fn show(writer: &mut dyn Write) -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let proxy = settings.proxy();

    writeln!(writer, "config file: {}", Settings::config_path().display())?;
    writeln!(
        writer,
        "language: {} (resolved: {})",
        settings.language(),
        settings.language().resolved()
    )?;
    writeln!(
        writer,
        "proxy: {}",
        if proxy.enabled { "enabled" } else { "disabled" }
    )?;
    match proxy.url() {
        Some(url) => writeln!(writer, "proxy url: {url}")?,
        None => writeln!(writer, "proxy url: (unset)")?,
    }
    if let Some(no_proxy) = proxy.no_proxy.as_deref() {
        writeln!(writer, "no-proxy: {no_proxy}")?;
    }

    Ok(())
}

pub fn set_language(writer: &mut dyn Write, language: Language) -> anyhow::Result<()> {
    let mut settings = Settings::load()?;
    settings.set_language(language);
    settings.save()?;

    writeln!(writer, "language set to {language}")?;
    Ok(())
}

/// Edits for the proxy configuration; `None` fields are left as persisted.
#[derive(Debug, Default)]
pub struct ProxyUpdate {
    pub enabled: Option<bool>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub no_proxy: Option<String>,
}

pub fn set_proxy(writer: &mut dyn Write, update: ProxyUpdate) -> anyhow::Result<()> {
    let mut settings = Settings::load()?;

    {
        let proxy = settings.proxy_mut();
        if let Some(enabled) = update.enabled {
            proxy.enabled = enabled;
        }
        if let Some(host) = update.host {
            proxy.host = host;
        }
        if let Some(port) = update.port {
            proxy.port = port;
        }
        if let Some(no_proxy) = update.no_proxy {
            proxy.no_proxy = if no_proxy.trim().is_empty() {
                None
            } else {
                Some(no_proxy)
            };
        }
    }

    settings.save()?;

    let proxy = settings.proxy();
    match (proxy.enabled, proxy.url()) {
        (true, Some(url)) => writeln!(writer, "proxy enabled: {url}")?,
        (true, None) => writeln!(
            writer,
            "proxy enabled, but host or port is blank; git will connect directly"
        )?,
        (false, _) => writeln!(writer, "proxy disabled")?,
    }

    Ok(())
}
