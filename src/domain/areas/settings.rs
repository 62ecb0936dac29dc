use crate::domain::objects::proxy::ProxyConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Display-language preference: follow the ambient locale, or force one of
/// the supported languages. No message catalog is bundled; the preference
/// is persisted for the surfaces that honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    System,
    En,
    ZhCn,
}

impl Language {
    /// Collapse `System` into a concrete language by sniffing the locale
    /// environment, the same variables git itself consults.
    pub fn resolved(&self) -> Language {
        match self {
            Language::System => {
                let locale = std::env::var("LC_ALL")
                    .or_else(|_| std::env::var("LANG"))
                    .unwrap_or_default()
                    .to_lowercase();
                if locale.contains("zh") {
                    Language::ZhCn
                } else {
                    Language::En
                }
            }
            concrete => *concrete,
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "system" => Ok(Language::System),
            "en" => Ok(Language::En),
            "zh-cn" => Ok(Language::ZhCn),
            other => anyhow::bail!("unknown language '{other}'; expected one of: system, en, zh-cn"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::System => "system",
            Language::En => "en",
            Language::ZhCn => "zh-cn",
        };
        write!(f, "{name}")
    }
}

/// Persisted user settings: language preference and proxy configuration.
///
/// Loaded fresh at the start of every operation, so an edit takes effect on
/// the next command without any reload step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    language: Language,
    proxy: ProxyConfig,
}

impl Settings {
    /// Resolution order: `GRIT_CONFIG_FILE`, then
    /// `$XDG_CONFIG_HOME/grit/config.json`, then
    /// `~/.config/grit/config.json`.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("GRIT_CONFIG_FILE") {
            return PathBuf::from(path);
        }
        if let Ok(base) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(base).join("grit").join("config.json");
        }
        match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home).join(".config").join("grit").join("config.json"),
            Err(_) => PathBuf::from(".grit-config.json"),
        }
    }

    /// A missing file yields the defaults; a present-but-broken one is an
    /// error, not a silent reset of the user's configuration.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Settings::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("malformed settings file at {}", path.display()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let mut raw = serde_json::to_string_pretty(self).context("failed to serialize settings")?;
        raw.push('\n');
        std::fs::write(&path, raw)
            .with_context(|| format!("failed to write settings to {}", path.display()))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn proxy(&self) -> &ProxyConfig {
        &self.proxy
    }

    pub fn proxy_mut(&mut self) -> &mut ProxyConfig {
        &mut self.proxy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn language_names_round_trip() {
        for name in ["system", "en", "zh-cn"] {
            let language: Language = name.parse().unwrap();
            assert_eq!(language.to_string(), name);
        }
    }

    #[test]
    fn unknown_language_is_rejected_with_the_valid_set() {
        let error = "fr".parse::<Language>().unwrap_err();

        let rendered = format!("{error}");
        assert!(rendered.contains("unknown language 'fr'"));
        assert!(rendered.contains("zh-cn"));
    }

    #[test]
    fn settings_serialize_with_kebab_case_language() {
        let mut settings = Settings::default();
        settings.set_language(Language::ZhCn);

        let raw = serde_json::to_string(&settings).unwrap();
        assert!(raw.contains("\"zh-cn\""));

        let reread: Settings = serde_json::from_str(&raw).unwrap();
        assert_eq!(reread.language(), Language::ZhCn);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings.language(), Language::System);
        assert!(!settings.proxy().enabled);
        assert_eq!(settings.proxy().host, "127.0.0.1");
    }
}
