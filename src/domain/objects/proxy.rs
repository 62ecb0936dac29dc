use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolved proxy settings applied to git subprocess environments.
///
/// The host/port pair is the single source of truth; the URL handed to git
/// is `http://{host}:{port}` for both HTTP and HTTPS traffic. Defaults
/// match the common local-proxy setup so enabling the proxy is usually a
/// one-flag operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub enabled: bool,
    pub host: String,
    pub port: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_proxy: Option<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            enabled: false,
            host: "127.0.0.1".to_string(),
            port: "7890".to_string(),
            no_proxy: None,
        }
    }
}

impl ProxyConfig {
    /// The derived proxy URL, or `None` when host or port is blank.
    pub fn url(&self) -> Option<String> {
        let host = self.host.trim();
        let port = self.port.trim();

        if host.is_empty() || port.is_empty() {
            return None;
        }

        Some(format!("http://{host}:{port}"))
    }
}

const PROXY_KEYS: [&str; 4] = ["HTTP_PROXY", "HTTPS_PROXY", "http_proxy", "https_proxy"];

/// Build the environment for a git subprocess from a base environment and
/// the proxy settings.
///
/// The base map is never mutated: callers hand in the ambient process
/// environment and get back their own copy. With the proxy disabled the
/// copy comes back untouched, pre-existing proxy keys included. Both
/// uppercase and lowercase variable forms are set because some tools only
/// honor the lowercase ones. A blank host or port injects nothing, so a
/// half-filled configuration degrades to a direct connection instead of
/// failing the operation.
pub fn build_git_env(
    base: &HashMap<String, String>,
    proxy: &ProxyConfig,
) -> HashMap<String, String> {
    let mut env = base.clone();

    if !proxy.enabled {
        return env;
    }
    let Some(url) = proxy.url() else {
        return env;
    };

    for key in PROXY_KEYS {
        env.insert(key.to_string(), url.clone());
    }
    if let Some(no_proxy) = proxy.no_proxy.as_deref().map(str::trim)
        && !no_proxy.is_empty()
    {
        env.insert("NO_PROXY".to_string(), no_proxy.to_string());
    }

    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base_env() -> HashMap<String, String> {
        HashMap::from([("PATH".to_string(), "/usr/bin".to_string())])
    }

    fn enabled_proxy() -> ProxyConfig {
        ProxyConfig {
            enabled: true,
            host: "127.0.0.1".to_string(),
            port: "7890".to_string(),
            no_proxy: None,
        }
    }

    #[test]
    fn disabled_proxy_returns_an_equal_but_distinct_copy() {
        let base = base_env();
        let mut built = build_git_env(&base, &ProxyConfig::default());

        assert_eq!(built, base);

        built.insert("EXTRA".to_string(), "1".to_string());
        assert!(!base.contains_key("EXTRA"));
    }

    #[test]
    fn enabled_proxy_injects_all_four_variable_forms() {
        let built = build_git_env(&base_env(), &enabled_proxy());

        for key in ["HTTP_PROXY", "HTTPS_PROXY", "http_proxy", "https_proxy"] {
            assert_eq!(built.get(key).map(String::as_str), Some("http://127.0.0.1:7890"));
        }
        assert_eq!(built.get("PATH").map(String::as_str), Some("/usr/bin"));
    }

    #[test]
    fn disabled_proxy_passes_existing_proxy_keys_through() {
        let mut base = base_env();
        base.insert("HTTP_PROXY".to_string(), "foo".to_string());

        let built = build_git_env(&base, &ProxyConfig::default());

        assert_eq!(built.get("HTTP_PROXY").map(String::as_str), Some("foo"));
    }

    #[test]
    fn blank_host_injects_nothing() {
        let proxy = ProxyConfig {
            enabled: true,
            host: "  ".to_string(),
            ..ProxyConfig::default()
        };

        let built = build_git_env(&base_env(), &proxy);

        assert_eq!(built, base_env());
    }

    #[test]
    fn exclusion_list_lands_in_no_proxy() {
        let proxy = ProxyConfig {
            no_proxy: Some("localhost,.internal".to_string()),
            ..enabled_proxy()
        };

        let built = build_git_env(&base_env(), &proxy);

        assert_eq!(
            built.get("NO_PROXY").map(String::as_str),
            Some("localhost,.internal")
        );
    }

    #[test]
    fn url_requires_both_host_and_port() {
        let mut proxy = enabled_proxy();
        assert_eq!(proxy.url().as_deref(), Some("http://127.0.0.1:7890"));

        proxy.port.clear();
        assert_eq!(proxy.url(), None);
    }
}
