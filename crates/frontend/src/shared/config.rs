//! Client configuration
//!
//! Values are baked into the wasm bundle at build time. Each field has an
//! embedded default and can be overridden through an environment variable
//! visible to `cargo`/`trunk` when the bundle is compiled.

use once_cell::sync::Lazy;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_NOTIFICATION_TTL_MS: u32 = 3000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin of the legal chat backend, without a trailing slash
    pub api_base: String,
    /// How long a notification banner stays visible
    pub notification_ttl_ms: u32,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build a config from optional raw overrides.
    ///
    /// Blank or unparsable values fall back to the defaults.
    pub fn from_overrides(
        api_base: Option<&str>,
        notification_ttl_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base.map(str::trim).filter(|s| !s.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(ttl) = notification_ttl_ms.and_then(|s| s.trim().parse::<u32>().ok()) {
            if ttl > 0 {
                config.notification_ttl_ms = ttl;
            }
        }

        if let Some(level) = log_level.and_then(|s| s.trim().parse::<log::Level>().ok()) {
            config.log_level = level;
        }

        config
    }

    /// Read build-time overrides (`LEGAL_CHAT_*`)
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("LEGAL_CHAT_API_BASE"),
            option_env!("LEGAL_CHAT_NOTIFICATION_TTL_MS"),
            option_env!("LEGAL_CHAT_LOG_LEVEL"),
        )
    }
}

static CONFIG: Lazy<ClientConfig> = Lazy::new(ClientConfig::from_build_env);

/// Process-wide configuration, resolved once on first access
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_overrides(None, None, None);
        assert_eq!(config.api_base, "http://localhost:8000");
        assert_eq!(config.notification_ttl_ms, 3000);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_overrides_applied() {
        let config = ClientConfig::from_overrides(
            Some("https://chat.example.com/"),
            Some("5000"),
            Some("warn"),
        );
        assert_eq!(config.api_base, "https://chat.example.com");
        assert_eq!(config.notification_ttl_ms, 5000);
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let config = ClientConfig::from_overrides(Some("  "), Some("soon"), Some("loud"));
        assert_eq!(config, ClientConfig::default());

        let zero_ttl = ClientConfig::from_overrides(None, Some("0"), None);
        assert_eq!(zero_ttl.notification_ttl_ms, DEFAULT_NOTIFICATION_TTL_MS);
    }

    #[test]
    fn test_global_config_resolved_once() {
        assert!(std::ptr::eq(config(), config()));
        assert_eq!(*config(), ClientConfig::from_build_env());
    }
}
