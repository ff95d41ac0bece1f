use anyhow::{anyhow, Context, Result};
use dex_catalog::{PaginationController, DEFAULT_PAGE_SIZE};
use dex_protocol::{DEFAULT_API_BASE_URL, DEFAULT_SPRITE_BASE_URL};
use dex_session::{AssemblerConfig, Locale, Session};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_API_BASE_URL: &str = "DEX_API_BASE_URL";
pub const ENV_SPRITE_BASE_URL: &str = "DEX_SPRITE_BASE_URL";
pub const ENV_PAGE_SIZE: &str = "DEX_PAGE_SIZE";
pub const ENV_LOCALE: &str = "DEX_LOCALE";
pub const ENV_PRIMARY_LANGUAGE: &str = "DEX_PRIMARY_LANGUAGE";
pub const ENV_SECONDARY_LANGUAGE: &str = "DEX_SECONDARY_LANGUAGE";

/// Settings for one browsing session against a remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub sprite_base_url: String,
    pub page_size: u32,
    pub locale: Locale,
    pub primary_language: String,
    pub secondary_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            sprite_base_url: DEFAULT_SPRITE_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::Es,
            primary_language: "es".to_string(),
            secondary_language: "en".to_string(),
        }
    }
}

impl ClientConfig {
    /// Read a config file; JSON and TOML are both accepted.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let config: Self = match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(json_err) => toml::from_str(raw).map_err(|toml_err| {
                anyhow!(
                    "Config is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}"
                )
            })?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Overlay `DEX_*` environment variables.
    pub fn with_env(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(base_url) = lookup(ENV_API_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(sprite_base_url) = lookup(ENV_SPRITE_BASE_URL) {
            self.sprite_base_url = sprite_base_url;
        }
        if let Some(page_size) = lookup(ENV_PAGE_SIZE) {
            self.page_size = page_size.parse().with_context(|| {
                format!("{ENV_PAGE_SIZE} must be a positive integer, got {page_size:?}")
            })?;
        }
        if let Some(locale) = lookup(ENV_LOCALE) {
            self.locale = locale.parse().with_context(|| format!("Invalid {ENV_LOCALE}"))?;
        }
        if let Some(primary) = lookup(ENV_PRIMARY_LANGUAGE) {
            self.primary_language = primary;
        }
        if let Some(secondary) = lookup(ENV_SECONDARY_LANGUAGE) {
            self.secondary_language = secondary;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        Ok(())
    }

    pub fn pagination(&self) -> Result<PaginationController> {
        PaginationController::new(self.page_size).map_err(Into::into)
    }

    pub fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig {
            locale: self.locale,
            primary_language: self.primary_language.clone(),
            secondary_language: self.secondary_language.clone(),
            sprite_base_url: self.sprite_base_url.clone(),
        }
    }

    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(self.pagination()?, self.assembler_config()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_observed_catalog() {
        let config = ClientConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.primary_language, "es");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_and_json_are_accepted() {
        let from_toml = ClientConfig::parse("page_size = 50\nlocale = \"en\"\n").unwrap();
        assert_eq!(from_toml.page_size, 50);
        assert_eq!(from_toml.locale, Locale::En);
        assert_eq!(from_toml.base_url, DEFAULT_API_BASE_URL);

        let from_json = ClientConfig::parse(r#"{"primary_language": "fr"}"#).unwrap();
        assert_eq!(from_json.primary_language, "fr");
        assert_eq!(from_json.page_size, 20);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(ClientConfig::parse("page_size = 0").is_err());
    }

    #[test]
    fn overrides_take_precedence() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_API_BASE_URL, "http://127.0.0.1:8080/api/v2"),
            (ENV_PAGE_SIZE, "10"),
            (ENV_LOCALE, "en"),
            (ENV_SECONDARY_LANGUAGE, "  "),
        ]);
        let config = ClientConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api/v2");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.secondary_language, "en");
    }

    #[test]
    fn bad_override_is_reported() {
        let err = ClientConfig::default()
            .with_overrides(|key| (key == ENV_PAGE_SIZE).then(|| "many".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_PAGE_SIZE));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dex.toml");
        std::fs::write(&path, "sprite_base_url = \"https://img.example\"\n").unwrap();
        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.sprite_base_url, "https://img.example");
        assert_eq!(config.assembler_config().sprite_base_url, "https://img.example");
    }
}
