//! Lightweight configuration loader.
//!
//! Uses Figment to merge built-in defaults, `config.toml`,
//! `config.<env>.toml` and `APP_*` env vars (`__` separates nested keys, e.g.
//! `APP_PROVIDER__SHOP_KEY`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::Error;

pub const PLACEHOLDER_SHOP_KEY: &str = "Findologic ShopKey";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationType {
    #[default]
    Api,
    /// Direct integration: the provider renders results itself, so the shop
    /// never queries it.
    Di,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub active: bool,
    pub shop_key: String,
    pub active_on_category_pages: bool,
    pub integration_type: IntegrationType,
    pub service_url: String,
    pub revision: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            active: false,
            shop_key: String::new(),
            active_on_category_pages: false,
            integration_type: IntegrationType::Api,
            service_url: "https://service.findologic.com/ps/xml_2.0/".to_string(),
            revision: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl ProviderConfig {
    /// Shop keys that cannot authenticate against the provider.
    pub fn has_usable_shop_key(&self) -> bool {
        let key = self.shop_key.trim();
        !key.is_empty() && key != PLACEHOLDER_SHOP_KEY
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."))
    }

    pub fn load_from(dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(dir, &env_name)
    }

    pub fn load_for_env(dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            .merge(Serialized::default("provider", ProviderConfig::default()))
            .merge(Toml::file(dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate_for_env(env_name)?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Like `get`, but an absent key is `None`. A present key that fails to
    /// extract is still an error.
    pub fn get_optional<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        if !self.figment.contains(key) {
            return Ok(None);
        }
        self.get(key).map(Some)
    }

    pub fn provider(&self) -> anyhow::Result<ProviderConfig> {
        self.get("provider")
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let provider = self.provider()?;
        if provider.active && !provider.service_url.starts_with("http") {
            return Err(Error::InvalidConfig(format!("provider.service_url '{}' is not an http(s) URL", provider.service_url)).into());
        }
        match env {
            "prod" | "production" if provider.active && !provider.has_usable_shop_key() => {
                Err(Error::InvalidConfig("provider.shop_key must be set when the provider is active in production".to_string()).into())
            }
            _ => Ok(()),
        }
    }
}
