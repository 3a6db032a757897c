use std::time::Duration;

use config::{Config, Environment};
use secrecy::Secret;
use serde::Deserialize;

use crate::config::constants::prod;

#[derive(Debug, Clone, Deserialize)]
pub struct GateSetting {
    pub identity: IdentitySetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentitySetting {
    pub base_url: String,
    pub api_key: Secret<String>,
    pub timeout_in_millis: u64,
}

impl IdentitySetting {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

impl GateSetting {
    /// Load settings from the environment (`EDUGATE__` prefix, `__`
    /// separator), with a `.env` file honored when present.
    ///
    /// # Panics
    /// Panics if the configuration cannot be built or deserialized, e.g.
    /// when the identity API key is missing.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("identity.base_url", prod::identity::BASE_URL)
            .expect("default identity base url is a valid setting")
            .set_default("identity.timeout_in_millis", prod::identity::TIMEOUT_IN_MILLIS)
            .expect("default identity timeout is a valid setting")
            .add_source(Environment::with_prefix("EDUGATE").separator("__"))
            .build()
            .expect("Failed to build gate configuration")
            .try_deserialize()
            .expect("Failed to deserialize gate configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    use crate::config::constants::env;

    // Single test so the env mutations cannot race a parallel reload.
    #[test]
    fn load_applies_defaults_and_env_overrides() {
        unsafe { std::env::set_var(env::IDENTITY_API_KEY_ENV_VAR, "test-key") };

        let setting = GateSetting::load();
        assert_eq!(setting.identity.base_url, prod::identity::BASE_URL);
        assert_eq!(
            setting.identity.timeout_in_millis,
            prod::identity::TIMEOUT_IN_MILLIS
        );
        assert_eq!(
            setting.identity.timeout(),
            Duration::from_millis(prod::identity::TIMEOUT_IN_MILLIS)
        );
        assert_eq!(setting.identity.api_key.expose_secret(), "test-key");

        unsafe { std::env::set_var(env::IDENTITY_BASE_URL_ENV_VAR, "http://localhost:9099/") };

        let setting = GateSetting::load();
        assert_eq!(setting.identity.base_url, "http://localhost:9099/");

        unsafe { std::env::remove_var(env::IDENTITY_BASE_URL_ENV_VAR) };
        unsafe { std::env::remove_var(env::IDENTITY_API_KEY_ENV_VAR) };
    }
}
