use std::env;
use tera::Tera;

use crate::error::ConfigError;
use crate::petfinder::{PetfinderClient, PetfinderConfig, PETFINDER_API_BASE};

/// Application configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to.
    pub bind_address: String,
    /// Glob for the Tera page templates.
    pub templates_glob: String,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Petfinder credentials and endpoint.
    pub petfinder: PetfinderConfig,
}

impl Config {
    /// Creates Config from environment variables with defaults.
    ///
    /// The Petfinder client id and secret have no default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(key))
        };

        let client_id = required("PETFINDER_CLIENT_ID")?;
        let client_secret = required("PETFINDER_CLIENT_SECRET")?;
        let api_base = lookup("PETFINDER_API_BASE").unwrap_or_else(|| PETFINDER_API_BASE.into());

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8201".into()),
            templates_glob: lookup("TEMPLATES_GLOB")
                .unwrap_or_else(|| "templates/**/*.html".into()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".into()),
            petfinder: PetfinderConfig::new(client_id, client_secret).with_base_url(&api_base),
        })
    }
}

/// Shared application state passed to all request handlers.
///
/// Holds no fetched data: every page load fetches and aggregates afresh.
#[derive(Debug)]
pub struct AppState {
    /// Template engine for rendering HTML pages.
    pub tera: Tera,
    /// Client used by every view for its own fetch sequence.
    pub petfinder: PetfinderClient,
}

impl AppState {
    pub fn new(tera: Tera, petfinder: PetfinderClient) -> Self {
        Self { tera, petfinder }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            ("PETFINDER_CLIENT_ID", "id"),
            ("PETFINDER_CLIENT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8201");
        assert_eq!(config.templates_glob, "templates/**/*.html");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.petfinder.client_id, "id");
        assert_eq!(config.petfinder.base_url, PETFINDER_API_BASE);
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PETFINDER_CLIENT_ID", "id")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("PETFINDER_CLIENT_SECRET")));
    }

    #[test]
    fn test_empty_client_id_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("PETFINDER_CLIENT_ID", ""),
            ("PETFINDER_CLIENT_SECRET", "secret"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("PETFINDER_CLIENT_ID")));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PETFINDER_CLIENT_ID", "id"),
            ("PETFINDER_CLIENT_SECRET", "secret"),
            ("PETFINDER_API_BASE", "http://localhost:9999/v2/"),
            ("BIND_ADDRESS", "127.0.0.1:3000"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert_eq!(config.petfinder.base_url, "http://localhost:9999/v2");
    }
}
