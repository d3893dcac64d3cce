use std::env;
use std::path::PathBuf;

/// The environment variable holding the portal API key.
pub const API_KEY_VAR: &str = "PUBNUB_API_KEY";

/// The base URL for the PubNub portal API, version 2.
pub const DEFAULT_BASE_URL: &str = "https://ps.pndsn.com/v2";

/// Where the generated `.env` file lands, relative to the working directory.
/// The client application reads its publish/subscribe keys from here.
pub const DEFAULT_ENV_FILE: &str = "client/.env";

/// Possible errors while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("the {API_KEY_VAR} environment variable must be set to a portal API key")]
    MissingApiKey,
}

/// Everything a provisioning run needs, resolved once at process start.
///
/// This is deliberately immutable: it gets constructed exactly once and is
/// passed by reference into every request-issuing call.
#[derive(Debug, Clone)]
pub struct Config {
    /// The portal API key, sent as a bearer token on every request.
    pub api_key: String,
    /// The portal base URL, without a trailing slash.
    pub base_url: String,
    /// The destination path for the generated `.env` file.
    pub env_file: PathBuf,
}

impl Config {
    /// Resolves configuration from the process environment.
    ///
    /// The API key is required and checked up front, before any request is
    /// made. The base URL and env file path have sensible defaults and are
    /// only overridable for local testing against a substitute portal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        let base_url =
            env::var("PUBNUB_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let env_file = env::var("PUBNUB_ENV_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ENV_FILE));

        Ok(Self {
            api_key,
            base_url,
            env_file,
        })
    }

    /// Builds a configuration directly, bypassing the environment.
    pub fn new(api_key: String, base_url: String, env_file: PathBuf) -> Self {
        Self {
            api_key,
            base_url,
            env_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // All of the environment handling lives in one test so that nothing
    // races on the process environment under the parallel test runner.
    #[test]
    fn resolves_from_environment() {
        env::remove_var(API_KEY_VAR);
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingApiKey)
        ));

        // An empty key should fail just as loudly as an absent one.
        env::set_var(API_KEY_VAR, "");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingApiKey)
        ));

        env::set_var(API_KEY_VAR, "sk_test_key");
        let config = Config::from_env().expect("key is set");
        assert_eq!(config.api_key, "sk_test_key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.env_file, PathBuf::from(DEFAULT_ENV_FILE));

        env::remove_var(API_KEY_VAR);
    }
}
