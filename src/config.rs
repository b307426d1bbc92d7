//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

use anyhow::Context;

use crate::domain::TypeCatalog;

/// Default and maximum pool capacity when `MAX_POOL_SIZE` is not set.
pub const DEFAULT_MAX_POOL_SIZE: usize = 536_870_912;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Capacity given to pools created without one, and the largest
    /// capacity a client may request.
    pub max_pool_size: usize,

    /// Type tags pools may be created with.
    pub type_catalog: TypeCatalog,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as a
    /// [`SocketAddr`], or if `REGISTERED_TYPES` contains an invalid tag.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let raw_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("invalid LISTEN_ADDR `{raw_addr}`"))?;

        let max_pool_size = parse_env("MAX_POOL_SIZE", DEFAULT_MAX_POOL_SIZE).max(1);

        let type_catalog = match std::env::var("REGISTERED_TYPES") {
            Ok(raw) => TypeCatalog::from_list(&raw).context("invalid REGISTERED_TYPES")?,
            Err(_) => TypeCatalog::open(),
        };

        let log_json = parse_env_bool("LOG_JSON", false);

        Ok(Self {
            listen_addr,
            max_pool_size,
            type_catalog,
            log_json,
        })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            type_catalog: TypeCatalog::open(),
            log_json: false,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        assert_eq!(parse_env("POOL_GATEWAY_TEST_UNSET_KEY", 42usize), 42);
        assert!(parse_env_bool("POOL_GATEWAY_TEST_UNSET_KEY", true));
    }

    #[test]
    fn default_config_is_open_with_large_ceiling() {
        let config = GatewayConfig::default();
        assert!(config.type_catalog.is_open());
        assert_eq!(config.max_pool_size, DEFAULT_MAX_POOL_SIZE);
        assert_eq!(config.listen_addr.port(), 3000);
    }
}
