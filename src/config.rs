// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use crate::stats::FragmentStyle;
use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

/// Reads an optional environment variable that must parse when present.
///
/// Missing falls back to the default; a present but malformed value is a
/// startup error. Used for switches where guessing would hide a typo.
macro_rules! checked_env_parse {
    // ---
    ($key:literal, $parse:expr, $default:expr) => {
        match std::env::var($key) {
            Ok(value) => $parse(value.as_str())
                .map_err(|err| anyhow::anyhow!("Invalid configuration {}: {}", $key, err))?,
            Err(_) => $default,
        }
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails because of a malformed
/// environment variable.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_invalid_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Invalid configuration ", $key)),
            "unexpected error: {err}"
        );
    }};
}

/// Parses the usual spellings of a boolean switch.
fn parse_flag(value: &str) -> Result<bool> {
    // ---
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("'{other}' is not a boolean")),
    }
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All configuration is validated eagerly during initialization.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub stats: page_stats::StatsConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            stats: page_stats::StatsConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// Listener configuration for the demo server.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address the HTTP listener binds to. Defaults to `127.0.0.1:8080`.
        pub bind_addr: String,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr =
                std::env::var("API_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

            Ok(Self { bind_addr })
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Page stats configuration
// ============================================================

mod page_stats {
    // ---
    use super::*;

    /// Settings for the page stats layer.
    ///
    /// Passed to the layer when it is constructed; nothing reads the
    /// environment once the router is built.
    #[derive(Debug, Clone)]
    pub struct StatsConfig {
        /// Whether the layer measures and annotates responses. Defaults to false.
        pub debug: bool,

        /// Styling flavour of the injected fragment. Defaults to class-based.
        pub style: FragmentStyle,

        /// Largest response body the layer will buffer. Defaults to 16 MiB.
        pub max_body_bytes: usize,

        /// Number of query records the in-memory log retains. Defaults to 9000.
        pub query_log_limit: usize,
    }

    impl Default for StatsConfig {
        fn default() -> Self {
            // ---
            Self {
                debug: false,
                style: FragmentStyle::Classes,
                max_body_bytes: 16 * 1024 * 1024,
                query_log_limit: 9000,
            }
        }
    }

    impl StatsConfig {
        /// Builds a [`StatsConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `PAGE_STATS_DEBUG` or `PAGE_STATS_STYLE` is
        /// set to something unrecognised.
        pub fn from_env() -> Result<Self> {
            // ---
            let defaults = Self::default();

            let debug = checked_env_parse!("PAGE_STATS_DEBUG", parse_flag, defaults.debug);
            let style = checked_env_parse!(
                "PAGE_STATS_STYLE",
                str::parse::<FragmentStyle>,
                defaults.style
            );
            let max_body_bytes =
                optional_env_parse!("PAGE_STATS_MAX_BODY_BYTES", usize, defaults.max_body_bytes);
            let query_log_limit =
                optional_env_parse!("PAGE_STATS_QUERY_LOG_LIMIT", usize, defaults.query_log_limit);

            Ok(Self {
                debug,
                style,
                max_body_bytes,
                query_log_limit,
            })
        }
    }
}
pub use page_stats::StatsConfig;

// ============================================================
// Tests
// ============================================================
