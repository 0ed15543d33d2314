//! Connection retry configuration.
//!
//! Values come from defaults, explicit arguments, or environment variables
//! read through a lookup function. Every path validates the same way.
//!
//! # Example
//!
//! ```rust
//! use funcy::platform::ConnectConfig;
//!
//! let config = ConnectConfig::from_lookup(|key| match key {
//!     "FUNCY_CONNECT_TIMEOUT_MS" => Some("3000".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.timeout_ms, 3000);
//! assert_eq!(config.retry_interval_ms, 500);
//! ```

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

/// Environment variable holding the connection timeout in milliseconds.
pub const TIMEOUT_KEY: &str = "FUNCY_CONNECT_TIMEOUT_MS";

/// Environment variable holding the delay between status polls in
/// milliseconds.
pub const RETRY_INTERVAL_KEY: &str = "FUNCY_CONNECT_RETRY_INTERVAL_MS";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but is not a valid number.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
    /// The retry interval is zero.
    #[error("retry interval must be greater than zero")]
    ZeroRetryInterval,
    /// The retry interval does not fit inside the timeout.
    #[error("retry interval {retry_interval_ms}ms exceeds timeout {timeout_ms}ms")]
    IntervalExceedsTimeout {
        /// The configured timeout.
        timeout_ms: u64,
        /// The configured retry interval.
        retry_interval_ms: u64,
    },
}

/// How long [`connect`](super::connect) waits and how often it polls.
///
/// With the `serde` feature, deserialization fills absent fields with the
/// defaults and then applies the same checks as [`ConnectConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConnectConfig {
    /// Total time allowed for the connection attempt.
    pub timeout_ms: u64,
    /// Delay between status polls.
    pub retry_interval_ms: u64,
}

impl ConnectConfig {
    /// Default timeout: 15 seconds.
    pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
    /// Default retry interval: 500 milliseconds.
    pub const DEFAULT_RETRY_INTERVAL_MS: u64 = 500;

    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroRetryInterval` if `retry_interval_ms` is
    /// zero and `ConfigError::IntervalExceedsTimeout` if it is larger than
    /// `timeout_ms`.
    pub const fn new(timeout_ms: u64, retry_interval_ms: u64) -> Result<Self, ConfigError> {
        if retry_interval_ms == 0 {
            return Err(ConfigError::ZeroRetryInterval);
        }
        if retry_interval_ms > timeout_ms {
            return Err(ConfigError::IntervalExceedsTimeout {
                timeout_ms,
                retry_interval_ms,
            });
        }
        Ok(Self {
            timeout_ms,
            retry_interval_ms,
        })
    }

    /// Loads configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `FUNCY_CONNECT_TIMEOUT_MS` (optional, default: 15000)
    /// - `FUNCY_CONNECT_RETRY_INTERVAL_MS` (optional, default: 500)
    ///
    /// # Errors
    ///
    /// See [`ConnectConfig::from_lookup`].
    ///
    /// A variable that is set but not valid Unicode is reported as
    /// `ConfigError::InvalidValue` rather than treated as missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_fallible_lookup(|key| classify_env_var(key, env::var(key)))
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Missing variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be
    /// parsed, and the validation errors of [`ConnectConfig::new`].
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        Self::from_fallible_lookup(|key| Ok(lookup(key)))
    }

    fn from_fallible_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let timeout_ms = get_optional_parsed(&lookup, TIMEOUT_KEY, Self::DEFAULT_TIMEOUT_MS)?;
        let retry_interval_ms = get_optional_parsed(
            &lookup,
            RETRY_INTERVAL_KEY,
            Self::DEFAULT_RETRY_INTERVAL_MS,
        )?;
        Self::new(timeout_ms, retry_interval_ms)
    }
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            retry_interval_ms: Self::DEFAULT_RETRY_INTERVAL_MS,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct ConnectConfigFields {
    timeout_ms: u64,
    retry_interval_ms: u64,
}

#[cfg(feature = "serde")]
impl Default for ConnectConfigFields {
    fn default() -> Self {
        Self {
            timeout_ms: ConnectConfig::DEFAULT_TIMEOUT_MS,
            retry_interval_ms: ConnectConfig::DEFAULT_RETRY_INTERVAL_MS,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ConnectConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = ConnectConfigFields::deserialize(deserializer)?;
        Self::new(fields.timeout_ms, fields.retry_interval_ms).map_err(serde::de::Error::custom)
    }
}

/// Maps the result of reading an environment variable.
///
/// `NotPresent` is a missing value; `NotUnicode` is an invalid one.
fn classify_env_var(
    key: &str,
    value: Result<String, env::VarError>,
) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value is not valid Unicode".to_string(),
        }),
    }
}

/// Looks up `key` and parses it, with a default value.
fn get_optional_parsed<L>(lookup: &L, key: &str, default: u64) -> Result<u64, ConfigError>
where
    L: Fn(&str) -> Result<Option<String>, ConfigError>,
{
    lookup(key)?.map_or_else(
        || Ok(default),
        |value| {
            value
                .trim()
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
