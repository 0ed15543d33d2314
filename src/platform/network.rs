//! Joining a wireless network, as a fallible deferred effect.
//!
//! The radio sits behind [`NetworkDriver`] and time behind [`Clock`], so
//! [`connect`] runs unchanged against hardware, a host simulation, or the
//! fakes in the test suite.

use std::fmt;

use crate::control::{Either, Maybe};
use crate::effect::IO;

use super::clock::Clock;
use super::config::ConnectConfig;

/// Link state reported by the radio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectionStatus {
    /// Associated and holding an address.
    Connected,
    /// The requested network is not in range.
    NoSsidAvailable,
    /// The association attempt failed.
    ConnectFailed,
    /// The network rejected the credentials.
    WrongPassword,
    /// Not associated with any network.
    Disconnected,
    /// Any status the radio reports that is not listed above.
    #[default]
    Unknown,
}

impl ConnectionStatus {
    /// Numeric code, `0..=5` in declaration order.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Connected => 0,
            Self::NoSsidAvailable => 1,
            Self::ConnectFailed => 2,
            Self::WrongPassword => 3,
            Self::Disconnected => 4,
            Self::Unknown => 5,
        }
    }

    /// Maps a numeric code back to a status; anything out of range is
    /// `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::platform::ConnectionStatus;
    ///
    /// assert_eq!(ConnectionStatus::from_code(3), ConnectionStatus::WrongPassword);
    /// assert_eq!(ConnectionStatus::from_code(255), ConnectionStatus::Unknown);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Connected,
            1 => Self::NoSsidAvailable,
            2 => Self::ConnectFailed,
            3 => Self::WrongPassword,
            4 => Self::Disconnected,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Connected => "Successfully connected to WiFi.",
            Self::NoSsidAvailable => "SSID not available.",
            Self::ConnectFailed => "Connection failed.",
            Self::WrongPassword => "Wrong password.",
            Self::Disconnected => "Disconnected from network.",
            Self::Unknown => "Unknown WiFi status.",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.describe())
    }
}

/// Outcome of a connection attempt.
///
/// Both sides of [`connect`]'s result carry one of these; only a successful
/// attempt has an address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionState {
    /// Local address, present only when connected.
    pub address: Maybe<String>,
    /// Final link status.
    pub status: ConnectionStatus,
    /// Human-readable summary.
    pub message: String,
}

/// Network name and passphrase.
///
/// The passphrase is read when deserializing but never written out.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Credentials {
    /// Network name.
    pub ssid: String,
    /// Passphrase.
    #[cfg_attr(feature = "serde", serde(skip_serializing, default))]
    pub password: String,
}

impl Credentials {
    /// Creates credentials.
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Credentials")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The radio.
pub trait NetworkDriver {
    /// Starts associating with `ssid`. Returns without waiting.
    fn begin(&self, ssid: &str, password: &str);

    /// Current link status.
    fn status(&self) -> ConnectionStatus;

    /// Local address in display form. Meaningful only while connected.
    fn local_address(&self) -> String;
}

/// Builds an `IO` that joins the network described by `credentials`.
///
/// Each trigger calls `begin`, then polls `status`, sleeping
/// `retry_interval_ms` between polls, until the link is up or `timeout_ms`
/// has passed. The final status decides the result:
///
/// - `Connected`: `Right` with the address and the message
///   `"<description> IP: <address>"`
/// - anything else: `Left` with no address and the plain description
///
/// The trigger blocks for up to `timeout_ms` plus one interval.
///
/// # Examples
///
/// ```rust
/// use funcy::platform::{
///     Clock, ConnectConfig, ConnectionStatus, Credentials, NetworkDriver, connect,
/// };
///
/// struct Radio;
/// impl NetworkDriver for Radio {
///     fn begin(&self, _ssid: &str, _password: &str) {}
///     fn status(&self) -> ConnectionStatus { ConnectionStatus::Connected }
///     fn local_address(&self) -> String { "192.168.4.7".into() }
/// }
///
/// struct Frozen;
/// impl Clock for Frozen {
///     fn now_ms(&self) -> u64 { 0 }
///     fn delay_ms(&self, _duration_ms: u64) {}
/// }
///
/// let join = connect(Radio, Frozen, Credentials::new("lab", "secret"), ConnectConfig::default());
/// let state = join.run_unsafe().unwrap_right();
/// assert_eq!(state.message, "Successfully connected to WiFi. IP: 192.168.4.7");
/// ```
pub fn connect<D, C>(
    driver: D,
    clock: C,
    credentials: Credentials,
    config: ConnectConfig,
) -> IO<Either<ConnectionState, ConnectionState>>
where
    D: NetworkDriver + 'static,
    C: Clock + 'static,
{
    IO::new(move || attempt_connection(&driver, &clock, &credentials, config))
}

fn attempt_connection<D, C>(
    driver: &D,
    clock: &C,
    credentials: &Credentials,
    config: ConnectConfig,
) -> Either<ConnectionState, ConnectionState>
where
    D: NetworkDriver,
    C: Clock,
{
    tracing::info!(ssid = %credentials.ssid, timeout_ms = config.timeout_ms, "connecting");
    driver.begin(&credentials.ssid, &credentials.password);

    let started = clock.now_ms();
    let mut polls: u32 = 0;
    while driver.status() != ConnectionStatus::Connected
        && clock.now_ms().saturating_sub(started) < config.timeout_ms
    {
        clock.delay_ms(config.retry_interval_ms);
        polls += 1;
        tracing::debug!(
            poll = polls,
            elapsed_ms = clock.now_ms().saturating_sub(started),
            "waiting for link"
        );
    }

    let status = driver.status();
    if status == ConnectionStatus::Connected {
        let address = driver.local_address();
        tracing::info!(address = %address, polls, "connected");
        Either::right(ConnectionState {
            message: format!("{} IP: {address}", status.describe()),
            address: Maybe::just(address),
            status,
        })
    } else {
        tracing::warn!(status = ?status, polls, "connection attempt failed");
        Either::left(ConnectionState {
            address: Maybe::nothing(),
            status,
            message: status.describe().to_string(),
        })
    }
}
