//! Collaborators at the edge of a control loop.
//!
//! - [`console`]: line logging as `IO<()>`
//! - [`clock`]: monotonic milliseconds and a blocking delay
//! - [`network`]: joining a network as `IO<Either<ConnectionState, ConnectionState>>`
//! - [`config`]: retry settings for the network helper
//!
//! Hardware is reached only through the [`ConsoleSink`], [`Clock`] and
//! [`NetworkDriver`] traits. Nothing here holds global state: the caller
//! keeps the latest [`ConnectionState`] and passes it along.

pub mod clock;
pub mod config;
pub mod console;
pub mod network;

pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, ConnectConfig};
pub use console::{ConsoleSink, MemoryConsole, StdoutConsole, log_io, log_io_to};
pub use network::{ConnectionState, ConnectionStatus, Credentials, NetworkDriver, connect};
