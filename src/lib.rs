//! # funcy
//!
//! Functional containers for single-threaded, firmware-style control loops.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over a GAT-based
//!   `TypeConstructor`
//! - **Control**: `Maybe` for optional values, `Either` for results that
//!   carry a failure payload
//! - **Effect**: `IO` for deferred, re-runnable side effects, `Async` for
//!   callback-driven computations, and `bridge` helpers for fallible
//!   pipelines
//! - **Platform**: console logging, a clock, and a network-connect helper
//!   driven through traits
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: `Maybe` and `Either`
//! - `effect`: `IO`, `Async` and the bridge helpers
//! - `platform`: Console, clock, network and configuration collaborators
//! - `futures`: `Async::run_future`
//! - `serde`: Serialization for `Maybe`, `Either` and the platform data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcy::prelude::*;
//!
//! let reading = bridge::lift_io_to_either(
//!     IO::pure(812_u16),
//!     |raw| format!("reading {raw} is below threshold"),
//!     |raw| *raw < 10,
//! );
//! let report = bridge::map_io_either(reading, |raw| format!("raw={raw}"));
//!
//! assert_eq!(report.run_unsafe(), Either::right("raw=812".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funcy::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "platform")]
    pub use crate::platform::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "platform")]
pub mod platform;
