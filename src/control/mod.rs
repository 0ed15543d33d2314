//! Value containers for optional and tagged-failure results.
//!
//! - [`Maybe`]: zero or one value, with no reason attached to absence
//! - [`Either`]: a success (`Right`) or a failure (`Left`) with a payload
//!
//! Both are plain, immutable values: constructing one never runs anything,
//! and every transformation returns a new container.
//!
//! # Examples
//!
//! ```rust
//! use funcy::control::{Either, Maybe};
//!
//! let address: Maybe<&str> = Maybe::just("10.0.0.2");
//! let status: Either<&str, u8> = address.fold(Either::right, || Either::left(4));
//! assert_eq!(status, Either::right("10.0.0.2"));
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
