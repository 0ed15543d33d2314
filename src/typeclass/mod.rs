//! Type class traits shared by every container in this crate.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GATs
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//!
//! `Maybe`, `Either`, `IO` and `Async` implement all four, so code can be
//! written once against the trait and reused for optional values, tagged
//! failures, deferred effects and callback pipelines alike.
//!
//! # Examples
//!
//! ```rust
//! use funcy::control::{Either, Maybe};
//! use funcy::typeclass::Functor;
//!
//! fn doubled<F: Functor<Inner = i32>>(container: F) -> F::WithType<i32> {
//!     Functor::fmap(container, |n| n * 2)
//! }
//!
//! assert_eq!(doubled(Maybe::just(4)), Maybe::just(8));
//! assert_eq!(doubled(Either::<i32, String>::left("no".into())), Either::left("no".into()));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
