//! Monad type class - sequencing computations within a context.
//!
//! `flat_map` lets the result of one step choose the next step and flattens
//! the nested container. For `Maybe` and `Either` that means short-circuiting
//! on absence or failure; for `IO` and `Async` it means running the stages
//! one after the other.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funcy::effect::IO;
//! use funcy::typeclass::Monad;
//!
//! fn add_one<M>(m: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//!     M::WithType<i32>: Monad<Inner = i32>,
//! {
//!     Monad::flat_map(m, |n| <M as funcy::typeclass::Applicative>::pure(n + 1))
//! }
//!
//! assert_eq!(add_one(IO::pure(41)).run_unsafe(), 42);
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is absent or failed, that propagates and `next` is dropped.
    /// In Haskell, this is the `>>` operator.
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        B: 'static;
}
