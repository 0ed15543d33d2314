//! Applicative type class - lifting values and combining contexts.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the container, and `map2`, which combines two independent containers.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funcy::control::Maybe;
//! use funcy::typeclass::Applicative;
//!
//! let total = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
//! assert_eq!(total, Maybe::just(3));
//!
//! let lifted: Maybe<&str> = <Maybe<()> as Applicative>::pure("hi");
//! assert_eq!(lifted, Maybe::just("hi"));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// `pure` requires `B: Clone` because a lifted value inside a deferred
/// container is handed out again on every trigger.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is absent or failed, so is the result. Deferred
    /// containers run `self` before `other`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + 'static,
        B: 'static,
        C: 'static;

    /// Combines two applicative values into a tuple.
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        B: 'static,
        Self::Inner: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}
