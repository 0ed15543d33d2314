//! Functor type class - mapping over container values.
//!
//! A `Functor` lets a function transform the contents of a container
//! without changing its shape: an absent `Maybe` stays absent, a failed
//! `Either` stays failed, and a deferred `IO` stays deferred.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funcy::control::Maybe;
//! use funcy::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     Functor::fmap(container, |n: i32| format!("value {n}"))
//! }
//!
//! let described = describe(Maybe::just(5));
//! assert_eq!(described, Maybe::just("value 5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The mapping function is `Fn` rather than `FnOnce` because the deferred
/// containers (`IO`, `Async`) may be triggered any number of times and apply
/// the function on every run.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the inner value with a constant, keeping the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Either;
    /// use funcy::typeclass::Functor;
    ///
    /// let ready: Either<i32, String> = Either::right(3);
    /// assert_eq!(Functor::replace(ready, "ok"), Either::right("ok"));
    /// ```
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the inner value, keeping only the structure (and, for
    /// deferred containers, the effect).
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}
