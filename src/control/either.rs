//! Either type - a success value or a failure value.
//!
//! `Either<T, E>` holds exactly one of `Right(T)` (success) or `Left(E)`
//! (failure). Chains built with [`Either::flat_map`] short-circuit on the
//! first failure: no success-path function runs after a `Left`.
//!
//! # Examples
//!
//! ```rust
//! use funcy::control::Either;
//!
//! fn checked_reading(raw: u16) -> Either<u16, String> {
//!     if raw < 10 {
//!         Either::left("Sensor read too low".to_string())
//!     } else {
//!         Either::right(raw)
//!     }
//! }
//!
//! let message = checked_reading(8)
//!     .fmap(|raw| raw * 2)
//!     .fold(|error| error, |value| format!("ok: {value}"));
//! assert_eq!(message, "Sensor read too low");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either a success (`Right`) or a failure (`Left`).
///
/// # Type Parameters
///
/// * `T` - The success type
/// * `E` - The failure type
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<T, E> {
    /// The failure variant.
    Left(E),
    /// The success variant.
    Right(T),
}

impl<T, E> Either<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success value.
    #[inline]
    pub const fn right(value: T) -> Self {
        Self::Right(value)
    }

    /// Creates a failure value.
    #[inline]
    pub const fn left(error: E) -> Self {
        Self::Left(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right(42);
    /// assert!(right.is_right());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Some(success)` or `None`.
    #[inline]
    pub fn right_value(self) -> Option<T> {
        match self {
            Self::Right(value) => Some(value),
            Self::Left(_) => None,
        }
    }

    /// Converts into `Some(failure)` or `None`.
    #[inline]
    pub fn left_value(self) -> Option<E> {
        match self {
            Self::Right(_) => None,
            Self::Left(error) => Some(error),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&T> {
        match self {
            Self::Right(value) => Some(value),
            Self::Left(_) => None,
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&E> {
        match self {
            Self::Right(_) => None,
            Self::Left(error) => Some(error),
        }
    }

    /// Returns the success value, consuming the either.
    ///
    /// Prefer [`Either::fold`] or [`Either::match_with`]; this accessor exists
    /// for call sites that have already checked [`Either::is_right`].
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right(42);
    /// assert_eq!(right.unwrap_right(), 42);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> T {
        match self {
            Self::Right(value) => value,
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
        }
    }

    /// Returns the failure value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> E {
        match self {
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
            Self::Left(error) => error,
        }
    }

    /// Returns the success value, panicking with `message` on a `Left`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `Left` value.
    #[inline]
    #[track_caller]
    pub fn expect_right(self, message: &str) -> T {
        match self {
            Self::Right(value) => value,
            Self::Left(_) => panic!("{message}"),
        }
    }

    /// Returns the failure value, panicking with `message` on a `Right`.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn expect_left(self, message: &str) -> E {
        match self {
            Self::Right(_) => panic!("{message}"),
            Self::Left(error) => error,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, passing failures through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right(21);
    /// assert_eq!(right.fmap(|x| x * 2), Either::right(42));
    ///
    /// let left: Either<i32, String> = Either::left("boom".to_string());
    /// assert_eq!(left.fmap(|x| x * 2), Either::left("boom".to_string()));
    /// ```
    #[inline]
    pub fn fmap<U, F>(self, function: F) -> Either<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Right(value) => Either::Right(function(value)),
            Self::Left(error) => Either::Left(error),
        }
    }

    /// Applies a function to the failure value, passing successes through.
    ///
    /// The active branch never changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Either;
    ///
    /// let left: Either<i32, u8> = Either::left(3);
    /// assert_eq!(left.map_left(|code| format!("code {code}")), Either::left("code 3".to_string()));
    /// ```
    #[inline]
    pub fn map_left<E2, F>(self, function: F) -> Either<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Right(value) => Either::Right(value),
            Self::Left(error) => Either::Left(function(error)),
        }
    }

    /// Applies one of two functions depending on the branch.
    #[inline]
    pub fn bimap<U, E2, F, G>(self, right_function: F, left_function: G) -> Either<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Right(value) => Either::Right(right_function(value)),
            Self::Left(error) => Either::Left(left_function(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `function` is invoked only for a success. A failure is propagated
    /// unchanged, re-typed to the new success type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Either;
    ///
    /// let to_volts = |raw: u16| -> Either<f64, String> {
    ///     Either::right(f64::from(raw) * 3.3 / 1023.0)
    /// };
    ///
    /// let failed: Either<u16, String> = Either::left("offline".to_string());
    /// assert_eq!(failed.flat_map(to_volts), Either::left("offline".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Either<U, E>
    where
        F: FnOnce(T) -> Either<U, E>,
    {
        match self {
            Self::Right(value) => function(value),
            Self::Left(error) => Either::Left(error),
        }
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Either<U, E>
    where
        F: FnOnce(T) -> Either<U, E>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Pattern-matches on the two branches, invoking exactly one handler.
    ///
    /// The failure handler comes first, mirroring the `Left`/`Right` order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Either;
    ///
    /// let right: Either<i32, String> = Either::right(7);
    /// assert_eq!(right.match_with(|e| e.len() as i32, |v| v * 10), 70);
    /// ```
    #[inline]
    pub fn match_with<R, L, G>(self, on_left: L, on_right: G) -> R
    where
        L: FnOnce(E) -> R,
        G: FnOnce(T) -> R,
    {
        match self {
            Self::Left(error) => on_left(error),
            Self::Right(value) => on_right(value),
        }
    }

    /// Eliminates the either by applying one of two functions.
    ///
    /// Same contract as [`Either::match_with`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Either;
    ///
    /// let left: Either<i32, String> = Either::left("bad".to_string());
    /// assert_eq!(left.fold(|e| e, |v| v.to_string()), "bad");
    /// ```
    #[inline]
    pub fn fold<R, L, G>(self, on_left: L, on_right: G) -> R
    where
        L: FnOnce(E) -> R,
        G: FnOnce(T) -> R,
    {
        self.match_with(on_left, on_right)
    }

    /// Swaps the branches: a success becomes a failure and vice versa.
    #[inline]
    pub fn swap(self) -> Either<E, T> {
        match self {
            Self::Right(value) => Either::Left(value),
            Self::Left(error) => Either::Right(error),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Either<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right(value) => write!(formatter, "Right({value})"),
            Self::Left(error) => write!(formatter, "Left({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Either<T, E> {
    /// `Ok(v)` becomes `Right(v)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<T, E> From<Either<T, E>> for Result<T, E> {
    /// `Right(v)` becomes `Ok(v)`, `Left(e)` becomes `Err(e)`.
    #[inline]
    fn from(either: Either<T, E>) -> Self {
        match either {
            Either::Right(value) => Ok(value),
            Either::Left(error) => Err(error),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Either<T, E> {
    type Inner = T;
    type WithType<B> = Either<B, E>;
}

impl<T, E> Functor for Either<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B, E>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        Self::fmap(self, function)
    }
}

impl<T, E> Applicative for Either<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Either<B, E>
    where
        B: Clone + 'static,
    {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<B, E>, function: F) -> Either<C, E>
    where
        F: Fn(T, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<T, E> Monad for Either<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<B, E>
    where
        F: Fn(T) -> Either<B, E> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }

    #[inline]
    fn then<B>(self, next: Either<B, E>) -> Either<B, E>
    where
        B: 'static,
    {
        Self::flat_map(self, |_| next)
    }
}
