//! Maybe type - an optional value with no reason attached to absence.
//!
//! `Maybe<T>` is either `Just` a value or `Nothing`. Unlike `Option`, it has
//! no accessor that hands out the inner value: the only ways to get
//! information out are [`Maybe::match_with`] and [`Maybe::fold`], which force
//! the caller to handle both cases.
//!
//! # Examples
//!
//! ```rust
//! use funcy::control::Maybe;
//!
//! fn parse_reading(raw: &str) -> Maybe<u16> {
//!     raw.parse().ok().into()
//! }
//!
//! let label = parse_reading("512")
//!     .fmap(|value| u32::from(value) * 2)
//!     .fold(|value| format!("reading {value}"), || "no reading".to_string());
//! assert_eq!(label, "reading 1024");
//!
//! let label = parse_reading("n/a")
//!     .fmap(|value| u32::from(value) * 2)
//!     .fold(|value| format!("reading {value}"), || "no reading".to_string());
//! assert_eq!(label, "no reading");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: `Just(T)` or `Nothing`.
///
/// Construct with [`Maybe::just`] / [`Maybe::nothing`] (or from an
/// `Option`). The container is immutable; every transformation returns a
/// new `Maybe`.
///
/// # Type Parameters
///
/// * `T` - The type of the value that may be present
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Maybe<T> {
    value: Option<T>,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Maybe;
    ///
    /// assert!(Maybe::just(7).is_just());
    /// ```
    #[inline]
    pub const fn just(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an empty `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Maybe;
    ///
    /// let empty: Maybe<i32> = Maybe::nothing();
    /// assert!(empty.is_nothing());
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self { value: None }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.value.is_none()
    }

    /// Borrows the contents, producing a `Maybe<&T>`.
    ///
    /// Lets callers dispatch on a `Maybe` they want to keep.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Maybe;
    ///
    /// let address = Maybe::just("10.0.0.7".to_string());
    /// let length = address.as_ref().fold(|ip| ip.len(), || 0);
    /// assert_eq!(length, 8);
    /// assert!(address.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// `Just(v)` becomes `Just(function(v))`; `Nothing` stays `Nothing` and
    /// `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(21).fmap(|x| x * 2), Maybe::just(42));
    /// assert_eq!(Maybe::<i32>::nothing().fmap(|x| x * 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self.value {
            Some(value) => Maybe::just(function(value)),
            None => Maybe::nothing(),
        }
    }

    /// Chains a computation that itself may produce nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Maybe;
    ///
    /// let halve = |n: i32| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() };
    /// assert_eq!(Maybe::just(8).flat_map(halve), Maybe::just(4));
    /// assert_eq!(Maybe::just(7).flat_map(halve), Maybe::nothing());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self.value {
            Some(value) => function(value),
            None => Maybe::nothing(),
        }
    }

    /// Alias for [`Maybe::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.flat_map(function)
    }

    /// Keeps the value only if `predicate` accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(12).filter(|n| *n > 10), Maybe::just(12));
    /// assert_eq!(Maybe::just(3).filter(|n| *n > 10), Maybe::nothing());
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Returns `self` if a value is present, otherwise the result of
    /// `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.value {
            Some(_) => self,
            None => alternative(),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Pattern-matches on the two cases, invoking exactly one handler.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Maybe;
    ///
    /// let status = Maybe::just("192.168.4.2").match_with(
    ///     |ip| format!("online at {ip}"),
    ///     || "offline".to_string(),
    /// );
    /// assert_eq!(status, "online at 192.168.4.2");
    /// ```
    #[inline]
    pub fn match_with<R, J, N>(self, on_just: J, on_nothing: N) -> R
    where
        J: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.value {
            Some(value) => on_just(value),
            None => on_nothing(),
        }
    }

    /// Reduces the `Maybe` to a single value.
    ///
    /// Same contract as [`Maybe::match_with`]; the two names exist so call
    /// sites can read as either a pattern match or a reduction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::control::Maybe;
    ///
    /// let sum = Maybe::just(5).fold(|n| n + 1, || 0);
    /// assert_eq!(sum, 6);
    /// assert_eq!(Maybe::<i32>::nothing().fold(|n| n + 1, || 0), 0);
    /// ```
    #[inline]
    pub fn fold<R, J, N>(self, on_just: J, on_nothing: N) -> R
    where
        J: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        self.match_with(on_just, on_nothing)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// `Some(v)` becomes `Just(v)`, `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self { value: option }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Just({value})"),
            None => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        Self::fmap(self, function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B>
    where
        B: Clone + 'static,
    {
        Maybe::just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: Fn(T, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match (self.value, other.value) {
            (Some(a), Some(b)) => Maybe::just(function(a, b)),
            _ => Maybe::nothing(),
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> Maybe<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }

    #[inline]
    fn then<B>(self, next: Maybe<B>) -> Maybe<B>
    where
        B: 'static,
    {
        Self::flat_map(self, |_| next)
    }
}
