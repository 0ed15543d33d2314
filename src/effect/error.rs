//! Error types for the effect system.

use thiserror::Error;

/// Returned by [`Resolver::resolve`](super::Resolver::resolve) when no
/// callback is parked.
///
/// This happens when the deferred `Async` has not been triggered yet, or
/// when every trigger has already been resolved.
///
/// # Examples
///
/// ```rust
/// use funcy::effect::{Async, ResolveError};
///
/// let (_pending, resolver) = Async::<i32>::deferred();
/// assert_eq!(resolver.resolve(1), Err(ResolveError::NothingPending));
/// assert_eq!(
///     ResolveError::NothingPending.to_string(),
///     "no callback is waiting to be resolved"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The resolver's queue of parked callbacks is empty.
    #[error("no callback is waiting to be resolved")]
    NothingPending,
}
