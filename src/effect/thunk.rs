//! Thunks - the deferred computations stored inside an `IO`.
//!
//! A [`Thunk`] is anything that can be invoked, repeatedly, to produce a
//! value. `IO` holds one behind a shared pointer and calls
//! [`Thunk::invoke`] once per trigger.
//!
//! Two adapters cover the common cases:
//!
//! - [`FromFn`]: wraps a closure (the captured-lambda case)
//! - [`Constant`]: hands out clones of a stored value, with no side effect
//!
//! Because each adapter is a named type, "nothing happens until invoked"
//! can be checked per adapter.
//!
//! # Examples
//!
//! ```rust
//! use funcy::effect::{Constant, FromFn, Thunk};
//! use std::cell::Cell;
//!
//! let runs = Cell::new(0);
//! let counting = FromFn::new(|| {
//!     runs.set(runs.get() + 1);
//!     runs.get()
//! });
//! assert_eq!(runs.get(), 0);
//! assert_eq!(counting.invoke(), 1);
//! assert_eq!(counting.invoke(), 2);
//!
//! assert_eq!(Constant::new("idle").invoke(), "idle");
//! ```

/// A computation that produces an `A` every time it is invoked.
///
/// Implementations may perform side effects in `invoke`; they must not
/// perform any when constructed.
pub trait Thunk<A> {
    /// Runs the computation.
    fn invoke(&self) -> A;
}

/// A thunk backed by a closure.
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    function: F,
}

impl<F> FromFn<F> {
    /// Wraps `function` without calling it.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<A, F> Thunk<A> for FromFn<F>
where
    F: Fn() -> A,
{
    #[inline]
    fn invoke(&self) -> A {
        (self.function)()
    }
}

/// A thunk that returns a clone of a fixed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constant<A> {
    value: A,
}

impl<A> Constant<A> {
    /// Stores `value`.
    pub const fn new(value: A) -> Self {
        Self { value }
    }
}

impl<A: Clone> Thunk<A> for Constant<A> {
    #[inline]
    fn invoke(&self) -> A {
        self.value.clone()
    }
}
