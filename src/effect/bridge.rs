//! Helpers that move values between the effect containers.
//!
//! Pipelines of fallible side effects are written as `IO<Either<T, E>>`
//! (or `Async<Either<T, E>>`). The functions here lift plain effects into
//! that shape and chain such effects with short-circuiting on failure.
//!
//! # Examples
//!
//! ```rust
//! use funcy::control::Either;
//! use funcy::effect::{IO, bridge};
//!
//! let read = bridge::lift_io_to_either(
//!     IO::pure(4_u16),
//!     |raw| format!("reading {raw} is below threshold"),
//!     |raw| *raw < 10,
//! );
//! let volts = bridge::map_io_either(read, |raw| f64::from(raw) * 3.3 / 1023.0);
//!
//! assert_eq!(
//!     volts.run_unsafe(),
//!     Either::left("reading 4 is below threshold".to_string())
//! );
//! ```

use std::rc::Rc;

use super::async_callback::{Async, Callback};
use super::io::IO;
use crate::control::Either;

// =============================================================================
// Lifting into IO
// =============================================================================

/// Wraps a value in an `IO` that returns a clone of it on every trigger.
pub fn pure<T>(value: T) -> IO<T>
where
    T: Clone + 'static,
{
    IO::pure(value)
}

/// An `IO` that does nothing.
#[must_use]
pub fn unit() -> IO<()> {
    IO::unit()
}

/// Lifts an effect into the success side.
pub fn lift_io<T, E>(io: IO<T>) -> IO<Either<T, E>>
where
    T: 'static,
    E: 'static,
{
    io.fmap(Either::right)
}

/// Lifts an effect into the failure side.
pub fn lift_io_left<T, E>(io: IO<E>) -> IO<Either<T, E>>
where
    T: 'static,
    E: 'static,
{
    io.fmap(Either::left)
}

/// Lifts a side-effect-only action into the success side, producing
/// `T::default()` once the action has run.
///
/// # Examples
///
/// ```rust
/// use funcy::control::Either;
/// use funcy::effect::{IO, bridge};
///
/// let lifted = bridge::lift_unit_io::<u8, String>(IO::unit());
/// assert_eq!(lifted.run_unsafe(), Either::right(0));
/// ```
pub fn lift_unit_io<T, E>(io: IO<()>) -> IO<Either<T, E>>
where
    T: Default + 'static,
    E: 'static,
{
    io.fmap(|()| Either::right(T::default()))
}

/// Classifies the result of an effect.
///
/// When triggered, runs `io` once. If `is_error` holds for the value the
/// result is `Left(error_fn(&value))`, otherwise `Right(value)`.
pub fn lift_io_to_either<T, E, F, P>(io: IO<T>, error_fn: F, is_error: P) -> IO<Either<T, E>>
where
    T: 'static,
    E: 'static,
    F: Fn(&T) -> E + 'static,
    P: Fn(&T) -> bool + 'static,
{
    io.fmap(move |value| {
        if is_error(&value) {
            Either::left(error_fn(&value))
        } else {
            Either::right(value)
        }
    })
}

// =============================================================================
// Chaining IO<Either>
// =============================================================================

/// Chains a fallible effect after another.
///
/// When triggered, runs `io_either`. On `Right(value)` it runs
/// `function(value)` and returns that result; on `Left(error)` it returns
/// `Left(error)` and `function` is never called.
///
/// # Examples
///
/// ```rust
/// use funcy::control::Either;
/// use funcy::effect::{IO, bridge};
///
/// let first: IO<Either<i32, String>> = IO::pure(Either::left("offline".to_string()));
/// let chained = bridge::flat_map_io_either(first, |n| IO::pure(Either::right(n + 1)));
/// assert_eq!(chained.run_unsafe(), Either::left("offline".to_string()));
/// ```
pub fn flat_map_io_either<T, E, U, F>(io_either: IO<Either<T, E>>, function: F) -> IO<Either<U, E>>
where
    T: 'static,
    E: 'static,
    U: 'static,
    F: Fn(T) -> IO<Either<U, E>> + 'static,
{
    IO::new(move || match io_either.run_unsafe() {
        Either::Right(value) => function(value).run_unsafe(),
        Either::Left(error) => Either::left(error),
    })
}

/// Maps the success value of a fallible effect.
pub fn map_io_either<T, E, U, F>(io_either: IO<Either<T, E>>, function: F) -> IO<Either<U, E>>
where
    T: 'static,
    E: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    io_either.fmap(move |either| either.fmap(&function))
}

/// Maps the failure value of a fallible effect.
pub fn map_left_io_either<T, E, G, F>(io_either: IO<Either<T, E>>, function: F) -> IO<Either<T, G>>
where
    T: 'static,
    E: 'static,
    G: 'static,
    F: Fn(E) -> G + 'static,
{
    io_either.fmap(move |either| either.map_left(&function))
}

// =============================================================================
// Async<Either>
// =============================================================================

/// Lifts an asynchronous computation into the success side.
pub fn lift_async<T, E>(computation: Async<T>) -> Async<Either<T, E>>
where
    T: 'static,
    E: 'static,
{
    computation.fmap(Either::right)
}

/// Chains a fallible asynchronous stage, short-circuiting on `Left`.
///
/// On `Left(error)` the caller's callback receives `Left(error)` directly
/// and `function` is never called.
pub fn flat_map_async_either<T, E, U, F>(
    async_either: Async<Either<T, E>>,
    function: F,
) -> Async<Either<U, E>>
where
    T: 'static,
    E: 'static,
    U: 'static,
    F: Fn(T) -> Async<Either<U, E>> + 'static,
{
    let function = Rc::new(function);
    Async::new(move |callback: Callback<Either<U, E>>| {
        let function = Rc::clone(&function);
        async_either.run_async(move |either| match either {
            Either::Right(value) => (*function)(value).run_async(callback),
            Either::Left(error) => callback(Either::left(error)),
        });
    })
}

/// Maps the success value of a fallible asynchronous computation.
pub fn map_async_either<T, E, U, F>(
    async_either: Async<Either<T, E>>,
    function: F,
) -> Async<Either<U, E>>
where
    T: 'static,
    E: 'static,
    U: 'static,
    F: Fn(T) -> U + 'static,
{
    async_either.fmap(move |either| either.fmap(&function))
}

/// Maps the failure value of a fallible asynchronous computation.
pub fn map_left_async_either<T, E, G, F>(
    async_either: Async<Either<T, E>>,
    function: F,
) -> Async<Either<T, G>>
where
    T: 'static,
    E: 'static,
    G: 'static,
    F: Fn(E) -> G + 'static,
{
    async_either.fmap(move |either| either.map_left(&function))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    #[case(5, Either::right(5))]
    #[case(0, Either::left(0))]
    #[case(-3, Either::left(-3))]
    fn lift_io_to_either_classifies_by_predicate(
        #[case] input: i32,
        #[case] expected: Either<i32, i32>,
    ) {
        let lifted = lift_io_to_either(IO::pure(input), |value| *value, |value| *value <= 0);
        assert_eq!(lifted.run_unsafe(), expected);
    }

    #[rstest]
    fn lift_io_left_always_fails() {
        let lifted: IO<Either<(), &str>> = lift_io_left(IO::pure("boom"));
        assert_eq!(lifted.run_unsafe(), Either::left("boom"));
    }

    #[rstest]
    fn map_io_either_runs_the_source_once_per_trigger() {
        let runs = Rc::new(Cell::new(0));
        let runs_clone = Rc::clone(&runs);
        let source: IO<Either<i32, String>> = IO::new(move || {
            runs_clone.set(runs_clone.get() + 1);
            Either::right(runs_clone.get())
        });

        let mapped = map_io_either(source, |n| n * 100);
        assert_eq!(mapped.run_unsafe(), Either::right(100));
        assert_eq!(mapped.run_unsafe(), Either::right(200));
        assert_eq!(runs.get(), 2);
    }

    #[rstest]
    fn map_left_io_either_leaves_success_alone() {
        let source: IO<Either<i32, i32>> = IO::pure(Either::right(1));
        let mapped = map_left_io_either(source, |code| format!("code {code}"));
        assert_eq!(mapped.run_unsafe(), Either::right(1));
    }

    #[rstest]
    fn flat_map_async_either_short_circuits() {
        let called = Rc::new(Cell::new(false));
        let called_clone = Rc::clone(&called);
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);

        let failing: Async<Either<i32, &str>> = Async::pure(Either::left("no signal"));
        flat_map_async_either(failing, move |n: i32| {
            called_clone.set(true);
            Async::pure(Either::right(n))
        })
        .run_async(move |result| *sink.borrow_mut() = Some(result));

        assert!(!called.get());
        assert_eq!(*seen.borrow(), Some(Either::left("no signal")));
    }
}
