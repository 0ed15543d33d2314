//! IO - deferred, re-runnable side effects.
//!
//! The `IO` type describes a computation that may perform side effects.
//! Nothing happens when an `IO` is built or composed; the effect runs only
//! when [`IO::run_unsafe`] is called, and it runs again on every call.
//!
//! # Design Philosophy
//!
//! IO "describes" side effects but doesn't "execute" them. A firmware
//! control loop builds its pipelines once and triggers them from the loop
//! body, so an `IO` is re-runnable: it stores a shared [`Thunk`] rather than
//! a one-shot closure, and cloning an `IO` clones the handle, not a result.
//!
//! The no-value case is simply `IO<()>`.
//!
//! # Examples
//!
//! ```rust
//! use funcy::effect::IO;
//!
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use funcy::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let counter_clone = Rc::clone(&counter);
//!
//! let io = IO::new(move || {
//!     counter_clone.set(counter_clone.get() + 1);
//!     counter_clone.get()
//! });
//!
//! // Not executed yet
//! assert_eq!(counter.get(), 0);
//!
//! // Every trigger is a fresh execution
//! assert_eq!(io.run_unsafe(), 1);
//! assert_eq!(io.run_unsafe(), 2);
//! ```

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use static_assertions::assert_not_impl_any;

use super::thunk::{Constant, FromFn, Thunk};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A monad representing deferred side effects.
///
/// `IO<A>` wraps a computation that produces a value of type `A` and may
/// perform side effects. The computation is not executed until `run_unsafe`
/// is called. Panics raised by the computation propagate to the caller of
/// `run_unsafe`; `IO` performs no error translation.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    thunk: Rc<dyn Thunk<A>>,
}

assert_not_impl_any!(IO<i32>: Send, Sync);

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            thunk: Rc::clone(&self.thunk),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run_unsafe` is called, and
    /// is executed once per call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::IO;
    ///
    /// let io = IO::new(|| 10 + 20);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::from_thunk(FromFn::new(action))
    }

    /// Creates an IO action from any [`Thunk`] implementation.
    pub fn from_thunk<T>(thunk: T) -> Self
    where
        T: Thunk<A> + 'static,
    {
        Self {
            thunk: Rc::new(thunk),
        }
    }

    /// Wraps a pure value in an IO action.
    ///
    /// Each trigger returns a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_thunk(Constant::new(value))
    }
}

// =============================================================================
// Execution and Composition
// =============================================================================

impl<A: 'static> IO<A> {
    /// Executes the IO action and returns the result.
    ///
    /// The name is a reminder that this breaks referential transparency; it
    /// should be called at the program's edge, e.g. the control loop body.
    pub fn run_unsafe(&self) -> A {
        self.thunk.invoke()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::IO;
    ///
    /// let io = IO::pure(21).fmap(|x| x * 2);
    /// assert_eq!(io.run_unsafe(), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// The new action runs `self`, applies `function`, then runs the IO
    /// it returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::IO;
    ///
    /// let io = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed, strictly before `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::IO;
    ///
    /// let io = IO::pure(10).then(IO::pure(20));
    /// assert_eq!(io.run_unsafe(), 20);
    /// ```
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        IO::new(move || {
            let _ = self.run_unsafe();
            next.run_unsafe()
        })
    }

    /// Sequences a side-effect-only action after this one, keeping this
    /// action's result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::IO;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let log = Rc::new(RefCell::new(Vec::new()));
    /// let log_clone = Rc::clone(&log);
    ///
    /// let io = IO::pure(7).then_keep(IO::new(move || log_clone.borrow_mut().push("logged")));
    /// assert_eq!(io.run_unsafe(), 7);
    /// assert_eq!(*log.borrow(), vec!["logged"]);
    /// ```
    pub fn then_keep(self, next: IO<()>) -> Self {
        Self::new(move || {
            let result = self.run_unsafe();
            next.run_unsafe();
            result
        })
    }

    /// Combines two IO actions using a function. `self` runs first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::IO;
    ///
    /// let io = IO::pure(10).map2(IO::pure(20), |a, b| a + b);
    /// assert_eq!(io.run_unsafe(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let a = self.run_unsafe();
            let b = other.run_unsafe();
            function(a, b)
        })
    }

    /// Combines two IO actions into a tuple.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl IO<()> {
    /// An IO action that does nothing.
    pub fn unit() -> Self {
        Self::pure(())
    }

    /// Creates an IO action that blocks the current thread for `duration`.
    ///
    /// This is the cooperative wait of a single-threaded control loop; the
    /// delay does not occur until `run_unsafe` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::IO;
    /// use std::time::Duration;
    ///
    /// let io = IO::delay(Duration::from_millis(1));
    /// io.run_unsafe();
    /// ```
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || std::thread::sleep(duration))
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<IO>")
    }
}

impl<A> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<IO>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A: 'static> Functor for IO<A> {
    fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Self::fmap(self, function)
    }
}

impl<A: 'static> Applicative for IO<A> {
    fn pure<B>(value: B) -> IO<B>
    where
        B: Clone + 'static,
    {
        IO::pure(value)
    }

    fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Self::map2(self, other, function)
    }
}

impl<A: 'static> Monad for IO<A> {
    fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }

    fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        Self::then(self, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_io_pure_and_run() {
        let io = IO::pure(42);
        assert_eq!(io.run_unsafe(), 42);
    }

    #[test]
    fn test_io_new_and_run() {
        let io = IO::new(|| 10 + 20);
        assert_eq!(io.run_unsafe(), 30);
    }

    #[test]
    fn test_io_product() {
        let io = IO::pure(10).product(IO::pure(20));
        assert_eq!(io.run_unsafe(), (10, 20));
    }

    #[test]
    fn test_io_clone_shares_the_effect_not_the_result() {
        let runs = Rc::new(Cell::new(0));
        let runs_clone = Rc::clone(&runs);
        let io = IO::new(move || {
            runs_clone.set(runs_clone.get() + 1);
            runs_clone.get()
        });
        let copy = io.clone();

        assert_eq!(io.run_unsafe(), 1);
        assert_eq!(copy.run_unsafe(), 2);
    }

    #[test]
    fn test_io_then_keep_runs_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first_log = Rc::clone(&log);
        let second_log = Rc::clone(&log);

        let io = IO::new(move || {
            first_log.borrow_mut().push("first");
            1
        })
        .then_keep(IO::new(move || second_log.borrow_mut().push("second")));

        assert_eq!(io.run_unsafe(), 1);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_io_display() {
        assert_eq!(IO::unit().to_string(), "<IO>");
    }
}
