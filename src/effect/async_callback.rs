//! Async - deferred computations that complete through a callback.
//!
//! An `Async<A>` stores a computation that is handed a callback and is
//! responsible for eventually calling it with an `A`. Nothing runs until
//! [`Async::run_async`] is called. There is no scheduler behind it: the
//! computation may call the callback immediately, or park it and let a
//! polling loop complete it later (see [`Async::deferred`]).
//!
//! Composition works by wrapping callbacks. `fmap` hands the source
//! computation a callback that transforms the value before forwarding it;
//! `flat_map` hands it a callback that builds the next `Async` and runs it
//! with the caller's callback. Pipelines therefore sequence without
//! blocking.
//!
//! The no-value case is simply `Async<()>`, so a single `flat_map` covers
//! value-to-unit, unit-to-value and everything in between.
//!
//! # Contract
//!
//! A computation should invoke its callback at most once per run. This is
//! not enforced. A callback that is never invoked leaves the pipeline
//! pending forever; there is no cancellation or timeout.
//!
//! # Examples
//!
//! ```rust
//! use funcy::effect::Async;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let received = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&received);
//!
//! Async::pure(20)
//!     .fmap(|x| x + 1)
//!     .flat_map(|x| Async::pure(x * 2))
//!     .run_async(move |value| sink.set(value));
//!
//! assert_eq!(received.get(), 42);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use super::error::ResolveError;
use super::io::IO;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// The single-shot callback an `Async` computation completes with.
pub type Callback<A> = Box<dyn FnOnce(A)>;

/// The stored computation: given a callback, arrange for it to be called.
type Computation<A> = Rc<dyn Fn(Callback<A>)>;

/// Parked callbacks awaiting a value, oldest first.
type CallbackQueue<A> = Rc<RefCell<VecDeque<Callback<A>>>>;

/// A deferred computation that delivers its result to a callback.
///
/// # Type Parameters
///
/// - `A`: The type of the value passed to the callback.
///
/// # Monad Laws
///
/// For every callback `k`:
///
/// 1. **Left Identity**: `Async::pure(a).flat_map(f).run_async(k) == f(a).run_async(k)`
/// 2. **Right Identity**: `m.flat_map(Async::pure).run_async(k) == m.run_async(k)`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Async<A> {
    computation: Computation<A>,
}

assert_not_impl_any!(Async<i32>: Send, Sync);

impl<A> Clone for Async<A> {
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: 'static> Async<A> {
    /// Creates an `Async` from a callback-accepting computation.
    ///
    /// This is the adapter for existing callback-based APIs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::Async;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let reading = Async::new(|callback| callback(512_u16));
    ///
    /// let seen = Rc::new(Cell::new(0));
    /// let sink = Rc::clone(&seen);
    /// reading.run_async(move |value| sink.set(value));
    /// assert_eq!(seen.get(), 512);
    /// ```
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(Callback<A>) + 'static,
    {
        Self {
            computation: Rc::new(computation),
        }
    }

    /// Creates an `Async` that completes immediately with a clone of
    /// `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |callback| callback(value.clone()))
    }

    /// Lifts a synchronous effect: each run triggers `io` and passes its
    /// result straight to the callback.
    pub fn from_io(io: IO<A>) -> Self {
        Self::new(move |callback| callback(io.run_unsafe()))
    }

    /// Creates an `Async` whose callbacks are completed by hand.
    ///
    /// Every run parks its callback in a FIFO queue shared with the
    /// returned [`Resolver`]; [`Resolver::resolve`] completes the oldest one.
    /// This is how a polling loop turns "the radio finished" into a callback
    /// invocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::Async;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let (reading, resolver) = Async::<u16>::deferred();
    /// let seen = Rc::new(Cell::new(0));
    /// let sink = Rc::clone(&seen);
    ///
    /// reading.fmap(|raw| raw * 2).run_async(move |value| sink.set(value));
    /// assert_eq!(seen.get(), 0);
    ///
    /// resolver.resolve(21).unwrap();
    /// assert_eq!(seen.get(), 42);
    /// ```
    pub fn deferred() -> (Self, Resolver<A>) {
        let pending: CallbackQueue<A> = Rc::new(RefCell::new(VecDeque::new()));
        let parked = Rc::clone(&pending);
        let deferred = Self::new(move |callback| parked.borrow_mut().push_back(callback));
        (deferred, Resolver { pending })
    }
}

// =============================================================================
// Execution and Composition
// =============================================================================

impl<A: 'static> Async<A> {
    /// Runs the computation, which will eventually call `callback`.
    ///
    /// May be called repeatedly; each call is a fresh run.
    pub fn run_async<K>(&self, callback: K)
    where
        K: FnOnce(A) + 'static,
    {
        (self.computation)(Box::new(callback));
    }

    /// Transforms the eventual result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::Async;
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// let seen = Rc::new(RefCell::new(String::new()));
    /// let sink = Rc::clone(&seen);
    /// Async::pure(7).fmap(|n| format!("#{n}")).run_async(move |s| *sink.borrow_mut() = s);
    /// assert_eq!(*seen.borrow(), "#7");
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Async<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Async::new(move |callback: Callback<B>| {
            let function = Rc::clone(&function);
            self.run_async(move |value| callback((*function)(value)));
        })
    }

    /// Chains a computation that is itself asynchronous.
    ///
    /// When this `Async` delivers a value, `function` builds the next stage,
    /// which is run with the caller's callback.
    pub fn flat_map<B, F>(self, function: F) -> Async<B>
    where
        F: Fn(A) -> Async<B> + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Async::new(move |callback: Callback<B>| {
            let function = Rc::clone(&function);
            self.run_async(move |value| (*function)(value).run_async(callback));
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> Async<B>
    where
        F: Fn(A) -> Async<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `next` once this `Async` completes, discarding this result.
    pub fn then<B>(self, next: Async<B>) -> Async<B>
    where
        B: 'static,
    {
        Async::new(move |callback: Callback<B>| {
            let next = next.clone();
            self.run_async(move |_| next.run_async(callback));
        })
    }

    /// Runs `self`, then `other`, and combines both results.
    pub fn map2<B, C, F>(self, other: Async<B>, function: F) -> Async<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let function = Rc::new(function);
        Async::new(move |callback: Callback<C>| {
            let function = Rc::clone(&function);
            let other = other.clone();
            self.run_async(move |a| {
                other.run_async(move |b| callback((*function)(a, b)));
            });
        })
    }
}

impl Async<()> {
    /// An `Async` that completes immediately with no value.
    pub fn unit() -> Self {
        Self::pure(())
    }
}

#[cfg(feature = "futures")]
impl<A: 'static> Async<A> {
    /// Runs the computation and returns a future for its result.
    ///
    /// The run starts immediately; the future resolves once the callback
    /// is invoked, or to `Err(Canceled)` if the callback is dropped unused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcy::effect::Async;
    ///
    /// let future = Async::pure(5).fmap(|x| x * 3).run_future();
    /// assert_eq!(futures::executor::block_on(future), Ok(15));
    /// ```
    pub fn run_future(&self) -> futures::channel::oneshot::Receiver<A> {
        let (sender, receiver) = futures::channel::oneshot::channel();
        self.run_async(move |value| {
            // The receiver may already be gone; nothing to report then.
            let _ = sender.send(value);
        });
        receiver
    }
}

impl<A> fmt::Debug for Async<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Async>")
    }
}

impl<A> fmt::Display for Async<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Async>")
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Completes the callbacks parked by an `Async` built with
/// [`Async::deferred`].
pub struct Resolver<A> {
    pending: CallbackQueue<A>,
}

impl<A> Clone for Resolver<A> {
    fn clone(&self) -> Self {
        Self {
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<A> Resolver<A> {
    /// Completes the oldest parked callback with `value`.
    ///
    /// The callback runs after the queue is released, so it may trigger the
    /// same deferred `Async` again.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NothingPending`] if no callback is parked.
    pub fn resolve(&self, value: A) -> Result<(), ResolveError> {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(callback) => {
                callback(value);
                Ok(())
            }
            None => Err(ResolveError::NothingPending),
        }
    }

    /// Number of runs still waiting for a value.
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Returns `true` if at least one run is waiting for a value.
    pub fn is_pending(&self) -> bool {
        self.pending_count() > 0
    }
}

impl<A> fmt::Debug for Resolver<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Resolver")
            .field("pending", &self.pending_count())
            .finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Async<A> {
    type Inner = A;
    type WithType<B> = Async<B>;
}

impl<A: 'static> Functor for Async<A> {
    fn fmap<B, F>(self, function: F) -> Async<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Self::fmap(self, function)
    }
}

impl<A: 'static> Applicative for Async<A> {
    fn pure<B>(value: B) -> Async<B>
    where
        B: Clone + 'static,
    {
        Async::pure(value)
    }

    fn map2<B, C, F>(self, other: Async<B>, function: F) -> Async<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Self::map2(self, other, function)
    }
}

impl<A: 'static> Monad for Async<A> {
    fn flat_map<B, F>(self, function: F) -> Async<B>
    where
        F: Fn(A) -> Async<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }

    fn then<B>(self, next: Async<B>) -> Async<B>
    where
        B: 'static,
    {
        Self::then(self, next)
    }
}
