//! Deferred effects for single-threaded control loops.
//!
//! # IO
//!
//! The [`IO`] type represents a computation that may perform side effects.
//! Side effects are deferred until `run_unsafe` is called, and every call
//! runs them again, so a pipeline can be built once and triggered from each
//! iteration of a loop.
//!
//! ```rust
//! use funcy::effect::IO;
//!
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! assert_eq!(io.run_unsafe(), 21);
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Async
//!
//! [`Async`] is the callback-driven counterpart: a computation hands its
//! result to a callback instead of returning it. [`Async::deferred`] yields
//! a [`Resolver`] that completes parked callbacks from the outside.
//!
//! ```rust
//! use funcy::effect::Async;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let (ready, resolver) = Async::<&str>::deferred();
//! let greeting = ready.fmap(|name| format!("hello, {name}"));
//!
//! let done = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&done);
//! greeting.run_async(move |text| flag.set(text == "hello, loop"));
//!
//! resolver.resolve("loop").unwrap();
//! assert!(done.get());
//! ```
//!
//! # Fallible pipelines
//!
//! The [`bridge`] module lifts effects into `IO<Either<T, E>>` and chains
//! them with short-circuiting on the first failure.

pub mod bridge;

mod async_callback;
mod error;
mod io;
mod thunk;

pub use async_callback::{Async, Callback, Resolver};
pub use error::ResolveError;
pub use io::IO;
pub use thunk::{Constant, FromFn, Thunk};
