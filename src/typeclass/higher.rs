//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `IO<_>` as type constructors
//! directly. [`TypeConstructor`] uses a GAT to name "the same container
//! applied to another type", which is all `Functor`, `Applicative` and
//! `Monad` need.
//!
//! # Example
//!
//! ```rust
//! use funcy::control::Maybe;
//! use funcy::typeclass::TypeConstructor;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Maybe<i32>>();
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `IO<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Either<i32, String>`, `WithType<bool>` is `Either<bool, String>`:
    /// the failure type is part of the constructor.
    type WithType<B>: TypeConstructor<Inner = B>;
}
