//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] records the type a constructor is currently applied
//! to (`Inner`) and how to re-apply it to another type (`WithType<B>`), which
//! is all [`Functor`](super::Functor) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use fpkit::control::Maybe;
//! use fpkit::typeclass::TypeConstructor;
//!
//! fn absent<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Maybe<String> = absent(Maybe::Just(42));
//! assert_eq!(none_string, Maybe::Nothing);
//! ```

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Either` is a type constructor over its right (success) type.
#[cfg(feature = "control")]
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_inner<T: TypeConstructor<Inner = i32>>() {}

    #[test]
    fn option_and_vec_inner_types() {
        assert_inner::<Option<i32>>();
        assert_inner::<Vec<i32>>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn maybe_inner_type_is_payload() {
        assert_inner::<Maybe<i32>>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn either_inner_type_is_right() {
        fn retype<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: From<Result<String, &'static str>>,
        {
            Result::<String, &'static str>::Err("kept").into()
        }

        assert_inner::<Either<String, i32>>();

        let retyped: Either<&str, String> = retype(Either::<&str, i32>::Right(1));
        assert_eq!(retyped, Either::Left("kept"));
    }
}
