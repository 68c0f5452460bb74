//! Type class traits shared by the sum types.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GAT
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent ones
//! - [`Monad`]: Sequencing dependent computations
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element, plus null-tolerant combining
//!
//! [`Maybe`](crate::control::Maybe) and [`Either`](crate::control::Either)
//! implement `Functor`, `Applicative` and `Monad` with the same semantics as
//! their inherent `map` / `flat_map`, so generic code and direct calls agree.
//! `Option` gets the same instances for interoperability.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{Monoid, Semigroup};
//!
//! let sentence = String::combine_all(["fp", "kit"].map(String::from));
//! assert_eq!(sentence, "fpkit");
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
