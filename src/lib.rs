//! # fpkit
//!
//! Option and result sum types for Rust code that prefers explicit,
//! composable absence and failure over sentinel values.
//!
//! ## Overview
//!
//! - **Control**: [`Maybe`](control::Maybe) (a value or nothing) and
//!   [`Either`](control::Either) (a right-biased choice between two values),
//!   with lookups, parsers and iterator aggregates
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//! - **Sequence**: Lazy partitioning, choosing and running folds over iterators
//! - **Compose**: `identity`, `constant` and `flip` combinators
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: `Maybe` and `Either` (enables `typeclass` and `compose`)
//! - `sequence`: Iterator helpers (enables `control`)
//! - `compose`: Function combinators
//! - `serde`: `Serialize` / `Deserialize` for `Maybe` and `Either`
//! - `chrono`: `Maybe::try_parse_date_time`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//! use std::collections::HashMap;
//!
//! let settings = HashMap::from([("port", "8080"), ("host", "localhost")]);
//!
//! let port = Maybe::try_key(&"port", &settings)
//!     .and_then(|text| Maybe::try_parse_int(text))
//!     .unwrap_or(80);
//! assert_eq!(port, 8080);
//!
//! let timeout = Maybe::try_key(&"timeout", &settings)
//!     .and_then(|text| Maybe::try_parse_int(text));
//! assert!(timeout.is_nothing());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{PartitionGroup, SequenceExt, is_null_or_empty, partition, scan};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;
