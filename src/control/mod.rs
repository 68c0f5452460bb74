//! Sum types for absence and alternatives.
//!
//! This module provides the two algebraic sum types of the crate:
//!
//! - [`Maybe`]: a value that is either present (`Just`) or absent (`Nothing`)
//! - [`Either`]: a value that is either a `Left` or a `Right`
//!
//! Both are plain enums. They are built at a boundary, transformed with
//! `map` / `flat_map`, and eliminated with an exhaustive `fold`.
//!
//! The module also hosts the aggregate functions that work on iterators of
//! these types: [`choose`] for `Maybe`, and [`lefts`], [`rights`],
//! [`partition_eithers`], [`traverse`] and [`sequence`] for `Either`.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use fpkit::control::{Either, Maybe};
//!
//! let limits = HashMap::from([("cpu", "4"), ("memory", "lots")]);
//!
//! let lookup = |name: &'static str| -> Either<String, i32> {
//!     Maybe::try_key(&name, &limits)
//!         .flat_map(|raw| Maybe::try_parse_int(raw))
//!         .fold(Either::Right, || Either::Left(format!("bad limit: {name}")))
//! };
//!
//! assert_eq!(lookup("cpu"), Either::Right(4));
//! assert_eq!(lookup("memory"), Either::Left("bad limit: memory".to_string()));
//! ```

mod either;
mod maybe;

pub use either::{Either, Traverse, lefts, partition_eithers, rights, sequence, traverse};
pub use maybe::{KeyLookup, Maybe, NothingError, choose};
