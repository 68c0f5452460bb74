//! Function combinators.
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//!
//! # Laws
//!
//! - **Identity**: `m.map(identity) == m` for every functor `m`
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod utils;

pub use utils::{constant, flip, identity};
