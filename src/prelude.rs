//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use or_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`bad!`], [`check!`]
//! - **Types**: [`Or`], [`Check`], [`One`], [`Every`]
//! - **Traits**: [`Accumulate`], [`IntoEvery`]
//! - **Functions**: [`combined`], [`validated_by`], [`when`]
//!
//! # Examples
//!
//! ```
//! use or_rail::prelude::*;
//!
//! fn positive(n: i32) -> Or<i32, One<String>> {
//!     if n > 0 {
//!         Or::good(n)
//!     } else {
//!         Or::bad(One::of(format!("{} is not positive", n)))
//!     }
//! }
//!
//! let sum = (positive(1), positive(-2), positive(-3)).with_good(|(a, b, c)| a + b + c);
//! assert_eq!(sum.get_bad().len(), 2);
//! ```

pub use crate::{bad, check};

pub use crate::accumulation::{combined, validated_by, when, Accumulate};
pub use crate::or::{Check, Or};
pub use crate::types::{Every, IntoEvery, One};

#[cfg(feature = "std")]
pub use crate::types::Fault;
