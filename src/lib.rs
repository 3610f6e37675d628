//! A Good/Bad result type that accumulates failures.
//!
//! [`Or`] is an explicit alternative to panics and early returns. Its real strength is
//! accumulation: independent validations are combined so that a failed combination
//! reports *every* problem, in the order the validations were declared, instead of
//! only the first one. The [`async_ext`] module applies the same rule to computations
//! that run concurrently and finish at different times.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use or_rail::{bad, Or};
//!
//! fn parse_age(input: &str) -> Or<u32, String> {
//!     match input.trim().parse::<i64>() {
//!         Ok(age) if age >= 0 => Or::good(age as u32),
//!         Ok(age) => bad!("'{}' is not a valid age", age),
//!         Err(_) => bad!("'{}' is not a valid integer", input),
//!     }
//! }
//!
//! let next_year = parse_age("29").map(|age| age + 1);
//! assert_eq!(next_year, Or::Good(30));
//! ```
//!
//! ## Accumulation
//!
//! ```
//! use or_rail::prelude::*;
//!
//! let name = Or::<&str, &str>::bad("'' is not a valid name").accumulating();
//! let age = Or::<u32, &str>::bad("'' is not a valid integer").accumulating();
//!
//! let person = (name, age).with_good(|(name, age)| format!("{} ({})", name, age));
//! assert_eq!(
//!     person,
//!     Or::Bad(Every::of_many("'' is not a valid name", ["'' is not a valid integer"]))
//! );
//! ```
//!
//! ## Collecting
//!
//! ```
//! use or_rail::prelude::*;
//!
//! let inputs = ["1", "x", "3", "y"];
//! let parsed: Or<Vec<i32>, Every<String>> = inputs
//!     .iter()
//!     .map(|s| Or::from_result(s.parse::<i32>()).bad_map(|_| format!("'{}' is not a number", s)))
//!     .map(Or::accumulating)
//!     .collect();
//!
//! assert_eq!(parsed.get_bad().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Combination of independently produced values
pub mod accumulation;
/// Conversions between `Or`, `Option` and `Result`
pub mod convert;
/// Macros for formatted bad values and checks
pub mod macros;
/// The two-armed `Or` type and `Check`
pub mod or;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Non-empty failure collections and faults
pub mod types;

/// Async accumulation (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

pub use or::{Check, Or};
#[cfg(feature = "std")]
pub use types::Fault;
pub use types::{EmptyAccumulation, Every, IntoEvery, One};
