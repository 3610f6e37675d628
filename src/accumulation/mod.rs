//! Combining independently produced [`Or`](crate::Or) values.
//!
//! Chaining with [`Or::and_then`](crate::Or::and_then) stops at the first failure.
//! The combinators here instead inspect *every* input and either hand back all good
//! values or every failure that occurred, concatenated in argument order.
//!
//! Inputs are accumulating values: `Or<G, One<B>>` (a single failure, produced by
//! [`Or::accumulating`](crate::Or::accumulating)) or `Or<G, Every<B>>` (the result of
//! an earlier combination). Both shapes can be mixed in one call.
//!
//! # Key Components
//!
//! - [`Accumulator`] - The single combination rule everything else is built on
//! - [`Accumulate`] - Fixed-arity combination of tuples of 2 to 22 inputs
//! - [`zip`], [`with_good`] - Free-function forms for tuples
//! - [`combined`], [`validated_by`] - Combination of any number of same-typed inputs
//! - [`when`] - Several checks against one good value
//!
//! # Examples
//!
//! ```
//! use or_rail::accumulation::Accumulate;
//! use or_rail::types::Every;
//! use or_rail::Or;
//!
//! fn parse_name(input: &str) -> Or<String, String> {
//!     let trimmed = input.trim();
//!     if trimmed.is_empty() {
//!         Or::bad(format!("'{}' is not a valid name", input))
//!     } else {
//!         Or::good(trimmed.to_string())
//!     }
//! }
//!
//! fn parse_age(input: &str) -> Or<u32, String> {
//!     match input.trim().parse::<i64>() {
//!         Ok(age) if age >= 0 => Or::good(age as u32),
//!         Ok(age) => Or::bad(format!("'{}' is not a valid age", age)),
//!         Err(_) => Or::bad(format!("'{}' is not a valid integer", input)),
//!     }
//! }
//!
//! let person = (parse_name("").accumulating(), parse_age("").accumulating())
//!     .with_good(|(name, age)| (name, age));
//!
//! assert_eq!(
//!     person,
//!     Or::Bad(Every::of_many(
//!         "'' is not a valid name".to_string(),
//!         ["'' is not a valid integer".to_string()],
//!     ))
//! );
//! ```
pub mod accumulator;
pub mod iter;
pub mod tuple;

pub use self::accumulator::Accumulator;
pub use self::iter::{combined, validated_by, when};
pub use self::tuple::{with_good, zip, Accumulate};
