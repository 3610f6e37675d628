//! Failure collections used by accumulation.
//!
//! # Examples
//!
//! ```
//! use or_rail::types::{Every, One};
//!
//! let first = One::of("name is empty");
//! let all = first.append(Every::of("age is negative"));
//!
//! assert_eq!(all.len(), 2);
//! assert_eq!(all.to_string(), "Every(name is empty, age is negative)");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod every;
#[cfg(feature = "std")]
pub mod fault;

pub use every::*;
#[cfg(feature = "std")]
pub use fault::{BoxError, Fault};

/// SmallVec-backed storage behind [`Every`].
///
/// Uses inline storage for one element, the common case of a single failing input.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
