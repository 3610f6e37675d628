//! The two-armed [`Or`] type and its helpers.
//!
//! # Key Components
//!
//! - [`Or`] - Either a `Good` value or a `Bad` value, never both
//! - [`Check`] - Pass/fail outcome used to validate good values
//! - Iterator adapters over the good value
//!
//! # Examples
//!
//! ```
//! use or_rail::Or;
//!
//! let name: Or<&str, String> = Or::good("Bridget Jones");
//! assert_eq!(name.map(str::len), Or::Good(13));
//!
//! let missing: Or<&str, String> = Or::bad("no name".to_string());
//! assert_eq!(missing.iter().count(), 0);
//! ```
pub mod check;
pub mod core;
pub mod iter;

pub use self::check::*;
pub use self::core::*;
pub use self::iter::*;
