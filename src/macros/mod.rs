//! Shorthand for building bad values and checks from format strings.
//!
//! - [`macro@crate::bad`] - An `Or::Bad` holding a formatted `String`.
//! - [`macro@crate::check`] - A [`Check`](crate::Check) that formats its failure only
//!   when the condition does not hold.
//!
//! # Examples
//!
//! ```
//! use or_rail::{bad, check, Check, Or};
//!
//! fn parse_name(input: &str) -> Or<&str, String> {
//!     let trimmed = input.trim();
//!     if trimmed.is_empty() {
//!         return bad!("'{}' is not a valid name", input);
//!     }
//!     Or::good(trimmed)
//! }
//!
//! assert_eq!(parse_name("  "), Or::Bad("'  ' is not a valid name".to_string()));
//!
//! let limit = 10;
//! assert_eq!(check!(3 < limit, "{} exceeds {}", 3, limit), Check::Pass);
//! ```

/// Creates an `Or::Bad` whose value is a formatted `String`.
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use or_rail::{bad, Or};
///
/// let age = -29;
/// let or: Or<u32, String> = bad!("'{}' is not a valid age", age);
/// assert_eq!(or, Or::Bad("'-29' is not a valid age".to_string()));
/// ```
#[macro_export]
macro_rules! bad {
    ($($arg:tt)*) => {
        $crate::Or::Bad(format!($($arg)*))
    };
}

/// Creates a [`Check`](crate::Check) from a condition and a lazily formatted failure.
///
/// The message is only formatted when the condition is false.
///
/// # Examples
///
/// ```
/// use or_rail::{check, Check};
///
/// let age = 12;
/// let adult = check!(age >= 18, "{} is too young", age);
/// assert_eq!(adult, Check::Fail("12 is too young".to_string()));
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr, $($arg:tt)+) => {
        $crate::Check::from_bool($cond, || format!($($arg)+))
    };
}
