//! Conversions between [`Or`] and the standard library's optional and fallible types.
//!
//! `core::result::Result` plays the role of the conventional two-armed either type:
//! `Ok` is the good side and `Err` the bad side, so converting in either direction
//! keeps the payloads where they are.
//!
//! # Examples
//!
//! ```
//! use or_rail::Or;
//!
//! let parsed: Or<i32, std::num::ParseIntError> = "42".parse::<i32>().into();
//! assert!(parsed.is_good());
//!
//! let missing = Or::from_option(None::<i32>, "no value");
//! assert_eq!(missing, Or::Bad("no value"));
//!
//! let back: Result<i32, &str> = missing.into();
//! assert_eq!(back, Err("no value"));
//! ```

use crate::or::Or;

#[cfg(feature = "std")]
use crate::types::{BoxError, Fault};

impl<G, B> Or<G, B> {
    /// Lifts an optional value: `Some` becomes good, `None` becomes `bad`.
    #[inline]
    pub fn from_option(option: Option<G>, bad: B) -> Self {
        match option {
            Some(value) => Self::Good(value),
            None => Self::Bad(bad),
        }
    }

    /// Lifts an optional value, building the bad value only when it is missing.
    #[inline]
    pub fn from_option_with<F>(option: Option<G>, bad: F) -> Self
    where
        F: FnOnce() -> B,
    {
        match option {
            Some(value) => Self::Good(value),
            None => Self::Bad(bad()),
        }
    }

    /// Lifts a `Result`: `Ok` becomes good, `Err` becomes bad.
    #[inline]
    pub fn from_result(result: Result<G, B>) -> Self {
        match result {
            Ok(value) => Self::Good(value),
            Err(error) => Self::Bad(error),
        }
    }

    /// Converts into a `Result`, so the bad value can be propagated with `?`.
    #[inline]
    pub fn into_result(self) -> Result<G, B> {
        match self {
            Self::Good(value) => Ok(value),
            Self::Bad(error) => Err(error),
        }
    }

    /// Surfaces the bad value as a boxed error.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// fn load() -> Result<u8, Box<dyn std::error::Error + Send + Sync>> {
    ///     let value = Or::<u8, String>::bad("config missing".to_string()).into_fallible()?;
    ///     Ok(value)
    /// }
    ///
    /// assert_eq!(load().unwrap_err().to_string(), "config missing");
    /// ```
    #[cfg(feature = "std")]
    #[inline]
    pub fn into_fallible(self) -> Result<G, BoxError>
    where
        B: Into<BoxError>,
    {
        self.into_result().map_err(Into::into)
    }
}

#[cfg(feature = "std")]
impl<G> Or<G, Fault> {
    /// Runs a computation, reporting a panic as a bad [`Fault`].
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let fine = Or::catching(|| 2 + 2);
    /// assert_eq!(fine.into_good(), Some(4));
    ///
    /// let boom = Or::catching(|| -> i32 { panic!("boom") });
    /// assert_eq!(boom.get_bad().to_string(), "boom");
    /// ```
    pub fn catching<F>(f: F) -> Self
    where
        F: FnOnce() -> G,
    {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
            Ok(value) => Self::Good(value),
            Err(payload) => Self::Bad(Fault::from_panic(payload)),
        }
    }

    /// Runs a fallible computation, reporting an error or a panic as a bad [`Fault`].
    pub fn catching_result<E, F>(f: F) -> Self
    where
        F: FnOnce() -> Result<G, E>,
        E: Into<BoxError>,
    {
        Or::catching(f).and_then(|result| Or::from_result(result).bad_map(Fault::errored))
    }
}

impl<G, B> From<Result<G, B>> for Or<G, B> {
    #[inline]
    fn from(result: Result<G, B>) -> Self {
        Or::from_result(result)
    }
}

impl<G, B> From<Or<G, B>> for Result<G, B> {
    #[inline]
    fn from(or: Or<G, B>) -> Self {
        or.into_result()
    }
}
