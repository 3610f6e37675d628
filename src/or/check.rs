#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of validating a single value: it either passes or fails with a reason.
///
/// Used by [`Or::filter`](crate::Or::filter) and
/// [`accumulation::when`](crate::accumulation::when).
///
/// # Examples
///
/// ```
/// use or_rail::Check;
///
/// let non_empty = |s: &str| Check::from_bool(!s.is_empty(), || "empty");
/// assert!(non_empty("abc").is_pass());
/// assert_eq!(non_empty(""), Check::Fail("empty"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Check<B> {
    Pass,
    Fail(B),
}

impl<B> Check<B> {
    /// `Pass` when `passed` holds, otherwise `Fail` with the lazily built reason.
    #[inline]
    pub fn from_bool<F>(passed: bool, reason: F) -> Self
    where
        F: FnOnce() -> B,
    {
        if passed {
            Self::Pass
        } else {
            Self::Fail(reason())
        }
    }

    #[must_use]
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// Passes only if both pass; otherwise the first failure is kept.
    #[inline]
    pub fn and(self, other: Check<B>) -> Check<B> {
        match self {
            Self::Pass => other,
            fail => fail,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_fail(self) -> Option<B> {
        match self {
            Self::Pass => None,
            Self::Fail(b) => Some(b),
        }
    }
}
