use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::or::check::Check;
use crate::types::One;

/// A disjoint union of a good value and a bad value.
///
/// `Or<G, B>` is an explicit alternative to panics and early returns: a computation
/// that can fail reports either `Good(G)` or `Bad(B)`, and the caller decides how to
/// continue. Unlike [`Result`], `Or` is designed to be *accumulated*: calling
/// [`accumulating`](Or::accumulating) turns the bad side into a [`One`], and the
/// [`accumulation`](crate::accumulation) module combines many such values into one,
/// keeping every failure instead of only the first.
///
/// # Type Parameters
///
/// * `G` - The good (success) value type
/// * `B` - The bad (failure) value type
///
/// # Variants
///
/// * `Good(G)` - Contains a successful value
/// * `Bad(B)` - Contains a failure value
///
/// # Examples
///
/// ```
/// use or_rail::Or;
///
/// fn parse_age(input: &str) -> Or<u32, String> {
///     match input.trim().parse::<i64>() {
///         Ok(age) if age >= 0 => Or::good(age as u32),
///         Ok(age) => Or::bad(format!("'{}' is not a valid age", age)),
///         Err(_) => Or::bad(format!("'{}' is not a valid integer", input)),
///     }
/// }
///
/// assert_eq!(parse_age("29"), Or::Good(29));
/// assert_eq!(parse_age("-29"), Or::Bad("'-29' is not a valid age".to_string()));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Or<G, B> {
    Good(G),
    Bad(B),
}

impl<G, B> Or<G, B> {
    /// Creates a good value.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let or = Or::<i32, &str>::good(42);
    /// assert!(or.is_good());
    /// ```
    #[inline]
    pub fn good(value: G) -> Self {
        Self::Good(value)
    }

    /// Creates a bad value.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let or = Or::<i32, &str>::bad("missing field");
    /// assert!(or.is_bad());
    /// ```
    #[inline]
    pub fn bad(value: B) -> Self {
        Self::Bad(value)
    }

    /// Returns `true` if this is a `Good`.
    #[must_use]
    #[inline]
    pub fn is_good(&self) -> bool {
        matches!(self, Self::Good(_))
    }

    /// Returns `true` if this is a `Bad`.
    #[must_use]
    #[inline]
    pub fn is_bad(&self) -> bool {
        !self.is_good()
    }

    /// Borrows both arms.
    #[inline]
    pub fn as_ref(&self) -> Or<&G, &B> {
        match self {
            Self::Good(g) => Or::Good(g),
            Self::Bad(b) => Or::Bad(b),
        }
    }

    /// Mutably borrows both arms.
    #[inline]
    pub fn as_mut(&mut self) -> Or<&mut G, &mut B> {
        match self {
            Self::Good(g) => Or::Good(g),
            Self::Bad(b) => Or::Bad(b),
        }
    }

    /// Maps the good value, leaving a bad value untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let or = Or::<i32, &str>::good(21);
    /// assert_eq!(or.map(|x| x * 2), Or::Good(42));
    ///
    /// let or = Or::<i32, &str>::bad("nope");
    /// assert_eq!(or.map(|x| x * 2), Or::Bad("nope"));
    /// ```
    #[inline]
    pub fn map<H, F>(self, f: F) -> Or<H, B>
    where
        F: FnOnce(G) -> H,
    {
        match self {
            Self::Good(g) => Or::Good(f(g)),
            Self::Bad(b) => Or::Bad(b),
        }
    }

    /// Maps the bad value, leaving a good value untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let or = Or::<i32, &str>::bad("nope");
    /// assert_eq!(or.bad_map(str::len), Or::Bad(4));
    /// ```
    #[inline]
    pub fn bad_map<C, F>(self, f: F) -> Or<G, C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Self::Good(g) => Or::Good(g),
            Self::Bad(b) => Or::Bad(f(b)),
        }
    }

    /// Chains a computation that can itself fail.
    ///
    /// `f` is invoked only for a `Good`; a `Bad` is returned as is, so the first
    /// failure in a chain of `and_then` calls wins. Use the
    /// [`accumulation`](crate::accumulation) module to keep every failure of
    /// independent computations.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// fn half(n: i32) -> Or<i32, String> {
    ///     if n % 2 == 0 {
    ///         Or::good(n / 2)
    ///     } else {
    ///         Or::bad(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Or::good(8).and_then(half).and_then(half), Or::Good(2));
    /// assert_eq!(Or::good(6).and_then(half).and_then(half), Or::Bad("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<H, F>(self, f: F) -> Or<H, B>
    where
        F: FnOnce(G) -> Or<H, B>,
    {
        match self {
            Self::Good(g) => f(g),
            Self::Bad(b) => Or::Bad(b),
        }
    }

    /// Collapses both arms into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let or = Or::<i32, &str>::bad("oops");
    /// let text = or.fold(|g| g.to_string(), |b| b.to_uppercase());
    /// assert_eq!(text, "OOPS");
    /// ```
    #[inline]
    pub fn fold<V, GF, BF>(self, good_fn: GF, bad_fn: BF) -> V
    where
        GF: FnOnce(G) -> V,
        BF: FnOnce(B) -> V,
    {
        match self {
            Self::Good(g) => good_fn(g),
            Self::Bad(b) => bad_fn(b),
        }
    }

    /// Maps both arms at once, keeping the arm.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let or = Or::<i32, &str>::bad("oops").transform(|g| g * 2, str::len);
    /// assert_eq!(or, Or::Bad(4));
    /// ```
    #[inline]
    pub fn transform<H, C, GF, BF>(self, good_fn: GF, bad_fn: BF) -> Or<H, C>
    where
        GF: FnOnce(G) -> H,
        BF: FnOnce(B) -> C,
    {
        match self {
            Self::Good(g) => Or::Good(good_fn(g)),
            Self::Bad(b) => Or::Bad(bad_fn(b)),
        }
    }

    /// Validates a good value.
    ///
    /// A `Good` whose value fails `validator` becomes `Bad` with the reported failure.
    /// A passing `Good` and any `Bad` are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::{Check, Or};
    ///
    /// let adult = |age: &u32| Check::from_bool(*age >= 18, || "too young");
    ///
    /// assert_eq!(Or::<u32, &str>::good(30).filter(adult), Or::Good(30));
    /// assert_eq!(Or::<u32, &str>::good(12).filter(adult), Or::Bad("too young"));
    /// ```
    #[inline]
    pub fn filter<F>(self, validator: F) -> Or<G, B>
    where
        F: FnOnce(&G) -> Check<B>,
    {
        match self {
            Self::Good(g) => match validator(&g) {
                Check::Pass => Self::Good(g),
                Check::Fail(b) => Self::Bad(b),
            },
            bad => bad,
        }
    }

    /// Returns `true` if this is a `Good` whose value satisfies `p`.
    #[must_use]
    #[inline]
    pub fn exists<P>(&self, p: P) -> bool
    where
        P: FnOnce(&G) -> bool,
    {
        match self {
            Self::Good(g) => p(g),
            Self::Bad(_) => false,
        }
    }

    /// Returns `true` if this is a `Bad`, or a `Good` whose value satisfies `p`.
    #[must_use]
    #[inline]
    pub fn for_all<P>(&self, p: P) -> bool
    where
        P: FnOnce(&G) -> bool,
    {
        match self {
            Self::Good(g) => p(g),
            Self::Bad(_) => true,
        }
    }

    /// Runs `action` on the good value, if any.
    #[inline]
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&G),
    {
        if let Self::Good(g) = self {
            action(g);
        }
    }

    /// Runs `good_fn` on a good value or `bad_fn` on a bad one.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let mut goods = Vec::new();
    /// let mut bads = Vec::new();
    /// Or::<i32, &str>::bad("late").for_each_arm(|g| goods.push(*g), |b| bads.push(*b));
    ///
    /// assert!(goods.is_empty());
    /// assert_eq!(bads, vec!["late"]);
    /// ```
    #[inline]
    pub fn for_each_arm<GF, BF>(&self, good_fn: GF, bad_fn: BF)
    where
        GF: FnOnce(&G),
        BF: FnOnce(&B),
    {
        match self {
            Self::Good(g) => good_fn(g),
            Self::Bad(b) => bad_fn(b),
        }
    }

    /// Returns `self` if good, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let fallback = Or::<i32, &str>::good(0);
    /// assert_eq!(Or::bad("nope").or(fallback), Or::Good(0));
    /// assert_eq!(Or::good(5).or(fallback), Or::Good(5));
    /// ```
    #[inline]
    pub fn or(self, alternative: Or<G, B>) -> Or<G, B> {
        match self {
            Self::Good(g) => Self::Good(g),
            Self::Bad(_) => alternative,
        }
    }

    /// Returns `self` if good, otherwise the lazily computed alternative.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Or<G, B>
    where
        F: FnOnce() -> Or<G, B>,
    {
        match self {
            Self::Good(g) => Self::Good(g),
            Self::Bad(_) => alternative(),
        }
    }

    /// Turns a bad value into a good one.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let or = Or::<usize, &str>::bad("four");
    /// assert_eq!(or.recover(str::len), Or::Good(4));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Or<G, B>
    where
        F: FnOnce(B) -> G,
    {
        match self {
            Self::Good(g) => Self::Good(g),
            Self::Bad(b) => Self::Good(f(b)),
        }
    }

    /// Replaces a bad value with the outcome of another computation.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// let or = Or::<i32, &str>::bad("12");
    /// let retried: Or<i32, String> = or.recover_with(|b| match b.parse() {
    ///     Ok(n) => Or::good(n),
    ///     Err(_) => Or::bad(format!("still bad: {}", b)),
    /// });
    /// assert_eq!(retried, Or::Good(12));
    /// ```
    #[inline]
    pub fn recover_with<C, F>(self, f: F) -> Or<G, C>
    where
        F: FnOnce(B) -> Or<G, C>,
    {
        match self {
            Self::Good(g) => Or::Good(g),
            Self::Bad(b) => f(b),
        }
    }

    /// Exchanges the roles of the two arms.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    ///
    /// assert_eq!(Or::<i32, &str>::good(1).swap(), Or::<&str, i32>::Bad(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Or<B, G> {
        match self {
            Self::Good(g) => Or::Bad(g),
            Self::Bad(b) => Or::Good(b),
        }
    }

    /// Returns the good value or `default`.
    #[must_use]
    #[inline]
    pub fn get_or(self, default: G) -> G {
        match self {
            Self::Good(g) => g,
            Self::Bad(_) => default,
        }
    }

    /// Returns the good value or computes one from the bad value.
    #[must_use]
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> G
    where
        F: FnOnce(B) -> G,
    {
        match self {
            Self::Good(g) => g,
            Self::Bad(b) => f(b),
        }
    }

    /// Returns the good value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Bad`. Reading the wrong arm is a logic error in the
    /// caller, not a domain failure; use [`into_good`](Or::into_good),
    /// [`get_or`](Or::get_or) or [`fold`](Or::fold) when both arms are expected.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use or_rail::Or;
    ///
    /// let or = Or::<i32, &str>::bad("nope");
    /// or.get();
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get(self) -> G
    where
        B: fmt::Debug,
    {
        match self {
            Self::Good(g) => g,
            Self::Bad(b) => wrong_arm("Or::get()", "Bad", &b),
        }
    }

    /// Returns the bad value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Good`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get_bad(self) -> B
    where
        G: fmt::Debug,
    {
        match self {
            Self::Good(g) => wrong_arm("Or::get_bad()", "Good", &g),
            Self::Bad(b) => b,
        }
    }

    /// Returns the good value, discarding a bad one.
    #[must_use]
    #[inline]
    pub fn into_good(self) -> Option<G> {
        match self {
            Self::Good(g) => Some(g),
            Self::Bad(_) => None,
        }
    }

    /// Returns the bad value, discarding a good one.
    #[must_use]
    #[inline]
    pub fn into_bad(self) -> Option<B> {
        match self {
            Self::Good(_) => None,
            Self::Bad(b) => Some(b),
        }
    }

    /// Wraps a bad value in a [`One`], making this value eligible for accumulation.
    ///
    /// Calling it on an already accumulating `Or` nests the accumulation, as for any
    /// other bad type.
    ///
    /// # Examples
    ///
    /// ```
    /// use or_rail::Or;
    /// use or_rail::types::One;
    ///
    /// let or = Or::<i32, &str>::bad("nope").accumulating();
    /// assert_eq!(or, Or::Bad(One::of("nope")));
    /// ```
    #[inline]
    pub fn accumulating(self) -> Or<G, One<B>> {
        self.bad_map(One::of)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn wrong_arm(call: &str, found: &str, value: &dyn fmt::Debug) -> ! {
    panic!("called `{}` on a `{}` value: {:?}", call, found, value)
}

impl<G: fmt::Display, B: fmt::Display> fmt::Display for Or<G, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good(g) => write!(f, "Good({})", g),
            Self::Bad(b) => write!(f, "Bad({})", b),
        }
    }
}
