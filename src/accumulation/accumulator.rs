use crate::or::Or;
use crate::types::{Every, IntoEvery};

/// Running state of one accumulation.
///
/// Inputs are absorbed one at a time, in declaration order. A good input hands its
/// value back to the caller; a bad input appends its failures to the running
/// [`Every`]. Every combinator in this crate, synchronous and asynchronous, is built on
/// this one rule, which keeps the ordering of failures identical across all of them.
///
/// # Examples
///
/// ```
/// use or_rail::accumulation::Accumulator;
/// use or_rail::Or;
///
/// let mut acc = Accumulator::new();
/// assert_eq!(acc.absorb(Or::<i32, _>::bad("first").accumulating()), None);
/// assert_eq!(acc.absorb(Or::<i32, &str>::good(2).accumulating()), Some(2));
/// assert_eq!(acc.absorb(Or::<i32, _>::bad("third").accumulating()), None);
///
/// let failures = acc.into_failures().unwrap();
/// assert_eq!(failures.as_slice(), &["first", "third"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator<B> {
    failures: Option<Every<B>>,
}

impl<B> Default for Accumulator<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Accumulator<B> {
    /// Creates an accumulator that has seen no failure yet.
    #[inline]
    pub fn new() -> Self {
        Self { failures: None }
    }

    /// Absorbs one input, returning its good value if it has one.
    #[inline]
    pub fn absorb<G, E>(&mut self, input: Or<G, E>) -> Option<G>
    where
        E: IntoEvery<Item = B>,
    {
        match input {
            Or::Good(value) => Some(value),
            Or::Bad(bad) => {
                self.push_all(bad);
                None
            },
        }
    }

    /// Appends a single failure.
    #[inline]
    pub fn push(&mut self, failure: B) {
        self.push_all(Every::of(failure));
    }

    fn push_all<E>(&mut self, bad: E)
    where
        E: IntoEvery<Item = B>,
    {
        self.failures = Some(match self.failures.take() {
            Some(failures) => failures.append(bad),
            None => bad.into_every(),
        });
    }

    /// Returns `true` while no failure has been absorbed.
    #[must_use]
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_none()
    }

    /// Number of failures absorbed so far.
    #[must_use]
    #[inline]
    pub fn failure_count(&self) -> usize {
        self.failures.as_ref().map_or(0, Every::len)
    }

    #[inline]
    pub fn failures(&self) -> Option<&Every<B>> {
        self.failures.as_ref()
    }

    #[inline]
    pub fn into_failures(self) -> Option<Every<B>> {
        self.failures
    }

    /// Settles the accumulation.
    ///
    /// `goods` must be `Some` whenever the accumulator is clean: every input either
    /// returned its good value from [`absorb`](Accumulator::absorb) or contributed a
    /// failure.
    pub(crate) fn finish<T>(self, goods: Option<T>) -> Or<T, Every<B>> {
        match (self.failures, goods) {
            (Some(failures), _) => Or::Bad(failures),
            (None, Some(goods)) => Or::Good(goods),
            (None, None) => unreachable!("an input without a good value left no failure"),
        }
    }
}
