use crate::accumulation::accumulator::Accumulator;
use crate::or::{Check, Or};
use crate::types::alloc_type::Vec;
use crate::types::{Every, IntoEvery};

/// Collecting accumulating values keeps every failure, in iteration order.
///
/// # Examples
///
/// ```
/// use or_rail::types::{Every, One};
/// use or_rail::Or;
///
/// let inputs: Vec<Or<i32, One<&str>>> = vec![
///     Or::good(1),
///     Or::bad(One::of("err1")),
///     Or::bad(One::of("err2")),
/// ];
/// let collected: Or<Vec<i32>, Every<&str>> = inputs.into_iter().collect();
///
/// assert_eq!(collected, Or::Bad(Every::of_many("err1", ["err2"])));
/// ```
impl<G, E, B, C> FromIterator<Or<G, E>> for Or<C, Every<B>>
where
    E: IntoEvery<Item = B>,
    C: FromIterator<G>,
{
    fn from_iter<I: IntoIterator<Item = Or<G, E>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut acc = Accumulator::new();
        let mut goods = Vec::with_capacity(lower);

        for input in iter {
            if let Some(good) = acc.absorb(input) {
                if acc.is_clean() {
                    goods.push(good);
                }
            }
        }

        match acc.into_failures() {
            Some(failures) => Or::Bad(failures),
            None => Or::Good(goods.into_iter().collect()),
        }
    }
}

/// Combines any number of accumulating values of the same type.
///
/// An empty input is good with an empty vector.
///
/// # Examples
///
/// ```
/// use or_rail::accumulation::combined;
/// use or_rail::Or;
///
/// let all = combined(["1", "2", "3"].map(|s| Or::<i32, &str>::good(s.len() as i32).accumulating()));
/// assert_eq!(all, Or::Good(vec![1, 1, 1]));
/// ```
#[inline]
pub fn combined<G, E, I>(inputs: I) -> Or<Vec<G>, Every<E::Item>>
where
    I: IntoIterator<Item = Or<G, E>>,
    E: IntoEvery,
{
    inputs.into_iter().collect()
}

/// Validates every element with `f`, accumulating all failures.
///
/// # Examples
///
/// ```
/// use or_rail::accumulation::validated_by;
/// use or_rail::types::{Every, One};
/// use or_rail::Or;
///
/// fn parse(s: &str) -> Or<u8, One<String>> {
///     match s.parse() {
///         Ok(n) => Or::good(n),
///         Err(_) => Or::bad(One::of(format!("'{}' is not a number", s))),
///     }
/// }
///
/// assert_eq!(validated_by(["1", "2"], parse), Or::Good(vec![1, 2]));
/// assert_eq!(
///     validated_by(["x", "2", "y"], parse),
///     Or::Bad(Every::of_many("'x' is not a number".to_string(), ["'y' is not a number".to_string()])),
/// );
/// ```
#[inline]
pub fn validated_by<A, G, E, I, F>(inputs: I, f: F) -> Or<Vec<G>, Every<E::Item>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Or<G, E>,
    E: IntoEvery,
{
    inputs.into_iter().map(f).collect()
}

/// Runs every check against a good value, accumulating all failing checks.
///
/// A bad input is returned with its failures unchanged and no check runs.
///
/// # Examples
///
/// ```
/// use or_rail::accumulation::when;
/// use or_rail::types::{Every, One};
/// use or_rail::{Check, Or};
///
/// fn is_round(n: &u32) -> Check<String> {
///     Check::from_bool(n % 10 == 0, || format!("{} was not a round number", n))
/// }
///
/// fn is_small(n: &u32) -> Check<String> {
///     Check::from_bool(*n < 100, || format!("{} was not less than 100", n))
/// }
///
/// let checks = [is_round as fn(&u32) -> Check<String>, is_small];
///
/// assert_eq!(when(Or::<u32, One<String>>::good(50), checks), Or::Good(50));
/// assert_eq!(
///     when(Or::<u32, One<String>>::good(101), checks),
///     Or::Bad(Every::of_many(
///         "101 was not a round number".to_string(),
///         ["101 was not less than 100".to_string()],
///     )),
/// );
/// ```
pub fn when<G, E, I, V>(input: Or<G, E>, checks: I) -> Or<G, Every<E::Item>>
where
    E: IntoEvery,
    I: IntoIterator<Item = V>,
    V: FnOnce(&G) -> Check<E::Item>,
{
    match input {
        Or::Good(value) => {
            let mut acc = Accumulator::new();
            for check in checks {
                if let Check::Fail(failure) = check(&value) {
                    acc.push(failure);
                }
            }
            acc.finish(Some(value))
        },
        Or::Bad(bad) => Or::Bad(bad.into_every()),
    }
}
