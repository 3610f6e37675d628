use crate::accumulation::accumulator::Accumulator;
use crate::or::Or;
use crate::types::{Every, IntoEvery};

/// Combination of a fixed number of independently produced accumulating values.
///
/// Implemented for tuples of 2 to 22 `Or<Gi, Ei>` where every `Ei` is a [`One`] or an
/// [`Every`] over the same failure type. All inputs are inspected: the result is
/// `Good` with every good value in argument order, or `Bad` with the failures of every
/// bad input concatenated in argument order.
///
/// [`One`]: crate::types::One
///
/// # Examples
///
/// ```
/// use or_rail::accumulation::Accumulate;
/// use or_rail::types::Every;
/// use or_rail::Or;
///
/// let first = Or::<i32, &str>::bad("E1").accumulating();
/// let second = Or::<i32, &str>::good(2).accumulating();
/// let third = Or::<i32, &str>::bad("E3").accumulating();
///
/// let sum = (first, second, third).with_good(|(a, b, c)| a + b + c);
/// assert_eq!(sum, Or::Bad(Every::of_many("E1", ["E3"])));
///
/// let all_good: (Or<i32, Every<&str>>, Or<i32, Every<&str>>, Or<i32, Every<&str>>) =
///     (Or::good(1), Or::good(2), Or::good(3));
/// let sum = all_good.with_good(|(a, b, c)| a + b + c);
/// assert_eq!(sum, Or::Good(6));
/// ```
pub trait Accumulate: Sized {
    /// Tuple of the good values, in argument order.
    type Goods;
    /// Element type of the combined failures.
    type Failure;

    /// Combines the inputs into their good values or all of their failures.
    fn accumulate(self) -> Or<Self::Goods, Every<Self::Failure>>;

    /// Combines the inputs and, if all are good, builds a value from them.
    #[inline]
    fn with_good<H, F>(self, f: F) -> Or<H, Every<Self::Failure>>
    where
        F: FnOnce(Self::Goods) -> H,
    {
        self.accumulate().map(f)
    }
}

macro_rules! impl_accumulate {
    ($(($G:ident, $E:ident, $or:ident, $g:ident)),+ $(,)?) => {
        impl<B, $($G, $E),+> Accumulate for ($(Or<$G, $E>,)+)
        where
            $($E: IntoEvery<Item = B>,)+
        {
            type Goods = ($($G,)+);
            type Failure = B;

            fn accumulate(self) -> Or<Self::Goods, Every<B>> {
                let ($($or,)+) = self;
                let mut acc = Accumulator::new();
                $(let $g = acc.absorb($or);)+
                let goods = match ($($g,)+) {
                    ($(Some($g),)+) => Some(($($g,)+)),
                    _ => None,
                };
                acc.finish(goods)
            }
        }
    };
}

impl_accumulate!((G1, E1, or1, g1), (G2, E2, or2, g2));
impl_accumulate!((G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3));
impl_accumulate!((G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4));
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14), (G15, E15, or15, g15),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14), (G15, E15, or15, g15), (G16, E16, or16, g16),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14), (G15, E15, or15, g15), (G16, E16, or16, g16), (G17, E17, or17, g17),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14), (G15, E15, or15, g15), (G16, E16, or16, g16), (G17, E17, or17, g17),
    (G18, E18, or18, g18),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14), (G15, E15, or15, g15), (G16, E16, or16, g16), (G17, E17, or17, g17),
    (G18, E18, or18, g18), (G19, E19, or19, g19),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14), (G15, E15, or15, g15), (G16, E16, or16, g16), (G17, E17, or17, g17),
    (G18, E18, or18, g18), (G19, E19, or19, g19), (G20, E20, or20, g20),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14), (G15, E15, or15, g15), (G16, E16, or16, g16), (G17, E17, or17, g17),
    (G18, E18, or18, g18), (G19, E19, or19, g19), (G20, E20, or20, g20), (G21, E21, or21, g21),
);
impl_accumulate!(
    (G1, E1, or1, g1), (G2, E2, or2, g2), (G3, E3, or3, g3), (G4, E4, or4, g4), (G5, E5, or5, g5),
    (G6, E6, or6, g6), (G7, E7, or7, g7), (G8, E8, or8, g8), (G9, E9, or9, g9),
    (G10, E10, or10, g10), (G11, E11, or11, g11), (G12, E12, or12, g12), (G13, E13, or13, g13),
    (G14, E14, or14, g14), (G15, E15, or15, g15), (G16, E16, or16, g16), (G17, E17, or17, g17),
    (G18, E18, or18, g18), (G19, E19, or19, g19), (G20, E20, or20, g20), (G21, E21, or21, g21),
    (G22, E22, or22, g22),
);

/// Pairs two accumulating values, keeping the failures of both.
///
/// # Examples
///
/// ```
/// use or_rail::accumulation::zip;
/// use or_rail::types::Every;
/// use or_rail::Or;
///
/// let name = Or::<&str, &str>::good("Bridget Jones").accumulating();
/// let age = Or::<u32, &str>::bad("'-29' is not a valid age").accumulating();
///
/// assert_eq!(zip(name, age), Or::Bad(Every::of("'-29' is not a valid age")));
/// ```
#[inline]
pub fn zip<G, E, H, F>(first: Or<G, E>, second: Or<H, F>) -> Or<(G, H), Every<E::Item>>
where
    E: IntoEvery,
    F: IntoEvery<Item = E::Item>,
{
    (first, second).accumulate()
}

/// Combines a tuple of accumulating values and builds a value from their good values.
///
/// Free-function form of [`Accumulate::with_good`].
#[inline]
pub fn with_good<T, H, F>(inputs: T, f: F) -> Or<H, Every<T::Failure>>
where
    T: Accumulate,
    F: FnOnce(T::Goods) -> H,
{
    inputs.with_good(f)
}

impl<G, E> Or<G, E>
where
    E: IntoEvery,
{
    /// Method form of [`zip`].
    #[inline]
    pub fn zip<H, F>(self, other: Or<H, F>) -> Or<(G, H), Every<E::Item>>
    where
        F: IntoEvery<Item = E::Item>,
    {
        zip(self, other)
    }
}
