use super::combined::{Combined, Identity};
use super::or_future::OrFuture;
use super::slots::{Slot, Slots};
use crate::types::alloc_type::Vec;

/// Async counterpart of [`Accumulate`](crate::accumulation::Accumulate).
///
/// Implemented for tuples of 2 to 22 [`OrFuture`]s sharing a failure type. The inputs
/// are already running; the returned [`Combined`] waits for all of them and applies the
/// same combination rule as the synchronous engine.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use or_rail::prelude_async::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let factory = FutureFactory::of_fault_message();
///
/// let slow = factory.future(|| async {
///     tokio::time::sleep(Duration::from_millis(20)).await;
///     Or::<i32, _>::bad("E1".to_string())
/// });
/// let fast = factory.future(|| async { Or::<i32, _>::bad("E2".to_string()) });
///
/// let both = (slow, fast).accumulate().await.unwrap();
/// assert_eq!(both, Or::Bad(Every::of_many("E1".to_string(), ["E2".to_string()])));
/// # }
/// ```
pub trait AccumulateFutures: Sized {
    /// Slot storage of the combination.
    type Slots: Slots;

    /// Waits for every input and pairs up their good values.
    fn accumulate(self) -> Combined<Self::Slots, Identity<<Self::Slots as Slots>::Goods>>;

    /// Waits for every input and, if all are good, builds a value from them.
    fn with_good<H, F>(self, f: F) -> Combined<Self::Slots, F>
    where
        F: FnOnce(<Self::Slots as Slots>::Goods) -> H;
}

macro_rules! impl_accumulate_futures {
    ($(($G:ident, $f:ident)),+ $(,)?) => {
        impl<B, $($G),+> AccumulateFutures for ($(OrFuture<$G, B>,)+) {
            type Slots = ($(Slot<$G, B>,)+);

            #[inline]
            fn accumulate(self) -> Combined<Self::Slots, Identity<<Self::Slots as Slots>::Goods>> {
                self.with_good(core::convert::identity as Identity<_>)
            }

            fn with_good<H, F>(self, f: F) -> Combined<Self::Slots, F>
            where
                F: FnOnce(<Self::Slots as Slots>::Goods) -> H,
            {
                let ($($f,)+) = self;
                Combined::new(($(Slot::new($f),)+), f)
            }
        }
    };
}

impl_accumulate_futures!((G1, f1), (G2, f2));
impl_accumulate_futures!((G1, f1), (G2, f2), (G3, f3));
impl_accumulate_futures!((G1, f1), (G2, f2), (G3, f3), (G4, f4));
impl_accumulate_futures!((G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5));
impl_accumulate_futures!((G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6));
impl_accumulate_futures!((G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7));
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14), (G15, f15),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14), (G15, f15), (G16, f16),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14), (G15, f15), (G16, f16), (G17, f17),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14), (G15, f15), (G16, f16), (G17, f17),
    (G18, f18),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14), (G15, f15), (G16, f16), (G17, f17),
    (G18, f18), (G19, f19),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14), (G15, f15), (G16, f16), (G17, f17),
    (G18, f18), (G19, f19), (G20, f20),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14), (G15, f15), (G16, f16), (G17, f17),
    (G18, f18), (G19, f19), (G20, f20), (G21, f21),
);
impl_accumulate_futures!(
    (G1, f1), (G2, f2), (G3, f3), (G4, f4), (G5, f5), (G6, f6), (G7, f7), (G8, f8), (G9, f9),
    (G10, f10), (G11, f11), (G12, f12), (G13, f13), (G14, f14), (G15, f15), (G16, f16), (G17, f17),
    (G18, f18), (G19, f19), (G20, f20), (G21, f21), (G22, f22),
);

/// Waits for two inputs and pairs their good values, keeping the failures of both.
#[inline]
pub fn zip<G, H, B>(
    first: OrFuture<G, B>,
    second: OrFuture<H, B>,
) -> Combined<(Slot<G, B>, Slot<H, B>), Identity<(G, H)>> {
    (first, second).accumulate()
}

/// Waits for any number of same-typed inputs.
///
/// An empty input resolves immediately to a good empty vector.
pub fn combined<G, B, I>(inputs: I) -> Combined<Vec<Slot<G, B>>, Identity<Vec<G>>>
where
    I: IntoIterator<Item = OrFuture<G, B>>,
{
    let slots: Vec<Slot<G, B>> = inputs.into_iter().map(Slot::new).collect();
    Combined::new(slots, core::convert::identity as Identity<Vec<G>>)
}
