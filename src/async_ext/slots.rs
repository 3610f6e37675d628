//! Fixed slots holding the reports of running inputs.
//!
//! Each slot is written at most once, by polling its own input. A combination is
//! ready when every slot is filled; until then the partial results stay private to
//! the slots.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use tokio::task::AbortHandle;

use super::combined::Cancelled;
use super::or_future::OrFuture;
use crate::accumulation::{combined, Accumulate};
use crate::or::Or;
use crate::types::alloc_type::Vec;
use crate::types::{Every, One};

/// Storage for the report of one input.
#[derive(Debug)]
pub struct Slot<G, B> {
    input: OrFuture<G, B>,
    report: Option<Or<G, B>>,
}

impl<G, B> Slot<G, B> {
    pub(crate) fn new(input: OrFuture<G, B>) -> Self {
        Self { input, report: None }
    }

    fn poll_fill(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Cancelled>> {
        if self.report.is_some() {
            return Poll::Ready(Ok(()));
        }
        match Pin::new(&mut self.input).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(report)) => {
                self.report = Some(report);
                Poll::Ready(Ok(()))
            },
            Poll::Ready(Err(cancelled)) => Poll::Ready(Err(cancelled)),
        }
    }

    fn take(&mut self) -> Or<G, One<B>> {
        self.report
            .take()
            .expect("slot settled before its input reported; this is a bug")
            .accumulating()
    }
}

/// A fixed set of slots that settle together.
///
/// Implemented for tuples of 2 to 22 [`Slot`]s sharing a failure type, and for
/// `Vec<Slot<G, B>>`.
pub trait Slots {
    /// Good values of all slots, in argument order.
    type Goods;
    /// Element type of the combined failures.
    type Failure;

    /// Polls every unfilled slot. Ready once all are filled, or as soon as one input
    /// turns out to be cancelled.
    fn poll_fill(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Cancelled>>;

    /// Combines the filled slots. Only valid after `poll_fill` returned `Ready(Ok(()))`.
    fn settle(&mut self) -> Or<Self::Goods, Every<Self::Failure>>;

    fn abort_handles(&self) -> Vec<AbortHandle>;
}

macro_rules! impl_slots {
    ($(($G:ident, $s:ident)),+ $(,)?) => {
        impl<B, $($G),+> Slots for ($(Slot<$G, B>,)+) {
            type Goods = ($($G,)+);
            type Failure = B;

            fn poll_fill(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Cancelled>> {
                let ($($s,)+) = self;
                let mut filled = true;
                $(
                    match $s.poll_fill(cx) {
                        Poll::Ready(Ok(())) => {},
                        Poll::Ready(Err(cancelled)) => return Poll::Ready(Err(cancelled)),
                        Poll::Pending => filled = false,
                    }
                )+
                if filled {
                    Poll::Ready(Ok(()))
                } else {
                    Poll::Pending
                }
            }

            fn settle(&mut self) -> Or<Self::Goods, Every<B>> {
                let ($($s,)+) = self;
                ($($s.take(),)+).accumulate()
            }

            fn abort_handles(&self) -> Vec<AbortHandle> {
                let ($($s,)+) = self;
                let mut handles = Vec::new();
                $(handles.push($s.input.abort_handle());)+
                handles
            }
        }
    };
}

impl_slots!((G1, s1), (G2, s2));
impl_slots!((G1, s1), (G2, s2), (G3, s3));
impl_slots!((G1, s1), (G2, s2), (G3, s3), (G4, s4));
impl_slots!((G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5));
impl_slots!((G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6));
impl_slots!((G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7));
impl_slots!((G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8));
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14), (G15, s15),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14), (G15, s15), (G16, s16),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14), (G15, s15), (G16, s16), (G17, s17),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14), (G15, s15), (G16, s16), (G17, s17),
    (G18, s18),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14), (G15, s15), (G16, s16), (G17, s17),
    (G18, s18), (G19, s19),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14), (G15, s15), (G16, s16), (G17, s17),
    (G18, s18), (G19, s19), (G20, s20),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14), (G15, s15), (G16, s16), (G17, s17),
    (G18, s18), (G19, s19), (G20, s20), (G21, s21),
);
impl_slots!(
    (G1, s1), (G2, s2), (G3, s3), (G4, s4), (G5, s5), (G6, s6), (G7, s7), (G8, s8), (G9, s9),
    (G10, s10), (G11, s11), (G12, s12), (G13, s13), (G14, s14), (G15, s15), (G16, s16), (G17, s17),
    (G18, s18), (G19, s19), (G20, s20), (G21, s21), (G22, s22),
);

impl<G, B> Slots for Vec<Slot<G, B>> {
    type Goods = Vec<G>;
    type Failure = B;

    fn poll_fill(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Cancelled>> {
        let mut filled = true;
        for slot in self.iter_mut() {
            match slot.poll_fill(cx) {
                Poll::Ready(Ok(())) => {},
                Poll::Ready(Err(cancelled)) => return Poll::Ready(Err(cancelled)),
                Poll::Pending => filled = false,
            }
        }
        if filled {
            Poll::Ready(Ok(()))
        } else {
            Poll::Pending
        }
    }

    fn settle(&mut self) -> Or<Vec<G>, Every<B>> {
        combined(self.iter_mut().map(Slot::take))
    }

    fn abort_handles(&self) -> Vec<AbortHandle> {
        self.iter().map(|slot| slot.input.abort_handle()).collect()
    }
}
