use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicU8, Ordering};
use core::task::{Context, Poll};

use std::sync::Arc;

use futures_core::future::FusedFuture;
use futures_util::task::AtomicWaker;
use pin_project_lite::pin_project;
use tokio::task::AbortHandle;

use super::slots::Slots;
use crate::or::Or;
use crate::types::alloc_type::Vec;
use crate::types::Every;

/// Combiner that returns the good values unchanged.
pub type Identity<T> = fn(T) -> T;

/// Terminal outcome of a cancelled combination.
///
/// Cancellation is not a domain failure: it is reported outside the `Or`, never as
/// an entry of the failure accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("combination was cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Lifecycle of a [`Combined`] future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombineState {
    /// At least one input has not reported yet.
    Pending,
    /// Every input reported and the outcome was handed out.
    Resolved,
    /// The combination was cancelled before resolving.
    Cancelled,
}

const PENDING: u8 = 0;
const RESOLVED: u8 = 1;
const CANCELLED: u8 = 2;

#[derive(Debug)]
struct Control {
    state: AtomicU8,
    inputs: Vec<AbortHandle>,
    waker: AtomicWaker,
}

/// Cancels a [`Combined`] future from anywhere, including while another task awaits it.
///
/// # Examples
///
/// ```
/// use or_rail::prelude_async::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let factory = FutureFactory::of_fault_message();
/// let slow = factory.future(|| async {
///     tokio::time::sleep(std::time::Duration::from_secs(60)).await;
///     Or::<i32, String>::good(1)
/// });
///
/// let combined = combined([slow]);
/// let canceller = combined.canceller();
///
/// assert!(canceller.cancel());
/// assert_eq!(canceller.state(), CombineState::Cancelled);
/// assert_eq!(combined.await, Err(Cancelled));
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Canceller {
    control: Arc<Control>,
}

impl Canceller {
    fn new(inputs: Vec<AbortHandle>) -> Self {
        let control = Control { state: AtomicU8::new(PENDING), inputs, waker: AtomicWaker::new() };
        Self { control: Arc::new(control) }
    }

    /// Cancels the combination and every input that is still running.
    ///
    /// Returns `false` if the combination had already resolved or been cancelled, in
    /// which case nothing changes.
    pub fn cancel(&self) -> bool {
        if !self.transition(CANCELLED) {
            return false;
        }
        for input in &self.control.inputs {
            input.abort();
        }
        // Blocking inputs ignore abort; the awaiting task must not wait for them.
        self.control.waker.wake();
        trace_event!(debug, inputs = self.control.inputs.len(), "combination cancelled");
        true
    }

    #[must_use]
    pub fn state(&self) -> CombineState {
        match self.control.state.load(Ordering::Acquire) {
            PENDING => CombineState::Pending,
            RESOLVED => CombineState::Resolved,
            _ => CombineState::Cancelled,
        }
    }

    fn transition(&self, to: u8) -> bool {
        self.control
            .state
            .compare_exchange(PENDING, to, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

pin_project! {
    /// A combination of independently running inputs.
    ///
    /// Resolves only after every input has reported. The outcome is `Good` with the
    /// combiner applied to all good values (in argument order) or `Bad` with the
    /// failures of every bad input (in argument order). Resolves to `Err(Cancelled)`
    /// if the combination or one of its inputs was cancelled.
    ///
    /// Dropping an unresolved `Combined` cancels it, together with the inputs that are
    /// still running.
    #[must_use = "futures do nothing unless polled"]
    pub struct Combined<S, F> {
        slots: S,
        combiner: Option<F>,
        control: Canceller,
    }

    impl<S, F> PinnedDrop for Combined<S, F> {
        fn drop(this: Pin<&mut Self>) {
            this.control.cancel();
        }
    }
}

impl<S, F> Combined<S, F>
where
    S: Slots,
{
    pub(crate) fn new(slots: S, combiner: F) -> Self {
        let control = Canceller::new(slots.abort_handles());
        Self { slots, combiner: Some(combiner), control }
    }

    /// A cloneable handle that can cancel this combination.
    #[inline]
    pub fn canceller(&self) -> Canceller {
        self.control.clone()
    }

    /// Cancels this combination; see [`Canceller::cancel`].
    #[inline]
    pub fn cancel(&self) -> bool {
        self.control.cancel()
    }

    #[must_use]
    #[inline]
    pub fn state(&self) -> CombineState {
        self.control.state()
    }
}

impl<S, F, H> Future for Combined<S, F>
where
    S: Slots,
    F: FnOnce(S::Goods) -> H,
{
    type Output = Result<Or<H, Every<S::Failure>>, Cancelled>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        this.control.control.waker.register(cx.waker());

        if this.control.state() == CombineState::Cancelled {
            return Poll::Ready(Err(Cancelled));
        }

        match this.slots.poll_fill(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Err(Cancelled)) => {
                this.control.cancel();
                Poll::Ready(Err(Cancelled))
            },
            Poll::Ready(Ok(())) => {
                if !this.control.transition(RESOLVED) {
                    return Poll::Ready(Err(Cancelled));
                }
                let combiner =
                    this.combiner.take().expect("Combined polled after completion; this is a bug");
                let outcome = this.slots.settle().map(combiner);
                trace_event!(
                    trace,
                    inputs = this.control.control.inputs.len(),
                    failures = outcome.as_ref().into_bad().map_or(0, Every::len),
                    "combination resolved"
                );
                Poll::Ready(Ok(outcome))
            },
        }
    }
}

impl<S, F, H> FusedFuture for Combined<S, F>
where
    S: Slots,
    F: FnOnce(S::Goods) -> H,
{
    fn is_terminated(&self) -> bool {
        self.control.state() != CombineState::Pending
    }
}

impl<S, F> fmt::Debug for Combined<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combined").field("state", &self.control.state()).finish_non_exhaustive()
    }
}
