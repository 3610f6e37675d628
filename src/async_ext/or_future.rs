//! Handle to one spawned input computation.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use std::sync::Arc;

use tokio::task::{AbortHandle, JoinHandle};

use super::combined::Cancelled;
use crate::or::Or;
use crate::types::Fault;

/// Converts an unexpected fault into the domain failure type.
pub(crate) type Converter<B> = Arc<dyn Fn(Fault) -> B + Send + Sync + 'static>;

/// A running input computation that will report an [`Or`].
///
/// Created by [`FutureFactory`](super::FutureFactory). The computation starts as soon
/// as it is created; awaiting the `OrFuture` waits for its report. A panic inside the
/// computation is handed to the factory's converter and reported as `Bad`, so the
/// output is always a domain value unless the computation was cancelled.
///
/// Dropping an unfinished `OrFuture` cancels its computation.
///
/// # Cancel Safety
///
/// Cancellation is cooperative: an aborted computation stops at its next `.await`
/// point. A computation that already completed is unaffected.
#[must_use = "dropping an OrFuture cancels its computation"]
pub struct OrFuture<G, B> {
    handle: JoinHandle<Or<G, B>>,
    converter: Converter<B>,
}

impl<G, B> OrFuture<G, B> {
    pub(crate) fn new(handle: JoinHandle<Or<G, B>>, converter: Converter<B>) -> Self {
        Self { handle, converter }
    }

    /// Requests cancellation of the computation.
    #[inline]
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Returns `true` once the computation has reported or was cancelled.
    #[must_use]
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// A handle that cancels this computation without owning it.
    #[inline]
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.abort_handle()
    }
}

impl<G, B> Future for OrFuture<G, B> {
    type Output = Result<Or<G, B>, Cancelled>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        match Pin::new(&mut this.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(or)) => Poll::Ready(Ok(or)),
            Poll::Ready(Err(error)) if error.is_cancelled() => Poll::Ready(Err(Cancelled)),
            Poll::Ready(Err(error)) => {
                let fault = Fault::from_panic(error.into_panic());
                trace_event!(debug, fault = %fault, "input panicked; converting fault to failure");
                Poll::Ready(Ok(Or::Bad((this.converter)(fault))))
            },
        }
    }
}

impl<G, B> Drop for OrFuture<G, B> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl<G, B> fmt::Debug for OrFuture<G, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrFuture")
            .field("finished", &self.handle.is_finished())
            .finish_non_exhaustive()
    }
}
