use core::fmt;
use core::future::Future;

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::or_future::{Converter, OrFuture};
use crate::or::Or;
use crate::types::alloc_type::String;
use crate::types::{BoxError, Fault};

/// Starts input computations for async accumulation.
///
/// A factory carries the converter that turns an unexpected [`Fault`] (a panic, or an
/// error returned through [`try_future`](FutureFactory::try_future)) into the domain
/// failure type `B`. Every input it starts uses the same converter, so the failures of
/// a combination are always of one type.
///
/// Inputs are spawned on the runtime given to [`with_handle`](FutureFactory::with_handle),
/// or on the current Tokio runtime.
///
/// # Examples
///
/// ```
/// use or_rail::prelude_async::*;
///
/// #[derive(Debug, PartialEq)]
/// enum Problem {
///     InvalidAge(i64),
///     Crashed(String),
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let factory = FutureFactory::new(|fault: Fault| Problem::Crashed(fault.to_string()));
///
/// let age = factory.future(|| async { Or::<u32, _>::bad(Problem::InvalidAge(-1)) });
/// let crash = factory.future(|| async {
///     if true {
///         panic!("lookup failed");
///     }
///     Or::<u32, Problem>::good(7)
/// });
///
/// let outcome = (age, crash).accumulate().await.unwrap();
/// assert_eq!(
///     outcome.get_bad().into_vec(),
///     vec![Problem::InvalidAge(-1), Problem::Crashed("lookup failed".to_string())]
/// );
/// # }
/// ```
pub struct FutureFactory<B> {
    converter: Converter<B>,
    handle: Option<Handle>,
}

impl<B> FutureFactory<B>
where
    B: Send + 'static,
{
    /// Creates a factory with the given fault converter.
    pub fn new<F>(converter: F) -> Self
    where
        F: Fn(Fault) -> B + Send + Sync + 'static,
    {
        Self { converter: Arc::new(converter), handle: None }
    }

    /// Spawns inputs on `handle` instead of the current runtime.
    #[must_use]
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Applies the configured converter.
    #[inline]
    pub fn convert(&self, fault: Fault) -> B {
        (self.converter)(fault)
    }

    /// Starts an asynchronous input computation.
    ///
    /// `f` runs inside the spawned task, so a panic while building the future is
    /// converted like any other.
    ///
    /// # Panics
    ///
    /// Panics if no runtime was configured and this is called outside a Tokio runtime.
    pub fn future<G, F, Fut>(&self, f: F) -> OrFuture<G, B>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Or<G, B>> + Send + 'static,
        G: Send + 'static,
    {
        self.spawn(async move { f().await })
    }

    /// Starts an asynchronous input computation that may fail unexpectedly.
    ///
    /// An `Err` is wrapped in [`Fault::Errored`] and converted into a failure.
    ///
    /// # Panics
    ///
    /// Panics if no runtime was configured and this is called outside a Tokio runtime.
    pub fn try_future<G, E, F, Fut>(&self, f: F) -> OrFuture<G, B>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Or<G, B>, E>> + Send + 'static,
        E: Into<BoxError>,
        G: Send + 'static,
    {
        let converter = Arc::clone(&self.converter);
        self.spawn(async move {
            match f().await {
                Ok(or) => or,
                Err(error) => {
                    let fault = Fault::errored(error);
                    trace_event!(debug, fault = %fault, "input errored; converting fault to failure");
                    Or::Bad(converter(fault))
                },
            }
        })
    }

    /// Starts a synchronous input computation on the blocking thread pool.
    ///
    /// Cancellation cannot interrupt a blocking computation that has already started.
    ///
    /// # Panics
    ///
    /// Panics if no runtime was configured and this is called outside a Tokio runtime.
    pub fn blocking<G, F>(&self, f: F) -> OrFuture<G, B>
    where
        F: FnOnce() -> Or<G, B> + Send + 'static,
        G: Send + 'static,
    {
        let handle = match &self.handle {
            Some(handle) => handle.spawn_blocking(f),
            None => tokio::task::spawn_blocking(f),
        };
        OrFuture::new(handle, Arc::clone(&self.converter))
    }

    fn spawn<G, Fut>(&self, future: Fut) -> OrFuture<G, B>
    where
        Fut: Future<Output = Or<G, B>> + Send + 'static,
        G: Send + 'static,
    {
        let handle: JoinHandle<Or<G, B>> = match &self.handle {
            Some(handle) => handle.spawn(future),
            None => tokio::spawn(future),
        };
        OrFuture::new(handle, Arc::clone(&self.converter))
    }
}

impl FutureFactory<String> {
    /// A factory whose failures are the fault messages.
    pub fn of_fault_message() -> Self {
        Self::new(|fault: Fault| fault.to_string())
    }
}

impl<B> Clone for FutureFactory<B> {
    fn clone(&self) -> Self {
        Self { converter: Arc::clone(&self.converter), handle: self.handle.clone() }
    }
}

impl<B> fmt::Debug for FutureFactory<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureFactory").field("handle", &self.handle).finish_non_exhaustive()
    }
}
