//! Async accumulation.
//!
//! Each input is a deferred computation spawned on a Tokio runtime by a
//! [`FutureFactory`]. Inputs run concurrently and complete in any order; a
//! [`Combined`] future waits for *all* of them before deciding the outcome, and orders
//! good values and failures by argument position, never by completion time. A fast
//! failing input therefore never hides the failure of a slower one.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! or-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use or_rail::prelude_async::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let factory = FutureFactory::of_fault_message();
//!
//! let name = factory.future(|| async { Or::<_, String>::good("Bridget Jones") });
//! let age = factory.future(|| async { Or::<u32, _>::bad("'-29' is not a valid age".to_string()) });
//!
//! let person = (name, age).with_good(|(name, age)| (name, age)).await.unwrap();
//! assert_eq!(person, Or::Bad(Every::of("'-29' is not a valid age".to_string())));
//! # }
//! ```

/// Emits a `tracing` event when the `tracing` feature is enabled; compiles to nothing
/// otherwise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

mod accumulate;
mod combined;
mod factory;
mod or_future;
mod slots;

pub use accumulate::{combined, zip, AccumulateFutures};
pub use combined::{Cancelled, Canceller, CombineState, Combined, Identity};
pub use factory::FutureFactory;
pub use or_future::OrFuture;
pub use slots::{Slot, Slots};
