//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the async
//! accumulation items. The async [`combined`](crate::async_ext::combined) replaces the
//! sync one under the same name; use `or_rail::accumulation::combined` for the latter.
//!
//! ```
//! use or_rail::prelude_async::*;
//! ```

pub use crate::prelude::{
    bad, check, validated_by, when, Accumulate, Check, Every, Fault, IntoEvery, One, Or,
};

pub use crate::async_ext::{
    combined, AccumulateFutures, Cancelled, Canceller, CombineState, Combined, FutureFactory,
    OrFuture,
};
