//! # Millrace
//!
//! > *"A millrace channels the water that drives the wheel"*
//!
//! A Rust library for composable streaming under strict backpressure.
//!
//! ## Philosophy
//!
//! Producers and consumers are **pure values**, not running processes:
//! - A [`Source`] describes how to drive any consumer through a
//!   start → data* → end protocol
//! - A [`Sink`] describes how to fold that protocol into a result,
//!   threading an opaque state between phases
//!
//! Nothing runs until a source is [`pipe`](source::Source::pipe)d into a
//! sink, and every step awaits the previous one - the producer never
//! issues more data than the consumer has accepted, and nothing is
//! buffered beyond the single item in flight. The first failure anywhere
//! becomes the result of the activation, passed through unchanged.
//!
//! ## Quick Example
//!
//! ```rust
//! use millrace::prelude::*;
//! use millrace::{sink, source};
//!
//! # tokio_test::block_on(async {
//! // Transform and reduce - no work happens until the pipe runs.
//! let total = source::from_iter(vec![1, 2, 3, 4])
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .fold(0, |acc, n| acc + n)
//!     .await;
//! assert_eq!(total, Ok::<_, String>(60));
//!
//! // Fan the same stream out to two sinks, joined per item.
//! let both = sink::fold(0, |acc, n: i32| acc + n).parallel(sink::constant("done"));
//! let result = source::from_iter(vec![1, 2, 3]).pipe(&both).await;
//! assert_eq!(result, Ok::<_, String>((6, "done")));
//! # });
//! ```
//!
//! ## Modules
//!
//! - [`source`] - producers and their combinators
//! - [`sink`] - consumers and their combinators
//! - [`io`] - adapters to tokio byte transports (feature `io`, default)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "io")]
pub mod io;
pub mod sink;
pub mod source;

// Re-exports
pub use sink::{Sink, SinkExt};
pub use source::{Source, SourceExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::sink::{Sink, SinkExt};
    pub use crate::source::{Source, SourceExt};
}
