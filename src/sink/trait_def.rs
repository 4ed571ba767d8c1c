//! Sink trait definition - the three-phase consumer contract.
//!
//! A `Sink` is a pure, reusable description of a consumer. It never runs by
//! itself: a driving [`Source`](crate::source::Source) invokes its three
//! operations, threading an opaque `State` value from `on_start` through
//! every `on_data` call into `on_end`.
//!
//! # Design Philosophy
//!
//! This trait follows the same pattern as `Future` and `Iterator`:
//! - Combinators return concrete types (zero-cost abstractions)
//! - All per-activation mutation lives in the `State` value, never in the
//!   sink itself, so one sink value can back any number of activations
//!
//! # The activation protocol
//!
//! For one activation the driver calls `on_start` exactly once, then
//! `on_data` zero or more times (each awaiting the previous state), then
//! `on_end` exactly once. If any step fails, no further operation is
//! invoked and the failure becomes the result of the activation.

use std::future::Future;

/// The core Sink trait - a three-phase consumer of a stream of inputs.
///
/// A sink produces an initial `State` in `on_start`, folds each `Input`
/// into that state in `on_data`, and converts the final state into a
/// `Value` in `on_end`. The state type is private to the implementation;
/// a combinator that wraps a sink may pair the wrapped state with its own,
/// but never inspects it.
///
/// # Type Parameters (associated)
///
/// * `Input` - The item type accepted by `on_data`
/// * `State` - The opaque per-activation state threaded between phases
/// * `Value` - The final result produced by `on_end`
/// * `Error` - The failure type; passed through unchanged, never wrapped
///
/// # Example
///
/// ```
/// use millrace::prelude::*;
/// use millrace::{sink, source};
///
/// # tokio_test::block_on(async {
/// let sum = source::from_iter(vec![1, 2, 3])
///     .pipe(&sink::fold(42, |acc, n| acc + n))
///     .await;
/// assert_eq!(sum, Ok::<_, String>(48));
/// # });
/// ```
pub trait Sink: Send + Sync {
    /// The item type this sink accepts.
    type Input: Send;

    /// The opaque state threaded through one activation.
    type State: Send;

    /// The final value produced when the stream ends.
    type Value: Send;

    /// The failure type. The core never wraps or rewrites it.
    type Error: Send;

    /// Begin an activation, producing the initial state.
    ///
    /// Called exactly once per activation, before any data.
    fn on_start(&self) -> impl Future<Output = Result<Self::State, Self::Error>> + Send;

    /// Accept one item, folding it into the state.
    ///
    /// The driver awaits the returned future before offering the next
    /// item - this is the backpressure mechanism. There is never more
    /// than one item in flight.
    fn on_data(
        &self,
        state: Self::State,
        input: Self::Input,
    ) -> impl Future<Output = Result<Self::State, Self::Error>> + Send;

    /// Finish the activation, converting the final state into the result.
    ///
    /// Called exactly once per activation, unless an earlier step failed.
    fn on_end(
        &self,
        state: Self::State,
    ) -> impl Future<Output = Result<Self::Value, Self::Error>> + Send;
}
