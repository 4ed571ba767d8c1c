//! Source trait definition - a producer realized only when piped.
//!
//! A `Source` owns no running computation. It is a reusable description
//! of how to drive *any* [`Sink`] through the start → data* → end
//! protocol; each [`pipe`](Source::pipe) call is one independent
//! activation.
//!
//! # Two operations
//!
//! Implementors provide [`drain`](Source::drain): deliver every item into
//! `sink.on_data`, threading an explicit state, awaiting each acceptance
//! before producing the next item. The provided [`pipe`](Source::pipe)
//! composes the full activation around it: `on_start`, then `drain`, then
//! `on_end`. Splitting the data phase out is what makes sequential
//! composition cheap - `concat` drains one source after the other into
//! the same sink, and `flat_map` drains child sources mid-stream, while
//! the downstream sink still sees exactly one `on_start` and one
//! `on_end` per activation.

use std::future::Future;

use crate::sink::Sink;

/// The core Source trait - drives a [`Sink`] to completion.
///
/// A source must, per activation, call `on_start` exactly once, then zero
/// or more `on_data` calls - each awaiting the previous state before
/// issuing the next - then `on_end` exactly once. If any step fails, no
/// further sink operation is invoked and the failure is the activation's
/// result, passed through unchanged.
///
/// Sources are reusable: `pipe` may be invoked repeatedly, and distinct
/// activations are fully independent.
///
/// # Example
///
/// ```
/// use millrace::prelude::*;
/// use millrace::{sink, source};
///
/// # tokio_test::block_on(async {
/// let doubled = source::from_iter(vec![1, 2, 3]).map(|n| n * 2);
/// assert_eq!(doubled.to_vec().await, Ok::<_, String>(vec![2, 4, 6]));
/// // The same source value backs a second, independent activation.
/// assert_eq!(doubled.to_vec().await, Ok::<_, String>(vec![2, 4, 6]));
/// # });
/// ```
pub trait Source: Send + Sync {
    /// The item type this source produces.
    type Output: Send;

    /// The failure type. The core never wraps or rewrites it.
    type Error: Send;

    /// Deliver every item into `sink.on_data`, threading `state`.
    ///
    /// This is the data phase only: implementations must not call
    /// `on_start` or `on_end` on `sink`, and must await each `on_data`
    /// before producing the next item (strict backpressure, one item in
    /// flight). On success the final state is returned so a composite
    /// can seed a continuation with it.
    fn drain<S>(
        &self,
        sink: &S,
        state: S::State,
    ) -> impl Future<Output = Result<S::State, Self::Error>> + Send
    where
        S: Sink<Input = Self::Output, Error = Self::Error>;

    /// Run one full activation against `sink` and return its result.
    ///
    /// `on_start`, then the data phase, then `on_end`; the first failure
    /// at any step short-circuits the rest.
    fn pipe<S>(
        &self,
        sink: &S,
    ) -> impl Future<Output = Result<S::Value, Self::Error>> + Send
    where
        S: Sink<Input = Self::Output, Error = Self::Error>,
    {
        async move {
            let state = sink.on_start().await?;
            let state = self.drain(sink, state).await?;
            sink.on_end(state).await
        }
    }
}
