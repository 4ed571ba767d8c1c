//! Extension trait providing combinator methods for all Sinks.
//!
//! `SinkExt` is blanket-implemented for every [`Sink`]; you never
//! implement it yourself.

use std::future::Future;

use crate::sink::combinators::{Map, MapAsync, Parallel};
use crate::sink::trait_def::Sink;

/// Extension trait providing combinator methods for all Sinks.
///
/// Each method wraps `self` in a new sink that preserves the three-phase
/// contract - combinators return concrete types, decorator-style.
///
/// # Example
///
/// ```
/// use millrace::prelude::*;
/// use millrace::{sink, source};
///
/// # tokio_test::block_on(async {
/// let sink = sink::fold(0, |acc, n: i32| acc + n).map(|total| total * 10);
/// assert_eq!(source::from_iter(vec![1, 2, 3]).pipe(&sink).await, Ok::<_, String>(60));
/// # });
/// ```
pub trait SinkExt: Sink + Sized {
    /// Transform the final value of this sink.
    ///
    /// `on_start` and `on_data` are untouched; only the `on_end` result
    /// passes through `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Value) -> U + Send + Sync,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the final value through an async, fallible function.
    ///
    /// If `f`'s future resolves to an error, the whole sink fails with it.
    fn map_async<F, Fut, U>(self, f: F) -> MapAsync<Self, F>
    where
        F: Fn(Self::Value) -> Fut + Send + Sync,
        Fut: Future<Output = Result<U, Self::Error>> + Send,
        U: Send,
    {
        MapAsync { inner: self, f }
    }

    /// Consume the same input stream with `self` and `other` concurrently.
    ///
    /// Every phase fans out to both sinks and joins before the driver may
    /// proceed; the result is the pair of both results. Requires
    /// `Input: Clone` so each item can reach both sides.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::prelude::*;
    /// use millrace::{sink, source};
    ///
    /// # tokio_test::block_on(async {
    /// let both = sink::constant(42).parallel(sink::constant("x"));
    /// assert_eq!(
    ///     source::from_iter(vec![1, 2, 3]).pipe(&both).await,
    ///     Ok::<_, String>((42, "x")),
    /// );
    /// # });
    /// ```
    fn parallel<B>(self, other: B) -> Parallel<Self, B>
    where
        Self::Input: Clone,
        B: Sink<Input = Self::Input, Error = Self::Error>,
    {
        Parallel {
            left: self,
            right: other,
        }
    }
}

// Blanket implementation for all Sink types
impl<S: Sink> SinkExt for S {}
