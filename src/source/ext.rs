//! Extension trait providing combinator methods for all Sources.
//!
//! `SourceExt` is blanket-implemented for every [`Source`]; you never
//! implement it yourself.

use std::future::Future;

use crate::source::combinators::{
    Concat, ConcatWith, Filter, FilterAsync, FilterWithState, FlatMap, Map, MapAsync,
    MapWithState,
};
use crate::source::trait_def::Source;

/// Extension trait providing combinator methods for all Sources.
///
/// Combinators wrap `self` in a new source preserving the activation
/// contract; the terminal helpers (`fold`, `fold_async`, `to_vec`) pipe
/// `self` into a ready-made sink and resolve to its result.
///
/// # Example
///
/// ```
/// use millrace::prelude::*;
/// use millrace::source;
///
/// # tokio_test::block_on(async {
/// let total = source::from_iter(vec![1, 2, 3, 4])
///     .filter(|n| n % 2 == 0)
///     .map(|n| n * 10)
///     .fold(0, |acc, n| acc + n)
///     .await;
/// assert_eq!(total, Ok::<_, String>(60));
/// # });
/// ```
pub trait SourceExt: Source + Sized {
    /// Transform every item with `f` before it reaches the sink.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U + Send + Sync,
        U: Send,
    {
        Map { source: self, f }
    }

    /// Transform every item, threading a private state through `f`.
    ///
    /// The state is seeded with `init` per activation and never exposed
    /// to the downstream sink - indexing and windowing live here.
    ///
    /// # Example
    ///
    /// ```
    /// use millrace::prelude::*;
    /// use millrace::source;
    ///
    /// # tokio_test::block_on(async {
    /// let indexed = source::from_iter(vec!["a", "b"])
    ///     .map_with_state(0usize, |i, item| (i + 1, (i, item)))
    ///     .to_vec()
    ///     .await;
    /// assert_eq!(indexed, Ok::<_, String>(vec![(0, "a"), (1, "b")]));
    /// # });
    /// ```
    fn map_with_state<Q, U, F>(self, init: Q, f: F) -> MapWithState<Self, Q, F>
    where
        Q: Clone + Send + Sync,
        F: Fn(Q, Self::Output) -> (Q, U) + Send + Sync,
        U: Send,
    {
        MapWithState {
            source: self,
            init,
            f,
        }
    }

    /// Transform every item through an async, fallible function.
    ///
    /// The next upstream item is not requested until `f`'s result has
    /// been both computed and accepted downstream.
    fn map_async<F, Fut, U>(self, f: F) -> MapAsync<Self, F>
    where
        F: Fn(Self::Output) -> Fut + Send + Sync,
        Fut: Future<Output = Result<U, Self::Error>> + Send,
        U: Send,
    {
        MapAsync { source: self, f }
    }

    /// Forward only the items matching `pred`.
    fn filter<F>(self, pred: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync,
    {
        Filter { source: self, pred }
    }

    /// Filter with a private state that advances on every item, kept or
    /// dropped alike.
    fn filter_with_state<Q, F>(self, init: Q, pred: F) -> FilterWithState<Self, Q, F>
    where
        Q: Clone + Send + Sync,
        F: Fn(Q, &Self::Output) -> (Q, bool) + Send + Sync,
    {
        FilterWithState {
            source: self,
            init,
            pred,
        }
    }

    /// Filter with an async, fallible predicate, awaited before the
    /// forwarding decision.
    fn filter_async<F, Fut>(self, pred: F) -> FilterAsync<Self, F>
    where
        F: Fn(&Self::Output) -> Fut + Send + Sync,
        Fut: Future<Output = Result<bool, Self::Error>> + Send,
    {
        FilterAsync { source: self, pred }
    }

    /// Replace every item with the items of a child source, spliced in
    /// order. Children are drained one at a time, never interleaved.
    fn flat_map<Child, F>(self, f: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Child + Send + Sync,
        Child: Source<Error = Self::Error>,
    {
        FlatMap { source: self, f }
    }

    /// Produce all of `self`'s items, then all of `next`'s, in one
    /// activation.
    fn concat<B>(self, next: B) -> Concat<Self, B>
    where
        B: Source<Output = Self::Output, Error = Self::Error>,
    {
        Concat {
            first: self,
            second: next,
        }
    }

    /// As [`concat`](SourceExt::concat), but the continuation comes from
    /// an async factory invoked only after `self` has fully drained.
    fn concat_with<F, Fut, B>(self, factory: F) -> ConcatWith<Self, F>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<B, Self::Error>> + Send,
        B: Source<Output = Self::Output, Error = Self::Error>,
    {
        ConcatWith {
            first: self,
            factory,
        }
    }

    /// Reduce the stream with `f`, starting from `init`.
    ///
    /// Convenience for piping into [`sink::fold`](crate::sink::fold).
    fn fold<'a, A, F>(
        &'a self,
        init: A,
        f: F,
    ) -> impl Future<Output = Result<A, Self::Error>> + Send + 'a
    where
        A: Clone + Send + Sync + 'a,
        F: Fn(A, Self::Output) -> A + Send + Sync + 'a,
    {
        async move {
            let sink = crate::sink::fold(init, f);
            self.pipe(&sink).await
        }
    }

    /// Reduce the stream with an async, fallible accumulator.
    fn fold_async<'a, A, F, Fut>(
        &'a self,
        init: A,
        f: F,
    ) -> impl Future<Output = Result<A, Self::Error>> + Send + 'a
    where
        A: Clone + Send + Sync + 'a,
        F: Fn(A, Self::Output) -> Fut + Send + Sync + 'a,
        Fut: Future<Output = Result<A, Self::Error>> + Send + 'a,
    {
        async move {
            let sink = crate::sink::fold_async(init, f);
            self.pipe(&sink).await
        }
    }

    /// Collect every item into a `Vec`, preserving arrival order.
    fn to_vec(&self) -> impl Future<Output = Result<Vec<Self::Output>, Self::Error>> + Send + '_ {
        async move {
            let sink = crate::sink::collect();
            self.pipe(&sink).await
        }
    }
}

// Blanket implementation for all Source types
impl<S: Source> SourceExt for S {}
