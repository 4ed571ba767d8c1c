//! Filter combinators - drop items before they reach the sink.

use std::future::Future;
use std::marker::PhantomData;

use crate::sink::Sink;
use crate::source::stateful::Threaded;
use crate::source::Source;

/// Filter combinator - forwards only items matching the predicate.
///
/// Dropped items never reach the downstream sink's `on_data`.
pub struct Filter<Src, F> {
    pub(crate) source: Src,
    pub(crate) pred: F,
}

impl<Src, F> std::fmt::Debug for Filter<Src, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("source", &"<source>")
            .field("pred", &"<function>")
            .finish()
    }
}

impl<Src, F> Source for Filter<Src, F>
where
    Src: Source,
    F: Fn(&Src::Output) -> bool + Send + Sync,
{
    type Output = Src::Output;
    type Error = Src::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, Src::Error>
    where
        S: Sink<Input = Src::Output, Error = Src::Error>,
    {
        let via = FilterSink {
            sink,
            pred: &self.pred,
        };
        self.source.drain(&via, state).await
    }
}

struct FilterSink<'a, S, F> {
    sink: &'a S,
    pred: &'a F,
}

impl<'a, S, F> Sink for FilterSink<'a, S, F>
where
    S: Sink,
    F: Fn(&S::Input) -> bool + Send + Sync,
{
    type Input = S::Input;
    type State = S::State;
    type Value = S::Value;
    type Error = S::Error;

    fn on_start(&self) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.sink.on_start()
    }

    async fn on_data(&self, state: Self::State, input: S::Input) -> Result<Self::State, Self::Error> {
        if (self.pred)(&input) {
            self.sink.on_data(state, input).await
        } else {
            Ok(state)
        }
    }

    fn on_end(
        &self,
        state: Self::State,
    ) -> impl Future<Output = Result<Self::Value, Self::Error>> + Send {
        self.sink.on_end(state)
    }
}

/// Stateful filter combinator - the predicate threads a private state
/// that advances on every item, kept or dropped alike.
pub struct FilterWithState<Src, Q, F> {
    pub(crate) source: Src,
    pub(crate) init: Q,
    pub(crate) pred: F,
}

impl<Src, Q, F> std::fmt::Debug for FilterWithState<Src, Q, F>
where
    Q: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterWithState")
            .field("source", &"<source>")
            .field("init", &self.init)
            .field("pred", &"<function>")
            .finish()
    }
}

impl<Src, Q, F> Source for FilterWithState<Src, Q, F>
where
    Src: Source,
    Q: Clone + Send + Sync,
    F: Fn(Q, &Src::Output) -> (Q, bool) + Send + Sync,
{
    type Output = Src::Output;
    type Error = Src::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, Src::Error>
    where
        S: Sink<Input = Src::Output, Error = Src::Error>,
    {
        let step = |own: Q, item: Src::Output| {
            let (own, keep) = (self.pred)(own, &item);
            (own, if keep { Some(item) } else { None })
        };
        let via = Threaded {
            sink,
            init: &self.init,
            step: &step,
            _marker: PhantomData,
        };
        let (_, state) = self.source.drain(&via, (self.init.clone(), state)).await?;
        Ok(state)
    }
}

/// Async filter combinator - the predicate is awaited before the
/// forwarding decision, preserving one-at-a-time backpressure.
///
/// The predicate's future must not borrow the item; inspect the item
/// synchronously and move what you need into the future.
pub struct FilterAsync<Src, F> {
    pub(crate) source: Src,
    pub(crate) pred: F,
}

impl<Src, F> std::fmt::Debug for FilterAsync<Src, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterAsync")
            .field("source", &"<source>")
            .field("pred", &"<function>")
            .finish()
    }
}

impl<Src, F, Fut> Source for FilterAsync<Src, F>
where
    Src: Source,
    F: Fn(&Src::Output) -> Fut + Send + Sync,
    Fut: Future<Output = Result<bool, Src::Error>> + Send,
{
    type Output = Src::Output;
    type Error = Src::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, Src::Error>
    where
        S: Sink<Input = Src::Output, Error = Src::Error>,
    {
        let via = FilterAsyncSink {
            sink,
            pred: &self.pred,
        };
        self.source.drain(&via, state).await
    }
}

struct FilterAsyncSink<'a, S, F> {
    sink: &'a S,
    pred: &'a F,
}

impl<'a, S, F, Fut> Sink for FilterAsyncSink<'a, S, F>
where
    S: Sink,
    F: Fn(&S::Input) -> Fut + Send + Sync,
    Fut: Future<Output = Result<bool, S::Error>> + Send,
{
    type Input = S::Input;
    type State = S::State;
    type Value = S::Value;
    type Error = S::Error;

    fn on_start(&self) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.sink.on_start()
    }

    async fn on_data(&self, state: Self::State, input: S::Input) -> Result<Self::State, Self::Error> {
        if (self.pred)(&input).await? {
            self.sink.on_data(state, input).await
        } else {
            Ok(state)
        }
    }

    fn on_end(
        &self,
        state: Self::State,
    ) -> impl Future<Output = Result<Self::Value, Self::Error>> + Send {
        self.sink.on_end(state)
    }
}
