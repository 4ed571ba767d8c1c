//! Map combinators - transform items before they reach the sink.

use std::future::Future;
use std::marker::PhantomData;

use crate::sink::Sink;
use crate::source::stateful::Threaded;
use crate::source::Source;

/// Map combinator - applies a function to every item.
pub struct Map<Src, F> {
    pub(crate) source: Src,
    pub(crate) f: F,
}

impl<Src, F> std::fmt::Debug for Map<Src, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("source", &"<source>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Src, F, U> Source for Map<Src, F>
where
    Src: Source,
    F: Fn(Src::Output) -> U + Send + Sync,
    U: Send,
{
    type Output = U;
    type Error = Src::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, Src::Error>
    where
        S: Sink<Input = U, Error = Src::Error>,
    {
        let via = MapSink {
            sink,
            f: &self.f,
            _marker: PhantomData,
        };
        self.source.drain(&via, state).await
    }
}

struct MapSink<'a, S, F, T> {
    sink: &'a S,
    f: &'a F,
    _marker: PhantomData<fn(T)>,
}

impl<'a, S, F, T, U> Sink for MapSink<'a, S, F, T>
where
    S: Sink<Input = U>,
    F: Fn(T) -> U + Send + Sync,
    T: Send,
    U: Send,
{
    type Input = T;
    type State = S::State;
    type Value = S::Value;
    type Error = S::Error;

    fn on_start(&self) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.sink.on_start()
    }

    async fn on_data(&self, state: Self::State, input: T) -> Result<Self::State, Self::Error> {
        self.sink.on_data(state, (self.f)(input)).await
    }

    fn on_end(
        &self,
        state: Self::State,
    ) -> impl Future<Output = Result<Self::Value, Self::Error>> + Send {
        self.sink.on_end(state)
    }
}

/// Stateful map combinator - threads a private state through the
/// transform without ever exposing it downstream.
pub struct MapWithState<Src, Q, F> {
    pub(crate) source: Src,
    pub(crate) init: Q,
    pub(crate) f: F,
}

impl<Src, Q, F> std::fmt::Debug for MapWithState<Src, Q, F>
where
    Q: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapWithState")
            .field("source", &"<source>")
            .field("init", &self.init)
            .field("f", &"<function>")
            .finish()
    }
}

impl<Src, Q, F, U> Source for MapWithState<Src, Q, F>
where
    Src: Source,
    Q: Clone + Send + Sync,
    F: Fn(Q, Src::Output) -> (Q, U) + Send + Sync,
    U: Send,
{
    type Output = U;
    type Error = Src::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, Src::Error>
    where
        S: Sink<Input = U, Error = Src::Error>,
    {
        let step = |own: Q, item: Src::Output| {
            let (own, mapped) = (self.f)(own, item);
            (own, Some(mapped))
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

/// Async map combinator - the transform is awaited, and the next
/// upstream item is not requested until its result has been accepted
/// downstream. Backpressure holds end to end.
pub struct MapAsync<Src, F> {
    pub(crate) source: Src,
    pub(crate) f: F,
}

impl<Src, F> std::fmt::Debug for MapAsync<Src, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapAsync")
            .field("source", &"<source>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Src, F, Fut, U> Source for MapAsync<Src, F>
where
    Src: Source,
    F: Fn(Src::Output) -> Fut + Send + Sync,
    Fut: Future<Output = Result<U, Src::Error>> + Send,
    U: Send,
{
    type Output = U;
    type Error = Src::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, Src::Error>
    where
        S: Sink<Input = U, Error = Src::Error>,
    {
        let via = MapAsyncSink {
            sink,
            f: &self.f,
            _marker: PhantomData,
        };
        self.source.drain(&via, state).await
    }
}

struct MapAsyncSink<'a, S, F, T> {
    sink: &'a S,
    f: &'a F,
    _marker: PhantomData<fn(T)>,
}

impl<'a, S, F, T, Fut, U> Sink for MapAsyncSink<'a, S, F, T>
where
    S: Sink<Input = U>,
    F: Fn(T) -> Fut + Send + Sync,
    Fut: Future<Output = Result<U, S::Error>> + Send,
    T: Send,
    U: Send,
{
    type Input = T;
    type State = S::State;
    type Value = S::Value;
    type Error = S::Error;

    fn on_start(&self) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.sink.on_start()
    }

    async fn on_data(&self, state: Self::State, input: T) -> Result<Self::State, Self::Error> {
        let mapped = (self.f)(input).await?;
        self.sink.on_data(state, mapped).await
    }

    fn on_end(
        &self,
        state: Self::State,
    ) -> impl Future<Output = Result<Self::Value, Self::Error>> + Send {
        self.sink.on_end(state)
    }
}
