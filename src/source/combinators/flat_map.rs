//! FlatMap combinator - splice child sources into one stream.

use std::future::Future;
use std::marker::PhantomData;

use crate::sink::Sink;
use crate::source::Source;

/// FlatMap combinator - every upstream item becomes a child source whose
/// items are delivered downstream in its place.
///
/// Each child is fully drained before the next upstream item is
/// processed, strictly sequentially - no interleaving between children.
/// The downstream sink sees exactly one `on_start` and one `on_end` for
/// the whole composite; the sink state is carried across child
/// boundaries.
pub struct FlatMap<Src, F> {
    pub(crate) source: Src,
    pub(crate) f: F,
}

impl<Src, F> std::fmt::Debug for FlatMap<Src, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMap")
            .field("source", &"<source>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Src, F, Child> Source for FlatMap<Src, F>
where
    Src: Source,
    F: Fn(Src::Output) -> Child + Send + Sync,
    Child: Source<Error = Src::Error>,
{
    type Output = Child::Output;
    type Error = Src::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, Src::Error>
    where
        S: Sink<Input = Child::Output, Error = Src::Error>,
    {
        let via = FlatMapSink {
            sink,
            f: &self.f,
            _marker: PhantomData,
        };
        self.source.drain(&via, state).await
    }
}

struct FlatMapSink<'a, S, F, T> {
    sink: &'a S,
    f: &'a F,
    _marker: PhantomData<fn(T)>,
}

impl<'a, S, F, T, Child> Sink for FlatMapSink<'a, S, F, T>
where
    S: Sink<Input = Child::Output, Error = Child::Error>,
    F: Fn(T) -> Child + Send + Sync,
    T: Send,
    Child: Source,
{
    type Input = T;
    type State = S::State;
    type Value = S::Value;
    type Error = S::Error;

    fn on_start(&self) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.sink.on_start()
    }

    // Drain the child through the downstream sink's data phase only;
    // the resulting state seeds the next upstream item.
    async fn on_data(&self, state: Self::State, input: T) -> Result<Self::State, Self::Error> {
        let child = (self.f)(input);
        child.drain(self.sink, state).await
    }

    fn on_end(
        &self,
        state: Self::State,
    ) -> impl Future<Output = Result<Self::Value, Self::Error>> + Send {
        self.sink.on_end(state)
    }
}
