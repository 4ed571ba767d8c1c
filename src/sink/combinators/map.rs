//! Map combinators - post-process a sink's final value.

use std::future::Future;

use crate::sink::Sink;

/// Map combinator - transforms the final value of a sink.
///
/// `on_start` and `on_data` delegate untouched; only `on_end`'s value
/// passes through the function.
pub struct Map<Si, F> {
    pub(crate) inner: Si,
    pub(crate) f: F,
}

impl<Si, F> std::fmt::Debug for Map<Si, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<sink>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Si, F, U> Sink for Map<Si, F>
where
    Si: Sink,
    F: Fn(Si::Value) -> U + Send + Sync,
    U: Send,
{
    type Input = Si::Input;
    type State = Si::State;
    type Value = U;
    type Error = Si::Error;

    fn on_start(&self) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.inner.on_start()
    }

    fn on_data(
        &self,
        state: Self::State,
        input: Self::Input,
    ) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.inner.on_data(state, input)
    }

    async fn on_end(&self, state: Self::State) -> Result<U, Si::Error> {
        let value = self.inner.on_end(state).await?;
        Ok((self.f)(value))
    }
}

/// MapAsync combinator - transforms the final value through an async,
/// fallible function. Failure of the function fails the whole sink.
pub struct MapAsync<Si, F> {
    pub(crate) inner: Si,
    pub(crate) f: F,
}

impl<Si, F> std::fmt::Debug for MapAsync<Si, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapAsync")
            .field("inner", &"<sink>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Si, F, Fut, U> Sink for MapAsync<Si, F>
where
    Si: Sink,
    F: Fn(Si::Value) -> Fut + Send + Sync,
    Fut: Future<Output = Result<U, Si::Error>> + Send,
    U: Send,
{
    type Input = Si::Input;
    type State = Si::State;
    type Value = U;
    type Error = Si::Error;

    fn on_start(&self) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.inner.on_start()
    }

    fn on_data(
        &self,
        state: Self::State,
        input: Self::Input,
    ) -> impl Future<Output = Result<Self::State, Self::Error>> + Send {
        self.inner.on_data(state, input)
    }

    async fn on_end(&self, state: Self::State) -> Result<U, Si::Error> {
        let value = self.inner.on_end(state).await?;
        (self.f)(value).await
    }
}
