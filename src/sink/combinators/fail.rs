//! Fail sink - a consumer that refuses to start.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::sink::Sink;

/// A sink whose first invoked operation fails with a fixed error.
///
/// `State` is [`Infallible`], so the type system proves no state is ever
/// produced: a driver honoring the protocol can never reach `on_data`
/// or `on_end`.
#[derive(Debug, Clone)]
pub struct Fail<I, V, E> {
    error: E,
    _marker: PhantomData<fn(I) -> V>,
}

/// Create a sink that fails deterministically with `error`.
///
/// Use to short-circuit a pipeline regardless of its input. The error is
/// cloned per activation so the sink value stays reusable.
pub fn fail<I, V, E>(error: E) -> Fail<I, V, E> {
    Fail {
        error,
        _marker: PhantomData,
    }
}

impl<I, V, E> Sink for Fail<I, V, E>
where
    I: Send,
    V: Send,
    E: Clone + Send + Sync,
{
    type Input = I;
    type State = Infallible;
    type Value = V;
    type Error = E;

    async fn on_start(&self) -> Result<Infallible, E> {
        Err(self.error.clone())
    }

    async fn on_data(&self, state: Infallible, _input: I) -> Result<Infallible, E> {
        match state {}
    }

    async fn on_end(&self, state: Infallible) -> Result<V, E> {
        match state {}
    }
}
