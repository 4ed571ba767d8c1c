//! Shared state-threading plumbing for stateful per-item combinators.
//!
//! `map_with_state` and `filter_with_state` both thread a private state
//! alongside the downstream sink's state. [`Threaded`] is the one wrapper
//! sink they share: its state is the explicit pair `(own, downstream)`,
//! its lifecycle mirrors the downstream sink's one-for-one, and the step
//! function decides per item whether anything is forwarded.

use std::marker::PhantomData;

use crate::sink::Sink;

/// Wrapper sink pairing a private state `Q` with a downstream sink's state.
///
/// The step function receives the private state and the upstream item and
/// returns the next private state plus an optional item to forward. On
/// `None` the downstream sink is not touched for that item, but the
/// private state still advances.
pub(crate) struct Threaded<'a, S, F, Q, T> {
    pub(crate) sink: &'a S,
    pub(crate) init: &'a Q,
    pub(crate) step: &'a F,
    pub(crate) _marker: PhantomData<fn(T)>,
}

impl<'a, S, F, Q, T> Sink for Threaded<'a, S, F, Q, T>
where
    S: Sink,
    F: Fn(Q, T) -> (Q, Option<S::Input>) + Send + Sync,
    Q: Clone + Send + Sync,
    T: Send,
{
    type Input = T;
    type State = (Q, S::State);
    type Value = S::Value;
    type Error = S::Error;

    async fn on_start(&self) -> Result<Self::State, Self::Error> {
        let state = self.sink.on_start().await?;
        Ok((self.init.clone(), state))
    }

    async fn on_data(&self, state: Self::State, input: T) -> Result<Self::State, Self::Error> {
        let (own, downstream) = state;
        let (own, forwarded) = (self.step)(own, input);
        let downstream = match forwarded {
            Some(item) => self.sink.on_data(downstream, item).await?,
            None => downstream,
        };
        Ok((own, downstream))
    }

    async fn on_end(&self, state: Self::State) -> Result<Self::Value, Self::Error> {
        self.sink.on_end(state.1).await
    }
}
