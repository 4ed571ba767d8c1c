//! Parallel combinator - fan one input stream out to two sinks.

use futures::future::try_join;

use crate::sink::Sink;

/// Parallel combinator - two sinks consuming the same input stream.
///
/// State is the pair of both states, the value the pair of both values.
/// Each phase drives both sinks concurrently and joins before the driver
/// may proceed, so the slower side gates the pipeline for that item.
///
/// On failure the composite fails with the first error. If both sides
/// fail at the same step, the left branch's error wins: `try_join` polls
/// left first. That tie-break is an implementation choice, not part of
/// the contract.
pub struct Parallel<A, B> {
    pub(crate) left: A,
    pub(crate) right: B,
}

impl<A, B> std::fmt::Debug for Parallel<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parallel")
            .field("left", &"<sink>")
            .field("right", &"<sink>")
            .finish()
    }
}

impl<A, B> Sink for Parallel<A, B>
where
    A: Sink,
    A::Input: Clone,
    B: Sink<Input = A::Input, Error = A::Error>,
{
    type Input = A::Input;
    type State = (A::State, B::State);
    type Value = (A::Value, B::Value);
    type Error = A::Error;

    async fn on_start(&self) -> Result<Self::State, Self::Error> {
        try_join(self.left.on_start(), self.right.on_start()).await
    }

    async fn on_data(&self, state: Self::State, input: Self::Input) -> Result<Self::State, Self::Error> {
        let (left_state, right_state) = state;
        try_join(
            self.left.on_data(left_state, input.clone()),
            self.right.on_data(right_state, input),
        )
        .await
    }

    async fn on_end(&self, state: Self::State) -> Result<Self::Value, Self::Error> {
        let (left_state, right_state) = state;
        try_join(self.left.on_end(left_state), self.right.on_end(right_state)).await
    }
}
