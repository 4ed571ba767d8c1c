//! Collect sink - gather every input into a `Vec`, in arrival order.

use std::marker::PhantomData;

use crate::sink::Sink;

/// A sink that accumulates all inputs into a `Vec`.
///
/// Backs [`SourceExt::to_vec`](crate::source::SourceExt::to_vec).
#[derive(Debug, Clone)]
pub struct Collect<T, E> {
    _marker: PhantomData<fn(T) -> E>,
}

/// Create a sink that collects every input into a `Vec`, preserving order.
pub fn collect<T, E>() -> Collect<T, E> {
    Collect {
        _marker: PhantomData,
    }
}

impl<T, E> Sink for Collect<T, E>
where
    T: Send,
    E: Send,
{
    type Input = T;
    type State = Vec<T>;
    type Value = Vec<T>;
    type Error = E;

    async fn on_start(&self) -> Result<Vec<T>, E> {
        Ok(Vec::new())
    }

    async fn on_data(&self, mut state: Vec<T>, input: T) -> Result<Vec<T>, E> {
        state.push(input);
        Ok(state)
    }

    async fn on_end(&self, state: Vec<T>) -> Result<Vec<T>, E> {
        Ok(state)
    }
}
