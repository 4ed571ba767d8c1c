//! Single-item source.

use std::marker::PhantomData;

use crate::sink::Sink;
use crate::source::Source;

/// A source that produces exactly one item.
#[derive(Debug, Clone)]
pub struct Once<T, E> {
    value: T,
    _marker: PhantomData<fn() -> E>,
}

/// Create a source that produces `value` once.
///
/// The value is cloned per activation so the source stays reusable.
pub fn once<T, E>(value: T) -> Once<T, E> {
    Once {
        value,
        _marker: PhantomData,
    }
}

impl<T, E> Source for Once<T, E>
where
    T: Clone + Send + Sync,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, E>
    where
        S: Sink<Input = T, Error = E>,
    {
        sink.on_data(state, self.value.clone()).await
    }
}
