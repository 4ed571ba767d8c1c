//! Empty source - starts and ends the sink with no data in between.

use std::marker::PhantomData;

use crate::sink::Sink;
use crate::source::Source;

/// A source that produces no items.
///
/// Piping it calls `on_start` then immediately `on_end`.
#[derive(Debug, Clone)]
pub struct Empty<T, E> {
    _marker: PhantomData<fn() -> (T, E)>,
}

/// Create a source that produces no items.
pub fn empty<T, E>() -> Empty<T, E> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T, E> Source for Empty<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn drain<S>(&self, _sink: &S, state: S::State) -> Result<S::State, E>
    where
        S: Sink<Input = T, Error = E>,
    {
        Ok(state)
    }
}
