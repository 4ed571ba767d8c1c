//! Constant sink - ignores every input and reports a fixed value.

use std::marker::PhantomData;

use crate::sink::Sink;

/// A sink that ignores all input and resolves to a held value.
///
/// The state *is* the value: `on_start` clones it, `on_data` passes it
/// through untouched, `on_end` returns it.
///
/// # Example
///
/// ```rust,ignore
/// let sink = sink::constant(42);
/// assert_eq!(source::from_iter(vec![1, 2, 3]).pipe(&sink).await, Ok(42));
/// ```
#[derive(Debug, Clone)]
pub struct Constant<I, T, E> {
    value: T,
    _marker: PhantomData<fn(I) -> E>,
}

/// Create a sink that ignores all input and resolves to `value`.
///
/// The degenerate "ignore everything, report a constant" consumer.
pub fn constant<I, T, E>(value: T) -> Constant<I, T, E> {
    Constant {
        value,
        _marker: PhantomData,
    }
}

/// Create a sink that ignores all input and resolves to `()`.
pub fn unit<I, E>() -> Constant<I, (), E> {
    constant(())
}

impl<I, T, E> Sink for Constant<I, T, E>
where
    I: Send,
    T: Clone + Send + Sync,
    E: Send,
{
    type Input = I;
    type State = T;
    type Value = T;
    type Error = E;

    async fn on_start(&self) -> Result<T, E> {
        Ok(self.value.clone())
    }

    async fn on_data(&self, state: T, _input: I) -> Result<T, E> {
        Ok(state)
    }

    async fn on_end(&self, state: T) -> Result<T, E> {
        Ok(state)
    }
}
