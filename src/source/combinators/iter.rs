//! Iterator-backed source.

use std::marker::PhantomData;

use crate::sink::Sink;
use crate::source::Source;

/// A source producing the items of an iterator, in order.
#[derive(Debug, Clone)]
pub struct Iter<I, E> {
    iter: I,
    _marker: PhantomData<fn() -> E>,
}

/// Create a source from anything iterable.
///
/// Items are delivered in iteration order, each `on_data` awaited before
/// the next item is offered (strict sequential backpressure). The
/// iterable is cloned per activation, so the source stays reusable.
///
/// # Example
///
/// ```
/// use millrace::prelude::*;
/// use millrace::source;
///
/// # tokio_test::block_on(async {
/// let src = source::from_iter(vec![1, 2, 3]);
/// assert_eq!(src.to_vec().await, Ok::<_, String>(vec![1, 2, 3]));
/// # });
/// ```
pub fn from_iter<I, E>(iter: I) -> Iter<I, E>
where
    I: IntoIterator + Clone,
{
    Iter {
        iter,
        _marker: PhantomData,
    }
}

impl<I, E> Source for Iter<I, E>
where
    I: IntoIterator + Clone + Send + Sync,
    I::IntoIter: Send,
    I::Item: Send,
    E: Send,
{
    type Output = I::Item;
    type Error = E;

    async fn drain<S>(&self, sink: &S, mut state: S::State) -> Result<S::State, E>
    where
        S: Sink<Input = I::Item, Error = E>,
    {
        for item in self.iter.clone() {
            state = sink.on_data(state, item).await?;
        }
        Ok(state)
    }
}
