//! Fail source - a predetermined failure.

use std::future::Future;
use std::marker::PhantomData;

use crate::sink::Sink;
use crate::source::Source;

/// A source that fails without producing anything.
///
/// `pipe` resolves to the error without invoking a single sink
/// operation; used as a continuation (in `concat` or `flat_map`) it
/// fails the data phase it would have fed.
#[derive(Debug, Clone)]
pub struct Fail<T, E> {
    error: E,
    _marker: PhantomData<fn() -> T>,
}

/// Create a source that fails deterministically with `error`.
///
/// The error is cloned per activation so the source stays reusable.
pub fn fail<T, E>(error: E) -> Fail<T, E> {
    Fail {
        error,
        _marker: PhantomData,
    }
}

impl<T, E> Source for Fail<T, E>
where
    T: Send,
    E: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;

    async fn drain<S>(&self, _sink: &S, _state: S::State) -> Result<S::State, E>
    where
        S: Sink<Input = T, Error = E>,
    {
        Err(self.error.clone())
    }

    // A predetermined failure never touches the sink at all.
    fn pipe<S>(&self, _sink: &S) -> impl Future<Output = Result<S::Value, E>> + Send
    where
        S: Sink<Input = T, Error = E>,
    {
        let error = self.error.clone();
        async move { Err(error) }
    }
}
