//! Fold sinks - build a consumer from a reduction function.

use std::future::Future;
use std::marker::PhantomData;

use crate::sink::Sink;

/// A sink that folds every input into an accumulator.
///
/// `on_start` clones the seed, `on_data` applies the reduction, `on_end`
/// returns the accumulator unchanged. This is the canonical way to build
/// a sink from a plain function.
///
/// # Example
///
/// ```rust,ignore
/// let sum = source::from_iter(vec![1, 2, 3])
///     .pipe(&sink::fold(0, |acc, n| acc + n))
///     .await;
/// assert_eq!(sum, Ok(6));
/// ```
pub struct Fold<A, F, I, E> {
    init: A,
    f: F,
    _marker: PhantomData<fn(I) -> E>,
}

impl<A, F, I, E> std::fmt::Debug for Fold<A, F, I, E>
where
    A: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold")
            .field("init", &self.init)
            .field("f", &"<function>")
            .finish()
    }
}

/// Create a sink that reduces its input with `f`, starting from `init`.
///
/// The seed is cloned per activation, so the sink value stays reusable
/// and activations never share state.
pub fn fold<A, F, I, E>(init: A, f: F) -> Fold<A, F, I, E>
where
    F: Fn(A, I) -> A,
{
    Fold {
        init,
        f,
        _marker: PhantomData,
    }
}

impl<A, F, I, E> Sink for Fold<A, F, I, E>
where
    A: Clone + Send + Sync,
    F: Fn(A, I) -> A + Send + Sync,
    I: Send,
    E: Send,
{
    type Input = I;
    type State = A;
    type Value = A;
    type Error = E;

    async fn on_start(&self) -> Result<A, E> {
        Ok(self.init.clone())
    }

    async fn on_data(&self, state: A, input: I) -> Result<A, E> {
        Ok((self.f)(state, input))
    }

    async fn on_end(&self, state: A) -> Result<A, E> {
        Ok(state)
    }
}

/// A sink that folds every input through an async, fallible reduction.
///
/// The async variant of [`Fold`]: the accumulator function returns a
/// future, and its failure fails the whole activation.
pub struct FoldAsync<A, F, I, E> {
    init: A,
    f: F,
    _marker: PhantomData<fn(I) -> E>,
}

impl<A, F, I, E> std::fmt::Debug for FoldAsync<A, F, I, E>
where
    A: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoldAsync")
            .field("init", &self.init)
            .field("f", &"<function>")
            .finish()
    }
}

/// Create a sink that reduces its input with the async function `f`.
pub fn fold_async<A, F, Fut, I, E>(init: A, f: F) -> FoldAsync<A, F, I, E>
where
    F: Fn(A, I) -> Fut,
    Fut: Future<Output = Result<A, E>>,
{
    FoldAsync {
        init,
        f,
        _marker: PhantomData,
    }
}

impl<A, F, Fut, I, E> Sink for FoldAsync<A, F, I, E>
where
    A: Clone + Send + Sync,
    F: Fn(A, I) -> Fut + Send + Sync,
    Fut: Future<Output = Result<A, E>> + Send,
    I: Send,
    E: Send,
{
    type Input = I;
    type State = A;
    type Value = A;
    type Error = E;

    async fn on_start(&self) -> Result<A, E> {
        Ok(self.init.clone())
    }

    async fn on_data(&self, state: A, input: I) -> Result<A, E> {
        (self.f)(state, input).await
    }

    async fn on_end(&self, state: A) -> Result<A, E> {
        Ok(state)
    }
}
