//! Concat combinators - sequential composition of sources.

use std::future::Future;

use crate::sink::Sink;
use crate::source::Source;

/// Concat combinator - drains one source, then another, into the same
/// sink within a single activation.
///
/// The continuation's data phase is seeded with the state left by the
/// first source; the downstream sink sees one `on_start` and one
/// `on_end` for the pair. Ownership of the sink passes linearly from
/// the first source to the second, never shared.
pub struct Concat<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> std::fmt::Debug for Concat<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Concat")
            .field("first", &"<source>")
            .field("second", &"<source>")
            .finish()
    }
}

impl<A, B> Source for Concat<A, B>
where
    A: Source,
    B: Source<Output = A::Output, Error = A::Error>,
{
    type Output = A::Output;
    type Error = A::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, A::Error>
    where
        S: Sink<Input = A::Output, Error = A::Error>,
    {
        let state = self.first.drain(sink, state).await?;
        self.second.drain(sink, state).await
    }
}

/// Lazy concat combinator - the continuation source is produced by an
/// async factory, invoked only once the first source has fully drained.
///
/// Laziness lets the continuation depend on side effects observed while
/// the first source ran. A failing factory fails the activation; the
/// factory is never invoked when the first source fails.
pub struct ConcatWith<A, F> {
    pub(crate) first: A,
    pub(crate) factory: F,
}

impl<A, F> std::fmt::Debug for ConcatWith<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcatWith")
            .field("first", &"<source>")
            .field("factory", &"<function>")
            .finish()
    }
}

impl<A, F, Fut, B> Source for ConcatWith<A, F>
where
    A: Source,
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<B, A::Error>> + Send,
    B: Source<Output = A::Output, Error = A::Error>,
{
    type Output = A::Output;
    type Error = A::Error;

    async fn drain<S>(&self, sink: &S, state: S::State) -> Result<S::State, A::Error>
    where
        S: Sink<Input = A::Output, Error = A::Error>,
    {
        let state = self.first.drain(sink, state).await?;
        let second = (self.factory)().await?;
        second.drain(sink, state).await
    }
}
