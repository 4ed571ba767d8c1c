//! Build a sink from three closures, one per protocol phase.

use std::future::Future;
use std::marker::PhantomData;

use crate::sink::Sink;

/// A sink assembled from three async closures.
///
/// The escape hatch for consumers that don't fit an existing
/// constructor - and the natural way to build instrumented "spy" sinks
/// in tests, since each closure observes exactly one protocol phase.
pub struct FromFn<FS, FD, FE, I> {
    start: FS,
    data: FD,
    end: FE,
    _marker: PhantomData<fn(I)>,
}

impl<FS, FD, FE, I> std::fmt::Debug for FromFn<FS, FD, FE, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn")
            .field("start", &"<function>")
            .field("data", &"<function>")
            .field("end", &"<function>")
            .finish()
    }
}

/// Create a sink from closures for `on_start`, `on_data` and `on_end`.
///
/// # Example
///
/// ```
/// use millrace::prelude::*;
/// use millrace::{sink, source};
///
/// # tokio_test::block_on(async {
/// let last = sink::from_fn(
///     || async { Ok::<_, String>(None) },
///     |_state, item: i32| async move { Ok(Some(item)) },
///     |state| async move { Ok(state) },
/// );
/// assert_eq!(source::from_iter(vec![1, 2, 3]).pipe(&last).await, Ok(Some(3)));
/// # });
/// ```
pub fn from_fn<FS, FD, FE, FutS, FutD, FutE, St, I, V, E>(
    start: FS,
    data: FD,
    end: FE,
) -> FromFn<FS, FD, FE, I>
where
    FS: Fn() -> FutS,
    FD: Fn(St, I) -> FutD,
    FE: Fn(St) -> FutE,
    FutS: Future<Output = Result<St, E>>,
    FutD: Future<Output = Result<St, E>>,
    FutE: Future<Output = Result<V, E>>,
{
    FromFn {
        start,
        data,
        end,
        _marker: PhantomData,
    }
}

impl<FS, FD, FE, FutS, FutD, FutE, St, I, V, E> Sink for FromFn<FS, FD, FE, I>
where
    FS: Fn() -> FutS + Send + Sync,
    FD: Fn(St, I) -> FutD + Send + Sync,
    FE: Fn(St) -> FutE + Send + Sync,
    FutS: Future<Output = Result<St, E>> + Send,
    FutD: Future<Output = Result<St, E>> + Send,
    FutE: Future<Output = Result<V, E>> + Send,
    St: Send,
    I: Send,
    V: Send,
    E: Send,
{
    type Input = I;
    type State = St;
    type Value = V;
    type Error = E;

    async fn on_start(&self) -> Result<St, E> {
        (self.start)().await
    }

    async fn on_data(&self, state: St, input: I) -> Result<St, E> {
        (self.data)(state, input).await
    }

    async fn on_end(&self, state: St) -> Result<V, E> {
        (self.end)(state).await
    }
}
