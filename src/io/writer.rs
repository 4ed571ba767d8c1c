//! Output adapter - a byte-chunk sink over any `AsyncWrite`.

use std::marker::PhantomData;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::sink::Sink;

/// A sink draining byte chunks into an async writer.
///
/// The factory produces a fresh writer per activation; the writer *is*
/// the sink state, threaded through every write. A chunk the transport
/// has not yet accepted suspends the pipeline inside `write_all` - that
/// wait is the drain signal - so upstream can never run ahead of the
/// transport. `on_end` shuts the writer down, flushing and finalizing it
/// exactly once. An asynchronous transport error surfaces at the
/// in-flight write or at finalization, whichever comes first.
pub struct WriterSink<F, E> {
    factory: F,
    _marker: PhantomData<fn() -> E>,
}

impl<F, E> std::fmt::Debug for WriterSink<F, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterSink")
            .field("factory", &"<function>")
            .finish()
    }
}

/// Create a byte-chunk sink from a writer factory.
///
/// # Example
///
/// ```
/// use millrace::prelude::*;
/// use millrace::{io, source};
///
/// # tokio_test::block_on(async {
/// // A `Vec<u8>` is the simplest in-memory transport.
/// let chunks = vec![b"mill".to_vec(), b"race".to_vec()];
/// let sink = io::into_writer(Vec::new);
/// let result: Result<(), std::io::Error> = source::from_iter(chunks).pipe(&sink).await;
/// assert!(result.is_ok());
/// # });
/// ```
pub fn into_writer<F, W, E>(factory: F) -> WriterSink<F, E>
where
    F: Fn() -> W + Send + Sync,
    W: AsyncWrite + Unpin + Send,
    E: From<std::io::Error> + Send,
{
    WriterSink {
        factory,
        _marker: PhantomData,
    }
}

impl<F, W, E> Sink for WriterSink<F, E>
where
    F: Fn() -> W + Send + Sync,
    W: AsyncWrite + Unpin + Send,
    E: From<std::io::Error> + Send,
{
    type Input = Vec<u8>;
    type State = W;
    type Value = ();
    type Error = E;

    async fn on_start(&self) -> Result<W, E> {
        Ok((self.factory)())
    }

    async fn on_data(&self, mut writer: W, chunk: Vec<u8>) -> Result<W, E> {
        writer.write_all(&chunk).await.map_err(E::from)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(bytes = chunk.len(), "wrote chunk");
        Ok(writer)
    }

    async fn on_end(&self, mut writer: W) -> Result<(), E> {
        writer.shutdown().await.map_err(E::from)?;
        #[cfg(feature = "tracing")]
        tracing::trace!("writer finalized");
        Ok(())
    }
}
