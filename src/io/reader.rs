//! Input adapter - a byte-chunk source over any `AsyncRead`.

use std::marker::PhantomData;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::sink::Sink;
use crate::source::Source;

const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// A source of byte chunks read from an async reader.
///
/// The factory produces a fresh reader per activation, so the source is
/// reusable like any other. One chunk is read at a time: the next read
/// is not issued until the sink has accepted the previous chunk, so the
/// adapter never reads ahead of the pipeline. A read error fails the
/// activation; end-of-input triggers the sink's `on_end` through the
/// normal protocol.
pub struct ReaderSource<F, E> {
    factory: F,
    chunk_size: usize,
    _marker: PhantomData<fn() -> E>,
}

impl<F, E> std::fmt::Debug for ReaderSource<F, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderSource")
            .field("factory", &"<function>")
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

/// Create a byte-chunk source from a reader factory.
///
/// Errors convert through `Error: From<io::Error>`; use
/// `std::io::Error` directly when nothing richer is needed.
pub fn from_reader<F, R, E>(factory: F) -> ReaderSource<F, E>
where
    F: Fn() -> R + Send + Sync,
    R: AsyncRead + Unpin + Send,
    E: From<std::io::Error> + Send,
{
    ReaderSource {
        factory,
        chunk_size: DEFAULT_CHUNK_SIZE,
        _marker: PhantomData,
    }
}

impl<F, E> ReaderSource<F, E> {
    /// Set the read buffer size (default 8 KiB).
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        self.chunk_size = chunk_size;
        self
    }
}

impl<F, R, E> Source for ReaderSource<F, E>
where
    F: Fn() -> R + Send + Sync,
    R: AsyncRead + Unpin + Send,
    E: From<std::io::Error> + Send,
{
    type Output = Vec<u8>;
    type Error = E;

    async fn drain<S>(&self, sink: &S, mut state: S::State) -> Result<S::State, E>
    where
        S: Sink<Input = Vec<u8>, Error = E>,
    {
        let mut reader = (self.factory)();
        loop {
            let mut chunk = vec![0u8; self.chunk_size];
            let n = reader.read(&mut chunk).await.map_err(E::from)?;
            if n == 0 {
                return Ok(state);
            }
            chunk.truncate(n);
            #[cfg(feature = "tracing")]
            tracing::trace!(bytes = n, "read chunk");
            state = sink.on_data(state, chunk).await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn zero_chunk_size_is_rejected() {
        let _ = from_reader::<_, _, std::io::Error>(|| Cursor::new(Vec::<u8>::new()))
            .with_chunk_size(0);
    }
}
