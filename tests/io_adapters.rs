//! Tests for the byte-transport adapters, driven by scripted mock
//! readers and writers so every transport behavior is deterministic.

#![cfg(feature = "io")]

use std::collections::VecDeque;
use std::io;
use std::io::Cursor;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

use millrace::prelude::*;
use millrace::{io as mio, sink, source};

// ---------------------------------------------------------------------------
// Scripted reader

#[derive(Clone)]
enum ReadStep {
    Chunk(Vec<u8>),
    Error(io::ErrorKind, &'static str),
}

struct ScriptReader {
    steps: VecDeque<ReadStep>,
}

impl ScriptReader {
    fn new(steps: &[ReadStep]) -> Self {
        Self {
            steps: steps.to_vec().into(),
        }
    }
}

impl AsyncRead for ScriptReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        match this.steps.pop_front() {
            Some(ReadStep::Chunk(data)) => {
                buf.put_slice(&data);
                Poll::Ready(Ok(()))
            }
            Some(ReadStep::Error(kind, msg)) => Poll::Ready(Err(io::Error::new(kind, msg))),
            None => Poll::Ready(Ok(())),
        }
    }
}

// ---------------------------------------------------------------------------
// Scripted writer

#[derive(Clone, Default)]
struct WriterScript {
    /// Accept at most this many bytes per poll_write.
    max_per_write: Option<usize>,
    /// Return Pending once before every accepted write.
    yield_before_writes: bool,
    /// Fail the nth poll_write call (1-based).
    fail_on_write_call: Option<usize>,
    /// Fail shutdown with this error.
    shutdown_error: Option<(io::ErrorKind, &'static str)>,
}

struct MockWriter {
    script: WriterScript,
    accepted: Arc<Mutex<Vec<u8>>>,
    shutdowns: Arc<AtomicUsize>,
    write_calls: usize,
    yielded: bool,
}

struct Transport {
    accepted: Arc<Mutex<Vec<u8>>>,
    shutdowns: Arc<AtomicUsize>,
}

impl Transport {
    fn accepted_bytes(&self) -> Vec<u8> {
        self.accepted.lock().unwrap().clone()
    }

    fn shutdown_count(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }
}

fn mock_writer(script: WriterScript) -> (impl Fn() -> MockWriter + Send + Sync, Transport) {
    let accepted = Arc::new(Mutex::new(Vec::new()));
    let shutdowns = Arc::new(AtomicUsize::new(0));
    let transport = Transport {
        accepted: accepted.clone(),
        shutdowns: shutdowns.clone(),
    };
    let factory = move || MockWriter {
        script: script.clone(),
        accepted: accepted.clone(),
        shutdowns: shutdowns.clone(),
        write_calls: 0,
        yielded: false,
    };
    (factory, transport)
}

impl AsyncWrite for MockWriter {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.get_mut();
        if this.script.yield_before_writes && !this.yielded {
            this.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        this.yielded = false;
        this.write_calls += 1;
        if this.script.fail_on_write_call == Some(this.write_calls) {
            return Poll::Ready(Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "transport error",
            )));
        }
        let n = this.script.max_per_write.unwrap_or(usize::MAX).min(buf.len());
        this.accepted.lock().unwrap().extend_from_slice(&buf[..n]);
        Poll::Ready(Ok(n))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        this.shutdowns.fetch_add(1, Ordering::SeqCst);
        match this.script.shutdown_error {
            Some((kind, msg)) => Poll::Ready(Err(io::Error::new(kind, msg))),
            None => Poll::Ready(Ok(())),
        }
    }
}

// ---------------------------------------------------------------------------
// Reader source

#[tokio::test]
async fn reader_delivers_chunks_in_order() {
    let steps = [
        ReadStep::Chunk(b"mill".to_vec()),
        ReadStep::Chunk(b"race".to_vec()),
    ];
    let source = mio::from_reader(move || ScriptReader::new(&steps));
    let chunks: Result<Vec<Vec<u8>>, io::Error> = source.to_vec().await;
    assert_eq!(chunks.unwrap(), vec![b"mill".to_vec(), b"race".to_vec()]);
}

#[tokio::test]
async fn reader_splits_by_chunk_size() {
    let source = mio::from_reader(|| Cursor::new(vec![7u8; 10])).with_chunk_size(4);
    let chunks: Result<Vec<Vec<u8>>, io::Error> = source.to_vec().await;
    let lens: Vec<usize> = chunks.unwrap().iter().map(Vec::len).collect();
    assert_eq!(lens, vec![4, 4, 2]);
}

#[tokio::test]
async fn reader_source_is_reusable() {
    let source = mio::from_reader(|| Cursor::new(b"abc".to_vec()));
    let first: Result<Vec<Vec<u8>>, io::Error> = source.to_vec().await;
    let second: Result<Vec<Vec<u8>>, io::Error> = source.to_vec().await;
    assert_eq!(first.unwrap(), second.unwrap());
}

#[tokio::test]
async fn read_error_fails_the_activation_after_delivered_chunks() {
    let steps = [
        ReadStep::Chunk(b"ok".to_vec()),
        ReadStep::Error(io::ErrorKind::Other, "read failed"),
    ];
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    let source = mio::from_reader(move || ScriptReader::new(&steps));
    let count = sink::fold(0usize, move |acc, _chunk: Vec<u8>| {
        counter.fetch_add(1, Ordering::SeqCst);
        acc + 1
    });
    let result: Result<usize, io::Error> = source.pipe(&count).await;
    let err = result.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert_eq!(err.to_string(), "read failed");
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failing_sink_start_opens_no_reader() {
    let opened = Arc::new(AtomicUsize::new(0));
    let counter = opened.clone();
    let source = mio::from_reader(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Cursor::new(b"abc".to_vec())
    });
    let result = source
        .pipe(&sink::from_fn(
            || async { Err::<(), io::Error>(io::Error::other("start failed")) },
            |state: (), _chunk: Vec<u8>| async move { Ok(state) },
            |_state| async { Ok(()) },
        ))
        .await;
    assert_eq!(result.unwrap_err().to_string(), "start failed");
    assert_eq!(opened.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failing_sink_data_stops_the_reader() {
    let source = mio::from_reader(|| Cursor::new(vec![1u8; 8])).with_chunk_size(2);
    let sink = sink::from_fn(
        || async { Ok::<usize, io::Error>(0) },
        |seen: usize, _chunk: Vec<u8>| async move {
            if seen == 1 {
                Err(io::Error::other("data failed"))
            } else {
                Ok(seen + 1)
            }
        },
        |seen| async move { Ok(seen) },
    );
    let result = source.pipe(&sink).await;
    assert_eq!(result.unwrap_err().to_string(), "data failed");
}

#[tokio::test]
async fn failing_sink_end_fails_the_activation() {
    let source = mio::from_reader(|| Cursor::new(b"abc".to_vec()));
    let sink = sink::from_fn(
        || async { Ok::<(), io::Error>(()) },
        |state: (), _chunk: Vec<u8>| async move { Ok(state) },
        |_state| async { Err::<(), io::Error>(io::Error::other("end failed")) },
    );
    let result = source.pipe(&sink).await;
    assert_eq!(result.unwrap_err().to_string(), "end failed");
}

// ---------------------------------------------------------------------------
// Writer sink

#[tokio::test]
async fn writer_accepts_chunks_in_order() {
    let (factory, transport) = mock_writer(WriterScript::default());
    let chunks = vec![b"mill".to_vec(), b"race".to_vec()];
    let result: Result<(), io::Error> = source::from_iter(chunks).pipe(&mio::into_writer(factory)).await;
    assert!(result.is_ok());
    assert_eq!(transport.accepted_bytes(), b"millrace");
    assert_eq!(transport.shutdown_count(), 1);
}

#[tokio::test]
async fn writer_preserves_order_under_partial_accepts() {
    let (factory, transport) = mock_writer(WriterScript {
        max_per_write: Some(3),
        yield_before_writes: true,
        ..WriterScript::default()
    });
    let payload: Vec<u8> = (0..10).collect();
    let chunks = vec![payload[..6].to_vec(), payload[6..].to_vec()];
    let result: Result<(), io::Error> = source::from_iter(chunks).pipe(&mio::into_writer(factory)).await;
    assert!(result.is_ok());
    assert_eq!(transport.accepted_bytes(), payload);
    assert_eq!(transport.shutdown_count(), 1);
}

#[tokio::test]
async fn empty_stream_still_finalizes_the_writer() {
    let (factory, transport) = mock_writer(WriterScript::default());
    let result: Result<(), io::Error> = source::empty::<Vec<u8>, _>()
        .pipe(&mio::into_writer(factory))
        .await;
    assert!(result.is_ok());
    assert!(transport.accepted_bytes().is_empty());
    assert_eq!(transport.shutdown_count(), 1);
}

#[tokio::test]
async fn error_during_a_write_rejects_with_it() {
    // The chunk needs two poll_write calls; the second one fails, so the
    // error surfaces mid-chunk.
    let (factory, transport) = mock_writer(WriterScript {
        max_per_write: Some(2),
        fail_on_write_call: Some(2),
        ..WriterScript::default()
    });
    let chunks = vec![b"abcde".to_vec()];
    let result: Result<(), io::Error> = source::from_iter(chunks).pipe(&mio::into_writer(factory)).await;
    let err = result.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(err.to_string(), "transport error");
    assert_eq!(transport.accepted_bytes(), b"ab");
}

#[tokio::test]
async fn error_between_two_writes_rejects_with_it() {
    // The first chunk is fully accepted; the error hits the first
    // poll_write of the second chunk.
    let (factory, transport) = mock_writer(WriterScript {
        fail_on_write_call: Some(2),
        ..WriterScript::default()
    });
    let chunks = vec![b"abc".to_vec(), b"def".to_vec()];
    let result: Result<(), io::Error> = source::from_iter(chunks).pipe(&mio::into_writer(factory)).await;
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "transport error");
    assert_eq!(transport.accepted_bytes(), b"abc");
}

#[tokio::test]
async fn error_during_finalization_rejects_with_it() {
    let (factory, transport) = mock_writer(WriterScript {
        shutdown_error: Some((io::ErrorKind::BrokenPipe, "shutdown failed")),
        ..WriterScript::default()
    });
    let chunks = vec![b"abc".to_vec()];
    let result: Result<(), io::Error> = source::from_iter(chunks).pipe(&mio::into_writer(factory)).await;
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "shutdown failed");
    // Every write had been accepted before finalization failed.
    assert_eq!(transport.accepted_bytes(), b"abc");
    assert_eq!(transport.shutdown_count(), 1);
}

#[tokio::test]
async fn transport_error_after_the_last_write_surfaces_at_finalization() {
    // An asynchronous transport failure raised between the last accepted
    // write and finalization becomes the activation's error.
    let (factory, transport) = mock_writer(WriterScript {
        shutdown_error: Some((io::ErrorKind::ConnectionReset, "connection reset")),
        ..WriterScript::default()
    });
    let chunks = vec![b"abc".to_vec(), b"def".to_vec()];
    let result: Result<(), io::Error> = source::from_iter(chunks).pipe(&mio::into_writer(factory)).await;
    let err = result.unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
    assert_eq!(transport.accepted_bytes(), b"abcdef");
}
