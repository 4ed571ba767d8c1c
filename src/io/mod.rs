//! Adapters between the Source/Sink core and concrete byte transports.
//!
//! The core is transport-agnostic; these adapters connect it to tokio's
//! `AsyncRead`/`AsyncWrite`. Both take a factory producing a fresh
//! handle per activation, and both respect the pipeline's backpressure:
//! the reader never reads ahead of the sink's acceptance, and the writer
//! suspends the pipeline until the transport accepts each chunk.
//!
//! Available with the `io` feature (on by default).

mod reader;
mod writer;

pub use reader::{from_reader, ReaderSource};
pub use writer::{into_writer, WriterSink};
