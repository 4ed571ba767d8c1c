//! Demonstrates tracing integration with the byte-transport adapters.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use std::io::Cursor;

use millrace::prelude::*;
use millrace::{io, sink};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Set up tracing subscriber; the adapters emit at TRACE level.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("starting transfer");

    let text = "the mill turns\nthe race runs\nthe wheel grinds\n";
    let reader = io::from_reader::<_, _, std::io::Error>(move || Cursor::new(text.as_bytes().to_vec()))
        .with_chunk_size(8);

    // Every chunk read emits a trace event as it moves through the pipe.
    let bytes = reader
        .pipe(&sink::fold(0usize, |n, chunk: Vec<u8>| n + chunk.len()))
        .await?;
    tracing::info!(bytes, "count pass complete");

    // Same source again; each accepted write and the finalization are traced.
    reader
        .pipe(&io::into_writer::<_, _, std::io::Error>(tokio::io::stdout))
        .await?;
    tracing::info!("writer finalized");

    Ok(())
}
