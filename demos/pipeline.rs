//! End-to-end demo: in-memory byte transports driven through the full
//! pipeline, with transform, fan-out and a writer finalization.
//!
//! Run with `cargo run --example pipeline`.

use std::io::Cursor;

use millrace::prelude::*;
use millrace::{io, sink, source};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let text = "the mill turns\nthe race runs\nthe wheel grinds\n";

    // Plain value pipeline: filter, transform, reduce.
    let sum = source::from_iter::<_, std::io::Error>(1..=10)
        .filter(|n| n % 2 == 0)
        .map(|n| n * n)
        .fold(0, |acc, n| acc + n)
        .await?;
    println!("sum of even squares up to 10: {sum}");

    // Byte pipeline: read small chunks, fan them out to two folds
    // consuming the same stream concurrently.
    let reader = io::from_reader::<_, _, std::io::Error>(move || Cursor::new(text.as_bytes().to_vec()))
        .with_chunk_size(8);
    let stats = sink::fold(0usize, |chunks, _c: Vec<u8>| chunks + 1)
        .parallel(sink::fold(0usize, |bytes, c: Vec<u8>| bytes + c.len()));
    let (chunks, bytes) = reader.pipe(&stats).await?;
    println!("read {bytes} bytes in {chunks} chunks");

    // Transform the chunks and drain them into a writer; the writer is
    // finalized once the stream ends.
    let shouted = io::from_reader::<_, _, std::io::Error>(move || Cursor::new(text.as_bytes().to_vec()))
        .with_chunk_size(16)
        .map(|chunk: Vec<u8>| chunk.to_ascii_uppercase());
    shouted
        .pipe(&io::into_writer::<_, _, std::io::Error>(tokio::io::stdout))
        .await?;

    Ok(())
}
