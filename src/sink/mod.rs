//! The Sink half of the streaming contract.
//!
//! A [`Sink`] is a pure description of a consumer: produce an initial
//! state (`on_start`), fold one item at a time into that state
//! (`on_data`), and convert the final state into a result (`on_end`).
//! Nothing runs until a [`Source`](crate::source::Source) drives it.
//!
//! # Constructors
//!
//! - [`unit`] - ignore everything, resolve to `()`
//! - [`constant`] - ignore everything, resolve to a fixed value
//! - [`fail`] - fail deterministically on the first operation
//! - [`fold`] / [`fold_async`] - reduce the stream with a function
//! - [`collect`] - gather all items into a `Vec`
//! - [`from_fn`] - assemble a sink from three closures
//!
//! # Combinators
//!
//! [`SinkExt`] provides `map`, `map_async` and `parallel` for every sink.

mod combinators;
mod ext;
mod trait_def;

pub use combinators::{
    collect, constant, fail, fold, fold_async, from_fn, unit, Collect, Constant, Fail, Fold,
    FoldAsync, FromFn, Map, MapAsync, Parallel,
};
pub use ext::SinkExt;
pub use trait_def::Sink;
