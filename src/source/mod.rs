//! The Source half of the streaming contract.
//!
//! A [`Source`] is a pure description of a producer. It holds no running
//! computation and buffers nothing: piping it into a
//! [`Sink`](crate::sink::Sink) is what activates the pipeline, and every
//! item waits for the sink's acceptance of the previous one.
//!
//! # Constructors
//!
//! - [`empty`] - start then end, no data
//! - [`once`] - a single item
//! - [`fail`] - a predetermined failure that never touches the sink
//! - [`from_iter`] - the items of any clonable iterable, in order
//!
//! # Combinators
//!
//! [`SourceExt`] provides `map`, `map_with_state`, `map_async`, `filter`,
//! `filter_with_state`, `filter_async`, `flat_map`, `concat`,
//! `concat_with`, plus the terminal helpers `fold`, `fold_async` and
//! `to_vec`.

mod combinators;
mod ext;
pub(crate) mod stateful;
mod trait_def;

pub use combinators::{
    empty, fail, from_iter, once, Concat, ConcatWith, Empty, Fail, Filter, FilterAsync,
    FilterWithState, FlatMap, Iter, Map, MapAsync, MapWithState, Once,
};
pub use ext::SourceExt;
pub use trait_def::Source;
