//! Concrete combinator and constructor types for sources.
//!
//! These are the types returned by the constructors in [`crate::source`]
//! and the methods on [`SourceExt`](crate::source::SourceExt). Most users
//! never name them directly.

mod concat;
mod empty;
mod fail;
mod filter;
mod flat_map;
mod iter;
mod map;
mod once;

pub use concat::{Concat, ConcatWith};
pub use empty::{empty, Empty};
pub use fail::{fail, Fail};
pub use filter::{Filter, FilterAsync, FilterWithState};
pub use flat_map::FlatMap;
pub use iter::{from_iter, Iter};
pub use map::{Map, MapAsync, MapWithState};
pub use once::{once, Once};
