//! Concrete combinator and constructor types for sinks.
//!
//! These are the types returned by the constructors in [`crate::sink`]
//! and the methods on [`SinkExt`](crate::sink::SinkExt). Most users never
//! name them directly.

mod collect;
mod constant;
mod fail;
mod fold;
mod from_fn;
mod map;
mod parallel;

pub use collect::{collect, Collect};
pub use constant::{constant, unit, Constant};
pub use fail::{fail, Fail};
pub use fold::{fold, fold_async, Fold, FoldAsync};
pub use from_fn::{from_fn, FromFn};
pub use map::{Map, MapAsync};
pub use parallel::Parallel;
