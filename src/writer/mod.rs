//! Writer computations: a value plus a log accumulated through a monoid.
//!
//! A writer replaces a `&mut Vec<String>` threaded through every function.
//! Instead of:
//!
//! ```rust,ignore
//! fn process(x: i32, logs: &mut Vec<String>) -> Option<i32> {
//!     logs.push("Starting".into());
//!     let y = step1(x, logs)?;
//!     logs.push(format!("Step 1: {}", y));
//!     Some(y)
//! }
//! ```
//!
//! build the computation once and evaluate it when needed:
//!
//! ```rust
//! use scrivener::writer::prelude::*;
//!
//! let process = tell_one("Starting".to_string())
//!     .then(pure(21))
//!     .map(|x| x * 2)
//!     .tap_tell(|y| vec![format!("Step 1: {}", y)]);
//!
//! let outcome = process.run();
//! assert_eq!(outcome.value, Some(42));
//! assert_eq!(outcome.log, vec!["Starting".to_string(), "Step 1: 42".to_string()]);
//! ```
//!
//! # Evaluation
//!
//! Building a writer runs nothing. [`WriterExt::run`] evaluates it from an
//! empty log and returns a [`WriterOutcome`](crate::WriterOutcome). Running
//! again re-executes the computation from scratch; no result is cached.
//!
//! # Failure
//!
//! A writer fails through [`fail`], a rejected [`WriterExt::filter`] or a
//! [`from_fn`] evaluator returning a failed outcome. Failure short-circuits
//! every later step and keeps everything written before it. Panics are not
//! failures; [`try_write`], [`try_write_preserving`] and [`try_fun`] convert
//! them.
//!
//! # Module Structure
//!
//! - [`Writer`] - the evaluator trait
//! - [`WriterExt`] - combinators (`and_then`, `map`, `filter`, `listen`, `censor`, ...)
//! - [`pure`], [`tell`], [`tell_one`], [`fail`], [`from_fn`] - constructors
//! - [`traverse_writer`], [`fold_writer`] - collection combinators
//! - [`try_write`], [`try_fun`] - panic protection
//! - [`BoxedWriter`] - type erasure

mod aggregate;
mod bind;
mod boxed;
mod censor;
mod combinators;
mod ext;
mod fail;
mod filter;
mod fold;
mod for_each;
mod from_fn;
#[cfg(feature = "tracing")]
mod instrument;
mod listen;
mod map;
mod pass;
pub mod prelude;
mod pure;
mod tap_tell;
mod tell;
mod trait_def;
mod try_fun;
mod try_write;
mod zip;

pub use trait_def::Writer;

pub use ext::WriterExt;

pub use fail::{fail, Fail};
pub use from_fn::{from_fn, FromFn};
pub use pure::{pure, Pure};
pub use tell::{tell, tell_one, Tell};

pub use aggregate::{Count, Exists, ForAll, Summed};
pub use bind::{Bind, Then};
pub use censor::Censor;
pub use filter::Filter;
pub use fold::{Fold, FoldLog};
pub use for_each::ForEach;
pub use listen::{Listen, Listens};
pub use map::Map;
pub use pass::Pass;
pub use tap_tell::TapTell;
pub use zip::Zip;

pub use boxed::BoxedWriter;

pub use combinators::{fold_writer, traverse_writer, FoldWriter, TraverseWriter};

pub use try_fun::{try_fun, try_fun_with, TryFun, TryFunWith};
pub use try_write::{try_write, try_write_preserving, PartialLog, TryWrite};

#[cfg(feature = "tracing")]
pub use instrument::{Instrument, WriterTracingExt};

use crate::Monoid;

/// Append `more` after everything already in `log`.
pub(crate) fn append<W: Monoid>(log: &mut W, more: W) {
    let so_far = std::mem::replace(log, W::empty());
    *log = so_far.combine(more);
}
