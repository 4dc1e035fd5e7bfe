//! # Scrivener
//!
//! Lazy Writer computations: a value produced together with a log accumulated
//! through a [`Monoid`].
//!
//! A writer is a description. Building one runs nothing; evaluating it
//! produces a [`WriterOutcome`] holding the value (or `None` on failure) and
//! everything written along the way. Logs can be message lists, strings,
//! counters, costs, or tuples of those.
//!
//! ## Quick Example
//!
//! ```rust
//! use scrivener::prelude::*;
//!
//! fn checkout(total: u32) -> impl Writer<Output = u32, Log = Vec<String>> {
//!     tell_one(format!("cart total {}", total))
//!         .then(pure(total))
//!         .filter(|t| *t > 0)
//!         .tap_tell(|t| vec![format!("charged {}", t)])
//! }
//!
//! let outcome = checkout(30).run();
//! assert_eq!(outcome.value, Some(30));
//! assert_eq!(outcome.log, vec!["cart total 30".to_string(), "charged 30".to_string()]);
//!
//! // Failure keeps everything written before it.
//! let outcome = checkout(0).run();
//! assert!(outcome.is_failed());
//! assert_eq!(outcome.log, vec!["cart total 0".to_string()]);
//! ```
//!
//! ## Features
//!
//! - `tracing` - span instrumentation and warnings for caught panics
//! - `serde` - serialization for [`WriterOutcome`] and the numeric monoids
//! - `proptest` - `Arbitrary` implementations in [`testing`]
//!
//! For a longer walkthrough, see `demos/audit_trail.rs`.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod monoid;
pub mod outcome;
pub mod semigroup;
pub mod testing;
pub mod writer;

// Re-exports
pub use error::WriterError;
pub use monoid::{fold_all, Monoid, Product, Sum};
pub use outcome::WriterOutcome;
pub use semigroup::Semigroup;
pub use writer::{Writer, WriterExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::WriterError;
    pub use crate::monoid::{Monoid, Product, Sum};
    pub use crate::outcome::WriterOutcome;
    pub use crate::semigroup::Semigroup;
    pub use crate::writer::prelude::*;
}
