//! Prelude module for convenient imports.
//!
//! ```rust
//! use scrivener::writer::prelude::*;
//!
//! let outcome = tell_one("Starting".to_string())
//!     .map(|_| 42)
//!     .tap_tell(|n| vec![format!("Result: {}", n)])
//!     .run();
//!
//! assert_eq!(outcome.value, Some(42));
//! assert_eq!(outcome.log, vec!["Starting".to_string(), "Result: 42".to_string()]);
//! ```

// Core traits
pub use crate::writer::ext::WriterExt;
pub use crate::writer::trait_def::Writer;

// Constructors
pub use crate::writer::fail::{fail, Fail};
pub use crate::writer::from_fn::{from_fn, FromFn};
pub use crate::writer::pure::{pure, Pure};
pub use crate::writer::tell::{tell, tell_one, Tell};

// Boxed type
pub use crate::writer::boxed::BoxedWriter;

// Collection combinators
pub use crate::writer::combinators::{fold_writer, traverse_writer};

// Panic protection
pub use crate::writer::try_fun::{try_fun, try_fun_with};
pub use crate::writer::try_write::{try_write, try_write_preserving, PartialLog};

#[cfg(feature = "tracing")]
pub use crate::writer::instrument::WriterTracingExt;
