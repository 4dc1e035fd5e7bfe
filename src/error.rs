//! Error type for leaving the writer world through `Result`.

use std::any::Any;

/// Why a writer produced no value.
///
/// A failed writer is an ordinary [`WriterOutcome`](crate::WriterOutcome); this
/// error only appears at the boundary, from
/// [`WriterOutcome::into_result`](crate::WriterOutcome::into_result) and
/// [`TryFun::attempt`](crate::writer::TryFun::attempt).
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
/// use scrivener::WriterError;
///
/// let writer = tell_one("loaded".to_string())
///     .map(|_| 3)
///     .filter(|n| *n > 10);
///
/// match writer.run().into_result() {
///     Err(WriterError::Failed { log }) => assert_eq!(log, vec!["loaded".to_string()]),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterError<W> {
    /// The computation failed (a rejected filter or an explicit `fail`).
    /// Carries everything logged before the failure.
    Failed {
        /// Log accumulated up to the failure.
        log: W,
    },
    /// A closure panicked during evaluation and the panic was caught.
    Panicked {
        /// The panic payload, when it was a string.
        message: String,
    },
}

impl<W> WriterError<W> {
    /// The log carried by a `Failed` error.
    pub fn log(&self) -> Option<&W> {
        match self {
            WriterError::Failed { log } => Some(log),
            WriterError::Panicked { .. } => None,
        }
    }

    /// Check whether this error came from a caught panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, WriterError::Panicked { .. })
    }

    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        WriterError::Panicked {
            message: panic_message(payload),
        }
    }
}

impl<W> std::fmt::Display for WriterError<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriterError::Failed { .. } => write!(f, "writer computation failed"),
            WriterError::Panicked { message } => {
                write!(f, "writer computation panicked: {}", message)
            }
        }
    }
}

impl<W: std::fmt::Debug> std::error::Error for WriterError<W> {}

/// Render a panic payload as text.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
