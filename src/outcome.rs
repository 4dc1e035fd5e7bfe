//! The result of evaluating a writer once.

use crate::WriterError;

/// One evaluation outcome: a value (or none, if the computation failed) and
/// the log accumulated along the way.
///
/// A failed outcome has `value == None`, so there is no placeholder value a
/// caller could mistake for a real one. The log of a failed outcome still holds
/// every write made before the failure.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell("a".to_string())
///     .and_then(|_| tell("b".to_string()))
///     .map(|_| 1)
///     .run();
///
/// assert!(!outcome.is_failed());
/// assert_eq!(outcome.value, Some(1));
/// assert_eq!(outcome.log, "ab");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriterOutcome<A, W> {
    /// The computed value, `None` when the computation failed.
    pub value: Option<A>,
    /// Everything written, in order.
    pub log: W,
}

impl<A, W> WriterOutcome<A, W> {
    /// Build an outcome from its parts.
    pub fn new(value: Option<A>, log: W) -> Self {
        WriterOutcome { value, log }
    }

    /// A successful outcome.
    pub fn success(value: A, log: W) -> Self {
        WriterOutcome {
            value: Some(value),
            log,
        }
    }

    /// A failed outcome carrying the log written before the failure.
    pub fn failure(log: W) -> Self {
        WriterOutcome { value: None, log }
    }

    /// The failure flag.
    pub fn is_failed(&self) -> bool {
        self.value.is_none()
    }

    /// Check whether the computation produced a value.
    pub fn is_success(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the value, if any.
    pub fn value(&self) -> Option<&A> {
        self.value.as_ref()
    }

    /// Borrow the accumulated log.
    pub fn log(&self) -> &W {
        &self.log
    }

    /// Split into `(value, log)`.
    pub fn into_parts(self) -> (Option<A>, W) {
        (self.value, self.log)
    }

    /// Transform the value, leaving the log and the failure flag alone.
    pub fn map<B, F>(self, f: F) -> WriterOutcome<B, W>
    where
        F: FnOnce(A) -> B,
    {
        WriterOutcome {
            value: self.value.map(f),
            log: self.log,
        }
    }

    /// Convert to a `Result`, keeping the log on both sides.
    ///
    /// ```rust
    /// use scrivener::{WriterError, WriterOutcome};
    ///
    /// let ok = WriterOutcome::success(1, vec!["done"]);
    /// assert_eq!(ok.into_result(), Ok((1, vec!["done"])));
    ///
    /// let failed = WriterOutcome::<i32, _>::failure(vec!["half"]);
    /// assert_eq!(failed.into_result(), Err(WriterError::Failed { log: vec!["half"] }));
    /// ```
    pub fn into_result(self) -> Result<(A, W), WriterError<W>> {
        match self.value {
            Some(value) => Ok((value, self.log)),
            None => Err(WriterError::Failed { log: self.log }),
        }
    }
}

impl<A, W> From<WriterOutcome<A, W>> for (Option<A>, W) {
    fn from(outcome: WriterOutcome<A, W>) -> Self {
        outcome.into_parts()
    }
}
