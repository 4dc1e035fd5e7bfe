//! TapTell combinator - write an entry derived from a successful value.

use crate::writer::{append, Writer};

/// Writes an entry computed from the value, then returns the value unchanged.
///
/// If the inner writer fails, nothing extra is written.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("start".to_string())
///     .map(|_| 42)
///     .tap_tell(|n| vec![format!("result: {}", n)])
///     .run();
///
/// assert_eq!(outcome.value, Some(42));
/// assert_eq!(outcome.log, vec!["start".to_string(), "result: 42".to_string()]);
/// ```
pub struct TapTell<M, F> {
    pub(crate) inner: M,
    pub(crate) f: F,
}

impl<M, F> std::fmt::Debug for TapTell<M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapTell")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<M: Clone, F: Clone> Clone for TapTell<M, F> {
    fn clone(&self) -> Self {
        TapTell {
            inner: self.inner.clone(),
            f: self.f.clone(),
        }
    }
}

impl<M, F, W2> Writer for TapTell<M, F>
where
    M: Writer,
    F: Fn(&M::Output) -> W2,
    W2: Into<M::Log>,
{
    type Output = M::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<M::Output> {
        let value = self.inner.eval(log)?;
        append(log, (self.f)(&value).into());
        Some(value)
    }
}
