//! Censor combinator - rewrite the log of a writer.

use crate::writer::{append, Writer};
use crate::Monoid;

/// Rewrites the inner writer's log before it is written upward.
///
/// The rewritten log replaces the original; nothing of the original is
/// appended besides it. The value is untouched. The rewrite also applies when
/// the inner writer failed, so a failure cannot leak writes the censor would
/// have removed.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("debug: verbose".to_string())
///     .then(tell_one("info: important".to_string()))
///     .censor(|logs| logs.into_iter().filter(|l| !l.starts_with("debug")).collect())
///     .run();
///
/// assert_eq!(outcome.log, vec!["info: important".to_string()]);
/// ```
pub struct Censor<M, F> {
    pub(crate) inner: M,
    pub(crate) f: F,
}

impl<M, F> std::fmt::Debug for Censor<M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Censor")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<M: Clone, F: Clone> Clone for Censor<M, F> {
    fn clone(&self) -> Self {
        Censor {
            inner: self.inner.clone(),
            f: self.f.clone(),
        }
    }
}

impl<M, F> Writer for Censor<M, F>
where
    M: Writer,
    F: Fn(M::Log) -> M::Log,
{
    type Output = M::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<M::Output> {
        let mut own = M::Log::empty();
        let value = self.inner.eval(&mut own);
        append(log, (self.f)(own));
        value
    }
}
