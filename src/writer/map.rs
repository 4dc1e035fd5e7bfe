//! Map combinator - transform the value of a writer.

use crate::writer::Writer;

/// Transforms the value of a writer; the log passes through unchanged.
///
/// Equivalent to `and_then(|x| pure(f(x)))`. A failed writer stays failed and
/// `f` is not called.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("logged".to_string())
///     .map(|_| 42)
///     .map(|n| n * 2)
///     .run();
///
/// assert_eq!(outcome.value, Some(84));
/// assert_eq!(outcome.log, vec!["logged".to_string()]);
/// ```
pub struct Map<M, F> {
    pub(crate) inner: M,
    pub(crate) f: F,
}

impl<M, F> std::fmt::Debug for Map<M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<M: Clone, F: Clone> Clone for Map<M, F> {
    fn clone(&self) -> Self {
        Map {
            inner: self.inner.clone(),
            f: self.f.clone(),
        }
    }
}

impl<M, F, B> Writer for Map<M, F>
where
    M: Writer,
    F: Fn(M::Output) -> B,
{
    type Output = B;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<B> {
        self.inner.eval(log).map(&self.f)
    }
}
