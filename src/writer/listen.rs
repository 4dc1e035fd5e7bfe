//! Listen and Listens combinators - expose the log as part of the value.

use crate::writer::{append, Writer};
use crate::Monoid;

/// Pairs the value with the log the inner writer produced.
///
/// The log is exposed, not duplicated: it is still written upward exactly
/// once. Only the inner writer's own writes are captured, never what an
/// enclosing computation wrote before it.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("logged".to_string())
///     .map(|_| 42)
///     .listen()
///     .run();
///
/// assert_eq!(outcome.value, Some((42, vec!["logged".to_string()])));
/// assert_eq!(outcome.log, vec!["logged".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Listen<M> {
    pub(crate) inner: M,
}

impl<M> Writer for Listen<M>
where
    M: Writer,
    M::Log: Clone,
{
    type Output = (M::Output, M::Log);
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<Self::Output> {
        let mut own = M::Log::empty();
        let value = self.inner.eval(&mut own);
        let heard = own.clone();
        append(log, own);
        value.map(|value| (value, heard))
    }
}

/// Pairs the value with a projection of the inner writer's log.
///
/// The written log itself is left untouched.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("a".to_string())
///     .then(tell_one("b".to_string()))
///     .map(|_| "done")
///     .listens(|log| log.len())
///     .run();
///
/// assert_eq!(outcome.value, Some(("done", 2)));
/// assert_eq!(outcome.log, vec!["a".to_string(), "b".to_string()]);
/// ```
pub struct Listens<M, F> {
    pub(crate) inner: M,
    pub(crate) f: F,
}

impl<M, F> std::fmt::Debug for Listens<M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listens")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<M: Clone, F: Clone> Clone for Listens<M, F> {
    fn clone(&self) -> Self {
        Listens {
            inner: self.inner.clone(),
            f: self.f.clone(),
        }
    }
}

impl<M, F, B> Writer for Listens<M, F>
where
    M: Writer,
    F: Fn(&M::Log) -> B,
{
    type Output = (M::Output, B);
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<Self::Output> {
        let mut own = M::Log::empty();
        let value = self.inner.eval(&mut own);
        let result = value.map(|value| (value, (self.f)(&own)));
        append(log, own);
        result
    }
}
