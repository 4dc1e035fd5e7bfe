//! Fold combinators - reduce the value, or the value and the log, to a new value.

use crate::writer::{append, Writer};
use crate::Monoid;

/// Folds the value into a starting state.
///
/// Yields `f(initial, value)`; the log is untouched. The initial state is
/// cloned on each evaluation. On failure nothing is folded and the result
/// fails too.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("read 3 items".to_string())
///     .map(|_| vec![1, 2, 3])
///     .fold(100, |total, items| total + items.iter().sum::<i32>())
///     .run();
///
/// assert_eq!(outcome.value, Some(106));
/// assert_eq!(outcome.log, vec!["read 3 items".to_string()]);
/// ```
pub struct Fold<M, S, F> {
    pub(crate) inner: M,
    pub(crate) initial: S,
    pub(crate) f: F,
}

impl<M, S: std::fmt::Debug, F> std::fmt::Debug for Fold<M, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold")
            .field("inner", &"<writer>")
            .field("initial", &self.initial)
            .field("f", &"<function>")
            .finish()
    }
}

impl<M: Clone, S: Clone, F: Clone> Clone for Fold<M, S, F> {
    fn clone(&self) -> Self {
        Fold {
            inner: self.inner.clone(),
            initial: self.initial.clone(),
            f: self.f.clone(),
        }
    }
}

impl<M, S, F> Writer for Fold<M, S, F>
where
    M: Writer,
    S: Clone,
    F: Fn(S, M::Output) -> S,
{
    type Output = S;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<S> {
        let value = self.inner.eval(log)?;
        Some((self.f)(self.initial.clone(), value))
    }
}

/// Folds the value into the log, producing a value of the log type.
///
/// Yields `f(log, value)` where `log` is what the inner writer wrote. The
/// written log itself is not changed.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("loaded".to_string())
///     .map(|_| 7)
///     .fold_log(|mut log, n| {
///         log.push(format!("value {}", n));
///         log
///     })
///     .run();
///
/// assert_eq!(outcome.value, Some(vec!["loaded".to_string(), "value 7".to_string()]));
/// assert_eq!(outcome.log, vec!["loaded".to_string()]);
/// ```
pub struct FoldLog<M, F> {
    pub(crate) inner: M,
    pub(crate) f: F,
}

impl<M, F> std::fmt::Debug for FoldLog<M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoldLog")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<M: Clone, F: Clone> Clone for FoldLog<M, F> {
    fn clone(&self) -> Self {
        FoldLog {
            inner: self.inner.clone(),
            f: self.f.clone(),
        }
    }
}

impl<M, F> Writer for FoldLog<M, F>
where
    M: Writer,
    M::Log: Clone,
    F: Fn(M::Log, M::Output) -> M::Log,
{
    type Output = M::Log;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<M::Log> {
        let mut own = M::Log::empty();
        let value = self.inner.eval(&mut own);
        let folded = value.map(|value| (self.f)(own.clone(), value));
        append(log, own);
        folded
    }
}
