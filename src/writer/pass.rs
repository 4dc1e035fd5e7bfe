//! Pass combinator - let the computation decide how its log is rewritten.

use crate::writer::{append, Writer};
use crate::Monoid;

/// Uses part of the value to rewrite the log.
///
/// The inner writer produces `(value, rewrite)`. On success `rewrite` is
/// applied to the inner log and only `value` is returned. On failure there is
/// no rewrite function, so the log is written unchanged.
///
/// `censor(f)` is `pass` with a rewrite that does not depend on the value.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell(vec!["a".to_string(), "b".to_string(), "c".to_string()])
///     .map(|_| (42, |logs: Vec<String>| logs.into_iter().take(2).collect()))
///     .pass()
///     .run();
///
/// assert_eq!(outcome.value, Some(42));
/// assert_eq!(outcome.log, vec!["a".to_string(), "b".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Pass<M> {
    pub(crate) inner: M,
}

impl<M, A, G> Writer for Pass<M>
where
    M: Writer<Output = (A, G)>,
    G: FnOnce(M::Log) -> M::Log,
{
    type Output = A;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<A> {
        let mut own = M::Log::empty();
        match self.inner.eval(&mut own) {
            Some((value, rewrite)) => {
                append(log, rewrite(own));
                Some(value)
            }
            None => {
                append(log, own);
                None
            }
        }
    }
}
