//! Zip combinator - run two independent writers and pair their values.

use crate::writer::Writer;

/// Runs two writers in order and pairs their values.
///
/// The left writer's log comes first. If the left writer fails, the right one
/// is not evaluated.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let user = tell_one("fetched user".to_string()).map(|_| "ada");
/// let role = tell_one("fetched role".to_string()).map(|_| "admin");
///
/// let outcome = user.zip(role).run();
/// assert_eq!(outcome.value, Some(("ada", "admin")));
/// assert_eq!(outcome.log, vec!["fetched user".to_string(), "fetched role".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Zip<M, N> {
    pub(crate) first: M,
    pub(crate) second: N,
}

impl<M, N> Writer for Zip<M, N>
where
    M: Writer,
    N: Writer<Log = M::Log>,
{
    type Output = (M::Output, N::Output);
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<Self::Output> {
        let left = self.first.eval(log)?;
        let right = self.second.eval(log)?;
        Some((left, right))
    }
}
