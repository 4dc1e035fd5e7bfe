//! Filter combinator - fail when the value does not satisfy a predicate.

use crate::writer::Writer;

/// Keeps the value only if the predicate holds, failing otherwise.
///
/// A rejected value turns the computation into a failure but everything
/// written so far is kept.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let small = tell("x".to_string())
///     .then(pure(5))
///     .filter(|n| *n > 10)
///     .run();
///
/// assert!(small.is_failed());
/// assert_eq!(small.log, "x");
/// ```
pub struct Filter<M, P> {
    pub(crate) inner: M,
    pub(crate) predicate: P,
}

impl<M, P> std::fmt::Debug for Filter<M, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &"<writer>")
            .field("predicate", &"<predicate>")
            .finish()
    }
}

impl<M: Clone, P: Clone> Clone for Filter<M, P> {
    fn clone(&self) -> Self {
        Filter {
            inner: self.inner.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<M, P> Writer for Filter<M, P>
where
    M: Writer,
    P: Fn(&M::Output) -> bool,
{
    type Output = M::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<M::Output> {
        self.inner.eval(log).filter(|value| (self.predicate)(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::writer::prelude::*;

    #[test]
    fn test_filter_passes_accepted_value() {
        let outcome = tell("x".to_string())
            .then(pure(50))
            .filter(|n| *n > 10)
            .run();

        assert_eq!(outcome.value, Some(50));
        assert_eq!(outcome.log, "x");
    }

    #[test]
    fn test_filter_does_not_run_predicate_on_failure() {
        let outcome = fail::<i32, String>()
            .filter(|_| panic!("predicate must not run"))
            .run();

        assert!(outcome.is_failed());
        assert_eq!(outcome.log, "");
    }

    #[test]
    fn test_filter_stops_later_writes() {
        let outcome = tell_one(1)
            .map(|_| 0)
            .filter(|n| *n != 0)
            .and_then(|_| tell_one(2))
            .run();

        assert!(outcome.is_failed());
        assert_eq!(outcome.log, vec![1]);
    }
}
