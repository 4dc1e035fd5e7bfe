//! ForEach combinator - hand the value to an outside action.

use crate::writer::Writer;

/// Calls an action with the value, producing unit.
///
/// This is the one deliberate side effect in the crate: it lets a computation
/// feed an external sink (a metrics client, a tracing span, a test probe).
/// The action runs on every evaluation that succeeds and never on failure.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use scrivener::writer::prelude::*;
///
/// let seen = AtomicI32::new(0);
/// let outcome = tell_one("computed".to_string())
///     .map(|_| 42)
///     .for_each(|n| seen.store(n, Ordering::SeqCst))
///     .run();
///
/// assert_eq!(outcome.value, Some(()));
/// assert_eq!(seen.load(Ordering::SeqCst), 42);
/// ```
pub struct ForEach<M, F> {
    pub(crate) inner: M,
    pub(crate) action: F,
}

impl<M, F> std::fmt::Debug for ForEach<M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForEach")
            .field("inner", &"<writer>")
            .field("action", &"<function>")
            .finish()
    }
}

impl<M: Clone, F: Clone> Clone for ForEach<M, F> {
    fn clone(&self) -> Self {
        ForEach {
            inner: self.inner.clone(),
            action: self.action.clone(),
        }
    }
}

impl<M, F> Writer for ForEach<M, F>
where
    M: Writer,
    F: Fn(M::Output),
{
    type Output = ();
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<()> {
        self.inner.eval(log).map(&self.action)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::writer::prelude::*;

    #[test]
    fn test_action_runs_once_per_evaluation() {
        let calls = Cell::new(0);
        let writer = pure::<_, String>(1).for_each(|_| calls.set(calls.get() + 1));

        writer.run();
        writer.run();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_action_skipped_on_failure() {
        let calls = Cell::new(0);
        let outcome = tell("kept".to_string())
            .then(fail::<i32, _>())
            .for_each(|_| calls.set(calls.get() + 1))
            .run();

        assert!(outcome.is_failed());
        assert_eq!(outcome.log, "kept");
        assert_eq!(calls.get(), 0);
    }
}
