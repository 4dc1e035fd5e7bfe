//! Bind and Then combinators - sequence dependent and independent writers.

use crate::writer::Writer;

/// Chains a writer with a function producing the next writer.
///
/// The log of the result is the first writer's log combined with the next
/// writer's log, in that order. If the first writer fails, the function is
/// never called and the first writer's log is kept as is.
///
/// Panics raised by the function are not caught here; wrap the computation
/// in [`try_write`](crate::writer::try_write) for that.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("step 1".to_string())
///     .and_then(|_| tell_one("step 2".to_string()))
///     .and_then(|_| tell_one("step 3".to_string()))
///     .run();
///
/// assert_eq!(outcome.log, vec![
///     "step 1".to_string(),
///     "step 2".to_string(),
///     "step 3".to_string(),
/// ]);
/// ```
pub struct Bind<M, F> {
    pub(crate) inner: M,
    pub(crate) f: F,
}

impl<M, F> std::fmt::Debug for Bind<M, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bind")
            .field("inner", &"<writer>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<M: Clone, F: Clone> Clone for Bind<M, F> {
    fn clone(&self) -> Self {
        Bind {
            inner: self.inner.clone(),
            f: self.f.clone(),
        }
    }
}

impl<M, F, M2> Writer for Bind<M, F>
where
    M: Writer,
    F: Fn(M::Output) -> M2,
    M2: Writer<Log = M::Log>,
{
    type Output = M2::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<M2::Output> {
        let value = self.inner.eval(log)?;
        (self.f)(value).eval(log)
    }
}

/// Runs one writer after another, keeping the second value.
///
/// Same log and failure behavior as [`Bind`] with a constant function.
#[derive(Debug, Clone)]
pub struct Then<M, N> {
    pub(crate) first: M,
    pub(crate) second: N,
}

impl<M, N> Writer for Then<M, N>
where
    M: Writer,
    N: Writer<Log = M::Log>,
{
    type Output = N::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<N::Output> {
        self.first.eval(log)?;
        self.second.eval(log)
    }
}
