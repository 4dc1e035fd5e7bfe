//! TryFun - deferred, retryable evaluation returning a `Result`.

use std::panic::{self, AssertUnwindSafe};

use crate::writer::Writer;
use crate::{Monoid, WriterError};

/// A writer held back for evaluation on demand.
///
/// Each [`attempt`](TryFun::attempt) evaluates the whole computation afresh
/// and reports the outcome as a `Result`; nothing from an earlier attempt is
/// cached. Panics are caught and reported as [`WriterError::Panicked`].
/// Retrying is up to the caller.
///
/// Created by [`try_fun`].
#[derive(Debug, Clone)]
pub struct TryFun<M> {
    writer: M,
}

impl<M: Writer> TryFun<M> {
    /// Evaluate the writer once.
    pub fn attempt(&self) -> Result<(M::Output, M::Log), WriterError<M::Log>> {
        guarded(|| &self.writer)
    }
}

/// Defer `writer` into a retryable container.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let job = try_fun(tell_one("ran".to_string()).map(|_| 42));
///
/// assert_eq!(job.attempt(), Ok((42, vec!["ran".to_string()])));
/// // A second attempt starts over instead of replaying the first.
/// assert_eq!(job.attempt(), Ok((42, vec!["ran".to_string()])));
/// ```
pub fn try_fun<M: Writer>(writer: M) -> TryFun<M> {
    TryFun { writer }
}

/// A factory rebuilding the whole computation for every attempt.
///
/// Use this when building the writer itself depends on state that may change
/// between attempts. A panic raised by the factory is caught like a panic
/// raised during evaluation.
///
/// Created by [`try_fun_with`].
pub struct TryFunWith<F> {
    factory: F,
}

impl<F> std::fmt::Debug for TryFunWith<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryFunWith")
            .field("factory", &"<function>")
            .finish()
    }
}

impl<F, M> TryFunWith<F>
where
    F: Fn() -> M,
    M: Writer,
{
    /// Build the writer and evaluate it once.
    pub fn attempt(&self) -> Result<(M::Output, M::Log), WriterError<M::Log>> {
        guarded(&self.factory)
    }
}

/// Defer a writer factory into a retryable container.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use scrivener::writer::prelude::*;
/// use scrivener::WriterError;
///
/// let budget = Cell::new(1);
/// let job = try_fun_with(|| {
///     let remaining = budget.get();
///     budget.set(remaining - 1);
///     tell_one(format!("budget {}", remaining))
///         .map(move |_| remaining)
///         .filter(|remaining| *remaining > 0)
/// });
///
/// assert_eq!(job.attempt(), Ok((1, vec!["budget 1".to_string()])));
/// assert_eq!(
///     job.attempt(),
///     Err(WriterError::Failed { log: vec!["budget 0".to_string()] })
/// );
/// ```
pub fn try_fun_with<F, M>(factory: F) -> TryFunWith<F>
where
    F: Fn() -> M,
    M: Writer,
{
    TryFunWith { factory }
}

fn guarded<F, M>(build: F) -> Result<(M::Output, M::Log), WriterError<M::Log>>
where
    F: Fn() -> M,
    M: Writer,
{
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
        let writer = build();
        let mut log = M::Log::empty();
        let value = writer.eval(&mut log);
        (value, log)
    }));

    match attempt {
        Ok((Some(value), log)) => Ok((value, log)),
        Ok((None, log)) => Err(WriterError::Failed { log }),
        Err(payload) => {
            let error = WriterError::from_panic(payload.as_ref());
            #[cfg(feature = "tracing")]
            tracing::warn!("writer attempt panicked: {}", error);
            Err(error)
        }
    }
}
