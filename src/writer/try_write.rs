//! TryWrite combinator - turn panics during evaluation into failures.

use std::panic::{self, AssertUnwindSafe};

use crate::writer::{append, Writer};
use crate::Monoid;

/// What happens to the writes a computation made before it panicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartialLog {
    /// Drop them. Writes made by enclosing computations before this one
    /// started are unaffected.
    #[default]
    Discard,
    /// Keep every write that completed before the panic.
    Keep,
}

/// Evaluates a writer with panic protection.
///
/// A panic inside any closure of the inner writer is caught and reported as a
/// failed outcome; it never unwinds past this combinator. What the inner
/// writer wrote before the panic is kept or dropped according to its
/// [`PartialLog`] policy. Writes that sat inside an unfinished `listen`,
/// `censor` or `pass` scope are dropped either way, since that scope never got
/// to hand its log on.
///
/// Created by [`try_write`] and [`try_write_preserving`].
#[derive(Debug, Clone)]
pub struct TryWrite<M> {
    inner: M,
    policy: PartialLog,
}

impl<M> TryWrite<M> {
    /// Protect `inner` with an explicit policy.
    pub fn new(inner: M, policy: PartialLog) -> Self {
        TryWrite { inner, policy }
    }

    /// The policy in effect.
    pub fn policy(&self) -> PartialLog {
        self.policy
    }
}

impl<M: Writer> Writer for TryWrite<M> {
    type Output = M::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<M::Output> {
        let mut own = M::Log::empty();
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.inner.eval(&mut own)));

        match result {
            Ok(value) => {
                append(log, own);
                value
            }
            Err(_payload) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    policy = ?self.policy,
                    "writer panicked during evaluation: {}",
                    crate::error::panic_message(_payload.as_ref())
                );
                if self.policy == PartialLog::Keep {
                    append(log, own);
                }
                None
            }
        }
    }
}

/// Catch panics raised while evaluating `writer`, discarding its partial log.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let risky = tell_one("before".to_string())
///     .and_then(|_| tell_one("inside".to_string()))
///     .map(|_| -> i32 { panic!("division by zero") });
///
/// let outcome = tell_one("outer".to_string())
///     .then(try_write(risky))
///     .run();
///
/// assert!(outcome.is_failed());
/// assert_eq!(outcome.log, vec!["outer".to_string()]);
/// ```
pub fn try_write<M: Writer>(writer: M) -> TryWrite<M> {
    TryWrite::new(writer, PartialLog::Discard)
}

/// Catch panics raised while evaluating `writer`, keeping what it had written.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let risky = tell_one("before".to_string())
///     .map(|_| -> i32 { panic!("division by zero") });
///
/// let outcome = try_write_preserving(risky).run();
/// assert!(outcome.is_failed());
/// assert_eq!(outcome.log, vec!["before".to_string()]);
/// ```
pub fn try_write_preserving<M: Writer>(writer: M) -> TryWrite<M> {
    TryWrite::new(writer, PartialLog::Keep)
}
