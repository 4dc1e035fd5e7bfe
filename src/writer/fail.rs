//! Fail constructor - a computation that has already failed.

use std::marker::PhantomData;

use crate::writer::Writer;
use crate::Monoid;

/// A writer that always fails without writing anything.
///
/// Created by [`fail`].
pub struct Fail<A, W> {
    _phantom: PhantomData<fn() -> (A, W)>,
}

impl<A, W> std::fmt::Debug for Fail<A, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fail").finish()
    }
}

impl<A, W> Clone for Fail<A, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, W> Copy for Fail<A, W> {}

impl<A, W: Monoid> Writer for Fail<A, W> {
    type Output = A;
    type Log = W;

    fn eval(&self, _log: &mut W) -> Option<A> {
        None
    }
}

/// An explicitly failed computation.
///
/// Chained after other writers, it keeps what they wrote and stops the chain.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("checked input".to_string())
///     .and_then(|_| fail::<i32, _>())
///     .and_then(|n| tell_one(format!("never written {}", n)))
///     .run();
///
/// assert!(outcome.is_failed());
/// assert_eq!(outcome.log, vec!["checked input".to_string()]);
/// ```
pub fn fail<A, W: Monoid>() -> Fail<A, W> {
    Fail {
        _phantom: PhantomData,
    }
}
