//! Pure constructor - a value with an empty log.

use std::marker::PhantomData;

use crate::writer::Writer;
use crate::Monoid;

/// A writer that yields a value and writes nothing.
///
/// Created by [`pure`].
pub struct Pure<A, W> {
    value: A,
    _log: PhantomData<fn() -> W>,
}

impl<A: std::fmt::Debug, W> std::fmt::Debug for Pure<A, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pure").field("value", &self.value).finish()
    }
}

impl<A: Clone, W> Clone for Pure<A, W> {
    fn clone(&self) -> Self {
        Pure {
            value: self.value.clone(),
            _log: PhantomData,
        }
    }
}

impl<A, W> Writer for Pure<A, W>
where
    A: Clone,
    W: Monoid,
{
    type Output = A;
    type Log = W;

    fn eval(&self, _log: &mut W) -> Option<A> {
        Some(self.value.clone())
    }
}

/// Lift a value into a writer with an empty log.
///
/// The value is cloned on each evaluation.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = pure::<_, Vec<String>>(42).run();
/// assert_eq!(outcome.value, Some(42));
/// assert!(outcome.log.is_empty());
/// ```
pub fn pure<A, W>(value: A) -> Pure<A, W>
where
    A: Clone,
    W: Monoid,
{
    Pure {
        value,
        _log: PhantomData,
    }
}
