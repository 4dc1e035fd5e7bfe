//! Tell constructor - the one place log content enters a computation.

use crate::writer::{append, Writer};
use crate::Monoid;

/// A writer that writes a value and produces unit.
///
/// Every other log a computation carries is built by combining `Tell` writes.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell(vec!["hello".to_string()]).run();
/// assert_eq!(outcome.value, Some(()));
/// assert_eq!(outcome.log, vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Tell<W> {
    writes: W,
}

impl<W> Writer for Tell<W>
where
    W: Monoid + Clone,
{
    type Output = ();
    type Log = W;

    fn eval(&self, log: &mut W) -> Option<()> {
        append(log, self.writes.clone());
        Some(())
    }
}

/// Write `what` to the log.
///
/// Writes from consecutive tells combine left to right:
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell("a".to_string())
///     .and_then(|_| tell("b".to_string()))
///     .run();
/// assert_eq!(outcome.log, "ab");
/// ```
///
/// Any monoid works as the log:
///
/// ```rust
/// use scrivener::writer::prelude::*;
/// use scrivener::monoid::Sum;
///
/// let cost = tell(Sum(2))
///     .then(tell(Sum(3)))
///     .then(tell(Sum(5)))
///     .run_log();
/// assert_eq!(cost, Sum(10));
/// ```
pub fn tell<W>(what: W) -> Tell<W>
where
    W: Monoid + Clone,
{
    Tell { writes: what }
}

/// Write a single entry to a `Vec` log.
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("started".to_string()).run();
/// assert_eq!(outcome.log, vec!["started".to_string()]);
/// ```
pub fn tell_one<T: Clone>(item: T) -> Tell<Vec<T>> {
    Tell { writes: vec![item] }
}
