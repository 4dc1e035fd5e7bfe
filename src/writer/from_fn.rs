//! FromFn - a writer from a raw evaluator closure.

use crate::writer::{append, Writer};
use crate::{Monoid, WriterOutcome};

/// A writer whose evaluation is a closure returning a whole outcome.
///
/// The closure is called once per evaluation; its log is appended after
/// whatever was written before it.
///
/// Created by [`from_fn`].
pub struct FromFn<F> {
    f: F,
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F: Clone> Clone for FromFn<F> {
    fn clone(&self) -> Self {
        FromFn { f: self.f.clone() }
    }
}

impl<F, A, W> Writer for FromFn<F>
where
    F: Fn() -> WriterOutcome<A, W>,
    W: Monoid,
{
    type Output = A;
    type Log = W;

    fn eval(&self, log: &mut W) -> Option<A> {
        let outcome = (self.f)();
        append(log, outcome.log);
        outcome.value
    }
}

/// Build a writer from an evaluator closure.
///
/// Useful at the edge where a value and its log are computed together, or when
/// a failure has to be expressed with a log attached.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
/// use scrivener::WriterOutcome;
///
/// let parse = |raw: &'static str| {
///     from_fn(move || match raw.parse::<i32>() {
///         Ok(n) => WriterOutcome::success(n, vec![format!("parsed {}", n)]),
///         Err(_) => WriterOutcome::failure(vec![format!("rejected {:?}", raw)]),
///     })
/// };
///
/// assert_eq!(parse("7").run().value, Some(7));
///
/// let bad = parse("x").run();
/// assert!(bad.is_failed());
/// assert_eq!(bad.log, vec!["rejected \"x\"".to_string()]);
/// ```
pub fn from_fn<F, A, W>(f: F) -> FromFn<F>
where
    F: Fn() -> WriterOutcome<A, W>,
    W: Monoid,
{
    FromFn { f }
}
