//! Writer trait definition.

use crate::Monoid;

/// A lazily evaluated computation that produces a value and writes a log.
///
/// `eval` is the evaluator: given the log accumulated so far, it appends its
/// own writes (in order) and returns `Some(value)`, or `None` when the
/// computation failed. Nothing runs until `eval` is called, and because it
/// borrows `self` a writer can be evaluated any number of times, each run
/// starting from scratch.
///
/// Most code never calls `eval` directly; [`WriterExt::run`](crate::writer::WriterExt::run)
/// starts from `Monoid::empty()` and packages the result as a
/// [`WriterOutcome`](crate::WriterOutcome).
///
/// # Laws
///
/// 1. **Identity**: `pure(a)` writes `Monoid::empty()`.
/// 2. **Tell**: `tell(a).and_then(|_| tell(b))` writes `a.combine(b)`.
/// 3. **Associativity**: `m.and_then(f).and_then(g)` and
///    `m.and_then(|x| f(x).and_then(g))` write the same log.
/// 4. **Short circuit**: once a writer fails, later functions are not called
///    and nothing more is written.
///
/// # Implementing
///
/// An evaluator must only ever append to `log`. Replacing what is already
/// there would rewrite writes made by enclosing computations.
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// /// Writes one entry per unit of work.
/// struct Steps(u32);
///
/// impl Writer for Steps {
///     type Output = u32;
///     type Log = Vec<String>;
///
///     fn eval(&self, log: &mut Vec<String>) -> Option<u32> {
///         for step in 0..self.0 {
///             log.push(format!("step {}", step));
///         }
///         Some(self.0)
///     }
/// }
///
/// let outcome = Steps(2).run();
/// assert_eq!(outcome.value, Some(2));
/// assert_eq!(outcome.log, vec!["step 0", "step 1"]);
/// ```
pub trait Writer {
    /// The value produced on success.
    type Output;

    /// The accumulated log. Its `Monoid` instance decides how writes combine.
    type Log: Monoid;

    /// Evaluate once, appending writes to `log`.
    ///
    /// Returns `None` when the computation failed; whatever was appended before
    /// the failure stays in `log`.
    fn eval(&self, log: &mut Self::Log) -> Option<Self::Output>;
}

impl<M: Writer + ?Sized> Writer for &M {
    type Output = M::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut Self::Log) -> Option<Self::Output> {
        (**self).eval(log)
    }
}

impl<M: Writer + ?Sized> Writer for Box<M> {
    type Output = M::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut Self::Log) -> Option<Self::Output> {
        (**self).eval(log)
    }
}
