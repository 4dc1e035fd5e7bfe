//! BoxedWriter for type erasure.

use std::sync::Arc;

use crate::writer::Writer;
use crate::Monoid;

/// A type-erased, cheaply clonable writer.
///
/// Combinators nest their types (`Map<Bind<Tell<..>, ..>, ..>`), so boxing is
/// needed to:
/// - store different writers in a `Vec` or `HashMap`,
/// - return different writers from match arms,
/// - build writers recursively.
///
/// Clones share the same computation; each evaluation still starts from its
/// own empty log, so a `BoxedWriter` can be evaluated from several threads.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// fn countdown(n: u32) -> BoxedWriter<u32, Vec<String>> {
///     if n == 0 {
///         tell_one("liftoff".to_string()).map(|_| 0).boxed()
///     } else {
///         tell_one(format!("{}", n))
///             .and_then(move |_| countdown(n - 1))
///             .map(move |rest| rest + n)
///             .boxed()
///     }
/// }
///
/// let outcome = countdown(3).run();
/// assert_eq!(outcome.value, Some(6));
/// assert_eq!(outcome.log, vec!["3", "2", "1", "liftoff"]);
/// ```
pub struct BoxedWriter<A, W> {
    inner: Arc<dyn Writer<Output = A, Log = W> + Send + Sync>,
}

impl<A, W> std::fmt::Debug for BoxedWriter<A, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedWriter").finish_non_exhaustive()
    }
}

impl<A, W> Clone for BoxedWriter<A, W> {
    fn clone(&self) -> Self {
        BoxedWriter {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, W: Monoid> BoxedWriter<A, W> {
    /// Erase the type of a writer.
    pub fn new<M>(writer: M) -> Self
    where
        M: Writer<Output = A, Log = W> + Send + Sync + 'static,
    {
        BoxedWriter {
            inner: Arc::new(writer),
        }
    }
}

impl<A, W: Monoid> Writer for BoxedWriter<A, W> {
    type Output = A;
    type Log = W;

    fn eval(&self, log: &mut W) -> Option<A> {
        self.inner.eval(log)
    }
}
