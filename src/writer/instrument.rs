//! Tracing support for writers.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use crate::writer::Writer;

/// A writer evaluated inside a tracing span.
///
/// Created by [`WriterTracingExt::instrument`].
#[derive(Debug, Clone)]
pub struct Instrument<M> {
    pub(crate) inner: M,
    pub(crate) span: tracing::Span,
}

impl<M: Writer> Writer for Instrument<M> {
    type Output = M::Output;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<M::Output> {
        self.span.in_scope(|| {
            let value = self.inner.eval(log);
            if value.is_none() {
                tracing::debug!("writer failed");
            }
            value
        })
    }
}

/// Extension trait for wrapping writers in tracing spans.
pub trait WriterTracingExt: Writer {
    /// Enter `span` for the duration of every evaluation.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "tracing")]
    /// # {
    /// use scrivener::writer::prelude::*;
    /// use tracing::info_span;
    ///
    /// fn load_order(id: u64) -> impl Writer<Output = u64, Log = Vec<String>> {
    ///     tell_one(format!("loading order {}", id))
    ///         .map(move |_| id)
    ///         .instrument(info_span!("load_order", order_id = id))
    /// }
    ///
    /// let outcome = load_order(7).run();
    /// assert_eq!(outcome.value, Some(7));
    /// assert_eq!(outcome.log, vec!["loading order 7".to_string()]);
    /// # }
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self>
    where
        Self: Sized,
    {
        Instrument { inner: self, span }
    }
}

impl<M: Writer> WriterTracingExt for M {}
