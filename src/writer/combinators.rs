//! Collection combinators - one writer per item, logs accumulated in order.

use crate::writer::Writer;

/// Runs a writer for each item and collects the values.
///
/// Logs are combined in item order. The first failing item stops the
/// traversal; its log and the logs of the items before it are kept.
///
/// Created by [`traverse_writer`].
pub struct TraverseWriter<T, F> {
    items: Vec<T>,
    f: F,
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for TraverseWriter<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraverseWriter")
            .field("items", &self.items)
            .field("f", &"<function>")
            .finish()
    }
}

impl<T: Clone, F: Clone> Clone for TraverseWriter<T, F> {
    fn clone(&self) -> Self {
        TraverseWriter {
            items: self.items.clone(),
            f: self.f.clone(),
        }
    }
}

impl<T, F, M> Writer for TraverseWriter<T, F>
where
    T: Clone,
    F: Fn(T) -> M,
    M: Writer,
{
    type Output = Vec<M::Output>;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<Vec<M::Output>> {
        let mut results = Vec::with_capacity(self.items.len());
        for item in &self.items {
            results.push((self.f)(item.clone()).eval(log)?);
        }
        Some(results)
    }
}

/// Traverse a collection, running a writer for each item.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let writer = traverse_writer(vec![1, 2, 3], |n| {
///     tell_one(format!("Processing {}", n)).map(move |_| n * 10)
/// });
///
/// let outcome = writer.run();
/// assert_eq!(outcome.value, Some(vec![10, 20, 30]));
/// assert_eq!(outcome.log, vec![
///     "Processing 1".to_string(),
///     "Processing 2".to_string(),
///     "Processing 3".to_string(),
/// ]);
/// ```
pub fn traverse_writer<T, F, M>(items: Vec<T>, f: F) -> TraverseWriter<T, F>
where
    T: Clone,
    F: Fn(T) -> M,
    M: Writer,
{
    TraverseWriter { items, f }
}

/// Threads an accumulator through a writer per item.
///
/// Created by [`fold_writer`].
pub struct FoldWriter<T, S, F> {
    items: Vec<T>,
    init: S,
    f: F,
}

impl<T: std::fmt::Debug, S: std::fmt::Debug, F> std::fmt::Debug for FoldWriter<T, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoldWriter")
            .field("items", &self.items)
            .field("init", &self.init)
            .field("f", &"<function>")
            .finish()
    }
}

impl<T: Clone, S: Clone, F: Clone> Clone for FoldWriter<T, S, F> {
    fn clone(&self) -> Self {
        FoldWriter {
            items: self.items.clone(),
            init: self.init.clone(),
            f: self.f.clone(),
        }
    }
}

impl<T, S, F, M> Writer for FoldWriter<T, S, F>
where
    T: Clone,
    S: Clone,
    F: Fn(S, T) -> M,
    M: Writer<Output = S>,
{
    type Output = S;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<S> {
        self.items
            .iter()
            .try_fold(self.init.clone(), |acc, item| {
                (self.f)(acc, item.clone()).eval(log)
            })
    }
}

/// Fold a collection with a writer per step, accumulating every step's log.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let writer = fold_writer(vec![1, 2, 3, 4], 0, |acc, n| {
///     tell_one(format!("Adding {} to {}", n, acc)).map(move |_| acc + n)
/// });
///
/// let outcome = writer.run();
/// assert_eq!(outcome.value, Some(10));
/// assert_eq!(outcome.log.len(), 4);
/// assert_eq!(outcome.log[3], "Adding 4 to 6");
/// ```
pub fn fold_writer<T, S, F, M>(items: Vec<T>, init: S, f: F) -> FoldWriter<T, S, F>
where
    T: Clone,
    S: Clone,
    F: Fn(S, T) -> M,
    M: Writer<Output = S>,
{
    FoldWriter { items, init, f }
}
