//! Extension trait providing combinator methods for all writers.

use std::marker::PhantomData;

use crate::writer::aggregate::{Count, Exists, ForAll, Summed};
use crate::writer::bind::{Bind, Then};
use crate::writer::boxed::BoxedWriter;
use crate::writer::censor::Censor;
use crate::writer::filter::Filter;
use crate::writer::fold::{Fold, FoldLog};
use crate::writer::for_each::ForEach;
use crate::writer::listen::{Listen, Listens};
use crate::writer::map::Map;
use crate::writer::pass::Pass;
use crate::writer::tap_tell::TapTell;
use crate::writer::zip::Zip;
use crate::writer::Writer;
use crate::{Monoid, WriterOutcome};

/// Combinator and evaluation methods for every [`Writer`].
///
/// Implemented automatically for all writers. Every combinator is lazy: it
/// wraps `self` in a new writer and runs nothing until the result is
/// evaluated.
///
/// # Example
///
/// ```rust
/// use scrivener::writer::prelude::*;
///
/// let outcome = tell_one("step 1".to_string())
///     .map(|_| 42)
///     .tap_tell(|n| vec![format!("result: {}", n)])
///     .censor(|logs| logs.into_iter().filter(|l| l.contains("result")).collect())
///     .run();
///
/// assert_eq!(outcome.value, Some(42));
/// assert_eq!(outcome.log, vec!["result: 42".to_string()]);
/// ```
pub trait WriterExt: Writer {
    /// Evaluate from an empty log.
    fn run(&self) -> WriterOutcome<Self::Output, Self::Log> {
        self.eval_from(Self::Log::empty())
    }

    /// Evaluate with `initial` as the log written so far.
    ///
    /// The writer's own writes are appended after `initial`.
    ///
    /// ```rust
    /// use scrivener::writer::prelude::*;
    ///
    /// let outcome = tell("b".to_string()).eval_from("a".to_string());
    /// assert_eq!(outcome.log, "ab");
    /// ```
    fn eval_from(&self, initial: Self::Log) -> WriterOutcome<Self::Output, Self::Log> {
        let mut log = initial;
        let value = self.eval(&mut log);
        WriterOutcome::new(value, log)
    }

    /// Evaluate and keep only the value.
    fn run_value(&self) -> Option<Self::Output> {
        self.run().value
    }

    /// Evaluate and keep only the log.
    fn run_log(&self) -> Self::Log {
        self.run().log
    }

    /// Chain a writer that depends on this writer's value.
    ///
    /// See [`Bind`] for the log and failure rules.
    fn and_then<F, M2>(self, f: F) -> Bind<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> M2,
        M2: Writer<Log = Self::Log>,
    {
        Bind { inner: self, f }
    }

    /// Alias for [`and_then`](WriterExt::and_then).
    fn bind<F, M2>(self, f: F) -> Bind<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> M2,
        M2: Writer<Log = Self::Log>,
    {
        self.and_then(f)
    }

    /// Run `next` after this writer, keeping `next`'s value.
    fn then<N>(self, next: N) -> Then<Self, N>
    where
        Self: Sized,
        N: Writer<Log = Self::Log>,
    {
        Then {
            first: self,
            second: next,
        }
    }

    /// Transform the value.
    fn map<F, B>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
    {
        Map { inner: self, f }
    }

    /// Fail unless the value satisfies `predicate`, keeping the log.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Filter {
            inner: self,
            predicate,
        }
    }

    /// Pair this writer's value with `other`'s.
    fn zip<N>(self, other: N) -> Zip<Self, N>
    where
        Self: Sized,
        N: Writer<Log = Self::Log>,
    {
        Zip {
            first: self,
            second: other,
        }
    }

    /// Write an entry derived from the value after success.
    fn tap_tell<F, W2>(self, f: F) -> TapTell<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> W2,
        W2: Into<Self::Log>,
    {
        TapTell { inner: self, f }
    }

    /// Expose this writer's log alongside its value.
    fn listen(self) -> Listen<Self>
    where
        Self: Sized,
        Self::Log: Clone,
    {
        Listen { inner: self }
    }

    /// Expose a projection of this writer's log alongside its value.
    fn listens<F, B>(self, f: F) -> Listens<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Log) -> B,
    {
        Listens { inner: self, f }
    }

    /// Rewrite this writer's log.
    fn censor<F>(self, f: F) -> Censor<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Log) -> Self::Log,
    {
        Censor { inner: self, f }
    }

    /// Rewrite the log with a function carried in the value.
    fn pass<A, G>(self) -> Pass<Self>
    where
        Self: Writer<Output = (A, G)> + Sized,
        G: FnOnce(Self::Log) -> Self::Log,
    {
        Pass { inner: self }
    }

    /// Fold the value into `initial`.
    fn fold<S, F>(self, initial: S, f: F) -> Fold<Self, S, F>
    where
        Self: Sized,
        S: Clone,
        F: Fn(S, Self::Output) -> S,
    {
        Fold {
            inner: self,
            initial,
            f,
        }
    }

    /// Fold the value into this writer's log, producing a log-typed value.
    fn fold_log<F>(self, f: F) -> FoldLog<Self, F>
    where
        Self: Sized,
        Self::Log: Clone,
        F: Fn(Self::Log, Self::Output) -> Self::Log,
    {
        FoldLog { inner: self, f }
    }

    /// Sum the value into `S`.
    ///
    /// ```rust
    /// use scrivener::writer::prelude::*;
    ///
    /// let outcome = pure::<_, String>(21u8).map(u64::from).sum::<u64>().run();
    /// assert_eq!(outcome.value, Some(21));
    /// ```
    fn sum<S>(self) -> Summed<Self, S>
    where
        Self: Sized,
        S: std::iter::Sum<Self::Output>,
    {
        Summed {
            inner: self,
            _sum: PhantomData,
        }
    }

    /// Count the values produced: `1`, or failure.
    fn count(self) -> Count<Self>
    where
        Self: Sized,
    {
        Count { inner: self }
    }

    /// Whether the value satisfies `predicate`; failure stays failure.
    fn for_all<P>(self, predicate: P) -> ForAll<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        ForAll {
            inner: self,
            predicate,
        }
    }

    /// Whether the value satisfies `predicate`; failure stays failure.
    fn exists<P>(self, predicate: P) -> Exists<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Exists {
            inner: self,
            predicate,
        }
    }

    /// Hand the value to an external action, producing unit.
    fn for_each<F>(self, action: F) -> ForEach<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output),
    {
        ForEach {
            inner: self,
            action,
        }
    }

    /// Erase the writer's type.
    fn boxed(self) -> BoxedWriter<Self::Output, Self::Log>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxedWriter::new(self)
    }
}

impl<M: Writer> WriterExt for M {}
