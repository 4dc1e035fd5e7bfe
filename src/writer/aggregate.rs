//! Aggregating combinators - sum, count, and quantifiers over the value.
//!
//! A writer binds at most one value, so these are single-pass aggregations of
//! that value. All of them propagate failure: a failed writer never counts as
//! zero, true or false.

use std::iter;
use std::marker::PhantomData;

use crate::writer::Writer;

/// Sums the value into `S`.
///
/// Created by [`WriterExt::sum`](crate::writer::WriterExt::sum).
pub struct Summed<M, S> {
    pub(crate) inner: M,
    pub(crate) _sum: PhantomData<fn() -> S>,
}

impl<M, S> std::fmt::Debug for Summed<M, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summed").field("inner", &"<writer>").finish()
    }
}

impl<M: Clone, S> Clone for Summed<M, S> {
    fn clone(&self) -> Self {
        Summed {
            inner: self.inner.clone(),
            _sum: PhantomData,
        }
    }
}

impl<M, S> Writer for Summed<M, S>
where
    M: Writer,
    S: iter::Sum<M::Output>,
{
    type Output = S;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<S> {
        self.inner.eval(log).map(|value| iter::once(value).sum())
    }
}

/// Counts the values produced: `1` on success.
///
/// Created by [`WriterExt::count`](crate::writer::WriterExt::count).
#[derive(Debug, Clone)]
pub struct Count<M> {
    pub(crate) inner: M,
}

impl<M: Writer> Writer for Count<M> {
    type Output = usize;
    type Log = M::Log;

    fn eval(&self, log: &mut M::Log) -> Option<usize> {
        self.inner.eval(log).map(|_| 1)
    }
}

/// Whether the value satisfies a predicate, for all values produced.
///
/// Created by [`WriterExt::for_all`](crate::writer::WriterExt::for_all).
pub struct ForAll<M, P> {
    pub(crate) inner: M,
    pub(crate) predicate: P,
}

/// Whether the value satisfies a predicate, for some value produced.
///
/// Created by [`WriterExt::exists`](crate::writer::WriterExt::exists).
pub struct Exists<M, P> {
    pub(crate) inner: M,
    pub(crate) predicate: P,
}

macro_rules! impl_quantifier {
    ($name:ident) => {
        impl<M, P> std::fmt::Debug for $name<M, P> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("inner", &"<writer>")
                    .field("predicate", &"<predicate>")
                    .finish()
            }
        }

        impl<M: Clone, P: Clone> Clone for $name<M, P> {
            fn clone(&self) -> Self {
                $name {
                    inner: self.inner.clone(),
                    predicate: self.predicate.clone(),
                }
            }
        }

        // With exactly one value, "all" and "some" agree.
        impl<M, P> Writer for $name<M, P>
        where
            M: Writer,
            P: Fn(&M::Output) -> bool,
        {
            type Output = bool;
            type Log = M::Log;

            fn eval(&self, log: &mut M::Log) -> Option<bool> {
                self.inner.eval(log).map(|value| (self.predicate)(&value))
            }
        }
    };
}

impl_quantifier!(ForAll);
impl_quantifier!(Exists);

#[cfg(test)]
mod tests {
    use crate::monoid::Sum;
    use crate::writer::prelude::*;

    #[test]
    fn test_sum_of_single_value() {
        let outcome = tell(Sum(1u32)).then(pure(40i32)).sum::<i32>().run();
        assert_eq!(outcome.value, Some(40));
        assert_eq!(outcome.log, Sum(1));
    }

    #[test]
    fn test_count_is_one_on_success() {
        let outcome = tell("x".to_string()).map(|_| 'c').count().run();
        assert_eq!(outcome.value, Some(1));
        assert_eq!(outcome.log, "x");
    }

    #[test]
    fn test_count_propagates_failure() {
        let outcome = tell("x".to_string())
            .then(fail::<char, _>())
            .count()
            .run();
        assert!(outcome.is_failed());
        assert_eq!(outcome.log, "x");
    }

    #[test]
    fn test_quantifiers_on_success() {
        let even = pure::<_, Vec<String>>(4).for_all(|n| n % 2 == 0).run();
        let negative = pure::<_, Vec<String>>(4).exists(|n| *n < 0).run();
        assert_eq!(even.value, Some(true));
        assert_eq!(negative.value, Some(false));
    }

    #[test]
    fn test_quantifiers_never_turn_failure_into_bool() {
        let all = fail::<i32, Vec<String>>().for_all(|_| true).run();
        let any = fail::<i32, Vec<String>>().exists(|_| true).run();
        assert!(all.is_failed());
        assert!(any.is_failed());
    }
}
