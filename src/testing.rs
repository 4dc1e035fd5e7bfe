//! Testing utilities for code built on writers.
//!
//! Assertion macros that report the log on mismatch, plus property-based
//! testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use scrivener::prelude::*;
//! use scrivener::{assert_outcome_failed, assert_written};
//!
//! let ok = tell_one("saved".to_string()).map(|_| 7).run();
//! assert_written!(ok, 7, vec!["saved".to_string()]);
//!
//! let failed = tell_one("tried".to_string()).then(fail::<i32, _>()).run();
//! assert_outcome_failed!(failed, vec!["tried".to_string()]);
//! ```

/// Assert that an outcome succeeded with the expected log.
///
/// The three-argument form also checks the value. Panics with the log of a
/// failed outcome, which usually explains how far the computation got.
///
/// # Example
///
/// ```rust
/// use scrivener::prelude::*;
/// use scrivener::assert_written;
///
/// let outcome = tell("a".to_string()).then(tell("b".to_string())).run();
/// assert_written!(outcome, "ab");
/// ```
#[macro_export]
macro_rules! assert_written {
    ($outcome:expr, $expected_log:expr) => {
        match $outcome {
            $crate::WriterOutcome {
                value: Some(_),
                log,
            } => {
                assert_eq!(log, $expected_log);
            }
            $crate::WriterOutcome { value: None, log } => {
                panic!("Expected success, got failure with log: {:?}", log);
            }
        }
    };
    ($outcome:expr, $expected_value:expr, $expected_log:expr) => {
        match $outcome {
            $crate::WriterOutcome {
                value: Some(value),
                log,
            } => {
                assert_eq!(value, $expected_value);
                assert_eq!(log, $expected_log);
            }
            $crate::WriterOutcome { value: None, log } => {
                panic!("Expected success, got failure with log: {:?}", log);
            }
        }
    };
}

/// Assert that an outcome failed, optionally with the expected log.
///
/// # Example
///
/// ```rust
/// use scrivener::prelude::*;
/// use scrivener::assert_outcome_failed;
///
/// let outcome = pure::<_, String>(3).filter(|n| *n > 5).run();
/// assert_outcome_failed!(outcome);
/// ```
#[macro_export]
macro_rules! assert_outcome_failed {
    ($outcome:expr) => {
        match $outcome {
            $crate::WriterOutcome { value: None, .. } => {}
            $crate::WriterOutcome { value: Some(v), .. } => {
                panic!("Expected failure, got success: {:?}", v);
            }
        }
    };
    ($outcome:expr, $expected_log:expr) => {
        match $outcome {
            $crate::WriterOutcome { value: None, log } => {
                assert_eq!(log, $expected_log);
            }
            $crate::WriterOutcome { value: Some(v), .. } => {
                panic!(
                    "Expected failure with log {:?}, got success: {:?}",
                    $expected_log, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::writer::{fail, pure, tell_one, BoxedWriter, WriterExt};
#[cfg(feature = "proptest")]
use crate::WriterOutcome;

#[cfg(feature = "proptest")]
impl<A, W> Arbitrary for WriterOutcome<A, W>
where
    A: Arbitrary + 'static,
    W: Arbitrary + 'static,
{
    type Parameters = (A::Parameters, W::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (a_params, w_params) = args;
        prop_oneof![
            (any_with::<A>(a_params), any_with::<W>(w_params))
                .prop_map(|(value, log)| WriterOutcome::success(value, log)),
            any_with::<W>(Default::default()).prop_map(WriterOutcome::failure),
        ]
        .boxed()
    }
}

/// One step of a generated writer chain.
///
/// Generated steps are turned into a runnable writer with [`chain`], so
/// properties can be checked against arbitrary compositions of `tell`, `map`
/// and `fail`.
#[cfg(feature = "proptest")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Write one entry, keeping the value.
    Tell(String),
    /// Add to the value.
    Add(i32),
    /// Fail the computation.
    Fail,
}

#[cfg(feature = "proptest")]
impl Arbitrary for Step {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => "[a-z]{1,6}".prop_map(Step::Tell),
            4 => any::<i32>().prop_map(Step::Add),
            1 => Just(Step::Fail),
        ]
        .boxed()
    }
}

/// Build a writer that runs `steps` in order, starting from `start`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "proptest")]
/// # {
/// use scrivener::prelude::*;
/// use scrivener::testing::{chain, Step};
///
/// let writer = chain(1, &[Step::Tell("a".to_string()), Step::Add(2)]);
/// let outcome = writer.run();
/// assert_eq!(outcome.value, Some(3));
/// assert_eq!(outcome.log, vec!["a".to_string()]);
/// # }
/// ```
#[cfg(feature = "proptest")]
pub fn chain(start: i32, steps: &[Step]) -> BoxedWriter<i32, Vec<String>> {
    steps
        .iter()
        .cloned()
        .fold(pure(start).boxed(), |writer, step| match step {
            Step::Tell(entry) => writer
                .and_then(move |n| tell_one(entry.clone()).map(move |_| n))
                .boxed(),
            Step::Add(k) => writer.map(move |n: i32| n.wrapping_add(k)).boxed(),
            Step::Fail => writer.then(fail()).boxed(),
        })
}

#[cfg(test)]
mod tests {
    use crate::writer::prelude::*;

    #[test]
    fn assert_written_macro() {
        let outcome = tell_one("x".to_string()).run();
        assert_written!(outcome, vec!["x".to_string()]);
    }

    #[test]
    fn assert_written_macro_with_value() {
        let outcome = tell("x".to_string()).map(|_| 4).run();
        assert_written!(outcome, 4, "x");
    }

    #[test]
    fn assert_outcome_failed_macro() {
        let outcome = fail::<i32, String>().run();
        assert_outcome_failed!(outcome);
    }

    #[test]
    fn assert_outcome_failed_macro_with_log() {
        let outcome = tell("before".to_string()).then(fail::<i32, _>()).run();
        assert_outcome_failed!(outcome, "before");
    }

    #[test]
    #[should_panic(expected = "Expected success, got failure")]
    fn assert_written_panics_on_failure() {
        let outcome = tell("partial".to_string()).then(fail::<i32, _>()).run();
        assert_written!(outcome, "partial");
    }

    #[test]
    #[should_panic(expected = "Expected failure, got success")]
    fn assert_outcome_failed_panics_on_success() {
        let outcome = pure::<_, String>(42).run();
        assert_outcome_failed!(outcome);
    }

    #[test]
    #[should_panic(expected = "Expected failure with log")]
    fn assert_outcome_failed_with_log_panics_on_success() {
        let outcome = pure::<_, String>(42).run();
        assert_outcome_failed!(outcome, String::new());
    }

    #[test]
    #[should_panic]
    fn assert_written_panics_on_log_mismatch() {
        let outcome = tell("actual".to_string()).run();
        assert_written!(outcome, "expected");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::{chain, Step};
        use crate::writer::prelude::*;
        use crate::WriterOutcome;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_is_consistent(
                outcome in any::<WriterOutcome<i32, Vec<String>>>()
            ) {
                prop_assert_eq!(outcome.is_failed(), outcome.value.is_none());
            }

            #[test]
            fn chain_logs_every_tell_before_first_fail(
                steps in prop::collection::vec(any::<Step>(), 0..12)
            ) {
                let outcome = chain(0, &steps).run();
                let expected: Vec<String> = steps
                    .iter()
                    .take_while(|s| **s != Step::Fail)
                    .filter_map(|s| match s {
                        Step::Tell(entry) => Some(entry.clone()),
                        _ => None,
                    })
                    .collect();

                prop_assert_eq!(outcome.is_failed(), steps.contains(&Step::Fail));
                prop_assert_eq!(outcome.log, expected);
            }
        }

        #[test]
        fn outcome_arbitrary_generates_both_variants() {
            use proptest::strategy::ValueTree;
            use proptest::test_runner::TestRunner;

            let mut runner = TestRunner::deterministic();
            let strategy = any::<WriterOutcome<u8, String>>();
            let (mut failed, mut succeeded) = (0, 0);

            for _ in 0..200 {
                let outcome = strategy.new_tree(&mut runner).unwrap().current();
                if outcome.is_failed() {
                    failed += 1;
                } else {
                    succeeded += 1;
                }
            }

            assert!(failed > 0);
            assert!(succeeded > 0);
        }
    }
}
