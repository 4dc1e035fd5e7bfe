//! Tests and examples for the testing utilities
//!
//! Demonstrates patterns for testing code that returns writers.

use scrivener::prelude::*;
use scrivener::{assert_outcome_failed, assert_written};

#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
    age: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct Config {
    min_age: u32,
}

impl Config {
    fn test_config() -> Self {
        Self { min_age: 18 }
    }
}

fn register(config: Config, user: User) -> impl Writer<Output = User, Log = Vec<String>> {
    tell_one(format!("registering {}", user.email))
        .then(pure(user))
        .filter(move |u| u.age >= config.min_age)
        .tap_tell(|u| vec![format!("registered {}", u.email)])
}

fn adult() -> User {
    User {
        email: "user@example.com".to_string(),
        age: 30,
    }
}

#[test]
fn test_successful_registration_log() {
    let outcome = register(Config::test_config(), adult()).run();
    assert_written!(
        outcome,
        adult(),
        vec![
            "registering user@example.com".to_string(),
            "registered user@example.com".to_string(),
        ]
    );
}

#[test]
fn test_rejected_registration_keeps_first_entry() {
    let minor = User {
        age: 12,
        ..adult()
    };
    let outcome = register(Config::test_config(), minor).run();
    assert_outcome_failed!(outcome, vec!["registering user@example.com".to_string()]);
}

#[test]
fn test_assertions_on_string_log() {
    let outcome = tell("a".to_string()).then(tell("b".to_string())).run();
    assert_written!(outcome, "ab");
}

#[test]
fn test_assertions_on_borrowed_parts() {
    let outcome = register(Config::test_config(), adult()).run();
    assert_eq!(outcome.value().map(|u| u.age), Some(30));
    assert_eq!(outcome.log().len(), 2);
}

#[test]
#[should_panic(expected = "Expected success, got failure with log")]
fn test_assert_written_reports_log_of_failure() {
    let minor = User {
        age: 1,
        ..adult()
    };
    assert_written!(register(Config::test_config(), minor).run(), Vec::<String>::new());
}

#[cfg(feature = "proptest")]
mod property_helpers {
    use proptest::prelude::*;
    use scrivener::prelude::*;
    use scrivener::testing::{chain, Step};

    proptest! {
        #[test]
        fn prop_chain_rerun_is_identical(
            start in any::<i32>(),
            steps in prop::collection::vec(any::<Step>(), 0..10)
        ) {
            let writer = chain(start, &steps);
            prop_assert_eq!(writer.run(), writer.run());
        }

        #[test]
        fn prop_listen_agrees_with_run(
            steps in prop::collection::vec(any::<Step>(), 0..10)
        ) {
            let writer = chain(0, &steps);
            let plain = writer.run();
            let listened = writer.clone().listen().run();

            prop_assert_eq!(&listened.log, &plain.log);
            match (listened.value, plain.value) {
                (Some((value, seen)), Some(expected)) => {
                    prop_assert_eq!(value, expected);
                    prop_assert_eq!(seen, plain.log);
                }
                (None, None) => {}
                _ => prop_assert!(false, "listen changed the failure flag"),
            }
        }

        #[test]
        fn prop_arbitrary_outcomes_round_trip_through_result(
            outcome in any::<WriterOutcome<u8, Vec<String>>>()
        ) {
            let failed = outcome.is_failed();
            prop_assert_eq!(outcome.into_result().is_err(), failed);
        }
    }
}
