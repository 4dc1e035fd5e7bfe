//! Property-based tests for the monoid and writer laws

use proptest::prelude::*;
use scrivener::prelude::*;
use scrivener::fold_all;

fn tell_then(entry: String, value: i32) -> impl Writer<Output = i32, Log = Vec<String>> {
    tell_one(entry).map(move |_| value)
}

proptest! {
    #[test]
    fn prop_vec_monoid_identity(xs in prop::collection::vec(any::<u8>(), 0..20)) {
        prop_assert_eq!(Vec::<u8>::empty().combine(xs.clone()), xs.clone());
        prop_assert_eq!(xs.clone().combine(Vec::<u8>::empty()), xs);
    }

    #[test]
    fn prop_string_monoid_associativity(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_sum_fold_all_matches_iter_sum(xs in prop::collection::vec(-1000i64..1000, 0..50)) {
        let total: Sum<i64> = fold_all(xs.iter().copied().map(Sum));
        prop_assert_eq!(total, Sum(xs.iter().sum()));
    }

    #[test]
    fn prop_left_identity(a in any::<i32>(), entry in "[a-z]{1,5}") {
        let f = move |x: i32| tell_then(entry.clone(), x.wrapping_mul(2));

        let bound = pure(a).and_then(f.clone()).run();
        let direct = f(a).run();
        prop_assert_eq!(bound, direct);
    }

    #[test]
    fn prop_right_identity(entry in "[a-z]{1,5}", a in any::<i32>()) {
        let bound = tell_then(entry.clone(), a)
            .and_then(pure::<i32, Vec<String>>)
            .run();
        prop_assert_eq!(bound, tell_then(entry, a).run());
    }

    #[test]
    fn prop_bind_associativity(
        first in "[a-z]{1,5}",
        second in "[a-z]{1,5}",
        third in "[a-z]{1,5}",
        a in any::<i32>()
    ) {
        let f = {
            let second = second.clone();
            move |x: i32| tell_then(second.clone(), x.wrapping_add(1))
        };
        let g = {
            let third = third.clone();
            move |x: i32| tell_then(third.clone(), x.wrapping_mul(3))
        };

        let left = tell_then(first.clone(), a)
            .and_then(f.clone())
            .and_then(g.clone())
            .run();
        let right = tell_then(first.clone(), a)
            .and_then(move |x| f(x).and_then(g.clone()))
            .run();

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.log, vec![first, second, third]);
    }

    #[test]
    fn prop_tell_concatenates(a in ".{0,8}", b in ".{0,8}") {
        let outcome = tell(a.clone()).then(tell(b.clone())).run();
        prop_assert_eq!(outcome.log, a + &b);
    }

    #[test]
    fn prop_map_never_touches_log(entries in prop::collection::vec("[a-z]{1,4}", 0..6)) {
        let plain = tell(entries.clone()).map(|_| 1).run();
        let mapped = tell(entries).map(|_| 1).map(|n| n + 1).run();
        prop_assert_eq!(plain.log, mapped.log);
        prop_assert_eq!(mapped.value, Some(2));
    }

    #[test]
    fn prop_failure_keeps_prefix(
        before in prop::collection::vec("[a-z]{1,4}", 0..6),
        after in prop::collection::vec("[a-z]{1,4}", 1..6)
    ) {
        let outcome = tell(before.clone())
            .then(fail::<(), _>())
            .then(tell(after))
            .run();
        prop_assert!(outcome.is_failed());
        prop_assert_eq!(outcome.log, before);
    }

    #[test]
    fn prop_listen_does_not_duplicate(entries in prop::collection::vec("[a-z]{1,4}", 0..6)) {
        let outcome = tell(entries.clone()).listen().run();
        prop_assert_eq!(outcome.value, Some(((), entries.clone())));
        prop_assert_eq!(outcome.log, entries);
    }

    #[test]
    fn prop_censor_identity_is_noop(entries in prop::collection::vec("[a-z]{1,4}", 0..6)) {
        let plain = tell(entries.clone()).run();
        let censored = tell(entries).censor(|w| w).run();
        prop_assert_eq!(plain, censored);
    }

    #[test]
    fn prop_eval_is_repeatable(entry in "[a-z]{1,5}", a in any::<i32>()) {
        let writer = tell_then(entry, a).filter(|n| n % 2 == 0);
        prop_assert_eq!(writer.run(), writer.run());
    }
}
