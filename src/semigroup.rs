//! Semigroup trait - the associative half of a log type.
//!
//! Every log a writer accumulates is glued together with [`Semigroup::combine`].
//! Writers always combine left to right (earlier writes on the left), so a
//! non-commutative log such as `Vec<String>` keeps its chronological order.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! The law is assumed, never checked. A non-associative `combine` makes the log
//! of a writer depend on how its binds were nested.
//!
//! # Example
//!
//! ```
//! use scrivener::Semigroup;
//!
//! let log = vec!["open".to_string()].combine(vec!["close".to_string()]);
//! assert_eq!(log, vec!["open", "close"]);
//!
//! assert_eq!("a".to_string().combine("b".to_string()), "ab");
//! ```

/// A type with an associative binary operation.
///
/// `combine` takes both sides by value so collection logs can be extended in
/// place instead of copied.
pub trait Semigroup: Sized {
    /// Append `other` after `self`.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, _other: Self) -> Self {}
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                ($(self.$idx.combine(other.$idx),)+)
            }
        }
    };
}

// Several logs written side by side, e.g. (messages, cost).
impl_semigroup_tuple!(0 A, 1 B);
impl_semigroup_tuple!(0 A, 1 B, 2 C);
impl_semigroup_tuple!(0 A, 1 B, 2 C, 3 D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_keeps_order() {
        let log = vec!["start".to_string()].combine(vec!["end".to_string()]);
        assert_eq!(log, vec!["start".to_string(), "end".to_string()]);
    }

    #[test]
    fn test_string_is_not_commutative() {
        assert_eq!("a".to_string().combine("b".to_string()), "ab");
        assert_eq!("b".to_string().combine("a".to_string()), "ba");
    }

    #[test]
    fn test_unit_combines_to_unit() {
        assert_eq!(().combine(()), ());
    }

    #[test]
    fn test_tuple_combines_componentwise() {
        let left = (vec![1], "a".to_string());
        let right = (vec![2], "b".to_string());
        assert_eq!(left.combine(right), (vec![1, 2], "ab".to_string()));
    }

    #[test]
    fn test_associativity_on_strings() {
        let (a, b, c) = ("x".to_string(), "y".to_string(), "z".to_string());
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_associativity_on_triples() {
        let a = (vec![1], "a".to_string(), ());
        let b = (vec![2], "b".to_string(), ());
        let c = (vec![3], "c".to_string(), ());
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }
}
