//! Monoid trait - a semigroup with an identity element.
//!
//! A writer starts every evaluation from [`Monoid::empty`] and appends each
//! write with [`Semigroup::combine`]. Any type implementing both can serve as a
//! writer log: message lists, strings, counters, cost totals, or tuples of them.
//!
//! # Laws
//!
//! ```text
//! M::empty().combine(a) == a           (left identity)
//! a.combine(M::empty()) == a           (right identity)
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Numeric logs
//!
//! Numbers have more than one lawful monoid, so they are logged through the
//! [`Sum`] and [`Product`] wrappers:
//!
//! ```
//! use scrivener::monoid::{fold_all, Sum};
//!
//! let cost = fold_all(vec![Sum(3u32), Sum(4), Sum(5)]);
//! assert_eq!(cost, Sum(12));
//! ```

use std::ops::{Add, Mul};

use crate::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Example
///
/// ```
/// use scrivener::{Monoid, Semigroup};
///
/// let log = vec!["step".to_string()];
/// assert_eq!(Vec::empty().combine(log.clone()), log);
/// assert_eq!(log.clone().combine(Vec::empty()), log);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element: combining with it changes nothing.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

macro_rules! impl_monoid_tuple {
    ($($T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn empty() -> Self {
                ($($T::empty(),)+)
            }
        }
    };
}

impl_monoid_tuple!(A, B);
impl_monoid_tuple!(A, B, C);
impl_monoid_tuple!(A, B, C, D);

/// Numeric log under addition. Identity: `T::default()` (zero).
///
/// ```
/// use scrivener::monoid::Sum;
/// use scrivener::Semigroup;
///
/// assert_eq!(Sum(5).combine(Sum(10)), Sum(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

/// Numeric log under multiplication. Identity: one.
///
/// ```
/// use scrivener::monoid::{fold_all, Product};
///
/// assert_eq!(fold_all(vec![Product(2), Product(3), Product(4)]), Product(24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<T>(pub T);

/// Types with a multiplicative identity.
pub trait One {
    /// The value `1`.
    fn one() -> Self;
}

macro_rules! impl_one {
    ($one:expr => $($t:ty),+) => {
        $(impl One for $t {
            fn one() -> Self {
                $one
            }
        })+
    };
}

impl_one!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_one!(1.0 => f32, f64);

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<T: Mul<Output = T> + One> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

/// Combine every item of `iter` left to right, starting from the identity.
///
/// An empty iterator yields `M::empty()`.
///
/// ```
/// use scrivener::monoid::fold_all;
///
/// let log: Vec<&str> = fold_all(vec![vec!["a"], vec![], vec!["b", "c"]]);
/// assert_eq!(log, vec!["a", "b", "c"]);
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), M::combine)
}
