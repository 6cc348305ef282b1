//! Set algebra on [`ValSet`]: union (`+`), intersection (`*`) and symmetric difference (`/`).
//!
//! Each operation builds a fresh set and leaves its operands untouched. The operators are
//! available on both owned and borrowed sets.
//!
//! ```
//! use valset::ValSet;
//! let a: ValSet<i32> = ValSet::from([1, 2, 3]);
//! let b: ValSet<i32> = ValSet::from([2, 3, 4]);
//! assert_eq!(&a + &b, ValSet::from([1, 2, 3, 4]));
//! assert_eq!(&a * &b, ValSet::from([2, 3]));
//! assert_eq!(&a / &b, ValSet::from([1, 4]));
//! ```

use crate::ValSet;
use std::ops::{Add, Div, Mul};

impl<T: PartialEq + Clone> ValSet<T> {
    /// Elements present in `self` or in `other`.
    pub fn union(&self, other: &ValSet<T>) -> ValSet<T> {
        let mut result = ValSet::new();
        result.extend(self.items().iter().cloned());
        result.extend(other.items().iter().cloned());
        result
    }

    /// Elements of `self` that are also present in `other`.
    pub fn intersection(&self, other: &ValSet<T>) -> ValSet<T> {
        let mut result = ValSet::new();
        result.extend(self.items().iter().filter(|v| other.contains(v)).cloned());
        result
    }

    /// Elements present in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &ValSet<T>) -> ValSet<T> {
        let mut result = ValSet::new();
        result.extend(self.items().iter().filter(|v| !other.contains(v)).cloned());
        result.extend(other.items().iter().filter(|v| !self.contains(v)).cloned());
        result
    }
}

macro_rules! set_operator {
    ($op:ident, $method:ident, $set_fn:ident) => {
        impl<T: PartialEq + Clone> $op<&ValSet<T>> for &ValSet<T> {
            type Output = ValSet<T>;

            fn $method(self, rhs: &ValSet<T>) -> ValSet<T> {
                self.$set_fn(rhs)
            }
        }

        impl<T: PartialEq + Clone> $op<&ValSet<T>> for ValSet<T> {
            type Output = ValSet<T>;

            fn $method(self, rhs: &ValSet<T>) -> ValSet<T> {
                self.$set_fn(rhs)
            }
        }

        impl<T: PartialEq + Clone> $op<ValSet<T>> for ValSet<T> {
            type Output = ValSet<T>;

            fn $method(self, rhs: ValSet<T>) -> ValSet<T> {
                self.$set_fn(&rhs)
            }
        }
    };
}

set_operator!(Add, add, union);
set_operator!(Mul, mul, intersection);
set_operator!(Div, div, symmetric_difference);

#[cfg(test)]
mod test {
    use super::*;

    fn abc() -> (ValSet<i32>, ValSet<i32>) {
        (ValSet::from([1, 2, 3]), ValSet::from([2, 3, 4]))
    }

    #[test]
    fn test_union() {
        let (a, b) = abc();
        let u = &a + &b;
        assert_eq!(u.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(u, b.union(&a));
        // operands are untouched
        assert_eq!(a.to_vec(), vec![1, 2, 3]);
        assert_eq!(b.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_intersection() {
        let (a, b) = abc();
        let i = &a * &b;
        assert_eq!(i.to_vec(), vec![2, 3]);
        assert_eq!(i, b.intersection(&a));
        assert!((&a * &ValSet::new()).is_empty());
    }

    #[test]
    fn test_symmetric_difference() {
        let (a, b) = abc();
        let d = &a / &b;
        assert_eq!(d.to_vec(), vec![1, 4]);
        assert_eq!(d, b.symmetric_difference(&a));
        assert_eq!(&a / &ValSet::new(), a);
    }

    #[test]
    fn test_self_operations() {
        let (a, _) = abc();
        assert_eq!(&a + &a, a);
        assert_eq!(&a * &a, a);
        assert!((&a / &a).is_empty());
    }

    #[test]
    fn test_owned_operands() {
        let (a, b) = abc();
        assert_eq!(a.clone() + &b, ValSet::from([1, 2, 3, 4]));
        assert_eq!(a.clone() * b.clone(), ValSet::from([2, 3]));
        assert_eq!(a / b, ValSet::from([1, 4]));
    }
}
