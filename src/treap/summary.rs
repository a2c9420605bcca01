use serde_derive::{Deserialize, Serialize};
use std::ops::Add;

/// An associative aggregate maintained at every node of a treap.
///
/// `combine` must be associative, but it does not need to be commutative: the left operand always
/// summarizes elements that come before the right operand.
pub trait Summary<T>: Clone {
    /// Summarizes a single element.
    fn summarize(value: &T) -> Self;

    /// Combines the summaries of two adjacent runs of elements.
    fn combine(left: &Self, right: &Self) -> Self;
}

impl<T> Summary<T> for () {
    fn summarize(_: &T) -> Self {}

    fn combine(_: &Self, _: &Self) -> Self {}
}

/// The sum of a run of elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sum<T>(pub T);

impl<T> Summary<T> for Sum<T>
where
    T: Add<Output = T> + Clone,
{
    fn summarize(value: &T) -> Self {
        Sum(value.clone())
    }

    fn combine(left: &Self, right: &Self) -> Self {
        Sum(left.0.clone() + right.0.clone())
    }
}

/// The minimum of a run of elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Min<T>(pub T);

impl<T> Summary<T> for Min<T>
where
    T: Ord + Clone,
{
    fn summarize(value: &T) -> Self {
        Min(value.clone())
    }

    fn combine(left: &Self, right: &Self) -> Self {
        if right.0 < left.0 {
            right.clone()
        } else {
            left.clone()
        }
    }
}

/// The maximum of a run of elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Max<T>(pub T);

impl<T> Summary<T> for Max<T>
where
    T: Ord + Clone,
{
    fn summarize(value: &T) -> Self {
        Max(value.clone())
    }

    fn combine(left: &Self, right: &Self) -> Self {
        if right.0 > left.0 {
            right.clone()
        } else {
            left.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Max, Min, Sum, Summary};

    #[test]
    fn test_sum() {
        let left: Sum<i32> = Summary::summarize(&3);
        let right = Sum::summarize(&4);
        assert_eq!(Sum::combine(&left, &right), Sum(7));
    }

    #[test]
    fn test_min_max() {
        let a: Min<i32> = Summary::summarize(&3);
        let b = Min::summarize(&-1);
        assert_eq!(Min::combine(&a, &b), Min(-1));

        let a: Max<i32> = Summary::summarize(&3);
        let b = Max::summarize(&-1);
        assert_eq!(Max::combine(&a, &b), Max(3));
    }
}
