use crate::treap::implicit_tree;
use crate::treap::iter::{IntoIter, Iter};
use crate::treap::list::{repeat_tree, Treap};
use crate::treap::node::Tree;
use crate::treap::summary::Summary;
use crate::treap::{clamp_range, Error, Result};
use rand::thread_rng;
use std::iter::FromIterator;
use std::ops::{Add, Index, Mul, RangeBounds};

/// A fully persistent list implemented using an implicit treap.
///
/// Every operation that would modify the list instead returns a new version of it and leaves the
/// receiver untouched. Versions share all nodes that an operation did not touch, so each version
/// costs `O(log N)` expected additional memory. Cloning a version is `O(1)`.
///
/// # Examples
///
/// ```
/// use persistent_treap::treap::PersistentTreap;
///
/// let v1: PersistentTreap<u32> = vec![1, 2, 3].into();
/// let v2 = v1.set(0, 10).unwrap();
/// let v3 = v2.insert(3, 4).unwrap();
///
/// assert_eq!(v1.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
/// assert_eq!(v2.iter().collect::<Vec<&u32>>(), vec![&10, &2, &3]);
/// assert_eq!(v3.iter().collect::<Vec<&u32>>(), vec![&10, &2, &3, &4]);
/// ```
pub struct PersistentTreap<T, S = ()> {
    root: Tree<T, S>,
}

impl<T> PersistentTreap<T> {
    /// Constructs a new, empty `PersistentTreap<T>`. Lists with a summary are constructed with
    /// `PersistentTreap::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let list: PersistentTreap<u32> = PersistentTreap::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        PersistentTreap::default()
    }
}

impl<T, S> PersistentTreap<T, S> {
    pub(crate) fn from_tree(root: Tree<T, S>) -> Self {
        PersistentTreap { root }
    }

    pub(crate) fn tree(&self) -> &Tree<T, S> {
        &self.root
    }

    pub(crate) fn into_tree(self) -> Tree<T, S> {
        self.root
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        implicit_tree::len(&self.root)
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the underlying tree.
    pub fn height(&self) -> usize {
        implicit_tree::height(&self.root)
    }

    /// Returns an immutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let list: PersistentTreap<u32> = vec![1].into();
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        implicit_tree::get(&self.root, index)
    }

    /// Returns the first value of the list, or `None` if it is empty.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last value of the list, or `None` if it is empty.
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns the summary of the whole list, or `None` if it is empty.
    pub fn summary(&self) -> Option<&S> {
        self.root.as_ref().map(|node| &node.summary)
    }

    /// Returns an iterator over the list.
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter::new(&self.root, self.len())
    }
}

impl<T, S> PersistentTreap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    /// Returns a new version with `value` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let empty = PersistentTreap::new();
    /// let list = empty.push_back(1).push_back(2);
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// assert!(empty.is_empty());
    /// ```
    pub fn push_back(&self, value: T) -> Self {
        let root = implicit_tree::merge(
            self.root.clone(),
            implicit_tree::singleton(value),
            &mut thread_rng(),
        );
        PersistentTreap { root }
    }

    /// Returns a new version with `value` prepended.
    pub fn push_front(&self, value: T) -> Self {
        let root = implicit_tree::merge(
            implicit_tree::singleton(value),
            self.root.clone(),
            &mut thread_rng(),
        );
        PersistentTreap { root }
    }

    /// Returns a version without the last value, together with that value. Returns `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let list: PersistentTreap<u32> = vec![1, 2].into();
    /// let (rest, last) = list.pop_back().unwrap();
    /// assert_eq!(last, 2);
    /// assert_eq!(rest.len(), 1);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn pop_back(&self) -> Option<(Self, T)> {
        let index = self.len().checked_sub(1)?;
        let value = self.get(index)?.clone();
        let (rest, _) = implicit_tree::split(self.root.clone(), index);
        Some((PersistentTreap { root: rest }, value))
    }

    /// Returns a version without the first value, together with that value. Returns `None` if
    /// the list is empty.
    pub fn pop_front(&self) -> Option<(Self, T)> {
        let value = self.first()?.clone();
        let (_, rest) = implicit_tree::split(self.root.clone(), 1);
        Some((PersistentTreap { root: rest }, value))
    }

    /// Returns a version with `value` inserted at `index`. An index equal to the length of the
    /// list appends the value.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index > len`.
    pub fn insert(&self, index: usize, value: T) -> Result<Self> {
        self.insert_tree(index, implicit_tree::singleton(value))
    }

    /// Returns a version with all values of `other` inserted so that the first of them ends up at
    /// `index`. Both `self` and `other` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let list: PersistentTreap<u32> = vec![1, 4].into();
    /// let middle: PersistentTreap<u32> = vec![2, 3].into();
    /// let res = list.insert_all(1, &middle).unwrap();
    /// assert_eq!(res.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4]);
    /// assert!(list.insert_all(3, &middle).is_err());
    /// ```
    pub fn insert_all(&self, index: usize, other: &PersistentTreap<T, S>) -> Result<Self> {
        self.insert_tree(index, other.root.clone())
    }

    fn insert_tree(&self, index: usize, new_tree: Tree<T, S>) -> Result<Self> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        let root = implicit_tree::insert(self.root.clone(), index, new_tree, &mut thread_rng());
        Ok(PersistentTreap { root })
    }

    /// Returns a version without the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len`.
    pub fn remove(&self, index: usize) -> Result<Self> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        let (root, _) = implicit_tree::remove(self.root.clone(), index, &mut thread_rng());
        Ok(PersistentTreap { root })
    }

    /// Returns a version without the values in `range`. The range is clamped to the bounds of the
    /// list.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let list: PersistentTreap<u32> = (0..5).collect();
    /// let res = list.remove_range(1..4);
    /// assert_eq!(res.iter().collect::<Vec<&u32>>(), vec![&0, &4]);
    /// ```
    pub fn remove_range<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = clamp_range(range, self.len());
        let (prefix, _, suffix) = implicit_tree::cut(self.root.clone(), start, end);
        let root = implicit_tree::merge(prefix, suffix, &mut thread_rng());
        PersistentTreap { root }
    }

    /// Returns a version where the value at `index` is replaced by `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len`.
    pub fn set(&self, index: usize, value: T) -> Result<Self> {
        self.update(index, |curr| *curr = value)
    }

    /// Returns a version where `f` has been applied to the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let list: PersistentTreap<u32> = vec![1, 2].into();
    /// let res = list.update(1, |value| *value *= 10).unwrap();
    /// assert_eq!(res[1], 20);
    /// assert_eq!(list[1], 2);
    /// ```
    pub fn update<F>(&self, index: usize, f: F) -> Result<Self>
    where
        F: FnOnce(&mut T),
    {
        let mut root = self.root.clone();
        if implicit_tree::modify(&mut root, index, f) {
            Ok(PersistentTreap { root })
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Splits the list at `index` into `[0, index)` and `[index, len)`. The index is clamped to
    /// the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let list: PersistentTreap<u32> = (0..4).collect();
    /// let (left, right) = list.split(1);
    /// assert_eq!(left.iter().collect::<Vec<&u32>>(), vec![&0]);
    /// assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn split(&self, index: usize) -> (Self, Self) {
        let (left, right) = implicit_tree::split(self.root.clone(), index);
        (
            PersistentTreap { root: left },
            PersistentTreap { root: right },
        )
    }

    /// Returns the values in `range` as a new version. The range is clamped to the bounds of the
    /// list.
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = clamp_range(range, self.len());
        let (_, middle, _) = implicit_tree::cut(self.root.clone(), start, end);
        PersistentTreap { root: middle }
    }

    /// Returns the summary of the values in `range`, or `None` if the range is empty. The range is
    /// clamped to the bounds of the list.
    pub fn range_summary<R>(&self, range: R) -> Option<S>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = clamp_range(range, self.len());
        implicit_tree::fold(&self.root, start, end)
    }

    /// Returns the concatenation of `self` and `other`.
    pub fn concat(&self, other: &PersistentTreap<T, S>) -> Self {
        let root = implicit_tree::merge(self.root.clone(), other.root.clone(), &mut thread_rng());
        PersistentTreap { root }
    }

    /// Returns `n` copies of the list concatenated together. Copies share their nodes.
    ///
    /// # Panics
    ///
    /// Panics if `n * len` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::PersistentTreap;
    ///
    /// let list: PersistentTreap<u32> = vec![1, 2].into();
    /// let res = list.repeat(1000);
    /// assert_eq!(res.len(), 2000);
    /// assert_eq!(res[1999], 2);
    /// ```
    pub fn repeat(&self, n: usize) -> Self {
        let root = repeat_tree(&self.root, n, &mut thread_rng());
        PersistentTreap { root }
    }
}

impl<T, S> Clone for PersistentTreap<T, S> {
    fn clone(&self) -> Self {
        PersistentTreap {
            root: self.root.clone(),
        }
    }
}

impl<T, S> Default for PersistentTreap<T, S> {
    fn default() -> Self {
        PersistentTreap { root: None }
    }
}

impl<T, S> FromIterator<T> for PersistentTreap<T, S>
where
    S: Summary<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = iter.into_iter().collect();
        let len = values.len();
        log::trace!("building persistent treap of {} values", len);
        PersistentTreap {
            root: implicit_tree::build(&mut values.into_iter(), len),
        }
    }
}

impl<T, S> From<Vec<T>> for PersistentTreap<T, S>
where
    S: Summary<T>,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> From<Treap<T, S>> for PersistentTreap<T, S> {
    fn from(treap: Treap<T, S>) -> Self {
        PersistentTreap {
            root: treap.into_tree(),
        }
    }
}

impl<T, S> IntoIterator for PersistentTreap<T, S>
where
    T: Clone,
    S: Clone,
{
    type IntoIter = IntoIter<T, S>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.root, len)
    }
}

impl<'a, T, S> IntoIterator for &'a PersistentTreap<T, S>
where
    T: 'a,
    S: 'a,
{
    type IntoIter = Iter<'a, T, S>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S> Add<&'a PersistentTreap<T, S>> for &'a PersistentTreap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    type Output = PersistentTreap<T, S>;

    fn add(self, other: &'a PersistentTreap<T, S>) -> PersistentTreap<T, S> {
        self.concat(other)
    }
}

impl<T, S> Add for PersistentTreap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    type Output = PersistentTreap<T, S>;

    fn add(self, other: PersistentTreap<T, S>) -> PersistentTreap<T, S> {
        let root = implicit_tree::merge(self.root, other.root, &mut thread_rng());
        PersistentTreap { root }
    }
}

impl<'a, T, S> Mul<usize> for &'a PersistentTreap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    type Output = PersistentTreap<T, S>;

    fn mul(self, n: usize) -> PersistentTreap<T, S> {
        self.repeat(n)
    }
}

impl<T, S> Mul<usize> for PersistentTreap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    type Output = PersistentTreap<T, S>;

    fn mul(self, n: usize) -> PersistentTreap<T, S> {
        self.repeat(n)
    }
}

impl<T, S> Index<usize> for PersistentTreap<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}
