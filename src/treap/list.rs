use crate::treap::implicit_tree;
use crate::treap::iter::{IntoIter, Iter};
use crate::treap::node::Tree;
use crate::treap::persistent::PersistentTreap;
use crate::treap::summary::Summary;
use crate::treap::{clamp_range, Error, Result};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::iter::FromIterator;
use std::mem;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, RangeBounds};

/// A list implemented using an implicit treap with shared nodes.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. An
/// implicit treap is a treap where the key of a node is implicitly determined by the size of its
/// left subtree. This property allows the list to get, remove, and insert at an arbitrary index
/// in expected `O(log N)` time.
///
/// Nodes are reference counted. Cloning a `Treap`, taking a [`snapshot`](Treap::snapshot) or a
/// [`slice`](Treap::slice) shares the existing nodes, and a later update copies only the nodes on
/// the updated path that are still shared. The other handles never observe the update.
///
/// The second type parameter is a [`Summary`] maintained for every subtree, which allows
/// aggregating any range in `O(log N)` time.
///
/// # Examples
///
/// ```
/// use persistent_treap::treap::Treap;
///
/// let mut list = Treap::new();
/// list.insert(0, 1).unwrap();
/// list.push_back(2);
/// list.push_front(3);
///
/// assert_eq!(list.get(0), Some(&3));
/// assert_eq!(list.get(3), None);
/// assert_eq!(list.len(), 3);
///
/// *list.get_mut(0).unwrap() += 1;
/// assert_eq!(list.pop_front(), Some(4));
/// assert_eq!(list.pop_back(), Some(2));
/// ```
pub struct Treap<T, S = ()> {
    tree: Tree<T, S>,
    rng: XorShiftRng,
}

impl<T> Treap<T> {
    /// Constructs a new, empty `Treap<T>`. Lists with a summary are constructed with
    /// `Treap::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let list: Treap<u32> = Treap::new();
    /// ```
    pub fn new() -> Self {
        Treap::default()
    }
}

impl<T, S> Treap<T, S> {
    /// Constructs a new, empty `Treap<T, S>` whose balancing decisions are drawn from a generator
    /// seeded with `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let list: Treap<u32> = Treap::with_seed([1, 2, 3, 4]);
    /// assert!(list.is_empty());
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        Treap {
            tree: None,
            rng: SeedableRng::from_seed(seed),
        }
    }

    pub(crate) fn from_tree(tree: Tree<T, S>) -> Self {
        Treap {
            tree,
            rng: XorShiftRng::new_unseeded(),
        }
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        implicit_tree::len(&self.tree)
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let list: Treap<u32> = Treap::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Returns the height of the underlying tree.
    pub fn height(&self) -> usize {
        implicit_tree::height(&self.tree)
    }

    /// Returns an immutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        implicit_tree::get(&self.tree, index)
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
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::{Sum, Treap};
    ///
    /// let list: Treap<u32, Sum<u32>> = (1..=4).collect();
    /// assert_eq!(list.summary(), Some(&Sum(10)));
    /// ```
    pub fn summary(&self) -> Option<&S> {
        self.tree.as_ref().map(|node| &node.summary)
    }

    /// Clears the list, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// list.clear();
    /// assert_eq!(list.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns an iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter::new(&self.tree, self.len())
    }

    /// Returns a persistent version of the current contents in `O(1)` time. Later updates to this
    /// list do not affect the snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list: Treap<u32> = (0..3).collect();
    /// let snapshot = list.snapshot();
    /// list.push_back(3);
    /// assert_eq!(snapshot.len(), 3);
    /// ```
    pub fn snapshot(&self) -> PersistentTreap<T, S> {
        PersistentTreap::from_tree(self.tree.clone())
    }

    pub(crate) fn tree(&self) -> &Tree<T, S> {
        &self.tree
    }

    pub(crate) fn into_tree(self) -> Tree<T, S> {
        self.tree
    }
}

impl<T, S> Treap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    /// Inserts a value into the list at a particular index, shifting elements one position to the
    /// right if needed. An index equal to the length of the list appends the value.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.insert(0, 1).unwrap();
    /// list.insert(0, 2).unwrap();
    /// assert_eq!(list.get(0), Some(&2));
    /// assert_eq!(list.get(1), Some(&1));
    /// assert!(list.insert(3, 3).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.insert_tree(index, implicit_tree::singleton(value))
    }

    /// Inserts all values of `other` into the list so that the first of them ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list: Treap<u32> = vec![1, 4].into();
    /// list.insert_all(1, vec![2, 3].into()).unwrap();
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4]);
    /// ```
    pub fn insert_all(&mut self, index: usize, other: Treap<T, S>) -> Result<()> {
        self.insert_tree(index, other.tree)
    }

    fn insert_tree(&mut self, index: usize, new_tree: Tree<T, S>) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        let Treap {
            ref mut tree,
            ref mut rng,
        } = self;
        *tree = implicit_tree::insert(tree.take(), index, new_tree, rng);
        Ok(())
    }

    /// Removes a value at a particular index from the list. Returns the value at the index.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// assert_eq!(list.remove(0).unwrap(), 1);
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        let Treap {
            ref mut tree,
            ref mut rng,
        } = self;
        let (new_tree, value) = implicit_tree::remove(tree.take(), index, rng);
        *tree = new_tree;
        value.ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Removes the values in `range` from the list and returns them as a new list. The range is
    /// clamped to the bounds of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list: Treap<u32> = (0..6).collect();
    /// let removed = list.remove_range(1..3);
    /// assert_eq!(removed.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&0, &3, &4, &5]);
    /// ```
    pub fn remove_range<R>(&mut self, range: R) -> Treap<T, S>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = clamp_range(range, self.len());
        let Treap {
            ref mut tree,
            ref mut rng,
        } = self;
        let (prefix, middle, suffix) = implicit_tree::cut(tree.take(), start, end);
        *tree = implicit_tree::merge(prefix, suffix, rng);
        Treap {
            tree: middle,
            rng: rng.gen(),
        }
    }

    /// Replaces the value at a particular index, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list: Treap<u32> = vec![1, 2].into();
    /// assert_eq!(list.set(1, 3).unwrap(), 2);
    /// assert_eq!(list[1], 3);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let mut value = Some(value);
        let mut old = None;
        self.update(index, |curr| old = value.take().map(|value| mem::replace(curr, value)))?;
        old.ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Applies `f` to the value at a particular index and refreshes the summaries that depend on
    /// it.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::{Sum, Treap};
    ///
    /// let mut list: Treap<u32, Sum<u32>> = vec![1, 2, 3].into();
    /// list.update(0, |value| *value += 10).unwrap();
    /// assert_eq!(list.summary(), Some(&Sum(16)));
    /// ```
    pub fn update<F>(&mut self, index: usize, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        if implicit_tree::modify(&mut self.tree, index, f) {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Inserts a value at the front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.get(0), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let Treap {
            ref mut tree,
            ref mut rng,
        } = self;
        *tree = implicit_tree::merge(implicit_tree::singleton(value), tree.take(), rng);
    }

    /// Inserts a value at the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.get(0), Some(&1));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let Treap {
            ref mut tree,
            ref mut rng,
        } = self;
        *tree = implicit_tree::merge(tree.take(), implicit_tree::singleton(value), rng);
    }

    /// Removes a value at the front of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_front(), Some(1));
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0).ok()
    }

    /// Removes a value at the back of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_back(), Some(2));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.len().checked_sub(1)?;
        self.remove(index).ok()
    }

    /// Splits the list into two at the given index. Returns a list containing the elements in
    /// `[index, len)` and leaves `[0, index)` in place. The index is clamped to the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list: Treap<u32> = (0..4).collect();
    /// let tail = list.split_off(1);
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&0]);
    /// assert_eq!(tail.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn split_off(&mut self, index: usize) -> Treap<T, S> {
        let (left, right) = implicit_tree::split(self.tree.take(), index);
        self.tree = left;
        Treap {
            tree: right,
            rng: self.rng.gen(),
        }
    }

    /// Moves all elements of `other` to the back of the list, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list: Treap<u32> = vec![1].into();
    /// let mut other: Treap<u32> = vec![2, 3].into();
    /// list.append(&mut other);
    /// assert_eq!(list.len(), 3);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Treap<T, S>) {
        let Treap {
            ref mut tree,
            ref mut rng,
        } = self;
        *tree = implicit_tree::merge(tree.take(), other.tree.take(), rng);
    }

    /// Returns a new list containing the values in `range` in `O(log N)` time. The new list shares
    /// its nodes with this one. The range is clamped to the bounds of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let list: Treap<u32> = (0..10).collect();
    /// let slice = list.slice(2..5);
    /// assert_eq!(slice.iter().collect::<Vec<&u32>>(), vec![&2, &3, &4]);
    /// assert_eq!(list.len(), 10);
    /// ```
    pub fn slice<R>(&self, range: R) -> Treap<T, S>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = clamp_range(range, self.len());
        let (_, middle, _) = implicit_tree::cut(self.tree.clone(), start, end);
        Treap {
            tree: middle,
            rng: self.rng.clone().gen(),
        }
    }

    /// Returns the summary of the values in `range`, or `None` if the range is empty. The range is
    /// clamped to the bounds of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::{Min, Treap};
    ///
    /// let list: Treap<u32, Min<u32>> = vec![5, 3, 8, 1].into();
    /// assert_eq!(list.range_summary(0..3), Some(Min(3)));
    /// assert_eq!(list.range_summary(2..2), None);
    /// ```
    pub fn range_summary<R>(&self, range: R) -> Option<S>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = clamp_range(range, self.len());
        implicit_tree::fold(&self.tree, start, end)
    }

    /// Returns a list made of `n` copies of this one. Copies share their nodes, so this takes
    /// `O(log N * log n)` expected time and memory.
    ///
    /// # Panics
    ///
    /// Panics if `n * len` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let list: Treap<u32> = vec![1, 2].into();
    /// let repeated = list.repeat(3);
    /// assert_eq!(repeated.len(), 6);
    /// assert_eq!(repeated[5], 2);
    /// ```
    pub fn repeat(&self, n: usize) -> Treap<T, S> {
        let mut rng: XorShiftRng = self.rng.clone().gen();
        let tree = repeat_tree(&self.tree, n, &mut rng);
        Treap { tree, rng }
    }
}

/// Concatenates `n` copies of `tree`.
///
/// # Panics
///
/// Panics if the resulting length overflows `usize`.
pub(crate) fn repeat_tree<T, S, R>(tree: &Tree<T, S>, n: usize, rng: &mut R) -> Tree<T, S>
where
    T: Clone,
    S: Summary<T>,
    R: Rng,
{
    let len = implicit_tree::len(tree);
    assert!(len.checked_mul(n).is_some(), "Error: length overflow.");
    repeat_shared(tree, n, rng)
}

fn repeat_shared<T, S, R>(tree: &Tree<T, S>, n: usize, rng: &mut R) -> Tree<T, S>
where
    T: Clone,
    S: Summary<T>,
    R: Rng,
{
    if n == 0 {
        None
    } else if n % 2 == 1 {
        let rest = repeat_shared(tree, n - 1, rng);
        implicit_tree::merge(rest, tree.clone(), rng)
    } else {
        let half = repeat_shared(tree, n / 2, rng);
        implicit_tree::merge(half.clone(), half, rng)
    }
}

impl<T> Treap<T>
where
    T: Clone,
{
    /// Returns a mutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds. Nodes on the path that are shared with another list are copied
    /// first.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::treap::Treap;
    ///
    /// let mut list = Treap::new();
    /// list.push_back(1);
    /// let copy = list.clone();
    /// *list.get_mut(0).unwrap() = 2;
    /// assert_eq!(list.get(0), Some(&2));
    /// assert_eq!(copy.get(0), Some(&1));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        implicit_tree::make_mut(&mut self.tree, index)
    }
}

impl<T, S> Clone for Treap<T, S> {
    fn clone(&self) -> Self {
        Treap {
            tree: self.tree.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T, S> Default for Treap<T, S> {
    fn default() -> Self {
        Treap::from_tree(None)
    }
}

impl<T, S> FromIterator<T> for Treap<T, S>
where
    S: Summary<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = iter.into_iter().collect();
        let len = values.len();
        log::trace!("building treap of {} values", len);
        Treap::from_tree(implicit_tree::build(&mut values.into_iter(), len))
    }
}

impl<T, S> From<Vec<T>> for Treap<T, S>
where
    S: Summary<T>,
{
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> From<PersistentTreap<T, S>> for Treap<T, S> {
    fn from(treap: PersistentTreap<T, S>) -> Self {
        Treap::from_tree(treap.into_tree())
    }
}

impl<T, S> Extend<T> for Treap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut other: Treap<T, S> = iter.into_iter().collect();
        self.append(&mut other);
    }
}

impl<T, S> IntoIterator for Treap<T, S>
where
    T: Clone,
    S: Clone,
{
    type IntoIter = IntoIter<T, S>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.tree, len)
    }
}

impl<'a, T, S> IntoIterator for &'a Treap<T, S>
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

impl<T, S> Add for Treap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    type Output = Treap<T, S>;

    fn add(mut self, mut other: Treap<T, S>) -> Treap<T, S> {
        self.append(&mut other);
        self
    }
}

impl<T, S> AddAssign for Treap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    fn add_assign(&mut self, mut other: Treap<T, S>) {
        self.append(&mut other);
    }
}

impl<T, S> Mul<usize> for Treap<T, S>
where
    T: Clone,
    S: Summary<T>,
{
    type Output = Treap<T, S>;

    fn mul(self, n: usize) -> Treap<T, S> {
        self.repeat(n)
    }
}

impl<T, S> Index<usize> for Treap<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}

impl<T> IndexMut<usize> for Treap<T>
where
    T: Clone,
{
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Error: index out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::Treap;
    use crate::treap::{Error, Max, Sum};
    use rand::Rng;

    #[test]
    fn test_len_empty() {
        let list: Treap<u32> = Treap::new();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let list: Treap<u32> = Treap::new();
        assert!(list.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        assert_eq!(list.get(0), Some(&1));
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        match list.insert(2, 2) {
            Err(Error::IndexOutOfBounds { index, len }) => assert_eq!((index, len), (2, 1)),
            _ => panic!("expected an out of bounds error"),
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        let ret = list.remove(0).unwrap();
        assert_eq!(list.get(0), None);
        assert_eq!(ret, 1);
        assert!(list.remove(0).is_err());
    }

    #[test]
    fn test_get_mut() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        {
            let value = list.get_mut(0);
            *value.unwrap() = 3;
        }
        assert_eq!(list.get(0), Some(&3));
    }

    #[test]
    fn test_first_last() {
        let list: Treap<u32> = vec![1, 2, 3].into();
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.last(), Some(&3));

        let empty: Treap<u32> = Treap::new();
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_push_front() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        list.push_front(2);
        assert_eq!(list.get(0), Some(&2));
    }

    #[test]
    fn test_push_back() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        list.push_back(2);
        assert_eq!(list.get(1), Some(&2));
    }

    #[test]
    fn test_pop_front() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        list.insert(1, 2).unwrap();
        assert_eq!(list.pop_front(), Some(1));
    }

    #[test]
    fn test_pop_back() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        list.insert(1, 2).unwrap();
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_set() {
        let mut list: Treap<u32> = vec![1, 2, 3].into();
        assert_eq!(list.set(2, 4).unwrap(), 3);
        assert!(list.set(3, 4).is_err());
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1, &2, &4]);
    }

    #[test]
    fn test_add() {
        let mut n = Treap::new();
        n.insert(0, 1).unwrap();
        n.insert(0, 2).unwrap();
        n.insert(1, 3).unwrap();

        let mut m = Treap::new();
        m.insert(0, 4).unwrap();
        m.insert(0, 5).unwrap();
        m.insert(1, 6).unwrap();

        let res = n + m;

        assert_eq!(
            res.iter().collect::<Vec<&u32>>(),
            vec![&2, &3, &1, &5, &6, &4],
        );
        assert_eq!(res.len(), 6);
    }

    #[test]
    fn test_mul() {
        let list: Treap<u32> = vec![1, 2, 3].into();
        let res = list.clone() * 5;
        assert_eq!(res.len(), 15);
        assert_eq!(
            res.into_iter().collect::<Vec<u32>>(),
            [1, 2, 3].iter().cycle().take(15).cloned().collect::<Vec<u32>>(),
        );
        assert!((list * 0).is_empty());
    }

    #[test]
    #[should_panic(expected = "length overflow")]
    fn test_mul_length_overflow() {
        let list: Treap<u32> = vec![1, 2, 3].into();
        let _ = list * (usize::MAX / 2);
    }

    #[test]
    fn test_derived_lists_are_reseeded() {
        let mut list: Treap<u32> = Treap::with_seed([1, 2, 3, 4]);
        list.extend(0..10);

        let mut slice = list.slice(..);
        let mut tail = list.split_off(5);
        let mut removed = list.remove_range(..2);

        let mut outputs = vec![
            list.rng.next_u32(),
            slice.rng.next_u32(),
            tail.rng.next_u32(),
            removed.rng.next_u32(),
        ];
        outputs.sort();
        outputs.dedup();
        assert_eq!(outputs.len(), 4);
    }

    #[test]
    fn test_split_off_and_append() {
        let mut list: Treap<u32> = (0..10).collect();
        let mut tail = list.split_off(4);
        assert_eq!(list.len(), 4);
        assert_eq!(tail.len(), 6);
        list.append(&mut tail);
        assert!(tail.is_empty());
        assert_eq!(list.into_iter().collect::<Vec<u32>>(), (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_remove_range_clamped() {
        let mut list: Treap<u32> = (0..5).collect();
        let removed = list.remove_range(3..100);
        assert_eq!(removed.into_iter().collect::<Vec<u32>>(), vec![3, 4]);
        assert_eq!(list.into_iter().collect::<Vec<u32>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut list: Treap<u32> = (0..5).collect();
        let copy = list.clone();
        list.push_back(5);
        list[0] = 10;
        list.remove(1).unwrap();
        assert_eq!(copy.into_iter().collect::<Vec<u32>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.into_iter().collect::<Vec<u32>>(), vec![10, 2, 3, 4, 5]);
    }

    #[test]
    fn test_slice_is_independent() {
        let mut list: Treap<u32> = (0..5).collect();
        let slice = list.slice(1..=3);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(slice.into_iter().collect::<Vec<u32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_summary() {
        let mut list: Treap<i32, Sum<i32>> = (1..=10).collect();
        assert_eq!(list.summary(), Some(&Sum(55)));
        assert_eq!(list.range_summary(..3), Some(Sum(6)));
        list.set(0, 100).unwrap();
        list.remove(9).unwrap();
        assert_eq!(list.summary(), Some(&Sum(144)));

        let list: Treap<i32, Max<i32>> = vec![3, 9, 2].into();
        assert_eq!(list.range_summary(..), Some(Max(9)));
        assert_eq!(list.range_summary(2..), Some(Max(2)));
    }

    #[test]
    fn test_extend() {
        let mut list: Treap<u32> = vec![1].into();
        list.extend(vec![2, 3]);
        assert_eq!(list.into_iter().collect::<Vec<u32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_cmp() {
        let a: Treap<u32> = vec![1, 2].into();
        let b: Treap<u32> = vec![1, 3].into();
        let c: Treap<u32> = vec![1, 2, 0].into();
        assert!(a < b);
        assert!(a < c);
        assert_eq!(a, a.clone());
        assert_ne!(a, c);
    }

    #[test]
    fn test_fmt() {
        let list: Treap<u32> = vec![1, 2].into();
        assert_eq!(format!("{:?}", list), "Treap([1, 2])");
        assert_eq!(format!("{}", list), "[1, 2]");
    }

    #[test]
    fn test_into_iter() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        list.insert(0, 2).unwrap();
        list.insert(1, 3).unwrap();

        assert_eq!(list.into_iter().collect::<Vec<u32>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_iter() {
        let mut list = Treap::new();
        list.insert(0, 1).unwrap();
        list.insert(0, 2).unwrap();
        list.insert(1, 3).unwrap();

        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&2, &3, &1]);
    }
}
