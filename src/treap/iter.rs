use crate::treap::node::{into_parts, Node, Tree};

/// An iterator over the elements of a treap.
///
/// This iterator traverses the elements in order and yields immutable references.
pub struct Iter<'a, T, S> {
    current: &'a Tree<T, S>,
    stack: Vec<&'a Node<T, S>>,
    remaining: usize,
}

impl<'a, T, S> Iter<'a, T, S> {
    pub(crate) fn new(tree: &'a Tree<T, S>, len: usize) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
            remaining: len,
        }
    }
}

impl<'a, T, S> Clone for Iter<'a, T, S> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T, S> Iterator for Iter<'a, T, S>
where
    T: 'a,
    S: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref value,
                ref right,
                ..
            } = node;
            self.current = right;
            self.remaining -= 1;
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, S> ExactSizeIterator for Iter<'a, T, S>
where
    T: 'a,
    S: 'a,
{
}

/// An owning iterator over the elements of a treap.
///
/// Values are moved out of nodes that no other treap shares and cloned out of the rest.
pub struct IntoIter<T, S> {
    current: Tree<T, S>,
    stack: Vec<(T, Tree<T, S>)>,
    remaining: usize,
}

impl<T, S> IntoIter<T, S> {
    pub(crate) fn new(tree: Tree<T, S>, len: usize) -> Self {
        IntoIter {
            current: tree,
            stack: Vec::new(),
            remaining: len,
        }
    }
}

impl<T, S> Iterator for IntoIter<T, S>
where
    T: Clone,
    S: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            let (value, left, right) = into_parts(node);
            self.current = left;
            self.stack.push((value, right));
        }
        self.stack.pop().map(|(value, right)| {
            self.current = right;
            self.remaining -= 1;
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, S> ExactSizeIterator for IntoIter<T, S>
where
    T: Clone,
    S: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::{IntoIter, Iter};
    use crate::treap::implicit_tree;
    use crate::treap::node::Tree;
    use std::rc::Rc;

    fn from_vec(values: Vec<u32>) -> Tree<u32, ()> {
        let len = values.len();
        implicit_tree::build(&mut values.into_iter(), len)
    }

    #[test]
    fn test_iter() {
        let tree = from_vec(vec![3, 1, 4, 1, 5]);
        let iter = Iter::new(&tree, 5);
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.collect::<Vec<&u32>>(), vec![&3, &1, &4, &1, &5]);
    }

    #[test]
    fn test_iter_empty() {
        let tree: Tree<u32, ()> = None;
        assert_eq!(Iter::new(&tree, 0).next(), None);
    }

    #[test]
    fn test_into_iter_unique() {
        let tree = from_vec(vec![1, 2, 3]);
        assert_eq!(IntoIter::new(tree, 3).collect::<Vec<u32>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_into_iter_shared() {
        let tree = from_vec(vec![1, 2, 3]);
        let other = tree.clone();
        assert_eq!(IntoIter::new(tree, 3).collect::<Vec<u32>>(), vec![1, 2, 3]);
        assert_eq!(Rc::strong_count(other.as_ref().unwrap()), 1);
        assert_eq!(Iter::new(&other, 3).count(), 3);
    }
}
