//! The nested construction exercised by the `persistent-treap` binary.

use crate::treap::{PersistentTreap, Treap};
use std::rc::Rc;

/// Builds a `Treap` of `[[1], [2]]`, copies it into a `PersistentTreap`, copies that into another
/// `Treap`, and returns how many handles share the first element.
///
/// All three layers are still alive when the count is taken, so each holds one reference.
///
/// # Examples
///
/// ```
/// assert_eq!(persistent_treap::demo::nested_reference_count(), 3);
/// ```
pub fn nested_reference_count() -> usize {
    let inner: Treap<Rc<Vec<i64>>> = vec![Rc::new(vec![1]), Rc::new(vec![2])].into();
    let persistent: PersistentTreap<Rc<Vec<i64>>> = inner.iter().cloned().collect();
    let outer: Treap<Rc<Vec<i64>>> = persistent.iter().cloned().collect();
    log::debug!(
        "inner: {:?}, persistent: {:?}, outer: {:?}",
        inner,
        persistent,
        outer
    );
    Rc::strong_count(&outer[0])
}

#[cfg(test)]
mod tests {
    use super::nested_reference_count;

    #[test]
    fn test_nested_reference_count() {
        assert_eq!(nested_reference_count(), 3);
    }
}
