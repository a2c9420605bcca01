use crate::treap::list::Treap;
use crate::treap::persistent::PersistentTreap;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

// Both handles compare, hash and print as plain sequences of their values. The summary type
// never takes part.
macro_rules! impl_sequence_traits {
    ($type_name:ident) => {
        impl<T, S> PartialEq for $type_name<T, S>
        where
            T: PartialEq,
        {
            fn eq(&self, other: &$type_name<T, S>) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<T, S> Eq for $type_name<T, S> where T: Eq {}

        impl<T, S> PartialOrd for $type_name<T, S>
        where
            T: PartialOrd,
        {
            fn partial_cmp(&self, other: &$type_name<T, S>) -> Option<Ordering> {
                self.iter().partial_cmp(other.iter())
            }
        }

        impl<T, S> Ord for $type_name<T, S>
        where
            T: Ord,
        {
            fn cmp(&self, other: &$type_name<T, S>) -> Ordering {
                self.iter().cmp(other.iter())
            }
        }

        impl<T, S> Hash for $type_name<T, S>
        where
            T: Hash,
        {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.len().hash(state);
                for value in self.iter() {
                    value.hash(state);
                }
            }
        }

        impl<T, S> fmt::Debug for $type_name<T, S>
        where
            T: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(", stringify!($type_name))?;
                f.debug_list().entries(self.iter()).finish()?;
                write!(f, ")")
            }
        }

        impl<T, S> fmt::Display for $type_name<T, S>
        where
            T: fmt::Display,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (index, value) in self.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    };
}

impl_sequence_traits!(Treap);
impl_sequence_traits!(PersistentTreap);

#[cfg(test)]
mod tests {
    use crate::treap::{PersistentTreap, Sum, Treap};
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_hash_follows_values() {
        let list: Treap<u32> = (0..100).collect();
        let mut built = Treap::new();
        for value in (0..100u32).rev() {
            built.push_front(value);
        }
        assert_eq!(hash_of(&list), hash_of(&built));
        assert_eq!(hash_of(&list.snapshot()), hash_of(&built.snapshot()));

        let mut changed = list.clone();
        changed.set(50, 0).unwrap();
        assert_ne!(hash_of(&list), hash_of(&changed));
    }

    #[test]
    fn test_hash_set() {
        let a: PersistentTreap<u32> = vec![1, 2].into();
        let b = PersistentTreap::new().push_back(1).push_back(2);
        let c = a.push_back(3);

        let mut set = HashSet::new();
        assert!(set.insert(a));
        assert!(!set.insert(b));
        assert!(set.insert(c));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_summary_is_ignored() {
        let a: Treap<u32, Sum<u32>> = vec![3, 1, 2].into();
        let b: Treap<u32, Sum<u32>> = vec![3, 1, 2].into();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(format!("{:?}", a), "Treap([3, 1, 2])");
        assert_eq!(format!("{}", a.snapshot()), "[3, 1, 2]");
    }
}
