use persistent_treap::treap::{PersistentTreap, Treap};

const NUM_OF_OPERATIONS: usize = 10_000;

macro_rules! treap_list_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use persistent_treap::treap::$type_name;
                use rand::Rng;
                use super::{ListOps, NUM_OF_OPERATIONS};

                #[test]
                fn int_test_list() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut list: $type_name<u32> = Default::default();
                    let mut expected = Vec::new();

                    for i in 0..NUM_OF_OPERATIONS {
                        let index = rng.gen_range(0, i + 1);
                        let val = rng.gen::<u32>();

                        list = list.insert_at(index, val);
                        expected.insert(index, val);
                    }

                    assert_eq!(list.len(), expected.len());
                    assert_eq!(
                        list.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );

                    for i in (0..NUM_OF_OPERATIONS).rev() {
                        let index = rng.gen_range(0, i + 1);
                        let val = rng.gen::<u32>();

                        list = list.set_at(index, val);
                        expected[index] = val;

                        assert_eq!(list[index], expected[index]);
                        list = list.remove_at(index);
                        expected.remove(index);
                    }

                    assert!(list.is_empty());
                }

                #[test]
                fn int_test_slices() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
                    let expected: Vec<u32> = (0..1000).map(|_| rng.gen::<u32>()).collect();
                    let list: $type_name<u32> = expected.iter().cloned().collect();

                    for _ in 0..100 {
                        let start = rng.gen_range(0, expected.len() + 1);
                        let end = rng.gen_range(start, expected.len() + 1);
                        let slice = list.slice(start..end);
                        assert_eq!(
                            slice.iter().collect::<Vec<&u32>>(),
                            expected[start..end].iter().collect::<Vec<&u32>>(),
                        );
                    }
                    assert_eq!(list.len(), expected.len());
                }
            }
        )*
    }
}

trait ListOps: Sized {
    fn insert_at(self, index: usize, val: u32) -> Self;
    fn set_at(self, index: usize, val: u32) -> Self;
    fn remove_at(self, index: usize) -> Self;
}

impl ListOps for Treap<u32> {
    fn insert_at(mut self, index: usize, val: u32) -> Self {
        self.insert(index, val).unwrap();
        self
    }

    fn set_at(mut self, index: usize, val: u32) -> Self {
        self.set(index, val).unwrap();
        self
    }

    fn remove_at(mut self, index: usize) -> Self {
        self.remove(index).unwrap();
        self
    }
}

impl ListOps for PersistentTreap<u32> {
    fn insert_at(self, index: usize, val: u32) -> Self {
        self.insert(index, val).unwrap()
    }

    fn set_at(self, index: usize, val: u32) -> Self {
        self.set(index, val).unwrap()
    }

    fn remove_at(self, index: usize) -> Self {
        self.remove(index).unwrap()
    }
}

treap_list_tests!(treap: Treap, persistent: PersistentTreap);
