const NUM_OF_OPERATIONS: usize = 20_000;

macro_rules! ordered_set_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use balanced_collections::{Error, Order, OrderedSet};
                use quickcheck::quickcheck;
                use rand::Rng;
                use std::collections::BTreeSet;
                use super::NUM_OF_OPERATIONS;

                fn assert_same_keys(set: &$type_name<u32>, expected: &BTreeSet<u32>) {
                    assert_eq!(set.len(), expected.len());
                    assert_eq!(
                        set.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                }

                #[test]
                fn int_test_insert_contains_remove() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();

                    while expected.len() < NUM_OF_OPERATIONS {
                        let key = rng.gen::<u32>();
                        assert_eq!(set.insert(key), expected.insert(key));
                    }
                    assert_same_keys(&set, &expected);

                    let keys = expected.iter().cloned().collect::<Vec<u32>>();
                    for key in &keys {
                        assert!(set.contains(key));
                        assert!(!set.insert(*key));
                    }

                    let mut removed = 0;
                    for key in keys.iter().step_by(3) {
                        assert!(set.remove(key));
                        assert!(!set.remove(key));
                        assert!(!set.contains(key));
                        expected.remove(key);
                        removed += 1;
                    }
                    assert_eq!(set.len(), NUM_OF_OPERATIONS - removed);
                    assert_same_keys(&set, &expected);
                }

                #[test]
                fn int_test_mixed_operations() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, 2_000);
                        match rng.gen_range(0, 4) {
                            0 | 1 => assert_eq!(set.insert(key), expected.insert(key)),
                            2 => assert_eq!(set.remove(&key), expected.remove(&key)),
                            _ => assert_eq!(set.contains(&key), expected.contains(&key)),
                        }
                        assert_eq!(set.len(), expected.len());
                    }
                    assert_same_keys(&set, &expected);
                    assert_eq!(set.min().ok(), expected.iter().next());
                    assert_eq!(set.max().ok(), expected.iter().next_back());

                    for probe in 0..2_100 {
                        assert_eq!(set.floor(&probe), expected.range(..=probe).next_back());
                        assert_eq!(set.ceil(&probe), expected.range(probe..).next());
                    }
                }

                #[test]
                fn int_test_drain_by_min() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut keys = (0..1_000).collect::<Vec<u32>>();
                    rng.shuffle(&mut keys);

                    let mut set = keys.into_iter().collect::<$type_name<u32>>();
                    let mut previous = None;
                    while let Ok(&min) = set.min() {
                        assert!(previous.map_or(true, |previous| previous < min));
                        assert!(set.remove(&min));
                        previous = Some(min);
                    }
                    assert_eq!(previous, Some(999));
                    assert!(set.is_empty());
                    assert_eq!(set.min(), Err(Error::EmptyCollection));
                    assert_eq!(set.max(), Err(Error::EmptyCollection));
                }

                #[test]
                fn int_test_clone_is_independent() {
                    let mut set = (0..500).collect::<$type_name<u32>>();
                    let copy = set.clone();
                    for key in 0..250 {
                        set.remove(&key);
                    }

                    assert_eq!(set.len(), 250);
                    assert_eq!(copy.len(), 500);
                    assert_eq!(copy.min(), Ok(&0));
                    assert!(copy.iter().cloned().eq(0..500));
                }

                #[test]
                fn int_test_traversals() {
                    let set = (1..=100).collect::<$type_name<u32>>();

                    for order in &[Order::InOrder, Order::PreOrder, Order::PostOrder, Order::BreadthFirst] {
                        let first = set.traverse(*order).collect::<Vec<&u32>>();
                        let second = set.traverse(*order).collect::<Vec<&u32>>();
                        assert_eq!(first, second);

                        let mut sorted = first.clone();
                        sorted.sort();
                        assert_eq!(sorted, set.iter().collect::<Vec<&u32>>());
                    }

                    assert_eq!(set.traverse(Order::PreOrder).next(), set.root());
                    assert_eq!(set.traverse(Order::BreadthFirst).next(), set.root());
                    assert_eq!(set.traverse(Order::PostOrder).last(), set.root());

                    let mut traversal = set.traverse(Order::InOrder);
                    traversal.next();
                    let fork = traversal.clone();
                    assert!(traversal.eq(fork));
                }

                #[test]
                fn int_test_generic_interface() {
                    fn exercise<S: OrderedSet<u32>>(set: &mut S) {
                        assert!(set.is_empty());
                        for key in (0..64).rev() {
                            assert!(set.insert(key));
                        }
                        assert!(set.remove(&10));
                        assert!(!set.contains(&10));
                        assert_eq!(set.len(), 63);
                        assert_eq!(set.min(), Ok(&0));
                        assert_eq!(set.max(), Ok(&63));
                        assert_eq!(set.traverse(Order::InOrder).count(), 63);
                        assert_eq!(set.render().lines().count(), 63);
                    }

                    exercise(&mut $type_name::new());
                }

                quickcheck! {
                    fn prop_matches_btreeset(ops: Vec<(bool, u8)>) -> bool {
                        let mut set = $type_name::new();
                        let mut expected = BTreeSet::new();
                        for (insert, key) in ops {
                            let key = u32::from(key);
                            let same = if insert {
                                set.insert(key) == expected.insert(key)
                            } else {
                                set.remove(&key) == expected.remove(&key)
                            };
                            if !same {
                                return false;
                            }
                        }
                        set.len() == expected.len() && set.iter().eq(expected.iter())
                    }
                }
            }
        )*
    }
}

ordered_set_tests!(avl_tree: AvlSet, red_black_tree: RedBlackSet);
