use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

macro_rules! ordered_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use criterion::{black_box, Criterion};
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            set.insert(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_contains(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut keys = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        set.insert(key);
                        keys.push(key);
                    }

                    c.bench_function(&format!("bench {} contains", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(set.contains(key));
                        }
                    }));
                }

                pub fn bench_insert_remove(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert remove", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::new();
                        let mut keys = Vec::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.next_u32();
                            set.insert(key);
                            keys.push(key);
                        }
                        for key in &keys {
                            black_box(set.remove(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_contains,
            bench_btreeset_insert,
            $(
                $module_name::bench_contains,
                $module_name::bench_insert,
                $module_name::bench_insert_remove,
            )*
        );
    }
}

ordered_set_benches!(
    avl_tree: AvlSet,
    red_black_tree: RedBlackSet,
);

criterion_main!(benches);
