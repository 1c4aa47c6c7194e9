use core::hash::Hash;
use core::hash::Hasher;
use core::hint::black_box;

use chain_hash::HashMap as ChainHashMap;
use chain_hash::HashTable as ChainHashTable;
use chain_hash::hash_table::Entry as ChainEntry;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::hash_table::Entry as HashbrownEntry;
use hashbrown::hash_table::HashTable as HashbrownHashTable;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use siphasher::sip::SipHasher;

trait KeyValuePair: Clone {
    fn new(key: u64) -> Self;

    fn hash_key(&self) -> u64;
    fn eq_key(&self, other: &Self) -> bool;
}

#[derive(Clone)]
struct TestItem {
    key: String,
    _value: u64,
}

impl KeyValuePair for TestItem {
    fn new(key: u64) -> Self {
        black_box(Self {
            key: format!("key_{:016X}", key),
            _value: key,
        })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

#[derive(Clone)]
struct SmallTestItem {
    key: u64,
}

impl KeyValuePair for SmallTestItem {
    fn new(key: u64) -> Self {
        black_box(Self { key })
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.key.hash(&mut hasher);
        hasher.finish()
    }

    fn eq_key(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 11),
    (1 << 12),
    (1 << 13),
    (1 << 14),
    (1 << 15),
    (1 << 16),
];

fn random_items<TestItem: KeyValuePair>(count: usize) -> Vec<(u64, TestItem)> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| {
            let item = TestItem::new(rng.try_next_u64().unwrap());
            (item.hash_key(), item)
        })
        .collect()
}

fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut items = items.to_vec();
    items.shuffle(&mut SmallRng::from_os_rng());
    items
}

fn fill_chain<TestItem: KeyValuePair>(items: &[(u64, TestItem)]) -> ChainHashTable<TestItem> {
    let mut table = ChainHashTable::new();
    for (hash, item) in items {
        if let ChainEntry::Vacant(entry) = table.entry(*hash, |v| v.eq_key(item)) {
            entry.insert(item.clone());
        }
    }
    table
}

fn fill_hashbrown<TestItem: KeyValuePair>(
    items: &[(u64, TestItem)],
) -> HashbrownHashTable<TestItem> {
    let mut table = HashbrownHashTable::new();
    for (hash, item) in items {
        if let HashbrownEntry::Vacant(entry) =
            table.entry(*hash, |v| v.eq_key(item), |v| v.hash_key())
        {
            entry.insert(item.clone());
        }
    }
    table
}

fn bench_insert_random<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "insert_random_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<TestItem>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&hash_and_item),
                |hash_and_item| {
                    let mut table = ChainHashTable::<TestItem>::new();
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item)) {
                            ChainEntry::Vacant(entry) => {
                                black_box(entry.insert(item));
                            }
                            ChainEntry::Occupied(_) => unreachable!(),
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&hash_and_item),
                |hash_and_item| {
                    let mut table = HashbrownHashTable::<TestItem>::new();
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key()) {
                            HashbrownEntry::Vacant(entry) => {
                                black_box(entry.insert(item));
                            }
                            HashbrownEntry::Occupied(_) => unreachable!(),
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit_miss<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!(
        "find_hit_miss_{}",
        core::any::type_name::<TestItem>()
    ));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let present = random_items::<TestItem>(size);
        let absent = random_items::<TestItem>(size);
        let probes: Vec<(u64, TestItem)> = present.iter().chain(absent.iter()).cloned().collect();

        let chain = fill_chain(&present);
        let hashbrown = fill_hashbrown(&present);
        group.throughput(Throughput::Elements(probes.len() as u64));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                for (hash, item) in &probes {
                    black_box(chain.find(*hash, |v| v.eq_key(item)));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for (hash, item) in &probes {
                    black_box(hashbrown.find(*hash, |v| v.eq_key(item)));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<TestItem>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let hash_and_item = random_items::<TestItem>(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || (fill_chain(&hash_and_item), shuffled(&hash_and_item)),
                |(mut table, order)| {
                    for (hash, item) in order {
                        black_box(table.remove(hash, |v| v.eq_key(&item)));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || (fill_hashbrown(&hash_and_item), shuffled(&hash_and_item)),
                |(mut table, order)| {
                    for (hash, item) in order {
                        if let Ok(entry) = table.find_entry(hash, |v| v.eq_key(&item)) {
                            black_box(entry.remove().0);
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_churn<TestItem: KeyValuePair, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("churn_{}", core::any::type_name::<TestItem>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES[..=MAX_SIZE].iter() {
        let insertions_and_removals = (0..size)
            .flat_map(|i| {
                let item = TestItem::new(i as u64);
                let hash = item.hash_key();
                [(hash, item.clone()), (hash, item)]
            })
            .collect::<Vec<(u64, TestItem)>>();
        group.throughput(Throughput::Elements(size as u64 * 2));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || shuffled(&insertions_and_removals),
                |hash_and_item| {
                    let mut table = ChainHashTable::<TestItem>::new();
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item)) {
                            ChainEntry::Vacant(entry) => {
                                entry.insert(item);
                            }
                            ChainEntry::Occupied(entry) => {
                                black_box(entry.remove());
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || shuffled(&insertions_and_removals),
                |hash_and_item| {
                    let mut table = HashbrownHashTable::<TestItem>::new();
                    for (hash, item) in hash_and_item {
                        match table.entry(hash, |v| v.eq_key(&item), |v| v.hash_key()) {
                            HashbrownEntry::Vacant(entry) => {
                                black_box(entry.insert(item));
                            }
                            HashbrownEntry::Occupied(entry) => {
                                black_box(entry.remove().0);
                            }
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_map_put_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_put_get");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES.iter() {
        let keys: Vec<u64> = shuffled(&(0..size as u64).collect::<Vec<_>>());
        group.throughput(Throughput::Elements(size as u64 * 2));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                let mut map = ChainHashMap::new();
                for &k in &keys {
                    map.put(k, k);
                }
                for k in &keys {
                    black_box(map.get(k));
                }
                black_box(map)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut map = hashbrown::HashMap::new();
                for &k in &keys {
                    map.insert(k, k);
                }
                for k in &keys {
                    black_box(map.get(k));
                }
                black_box(map)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random::<SmallTestItem, 6>,
    bench_insert_random::<TestItem, 6>,
    bench_find_hit_miss::<SmallTestItem, 6>,
    bench_find_hit_miss::<TestItem, 6>,
    bench_remove::<SmallTestItem, 6>,
    bench_remove::<TestItem, 6>,
    bench_churn::<SmallTestItem, 6>,
    bench_churn::<TestItem, 6>,
    bench_map_put_get,
);

criterion_main!(benches);
