use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hashtab::{ChainedTable, ProbingTable};

const N: usize = 1000;

fn keys() -> Vec<String> {
    (0..N).map(|i| format!("key{:06}", i)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let keys = keys();
    let mut group = c.benchmark_group("insert");

    group.bench_function("chained", |b| {
        b.iter(|| {
            let mut table = ChainedTable::with_capacity(2 * N + 1);
            for (i, key) in keys.iter().enumerate() {
                table.insert(black_box(key.clone()), i);
            }
            table
        })
    });

    group.bench_function("probing", |b| {
        b.iter(|| {
            let mut table = ProbingTable::with_capacity(2 * N + 1);
            for (i, key) in keys.iter().enumerate() {
                table
                    .insert(black_box(key.clone()), i)
                    .expect("capacity 2N+1 cannot fill with N keys");
            }
            table
        })
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let keys = keys();

    let mut chained = ChainedTable::with_capacity(2 * N + 1);
    let mut probing = ProbingTable::with_capacity(2 * N + 1);
    for (i, key) in keys.iter().enumerate() {
        chained.insert(key.clone(), i);
        probing
            .insert(key.clone(), i)
            .expect("capacity 2N+1 cannot fill with N keys");
    }

    let mut group = c.benchmark_group("search");

    group.bench_function("chained", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(chained.get(black_box(key)));
            }
        })
    });

    group.bench_function("probing", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(probing.get(black_box(key)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
