use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use seqmap::Map;

const SIZES: &[usize] = &[16, 256, 4096];

pub fn scan_lookup(c: &mut Criterion) {
    for &size in SIZES {
        let map: Map<usize, usize> = (0..size).map(|i| (i, i)).collect();

        c.bench_function(&format!("get last of {}", size), |b| {
            b.iter(|| map.get(black_box(&(size - 1))).unwrap())
        });

        c.bench_function(&format!("miss in {}", size), |b| {
            b.iter(|| map.contains_key(black_box(&size)))
        });
    }
}

pub fn append(c: &mut Criterion) {
    for &size in SIZES {
        c.bench_function(&format!("add {} entries", size), |b| {
            b.iter(|| {
                let mut map = Map::with_capacity(size);
                for i in 0..size {
                    map.add(black_box(i), i).unwrap();
                }
                map
            })
        });
    }
}

criterion_group!(benches, scan_lookup, append);
criterion_main!(benches);
