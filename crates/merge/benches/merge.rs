use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lattice_merge::{merge_override, merge_with};
use std::collections::BTreeMap;

fn layered_maps(layers: usize, keys_per_layer: usize) -> Vec<BTreeMap<String, u64>> {
    (0..layers)
        .map(|layer| {
            // Half the keys overlap with the previous layer.
            (0..keys_per_layer)
                .map(|i| (format!("key_{}", layer * keys_per_layer / 2 + i), i as u64))
                .collect()
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let sizes = [("2x64", 2usize, 64usize), ("4x256", 4, 256), ("8x1024", 8, 1024)];

    for (label, layers, keys) in sizes {
        let maps = layered_maps(layers, keys);

        group.throughput(Throughput::Elements((layers * keys) as u64));

        group.bench_with_input(BenchmarkId::new("override", label), &maps, |b, maps| {
            b.iter(|| merge_override(maps));
        });

        group.bench_with_input(BenchmarkId::new("additive", label), &maps, |b, maps| {
            b.iter(|| merge_with(|old, new| old + new, maps));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
