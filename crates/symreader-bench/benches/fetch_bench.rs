//! Fetch-protocol and name-packing benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use symreader_core::hresult::S_OK;
use symreader_core::{fetch, pack_qualified_name, qualified_name_length};

fn bench_get_items_counted(c: &mut Criterion) {
    let sizes: &[usize] = &[1, 16, 256, 4096];
    let mut group = c.benchmark_group("get_items_counted");

    for &size in sizes {
        let source: Vec<u32> = (0..size as u32).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("counted", size), &size, |b, _| {
            b.iter(|| {
                let items = fetch::get_items_counted(
                    &source,
                    |src: &Vec<u32>| (S_OK, src.len() as i32),
                    |src: &Vec<u32>, len, buf: &mut [u32]| {
                        buf.copy_from_slice(&src[..len as usize]);
                        (S_OK, len)
                    },
                )
                .unwrap();
                black_box(items);
            });
        });
    }
    group.finish();
}

fn bench_pack_qualified_name(c: &mut Criterion) {
    let depths: &[usize] = &[1, 4, 16];
    let mut group = c.benchmark_group("pack_qualified_name");

    for &depth in depths {
        let namespace = vec!["Segment"; depth].join(".");
        let length = qualified_name_length(&namespace, "Leaf");
        group.throughput(Throughput::Elements(length as u64));

        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, _| {
            b.iter(|| {
                let mut buffer = vec![0u16; length + 1];
                pack_qualified_name(&namespace, "Leaf", None, Some(&mut buffer)).unwrap();
                black_box(buffer);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_get_items_counted, bench_pack_qualified_name);
criterion_main!(benches);
