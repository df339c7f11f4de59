use algos_list::SinglyLinkedList;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn build(size: usize) -> SinglyLinkedList<usize> {
    (0..size).collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("singly_linked_list_insertion");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("add_first", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for value in 0..size {
                    list.add_first(black_box(value));
                }
                list
            });
        });
    }
    // add_last walks to the tail on every call, so keep the sizes small.
    for size in [100, 1_000] {
        group.bench_with_input(BenchmarkId::new("add_last", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for value in 0..size {
                    list.add_last(black_box(value));
                }
                list
            });
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("singly_linked_list_traversal");
    for size in SIZES {
        let list = build(size);
        group.bench_with_input(BenchmarkId::new("search_missing", size), &list, |b, list| {
            b.iter(|| list.search(black_box(&usize::MAX)));
        });
        group.bench_with_input(BenchmarkId::new("find_max", size), &list, |b, list| {
            b.iter(|| list.find_max());
        });
        group.bench_with_input(BenchmarkId::new("find_nth_from_end", size), &list, |b, list| {
            b.iter(|| list.find_nth_from_end(black_box(size / 3)));
        });
        group.bench_with_input(BenchmarkId::new("has_cycle", size), &list, |b, list| {
            b.iter(|| list.has_cycle());
        });
    }
    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("singly_linked_list_reverse");
    for size in SIZES {
        let mut list = build(size);
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| list.reverse());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insertion, bench_traversal, bench_reverse);
criterion_main!(benches);
