//! Benchmarks for corpus table filtering and sorting.

use cfdocs_corpora::{
    CorporaTable, CorpusDataset, CorpusRecord, QueryState, SortDirection, SortKey, compute_view,
    render_table,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const LANGUAGES: [&str; 6] = ["Hebrew", "Greek", "Syriac", "Akkadian", "Dutch", "English"];
const CATEGORIES: [&str; 4] = ["Biblical", "Religious", "Historical", "Literary"];

/// Generate a dataset with `count` distinct records.
fn generate_dataset(count: usize) -> CorpusDataset {
    let records = (0..count)
        .map(|i| CorpusRecord {
            name: format!("corpus-{i:05}"),
            language: LANGUAGES[i % LANGUAGES.len()].to_owned(),
            category: CATEGORIES[i % CATEGORIES.len()].to_owned(),
            period: format!("{} BCE", 100 + (i * 37) % 3000),
            description: format!("Synthetic corpus number {i} for benchmarking"),
            repository: format!("https://github.com/example/corpus-{i}"),
            size: (i % 3 == 0).then(|| format!("{} MB", i % 900)),
        })
        .collect();
    CorpusDataset::from_records(records).unwrap()
}

fn bench_builtin_view(c: &mut Criterion) {
    let dataset = CorpusDataset::builtin();
    let mut group = c.benchmark_group("builtin_view");

    group.bench_function("default_query", |b| {
        b.iter(|| compute_view(&dataset, &QueryState::default()));
    });

    let search = QueryState {
        search: "greek".to_owned(),
        ..QueryState::sorted_by(SortKey::Period, SortDirection::Desc)
    };
    group.bench_function("search_sort_period_desc", |b| {
        b.iter(|| compute_view(&dataset, &search));
    });

    group.finish();
}

fn bench_view_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_by_size");

    for count in [100, 1_000, 10_000] {
        let dataset = generate_dataset(count);
        let query = QueryState {
            search: "number 1".to_owned(),
            ..QueryState::sorted_by(SortKey::Name, SortDirection::Asc)
        };

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("search_sort", count), &dataset, |b, dataset| {
            b.iter(|| compute_view(dataset, &query));
        });
    }

    group.finish();
}

fn bench_render_table(c: &mut Criterion) {
    let dataset = CorpusDataset::builtin();
    let table = CorporaTable::new(&dataset);

    c.bench_function("render_builtin_table", |b| {
        b.iter(|| render_table(&table));
    });
}

criterion_group!(
    benches,
    bench_builtin_view,
    bench_view_varying_sizes,
    bench_render_table,
);

criterion_main!(benches);
