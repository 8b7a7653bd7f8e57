//! Benchmarks for table assembly and DOCX packaging.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabdoc::{build_table, Document, Report, TablePolicy};

/// Creates `count` synthetic schema rows.
fn schema_rows(count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| {
            vec![
                format!("field_{}", i),
                "String".to_string(),
                "Required".to_string(),
                format!("Description of field {}", i),
            ]
        })
        .collect()
}

fn bench_build_table(c: &mut Criterion) {
    let headers = ["Field", "Type", "Constraints", "Description"];
    let policy = TablePolicy::verbose();
    let mut group = c.benchmark_group("build_table");

    for count in [10, 100, 1000] {
        let rows = schema_rows(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter(|| {
                let mut doc = Document::new();
                build_table(&mut doc, &headers, rows.iter().cloned(), &policy).unwrap();
                black_box(doc)
            })
        });
    }

    group.finish();
}

fn bench_package(c: &mut Criterion) {
    let doc = Report::DatabaseConfig.build().unwrap();
    c.bench_function("package_database_report", |b| {
        b.iter(|| black_box(doc.to_docx_bytes().unwrap()))
    });
}

criterion_group!(benches, bench_build_table, bench_package);
criterion_main!(benches);
