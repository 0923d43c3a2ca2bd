//! Parse benchmarks over synthetic dumps.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eve_ui_parser::{parse_raw, parse_str, RawNode};

fn label(address: u64, x: f64, text: &str) -> RawNode {
    RawNode::new(address, "EveLabelSmall")
        .with_geometry(x, 0.0, 80.0, 14.0)
        .with_attr("_text", eve_ui_parser::AttrValue::Text(text.to_string()))
}

/// Overview with `rows` rows and three columns.
fn wide_dump(rows: u64) -> RawNode {
    let headers = RawNode::new(2, "SortHeaders")
        .with_geometry(0.0, 0.0, 300.0, 20.0)
        .with_child(label(3, 0.0, "Distance"))
        .with_child(label(4, 100.0, "Name"))
        .with_child(label(5, 200.0, "Type"));

    let mut window = RawNode::new(1, "OverviewWindow")
        .with_geometry(0.0, 0.0, 300.0, 20.0 * rows as f64)
        .with_child(headers);
    for i in 0..rows {
        let base = 100 + i * 10;
        let row = RawNode::new(base, "OverviewScrollEntry")
            .with_geometry(0.0, 20.0 + 20.0 * i as f64, 300.0, 20.0)
            .with_child(label(base + 1, 0.0, "12 km"))
            .with_child(label(base + 2, 100.0, "Pilot"))
            .with_child(label(base + 3, 200.0, "Rifter"));
        window = window.with_child(row);
    }

    RawNode::new(0, "UIRoot")
        .with_geometry(0.0, 0.0, 1920.0, 1080.0)
        .with_child(window)
}

/// A single chain `depth` nodes deep.
fn deep_dump(depth: u64) -> RawNode {
    (0..depth)
        .rev()
        .map(|i| RawNode::new(i, "Container").with_geometry(1.0, 1.0, 10.0, 10.0))
        .reduce(|child, parent| parent.with_child(child))
        .unwrap_or_else(|| RawNode::new(0, "UIRoot"))
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for rows in [10u64, 100, 1000] {
        let dump = wide_dump(rows);
        group.bench_with_input(BenchmarkId::new("overview_rows", rows), &dump, |b, dump| {
            b.iter(|| parse_raw(black_box(dump.clone())))
        });
    }

    let deep = deep_dump(10_000);
    group.bench_function("deep_chain_10k", |b| b.iter(|| parse_raw(black_box(deep.clone()))));

    let json = serde_json::to_string(&wide_dump(500)).unwrap_or_default();
    group.bench_function("from_json_500_rows", |b| b.iter(|| parse_str(black_box(&json))));

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
