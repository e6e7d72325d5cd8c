use criterion::{criterion_group, criterion_main, Criterion};
use tinybrowser::html5::document::query::TreeIterator;
use tinybrowser::html5::parser::Html5Parser;
use tinybrowser::shared::node::NodeId;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree construction");
    group.significance_level(0.1).sample_size(500);

    // Careful about reading files inside the closure
    let html = std::fs::read_to_string("tests/data/page.html").expect("problem loading page");
    let large = format!("<html>{}</html>", html.repeat(50));

    group.bench_function("test page", |b| {
        b.iter(|| Html5Parser::parse_document(&html, None));
    });

    group.bench_function("large page", |b| {
        b.iter(|| Html5Parser::parse_document(&large, None));
    });

    let document = Html5Parser::parse_document(&large, None);
    group.bench_function("tree iterator", |b| {
        b.iter(|| TreeIterator::new(&document).collect::<Vec<NodeId>>());
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
