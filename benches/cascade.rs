use criterion::{criterion_group, criterion_main, Criterion};
use tinybrowser::css3::Css3;
use tinybrowser::html5::html_compile;
use tinybrowser::styling::styling::generate_styled_tree;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cascade");
    group.significance_level(0.1).sample_size(500);

    let html = std::fs::read_to_string("tests/data/page.html").expect("problem loading page");
    let document = html_compile(&html);
    let css = document.style_text(document.root());

    group.bench_function("parse stylesheet", |b| {
        b.iter(|| Css3::parse_str(&css));
    });

    let sheet = Css3::parse_str(&css);
    group.bench_function("styled tree", |b| {
        b.iter(|| generate_styled_tree(&document, &sheet));
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
