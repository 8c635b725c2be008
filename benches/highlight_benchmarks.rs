use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use json_presenter::config::Config;
use json_presenter::pipeline::present;
use json_presenter::{format, highlight, parse};

/// Generate JSON content of different shapes for benchmarking
fn generate_json_content(entries: usize, pattern: &str) -> String {
    let mut content = String::from("{");

    for i in 0..entries {
        if i > 0 {
            content.push(',');
        }
        match pattern {
            "string_heavy" => {
                content.push_str(&format!("\"key_{i}\": \"value number {i} & more\""));
            }
            "url_heavy" => {
                content.push_str(&format!("\"key_{i}\": \"https://example.com/item/{i}\""));
            }
            "number_heavy" => {
                content.push_str(&format!("\"key_{i}\": {}.{:03}", i, i % 1000));
            }
            "mixed" => match i % 4 {
                0 => content.push_str(&format!("\"key_{i}\": {i}")),
                1 => content.push_str(&format!("\"key_{i}\": \"text {i}\"")),
                2 => content.push_str(&format!("\"key_{i}\": [true, false, null]")),
                3 => content.push_str(&format!("\"key_{i}\": {{\"nested\": {i}}}")),
                _ => unreachable!(),
            },
            _ => panic!("unknown pattern: {pattern}"),
        }
    }

    content.push('}');
    content
}

fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");

    for pattern in ["string_heavy", "url_heavy", "number_heavy", "mixed"] {
        let source = generate_json_content(1_000, pattern);
        let value = parse::parse_document(&source).expect("valid input");
        let pretty = format::to_pretty(&value);

        group.throughput(Throughput::Bytes(pretty.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("pattern", pattern),
            &pretty,
            |b, pretty| b.iter(|| highlight::highlight(black_box(pretty))),
        );
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = Config::default();

    for entries in [100, 1_000, 10_000] {
        let source = generate_json_content(entries, "mixed");

        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entries),
            &source,
            |b, source| b.iter(|| present(black_box(source), &config)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_highlight, bench_pipeline);
criterion_main!(benches);
