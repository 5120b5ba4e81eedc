use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mesh500_processor::models::MinuteBounds;
use mesh500_processor::processors::MinuteFilter;
use mesh500_processor::readers::SoundingReader;
use mesh500_processor::utils::coordinates::to_dms;
use mesh500_processor::writers::{GeoJsonWriter, SexagesimalTextWriter};

// Create a synthetic mesh table for benchmarking
fn create_test_table(lines: usize) -> String {
    let mut text = String::with_capacity(lines * 24);
    for i in 0..lines {
        let lat = 35.0 + (i % 1000) as f64 * 0.0008;
        let lon = 139.0 + (i % 1000) as f64 * 0.0009;
        let depth = 50 + (i % 700) as i32;
        text.push_str(&format!("1 {:.4} {:.4} {}\n", lat, lon, depth));
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let text = create_test_table(10_000);

    c.bench_function("parse_10k_lines", |b| {
        let reader = SoundingReader::new();
        b.iter(|| {
            let table = reader.parse(&text).unwrap();
            black_box(table.len())
        })
    });
}

fn benchmark_parallel_parse(c: &mut Criterion) {
    let text = create_test_table(10_000);

    c.bench_function("parse_10k_lines_parallel", |b| {
        let reader = SoundingReader::with_parallel(4);
        b.iter(|| {
            let table = reader.parse(&text).unwrap();
            black_box(table.len())
        })
    });
}

fn benchmark_minute_filter(c: &mut Criterion) {
    let text = create_test_table(10_000);
    let table = SoundingReader::new().parse(&text).unwrap();

    c.bench_function("minute_filter_10k", |b| {
        b.iter(|| {
            let filter = MinuteFilter::new(MinuteBounds::new(Some(10), Some(50), None, None));
            let kept = filter.apply(&table.sexagesimal).map(|v| v.len()).unwrap_or(0);
            black_box(kept)
        })
    });
}

fn benchmark_text_render(c: &mut Criterion) {
    let text = create_test_table(10_000);
    let table = SoundingReader::new().parse(&text).unwrap();

    c.bench_function("render_10k_records", |b| {
        let writer = SexagesimalTextWriter::new();
        b.iter(|| {
            let rendered = writer.render(&table.sexagesimal);
            black_box(rendered.len())
        })
    });
}

fn benchmark_geojson_projection(c: &mut Criterion) {
    let text = create_test_table(10_000);
    let table = SoundingReader::new().parse(&text).unwrap();

    c.bench_function("project_10k_records", |b| {
        let writer = GeoJsonWriter::new();
        b.iter(|| {
            let collection = writer.project(&table.decimal);
            black_box(collection.features.len())
        })
    });
}

fn benchmark_dms_conversion(c: &mut Criterion) {
    let values: Vec<f64> = (0..1000).map(|i| 35.0 + i as f64 * 0.000987).collect();

    c.bench_function("to_dms_1k_values", |b| {
        b.iter(|| {
            let mut minutes_sum = 0u32;
            for &value in &values {
                let (_, m, _) = to_dms(value);
                minutes_sum += m as u32;
            }
            black_box(minutes_sum)
        })
    });
}

fn benchmark_varying_table_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_by_size");

    for &size in &[1_000, 5_000, 20_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("lines", size), &size, |b, &lines| {
            let text = create_test_table(lines);
            let reader = SoundingReader::new();
            b.iter(|| {
                let table = reader.parse(&text).unwrap();
                black_box(table.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_parallel_parse,
    benchmark_minute_filter,
    benchmark_text_render,
    benchmark_geojson_projection,
    benchmark_dms_conversion,
    benchmark_varying_table_sizes
);
criterion_main!(benches);
