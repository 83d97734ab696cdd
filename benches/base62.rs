//! Base62 short code benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use url_shortener::utils::{decode_base62, encode_base62, short_code_for_id};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("base62/encode");
    group.throughput(Throughput::Elements(1));

    for (name, id) in [("one_digit", 7u64), ("five_digits", 916_132_831), ("u64_max", u64::MAX)] {
        group.bench_function(name, |b| b.iter(|| encode_base62(black_box(id))));
    }

    group.bench_function("from_row_id", |b| {
        b.iter(|| short_code_for_id(black_box(1_000_000)))
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("base62/decode");
    group.throughput(Throughput::Elements(1));

    for code in ["7", "zzzzz", "LygHa16AHYF"] {
        group.bench_function(code, |b| b.iter(|| decode_base62(black_box(code))));
    }

    // Rejected on the first bad byte
    group.bench_function("invalid", |b| b.iter(|| decode_base62(black_box("-abc"))));

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
