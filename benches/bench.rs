use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeral::{Alphabet, Buffer, FloatFormat, Notation, BASE10, BASE16, BASE36, BASE90};

const FLOATS: &[(&str, f64)] = &[
    ("short", 0.5),
    ("tenth", 0.1),
    ("third", 1.0 / 3.0),
    ("large", 1.7976931348623157e308),
    ("subnormal", 5e-324),
];

fn alphabets() -> [(&'static str, &'static Alphabet); 4] {
    [
        ("base10", &BASE10),
        ("base16", &BASE16),
        ("base36", &BASE36),
        ("base90", &BASE90),
    ]
}

fn bench_integer(c: &mut Criterion) {
    let mut g = c.benchmark_group("integer");
    let mut buffer = Buffer::new();

    for (name, alphabet) in alphabets() {
        g.bench_function(BenchmarkId::new("encode_unsigned/u64", name), |b| {
            let value = 0xDEAD_BEEF_CAFE_F00Du64;
            b.iter(|| alphabet.encode_unsigned(&mut buffer, black_box(value)).len());
        });
        g.bench_function(BenchmarkId::new("encode_signed/i64", name), |b| {
            b.iter(|| alphabet.encode_signed(&mut buffer, black_box(i64::MIN)).len());
        });

        let unsigned = alphabet.encode_unsigned(&mut buffer, u64::MAX).to_owned();
        g.bench_function(BenchmarkId::new("decode/u64", name), |b| {
            b.iter(|| alphabet.decode::<u64>(black_box(&unsigned)));
        });
        let signed = alphabet.encode_signed(&mut buffer, -12345i32).to_owned();
        g.bench_function(BenchmarkId::new("decode/i32", name), |b| {
            b.iter(|| alphabet.decode::<i32>(black_box(&signed)));
        });
    }

    g.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut g = c.benchmark_group("exact");
    let mut buffer = Buffer::new();

    g.bench_function("encode_exact_signed/f64", |b| {
        b.iter(|| BASE90.encode_exact_signed(&mut buffer, black_box(-0.1f64)).len());
    });
    g.bench_function("encode_exact_unsigned/f64", |b| {
        b.iter(|| BASE90.encode_exact_unsigned(&mut buffer, black_box(-0.1f64)).len());
    });
    let text = BASE90.encode_exact_unsigned(&mut buffer, -0.1f64).to_owned();
    g.bench_function("decode_exact/f64", |b| {
        b.iter(|| BASE90.decode_exact::<f64>(black_box(&text)));
    });

    g.finish();
}

fn bench_shortest(c: &mut Criterion) {
    let mut g = c.benchmark_group("shortest");
    for &(name, x) in FLOATS {
        g.bench_with_input(BenchmarkId::new("f64", name), &x, |b, &x| {
            b.iter(|| numeral::shortest(black_box(x)));
        });
    }
    g.bench_function("f32/third", |b| {
        b.iter(|| numeral::shortest(black_box(1.0f32 / 3.0)));
    });
    g.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut g = c.benchmark_group("format");
    let limited = FloatFormat::new(Notation::Decimal).length_limit(12);
    let mut out = String::with_capacity(64);

    for &(name, x) in FLOATS {
        g.bench_with_input(BenchmarkId::new("general", name), &x, |b, &x| {
            b.iter(|| {
                out.clear();
                FloatFormat::default().write(black_box(x), &mut out);
                out.len()
            });
        });
    }
    g.bench_function("decimal_limited/third", |b| {
        b.iter(|| {
            out.clear();
            limited.write(black_box(1.0f64 / 3.0), &mut out);
            out.len()
        });
    });

    g.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut g = c.benchmark_group("parse");
    for &(name, x) in FLOATS {
        let text = numeral::general(x);
        g.bench_with_input(BenchmarkId::new("f64", name), &text, |b, text| {
            b.iter(|| numeral::parse_f64(black_box(text)));
        });
    }
    g.bench_function("f64/trailing_garbage", |b| {
        b.iter(|| numeral::parse_f64(black_box("12.5e3 units")));
    });
    g.finish();
}

criterion_group!(benches, bench_integer, bench_exact, bench_shortest, bench_format, bench_parse);
criterion_main!(benches);
