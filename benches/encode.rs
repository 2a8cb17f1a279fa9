use criterion::{Criterion, black_box, criterion_group, criterion_main};
use miniqr::{ErrorCorrectLv, Mask, QrMatrix, Version, render::Svg};

fn bench_encode_short(c: &mut Criterion) {
    c.bench_function("encode_url_v2", |b| {
        b.iter(|| miniqr::encode(black_box(b"https://example.com/some/path")))
    });
}

fn bench_encode_full(c: &mut Criterion) {
    let data = vec![0x5a_u8; 213];
    c.bench_function("encode_213_bytes_v10", |b| {
        b.iter(|| miniqr::encode(black_box(&data)))
    });
}

fn bench_fixed_mask(c: &mut Criterion) {
    let data = vec![0x5a_u8; 213];
    let version = Version::MAX;
    let mask = Mask::ALL[3];
    let segments: [&[u8]; 1] = [&data];
    c.bench_function("with_mask_213_bytes_v10", |b| {
        b.iter(|| QrMatrix::with_mask(black_box(&segments), version, ErrorCorrectLv::M, mask))
    });
}

fn bench_svg(c: &mut Criterion) {
    let mat = miniqr::encode(&[0x5a; 213]).unwrap();
    c.bench_function("svg_v10", |b| {
        b.iter(|| Svg::new(black_box(400)).render(&mat))
    });
}

criterion_group!(benches, bench_encode_short, bench_encode_full, bench_fixed_mask, bench_svg);
criterion_main!(benches);
