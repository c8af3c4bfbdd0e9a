use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prismatic_core::{transforms, Band, ColorSpace, Image};

fn bench_image(width: usize, height: usize) -> Image {
    let bands = (0..3)
        .map(|c| {
            Band::from_fn(width, height, |x, y| {
                ((x * 7 + y * 13 + c * 29) % 256) as f64 / 255.0
            })
        })
        .collect();
    Image::from_bands(ColorSpace::Rgb, bands).unwrap()
}

fn bench_conversions(c: &mut Criterion) {
    let img = bench_image(256, 256);

    c.bench_function("rgb_to_hsv 256x256", |b| {
        b.iter(|| transforms::rgb_to_hsv(black_box(&img)).unwrap())
    });

    c.bench_function("rgb_to_cielab 256x256", |b| {
        b.iter(|| transforms::rgb_to_cielab(black_box(&img)).unwrap())
    });

    c.bench_function("rgb_to_yuv 256x256", |b| {
        b.iter(|| transforms::rgb_to_yuv(black_box(&img)).unwrap())
    });

    let hsv = transforms::rgb_to_hsv(&img).unwrap();
    c.bench_function("hsv_to_rgb 256x256", |b| {
        b.iter(|| transforms::hsv_to_rgb(black_box(&hsv)).unwrap())
    });
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
