use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prismatic_maps::ColorMap;
use prismatic_core::Band;

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("jet scalar", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                let [r, _, _] = ColorMap::JET.apply(black_box(i as f64 / 1000.0));
                acc += r;
            }
            acc
        })
    });

    c.bench_function("spectral11 scalar", |b| {
        let map = ColorMap::by_name("Spectral11").unwrap();
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                let [r, _, _] = map.apply(black_box(i as f64 / 1000.0));
                acc += r;
            }
            acc
        })
    });

    let band = Band::from_fn(256, 256, |x, y| ((x + y) % 256) as f64 / 255.0);
    c.bench_function("jet apply_image 256x256", |b| {
        b.iter(|| ColorMap::JET.apply_image(black_box(&band)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
