use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use resampler_image::Image;
use resampler_imgproc::metrics;

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("Metrics");
    let mut rng = rand::rng();

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let data = (0..width * height * 3).map(|_| rng.random::<u8>()).collect();
        let image = Image::<u8, 3>::new(image_size, data).unwrap();
        let noisy = Image::<f64, 3>::new(
            image_size,
            image
                .as_slice()
                .iter()
                .map(|&v| v as f64 + rng.random_range(-4.0..4.0))
                .collect(),
        )
        .unwrap();

        group.bench_with_input(
            BenchmarkId::new("mse", &parameter_string),
            &(&image, &noisy),
            |b, i| b.iter(|| metrics::mse(black_box(i.0), black_box(i.1))),
        );

        group.bench_with_input(
            BenchmarkId::new("psnr", &parameter_string),
            &(&image, &noisy),
            |b, i| b.iter(|| metrics::psnr(black_box(i.0), black_box(i.1))),
        );

        group.bench_with_input(
            BenchmarkId::new("ssim", &parameter_string),
            &(&image, &noisy),
            |b, i| b.iter(|| metrics::ssim(black_box(i.0), black_box(i.1))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
