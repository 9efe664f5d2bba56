use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use geowarp_image::Image;
use geowarp_imgproc::{
    interpolation::InterpolationMode,
    padding::BorderMode,
    parallel::ExecutionStrategy,
    warp::{apply_transform, build_matrix, warp_affine, TransformKind},
};

fn bench_warp_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpAffine");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();

        let kind = TransformKind::Rotation {
            angle_degrees: 45.0,
            center: None,
        };
        let m = build_matrix(&kind, image_size).unwrap();

        group.bench_with_input(
            BenchmarkId::new("apply_transform", &parameter_string),
            &(&image, m),
            |b, i| {
                let (src, m) = (i.0, i.1);
                b.iter(|| apply_transform(black_box(src), black_box(&m), black_box(image_size)))
            },
        );

        for (name, strategy) in [
            ("serial", ExecutionStrategy::Serial),
            ("par_rows", ExecutionStrategy::ParallelRows),
        ] {
            let mut dst = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &(&image, m),
                |b, i| {
                    let (src, m) = (i.0, i.1);
                    b.iter(|| {
                        warp_affine(
                            black_box(src),
                            black_box(&mut dst),
                            black_box(&m),
                            black_box(InterpolationMode::Bilinear),
                            black_box(BorderMode::Reflect),
                            black_box(strategy),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_warp_affine);
criterion_main!(benches);
