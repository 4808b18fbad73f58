use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use popart_image::Image;
use popart_imgproc::flip;

fn seq_row_swap(src: &Image<u8, 3>) -> Image<u8, 3> {
    let mut dst = src.clone();
    let row_len = src.cols() * 3;
    let rows = src.rows();
    for r in 0..rows / 2 {
        let (top, bottom) = dst.as_slice_mut().split_at_mut((rows - 1 - r) * row_len);
        top[r * row_len..(r + 1) * row_len].swap_with_slice(&mut bottom[..row_len]);
    }
    dst
}

fn bench_flip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flip");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();

        group.bench_with_input(
            BenchmarkId::new("seq_row_swap", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(seq_row_swap(black_box(i)))),
        );

        group.bench_with_input(
            BenchmarkId::new("popart_flip", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(flip::flip(black_box(i)))),
        );

        group.bench_with_input(
            BenchmarkId::new("popart_mirror", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(flip::mirror(black_box(i)))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_flip);
criterion_main!(benches);
