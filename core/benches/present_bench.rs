//! Benchmarks for GPU presentation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wavescope::frame::{PixelBuffer, RED};
use wavescope::gpu::{FrameSink, HeadlessPresenter};
use wavescope::wave::draw_sine_wave;

fn bench_present(c: &mut Criterion) {
    let mut group = c.benchmark_group("Headless Present");

    for (width, height, name) in [(320, 200, "320x200"), (1920, 1080, "1080p")] {
        let mut presenter = match pollster::block_on(HeadlessPresenter::new(width, height)) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Skipping GPU benchmarks: {}", e);
                return;
            }
        };

        let mut frame = PixelBuffer::new(width, height);
        draw_sine_wave(&mut frame, 40.0, 3.0, 0.0, RED);

        group.bench_with_input(BenchmarkId::new("present_readback", name), &frame, |b, frame| {
            b.iter(|| {
                presenter.present(frame).unwrap();
                presenter.read_pixels().unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_present);
criterion_main!(benches);
