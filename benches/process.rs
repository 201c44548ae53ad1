use criterion::{criterion_group, criterion_main, Criterion};
use edgeproc::{frame::FrameBuffer, processor::FrameProcessor};

pub fn benchmark_process(c: &mut Criterion) {
    let dims = [(320, 240), (640, 480), (960, 540), (1280, 720), (1920, 1080)];
    let processor = FrameProcessor::new();

    for edges in [true, false] {
        processor.set_mode(edges);
        let mut group = c.benchmark_group(format!("process/{}", processor.mode()));
        for dim in dims.iter() {
            let stride = dim.0 as usize * 4;
            let mut data: Vec<u8> = (0..stride * dim.1 as usize).map(|i| i as u8).collect();
            group.bench_function(format!("{}x{}", dim.0, dim.1), |b| {
                b.iter(|| {
                    let mut frame = FrameBuffer::new(&mut data, dim.0, dim.1, stride).unwrap();
                    processor.process(&mut frame).unwrap()
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benchmark_process);
criterion_main!(benches);
