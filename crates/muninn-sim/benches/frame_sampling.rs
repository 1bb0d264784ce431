//! Benchmarks for the Pauli-frame sampler hot path.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use muninn_code::{Layout, NoiseConfig};
use muninn_sim::{FrameBackend, SampleRequest, SamplerBackend};

fn benchmark_frame_sampling(c: &mut Criterion) {
    let noise = NoiseConfig::depolarizing(0.002, 0.01).build().unwrap();
    let backend = FrameBackend::new();

    for distance in [3_usize, 5, 9] {
        let layout = Layout::build(distance).unwrap();
        c.bench_function(&format!("frame_sample_d{distance}_r3_s100"), |b| {
            b.iter(|| {
                backend
                    .sample(black_box(&SampleRequest {
                        layout: &layout,
                        rounds: 3,
                        shots: 100,
                        noise: &noise,
                        seed: 42,
                    }))
                    .unwrap()
            });
        });
    }
}

criterion_group!(benches, benchmark_frame_sampling);
criterion_main!(benches);
