//! Elementwise kernel throughput benchmarks.
//!
//! Ops: erf, exp, gelu, swish (f32)
//! Vector sizes: 1K, 4K, 16K, 64K, 256K
//! One group per detected instruction set, reported as bytes throughput.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simd_math_kernels::{select_engine_for, supported_instruction_sets, ArrayEngine};

const ELEM_SIZES: &[usize] = &[1024, 4096, 16384, 65536, 262144];

fn size_label(n: usize) -> String {
    match n {
        1024 => "1K".into(),
        4096 => "4K".into(),
        16384 => "16K".into(),
        65536 => "64K".into(),
        262144 => "256K".into(),
        _ => format!("{n}"),
    }
}

fn random_input(n: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

fn bench_op(
    c: &mut Criterion,
    group_name: &str,
    engine: &ArrayEngine,
    op: fn(&ArrayEngine, &mut [f32]),
) {
    let mut group = c.benchmark_group(group_name);
    for &n in ELEM_SIZES {
        let input = random_input(n);
        group.throughput(Throughput::Bytes((n * std::mem::size_of::<f32>()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_label(n)), &n, |b, _| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    op(engine, &mut data);
                    black_box(data)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    for isa in supported_instruction_sets().expect("feature detection") {
        let engine = select_engine_for(isa).expect("compiled tag");
        bench_op(c, &format!("erff/{isa}"), &engine, ArrayEngine::erff);
        bench_op(c, &format!("expf/{isa}"), &engine, ArrayEngine::expf);
        bench_op(c, &format!("geluf/{isa}"), &engine, ArrayEngine::geluf);
        bench_op(c, &format!("swishf/{isa}"), &engine, ArrayEngine::swishf);
    }
}

criterion_group!(benches, bench_elementwise);
criterion_main!(benches);
