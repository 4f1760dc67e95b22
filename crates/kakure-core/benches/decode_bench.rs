use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kakure_core::{decode, train, ModelParams, ObsSymbol};

fn sample_params() -> ModelParams {
    let transition = vec![
        vec![0.6, 0.2, 0.3],
        vec![0.3, 0.5, 0.3],
        vec![0.1, 0.3, 0.4],
    ];
    let emission = vec![vec![0.5, 0.5], vec![0.85, 0.15], vec![0.1, 0.9]];
    ModelParams::from_probabilities(transition, emission).unwrap()
}

fn sample_obs(len: usize) -> Vec<ObsSymbol> {
    (0..len)
        .map(|i| {
            if (i * 7 + i / 5) % 3 == 0 {
                ObsSymbol::Heads
            } else {
                ObsSymbol::Tails
            }
        })
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let params = sample_params();
    let obs = sample_obs(4096);

    c.bench_function("viterbi_decode_4096", |b| {
        b.iter(|| decode(black_box(&params), black_box(&obs)).unwrap());
    });

    let short = sample_obs(256);
    c.bench_function("train_256_x10", |b| {
        b.iter(|| train(black_box(sample_params()), black_box(&short), 10).unwrap());
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
