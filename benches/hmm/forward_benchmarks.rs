use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hmmeval::hmm::{HiddenMarkovModel, ObservationSequence};
use rand::prelude::*;

const SYMBOLS: usize = 8;

/// A fully connected model with random, row-normalized distributions.
fn random_model(rng: &mut StdRng, states: usize) -> HiddenMarkovModel {
    let mut row = |len: usize| {
        let weights: Vec<f64> = (0..len).map(|_| rng.gen_range(0.01..1.0)).collect();
        let total: f64 = weights.iter().sum();
        weights.into_iter().map(|w| w / total).collect::<Vec<_>>()
    };

    let mut hmm = HiddenMarkovModel::new();
    let initial = row(states);
    for i in 0..states {
        hmm.add_state(format!("s{}", i));
        hmm.set_initial(format!("s{}", i), initial[i]);
    }
    for i in 0..states {
        for (j, p) in row(states).into_iter().enumerate() {
            hmm.set_transition(format!("s{}", i), format!("s{}", j), p);
        }
        for (k, p) in row(SYMBOLS).into_iter().enumerate() {
            hmm.set_emission(format!("s{}", i), format!("o{}", k), p);
        }
    }
    hmm
}

fn random_observations(rng: &mut StdRng, len: usize) -> ObservationSequence {
    ObservationSequence::new((0..len).map(|_| format!("o{}", rng.gen_range(0..SYMBOLS)))).unwrap()
}

fn bench_forward(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let observations = random_observations(&mut rng, 200);

    let mut group = c.benchmark_group("forward");
    for states in [2, 8, 32] {
        let hmm = random_model(&mut rng, states);
        group.bench_with_input(BenchmarkId::new("probability", states), &hmm, |b, hmm| {
            b.iter(|| hmm.forward_probability(black_box(&observations)))
        });
        group.bench_with_input(BenchmarkId::new("log_likelihood", states), &hmm, |b, hmm| {
            b.iter(|| hmm.log_likelihood(black_box(&observations)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_forward);
criterion_main!(benches);
