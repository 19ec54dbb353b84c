use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hmmeval::hmm::{HiddenMarkovModel, ModelSelector, ObservationSequence};
use rand::prelude::*;

const STATES: usize = 16;
const SYMBOLS: usize = 4;

fn normalized(rng: &mut StdRng, len: usize) -> Vec<f64> {
    let weights: Vec<f64> = (0..len).map(|_| rng.gen_range(0.01..1.0)).collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

fn random_model(rng: &mut StdRng, name: usize) -> HiddenMarkovModel {
    let mut hmm = HiddenMarkovModel::named(format!("m{}", name));
    let initial = normalized(rng, STATES);
    for (i, p) in initial.into_iter().enumerate() {
        hmm.add_state(format!("s{}", i));
        hmm.set_initial(format!("s{}", i), p);
    }
    for i in 0..STATES {
        for (j, p) in normalized(rng, STATES).into_iter().enumerate() {
            hmm.set_transition(format!("s{}", i), format!("s{}", j), p);
        }
        for (k, p) in normalized(rng, SYMBOLS).into_iter().enumerate() {
            hmm.set_emission(format!("s{}", i), format!("o{}", k), p);
        }
    }
    hmm
}

fn bench_selector(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let observations =
        ObservationSequence::new((0..100).map(|_| format!("o{}", rng.gen_range(0..SYMBOLS))))
            .unwrap();
    let models = (0..64).map(|i| random_model(&mut rng, i)).collect();
    let selector = ModelSelector::new(models, observations);

    let mut group = c.benchmark_group("select_best");
    group.bench_function(BenchmarkId::new("sequential", selector.len()), |b| {
        b.iter(|| selector.select_best())
    });
    group.bench_function(BenchmarkId::new("parallel", selector.len()), |b| {
        b.iter(|| selector.select_best_parallel())
    });
    group.finish();
}

criterion_group!(benches, bench_selector);
criterion_main!(benches);
