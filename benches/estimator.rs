use criterion::{black_box, criterion_group, criterion_main, Criterion};
use markov_estimator::TransitionEstimator;
use rand::Rng;

const LABELS: [&str; 8] = [
    "Home", "Coffee", "Chat", "Computer", "Lunch", "Meeting", "Break", "Commute",
];

fn random_episode<R: Rng>(rng: &mut R, len: usize) -> Vec<&'static str> {
    (0..len)
        .map(|_| LABELS[rng.gen_range(0..LABELS.len())])
        .collect()
}

fn bench_add_episode(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let episodes: Vec<Vec<&str>> = (0..1_000).map(|_| random_episode(&mut rng, 32)).collect();

    c.bench_function("add_episode/1000x32", |b| {
        b.iter(|| {
            let mut estimator = TransitionEstimator::new();
            for episode in &episodes {
                estimator.add_episode(black_box(episode.clone()));
            }
            estimator
        })
    });
}

fn bench_transition_matrix(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut estimator = TransitionEstimator::new();
    for _ in 0..1_000 {
        estimator.add_episode(random_episode(&mut rng, 32));
    }

    c.bench_function("transition_matrix", |b| {
        b.iter(|| black_box(estimator.transition_matrix()))
    });

    c.bench_function("transition_matrix_dense", |b| {
        b.iter(|| black_box(estimator.transition_matrix_dense()))
    });
}

criterion_group!(benches, bench_add_episode, bench_transition_matrix);
criterion_main!(benches);
