//! Performance benchmarks for key scoring

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mirex_eval::io::parse_records;
use mirex_eval::{mirex_score, BatchEvaluator, CamelotKey, EvaluationConfig};

fn bench_key_grid(c: &mut Criterion) {
    let keys: Vec<CamelotKey> = CamelotKey::all().collect();

    c.bench_function("mirex_score_24x24", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for est in &keys {
                for truth in &keys {
                    total += mirex_score(black_box(est), black_box(truth));
                }
            }
            total
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    // Synthetic listing: 10k records cycling through the key grid
    let keys: Vec<CamelotKey> = CamelotKey::all().collect();
    let listing: String = (0..10_000)
        .map(|i| {
            let truth = keys[i % keys.len()];
            let est = keys[(i * 7 + 3) % keys.len()];
            format!("{}-{:05}-track{}.wav;{};120;true\n", truth, i, i, est)
        })
        .collect();
    let records = parse_records(&listing).unwrap();
    let evaluator = BatchEvaluator::new(EvaluationConfig::default());

    c.bench_function("evaluate_10k_records", |b| {
        b.iter(|| {
            let mut sink = std::io::sink();
            evaluator.evaluate(black_box(&records), &mut sink).unwrap()
        });
    });
}

criterion_group!(benches, bench_key_grid, bench_batch);
criterion_main!(benches);
