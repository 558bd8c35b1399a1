use criterion::{criterion_group, criterion_main, Criterion};

use deinflect_de::TransformRegistry;

static FORMS: &[&str] = &[
    "Männer",
    "gefahren",
    "anzufangen",
    "spricht",
    "Ärztinnen",
    "hinausgegangen",
    "Schlossstrasse",
    "Hand",
];

fn candidates_benchmark(c: &mut Criterion) {
    let registry = TransformRegistry::german();

    for form in FORMS {
        c.bench_function(&format!("candidates-{}", form), |b| {
            b.iter(|| registry.candidates(form))
        });
    }

    c.bench_function("first-candidates", |b| {
        b.iter(|| {
            FORMS
                .iter()
                .map(|form| registry.first_candidates(form).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(candidates_benches, candidates_benchmark);
criterion_main!(candidates_benches);
