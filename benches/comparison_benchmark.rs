use criterion::{criterion_group, criterion_main, Criterion};
use deco_engine::{compare, GasMix, PlannerKind, SingleLevelParameters, Time};

fn compare_all_models(c: &mut Criterion) {
    let params = SingleLevelParameters::new(30.0, Time::from_minutes(25.0), GasMix::air(), 30, 85);
    let models = [PlannerKind::Buhlmann, PlannerKind::VpmB, PlannerKind::Navy];
    c.bench_function("compare all three models", |b| {
        b.iter(|| compare(&params, &models))
    });
}

fn compare_deep_trimix_dive(c: &mut Criterion) {
    let params = SingleLevelParameters::new(45.0, Time::from_minutes(20.0), GasMix::trimix(0.21, 0.35), 20, 80);
    let models = [PlannerKind::Buhlmann, PlannerKind::VpmB];
    c.bench_function("compare Buhlmann vs VPM-B on a deep dive", |b| {
        b.iter(|| compare(&params, &models))
    });
}

criterion_group!(benches, compare_all_models, compare_deep_trimix_dive);
criterion_main!(benches);
