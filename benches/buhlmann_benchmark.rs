use criterion::{criterion_group, criterion_main, Criterion};
use deco_engine::{
    compute_ndl, plan_multi_level, plan_single_level, BottomLeg, GasInventory, GasMix,
    MultiLevelParameters, SingleLevelParameters, Time,
};

fn single_level_no_deco(c: &mut Criterion) {
    let params = SingleLevelParameters::new(18.0, Time::from_minutes(40.0), GasMix::air(), 30, 85);
    c.bench_function("Buhlmann single-level no-deco", |b| {
        b.iter(|| plan_single_level(&params))
    });
}

fn single_level_mandatory_deco(c: &mut Criterion) {
    let params = SingleLevelParameters::new(40.0, Time::from_minutes(25.0), GasMix::air(), 30, 85);
    c.bench_function("Buhlmann single-level mandatory deco", |b| {
        b.iter(|| plan_single_level(&params))
    });
}

fn multi_level_with_gas_switches(c: &mut Criterion) {
    let params = MultiLevelParameters::new(
        vec![BottomLeg { depth_m: 40.0, duration: Time::from_minutes(25.0) }],
        GasInventory::new(
            GasMix::trimix(0.21, 0.35),
            vec![GasMix::nitrox(0.50), GasMix::oxygen()],
        ),
        30,
        85,
    );
    c.bench_function("Buhlmann multi-level with gas switches", |b| {
        b.iter(|| plan_multi_level(&params).unwrap())
    });
}

fn ndl_search(c: &mut Criterion) {
    let air = GasMix::air();
    c.bench_function("NDL search at 30m", |b| {
        b.iter(|| compute_ndl(30.0, &air, 85))
    });
}

criterion_group!(
    benches,
    single_level_no_deco,
    single_level_mandatory_deco,
    multi_level_with_gas_switches,
    ndl_search,
);
criterion_main!(benches);
