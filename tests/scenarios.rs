//! Whole-planner integration scenarios, one per concrete case the engine's
//! behavior is pinned against, plus the universal cross-cutting invariants.

use deco_engine::{
    compute_ndl, depth_to_pressure, plan_multi_level, plan_navy, plan_single_level, plan_vpmb,
    pressure_to_depth, BottomLeg, GasInventory, GasMix, MultiLevelParameters, SingleLevelParameters,
    Time, WarningLevel,
};

#[test]
fn no_deco_air_dive() {
    let params = SingleLevelParameters::new(18.0, Time::from_minutes(40.0), GasMix::air(), 30, 85);
    let profile = plan_single_level(&params);

    assert!(
        profile.total_decompression_time.as_minutes() == 0.0
            || (profile.total_decompression_time.as_minutes() - 3.0).abs() < 1e-9
    );
    assert!(!profile.warnings.iter().any(|w| w.level == WarningLevel::Danger));
    assert!(profile.ndl.as_minutes() >= 40.0);
}

#[test]
fn mandatory_deco_air_dive() {
    let params = SingleLevelParameters::new(40.0, Time::from_minutes(25.0), GasMix::air(), 30, 85);
    let profile = plan_single_level(&params);

    assert!(profile.stops.iter().any(|s| s.depth_m >= 3.0));
    let first_stop = profile.stops.iter().map(|s| s.depth_m).fold(0.0_f64, f64::max);
    assert!(first_stop >= 3.0);
    assert!((first_stop / 3.0).fract().abs() < 1e-6 || (first_stop - 5.0).abs() < 1e-6);
    assert!(profile.warnings.iter().any(|w| w.message == "Decompression required"));
}

#[test]
fn trimix_with_deco_gas_switch() {
    let params = MultiLevelParameters::new(
        vec![BottomLeg { depth_m: 40.0, duration: Time::from_minutes(25.0) }],
        GasInventory::new(
            GasMix::trimix(0.21, 0.35),
            vec![GasMix::nitrox(0.50), GasMix::oxygen()],
        ),
        30,
        85,
    );
    let profile = plan_multi_level(&params).unwrap();

    let ean50_switch = profile
        .gas_switches
        .iter()
        .find(|sw| (sw.to_gas.o - 0.50).abs() < 1e-9)
        .expect("expected a switch to EAN50");
    assert!(ean50_switch.depth_m >= 21.0 && ean50_switch.depth_m <= 22.0);

    let o2_switch = profile
        .gas_switches
        .iter()
        .find(|sw| (sw.to_gas.o - 1.0).abs() < 1e-9)
        .expect("expected a switch to O2");
    assert!((o2_switch.depth_m - 6.0).abs() < 1e-6);
}

#[test]
fn multi_level_tracks_max_depth_and_ordered_legs() {
    let params = MultiLevelParameters::new(
        vec![
            BottomLeg { depth_m: 30.0, duration: Time::from_minutes(15.0) },
            BottomLeg { depth_m: 20.0, duration: Time::from_minutes(10.0) },
            BottomLeg { depth_m: 10.0, duration: Time::from_minutes(5.0) },
        ],
        GasInventory::bottom_only(GasMix::air()),
        30,
        85,
    );
    let profile = plan_multi_level(&params).unwrap();
    assert_eq!(profile.max_depth_m, 30.0);
}

#[test]
fn unsafe_ppo2_still_produces_a_profile() {
    let params = SingleLevelParameters::new(45.0, Time::from_minutes(10.0), GasMix::nitrox(0.36), 30, 85);
    let profile = plan_single_level(&params);
    assert!(profile
        .warnings
        .iter()
        .any(|w| w.level == WarningLevel::Danger && w.message.contains("oxygen toxicity")));
}

#[test]
fn navy_table_dive_matches_schedule_with_safety_stop() {
    let params = SingleLevelParameters::new(18.0, Time::from_minutes(60.0), GasMix::air(), 30, 85);
    let profile = plan_navy(&params).unwrap();
    assert!(profile.stops.iter().any(|s| (s.depth_m - 6.0).abs() < 1e-6));
    assert!(profile.stops.iter().any(|s| (s.depth_m - 5.0).abs() < 1e-6));
}

#[test]
fn universal_invariant_stop_durations_sum_to_total_deco_time() {
    let params = SingleLevelParameters::new(40.0, Time::from_minutes(25.0), GasMix::air(), 30, 85);
    let profile = plan_single_level(&params);
    let summed: f64 = profile.stops.iter().map(|s| s.duration.as_minutes()).sum();
    assert!((summed - profile.total_decompression_time.as_minutes()).abs() < 1e-6);
}

#[test]
fn universal_invariant_stops_are_non_increasing_in_depth() {
    let params = SingleLevelParameters::new(45.0, Time::from_minutes(30.0), GasMix::air(), 30, 85);
    let profile = plan_single_level(&params);
    for window in profile.stops.windows(2) {
        assert!(window[0].depth_m >= window[1].depth_m - 1e-9);
    }
}

#[test]
fn universal_invariant_tissue_pressures_never_negative() {
    let params = SingleLevelParameters::new(40.0, Time::from_minutes(25.0), GasMix::air(), 30, 85);
    let profile = plan_single_level(&params);
    for c in &profile.final_tissues {
        assert!(c.n2_pressure >= 0.0);
        assert!(c.he_pressure >= 0.0);
    }
}

#[test]
fn universal_invariant_ndl_is_monotonic_in_depth() {
    let shallow = compute_ndl(15.0, &GasMix::air(), 85);
    let deep = compute_ndl(30.0, &GasMix::air(), 85);
    assert!(shallow >= deep);
}

#[test]
fn universal_invariant_pressure_depth_roundtrip() {
    for d in [0.0, 5.0, 18.0, 40.0, 60.0] {
        let p = depth_to_pressure(d);
        assert!((pressure_to_depth(p) - d).abs() < 1e-9);
    }
}

#[test]
fn vpmb_produces_deeper_or_equal_first_stop_than_buhlmann() {
    let params = SingleLevelParameters::new(40.0, Time::from_minutes(25.0), GasMix::air(), 30, 85);
    let vpmb_profile = plan_vpmb(&params);
    let buhlmann_profile = plan_single_level(&params);
    let vpmb_first = vpmb_profile.stops.iter().map(|s| s.depth_m).fold(0.0_f64, f64::max);
    let buhlmann_first = buhlmann_profile.stops.iter().map(|s| s.depth_m).fold(0.0_f64, f64::max);
    assert!(vpmb_first >= buhlmann_first);
    assert_eq!(vpmb_profile.ndl.as_minutes(), 0.0);
}
