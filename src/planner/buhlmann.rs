//! Bühlmann ZHL-16C planner: an explicit 3m stop-discovery loop — ascend
//! while safe, stop and wait when not, consult the gas selector at every
//! stop boundary.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{
    end, validate_gas_at_depth, Depth, DepthType, DiveSegment, EngineError, GasInventory, GasMix,
    SegmentTag, Time, Warning, PPO2_DECO_LIMIT,
};
use crate::gas_selector::{deco_gas_ceiling, is_gas_switch_worthwhile, select_best_gas};
use crate::gf::{ceiling, is_ascent_safe};
use crate::tissue::{init_compartments, TissueCompartment};

use super::types::{
    first_stop_depth_from_ceiling, BottomLeg, DecompressionStop, DiveProfile, GasSwitch,
    GasSwitchReason, MultiLevelParameters, SingleLevelParameters,
};

const SINGLE_LEVEL_ASCENT_RATE_M_PER_MIN: f64 = 9.0;
const SAFETY_STOP_DEPTH_M: DepthType = 5.0;
const SAFETY_STOP_TRIGGER_DEPTH_M: DepthType = 8.0;
const SAFETY_STOP_DURATION_MIN: f64 = 3.0;
const GAS_SWITCH_TIME_MIN: f64 = 1.0;
const STOP_DISCOVERY_ITERATION_CAP: u32 = 1000;
const NDL_CAP_MIN: f64 = 300.0;
const MAX_END_M: DepthType = 30.0;

pub fn plan_single_level(params: &SingleLevelParameters) -> DiveProfile {
    let inventory = GasInventory::bottom_only(params.gas.clone());
    let mut warnings = validate_single_level_params(params);

    let mut compartments = init_compartments(&GasMix::air());
    for c in compartments.iter_mut() {
        c.update_constant_depth(&params.gas, params.depth_m, params.bottom_time.as_minutes());
    }

    let mut segments = vec![DiveSegment::new(
        params.depth_m,
        params.bottom_time,
        params.gas.clone(),
        SegmentTag::Bottom,
    )];

    let ascent = run_ascent_and_stops(
        &mut compartments,
        &inventory,
        params.gf_low,
        params.gf_high,
        SINGLE_LEVEL_ASCENT_RATE_M_PER_MIN,
        params.depth_m,
        params.gas.clone(),
        &mut warnings,
    );

    segments.extend(ascent.segments);

    let ndl = compute_ndl(params.depth_m, &params.gas, params.gf_high);
    let total_dive_time = params.bottom_time + ascent.elapsed;

    DiveProfile {
        stops: ascent.stops,
        gas_switches: ascent.gas_switches,
        segments,
        total_decompression_time: ascent.total_deco_time,
        total_dive_time,
        ndl: Time::from_minutes(ndl),
        final_tissues: compartments.to_vec(),
        warnings,
        max_depth_m: params.depth_m,
        average_depth_m: params.depth_m,
    }
}

pub fn plan_multi_level(params: &MultiLevelParameters) -> Result<DiveProfile, EngineError> {
    validate_multi_level_segments(&params.segments)?;
    let max_requested_depth = params
        .segments
        .iter()
        .fold(0.0_f64, |acc, leg| acc.max(leg.depth_m));
    params.gas_inventory.validate(max_requested_depth)?;

    let mut warnings = Vec::new();
    let mut compartments = init_compartments(&GasMix::air());
    let mut segments = Vec::new();
    let mut current_depth = 0.0;
    let mut current_gas = params.gas_inventory.bottom_gas.clone();
    let mut max_depth = 0.0_f64;
    let mut depth_time_sum = 0.0;
    let mut total_bottom_time = 0.0;

    for leg in &params.segments {
        if leg.depth_m > current_depth {
            let descent_time = (leg.depth_m - current_depth) / params.descent_rate_m_per_min;
            for c in compartments.iter_mut() {
                c.update_changing_depth(&current_gas, current_depth, leg.depth_m, descent_time);
            }
            segments.push(DiveSegment::new(
                leg.depth_m,
                Time::from_minutes(descent_time),
                current_gas.clone(),
                SegmentTag::Descent,
            ));
        } else if leg.depth_m < current_depth {
            let ascent_time = (current_depth - leg.depth_m) / params.ascent_rate_m_per_min;
            for c in compartments.iter_mut() {
                c.update_changing_depth(&current_gas, current_depth, leg.depth_m, ascent_time);
            }
            segments.push(DiveSegment::new(
                leg.depth_m,
                Time::from_minutes(ascent_time),
                current_gas.clone(),
                SegmentTag::Ascent,
            ));
        }
        current_depth = leg.depth_m;
        max_depth = max_depth.max(current_depth);
        depth_time_sum += current_depth * leg.duration.as_minutes();
        total_bottom_time += leg.duration.as_minutes();

        for c in compartments.iter_mut() {
            c.update_constant_depth(&current_gas, current_depth, leg.duration.as_minutes());
        }
        segments.push(DiveSegment::new(
            current_depth,
            leg.duration,
            current_gas.clone(),
            SegmentTag::Bottom,
        ));

        emit_segment_warnings(current_depth, leg.duration.as_minutes(), &current_gas, &mut warnings);
    }

    let ascent = run_ascent_and_stops(
        &mut compartments,
        &params.gas_inventory,
        params.gf_low,
        params.gf_high,
        params.ascent_rate_m_per_min,
        current_depth,
        current_gas,
        &mut warnings,
    );
    segments.extend(ascent.segments);

    let ndl = compute_ndl(max_depth, &params.gas_inventory.bottom_gas, params.gf_high);
    let average_depth_m = if total_bottom_time > 0.0 {
        depth_time_sum / total_bottom_time
    } else {
        0.0
    };

    Ok(DiveProfile {
        stops: ascent.stops,
        gas_switches: ascent.gas_switches,
        segments,
        total_decompression_time: ascent.total_deco_time,
        total_dive_time: Time::from_minutes(total_bottom_time) + ascent.elapsed,
        ndl: Time::from_minutes(ndl),
        final_tissues: compartments.to_vec(),
        warnings,
        max_depth_m: max_depth,
        average_depth_m,
    })
}

/// `NDL(d, gas, gf_high)`: fresh tissues, 1-min steps at constant depth until
/// ascent to the surface (evaluated at flat `gf_high`) is no longer safe.
pub fn compute_ndl(depth_m: DepthType, gas: &GasMix, gf_high: u8) -> f64 {
    let mut compartments = init_compartments(&GasMix::air());
    let mut last_safe_minute = 0u32;
    for minute in 1..=(NDL_CAP_MIN as u32) {
        for c in compartments.iter_mut() {
            c.update_constant_depth(gas, depth_m, 1.0);
        }
        if is_ascent_safe(&compartments, Depth::zero(), gf_high, gf_high, Depth::zero()) {
            last_safe_minute = minute;
        } else {
            return last_safe_minute as f64;
        }
    }
    NDL_CAP_MIN
}

pub(crate) struct AscentOutcome {
    pub stops: Vec<DecompressionStop>,
    pub gas_switches: Vec<GasSwitch>,
    pub segments: Vec<DiveSegment>,
    pub total_deco_time: Time,
    pub elapsed: Time,
}

/// Shared stop-discovery core, reused by both the
/// single- and multi-level planners and by VPM-B with adjusted inputs.
pub(crate) fn run_ascent_and_stops(
    compartments: &mut [TissueCompartment],
    inventory: &GasInventory,
    gf_low: u8,
    gf_high: u8,
    ascent_rate: f64,
    start_depth_m: DepthType,
    start_gas: GasMix,
    warnings: &mut Vec<Warning>,
) -> AscentOutcome {
    let mut stops = Vec::new();
    let mut gas_switches = Vec::new();
    let mut segments = Vec::new();
    let mut elapsed = Time::zero();
    let mut total_deco_time = Time::zero();

    let first_stop = first_stop_depth_from_ceiling(ceiling(compartments, gf_low, gf_high, Depth::zero()));
    if first_stop.as_meters() > 0.0 {
        warnings.push(Warning::warning(
            "Decompression required",
            "controlling tissue ceiling is above the surface; mandatory stops follow",
        ));
    }

    let mut current_depth = start_depth_m;
    let mut current_gas = start_gas;

    if first_stop.as_meters() <= 0.0 {
        // No mandatory deco: ascend straight up, inserting the conventional
        // safety stop when the dive passed through the 8m/5m window.
        if current_depth >= SAFETY_STOP_TRIGGER_DEPTH_M {
            ascend_leg(
                compartments,
                &current_gas,
                current_depth,
                SAFETY_STOP_TRIGGER_DEPTH_M,
                ascent_rate,
                &mut segments,
                &mut elapsed,
            );
            ascend_leg(
                compartments,
                &current_gas,
                SAFETY_STOP_TRIGGER_DEPTH_M,
                SAFETY_STOP_DEPTH_M,
                ascent_rate,
                &mut segments,
                &mut elapsed,
            );
            for c in compartments.iter_mut() {
                c.update_constant_depth(&current_gas, SAFETY_STOP_DEPTH_M, SAFETY_STOP_DURATION_MIN);
            }
            let duration = Time::from_minutes(SAFETY_STOP_DURATION_MIN);
            elapsed += duration;
            total_deco_time += duration;
            stops.push(DecompressionStop {
                depth_m: SAFETY_STOP_DEPTH_M,
                duration,
                runtime: elapsed,
                gas: current_gas.clone(),
                gas_switch: None,
            });
            ascend_leg(
                compartments,
                &current_gas,
                SAFETY_STOP_DEPTH_M,
                0.0,
                ascent_rate,
                &mut segments,
                &mut elapsed,
            );
        } else {
            ascend_leg(
                compartments,
                &current_gas,
                current_depth,
                0.0,
                ascent_rate,
                &mut segments,
                &mut elapsed,
            );
        }
        return AscentOutcome {
            stops,
            gas_switches,
            segments,
            total_deco_time,
            elapsed,
        };
    }

    // Walk the continuous ascent to the first stop leg by leg, pausing at
    // each deco gas's MOD boundary so a richer gas already selectable there
    // (per `select_best_gas`) gets switched to as soon as it becomes
    // breathable, rather than only once the stepwise discovery loop below
    // reaches it three meters at a time.
    for checkpoint in gas_switch_checkpoints(inventory, first_stop.as_meters(), current_depth) {
        ascend_leg(compartments, &current_gas, current_depth, checkpoint, ascent_rate, &mut segments, &mut elapsed);
        current_depth = checkpoint;
        maybe_switch_gas(
            compartments,
            inventory,
            current_depth,
            remaining_time_estimate(current_depth),
            &mut current_gas,
            &mut stops,
            &mut gas_switches,
            &mut elapsed,
            &mut total_deco_time,
        );
    }
    ascend_leg(
        compartments,
        &current_gas,
        current_depth,
        first_stop.as_meters(),
        ascent_rate,
        &mut segments,
        &mut elapsed,
    );
    current_depth = first_stop.as_meters();

    let mut iterations = 0u32;
    while current_depth > 0.0 {
        iterations += 1;
        if iterations > STOP_DISCOVERY_ITERATION_CAP {
            warnings.push(Warning::danger(
                "schedule did not converge",
                "stop-discovery loop exceeded its 1000-iteration cap",
            ));
            break;
        }

        if maybe_switch_gas(
            compartments,
            inventory,
            current_depth,
            remaining_time_estimate(current_depth),
            &mut current_gas,
            &mut stops,
            &mut gas_switches,
            &mut elapsed,
            &mut total_deco_time,
        ) {
            continue;
        }

        let next_depth = (current_depth - 3.0).max(0.0);
        if is_ascent_safe(compartments, Depth::from_meters(next_depth), gf_low, gf_high, first_stop) {
            ascend_leg(
                compartments,
                &current_gas,
                current_depth,
                next_depth,
                ascent_rate,
                &mut segments,
                &mut elapsed,
            );
            current_depth = next_depth;
        } else {
            for c in compartments.iter_mut() {
                c.update_constant_depth(&current_gas, current_depth, 1.0);
            }
            let duration = Time::from_minutes(1.0);
            elapsed += duration;
            total_deco_time += duration;
            append_stop(&mut stops, current_depth, duration, elapsed, current_gas.clone(), None);
        }
    }

    AscentOutcome {
        stops,
        gas_switches,
        segments,
        total_deco_time,
        elapsed,
    }
}

fn remaining_time_estimate(current_depth: DepthType) -> f64 {
    if current_depth <= 3.0 {
        1.0
    } else {
        10.0
    }
}

/// MOD-boundary depths, between `lower_bound_m` (the first stop) and
/// `upper_bound_m` (the current depth), at which some deco gas becomes
/// selectable per [`select_best_gas`]'s own window. Sorted deepest-first so
/// an ascent visits them in chronological order.
fn gas_switch_checkpoints(
    inventory: &GasInventory,
    lower_bound_m: DepthType,
    upper_bound_m: DepthType,
) -> Vec<DepthType> {
    let mut checkpoints: Vec<DepthType> = inventory
        .deco_gases
        .iter()
        .map(|gas| deco_gas_ceiling(gas, PPO2_DECO_LIMIT))
        .filter(|&depth| depth > lower_bound_m && depth < upper_bound_m)
        .collect();
    checkpoints.sort_by(|a, b| b.partial_cmp(a).unwrap_or(core::cmp::Ordering::Equal));
    checkpoints.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
    checkpoints
}

/// Switches to a better deco gas at `depth_m` if one is available and
/// worthwhile, spending [`GAS_SWITCH_TIME_MIN`] there. Returns whether a
/// switch happened.
#[allow(clippy::too_many_arguments)]
fn maybe_switch_gas(
    compartments: &mut [TissueCompartment],
    inventory: &GasInventory,
    depth_m: DepthType,
    remaining_time_min: f64,
    current_gas: &mut GasMix,
    stops: &mut Vec<DecompressionStop>,
    gas_switches: &mut Vec<GasSwitch>,
    elapsed: &mut Time,
    total_deco_time: &mut Time,
) -> bool {
    let candidate_gas = select_best_gas(depth_m, inventory, true).clone();
    if candidate_gas == *current_gas
        || !is_gas_switch_worthwhile(current_gas, &candidate_gas, depth_m, remaining_time_min)
    {
        return false;
    }

    gas_switches.push(GasSwitch {
        depth_m,
        from_gas: current_gas.clone(),
        to_gas: candidate_gas.clone(),
        reason: GasSwitchReason::Optimal,
    });
    for c in compartments.iter_mut() {
        c.update_constant_depth(&candidate_gas, depth_m, GAS_SWITCH_TIME_MIN);
    }
    let duration = Time::from_minutes(GAS_SWITCH_TIME_MIN);
    *elapsed += duration;
    *total_deco_time += duration;
    append_stop(stops, depth_m, duration, *elapsed, candidate_gas.clone(), Some(GasSwitchReason::Optimal));
    *current_gas = candidate_gas;
    true
}

fn append_stop(
    stops: &mut Vec<DecompressionStop>,
    depth_m: DepthType,
    duration: Time,
    runtime: Time,
    gas: GasMix,
    gas_switch: Option<GasSwitchReason>,
) {
    if let Some(last) = stops.last_mut() {
        if (last.depth_m - depth_m).abs() < 1e-9 && last.gas == gas && last.gas_switch == gas_switch
        {
            last.duration += duration;
            last.runtime = runtime;
            return;
        }
    }
    stops.push(DecompressionStop {
        depth_m,
        duration,
        runtime,
        gas,
        gas_switch,
    });
}

fn ascend_leg(
    compartments: &mut [TissueCompartment],
    gas: &GasMix,
    from_depth_m: DepthType,
    to_depth_m: DepthType,
    ascent_rate: f64,
    segments: &mut Vec<DiveSegment>,
    elapsed: &mut Time,
) {
    if (from_depth_m - to_depth_m).abs() < 1e-9 {
        return;
    }
    let duration_min = (from_depth_m - to_depth_m).abs() / ascent_rate;
    for c in compartments.iter_mut() {
        c.update_changing_depth(gas, from_depth_m, to_depth_m, duration_min);
    }
    let duration = Time::from_minutes(duration_min);
    *elapsed += duration;
    segments.push(DiveSegment::new(to_depth_m, duration, gas.clone(), SegmentTag::Ascent));
}

fn validate_single_level_params(params: &SingleLevelParameters) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if params.depth_m > 40.0 {
        warnings.push(Warning::warning(
            "deep single-level dive",
            "depth exceeds 40m recreational guidance",
        ));
    }
    let bt = params.bottom_time.as_minutes();
    if bt < 1.0 || bt > 200.0 {
        warnings.push(Warning::warning(
            "unusual bottom time",
            "bottom time is outside the 1-200 minute sanity range",
        ));
    }
    emit_segment_warnings(params.depth_m, bt, &params.gas, &mut warnings);
    warnings
}

fn emit_segment_warnings(depth_m: DepthType, _duration_min: f64, gas: &GasMix, warnings: &mut Vec<Warning>) {
    let validation = validate_gas_at_depth(gas, depth_m, false);
    warnings.extend(validation.warnings);
    let narcosis = end(gas, depth_m);
    if narcosis > MAX_END_M {
        warnings.push(Warning::warning(
            "excessive narcotic loading",
            "END exceeds 30m at this depth",
        ));
    }
}

fn validate_multi_level_segments(segments: &[BottomLeg]) -> Result<(), EngineError> {
    if segments.is_empty() || segments.len() > 5 {
        return Err(EngineError::SegmentOutOfRange(alloc::format!(
            "multi-level profiles take 1..=5 bottom legs, got {}",
            segments.len()
        )));
    }
    for leg in segments {
        if leg.depth_m <= 0.0 || leg.duration.as_minutes() <= 0.0 {
            return Err(EngineError::SegmentOutOfRange(alloc::format!(
                "segment at {}m/{}min must have positive depth and duration",
                leg.depth_m,
                leg.duration.as_minutes()
            )));
        }
    }
    Ok(())
}
