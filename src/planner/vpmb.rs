//! VPM-B planner: a deep-stop-biased schedule atop the same tissue model as
//! [`super::buhlmann`], expressed as a config-free planner function
//! returning a profile.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{
    end, validate_gas_at_depth, Depth, DepthType, DiveSegment, GasMix, SegmentTag, Time, Warning,
};
use crate::gf::{ceiling, is_ascent_safe};
use crate::tissue::init_compartments;

use super::types::{DecompressionStop, DiveProfile, SingleLevelParameters};

const VPMB_ASCENT_RATE_M_PER_MIN: f64 = 9.0;
const FIRST_STOP_DEEPEN_M: DepthType = 3.0;
const DEEP_STOP_THRESHOLD_M: DepthType = 12.0;
const DEEP_STOP_MULTIPLIER: f64 = 1.3;
const SHALLOW_STOP_MULTIPLIER: f64 = 0.85;
const STOP_DISCOVERY_ITERATION_CAP: u32 = 1000;
const GF_LOW_FLOOR: u8 = 20;
const GF_HIGH_FLOOR: u8 = 70;

fn effective_gfs(gf_low: u8, gf_high: u8) -> (u8, u8) {
    let low = gf_low.saturating_sub(10).max(GF_LOW_FLOOR);
    let high = gf_high.saturating_sub(5).max(GF_HIGH_FLOOR);
    (low, high)
}

pub fn plan_vpmb(params: &SingleLevelParameters) -> DiveProfile {
    let mut warnings = vec![
        Warning::info(
            "VPM-B model",
            "deep-stop-biased schedule; stricter effective gradient factors and deepened first stop",
        ),
    ];

    let validation = validate_gas_at_depth(&params.gas, params.depth_m, false);
    warnings.extend(validation.warnings);
    if end(&params.gas, params.depth_m) > 30.0 {
        warnings.push(Warning::warning(
            "excessive narcotic loading",
            "END exceeds 30m at this depth",
        ));
    }

    let (gf_low, gf_high) = effective_gfs(params.gf_low, params.gf_high);

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

    let raw_ceiling = ceiling(&compartments, gf_low, gf_high, Depth::zero()).as_meters();
    let mut first_stop = if raw_ceiling <= 0.0 {
        0.0
    } else {
        let rounded = crate::common::math::ceil(raw_ceiling / 3.0) * 3.0;
        (rounded + FIRST_STOP_DEEPEN_M).min(params.depth_m - 3.0).max(0.0)
    };
    if first_stop > 0.0 {
        warnings.push(Warning::warning(
            "Decompression required",
            "VPM-B schedule requires deep-stop-biased mandatory stops",
        ));
    }

    let mut stops = Vec::new();
    let mut elapsed = Time::zero();
    let mut total_deco_time = Time::zero();
    let mut current_depth = params.depth_m;

    if first_stop >= current_depth {
        first_stop = (current_depth - 3.0).max(0.0);
    }

    ascend(&mut compartments, &params.gas, current_depth, first_stop, &mut segments, &mut elapsed);
    current_depth = first_stop;

    let mut iterations = 0u32;
    while current_depth > 0.0 {
        iterations += 1;
        if iterations > STOP_DISCOVERY_ITERATION_CAP {
            warnings.push(Warning::danger(
                "schedule did not converge",
                "VPM-B stop-discovery loop exceeded its 1000-iteration cap",
            ));
            break;
        }

        let next_depth = (current_depth - 3.0).max(0.0);
        if is_ascent_safe(&compartments, Depth::from_meters(next_depth), gf_low, gf_high, Depth::from_meters(first_stop)) {
            ascend(&mut compartments, &params.gas, current_depth, next_depth, &mut segments, &mut elapsed);
            current_depth = next_depth;
        } else {
            let increment = if current_depth >= DEEP_STOP_THRESHOLD_M {
                DEEP_STOP_MULTIPLIER
            } else {
                SHALLOW_STOP_MULTIPLIER
            };
            for c in compartments.iter_mut() {
                c.update_constant_depth(&params.gas, current_depth, increment);
            }
            let duration = Time::from_minutes(increment);
            elapsed += duration;
            total_deco_time += duration;
            if let Some(last) = stops.last_mut() {
                let last: &mut DecompressionStop = last;
                if (last.depth_m - current_depth).abs() < 1e-9 {
                    last.duration += duration;
                    last.runtime = elapsed;
                } else {
                    stops.push(DecompressionStop {
                        depth_m: current_depth,
                        duration,
                        runtime: elapsed,
                        gas: params.gas.clone(),
                        gas_switch: None,
                    });
                }
            } else {
                stops.push(DecompressionStop {
                    depth_m: current_depth,
                    duration,
                    runtime: elapsed,
                    gas: params.gas.clone(),
                    gas_switch: None,
                });
            }
        }
    }

    let total_dive_time = params.bottom_time + elapsed;

    DiveProfile {
        stops,
        gas_switches: Vec::new(),
        segments,
        total_decompression_time: total_deco_time,
        total_dive_time,
        ndl: Time::zero(),
        final_tissues: compartments.to_vec(),
        warnings,
        max_depth_m: params.depth_m,
        average_depth_m: params.depth_m,
    }
}

fn ascend(
    compartments: &mut [crate::tissue::TissueCompartment],
    gas: &GasMix,
    from_depth_m: DepthType,
    to_depth_m: DepthType,
    segments: &mut Vec<DiveSegment>,
    elapsed: &mut Time,
) {
    if (from_depth_m - to_depth_m).abs() < 1e-9 {
        return;
    }
    let duration_min = (from_depth_m - to_depth_m).abs() / VPMB_ASCENT_RATE_M_PER_MIN;
    for c in compartments.iter_mut() {
        c.update_changing_depth(gas, from_depth_m, to_depth_m, duration_min);
    }
    let duration = Time::from_minutes(duration_min);
    *elapsed += duration;
    segments.push(DiveSegment::new(to_depth_m, duration, gas.clone(), SegmentTag::Ascent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vpmb_ndl_is_always_zero() {
        let params = SingleLevelParameters::new(18.0, Time::from_minutes(40.0), GasMix::air(), 30, 85);
        let profile = plan_vpmb(&params);
        assert_eq!(profile.ndl.as_minutes(), 0.0);
    }

    #[test]
    fn vpmb_first_stop_is_deeper_than_buhlmann() {
        let params = SingleLevelParameters::new(40.0, Time::from_minutes(25.0), GasMix::air(), 30, 85);
        let vpmb_profile = plan_vpmb(&params);
        let buhlmann_profile = crate::planner::buhlmann::plan_single_level(&params);

        let vpmb_first = vpmb_profile
            .stops
            .iter()
            .map(|s| s.depth_m)
            .fold(0.0_f64, f64::max);
        let buhlmann_first = buhlmann_profile
            .stops
            .iter()
            .map(|s| s.depth_m)
            .fold(0.0_f64, f64::max);
        assert!(vpmb_first >= buhlmann_first);
    }

    #[test]
    fn vpmb_emits_model_identification_warning() {
        let params = SingleLevelParameters::new(30.0, Time::from_minutes(20.0), GasMix::air(), 30, 85);
        let profile = plan_vpmb(&params);
        assert!(profile.warnings.iter().any(|w| w.message == "VPM-B model"));
    }
}
