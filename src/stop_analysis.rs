//! Stop analysis: a read-only per-compartment report at an arbitrary
//! selected depth, expressed as a standalone query over a tissue-compartment
//! slice rather than a method on a stateful model, since planners here don't
//! keep one around after they return.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{depth_to_pressure, Depth, DepthType};
use crate::gf::{ceiling, m_value, tolerated_ambient_pressure};
use crate::tissue::TissueCompartment;

const CAUTION_THRESHOLD_PCT: f64 = 70.0;
const DANGER_THRESHOLD_PCT: f64 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompartmentStatus {
    Safe,
    Caution,
    Danger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompartmentReport {
    pub compartment_no: u8,
    pub tissue_pressure: f64,
    pub tolerated_pressure: f64,
    pub absolute_margin: f64,
    pub relative_margin_pct: f64,
    pub ceiling_depth_m: DepthType,
    pub saturation_pct: f64,
    pub status: CompartmentStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StopAnalysis {
    pub selected_depth_m: DepthType,
    pub compartments: Vec<CompartmentReport>,
    pub limiting_compartment_no: u8,
    pub is_safe: bool,
    pub explanation: String,
}

fn status_for(saturation_pct: f64) -> CompartmentStatus {
    if saturation_pct >= DANGER_THRESHOLD_PCT {
        CompartmentStatus::Danger
    } else if saturation_pct >= CAUTION_THRESHOLD_PCT {
        CompartmentStatus::Caution
    } else {
        CompartmentStatus::Safe
    }
}

/// Per-compartment saturation/margin/ceiling report at `selected_depth_m`,
/// plus a human-readable verdict on whether ascending there is safe.
pub fn analyze_at_depth(
    compartments: &[TissueCompartment],
    selected_depth_m: DepthType,
    gf_low: u8,
    gf_high: u8,
    first_stop_depth: Depth,
) -> StopAnalysis {
    let p_amb = depth_to_pressure(selected_depth_m);

    let mut reports: Vec<CompartmentReport> = compartments
        .iter()
        .map(|c| {
            let (a, b) = c.combined_ab();
            let tissue_pressure = c.total_inert_pressure();
            let tolerated_pressure = tolerated_ambient_pressure(tissue_pressure, a, b);
            let absolute_margin = p_amb - tolerated_pressure;
            let relative_margin_pct = if tolerated_pressure.abs() > 1e-9 {
                (absolute_margin / tolerated_pressure) * 100.0
            } else {
                0.0
            };
            let m = m_value(p_amb, a, b);
            let saturation_pct = if m > 0.0 {
                (tissue_pressure / m) * 100.0
            } else {
                0.0
            };
            CompartmentReport {
                compartment_no: c.no,
                tissue_pressure,
                tolerated_pressure,
                absolute_margin,
                relative_margin_pct,
                ceiling_depth_m: ceiling(core::slice::from_ref(c), gf_low, gf_high, first_stop_depth)
                    .as_meters(),
                saturation_pct,
                status: status_for(saturation_pct),
            }
        })
        .collect();

    reports.sort_by_key(|r| r.compartment_no);

    let limiting_compartment_no = reports
        .iter()
        .max_by(|a, b| {
            a.ceiling_depth_m
                .partial_cmp(&b.ceiling_depth_m)
                .unwrap_or(core::cmp::Ordering::Equal)
        })
        .map(|r| r.compartment_no)
        .unwrap_or(1);

    let controlling_ceiling = ceiling(compartments, gf_low, gf_high, first_stop_depth).as_meters();
    let is_safe = controlling_ceiling <= selected_depth_m;

    let explanation = if is_safe {
        format!(
            "Ascent to {selected_depth_m:.1}m is safe: controlling compartment {limiting_compartment_no} \
             has a ceiling of {controlling_ceiling:.1}m."
        )
    } else {
        format!(
            "Ascent to {selected_depth_m:.1}m is NOT safe: compartment {limiting_compartment_no} \
             requires staying at or below {controlling_ceiling:.1}m."
        )
    };

    StopAnalysis {
        selected_depth_m,
        compartments: reports,
        limiting_compartment_no,
        is_safe,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::GasMix;
    use crate::tissue::init_compartments;

    #[test]
    fn surface_equilibrium_is_safe_everywhere() {
        let compartments = init_compartments(&GasMix::air());
        let analysis = analyze_at_depth(&compartments, 0.0, 30, 85, Depth::zero());
        assert!(analysis.is_safe);
        assert!(analysis.compartments.iter().all(|c| c.status == CompartmentStatus::Safe));
    }

    #[test]
    fn loaded_tissue_flags_unsafe_surfacing() {
        let mut compartments = init_compartments(&GasMix::air());
        let air = GasMix::air();
        for c in compartments.iter_mut() {
            c.update_constant_depth(&air, 40.0, 30.0);
        }
        let analysis = analyze_at_depth(&compartments, 0.0, 30, 85, Depth::zero());
        assert!(!analysis.is_safe);
        assert!(analysis
            .compartments
            .iter()
            .any(|c| c.status != CompartmentStatus::Safe));
    }

    #[test]
    fn reports_are_sorted_by_compartment_number() {
        let compartments = init_compartments(&GasMix::air());
        let analysis = analyze_at_depth(&compartments, 0.0, 30, 85, Depth::zero());
        let numbers: Vec<u8> = analysis.compartments.iter().map(|c| c.compartment_no).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
    }
}
