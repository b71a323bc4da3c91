//! Gradient-factor engine: ceiling, controlling tissue, ascent safety and
//! supersaturation, built on the combined N2+He coefficients from
//! [`crate::tissue`].
//!
//! `ceiling` anchors the GF-high adjustment at the surface rather than
//! linearly interpolating between `gf_low` and `gf_high` by current depth —
//! the stop-discovery loop is what enforces GF-low conservatism in practice.
//! See DESIGN.md for why this anchoring is intentional.

use crate::common::{depth_to_pressure, pressure_to_depth, Depth, DepthType, P_SURFACE};
use crate::tissue::TissueCompartment;

/// `M(P) = P/b - a/b`
pub fn m_value(p_amb: f64, a: f64, b: f64) -> f64 {
    p_amb / b - a / b
}

/// `P_tol = (P_t - a) * b`
pub fn tolerated_ambient_pressure(p_t: f64, a: f64, b: f64) -> f64 {
    (p_t - a) * b
}

/// Current gradient factor, linearly interpolated between `gf_low` at
/// `first_stop_depth` and `gf_high` at the surface. When `first_stop_depth`
/// is zero the dive has no deco obligation and GF is `gf_high` everywhere.
pub fn current_gf(gf_low: u8, gf_high: u8, first_stop_depth_m: DepthType, depth_m: DepthType) -> f64 {
    if first_stop_depth_m <= 0.0 {
        return gf_high as f64;
    }
    let fraction = (depth_m / first_stop_depth_m).clamp(0.0, 1.0);
    gf_high as f64 - (gf_high as f64 - gf_low as f64) * fraction
}

/// Ceiling in meters for a single compartment, using the GF-high surface
/// anchor.
fn compartment_ceiling(compartment: &TissueCompartment, gf_high: u8) -> DepthType {
    let total_inert = compartment.total_inert_pressure();
    let (a, b) = compartment.combined_ab();
    let p_tol = tolerated_ambient_pressure(total_inert, a, b);
    let p_adj = P_SURFACE + (p_tol - P_SURFACE) * (gf_high as f64 / 100.0);
    pressure_to_depth(p_adj).max(0.0)
}

/// Shallowest depth the diver may ascend to without exceeding tolerated
/// supersaturation in any compartment (the controlling tissue's ceiling).
pub fn ceiling(
    compartments: &[TissueCompartment],
    _gf_low: u8,
    gf_high: u8,
    _first_stop_depth: Depth,
) -> Depth {
    let deepest = compartments
        .iter()
        .map(|c| compartment_ceiling(c, gf_high))
        .fold(0.0, f64::max);
    Depth::from_meters(deepest)
}

/// The compartment with the greatest ceiling.
pub fn controlling_tissue(
    compartments: &[TissueCompartment],
    gf_high: u8,
) -> &TissueCompartment {
    compartments
        .iter()
        .max_by(|a, b| {
            compartment_ceiling(a, gf_high)
                .partial_cmp(&compartment_ceiling(b, gf_high))
                .unwrap_or(core::cmp::Ordering::Equal)
        })
        .expect("tissue vector is never empty")
}

/// True when the controlling ceiling is at or shallower than `target_depth`.
pub fn is_ascent_safe(
    compartments: &[TissueCompartment],
    target_depth: Depth,
    gf_low: u8,
    gf_high: u8,
    first_stop_depth: Depth,
) -> bool {
    ceiling(compartments, gf_low, gf_high, first_stop_depth) <= target_depth
}

/// `supersaturation(tissue, d) = total_inert / M(pressure_at(d)) * 100`
pub fn supersaturation(compartment: &TissueCompartment, depth_m: DepthType) -> f64 {
    let (a, b) = compartment.combined_ab();
    let p_amb = depth_to_pressure(depth_m);
    let m = m_value(p_amb, a, b);
    if m <= 0.0 {
        return 0.0;
    }
    (compartment.total_inert_pressure() / m) * 100.0
}
