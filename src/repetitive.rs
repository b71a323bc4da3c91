//! Repetitive-dive planning: surface-interval off-gassing, pressure-group
//! classification, no-fly time, and the validation rules that gate a
//! repetitive dive.
//!
//! Off-gassing reuses [`TissueCompartment::update_constant_depth`] at depth
//! 0 on surface air, since that update is callable at any depth/gas pair
//! including the surface. Each repetitive dive is planned from fresh
//! tissues; the state produced here is surfaced for pressure-group/no-fly
//! reporting only and is never fed back into a planner's initial tissue
//! vector. See DESIGN.md.
//!
//! The pressure-group letter mapping (A..Z by quantile bucket of the
//! worst-loaded compartment's N2-to-M-value ratio) is not a published
//! standard; it is this crate's own bucketing.

use alloc::vec::Vec;

use crate::common::{DepthType, EngineError, GasMix, Time};
use crate::gf::m_value;
use crate::tissue::TissueCompartment;

const NO_FLY_EQUILIBRIUM_MARGIN_BAR: f64 = 0.05;
const NO_FLY_CAP_MIN: f64 = 24.0 * 60.0;
const PRESSURE_GROUP_LETTERS: usize = 26;
const SURFACE_DEPTH_M: DepthType = 0.0;

/// Off-gas every compartment for `surface_interval_min` at the surface on
/// air, returning the resulting tissue state. This state is never fed back
/// into the next dive's initial tissue vector; it exists purely for
/// [`pressure_group`] and [`no_fly_time`].
pub fn residual_after_interval(
    compartments: &[TissueCompartment],
    surface_interval_min: f64,
) -> Vec<TissueCompartment> {
    let air = GasMix::air();
    let mut residual = compartments.to_vec();
    for c in residual.iter_mut() {
        c.update_constant_depth(&air, SURFACE_DEPTH_M, surface_interval_min);
    }
    residual
}

/// Letter code (A..Z) summarizing residual nitrogen loading, bucketed by the
/// worst compartment's N2-pressure-to-surface-M-value ratio. Non-normative:
/// see module docs and DESIGN.md.
pub fn pressure_group(compartments: &[TissueCompartment]) -> char {
    let worst_ratio = compartments
        .iter()
        .map(|c| {
            let m = m_value(crate::common::P_SURFACE, c.a_n2, c.b_n2);
            if m > 0.0 {
                c.n2_pressure / m
            } else {
                0.0
            }
        })
        .fold(0.0_f64, f64::max)
        .clamp(0.0, 1.0);

    let bucket = (worst_ratio * PRESSURE_GROUP_LETTERS as f64).floor() as usize;
    let bucket = bucket.min(PRESSURE_GROUP_LETTERS - 1);
    (b'A' + bucket as u8) as char
}

/// Minutes until every compartment's N2 pressure returns to within
/// [`NO_FLY_EQUILIBRIUM_MARGIN_BAR`] of surface equilibrium, capped at 24h.
pub fn no_fly_time(compartments: &[TissueCompartment]) -> Time {
    let air = GasMix::air();
    let equilibrium = crate::common::inspired_partial_pressures(&air, SURFACE_DEPTH_M).n2;
    let mut state = compartments.to_vec();

    let mut minute = 0u32;
    while (minute as f64) < NO_FLY_CAP_MIN {
        if state
            .iter()
            .all(|c| (c.n2_pressure - equilibrium).abs() <= NO_FLY_EQUILIBRIUM_MARGIN_BAR)
        {
            return Time::from_minutes(minute as f64);
        }
        for c in state.iter_mut() {
            c.update_constant_depth(&air, SURFACE_DEPTH_M, 1.0);
        }
        minute += 1;
    }
    Time::from_minutes(NO_FLY_CAP_MIN)
}

/// Tunable limits a repetitive dive must clear before it's planned. Mirrors
/// a builder-validated config pattern:
/// construct with [`RepetitiveDiveLimits::default`] then adjust with
/// `with_*`, rather than passing four bare arguments around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepetitiveDiveLimits {
    pub min_surface_interval: Time,
    pub max_dives_per_day: u8,
    pub max_pressure_group: char,
}

impl Default for RepetitiveDiveLimits {
    fn default() -> Self {
        Self {
            min_surface_interval: Time::from_minutes(10.0),
            max_dives_per_day: 4,
            max_pressure_group: 'Z',
        }
    }
}

impl RepetitiveDiveLimits {
    pub fn with_min_surface_interval(mut self, min_surface_interval: Time) -> Self {
        self.min_surface_interval = min_surface_interval;
        self
    }

    pub fn with_max_dives_per_day(mut self, max_dives_per_day: u8) -> Self {
        self.max_dives_per_day = max_dives_per_day;
        self
    }

    pub fn with_max_pressure_group(mut self, max_pressure_group: char) -> Self {
        self.max_pressure_group = max_pressure_group;
        self
    }
}

/// Validates a repetitive dive against the configured limits.
/// Structural failures, not soft warnings: the caller must resolve them
/// before a repetitive plan makes sense at all.
pub fn validate_repetitive_dive(
    surface_interval: Time,
    dives_today: u8,
    carryover_group: char,
    limits: &RepetitiveDiveLimits,
) -> Result<(), EngineError> {
    if surface_interval < limits.min_surface_interval {
        return Err(EngineError::SurfaceIntervalTooShort(alloc::format!(
            "surface interval {:.1}min is shorter than the required {:.1}min",
            surface_interval.as_minutes(),
            limits.min_surface_interval.as_minutes()
        )));
    }
    if dives_today >= limits.max_dives_per_day {
        return Err(EngineError::TooManyDives(alloc::format!(
            "{dives_today} dives already logged today, limit is {}",
            limits.max_dives_per_day
        )));
    }
    if carryover_group > limits.max_pressure_group {
        return Err(EngineError::PressureGroupTooHigh(alloc::format!(
            "carried-over pressure group {carryover_group} exceeds the configured ceiling {}",
            limits.max_pressure_group
        )));
    }
    Ok(())
}
