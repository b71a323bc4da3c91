//! The 16-compartment ZHL-16C tissue model: per-compartment inert pressure
//! plus M-value coefficients, tracking N2 and He separately so they can be
//! combined-weighted by current tissue pressure fraction (the blend is
//! intentionally by pressure fraction rather than by gas content — kept for
//! numerical parity with the reference model; see DESIGN.md). Also provides
//! a closed-form changing-depth (Haldane-Schreiner) update for continuously
//! varying depth, alongside the constant-depth Schreiner update.

use crate::common::math;
use crate::common::{depth_to_pressure, inspired_partial_pressures};
use crate::common::{DepthType, GasMix, Pressure};

use super::zhl_values::{ZhlRow, ZHL_16C_VALUES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LN2: f64 = core::f64::consts::LN_2;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TissueCompartment {
    pub no: u8,
    pub n2_half_time: f64,
    pub a_n2: f64,
    pub b_n2: f64,
    pub he_half_time: f64,
    pub a_he: f64,
    pub b_he: f64,
    pub n2_pressure: Pressure,
    pub he_pressure: Pressure,
}

impl TissueCompartment {
    fn from_row(no: u8, row: ZhlRow) -> Self {
        let (n2_half_time, a_n2, b_n2, he_half_time, a_he, b_he) = row;
        Self {
            no,
            n2_half_time,
            a_n2,
            b_n2,
            he_half_time,
            a_he,
            b_he,
            n2_pressure: 0.0,
            he_pressure: 0.0,
        }
    }

    /// Seeded at equilibrium with `surface_gas` (default air), He at zero.
    fn init_with_surface_gas(&mut self, surface_gas: &GasMix) {
        let inspired = inspired_partial_pressures(surface_gas, 0.0);
        self.n2_pressure = inspired.n2;
        self.he_pressure = inspired.he;
    }

    pub fn total_inert_pressure(&self) -> Pressure {
        self.n2_pressure + self.he_pressure
    }

    /// Combined M-value (a, b) blended by current tissue pressure fraction;
    /// falls back to N2-only coefficients when total inert pressure is zero.
    pub fn combined_ab(&self) -> (f64, f64) {
        let total = self.total_inert_pressure();
        if total <= 0.0 {
            return (self.a_n2, self.b_n2);
        }
        let a = (self.a_n2 * self.n2_pressure + self.a_he * self.he_pressure) / total;
        let b = (self.b_n2 * self.n2_pressure + self.b_he * self.he_pressure) / total;
        (a, b)
    }

    /// Schreiner constant-depth update: `P' = P_i + (P - P_i) * exp(-ln2 * t / tau)`.
    pub fn update_constant_depth(&mut self, gas: &GasMix, depth_m: DepthType, duration_min: f64) {
        if duration_min <= 0.0 {
            return;
        }
        let inspired = inspired_partial_pressures(gas, depth_m);
        self.n2_pressure = schreiner_constant(self.n2_pressure, inspired.n2, self.n2_half_time, duration_min);
        self.he_pressure = schreiner_constant(self.he_pressure, inspired.he, self.he_half_time, duration_min);
    }

    /// Haldane-Schreiner linear update across a linearly changing depth.
    /// Stable down to `duration_min >= 1.0 / 60.0` (one second).
    pub fn update_changing_depth(
        &mut self,
        gas: &GasMix,
        start_depth_m: DepthType,
        end_depth_m: DepthType,
        duration_min: f64,
    ) {
        if duration_min <= 0.0 {
            return;
        }
        let inspired_start = inspired_partial_pressures(gas, start_depth_m);
        let inspired_end = inspired_partial_pressures(gas, end_depth_m);
        self.n2_pressure = schreiner_linear(
            self.n2_pressure,
            inspired_start.n2,
            inspired_end.n2,
            self.n2_half_time,
            duration_min,
        );
        self.he_pressure = schreiner_linear(
            self.he_pressure,
            inspired_start.he,
            inspired_end.he,
            self.he_half_time,
            duration_min,
        );
    }
}

fn schreiner_constant(p_current: Pressure, p_inspired: Pressure, half_time: f64, t: f64) -> Pressure {
    let k = LN2 / half_time;
    p_inspired + (p_current - p_inspired) * math::exp(-k * t)
}

fn schreiner_linear(
    p_current: Pressure,
    p_inspired_start: Pressure,
    p_inspired_end: Pressure,
    half_time: f64,
    t: f64,
) -> Pressure {
    let k = LN2 / half_time;
    let r = (p_inspired_end - p_inspired_start) / t;
    p_inspired_start + r * (t - 1.0 / k) - (p_inspired_start - p_current - r / k) * math::exp(-k * t)
}

/// Builds the sixteen-compartment vector at surface equilibrium.
pub fn init_compartments(surface_gas: &GasMix) -> [TissueCompartment; 16] {
    let mut compartments: [TissueCompartment; 16] =
        core::array::from_fn(|i| TissueCompartment::from_row(i as u8 + 1, ZHL_16C_VALUES[i]));
    for compartment in compartments.iter_mut() {
        compartment.init_with_surface_gas(surface_gas);
    }
    compartments
}

/// Ambient pressure helper re-exported for callers working with raw depths.
pub fn ambient_pressure(depth_m: DepthType) -> Pressure {
    depth_to_pressure(depth_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::GasMix;

    #[test]
    fn init_seeds_n2_equilibrium_he_zero() {
        let compartments = init_compartments(&GasMix::air());
        for c in compartments.iter() {
            assert!(c.n2_pressure > 0.0);
            assert_eq!(c.he_pressure, 0.0);
        }
    }

    #[test]
    fn constant_depth_ongassing_increases_n2() {
        let mut compartments = init_compartments(&GasMix::air());
        let air = GasMix::air();
        let before = compartments[4].n2_pressure;
        compartments[4].update_constant_depth(&air, 30.0, 10.0);
        assert!(compartments[4].n2_pressure > before);
    }

    #[test]
    fn constant_depth_off_gassing_decreases_n2() {
        let mut compartments = init_compartments(&GasMix::air());
        let air = GasMix::air();
        compartments[0].update_constant_depth(&air, 40.0, 30.0);
        let loaded = compartments[0].n2_pressure;
        compartments[0].update_constant_depth(&air, 0.0, 30.0);
        assert!(compartments[0].n2_pressure < loaded);
    }

    #[test]
    fn changing_depth_matches_constant_depth_when_flat() {
        let mut a = init_compartments(&GasMix::air());
        let mut b = init_compartments(&GasMix::air());
        let air = GasMix::air();
        a[5].update_constant_depth(&air, 20.0, 5.0);
        b[5].update_changing_depth(&air, 20.0, 20.0, 5.0);
        assert!((a[5].n2_pressure - b[5].n2_pressure).abs() < 1e-9);
    }

    #[test]
    fn stable_at_one_second() {
        let mut compartments = init_compartments(&GasMix::air());
        let air = GasMix::air();
        compartments[0].update_changing_depth(&air, 10.0, 12.0, 1.0 / 60.0);
        assert!(compartments[0].n2_pressure.is_finite());
    }

    #[test]
    fn combined_ab_falls_back_to_n2_when_no_inert() {
        let mut compartments = init_compartments(&GasMix::oxygen());
        compartments[0].n2_pressure = 0.0;
        compartments[0].he_pressure = 0.0;
        let (a, b) = compartments[0].combined_ab();
        assert_eq!(a, compartments[0].a_n2);
        assert_eq!(b, compartments[0].b_n2);
    }

    #[test]
    fn combined_ab_blends_by_pressure_fraction() {
        let mut compartments = init_compartments(&GasMix::air());
        compartments[0].n2_pressure = 1.0;
        compartments[0].he_pressure = 1.0;
        let (a, b) = compartments[0].combined_ab();
        let expected_a = (compartments[0].a_n2 + compartments[0].a_he) / 2.0;
        let expected_b = (compartments[0].b_n2 + compartments[0].b_he) / 2.0;
        assert!((a - expected_a).abs() < 1e-12);
        assert!((b - expected_b).abs() < 1e-12);
    }
}
