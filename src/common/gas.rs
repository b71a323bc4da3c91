//! Gas mix arithmetic: partial-pressure compounding, MOD, END. `GasMix`
//! carries explicit `o`/`n`/`he` fractions plus an optional display name.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::depth::{depth_to_pressure, DepthType, Pressure, P_SURFACE, P_WATER_VAPOR};
use super::errors::EngineError;
use super::warning::Warning;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MIX_SUM_TOLERANCE: f64 = 1e-3;

/// PPO₂ working-gas and deco-gas ceilings, in bar.
pub const PPO2_WORKING_LIMIT: Pressure = 1.4;
pub const PPO2_DECO_LIMIT: Pressure = 1.6;
/// Hypoxic floor, in bar.
pub const PPO2_HYPOXIC_FLOOR: Pressure = 0.16;
/// Equivalent-narcotic-depth warning threshold, in meters.
pub const END_WARNING_THRESHOLD_M: DepthType = 30.0;

/// An immutable breathing gas: oxygen/nitrogen/helium fractions summing to 1,
/// plus an optional display name (e.g. "EAN50", "Trimix 21/35").
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GasMix {
    pub o: f64,
    pub n: f64,
    pub he: f64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartialPressures {
    pub o2: Pressure,
    pub n2: Pressure,
    pub he: Pressure,
}

impl GasMix {
    pub fn new(o: f64, n: f64, he: f64) -> Self {
        Self {
            o,
            n,
            he,
            name: None,
        }
    }

    pub fn named(o: f64, n: f64, he: f64, name: &str) -> Self {
        Self {
            o,
            n,
            he,
            name: Some(String::from(name)),
        }
    }

    pub fn air() -> Self {
        Self::named(0.21, 0.79, 0.0, "Air")
    }

    pub fn nitrox(o: f64) -> Self {
        Self::named(o, 1.0 - o, 0.0, &format!("EAN{:.0}", o * 100.0))
    }

    pub fn trimix(o: f64, he: f64) -> Self {
        Self::named(
            o,
            1.0 - o - he,
            he,
            &format!("Trimix {:.0}/{:.0}", o * 100.0, he * 100.0),
        )
    }

    pub fn oxygen() -> Self {
        Self::named(1.0, 0.0, 0.0, "O2")
    }

    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!(
                "{:.0}/{:.0}/{:.0}",
                self.o * 100.0,
                self.n * 100.0,
                self.he * 100.0
            )
        })
    }
}

/// Ambient (non-inspired) partial pressures at `depth_m` for this gas.
pub fn ambient_partial_pressures(gas: &GasMix, depth_m: DepthType) -> PartialPressures {
    let p_amb = depth_to_pressure(depth_m);
    PartialPressures {
        o2: p_amb * gas.o,
        n2: p_amb * gas.n,
        he: p_amb * gas.he,
    }
}

/// Inspired (water-vapor corrected) partial pressures at `depth_m`.
pub fn inspired_partial_pressures(gas: &GasMix, depth_m: DepthType) -> PartialPressures {
    let p_inspired_total = depth_to_pressure(depth_m) - P_WATER_VAPOR;
    PartialPressures {
        o2: p_inspired_total * gas.o,
        n2: p_inspired_total * gas.n,
        he: p_inspired_total * gas.he,
    }
}

/// `PPO2(d, g) = depth_to_pressure(d) * g.o` — ambient, not inspired.
pub fn ppo2(gas: &GasMix, depth_m: DepthType) -> Pressure {
    depth_to_pressure(depth_m) * gas.o
}

/// Inspired PPN2, water-vapor corrected.
pub fn ppn2(gas: &GasMix, depth_m: DepthType) -> Pressure {
    (depth_to_pressure(depth_m) - P_WATER_VAPOR) * gas.n
}

/// Equivalent Narcotic Depth. Helium is treated as non-narcotic.
pub fn end(gas: &GasMix, depth_m: DepthType) -> DepthType {
    let value = (depth_m + 10.0) * (gas.n + gas.o) - 10.0;
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Maximum Operating Depth for a gas at a given PPO2 ceiling.
pub fn mod_depth(gas: &GasMix, max_ppo2: Pressure) -> DepthType {
    if gas.o <= 0.0 {
        return DepthType::INFINITY;
    }
    (max_ppo2 / gas.o - P_SURFACE) / super::depth::K_BAR_PER_METER
}

/// Hypoxic floor: shallowest depth at which PPO2 clears 0.16 bar.
pub fn min_depth(gas: &GasMix) -> DepthType {
    let raw = (PPO2_HYPOXIC_FLOOR / gas.o - P_SURFACE) / super::depth::K_BAR_PER_METER;
    if raw < 0.0 {
        0.0
    } else {
        raw
    }
}

pub struct GasValidation {
    pub safe: bool,
    pub warnings: Vec<Warning>,
}

/// Raises danger-level warnings for PPO2 outside safe bounds, warning-level
/// for excessive narcosis or depth approaching MOD. Never returns an error:
/// soft safety problems are always reported in-band.
pub fn validate_gas_at_depth(gas: &GasMix, depth_m: DepthType, in_deco: bool) -> GasValidation {
    let mut warnings = Vec::new();
    let mut safe = true;

    let ppo2_limit = if in_deco {
        PPO2_DECO_LIMIT
    } else {
        PPO2_WORKING_LIMIT
    };
    let current_ppo2 = ppo2(gas, depth_m);

    if current_ppo2 > ppo2_limit {
        safe = false;
        warnings.push(Warning::danger(
            "oxygen toxicity risk",
            &format!(
                "PPO2 {current_ppo2:.2} bar exceeds the {ppo2_limit:.2} bar limit at {depth_m:.1}m on {}",
                gas.display_name()
            ),
        ));
    }
    if current_ppo2 < PPO2_HYPOXIC_FLOOR {
        safe = false;
        warnings.push(Warning::danger(
            "hypoxic gas",
            &format!(
                "PPO2 {current_ppo2:.2} bar is below the hypoxic floor of {PPO2_HYPOXIC_FLOOR:.2} bar at {depth_m:.1}m"
            ),
        ));
    }

    let current_end = end(gas, depth_m);
    if current_end > END_WARNING_THRESHOLD_M {
        warnings.push(Warning::warning(
            "excessive narcotic loading",
            &format!("END {current_end:.1}m exceeds the {END_WARNING_THRESHOLD_M:.0}m threshold"),
        ));
    }

    let mod_limit = mod_depth(gas, ppo2_limit);
    if depth_m > 0.9 * mod_limit {
        warnings.push(Warning::warning(
            "approaching MOD",
            &format!("{depth_m:.1}m exceeds 90% of {}'s MOD ({mod_limit:.1}m)", gas.display_name()),
        ));
    }

    GasValidation { safe, warnings }
}

/// `InvalidGasMix` when fractions don't normalize within 1e-3.
pub fn validate_gas_mix(gas: &GasMix) -> Result<(), EngineError> {
    let total = gas.o + gas.n + gas.he;
    if (total - 1.0).abs() > MIX_SUM_TOLERANCE {
        return Err(EngineError::InvalidGasMix(format!(
            "{} fractions sum to {total:.4}, expected 1.0 +/- {MIX_SUM_TOLERANCE}",
            gas.display_name()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_ppo2_ppn2() {
        let air = GasMix::air();
        assert!((ppo2(&air, 0.0) - 0.2128).abs() < 1e-3);
        assert!(ppn2(&air, 0.0) > 0.0);
    }

    #[test]
    fn mod_and_min_depth() {
        let ean32 = GasMix::nitrox(0.32);
        assert!(mod_depth(&ean32, 1.4) > 30.0);
        let trimix = GasMix::trimix(0.10, 0.50);
        assert!(min_depth(&trimix) > 0.0);
    }

    #[test]
    fn end_ignores_helium() {
        let air = GasMix::air();
        assert!((end(&air, 30.0) - 30.0).abs() < 1e-6);
        let trimix = GasMix::trimix(0.21, 0.35);
        assert!(end(&trimix, 60.0) < 60.0);
    }

    #[test]
    fn validate_mix_sum() {
        assert!(validate_gas_mix(&GasMix::air()).is_ok());
        assert!(validate_gas_mix(&GasMix::new(0.5, 0.3, 0.3)).is_err());
    }

    #[test]
    fn validate_gas_at_depth_flags_toxic_ppo2() {
        let ean36 = GasMix::nitrox(0.36);
        let result = validate_gas_at_depth(&ean36, 45.0, false);
        assert!(!result.safe);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.message.contains("oxygen toxicity")));
    }

    #[test]
    fn validate_gas_at_depth_flags_hypoxic() {
        let hypoxic = GasMix::new(0.08, 0.92, 0.0);
        let result = validate_gas_at_depth(&hypoxic, 0.0, false);
        assert!(!result.safe);
    }
}
