//! `GasInventory`: a single bottom gas plus an ordered deco-gas list,
//! wrapped in a validated owning type so the gas selector and planners can
//! share one invariant-checked source of truth.

use alloc::format;
use alloc::vec::Vec;

use super::depth::DepthType;
use super::errors::EngineError;
use super::gas::{mod_depth, validate_gas_mix, GasMix, PPO2_WORKING_LIMIT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GasInventory {
    pub bottom_gas: GasMix,
    pub deco_gases: Vec<GasMix>,
}

impl GasInventory {
    pub fn new(bottom_gas: GasMix, deco_gases: Vec<GasMix>) -> Self {
        Self {
            bottom_gas,
            deco_gases,
        }
    }

    pub fn bottom_only(bottom_gas: GasMix) -> Self {
        Self::new(bottom_gas, Vec::new())
    }

    /// All gases, bottom first, in breathing order.
    pub fn all_gases(&self) -> Vec<&GasMix> {
        let mut gases = alloc::vec![&self.bottom_gas];
        gases.extend(self.deco_gases.iter());
        gases
    }

    /// `max_depth_m` is the deepest point of the planned profile: the bottom
    /// gas's MOD must cover it. Every deco gas must be strictly more
    /// oxygen-rich than the bottom gas, no two gases may be duplicates, and
    /// every gas's fractions must normalize to 1 within tolerance.
    pub fn validate(&self, max_depth_m: DepthType) -> Result<(), EngineError> {
        validate_gas_mix(&self.bottom_gas)?;
        for deco_gas in &self.deco_gases {
            validate_gas_mix(deco_gas)?;
        }

        let bottom_mod = mod_depth(&self.bottom_gas, PPO2_WORKING_LIMIT);
        if max_depth_m > bottom_mod {
            return Err(EngineError::NoSafeGasAtDepth(format!(
                "bottom gas {} has MOD {bottom_mod:.1}m, profile reaches {max_depth_m:.1}m",
                self.bottom_gas.display_name()
            )));
        }

        for deco_gas in &self.deco_gases {
            if deco_gas.o <= self.bottom_gas.o {
                return Err(EngineError::NoSafeGasAtDepth(format!(
                    "deco gas {} does not have strictly higher O2 than bottom gas {}",
                    deco_gas.display_name(),
                    self.bottom_gas.display_name()
                )));
            }
        }

        let all = self.all_gases();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                if (a.o - b.o).abs() < 1e-9
                    && (a.n - b.n).abs() < 1e-9
                    && (a.he - b.he).abs() < 1e-9
                {
                    return Err(EngineError::NoSafeGasAtDepth(format!(
                        "duplicate gas in inventory: {}",
                        a.display_name()
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_inventory() {
        let inv = GasInventory::new(
            GasMix::trimix(0.21, 0.35),
            alloc::vec![GasMix::nitrox(0.50), GasMix::oxygen()],
        );
        assert!(inv.validate(40.0).is_ok());
    }

    #[test]
    fn rejects_malformed_bottom_gas_mix() {
        let inv = GasInventory::bottom_only(GasMix::new(0.5, 0.3, 0.3));
        assert!(matches!(inv.validate(20.0), Err(EngineError::InvalidGasMix(_))));
    }

    #[test]
    fn rejects_deco_gas_not_richer() {
        let inv = GasInventory::new(GasMix::air(), alloc::vec![GasMix::nitrox(0.18)]);
        assert!(inv.validate(20.0).is_err());
    }

    #[test]
    fn rejects_insufficient_bottom_mod() {
        let inv = GasInventory::bottom_only(GasMix::nitrox(0.36));
        assert!(inv.validate(45.0).is_err());
    }

    #[test]
    fn rejects_duplicates() {
        let inv = GasInventory::new(GasMix::air(), alloc::vec![GasMix::air()]);
        assert!(inv.validate(10.0).is_err());
    }
}
