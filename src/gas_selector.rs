//! Gas selection and switch heuristics: pick the richest gas whose MOD still
//! covers the current depth, as standalone pure functions so the comparison
//! harness and stop-discovery loop can share them.

use crate::common::math;
use crate::common::{
    min_depth, mod_depth, DepthType, GasInventory, GasMix, PPO2_DECO_LIMIT, PPO2_WORKING_LIMIT,
};

pub const MIN_DECO_GAS_DEPTH_M: DepthType = 6.0;
const MIN_O2_ENRICHMENT_FOR_SWITCH: f64 = 0.05;
const MIN_REMAINING_TIME_FOR_SWITCH_MIN: f64 = 2.0;

/// Depth at which `gas` becomes selectable as a deco gas: its MOD at
/// `max_ppo2`, floored at [`MIN_DECO_GAS_DEPTH_M`] the way divers
/// conventionally treat 100% O2 (MOD ~5.88 m) as usable from 6 m. Shared by
/// [`select_best_gas`] and [`is_gas_switch_worthwhile`] so the two agree on
/// when a gas is breathable.
pub fn deco_gas_ceiling(gas: &GasMix, max_ppo2: f64) -> DepthType {
    mod_depth(gas, max_ppo2).max(MIN_DECO_GAS_DEPTH_M)
}

/// Best breathable gas at `depth_m`: highest O2 among bottom gas and deco
/// gases whose operating window covers the depth; falls back to the bottom
/// gas when none qualify.
pub fn select_best_gas<'a>(
    depth_m: DepthType,
    inventory: &'a GasInventory,
    in_deco: bool,
) -> &'a GasMix {
    let max_ppo2 = if in_deco {
        PPO2_DECO_LIMIT
    } else {
        PPO2_WORKING_LIMIT
    };

    inventory
        .all_gases()
        .into_iter()
        .filter(|gas| {
            let floor = min_depth(gas);
            let ceiling = if in_deco {
                deco_gas_ceiling(gas, max_ppo2)
            } else {
                mod_depth(gas, max_ppo2)
            };
            depth_m >= floor && depth_m <= ceiling
        })
        .max_by(|a, b| a.o.partial_cmp(&b.o).unwrap_or(core::cmp::Ordering::Equal))
        .unwrap_or(&inventory.bottom_gas)
}

/// Whether switching from `current` to `candidate` at `depth_m` with
/// `remaining_time_min` left in the plan is worth the gas change. Uses the
/// same [`deco_gas_ceiling`] window `select_best_gas` picks `candidate` with,
/// so a gas select_best_gas already chose as best never gets refused here
/// (100% O2's ~5.88 m MOD floored to 6 m is the recurring case).
pub fn is_gas_switch_worthwhile(
    current: &GasMix,
    candidate: &GasMix,
    depth_m: DepthType,
    remaining_time_min: f64,
) -> bool {
    if candidate.o - current.o < MIN_O2_ENRICHMENT_FOR_SWITCH {
        return false;
    }
    if remaining_time_min < MIN_REMAINING_TIME_FOR_SWITCH_MIN {
        return false;
    }
    depth_m >= min_depth(candidate) && depth_m <= deco_gas_ceiling(candidate, PPO2_DECO_LIMIT)
}

/// `max(MIN_DECO_GAS_DEPTH, floor(MOD(to)) - 1)`
pub fn switch_depth(to: &GasMix, max_ppo2: f64) -> DepthType {
    let mod_m = mod_depth(to, max_ppo2);
    MIN_DECO_GAS_DEPTH_M.max(math::floor(mod_m) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn selects_richest_gas_within_window() {
        let inventory = GasInventory::new(
            GasMix::trimix(0.21, 0.35),
            vec![GasMix::nitrox(0.50), GasMix::oxygen()],
        );
        assert_eq!(select_best_gas(40.0, &inventory, false).o, 0.21);
        assert_eq!(select_best_gas(21.0, &inventory, true).o, 0.50);
        assert_eq!(select_best_gas(5.0, &inventory, true).o, 1.0);
    }

    #[test]
    fn falls_back_to_bottom_gas_when_nothing_qualifies() {
        let inventory = GasInventory::bottom_only(GasMix::air());
        assert_eq!(select_best_gas(60.0, &inventory, false).o, 0.21);
    }

    #[test]
    fn switch_worthwhile_requires_enrichment_and_time() {
        let air = GasMix::air();
        let ean50 = GasMix::nitrox(0.50);
        assert!(is_gas_switch_worthwhile(&air, &ean50, 21.0, 5.0));
        assert!(!is_gas_switch_worthwhile(&air, &air, 21.0, 5.0));
        assert!(!is_gas_switch_worthwhile(&air, &ean50, 21.0, 1.0));
    }

    #[test]
    fn switch_to_oxygen_at_its_floored_ceiling_is_worthwhile() {
        // 100% O2's true MOD at 1.6 bar is ~5.88m, floored to 6m; a switch
        // evaluated at exactly 6m must not be refused just because the raw
        // PPO2 there nudges past 1.6 bar.
        let ean50 = GasMix::nitrox(0.50);
        let oxygen = GasMix::oxygen();
        assert_eq!(select_best_gas(6.0, &GasInventory::new(ean50.clone(), vec![oxygen.clone()]), true).o, 1.0);
        assert!(is_gas_switch_worthwhile(&ean50, &oxygen, 6.0, 10.0));
    }

    #[test]
    fn switch_depth_respects_floor() {
        let oxygen = GasMix::oxygen();
        assert_eq!(switch_depth(&oxygen, 1.6), MIN_DECO_GAS_DEPTH_M);
        let ean50 = GasMix::nitrox(0.50);
        assert!(switch_depth(&ean50, 1.6) > MIN_DECO_GAS_DEPTH_M);
    }
}
