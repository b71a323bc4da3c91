mod depth;
mod errors;
mod gas;
mod gas_inventory;
mod math_utils;
mod segment;
mod time;
mod warning;

pub(crate) use math_utils as math;

pub use depth::{
    depth_to_pressure, pressure_to_depth, Depth, DepthType, Pressure, Unit, Units, K_BAR_PER_METER,
    P_SURFACE, P_WATER_VAPOR,
};
pub use errors::{ConfigValidationErr, EngineError};
pub use gas::{
    ambient_partial_pressures, end, inspired_partial_pressures, min_depth, mod_depth, ppn2, ppo2,
    validate_gas_at_depth, validate_gas_mix, GasMix, GasValidation, PartialPressures,
    END_WARNING_THRESHOLD_M, PPO2_DECO_LIMIT, PPO2_HYPOXIC_FLOOR, PPO2_WORKING_LIMIT,
};
pub use gas_inventory::GasInventory;
pub use segment::{DiveSegment, SegmentTag};
pub use time::Time;
pub use warning::{Warning, WarningLevel};
