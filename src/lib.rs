#![cfg_attr(feature = "no-std", no_std)]
//! A multi-model dive decompression planning engine.
//!
//! Given a descent/bottom profile and a gas inventory, computes the ascent
//! schedule (ordered decompression stops, gas switches, runtime, warnings)
//! across three algorithm families: Bühlmann ZHL-16C with gradient factors,
//! a simplified VPM-B variant, and a table-driven US Navy approximation.
//! Also exposes analysis queries — tissue saturation/ceiling at an
//! arbitrary depth, no-decompression limits, surface-interval off-gassing,
//! and pressure-group classification for repetitive-dive planning.
//!
//! The engine is computation-only: no I/O, no logging, no persisted state.
//! Every call constructs a fresh tissue-compartment vector, mutates it
//! monotonically along the profile timeline, and returns a read-only
//! [`DiveProfile`]. Parameters and profiles are immutable value types.

extern crate alloc;

mod common;
mod comparison;
mod gas_selector;
mod gf;
mod planner;
mod repetitive;
mod stop_analysis;
mod tissue;

pub use common::{
    depth_to_pressure, end, min_depth, mod_depth, ppn2, ppo2, pressure_to_depth,
    validate_gas_at_depth, validate_gas_mix, ConfigValidationErr, Depth, DepthType, DiveSegment,
    EngineError, GasInventory, GasMix, GasValidation, PartialPressures, Pressure, SegmentTag, Time,
    Unit, Units, Warning, WarningLevel, END_WARNING_THRESHOLD_M, K_BAR_PER_METER, P_SURFACE,
    P_WATER_VAPOR, PPO2_DECO_LIMIT, PPO2_HYPOXIC_FLOOR, PPO2_WORKING_LIMIT,
};

pub use tissue::{ambient_pressure, init_compartments, TissueCompartment, COMPARTMENT_COUNT};

pub use gf::{
    ceiling, controlling_tissue, current_gf, is_ascent_safe, m_value, supersaturation,
    tolerated_ambient_pressure,
};

pub use gas_selector::{is_gas_switch_worthwhile, select_best_gas, switch_depth, MIN_DECO_GAS_DEPTH_M};

pub use planner::{
    compute_ndl, first_stop_depth_from_ceiling, plan_multi_level, plan_navy, plan_single_level,
    plan_vpmb, BottomLeg, DecompressionStop, DiveProfile, GasSwitch, GasSwitchReason,
    MultiLevelParameters, PlanRequest, Planner, PlannerKind, SingleLevelParameters,
};

pub use stop_analysis::{analyze_at_depth, CompartmentReport, CompartmentStatus, StopAnalysis};

pub use repetitive::{
    no_fly_time, pressure_group, residual_after_interval, validate_repetitive_dive,
    RepetitiveDiveLimits,
};

pub use comparison::{compare, Aspect, AspectDifference, ComparisonResult, ModelResult, SpreadClass};

// Re-export Vec and vec macro from alloc for convenience in no-std builds.
pub use alloc::vec;
pub use alloc::vec::Vec;
