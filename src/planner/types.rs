//! Shared planner input/output value types.

use alloc::vec::Vec;

use crate::common::{Depth, DepthType, DiveSegment, GasInventory, GasMix, Time, Units, Warning};
use crate::tissue::TissueCompartment;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Single-level dive: one depth, one bottom time, one gas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SingleLevelParameters {
    pub depth_m: DepthType,
    pub bottom_time: Time,
    pub gas: GasMix,
    pub gf_low: u8,
    pub gf_high: u8,
    pub units: Units,
}

impl SingleLevelParameters {
    pub fn new(depth_m: DepthType, bottom_time: Time, gas: GasMix, gf_low: u8, gf_high: u8) -> Self {
        Self {
            depth_m,
            bottom_time,
            gas,
            gf_low,
            gf_high,
            units: Units::Metric,
        }
    }
}

/// One bottom leg of a multi-level profile (1..=5 legs total).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BottomLeg {
    pub depth_m: DepthType,
    pub duration: Time,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiLevelParameters {
    pub segments: Vec<BottomLeg>,
    pub gas_inventory: GasInventory,
    pub gf_low: u8,
    pub gf_high: u8,
    pub descent_rate_m_per_min: f64,
    pub ascent_rate_m_per_min: f64,
    pub units: Units,
}

impl MultiLevelParameters {
    pub fn new(
        segments: Vec<BottomLeg>,
        gas_inventory: GasInventory,
        gf_low: u8,
        gf_high: u8,
    ) -> Self {
        Self {
            segments,
            gas_inventory,
            gf_low,
            gf_high,
            descent_rate_m_per_min: 20.0,
            ascent_rate_m_per_min: 10.0,
            units: Units::Metric,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GasSwitchReason {
    Optimal,
    ModLimit,
    Deco,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GasSwitch {
    pub depth_m: DepthType,
    pub from_gas: GasMix,
    pub to_gas: GasMix,
    pub reason: GasSwitchReason,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecompressionStop {
    pub depth_m: DepthType,
    pub duration: Time,
    pub runtime: Time,
    pub gas: GasMix,
    pub gas_switch: Option<GasSwitchReason>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiveProfile {
    pub stops: Vec<DecompressionStop>,
    pub gas_switches: Vec<GasSwitch>,
    pub segments: Vec<DiveSegment>,
    pub total_decompression_time: Time,
    pub total_dive_time: Time,
    pub ndl: Time,
    pub final_tissues: Vec<TissueCompartment>,
    pub warnings: Vec<Warning>,
    pub max_depth_m: DepthType,
    pub average_depth_m: DepthType,
}

impl DiveProfile {
    pub fn is_no_deco(&self) -> bool {
        self.stops.is_empty()
            || (self.stops.len() == 1 && (self.stops[0].depth_m - 5.0).abs() < 1e-6)
    }
}

/// Shallowest depth, rounded to the next multiple of 3m, the stop-discovery
/// loop must clear before surfacing. Zero means no mandatory decompression.
pub fn first_stop_depth_from_ceiling(ceiling: Depth) -> Depth {
    let rounded = crate::common::math::ceil(ceiling.as_meters() / 3.0) * 3.0;
    if rounded <= 0.0 {
        Depth::zero()
    } else {
        Depth::from_meters(rounded)
    }
}
