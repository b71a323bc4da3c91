//! US Navy dive table planner: lookup over fixed depth/time tiers expressed
//! as literal `const` arrays (see [`crate::tissue::zhl_values`] for the same
//! pattern applied to the ZHL-16C coefficients).

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{DepthType, DiveSegment, EngineError, GasMix, SegmentTag, Time, Warning};

use super::types::{DecompressionStop, DiveProfile, SingleLevelParameters};

const SAFETY_STOP_DEPTH_M: DepthType = 5.0;
const SAFETY_STOP_DURATION_MIN: f64 = 3.0;
const MIN_TABLE_DEPTH_M: DepthType = 12.0;
const MAX_TABLE_DEPTH_M: DepthType = 42.0;
const AIR_O2_TOLERANCE: f64 = 0.01;

struct NavyRow {
    bottom_time_max_min: f64,
    stops: &'static [(DepthType, f64)],
    group: char,
}

struct NavyTier {
    depth_m: DepthType,
    rows: &'static [NavyRow],
}

const TABLE: &[NavyTier] = &[
    NavyTier {
        depth_m: 12.0,
        rows: &[
            NavyRow { bottom_time_max_min: 120.0, stops: &[], group: 'F' },
            NavyRow { bottom_time_max_min: 180.0, stops: &[], group: 'J' },
            NavyRow { bottom_time_max_min: 220.0, stops: &[(3.0, 5.0)], group: 'L' },
        ],
    },
    NavyTier {
        depth_m: 15.0,
        rows: &[
            NavyRow { bottom_time_max_min: 80.0, stops: &[], group: 'G' },
            NavyRow { bottom_time_max_min: 120.0, stops: &[(3.0, 5.0)], group: 'K' },
            NavyRow { bottom_time_max_min: 160.0, stops: &[(3.0, 10.0)], group: 'M' },
        ],
    },
    NavyTier {
        depth_m: 18.0,
        rows: &[
            NavyRow { bottom_time_max_min: 50.0, stops: &[], group: 'H' },
            NavyRow { bottom_time_max_min: 60.0, stops: &[(6.0, 5.0)], group: 'J' },
            NavyRow { bottom_time_max_min: 70.0, stops: &[(6.0, 2.0), (3.0, 10.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 100.0, stops: &[(6.0, 7.0), (3.0, 17.0)], group: 'N' },
        ],
    },
    NavyTier {
        depth_m: 21.0,
        rows: &[
            NavyRow { bottom_time_max_min: 35.0, stops: &[], group: 'G' },
            NavyRow { bottom_time_max_min: 45.0, stops: &[(3.0, 6.0)], group: 'J' },
            NavyRow { bottom_time_max_min: 60.0, stops: &[(6.0, 5.0), (3.0, 12.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 90.0, stops: &[(6.0, 12.0), (3.0, 21.0)], group: 'N' },
        ],
    },
    NavyTier {
        depth_m: 24.0,
        rows: &[
            NavyRow { bottom_time_max_min: 25.0, stops: &[], group: 'F' },
            NavyRow { bottom_time_max_min: 35.0, stops: &[(3.0, 7.0)], group: 'I' },
            NavyRow { bottom_time_max_min: 50.0, stops: &[(6.0, 8.0), (3.0, 15.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 80.0, stops: &[(9.0, 5.0), (6.0, 14.0), (3.0, 24.0)], group: 'N' },
        ],
    },
    NavyTier {
        depth_m: 27.0,
        rows: &[
            NavyRow { bottom_time_max_min: 20.0, stops: &[], group: 'F' },
            NavyRow { bottom_time_max_min: 30.0, stops: &[(3.0, 8.0)], group: 'I' },
            NavyRow { bottom_time_max_min: 40.0, stops: &[(6.0, 10.0), (3.0, 17.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 70.0, stops: &[(9.0, 7.0), (6.0, 17.0), (3.0, 27.0)], group: 'N' },
        ],
    },
    NavyTier {
        depth_m: 30.0,
        rows: &[
            NavyRow { bottom_time_max_min: 15.0, stops: &[], group: 'E' },
            NavyRow { bottom_time_max_min: 25.0, stops: &[(3.0, 8.0)], group: 'I' },
            NavyRow { bottom_time_max_min: 35.0, stops: &[(9.0, 4.0), (6.0, 10.0), (3.0, 19.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 60.0, stops: &[(9.0, 14.0), (6.0, 21.0), (3.0, 32.0)], group: 'N' },
        ],
    },
    NavyTier {
        depth_m: 33.0,
        rows: &[
            NavyRow { bottom_time_max_min: 10.0, stops: &[], group: 'D' },
            NavyRow { bottom_time_max_min: 20.0, stops: &[(3.0, 9.0)], group: 'I' },
            NavyRow { bottom_time_max_min: 30.0, stops: &[(9.0, 8.0), (6.0, 12.0), (3.0, 22.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 50.0, stops: &[(12.0, 5.0), (9.0, 15.0), (6.0, 24.0), (3.0, 36.0)], group: 'N' },
        ],
    },
    NavyTier {
        depth_m: 36.0,
        rows: &[
            NavyRow { bottom_time_max_min: 10.0, stops: &[], group: 'D' },
            NavyRow { bottom_time_max_min: 15.0, stops: &[(3.0, 10.0)], group: 'H' },
            NavyRow { bottom_time_max_min: 25.0, stops: &[(9.0, 9.0), (6.0, 14.0), (3.0, 25.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 40.0, stops: &[(12.0, 8.0), (9.0, 16.0), (6.0, 27.0), (3.0, 40.0)], group: 'N' },
        ],
    },
    NavyTier {
        depth_m: 39.0,
        rows: &[
            NavyRow { bottom_time_max_min: 8.0, stops: &[], group: 'C' },
            NavyRow { bottom_time_max_min: 15.0, stops: &[(6.0, 4.0), (3.0, 11.0)], group: 'I' },
            NavyRow { bottom_time_max_min: 25.0, stops: &[(12.0, 5.0), (9.0, 11.0), (6.0, 16.0), (3.0, 28.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 35.0, stops: &[(15.0, 6.0), (12.0, 10.0), (9.0, 18.0), (6.0, 30.0), (3.0, 44.0)], group: 'N' },
        ],
    },
    NavyTier {
        depth_m: 42.0,
        rows: &[
            NavyRow { bottom_time_max_min: 6.0, stops: &[], group: 'B' },
            NavyRow { bottom_time_max_min: 12.0, stops: &[(6.0, 5.0), (3.0, 13.0)], group: 'I' },
            NavyRow { bottom_time_max_min: 20.0, stops: &[(12.0, 6.0), (9.0, 12.0), (6.0, 19.0), (3.0, 32.0)], group: 'L' },
            NavyRow { bottom_time_max_min: 30.0, stops: &[(15.0, 8.0), (12.0, 12.0), (9.0, 20.0), (6.0, 33.0), (3.0, 48.0)], group: 'N' },
        ],
    },
];

fn nearest_tier(depth_m: DepthType) -> &'static NavyTier {
    TABLE
        .iter()
        .min_by(|a, b| {
            (a.depth_m - depth_m)
                .abs()
                .partial_cmp(&(b.depth_m - depth_m).abs())
                .unwrap_or(core::cmp::Ordering::Equal)
        })
        .expect("table is never empty")
}

fn select_row(tier: &'static NavyTier, bottom_time_min: f64) -> &'static NavyRow {
    tier.rows
        .iter()
        .find(|row| row.bottom_time_max_min >= bottom_time_min)
        .unwrap_or_else(|| tier.rows.last().expect("tier always has rows"))
}

/// Lookup-table planner over fixed US Navy style tiers. Fails
/// with `TableOutOfRange` outside the 12-42m / air-only envelope.
pub fn plan_navy(params: &SingleLevelParameters) -> Result<DiveProfile, EngineError> {
    if params.depth_m > MAX_TABLE_DEPTH_M {
        return Err(EngineError::TableOutOfRange(alloc::format!(
            "depth {:.1}m exceeds the table's {:.0}m ceiling",
            params.depth_m, MAX_TABLE_DEPTH_M
        )));
    }
    if (params.gas.o - 0.21).abs() > AIR_O2_TOLERANCE {
        return Err(EngineError::TableOutOfRange(alloc::format!(
            "gas {} is not air (within 1% O2 of 0.21)",
            params.gas.display_name()
        )));
    }

    let depth_m = params.depth_m.max(MIN_TABLE_DEPTH_M);
    let tier = nearest_tier(depth_m);
    let row = select_row(tier, params.bottom_time.as_minutes());

    let mut warnings = vec![Warning::info(
        "US Navy table lookup",
        "schedule rounded to the nearest depth tier and the first bottom-time row that covers the request",
    )];
    if (tier.depth_m - params.depth_m).abs() > 0.01 {
        warnings.push(Warning::info(
            "depth rounded to table tier",
            "requested depth was rounded to the nearest tabulated tier",
        ));
    }

    let mut stops: Vec<DecompressionStop> = Vec::new();
    let mut elapsed = Time::zero();
    let mut total_deco_time = Time::zero();
    for &(stop_depth, stop_duration) in row.stops {
        let duration = Time::from_minutes(stop_duration);
        elapsed += duration;
        total_deco_time += duration;
        stops.push(DecompressionStop {
            depth_m: stop_depth,
            duration,
            runtime: elapsed,
            gas: params.gas.clone(),
            gas_switch: None,
        });
    }

    let has_shallow_stop = stops
        .iter()
        .any(|s| (s.depth_m - 3.0).abs() < 1e-6 || (s.depth_m - SAFETY_STOP_DEPTH_M).abs() < 1e-6);
    if params.depth_m >= MIN_TABLE_DEPTH_M && !has_shallow_stop {
        let duration = Time::from_minutes(SAFETY_STOP_DURATION_MIN);
        elapsed += duration;
        total_deco_time += duration;
        stops.push(DecompressionStop {
            depth_m: SAFETY_STOP_DEPTH_M,
            duration,
            runtime: elapsed,
            gas: params.gas.clone(),
            gas_switch: None,
        });
    }

    let segments = vec![
        DiveSegment::new(params.depth_m, params.bottom_time, params.gas.clone(), SegmentTag::Bottom),
        DiveSegment::new(0.0, elapsed, params.gas.clone(), SegmentTag::Deco),
    ];

    Ok(DiveProfile {
        stops,
        gas_switches: Vec::new(),
        segments,
        total_decompression_time: total_deco_time,
        total_dive_time: params.bottom_time + elapsed,
        ndl: Time::from_minutes(row.bottom_time_max_min),
        final_tissues: Vec::new(),
        warnings,
        max_depth_m: params.depth_m,
        average_depth_m: params.depth_m,
    })
}

/// Repetitive group letter the table entry carries for the requested profile.
pub fn repetitive_group_for(params: &SingleLevelParameters) -> Result<char, EngineError> {
    if params.depth_m > MAX_TABLE_DEPTH_M {
        return Err(EngineError::TableOutOfRange(alloc::format!(
            "depth {:.1}m exceeds the table's {:.0}m ceiling",
            params.depth_m, MAX_TABLE_DEPTH_M
        )));
    }
    let depth_m = params.depth_m.max(MIN_TABLE_DEPTH_M);
    let tier = nearest_tier(depth_m);
    let row = select_row(tier, params.bottom_time.as_minutes());
    Ok(row.group)
}
