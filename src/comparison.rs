//! Cross-model comparison harness: run the same parameters through several
//! [`PlannerKind`] variants and diff the results.
//!
//! Relies on the crate-wide pattern every planner already follows — value
//! types returned by value with no shared mutable state — which is what
//! makes running N planners over the same input safe with nothing more than
//! `Clone`.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{EngineError, WarningLevel};
use crate::planner::{DiveProfile, PlanRequest, Planner, PlannerKind, SingleLevelParameters};

/// Depth, in meters, above which a stop counts as "deep" for the
/// deep-stops/shallow-stops aspect. Non-normative: this crate picks the
/// conventional deep-stop boundary used elsewhere in the engine (see
/// [`crate::planner`]'s VPM-B deep-stop multiplier threshold).
pub const DEEP_STOP_THRESHOLD_M: f64 = 9.0;

const MAJOR_SPREAD_PCT: f64 = 20.0;
const MODERATE_SPREAD_PCT: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aspect {
    TotalTime,
    DecoTime,
    FirstStopDepth,
    StopCount,
    DeepStops,
    ShallowStops,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpreadClass {
    Minor,
    Moderate,
    Major,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AspectDifference {
    pub aspect: Aspect,
    pub min: f64,
    pub max: f64,
    pub spread_pct: f64,
    pub classification: SpreadClass,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelResult {
    pub kind: PlannerKind,
    pub profile: Option<DiveProfile>,
    pub error: Option<EngineError>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub results: Vec<ModelResult>,
    pub differences: Vec<AspectDifference>,
    pub recommendations: Vec<String>,
}

fn aspect_values(profile: &DiveProfile) -> [(Aspect, f64); 6] {
    let first_stop_depth = profile
        .stops
        .iter()
        .map(|s| s.depth_m)
        .fold(0.0_f64, f64::max);
    let deep_stops = profile
        .stops
        .iter()
        .filter(|s| s.depth_m >= DEEP_STOP_THRESHOLD_M)
        .count() as f64;
    let shallow_stops = profile
        .stops
        .iter()
        .filter(|s| s.depth_m < DEEP_STOP_THRESHOLD_M)
        .count() as f64;
    [
        (Aspect::TotalTime, profile.total_dive_time.as_minutes()),
        (Aspect::DecoTime, profile.total_decompression_time.as_minutes()),
        (Aspect::FirstStopDepth, first_stop_depth),
        (Aspect::StopCount, profile.stops.len() as f64),
        (Aspect::DeepStops, deep_stops),
        (Aspect::ShallowStops, shallow_stops),
    ]
}

fn classify(spread_pct: f64) -> SpreadClass {
    if spread_pct.abs() >= MAJOR_SPREAD_PCT {
        SpreadClass::Major
    } else if spread_pct.abs() >= MODERATE_SPREAD_PCT {
        SpreadClass::Moderate
    } else {
        SpreadClass::Minor
    }
}

fn model_name(kind: PlannerKind) -> &'static str {
    match kind {
        PlannerKind::Buhlmann => "Buhlmann ZHL-16C",
        PlannerKind::VpmB => "VPM-B",
        PlannerKind::Navy => "US Navy table",
    }
}

/// Run every `kind` in `models` against the same `params`, collect
/// per-model profiles (or their failure), diff six aspects
/// names, and produce simple conservatism-driven recommendations.
pub fn compare(params: &SingleLevelParameters, models: &[PlannerKind]) -> ComparisonResult {
    let request = PlanRequest::SingleLevel(params.clone());

    let results: Vec<ModelResult> = models
        .iter()
        .map(|&kind| match Planner::new(kind).plan(&request) {
            Ok(profile) => ModelResult { kind, profile: Some(profile), error: None },
            Err(err) => ModelResult { kind, profile: None, error: Some(err) },
        })
        .collect();

    let succeeded: Vec<(PlannerKind, &DiveProfile)> = results
        .iter()
        .filter_map(|r| r.profile.as_ref().map(|p| (r.kind, p)))
        .collect();

    let aspects = [
        Aspect::TotalTime,
        Aspect::DecoTime,
        Aspect::FirstStopDepth,
        Aspect::StopCount,
        Aspect::DeepStops,
        Aspect::ShallowStops,
    ];

    let mut differences = Vec::new();
    for aspect in aspects {
        let values: Vec<f64> = succeeded
            .iter()
            .map(|(_, p)| aspect_values(p).into_iter().find(|(a, _)| *a == aspect).unwrap().1)
            .collect();
        if values.len() < 2 {
            continue;
        }
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let spread_pct = if min.abs() > 1e-9 {
            ((max - min) / min) * 100.0
        } else if max.abs() > 1e-9 {
            100.0
        } else {
            0.0
        };
        differences.push(AspectDifference {
            aspect,
            min,
            max,
            spread_pct,
            classification: classify(spread_pct),
        });
    }

    let mut recommendations = Vec::new();
    for result in &results {
        if let Some(err) = &result.error {
            recommendations.push(alloc::format!(
                "{} could not plan this profile: {err}",
                model_name(result.kind)
            ));
        }
    }
    if let Some((kind, _)) = succeeded.iter().max_by(|(_, a), (_, b)| {
        a.total_decompression_time
            .as_minutes()
            .partial_cmp(&b.total_decompression_time.as_minutes())
            .unwrap_or(core::cmp::Ordering::Equal)
    }) {
        recommendations.push(alloc::format!(
            "{} produced the most conservative (longest) decompression schedule",
            model_name(*kind)
        ));
    }
    for (kind, profile) in &succeeded {
        let danger_count = profile
            .warnings
            .iter()
            .filter(|w| w.level == WarningLevel::Danger)
            .count();
        if danger_count > 0 {
            recommendations.push(alloc::format!(
                "{} raised {danger_count} danger-level warning(s) for this profile",
                model_name(*kind)
            ));
        }
    }
    for diff in &differences {
        if diff.classification == SpreadClass::Major {
            recommendations.push(alloc::format!(
                "models disagree sharply on {:?}: {:.1} to {:.1}",
                diff.aspect, diff.min, diff.max
            ));
        }
    }

    ComparisonResult { results, differences, recommendations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{GasMix, Time};

    #[test]
    fn compares_all_three_models_on_a_no_deco_dive() {
        let params = SingleLevelParameters::new(18.0, Time::from_minutes(40.0), GasMix::air(), 30, 85);
        let result = compare(&params, &[PlannerKind::Buhlmann, PlannerKind::VpmB, PlannerKind::Navy]);
        assert_eq!(result.results.len(), 3);
        assert!(result.results.iter().all(|r| r.profile.is_some()));
    }

    #[test]
    fn flags_major_spread_on_a_deep_dive() {
        let params = SingleLevelParameters::new(40.0, Time::from_minutes(25.0), GasMix::air(), 30, 85);
        let result = compare(&params, &[PlannerKind::Buhlmann, PlannerKind::VpmB]);
        assert!(result.differences.iter().any(|d| d.aspect == Aspect::FirstStopDepth));
    }

    #[test]
    fn non_air_gas_fails_navy_but_not_others() {
        let params = SingleLevelParameters::new(20.0, Time::from_minutes(20.0), GasMix::nitrox(0.32), 30, 85);
        let result = compare(&params, &[PlannerKind::Buhlmann, PlannerKind::Navy]);
        let navy_result = result.results.iter().find(|r| r.kind == PlannerKind::Navy).unwrap();
        assert!(navy_result.error.is_some());
        let buhlmann_result = result.results.iter().find(|r| r.kind == PlannerKind::Buhlmann).unwrap();
        assert!(buhlmann_result.profile.is_some());
    }

    #[test]
    fn single_model_produces_no_differences() {
        let params = SingleLevelParameters::new(18.0, Time::from_minutes(40.0), GasMix::air(), 30, 85);
        let result = compare(&params, &[PlannerKind::Buhlmann]);
        assert!(result.differences.is_empty());
    }
}
