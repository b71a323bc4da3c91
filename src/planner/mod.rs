//! Planner dispatch: a tagged variant across the three algorithm families,
//! no inheritance, so the comparison harness can run each one over identical
//! parameters.

mod buhlmann;
mod navy;
mod types;
mod vpmb;

use alloc::string::ToString;

use crate::common::EngineError;

pub use buhlmann::{compute_ndl, plan_multi_level, plan_single_level};
pub use navy::plan_navy;
pub use types::{
    first_stop_depth_from_ceiling, BottomLeg, DecompressionStop, DiveProfile, GasSwitch,
    GasSwitchReason, MultiLevelParameters, SingleLevelParameters,
};
pub use vpmb::plan_vpmb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannerKind {
    Buhlmann,
    VpmB,
    Navy,
}

/// Either shape of plan input a [`Planner`] can dispatch on.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanRequest {
    SingleLevel(SingleLevelParameters),
    MultiLevel(MultiLevelParameters),
}

/// A planner identified by [`PlannerKind`], dispatched uniformly over
/// [`PlanRequest`]. VPM-B and the Navy tables only plan single-level
/// profiles; a multi-level request to either returns `SegmentOutOfRange`.
pub struct Planner {
    pub kind: PlannerKind,
}

impl Planner {
    pub fn new(kind: PlannerKind) -> Self {
        Self { kind }
    }

    pub fn plan(&self, request: &PlanRequest) -> Result<DiveProfile, EngineError> {
        match (self.kind, request) {
            (PlannerKind::Buhlmann, PlanRequest::SingleLevel(p)) => Ok(plan_single_level(p)),
            (PlannerKind::Buhlmann, PlanRequest::MultiLevel(p)) => plan_multi_level(p),
            (PlannerKind::VpmB, PlanRequest::SingleLevel(p)) => Ok(plan_vpmb(p)),
            (PlannerKind::VpmB, PlanRequest::MultiLevel(_)) => Err(EngineError::SegmentOutOfRange(
                "VPM-B planner only supports single-level profiles".to_string(),
            )),
            (PlannerKind::Navy, PlanRequest::SingleLevel(p)) => plan_navy(p),
            (PlannerKind::Navy, PlanRequest::MultiLevel(_)) => Err(EngineError::SegmentOutOfRange(
                "Navy table planner only supports single-level profiles".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{GasMix, Time};

    #[test]
    fn dispatch_routes_by_kind() {
        let params = SingleLevelParameters::new(18.0, Time::from_minutes(30.0), GasMix::air(), 30, 85);
        let request = PlanRequest::SingleLevel(params);
        assert!(Planner::new(PlannerKind::Buhlmann).plan(&request).is_ok());
        assert!(Planner::new(PlannerKind::VpmB).plan(&request).is_ok());
        assert!(Planner::new(PlannerKind::Navy).plan(&request).is_ok());
    }

    #[test]
    fn multi_level_rejected_by_vpmb_and_navy() {
        let params = MultiLevelParameters::new(
            alloc::vec![BottomLeg { depth_m: 20.0, duration: Time::from_minutes(10.0) }],
            crate::common::GasInventory::bottom_only(GasMix::air()),
            30,
            85,
        );
        let request = PlanRequest::MultiLevel(params);
        assert!(Planner::new(PlannerKind::VpmB).plan(&request).is_err());
        assert!(Planner::new(PlannerKind::Navy).plan(&request).is_err());
    }
}
