//! `DiveSegment`: used both as bottom-leg input and as a
//! phase-tagged output entry in the returned profile.

use super::depth::DepthType;
use super::gas::GasMix;
use super::time::Time;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SegmentTag {
    Descent,
    Bottom,
    Ascent,
    Deco,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiveSegment {
    pub depth_m: DepthType,
    pub duration: Time,
    pub gas: GasMix,
    pub tag: SegmentTag,
}

impl DiveSegment {
    pub fn new(depth_m: DepthType, duration: Time, gas: GasMix, tag: SegmentTag) -> Self {
        Self {
            depth_m,
            duration,
            gas,
            tag,
        }
    }
}
