//! Error taxonomy and config validation error: hand-written `Display` impls,
//! no `thiserror`, `Result` everywhere instead of panics for anything a
//! caller can reasonably get wrong at the data layer.

use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hard structural failures the engine refuses to plan through. Soft safety
/// problems are surfaced in-band as [`crate::Warning`] records instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum EngineError {
    /// `GasMix` fractions do not normalize to 1 within tolerance.
    InvalidGasMix(String),
    /// A `DiveSegment`/profile entry has depth <= 0, duration <= 0, or there
    /// are more than five bottom segments.
    SegmentOutOfRange(String),
    /// Navy table planner: requested depth or gas falls outside the table.
    TableOutOfRange(String),
    /// No gas in the inventory is breathable at the requested depth.
    NoSafeGasAtDepth(String),
    /// Stop-discovery loop hit its iteration cap without converging.
    ScheduleConvergenceFailure(String),
    /// Repetitive planning: surface interval shorter than the configured minimum.
    SurfaceIntervalTooShort(String),
    /// Repetitive planning: dive count for the day exceeds the configured limit.
    TooManyDives(String),
    /// Repetitive planning: carried-over pressure group above the configured ceiling.
    PressureGroupTooHigh(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidGasMix(msg) => write!(f, "invalid gas mix: {msg}"),
            EngineError::SegmentOutOfRange(msg) => write!(f, "segment out of range: {msg}"),
            EngineError::TableOutOfRange(msg) => write!(f, "table out of range: {msg}"),
            EngineError::NoSafeGasAtDepth(msg) => write!(f, "no safe gas at depth: {msg}"),
            EngineError::ScheduleConvergenceFailure(msg) => {
                write!(f, "schedule did not converge: {msg}")
            }
            EngineError::SurfaceIntervalTooShort(msg) => {
                write!(f, "surface interval too short: {msg}")
            }
            EngineError::TooManyDives(msg) => write!(f, "too many dives: {msg}"),
            EngineError::PressureGroupTooHigh(msg) => {
                write!(f, "pressure group too high: {msg}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfigValidationErr {
    pub field: String,
    pub reason: String,
}

impl ConfigValidationErr {
    pub fn new(field: &str, reason: &str) -> Self {
        Self {
            field: String::from(field),
            reason: String::from(reason),
        }
    }
}

impl fmt::Display for ConfigValidationErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}
