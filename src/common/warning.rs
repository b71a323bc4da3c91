//! In-band safety reporting. Planners never abort on soft safety problems —
//! they push a `Warning` and keep producing a best-effort schedule, returning
//! structured data instead of logging anywhere.

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WarningLevel {
    Info,
    Warning,
    Danger,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Warning {
    pub level: WarningLevel,
    pub message: String,
    pub details: String,
}

impl Warning {
    pub fn new(level: WarningLevel, message: &str, details: &str) -> Self {
        Self {
            level,
            message: String::from(message),
            details: String::from(details),
        }
    }

    pub fn info(message: &str, details: &str) -> Self {
        Self::new(WarningLevel::Info, message, details)
    }

    pub fn warning(message: &str, details: &str) -> Self {
        Self::new(WarningLevel::Warning, message, details)
    }

    pub fn danger(message: &str, details: &str) -> Self {
        Self::new(WarningLevel::Danger, message, details)
    }
}
