//! `Time` value type. Stores minutes internally since every duration in the
//! data model is minute-denominated.

use core::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, Mul, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    min: f64,
}

impl Add for Time {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min + rhs.min,
        }
    }
}

impl Sub for Time {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            min: self.min - rhs.min,
        }
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Self) {
        self.min += rhs.min;
    }
}

impl Mul<f64> for Time {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            min: self.min * rhs,
        }
    }
}

impl Div<f64> for Time {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            min: self.min / rhs,
        }
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.min.partial_cmp(&other.min)
    }
}

impl Time {
    pub fn zero() -> Self {
        Self { min: 0. }
    }

    pub fn from_minutes(val: f64) -> Self {
        Self { min: val }
    }

    pub fn from_seconds(val: f64) -> Self {
        Self { min: val / 60. }
    }

    pub fn as_minutes(&self) -> f64 {
        self.min
    }

    pub fn as_seconds(&self) -> f64 {
        self.min * 60.
    }
}
