//! Depth/pressure conversion and the `Depth` value type: an operator-
//! overloaded newtype plus a `Unit`/`Units` conversion trait, alongside free
//! functions (`depth_to_pressure`, `pressure_to_depth`) for callers who just
//! want the formula without constructing a value.

use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, Mul, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type DepthType = f64;
pub type Pressure = f64;

/// Atmospheric pressure at the surface, in bar.
pub const P_SURFACE: Pressure = 1.01325;
/// Pressure increase per meter of seawater, in bar/m.
pub const K_BAR_PER_METER: f64 = 0.09985;
/// Alveolar water-vapor pressure at body temperature, in bar (Buhlmann's value).
pub const P_WATER_VAPOR: Pressure = 0.0627;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Units {
    Metric,
    Imperial,
}

pub trait Unit<T = f64>: Sized {
    fn from_units(val: T, units: Units) -> Self;
    fn to_units(&self, units: Units) -> T;
    fn base_unit(&self) -> T;
}

/// `depth_to_pressure(d) = P_surface + d * k`
#[inline]
pub fn depth_to_pressure(depth_m: DepthType) -> Pressure {
    P_SURFACE + depth_m * K_BAR_PER_METER
}

/// Inverse of [`depth_to_pressure`].
#[inline]
pub fn pressure_to_depth(pressure: Pressure) -> DepthType {
    (pressure - P_SURFACE) / K_BAR_PER_METER
}

#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Depth {
    m: DepthType,
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r"{}m \ {}ft", self.as_meters(), self.as_feet())
    }
}

impl PartialEq for Depth {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
    }
}

impl PartialOrd for Depth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.m.partial_cmp(&other.m)
    }
}

impl Add for Depth {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { m: self.m + rhs.m }
    }
}

impl Sub for Depth {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self { m: self.m - rhs.m }
    }
}

impl Mul<f64> for Depth {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self { m: self.m * rhs }
    }
}

impl Div<f64> for Depth {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self { m: self.m / rhs }
    }
}

impl AddAssign for Depth {
    fn add_assign(&mut self, rhs: Self) {
        self.m += rhs.m;
    }
}

impl Unit for Depth {
    fn from_units(val: DepthType, units: Units) -> Self {
        match units {
            Units::Metric => Self::from_meters(val),
            Units::Imperial => Self::from_feet(val),
        }
    }
    fn to_units(&self, units: Units) -> DepthType {
        match units {
            Units::Metric => self.as_meters(),
            Units::Imperial => self.as_feet(),
        }
    }
    fn base_unit(&self) -> f64 {
        self.m
    }
}

impl Depth {
    pub fn zero() -> Self {
        Self { m: 0. }
    }

    pub fn from_meters(val: DepthType) -> Self {
        Self { m: val }
    }

    pub fn from_feet(val: DepthType) -> Self {
        Self {
            m: Self::ft_to_m(val),
        }
    }

    pub fn as_meters(&self) -> DepthType {
        self.m
    }

    pub fn as_feet(&self) -> DepthType {
        Self::m_to_ft(self.m)
    }

    pub fn to_pressure(&self) -> Pressure {
        depth_to_pressure(self.m)
    }

    pub fn max(self, other: Self) -> Self {
        if self.m >= other.m {
            self
        } else {
            other
        }
    }

    fn m_to_ft(m: DepthType) -> DepthType {
        m * 3.28084
    }

    fn ft_to_m(ft: DepthType) -> DepthType {
        ft * 0.3048
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_pressure_roundtrip() {
        for d in [0.0, 10.0, 18.0, 40.0, 100.0] {
            let p = depth_to_pressure(d);
            assert!((pressure_to_depth(p) - d).abs() < 1e-9);
        }
    }

    #[test]
    fn pressure_at_surface() {
        assert_eq!(depth_to_pressure(0.0), P_SURFACE);
    }

    #[test]
    fn m_to_ft() {
        let depth = Depth::from_meters(1.);
        assert_eq!(depth.as_feet(), 3.28084);
    }

    #[test]
    fn ft_to_m() {
        let depth = Depth::from_feet(100.);
        assert_eq!(depth.as_meters(), 30.48);
    }

    #[test]
    fn from_units_constructor() {
        let depth_m = Depth::from_units(1., Units::Metric);
        assert_eq!(depth_m.as_meters(), 1.);

        let depth_ft = Depth::from_units(1., Units::Imperial);
        assert_eq!(depth_ft.as_meters(), 0.3048);
    }
}
