//! Float transcendentals for std/no-std compatibility.
//!
//! Every planner needs `exp`/`ln` for the Schreiner/Haldane tissue update and
//! `ceil`/`floor` for stop-depth rounding. `std` builds use `f64` inherent
//! methods; `no-std` builds route through `libm` so the engine stays usable
//! from embedded callers.

#[cfg(feature = "no-std")]
use libm;

#[inline]
pub fn abs(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.abs()
    }
    #[cfg(feature = "no-std")]
    {
        libm::fabs(val)
    }
}

#[inline]
pub fn ceil(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.ceil()
    }
    #[cfg(feature = "no-std")]
    {
        libm::ceil(val)
    }
}

#[inline]
pub fn floor(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.floor()
    }
    #[cfg(feature = "no-std")]
    {
        libm::floor(val)
    }
}

#[inline]
pub fn powf(base: f64, exp: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        base.powf(exp)
    }
    #[cfg(feature = "no-std")]
    {
        libm::pow(base, exp)
    }
}

#[inline]
pub fn exp(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.exp()
    }
    #[cfg(feature = "no-std")]
    {
        libm::exp(val)
    }
}

#[inline]
pub fn ln(val: f64) -> f64 {
    #[cfg(not(feature = "no-std"))]
    {
        val.ln()
    }
    #[cfg(feature = "no-std")]
    {
        libm::log(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_ln_roundtrip() {
        assert!((exp(ln(4.2)) - 4.2).abs() < 1e-9);
    }

    #[test]
    fn ceil_floor() {
        assert_eq!(ceil(2.001), 3.0);
        assert_eq!(floor(2.999), 2.0);
    }
}
