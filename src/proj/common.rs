//! Common helpers for projection math (conformal latitude, isometric latitude,
//! inverse latitude iteration, longitude normalization).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{ProjError, Result};

/// Tolerance shared by pole snapping, degenerate-parameter checks and the
/// `phi2` convergence test.
pub const EPS10: f64 = 1.0e-10;

/// Sentinel written in place of a coordinate that could not be projected.
pub const HUGE_VAL: f64 = f64::INFINITY;

/// Arc-seconds to radians.
pub const SEC_TO_RAD: f64 = 4.848_136_811_095_359_935_899_141_023_57e-6;

/// Maximum number of refinements performed by [`phi2`].
const PHI2_MAX_ITER: usize = 15;

/// Radius of the parallel divided by `a`: `cosφ / sqrt(1 - e²·sin²φ)`.
#[inline]
pub fn msfn(sinphi: f64, cosphi: f64, es: f64) -> f64 {
    cosphi / (1.0 - es * sinphi * sinphi).sqrt()
}

/// Isometric latitude function `t(φ) = tan(π/4 - φ/2) / ((1 - e·sinφ)/(1 + e·sinφ))^(e/2)`.
///
/// `-ln(t)` is the isometric latitude; for positive latitudes `t < 1`.
#[inline]
pub fn tsfn(phi: f64, sinphi: f64, e: f64) -> f64 {
    let esinphi = e * sinphi;
    (0.5 * (FRAC_PI_2 - phi)).tan() / ((1.0 - esinphi) / (1.0 + esinphi)).powf(0.5 * e)
}

/// Recover latitude from `ts` (the value returned by [`tsfn`]).
///
/// Fixed-point iteration seeded with the spherical solution. Fails with
/// [`ProjError::NonConvergence`] if the step has not dropped below
/// [`EPS10`] within the iteration budget.
pub fn phi2(e: f64, ts: f64) -> Result<f64> {
    let half_e = 0.5 * e;
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..PHI2_MAX_ITER {
        let con = e * phi.sin();
        let dphi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(half_e)).atan() - phi;
        phi += dphi;
        if dphi.abs() < EPS10 {
            return Ok(phi);
        }
    }
    Err(ProjError::NonConvergence(format!(
        "latitude from ts={ts} after {PHI2_MAX_ITER} iterations"
    )))
}

/// Reduce a longitude to (-π, π].
///
/// Values already in range are returned untouched, so the function is
/// idempotent.
#[inline]
pub fn adjlon(lon: f64) -> f64 {
    if -PI < lon && lon <= PI {
        return lon;
    }
    let reduced = PI - (PI - lon).rem_euclid(TAU);
    // rem_euclid may round up to TAU
    if reduced <= -PI {
        reduced + TAU
    } else {
        reduced
    }
}
