//! Resolves a parameter set into the configuration every projection reads.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ProjError, Result};
use crate::proj::catalog;
use crate::proj::datum::Datum;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::params::{parse_dms, ParamSet};

/// Resolved geodetic configuration of a projection.
///
/// Angles are radians. `x0`/`y0` are metres and are applied before the
/// conversion to the output unit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Projection code, e.g. `merc`
    pub code: String,
    pub ellipsoid: Ellipsoid,
    pub datum: Datum,
    /// Central meridian
    pub lam0: f64,
    /// Latitude of origin
    pub phi0: f64,
    /// Scale factor, always > 0
    pub k0: f64,
    /// False easting
    pub x0: f64,
    /// False northing
    pub y0: f64,
    pub to_meter: f64,
    pub fr_meter: f64,
    pub vto_meter: f64,
    pub vfr_meter: f64,
    /// Axis order, three characters (default `enu`); stored, not applied
    pub axis: String,
    /// Input latitudes are geocentric
    pub geoc: bool,
    /// Skip longitude normalization
    pub over: bool,
    /// Center of the longitude range returned by inverse projection
    pub long_wrap_center: Option<f64>,
    /// Prime meridian offset from Greenwich
    pub from_greenwich: f64,
}

impl Config {
    /// Resolves everything but the projection-specific constants.
    ///
    /// Catalog entries (datum, ellipsoid, units, prime meridian) only
    /// supply values the parameters leave unset; `params` itself is never
    /// modified.
    ///
    /// # Errors
    ///
    /// - [`ProjError::UnsupportedProjection`] when `proj` is missing.
    /// - [`ProjError::InvalidParameter`] for a malformed `axis`, a
    ///   non-positive scale factor or unit, or an unusable ellipsoid.
    pub fn resolve(params: &ParamSet) -> Result<Self> {
        let code = params
            .string("proj")
            .ok_or_else(|| ProjError::UnsupportedProjection("missing proj".to_string()))?
            .to_string();

        let datum_def = params.string("datum").and_then(catalog::datum);
        let mut datum = Datum::resolve(params, datum_def)?;
        let ellipsoid = Ellipsoid::resolve(params, datum_def.map(|d| d.ellipse))?;
        datum.detect_wgs84(&ellipsoid);

        let axis = match params.string("axis") {
            Some(axis) if axis.chars().count() != 3 => {
                return Err(ProjError::InvalidParameter(format!("axis={axis}")));
            }
            Some(axis) => axis.to_string(),
            None => "enu".to_string(),
        };

        let k0 = params
            .float("k_0")
            .or_else(|| params.float("k"))
            .unwrap_or(1.0);
        if k0.is_nan() || k0 <= 0.0 {
            return Err(ProjError::InvalidParameter(format!("k_0={k0}")));
        }

        let (to_meter, fr_meter) =
            unit_factors(params, "units", "to_meter")?.unwrap_or((1.0, 1.0));
        let (vto_meter, vfr_meter) =
            unit_factors(params, "vunits", "vto_meter")?.unwrap_or((to_meter, fr_meter));

        let from_greenwich = params
            .string("pm")
            .and_then(|pm| match catalog::prime_meridian(pm) {
                Some(def) => parse_dms(def.defn),
                None => parse_dms(pm),
            })
            .map_or(0.0, f64::to_radians);

        Ok(Self {
            code,
            ellipsoid,
            datum,
            lam0: params.degree("lon_0").unwrap_or(0.0),
            phi0: params.degree("lat_0").unwrap_or(0.0),
            k0,
            x0: params.float("x_0").unwrap_or(0.0),
            y0: params.float("y_0").unwrap_or(0.0),
            to_meter,
            fr_meter,
            vto_meter,
            vfr_meter,
            axis,
            geoc: params.bool("geoc").unwrap_or(false),
            over: params.bool("over").unwrap_or(false),
            long_wrap_center: params.degree("lon_wrap"),
            from_greenwich,
        })
    }
}

/// Returns `(to_meter, fr_meter)` from a catalog unit named by `name_key`,
/// else from a numeric `factor_key` (`0.3048` or `1/3`).
fn unit_factors(params: &ParamSet, name_key: &str, factor_key: &str) -> Result<Option<(f64, f64)>> {
    if let Some(unit) = params.string(name_key).and_then(catalog::unit) {
        return Ok(Some((unit.to_meter, 1.0 / unit.to_meter)));
    }
    let Some(raw) = params.string(factor_key) else {
        return Ok(None);
    };

    let invalid = || ProjError::InvalidParameter(format!("{factor_key}={raw}"));
    let parse = |s: &str| s.trim().parse::<f64>().map_err(|_| invalid());
    let (num, den) = match raw.split_once('/') {
        Some((num, den)) => (parse(num)?, parse(den)?),
        None => (parse(raw)?, 1.0),
    };
    let factor = num / den;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(invalid());
    }
    Ok(Some((factor, den / num)))
}
