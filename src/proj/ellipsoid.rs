//! Resolved reference ellipsoid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ProjError, Result};
use crate::proj::catalog::{self, Shape};
use crate::proj::params::ParamSet;

pub const WGS84_A: f64 = 6_378_137.0;
pub const WGS84_RF: f64 = 298.257_223_563;
/// Squared eccentricity of WGS84: f·(2 - f)
pub const WGS84_ES: f64 = (1.0 / WGS84_RF) * (2.0 - 1.0 / WGS84_RF);

// Series coefficients for the authalic and volumetric radius.
const SIXTH: f64 = 1.0 / 6.0;
const RA4: f64 = 17.0 / 360.0;
const RA6: f64 = 67.0 / 3024.0;
const RV4: f64 = 5.0 / 72.0;
const RV6: f64 = 55.0 / 1296.0;

/// Shape of the earth model a projection works on.
///
/// `es` is the only authority on ellipsoidal versus spherical behaviour:
/// kernels branch on `es != 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// First eccentricity squared
    pub es: f64,
    /// First eccentricity
    pub e: f64,
    /// 1 / a
    pub ra: f64,
    /// 1 - es
    pub one_es: f64,
    /// 1 / (1 - es)
    pub r_one_es: f64,
    /// Semi-major axis before any radius substitution
    pub a_orig: f64,
    /// Squared eccentricity before any radius substitution
    pub es_orig: f64,
}

/// Replaces the ellipsoid by a sphere of equivalent radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadiusSubstitution {
    /// `R_A`: sphere of equal surface area
    Authalic,
    /// `R_V`: sphere of equal volume
    Volumetric,
    /// `R_g`: geometric mean of the semi-axes
    GaussianMean,
    /// `R_h`: harmonic mean of the semi-axes
    HarmonicMean,
}

impl RadiusSubstitution {
    /// Returns the first of `R_A`, `R_V`, `R_g`, `R_h` set to true in `params`.
    pub fn from_params(params: &ParamSet) -> Option<Self> {
        [
            ("R_A", Self::Authalic),
            ("R_V", Self::Volumetric),
            ("R_g", Self::GaussianMean),
            ("R_h", Self::HarmonicMean),
        ]
        .into_iter()
        .find(|(key, _)| params.bool(key) == Some(true))
        .map(|(_, mode)| mode)
    }

    /// Radius of the substituted sphere for semi-axes `a`, `b` and squared eccentricity `es`.
    pub fn radius(self, a: f64, b: f64, es: f64) -> f64 {
        match self {
            Self::Authalic => a * (1.0 - es * (SIXTH + es * (RA4 + es * RA6))),
            Self::Volumetric => a * (1.0 - es * (SIXTH + es * (RV4 + es * RV6))),
            Self::GaussianMean => (a * b).sqrt(),
            Self::HarmonicMean => 2.0 * a * b / (a + b),
        }
    }
}

impl Ellipsoid {
    /// Makes an [`Ellipsoid`] from its semi-major axis and squared eccentricity.
    pub fn new(a: f64, es: f64) -> Self {
        Self {
            a,
            es,
            e: es.sqrt(),
            ra: 1.0 / a,
            one_es: 1.0 - es,
            r_one_es: 1.0 / (1.0 - es),
            a_orig: a,
            es_orig: es,
        }
    }

    pub fn sphere(radius: f64) -> Self {
        Self::new(radius, 0.0)
    }

    pub fn wgs84() -> Self {
        Self::new(WGS84_A, WGS84_ES)
    }

    #[inline]
    pub fn is_sphere(&self) -> bool {
        self.es == 0.0
    }

    /// Semi-minor axis: a·sqrt(1 - es)
    pub fn b(&self) -> f64 {
        self.a * self.one_es.sqrt()
    }

    /// Resolves the ellipsoid described by `params`.
    ///
    /// `R` gives a sphere directly. Otherwise the catalog ellipsoid named by
    /// `ellps` (or by `default_ellps`, the datum's ellipsoid) only fills the
    /// keys that `params` leaves unset; the shape then comes from the first
    /// of `es`, `e`, `rf`, `f`, `b` present. Without any of `R`, `ellps`, `a`
    /// or a datum, WGS84 is used.
    pub fn resolve(params: &ParamSet, default_ellps: Option<&str>) -> Result<Self> {
        if let Some(r) = params.float("R") {
            if r.is_nan() || r <= 0.0 {
                return Err(ProjError::InvalidParameter(format!("R={r}")));
            }
            return Ok(Self::sphere(r));
        }

        let name = params.string("ellps").or(default_ellps);
        let def = match name {
            Some(name) => catalog::ellipsoid(name),
            None if !params.contains("a") => catalog::ellipsoid("WGS84"),
            None => None,
        };

        let a = params
            .float("a")
            .or(def.map(|d| d.a))
            .ok_or_else(|| match name {
                Some(name) => ProjError::InvalidParameter(format!("unknown ellps={name}")),
                None => ProjError::InvalidParameter("major axis not given".to_string()),
            })?;
        if a.is_nan() || a <= 0.0 {
            return Err(ProjError::InvalidParameter(format!("a={a}")));
        }

        let mut es = params.float("es");
        let mut e = params.float("e");
        let mut rf = params.float("rf");
        let mut f = params.float("f");
        let mut b = params.float("b");
        if let Some(def) = def {
            match def.shape {
                Shape::Es(v) => es = es.or(Some(v)),
                Shape::E(v) => e = e.or(Some(v)),
                Shape::Rf(v) => rf = rf.or(Some(v)),
                Shape::F(v) => f = f.or(Some(v)),
                Shape::B(v) => b = b.or(Some(v)),
            }
        }

        // b is only kept when it is what set the shape
        let (es, b) = if let Some(es) = es {
            (es, None)
        } else if let Some(e) = e {
            (e * e, None)
        } else if let Some(rf) = rf {
            let f = 1.0 / rf;
            (f * (2.0 - f), None)
        } else if let Some(f) = f {
            (f * (2.0 - f), None)
        } else if let Some(b) = b {
            (1.0 - (b * b) / (a * a), Some(b))
        } else {
            (0.0, None)
        };
        if !(0.0..1.0).contains(&es) {
            return Err(ProjError::InvalidParameter(format!(
                "squared eccentricity {es} outside [0, 1)"
            )));
        }

        let b = b.unwrap_or_else(|| a * (1.0 - es).sqrt());

        Ok(match RadiusSubstitution::from_params(params) {
            Some(mode) => Self {
                a_orig: a,
                es_orig: es,
                ..Self::sphere(mode.radius(a, b, es))
            },
            None => Self::new(a, es),
        })
    }
}
