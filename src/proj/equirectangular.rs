//! Equirectangular (Plate Carrée) projection.
//!
//! Works on the unit sphere; the caller scales by `a` and applies λ₀.
//!
//! forward: x = λ·cos(φts), y = φ
//! inverse: λ = x/cos(φts), φ = y
//!
//! φts comes from `lat_ts`, else `lat_1`, else 0.

use std::f64::consts::FRAC_PI_2;

use crate::error::{ProjError, Result};
use crate::proj::config::Config;
use crate::proj::params::ParamSet;
use crate::proj::Kernel;

#[derive(Clone, Debug)]
pub struct Equirectangular {
    cos_lat_ts: f64,
}

impl Equirectangular {
    pub fn new(_config: &mut Config, params: &ParamSet) -> Result<Self> {
        let lat_ts = params
            .degree("lat_ts")
            .or_else(|| params.degree("lat_1"))
            .unwrap_or(0.0);
        if lat_ts.abs() >= FRAC_PI_2 {
            return Err(ProjError::InvalidParameter(format!(
                "latitude of true scale {} must be within (-90, 90)",
                lat_ts.to_degrees()
            )));
        }
        Ok(Self {
            cos_lat_ts: lat_ts.cos(),
        })
    }
}

impl Kernel for Equirectangular {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64)> {
        Ok((lam * self.cos_lat_ts, phi))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        Ok((x / self.cos_lat_ts, y))
    }
}
