//! Geographic (longitude/latitude) pass-through.
//!
//! The caller multiplies by `a` on the way out and divides on the way in,
//! so the kernel divides and multiplies by `a` to leave radians unchanged.

use crate::error::Result;
use crate::proj::config::Config;
use crate::proj::params::ParamSet;
use crate::proj::Kernel;

#[derive(Clone, Debug)]
pub struct Geographic {
    a: f64,
}

impl Geographic {
    /// Clears the false easting and northing.
    pub fn new(config: &mut Config, _params: &ParamSet) -> Result<Self> {
        config.x0 = 0.0;
        config.y0 = 0.0;
        Ok(Self {
            a: config.ellipsoid.a,
        })
    }
}

impl Kernel for Geographic {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64)> {
        Ok((lam / self.a, phi / self.a))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        Ok((x * self.a, y * self.a))
    }

    fn is_geographic(&self) -> bool {
        true
    }
}
