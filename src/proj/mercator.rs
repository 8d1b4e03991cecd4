//! Mercator projection, ellipsoidal and spherical.
//!
//! Works on the unit sphere; the caller scales by `a` and applies λ₀.
//!
//! Ellipsoidal (es != 0):
//!   forward: x = k₀·λ, y = -k₀·ln(tsfn(φ, e))
//!   inverse: λ = x/k₀, φ = phi2(e, exp(-y/k₀))
//!
//! Spherical:
//!   forward: x = k₀·λ, y = k₀·ln(tan(π/4 + φ/2))
//!   inverse: λ = x/k₀, φ = π/2 - 2·atan(exp(-y/k₀))
//!
//! With `lat_ts`, k₀ = msfn(φts) (ellipsoid) or cos(φts) (sphere).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::{ProjError, Result};
use crate::proj::common::{msfn, phi2, tsfn, EPS10};
use crate::proj::config::Config;
use crate::proj::params::ParamSet;
use crate::proj::Kernel;

#[derive(Clone, Debug)]
pub struct Mercator {
    k0: f64,
    e: f64,
    ellipsoidal: bool,
}

impl Mercator {
    /// Sets `config.k0` from `lat_ts` when given.
    pub fn new(config: &mut Config, params: &ParamSet) -> Result<Self> {
        let ellipsoid = config.ellipsoid;
        if let Some(phits) = params.degree("lat_ts").map(f64::abs) {
            if phits >= FRAC_PI_2 {
                return Err(ProjError::InvalidParameter(format!(
                    "lat_ts={}",
                    phits.to_degrees()
                )));
            }
            config.k0 = if ellipsoid.is_sphere() {
                phits.cos()
            } else {
                msfn(phits.sin(), phits.cos(), ellipsoid.es)
            };
        }
        Ok(Self {
            k0: config.k0,
            e: ellipsoid.e,
            ellipsoidal: !ellipsoid.is_sphere(),
        })
    }
}

impl Kernel for Mercator {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64)> {
        if (phi.abs() - FRAC_PI_2).abs() <= EPS10 {
            return Err(ProjError::OutOfRange(format!(
                "mercator is unbounded at latitude {}",
                phi.to_degrees()
            )));
        }
        let x = self.k0 * lam;
        let y = if self.ellipsoidal {
            -self.k0 * tsfn(phi, phi.sin(), self.e).ln()
        } else {
            self.k0 * (FRAC_PI_4 + 0.5 * phi).tan().ln()
        };
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let lam = x / self.k0;
        let phi = if self.ellipsoidal {
            phi2(self.e, (-y / self.k0).exp())?
        } else {
            FRAC_PI_2 - 2.0 * (-y / self.k0).exp().atan()
        };
        Ok((lam, phi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mercator(def: &str) -> (Config, Mercator) {
        let params = ParamSet::parse(def);
        let mut config = Config::resolve(&params).unwrap();
        let merc = Mercator::new(&mut config, &params).unwrap();
        (config, merc)
    }

    #[test]
    fn test_spherical_reference() {
        let (config, merc) = mercator("+proj=merc +a=6378137 +b=6378137");
        let (x, y) = merc
            .forward(18.5_f64.to_radians(), 54.2_f64.to_radians())
            .unwrap();
        assert_relative_eq!(x * config.ellipsoid.a, 2_059_410.579_675_561, epsilon = 1e-5);
        assert_relative_eq!(y * config.ellipsoid.a, 7_208_125.260_900_678, epsilon = 1e-5);
    }

    #[test]
    fn test_ellipsoidal_reference() {
        let (config, merc) = mercator("+proj=merc +ellps=WGS84");
        let (x, y) = merc
            .forward(18.5_f64.to_radians(), 54.2_f64.to_radians())
            .unwrap();
        assert_relative_eq!(x * config.ellipsoid.a, 2_059_410.579_675_561, epsilon = 1e-5);
        assert_relative_eq!(y * config.ellipsoid.a, 7_173_443.754_191_131, epsilon = 1e-4);
    }

    #[test]
    fn test_origin() {
        for def in ["+proj=merc +ellps=WGS84", "+proj=merc +R=6371000"] {
            let (_, merc) = mercator(def);
            let (x, y) = merc.forward(0.0, 0.0).unwrap();
            assert_relative_eq!(x, 0.0);
            assert_relative_eq!(y, 0.0, epsilon = 1e-12);
            let (lam, phi) = merc.inverse(0.0, 0.0).unwrap();
            assert_relative_eq!(lam, 0.0);
            assert_relative_eq!(phi, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_roundtrip() {
        let cases: &[(f64, f64)] = &[
            (0.0, 0.0),
            (10.0, 45.0),
            (-73.9857, 40.7484),
            (139.6917, 35.6895),
            (179.9, -84.0),
        ];
        for def in [
            "+proj=merc +ellps=WGS84",
            "+proj=merc +ellps=WGS84 +lat_ts=30",
            "+proj=merc +R=6371000 +lat_ts=-12",
        ] {
            let (_, merc) = mercator(def);
            for &(lon_deg, lat_deg) in cases {
                let lon = lon_deg.to_radians();
                let lat = lat_deg.to_radians();
                let (x, y) = merc.forward(lon, lat).unwrap();
                let (lon2, lat2) = merc.inverse(x, y).unwrap();
                assert_relative_eq!(lon2, lon, epsilon = 1e-10);
                assert_relative_eq!(lat2, lat, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_true_scale_latitude() {
        let (config, _) = mercator("+proj=merc +ellps=WGS84 +lat_ts=30");
        assert_relative_eq!(config.k0, 0.866_751_002_572_198_7, epsilon = 1e-12);

        // sign of lat_ts is ignored
        let (config, _) = mercator("+proj=merc +R=1 +lat_ts=-60");
        assert_relative_eq!(config.k0, 0.5, epsilon = 1e-12);

        // without lat_ts the resolved k0 stays
        let (config, _) = mercator("+proj=merc +ellps=WGS84 +k_0=0.9");
        assert_eq!(config.k0, 0.9);
    }

    #[test]
    fn test_true_scale_at_pole_rejected() {
        let params = ParamSet::parse("+proj=merc +ellps=WGS84 +lat_ts=90");
        let mut config = Config::resolve(&params).unwrap();
        let err = Mercator::new(&mut config, &params).unwrap_err();
        assert!(matches!(err, ProjError::InvalidParameter(_)));
    }

    #[test]
    fn test_pole_out_of_range() {
        let (_, merc) = mercator("+proj=merc +ellps=WGS84");
        assert!(matches!(
            merc.forward(0.0, FRAC_PI_2),
            Err(ProjError::OutOfRange(_))
        ));
        assert!(matches!(
            merc.forward(0.0, -FRAC_PI_2),
            Err(ProjError::OutOfRange(_))
        ));
    }
}
