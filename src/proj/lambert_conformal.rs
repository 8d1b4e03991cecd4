//! Lambert Conformal Conic projection (1SP and 2SP).
//!
//! Works on the unit sphere; the caller scales by `a` and applies λ₀.
//!
//! Ellipsoidal:
//!   n = ln(m₁/m₂) / ln(t₁/t₂)  (secant) or sin(φ₁)  (tangent)
//!   c = m₁·t₁⁻ⁿ / n
//!   ρ(φ) = c·tsfn(φ)ⁿ
//! Spherical:
//!   n = ln(cos φ₁/cos φ₂) / ln(tan(π/4 + φ₂/2) / tan(π/4 + φ₁/2))
//!   c = cos φ₁·tan(π/4 + φ₁/2)ⁿ / n
//!   ρ(φ) = c·tan(π/4 + φ/2)⁻ⁿ
//!
//!   forward: x = k₀·ρ·sin(n·λ), y = k₀·(ρ₀ - ρ·cos(n·λ))
//!   inverse: ρ = ±hypot(x/k₀, ρ₀ - y/k₀), λ = atan2(x, y)/n, φ from ρ

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::error::{ProjError, Result};
use crate::proj::common::{msfn, phi2, tsfn, EPS10};
use crate::proj::config::Config;
use crate::proj::params::ParamSet;
use crate::proj::Kernel;

#[derive(Clone, Debug)]
pub struct LambertConformalConic {
    /// Cone constant
    n: f64,
    c: f64,
    rho0: f64,
    k0: f64,
    e: f64,
    ellipsoidal: bool,
}

impl LambertConformalConic {
    /// `lat_2` defaults to `lat_1`; with neither `lat_2` nor `lat_0` given,
    /// `config.phi0` is moved to `lat_1`.
    pub fn new(config: &mut Config, params: &ParamSet) -> Result<Self> {
        let phi_1 = params.degree("lat_1").unwrap_or(0.0);
        let phi_2 = match params.degree("lat_2") {
            Some(phi_2) => phi_2,
            None => {
                if !params.contains("lat_0") {
                    config.phi0 = phi_1;
                }
                phi_1
            }
        };
        if (phi_1 + phi_2).abs() <= EPS10 {
            return Err(ProjError::InvalidParameter(format!(
                "standard parallels lat_1={} and lat_2={} are symmetric about the equator",
                phi_1.to_degrees(),
                phi_2.to_degrees()
            )));
        }

        let ellipsoid = config.ellipsoid;
        let ellipsoidal = !ellipsoid.is_sphere();
        let (e, es) = (ellipsoid.e, ellipsoid.es);
        let secant = (phi_1 - phi_2).abs() >= EPS10;
        let (sinphi, cosphi) = phi_1.sin_cos();
        let phi0 = config.phi0;
        let origin_at_pole = (phi0.abs() - FRAC_PI_2).abs() < EPS10;

        let mut n = sinphi;
        let (c, rho0) = if ellipsoidal {
            let m1 = msfn(sinphi, cosphi, es);
            let ml1 = tsfn(phi_1, sinphi, e);
            if secant {
                let (sinphi_2, cosphi_2) = phi_2.sin_cos();
                n = (m1 / msfn(sinphi_2, cosphi_2, es)).ln() / (ml1 / tsfn(phi_2, sinphi_2, e)).ln();
            }
            let c = m1 * ml1.powf(-n) / n;
            let rho0 = if origin_at_pole {
                0.0
            } else {
                c * tsfn(phi0, phi0.sin(), e).powf(n)
            };
            (c, rho0)
        } else {
            if secant {
                n = (cosphi / phi_2.cos()).ln()
                    / ((FRAC_PI_4 + 0.5 * phi_2).tan() / (FRAC_PI_4 + 0.5 * phi_1).tan()).ln();
            }
            let c = cosphi * (FRAC_PI_4 + 0.5 * phi_1).tan().powf(n) / n;
            let rho0 = if origin_at_pole {
                0.0
            } else {
                c * (FRAC_PI_4 + 0.5 * phi0).tan().powf(-n)
            };
            (c, rho0)
        };

        Ok(Self {
            n,
            c,
            rho0,
            k0: config.k0,
            e,
            ellipsoidal,
        })
    }

    fn rho(&self, phi: f64) -> f64 {
        if self.ellipsoidal {
            self.c * tsfn(phi, phi.sin(), self.e).powf(self.n)
        } else {
            self.c * (FRAC_PI_4 + 0.5 * phi).tan().powf(-self.n)
        }
    }
}

impl Kernel for LambertConformalConic {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64)> {
        let rho = if (phi.abs() - FRAC_PI_2).abs() < EPS10 {
            // apex of the cone; the opposite pole is at infinity
            if phi * self.n <= 0.0 {
                return Err(ProjError::PoleDegenerate(format!(
                    "latitude {} is not on the cone",
                    phi.to_degrees()
                )));
            }
            0.0
        } else {
            self.rho(phi)
        };
        let theta = self.n * lam;
        Ok((
            self.k0 * rho * theta.sin(),
            self.k0 * (self.rho0 - rho * theta.cos()),
        ))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let mut x = x / self.k0;
        let mut y = self.rho0 - y / self.k0;
        let mut rho = x.hypot(y);
        if rho == 0.0 {
            return Ok((0.0, FRAC_PI_2.copysign(self.n)));
        }
        if self.n < 0.0 {
            rho = -rho;
            x = -x;
            y = -y;
        }
        let phi = if self.ellipsoidal {
            phi2(self.e, (rho / self.c).powf(1.0 / self.n))?
        } else {
            2.0 * (self.c / rho).powf(1.0 / self.n).atan() - FRAC_PI_2
        };
        Ok((x.atan2(y) / self.n, phi))
    }
}
