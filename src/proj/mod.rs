pub mod catalog;
pub mod common;
pub mod config;
pub mod datum;
pub mod ellipsoid;
pub mod equirectangular;
pub mod geographic;
pub mod lambert_conformal;
pub mod mercator;
pub mod params;
pub mod pipeline;

use std::f64::consts::FRAC_PI_2;

use crate::error::{ProjError, Result};
use crate::proj::common::{adjlon, EPS10, HUGE_VAL};
use crate::proj::config::Config;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::equirectangular::Equirectangular;
use crate::proj::geographic::Geographic;
use crate::proj::lambert_conformal::LambertConformalConic;
use crate::proj::mercator::Mercator;
use crate::proj::params::ParamSet;

/// Sanity bound on forward input longitude, in radians.
const MAX_LON: f64 = 10.0;

/// Projection math on the unit sphere.
///
/// `forward` takes longitude relative to the central meridian and latitude,
/// in radians, and returns coordinates in units of the semi-major axis.
/// `inverse` is its reciprocal.
pub(crate) trait Kernel {
    fn forward(&self, lam: f64, phi: f64) -> Result<(f64, f64)>;

    fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)>;

    fn is_geographic(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug)]
enum KernelKind {
    Geographic(Geographic),
    Mercator(Mercator),
    LambertConformalConic(LambertConformalConic),
    Equirectangular(Equirectangular),
}

impl KernelKind {
    fn new(config: &mut Config, params: &ParamSet) -> Result<Self> {
        let code = config.code.clone();
        match code.as_str() {
            "latlong" | "longlat" | "latlon" | "lonlat" => {
                Geographic::new(config, params).map(Self::Geographic)
            }
            "merc" => Mercator::new(config, params).map(Self::Mercator),
            "lcc" => LambertConformalConic::new(config, params).map(Self::LambertConformalConic),
            "eqc" => Equirectangular::new(config, params).map(Self::Equirectangular),
            _ => Err(ProjError::UnsupportedProjection(code)),
        }
    }

    fn kernel(&self) -> &dyn Kernel {
        match self {
            Self::Geographic(k) => k,
            Self::Mercator(k) => k,
            Self::LambertConformalConic(k) => k,
            Self::Equirectangular(k) => k,
        }
    }
}

/// A resolved projection, ready to transform coordinates.
///
/// Immutable once built; share it freely between threads.
///
/// # Example
///
/// ```
/// use projector::Projection;
///
/// let merc = Projection::new("+proj=merc +ellps=WGS84 +lon_0=-96").unwrap();
/// let (x, y) = merc.forward((-74.0_f64).to_radians(), 40.7_f64.to_radians()).unwrap();
/// let (lon, lat) = merc.inverse(x, y).unwrap();
/// assert!((lon.to_degrees() + 74.0).abs() < 1e-9);
/// assert!((lat.to_degrees() - 40.7).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Projection {
    config: Config,
    kernel: KernelKind,
}

impl Projection {
    /// Parses and resolves a `+proj=...` definition string.
    ///
    /// # Errors
    ///
    /// Any resolution or kernel initialization failure; no partially built
    /// projection is returned.
    pub fn new(definition: &str) -> Result<Self> {
        Self::from_params(&ParamSet::parse(definition))
    }

    /// Resolves an already parsed [`ParamSet`], failing like [`Projection::new`].
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let mut config = Config::resolve(params)?;
        let kernel = KernelKind::new(&mut config, params)?;
        Ok(Self { config, kernel })
    }

    /// Forward: (lon_rad, lat_rad) -> (x, y) in the output linear unit.
    ///
    /// Geographic projections return radians.
    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        let config = &self.config;
        let ellipsoid = &config.ellipsoid;

        let t = lat.abs() - FRAC_PI_2;
        if lon.is_nan() || lat.is_nan() || t > EPS10 || lon.abs() > MAX_LON {
            return Err(ProjError::OutOfRange(format!("forward input ({lon}, {lat})")));
        }

        let phi = if t.abs() <= EPS10 {
            FRAC_PI_2.copysign(lat)
        } else if config.geoc {
            (ellipsoid.r_one_es * lat.tan()).atan()
        } else {
            lat
        };
        let mut lam = lon - config.lam0;
        if !config.over {
            lam = adjlon(lam);
        }

        let (x, y) = self.kernel.kernel().forward(lam, phi)?;
        Ok((
            config.fr_meter * (ellipsoid.a * x + config.x0),
            config.fr_meter * (ellipsoid.a * y + config.y0),
        ))
    }

    /// Inverse: (x, y) in the output linear unit -> (lon_rad, lat_rad).
    ///
    /// Fails with [`ProjError::OutOfRange`] on a coordinate poisoned by a
    /// failed forward (see [`HUGE_VAL`]).
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let config = &self.config;
        let ellipsoid = &config.ellipsoid;

        if !x.is_finite() || !y.is_finite() {
            return Err(ProjError::OutOfRange(format!("inverse input ({x}, {y})")));
        }

        let x = (x * config.to_meter - config.x0) * ellipsoid.ra;
        let y = (y * config.to_meter - config.y0) * ellipsoid.ra;
        let (mut lam, mut phi) = self.kernel.kernel().inverse(x, y)?;

        lam += config.lam0;
        if !config.over {
            lam = adjlon(lam);
        }
        if let Some(center) = config.long_wrap_center {
            lam = center + adjlon(lam - center);
        }
        if config.geoc && (phi.abs() - FRAC_PI_2).abs() > EPS10 {
            phi = (ellipsoid.one_es * phi.tan()).atan();
        }
        Ok((lam, phi))
    }

    /// Forward-projects every coordinate in place.
    ///
    /// A coordinate that fails is replaced by `(HUGE_VAL, HUGE_VAL)` and the
    /// rest are still processed; the first error is returned.
    pub fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<()> {
        batch(coords, |x, y| self.forward(x, y))
    }

    /// Inverse-projects every coordinate in place, poisoning failures like
    /// [`Projection::forward_batch`].
    pub fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<()> {
        batch(coords, |x, y| self.inverse(x, y))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.config.ellipsoid
    }

    /// Projection code, e.g. `lcc`.
    pub fn code(&self) -> &str {
        &self.config.code
    }

    /// Semi-major axis the projection scales by, after any radius substitution.
    pub fn radius(&self) -> f64 {
        self.config.ellipsoid.a
    }

    /// True when coordinates are longitude/latitude rather than planar.
    pub fn is_geographic(&self) -> bool {
        self.kernel.kernel().is_geographic()
    }

    /// Metres per output linear unit.
    pub fn to_meter(&self) -> f64 {
        self.config.to_meter
    }

    /// Prime meridian offset east of Greenwich, in radians.
    pub fn from_greenwich(&self) -> f64 {
        self.config.from_greenwich
    }
}

pub(crate) fn batch<F>(coords: &mut [(f64, f64)], f: F) -> Result<()>
where
    F: Fn(f64, f64) -> Result<(f64, f64)>,
{
    let mut first_err = None;
    for c in coords.iter_mut() {
        match f(c.0, c.1) {
            Ok(p) => *c = p,
            Err(e) => {
                *c = (HUGE_VAL, HUGE_VAL);
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
    }
    first_err.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const LONLAT: &str = "+proj=longlat +ellps=WGS84 +datum=WGS84 +units=degrees";
    const SPHERICAL_MERC: &str =
        "+proj=merc +a=6378137 +b=6378137 +lat_ts=0.0 +lon_0=0.0 +x_0=0 +y_0=0 +k=1.0 +units=m";

    #[test]
    fn test_longlat_identity() {
        let proj = Projection::new(LONLAT).unwrap();
        assert!(proj.is_geographic());
        let lon = 18.5_f64.to_radians();
        let lat = 54.2_f64.to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        assert_relative_eq!(x, lon, epsilon = 1e-5);
        assert_relative_eq!(y, lat, epsilon = 1e-5);
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lon2, lon, epsilon = 1e-5);
        assert_relative_eq!(lat2, lat, epsilon = 1e-5);
    }

    #[test]
    fn test_longlat_roundtrip_grid() {
        let proj = Projection::new(LONLAT).unwrap();
        for lon_deg in (-179..=180).step_by(17) {
            for lat_deg in (-89..=89).step_by(11) {
                let lon = f64::from(lon_deg).to_radians();
                let lat = f64::from(lat_deg).to_radians();
                let (x, y) = proj.forward(lon, lat).unwrap();
                let (lon2, lat2) = proj.inverse(x, y).unwrap();
                assert_relative_eq!(lon2, lon, epsilon = 1e-5);
                assert_relative_eq!(lat2, lat, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_spherical_mercator() {
        let proj = Projection::new(SPHERICAL_MERC).unwrap();
        assert!(!proj.is_geographic());
        let lon = 18.5_f64.to_radians();
        let lat = 54.2_f64.to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        assert_relative_eq!(x, 2_059_410.579_68, epsilon = 1e-5);
        assert_relative_eq!(y, 7_208_125.260_9, epsilon = 1e-5);
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lon2, lon, epsilon = 1e-5);
        assert_relative_eq!(lat2, lat, epsilon = 1e-5);
    }

    #[test]
    fn test_central_meridian_roundtrip() {
        for def in [
            "+proj=merc +ellps=WGS84 +lon_0=-96",
            "+proj=lcc +lat_1=33 +lat_2=45 +lat_0=39 +lon_0=-96 +ellps=WGS84",
            "+proj=eqc +R=6371000 +lat_ts=30 +lon_0=150 +x_0=1000",
        ] {
            let proj = Projection::new(def).unwrap();
            for &(lon_deg, lat_deg) in &[(-74.0_f64, 40.7_f64), (-100.0, 20.0), (170.0, 35.0)] {
                let (x, y) = proj
                    .forward(lon_deg.to_radians(), lat_deg.to_radians())
                    .unwrap();
                let (lon, lat) = proj.inverse(x, y).unwrap();
                assert_relative_eq!(lon.to_degrees(), lon_deg, epsilon = 1e-7);
                assert_relative_eq!(lat.to_degrees(), lat_deg, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn test_lcc_units_and_false_easting() {
        let proj = Projection::new(
            "+proj=lcc +lat_1=28d23' +lat_2=30d17' +lat_0=27d50' +lon_0=-99 \
             +x_0=609601.2192 +y_0=0 +ellps=clrk66 +units=us-ft",
        )
        .unwrap();
        let (x, y) = proj
            .forward((-96.0_f64).to_radians(), 28.5_f64.to_radians())
            .unwrap();
        assert_relative_eq!(x, 2_963_503.913, epsilon = 1e-3);
        assert_relative_eq!(y, 254_759.801, epsilon = 1e-3);
        let (lon, lat) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lon.to_degrees(), -96.0, epsilon = 1e-9);
        assert_relative_eq!(lat.to_degrees(), 28.5, epsilon = 1e-9);
    }

    #[test]
    fn test_forward_out_of_range() {
        let proj = Projection::new(SPHERICAL_MERC).unwrap();
        for (lon, lat) in [(0.0, 1.6), (0.0, -1.6), (10.5, 0.0), (f64::NAN, 0.0)] {
            assert!(
                matches!(proj.forward(lon, lat), Err(ProjError::OutOfRange(_))),
                "({lon}, {lat})"
            );
        }
        // far longitudes inside the sanity bound are normalized
        let (x, _) = proj.forward(PI + 1.0, 0.0).unwrap();
        assert_relative_eq!(x, 6_378_137.0 * (1.0 - PI), epsilon = 1e-6);
    }

    #[test]
    fn test_pole_snapping() {
        let proj = Projection::new("+proj=lcc +lat_1=33 +lat_2=45 +ellps=WGS84").unwrap();
        let (x, y) = proj.forward(0.0, FRAC_PI_2 + 1e-11).unwrap();
        let (_, lat) = proj.inverse(x, y).unwrap();
        assert_relative_eq!(lat, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_rejects_sentinel() {
        let proj = Projection::new(LONLAT).unwrap();
        for (x, y) in [(HUGE_VAL, 0.0), (0.0, HUGE_VAL), (f64::NAN, 0.0)] {
            assert!(matches!(proj.inverse(x, y), Err(ProjError::OutOfRange(_))));
        }
    }

    #[test]
    fn test_over_keeps_longitude() {
        let wrapped = Projection::new("+proj=eqc +R=1").unwrap();
        let over = Projection::new("+proj=eqc +R=1 +over").unwrap();
        let lon = 200.0_f64.to_radians();
        assert_relative_eq!(wrapped.forward(lon, 0.0).unwrap().0, lon - 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(over.forward(lon, 0.0).unwrap().0, lon, epsilon = 1e-12);
        assert_relative_eq!(over.inverse(lon, 0.0).unwrap().0, lon, epsilon = 1e-12);
    }

    #[test]
    fn test_lon_wrap() {
        let proj = Projection::new("+proj=longlat +ellps=WGS84 +lon_wrap=180").unwrap();
        let (lon, _) = proj.inverse((-10.0_f64).to_radians(), 0.0).unwrap();
        assert_relative_eq!(lon.to_degrees(), 350.0, epsilon = 1e-9);
        let (lon, _) = proj.inverse(10.0_f64.to_radians(), 0.0).unwrap();
        assert_relative_eq!(lon.to_degrees(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_geocentric_latitude() {
        let proj = Projection::new("+proj=longlat +ellps=WGS84 +geoc").unwrap();
        let (_, y) = proj.forward(0.0, 45.0_f64.to_radians()).unwrap();
        assert_relative_eq!(y, 0.788_756_582_073_609_7, epsilon = 1e-12);
        let (_, lat) = proj.inverse(0.0, y).unwrap();
        assert_relative_eq!(lat, 45.0_f64.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn test_construction_errors() {
        let cases = [
            ("+proj=tmerc +ellps=WGS84", "unsupported"),
            ("+ellps=WGS84", "unsupported"),
            ("+proj=merc +k_0=0", "invalid"),
            ("+proj=merc +k=-2", "invalid"),
            ("+proj=lcc +lat_1=18 +lat_2=-18", "invalid"),
            ("+proj=merc +axis=enup", "invalid"),
        ];
        for (def, kind) in cases {
            let err = Projection::new(def).unwrap_err();
            match kind {
                "unsupported" => assert!(matches!(err, ProjError::UnsupportedProjection(_)), "{def}"),
                _ => assert!(matches!(err, ProjError::InvalidParameter(_)), "{def}"),
            }
        }
    }

    #[test]
    fn test_accessors() {
        let proj = Projection::new("+proj=merc +ellps=WGS84 +R_A +units=km +pm=paris").unwrap();
        assert_eq!(proj.code(), "merc");
        assert_relative_eq!(proj.radius(), 6_371_007.181_082_429, epsilon = 1e-6);
        assert_eq!(proj.to_meter(), 1000.0);
        assert_relative_eq!(proj.from_greenwich(), 0.040_792_344_331_976_64, epsilon = 1e-15);
        assert!(proj.ellipsoid().is_sphere());
        assert_eq!(proj.config().ellipsoid.a_orig, 6_378_137.0);
    }

    #[test]
    fn test_batch_poisons_failures() {
        let proj = Projection::new(SPHERICAL_MERC).unwrap();
        let mut coords = vec![(0.0, 0.0), (0.0, 2.0), (0.1, 0.2)];
        let err = proj.forward_batch(&mut coords).unwrap_err();
        assert!(matches!(err, ProjError::OutOfRange(_)));
        assert_eq!(coords[1], (HUGE_VAL, HUGE_VAL));
        assert!(coords[2].0.is_finite());

        // the poisoned point fails again on the way back
        let err = proj.inverse_batch(&mut coords).unwrap_err();
        assert!(matches!(err, ProjError::OutOfRange(_)));
        assert_relative_eq!(coords[0].0, 0.0, epsilon = 1e-12);
        assert_relative_eq!(coords[2].0, 0.1, epsilon = 1e-12);
        assert_relative_eq!(coords[2].1, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_shared_between_threads() {
        let proj = std::sync::Arc::new(Projection::new(SPHERICAL_MERC).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let proj = std::sync::Arc::clone(&proj);
                std::thread::spawn(move || {
                    let lon = 0.1 * f64::from(i);
                    let (x, y) = proj.forward(lon, 0.5).unwrap();
                    proj.inverse(x, y).unwrap().0 - lon
                })
            })
            .collect();
        for handle in handles {
            assert_relative_eq!(handle.join().unwrap(), 0.0, epsilon = 1e-12);
        }
    }
}
