//! Cartographic projections driven by PROJ.4-style definition strings.
//!
//! ```
//! use projector::new_projection;
//!
//! let lcc = new_projection(
//!     "+proj=lcc +lat_1=33 +lat_2=45 +lat_0=39 +lon_0=-96 +ellps=WGS84",
//! )
//! .unwrap();
//! let (x, y) = lcc.forward((-74.0_f64).to_radians(), 40.7_f64.to_radians()).unwrap();
//! assert!((x - 1_831_907.035).abs() < 1e-2);
//! assert!((y - 410_582.446).abs() < 1e-2);
//! ```

pub mod error;
pub mod proj;

pub use error::{ProjError, Result};
pub use proj::common::HUGE_VAL;
pub use proj::config::Config;
pub use proj::params::ParamSet;
pub use proj::pipeline::Pipeline;
pub use proj::Projection;

/// Parses `definition` and resolves it into a [`Projection`].
pub fn new_projection(definition: &str) -> Result<Projection> {
    Projection::new(definition)
}
