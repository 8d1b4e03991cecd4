//! Pipeline: definition-to-definition transform through geographic space.
//!
//! Geographic endpoints take and return degrees; projected endpoints use
//! their own linear unit. Longitudes are re-based between prime meridians.
//! No datum shift is applied.

use crate::error::Result;
use crate::proj::{batch, Projection};

/// A transform between two projection definitions.
#[derive(Clone, Debug)]
pub struct Pipeline {
    src: Projection,
    dst: Projection,
}

impl Pipeline {
    /// Create a Pipeline from source and destination definition strings.
    pub fn new(src_def: &str, dst_def: &str) -> Result<Self> {
        Ok(Self::from_projections(
            Projection::new(src_def)?,
            Projection::new(dst_def)?,
        ))
    }

    pub fn from_projections(src: Projection, dst: Projection) -> Self {
        Self { src, dst }
    }

    pub fn src(&self) -> &Projection {
        &self.src
    }

    pub fn dst(&self) -> &Projection {
        &self.dst
    }

    /// Transform a single point from source to destination.
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        convert(&self.src, &self.dst, x, y)
    }

    /// Transform a single point from destination back to source.
    pub fn transform_inv(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        convert(&self.dst, &self.src, x, y)
    }

    /// Batch transform from source to destination, in place.
    ///
    /// Failed points are set to [`HUGE_VAL`](crate::proj::common::HUGE_VAL)
    /// and the first error is returned after the whole slice is processed.
    pub fn transform_batch(&self, coords: &mut [(f64, f64)]) -> Result<()> {
        batch(coords, |x, y| self.transform(x, y))
    }

    /// Batch transform from destination to source, in place.
    pub fn transform_inv_batch(&self, coords: &mut [(f64, f64)]) -> Result<()> {
        batch(coords, |x, y| self.transform_inv(x, y))
    }
}

fn convert(from: &Projection, to: &Projection, x: f64, y: f64) -> Result<(f64, f64)> {
    // Step 1: from coords -> (lon_rad, lat_rad) on the from prime meridian
    let (x, y) = if from.is_geographic() {
        (x.to_radians(), y.to_radians())
    } else {
        (x, y)
    };
    let (lon, lat) = from.inverse(x, y)?;

    // Step 2: re-base onto the to prime meridian, then project
    let lon = lon + from.from_greenwich() - to.from_greenwich();
    let (x, y) = to.forward(lon, lat)?;
    Ok(if to.is_geographic() {
        (x.to_degrees(), y.to_degrees())
    } else {
        (x, y)
    })
}
