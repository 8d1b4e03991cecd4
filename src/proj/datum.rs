//! Datum-shift descriptor.
//!
//! The shift is resolved and stored so callers can inspect it, but no
//! projection applies it: grid shifts and 3/7-parameter Helmert
//! transformations are out of scope.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ProjError, Result};
use crate::proj::catalog::DatumDef;
use crate::proj::common::SEC_TO_RAD;
use crate::proj::ellipsoid::{Ellipsoid, WGS84_A};
use crate::proj::params::{key_value, ParamSet};

/// Tolerance on `es` when recognising WGS84/GRS80 for the identity shift.
const WGS84_ES_TOLERANCE: f64 = 5.0e-11;
/// `es` shared by WGS84 and GRS80 to the tolerance above.
const WGS84_GRS80_ES: f64 = 0.006_694_379_990;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DatumKind {
    /// No shift information
    #[default]
    None,
    /// `nadgrids` or `catalog` given
    GridShift,
    ThreeParam,
    SevenParam,
    /// Zero 3-parameter shift on a WGS84-compatible ellipsoid
    Wgs84,
}

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Datum {
    /// Catalog name of the datum, if one was given and found
    pub name: Option<String>,
    pub kind: DatumKind,
    /// dx, dy, dz (metres), rx, ry, rz (radians), scale (multiplier).
    ///
    /// Rotations are zero and the scale is 1 unless `kind` is
    /// [`DatumKind::SevenParam`]; all zero unless parametric.
    pub params: [f64; 7],
    /// Raw `nadgrids` list, kept but never loaded
    pub nadgrids: Option<String>,
    /// Raw `catalog` name, kept but never loaded
    pub catalog_name: Option<String>,
}

impl Datum {
    /// Resolves the datum shift from `params`, with `def` (the catalog
    /// datum) supplying its shift definition only when `params` does not
    /// give that key itself.
    pub fn resolve(params: &ParamSet, def: Option<&DatumDef>) -> Result<Self> {
        let default = def.map(|d| key_value(d.definition));
        let lookup = |key: &str| {
            params.string(key).or(match default {
                Some((k, v)) if k == key => Some(v),
                _ => None,
            })
        };

        let mut datum = Datum {
            name: def.map(|d| d.id.to_string()),
            ..Default::default()
        };

        if let Some(grids) = lookup("nadgrids") {
            datum.kind = DatumKind::GridShift;
            datum.nadgrids = Some(grids.to_string());
        } else if let Some(catalog) = lookup("catalog") {
            datum.kind = DatumKind::GridShift;
            datum.catalog_name = Some(catalog.to_string());
        } else if let Some(towgs84) = lookup("towgs84") {
            let parts: Vec<&str> = towgs84.split(',').collect();
            if parts.len() > 7 {
                return Err(ProjError::InvalidParameter(format!("towgs84={towgs84}")));
            }
            for (slot, part) in datum.params.iter_mut().zip(&parts) {
                *slot = part
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ProjError::InvalidParameter(format!("towgs84={towgs84}")))?;
            }

            if parts.len() == 7 {
                datum.kind = DatumKind::SevenParam;
                for r in &mut datum.params[3..6] {
                    *r *= SEC_TO_RAD;
                }
                datum.params[6] = datum.params[6] / 1_000_000.0 + 1.0;
            } else {
                datum.kind = DatumKind::ThreeParam;
                datum.params[3..6].fill(0.0);
                datum.params[6] = 1.0;
            }
        }

        Ok(datum)
    }

    /// Reclassifies a zero 3-parameter shift on a WGS84/GRS80 ellipsoid as
    /// [`DatumKind::Wgs84`].
    pub(crate) fn detect_wgs84(&mut self, ellipsoid: &Ellipsoid) {
        if self.kind == DatumKind::ThreeParam
            && self.params[..3].iter().all(|&v| v == 0.0)
            && ellipsoid.a == WGS84_A
            && (ellipsoid.es - WGS84_GRS80_ES).abs() < WGS84_ES_TOLERANCE
        {
            self.kind = DatumKind::Wgs84;
        }
    }

    pub fn is_wgs84(&self) -> bool {
        self.kind == DatumKind::Wgs84
    }
}
