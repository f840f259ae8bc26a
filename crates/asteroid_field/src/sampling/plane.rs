//! Plane-test layout: one asteroid per voxel map on a flat grid.
use rand::Rng as RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::config::FieldConfig;
use crate::sampling::{DistributionStrategy, SkinAssignment};
use crate::vector::Vector3;

pub const DEFAULT_PLANE_SPACING: f64 = 250.0;

/// Coordinate plane holding the grid. The first named axis carries columns,
/// the second carries rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlaneOrientation {
    /// Front view.
    #[default]
    Xy,
    /// Side view.
    Yz,
    /// Top view.
    Xz,
}

/// Deterministic grid used to inspect every voxel map side by side.
///
/// Produces exactly `voxel_maps.len()` positions regardless of `amount`. Rows grow
/// towards negative values and the column count is always odd.
#[derive(Debug, Clone, Copy)]
pub struct PlaneTestDistribution {
    /// Distance between neighbouring grid cells.
    pub spacing: f64,
}

impl Default for PlaneTestDistribution {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_PLANE_SPACING,
        }
    }
}

impl PlaneTestDistribution {
    /// Column count for `count` cells: `floor(sqrt(count)) | 1`.
    pub fn columns_for(count: usize) -> usize {
        ((count as f64).sqrt().floor() as usize) | 1
    }
}

impl DistributionStrategy for PlaneTestDistribution {
    fn name(&self) -> &'static str {
        "testPlane"
    }

    fn generate(&self, config: &FieldConfig, _rng: &mut dyn RngCore) -> Result<Vec<Vector3>> {
        let count = config.voxel_maps.len();
        let cols = Self::columns_for(count);

        let out = (0..count)
            .map(|i| {
                let col = (i % cols) as f64 * self.spacing;
                let row = -((i / cols) as f64) * self.spacing;
                match config.plane_orientation {
                    PlaneOrientation::Xy => Vector3::new(col, row, 0.0),
                    PlaneOrientation::Yz => Vector3::new(0.0, col, row),
                    PlaneOrientation::Xz => Vector3::new(col, 0.0, row),
                }
            })
            .collect();

        Ok(out)
    }

    fn skin_assignment(&self) -> SkinAssignment {
        SkinAssignment::Ordered
    }
}
