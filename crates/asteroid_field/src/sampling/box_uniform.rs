//! Box ("quader") distribution: mildly clustered points in an origin-anchored box.
use rand::Rng as RngCore;

use crate::error::Result;
use crate::field::config::FieldConfig;
use crate::sampling::shape::powered_mean;
use crate::sampling::DistributionStrategy;
use crate::vector::Vector3;

/// Mean-of-draws exponents per axis. The z axis clusters hardest.
const AXIS_EXPONENTS: [u32; 3] = [2, 2, 3];

/// Fills `[0, dimension)` on every axis, ignoring the field center.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxDistribution;

impl DistributionStrategy for BoxDistribution {
    fn name(&self) -> &'static str {
        "quader"
    }

    fn generate(&self, config: &FieldConfig, rng: &mut dyn RngCore) -> Result<Vec<Vector3>> {
        let [ex, ey, ez] = AXIS_EXPONENTS;
        let dim = config.dimension;

        let out = (0..config.amount)
            .map(|_| {
                let x = powered_mean(rng, ex) * dim.x;
                let y = powered_mean(rng, ey) * dim.y;
                let z = powered_mean(rng, ez) * dim.z;
                Vector3::new(x, y, z).floor()
            })
            .collect();

        Ok(out)
    }
}
