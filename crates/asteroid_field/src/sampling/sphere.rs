//! Sphere distribution, the default field shape.
use std::f64::consts::{PI, TAU};

use rand::Rng as RngCore;

use crate::error::Result;
use crate::field::config::FieldConfig;
use crate::sampling::shape::{inverse_sqrt, uniform};
use crate::sampling::{require_radius, DistributionStrategy};
use crate::vector::Vector3;

/// Points within `max_radius` of the field center.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereDistribution;

impl DistributionStrategy for SphereDistribution {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn validate(&self, config: &FieldConfig) -> Result<()> {
        require_radius(self.name(), config)
    }

    fn generate(&self, config: &FieldConfig, rng: &mut dyn RngCore) -> Result<Vec<Vector3>> {
        let out = (0..config.amount)
            .map(|_| {
                let radius = inverse_sqrt(rng) * config.max_radius;
                config.center + unit_direction(rng) * radius
            })
            .collect();

        Ok(out)
    }
}

/// Direction from `phi` in `[0, 2π)` and `theta` in `[0, π)`.
pub(crate) fn unit_direction(rng: &mut dyn RngCore) -> Vector3 {
    let phi = TAU * uniform(rng);
    let theta = PI * uniform(rng);
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vector3::new(sin_theta * phi.cos(), cos_theta, sin_theta * phi.sin())
}
