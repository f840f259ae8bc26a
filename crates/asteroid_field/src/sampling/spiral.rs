//! Spiral distribution: a flat disk split into twisted angular bands.
//!
//! Asteroid `i` starts on the leading edge of band `i % intervals`. Its radius is
//! drawn from the falling half of a triangular distribution, which keeps a small hole
//! free around the center and thins out towards the rim. The angular spread inside
//! the band shrinks with the radius, while `max_offset` twists the band as the
//! radius grows. Heights follow a bell shape around the field center.
use rand::Rng as RngCore;

use crate::error::Result;
use crate::field::config::FieldConfig;
use crate::sampling::shape::{powered_mean, uniform};
use crate::sampling::{require_intervals, require_radius, sector_degrees, DistributionStrategy};
use crate::vector::Vector3;

/// Banded disk around the field center.
#[derive(Debug, Clone, Copy)]
pub struct SpiralDistribution {
    /// Fraction of `max_radius` where the radius draw starts.
    pub hole_fraction: f64,
    /// Mode of the triangular radius distribution, as a fraction of `max_radius`.
    pub inner_fraction: f64,
}

impl Default for SpiralDistribution {
    fn default() -> Self {
        Self {
            hole_fraction: 0.12,
            inner_fraction: 0.2,
        }
    }
}

impl SpiralDistribution {
    /// Normalized radius for a draw in `[hole_fraction, 1)`.
    fn radius_for(&self, rnd: f64) -> f64 {
        1.0 - (1.0 - rnd) * (1.0 - rnd) / (1.0 - self.inner_fraction)
    }

    /// Position of a normalized radius between the inner fraction and the rim.
    fn band_progress(&self, radius: f64) -> f64 {
        (radius - self.inner_fraction) / (1.0 - self.inner_fraction)
    }
}

impl DistributionStrategy for SpiralDistribution {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn validate(&self, config: &FieldConfig) -> Result<()> {
        require_intervals(self.name(), config)?;
        require_radius(self.name(), config)
    }

    fn generate(&self, config: &FieldConfig, rng: &mut dyn RngCore) -> Result<Vec<Vector3>> {
        let sector = sector_degrees(config.intervals);
        let intervals = config.intervals as usize;
        let center = config.center;
        let height = config.dimension.y;

        let mut out = Vec::with_capacity(config.amount);
        for i in 0..config.amount {
            let mut phi = sector * (i % intervals) as f64;
            let rnd = uniform(rng) * (1.0 - self.hole_fraction) + self.hole_fraction;

            let radius = self.radius_for(rnd);
            let progress = self.band_progress(radius);
            phi += (1.0 - progress) * sector * config.max_width * powered_mean(rng, 2);
            phi += config.max_offset * progress;

            let radius = radius * config.max_radius;
            let (sin, cos) = phi.to_radians().sin_cos();
            let y = height * powered_mean(rng, 3) - height / 2.0 + center.y;

            out.push(Vector3::new(cos * radius + center.x, y, sin * radius + center.z));
        }

        Ok(out)
    }
}
