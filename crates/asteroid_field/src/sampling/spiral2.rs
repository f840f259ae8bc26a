//! Spiral2 distribution: an ellipsoidal ring cross-section swept into bands.
//!
//! Each asteroid is rejection sampled inside an ellipsoid with semi-axes
//! `(dimension.x / 4 - ring_radius, max_height / 2, max_width / 2)`, pushed outwards
//! along x so the cross-section starts at `ring_radius`, and rotated about the y
//! axis into band `i % intervals`. Points near the ring's inner edge are twisted
//! further by `max_offset`.
use glam::DMat3;
use rand::Rng as RngCore;

use crate::error::{Error, Result};
use crate::field::config::FieldConfig;
use crate::sampling::shape::uniform;
use crate::sampling::{require_intervals, sector_degrees, DistributionStrategy};
use crate::vector::Vector3;

pub const DEFAULT_MAX_REJECTION_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, Copy)]
pub struct Spiral2Distribution {
    /// Distance between the y axis and the inner edge of the ring.
    pub ring_radius: f64,
    /// Candidate draws allowed per asteroid before giving up.
    pub max_rejection_attempts: usize,
}

impl Default for Spiral2Distribution {
    fn default() -> Self {
        Self {
            ring_radius: 20.0,
            max_rejection_attempts: DEFAULT_MAX_REJECTION_ATTEMPTS,
        }
    }
}

impl Spiral2Distribution {
    pub fn with_max_rejection_attempts(mut self, attempts: usize) -> Self {
        self.max_rejection_attempts = attempts;
        self
    }

    fn semi_axes(&self, config: &FieldConfig) -> Vector3 {
        Vector3::new(
            config.dimension.x / 4.0 - self.ring_radius,
            config.max_height / 2.0,
            config.max_width / 2.0,
        )
    }
}

impl DistributionStrategy for Spiral2Distribution {
    fn name(&self) -> &'static str {
        "spiral2"
    }

    fn validate(&self, config: &FieldConfig) -> Result<()> {
        require_intervals(self.name(), config)?;
        let axes = self.semi_axes(config);
        if axes.x <= 0.0 || axes.y <= 0.0 || axes.z <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "spiral2 ellipsoid is degenerate (semi-axes {axes}); \
                 dimension.x must exceed {} and max_width/max_height must be > 0",
                4.0 * self.ring_radius
            )));
        }
        Ok(())
    }

    fn generate(&self, config: &FieldConfig, rng: &mut dyn RngCore) -> Result<Vec<Vector3>> {
        let sector = sector_degrees(config.intervals);
        let intervals = config.intervals as usize;
        let axes = self.semi_axes(config);

        let mut out = Vec::with_capacity(config.amount);
        for i in 0..config.amount {
            let mut p = sample_in_ellipsoid(axes, self.max_rejection_attempts, rng)?;
            p.x += axes.x + self.ring_radius;

            let distance = (p.x * p.x + p.y * p.y).sqrt() / 2.0 / axes.x;
            let phi = sector * (i % intervals) as f64 + config.max_offset * (1.0 - distance);

            let rotated = DMat3::from_rotation_y(-phi.to_radians()) * p;
            out.push(rotated);
        }

        Ok(out)
    }
}

/// Rejection samples a point inside the origin-centered ellipsoid with the given semi-axes.
pub(crate) fn sample_in_ellipsoid(
    axes: Vector3,
    max_attempts: usize,
    rng: &mut dyn RngCore,
) -> Result<Vector3> {
    let squared = axes * axes;
    for _ in 0..max_attempts {
        let candidate = Vector3::new(
            uniform(rng) * axes.x * 2.0 - axes.x,
            uniform(rng) * axes.y * 2.0 - axes.y,
            uniform(rng) * axes.z * 2.0 - axes.z,
        );
        let q = candidate.x * candidate.x / squared.x
            + candidate.y * candidate.y / squared.y
            + candidate.z * candidate.z / squared.z;
        if q <= 1.0 {
            return Ok(candidate);
        }
    }

    Err(Error::NotConverging {
        strategy: "spiral2",
        attempts: max_attempts,
    })
}
