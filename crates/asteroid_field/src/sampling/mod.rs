//! Distribution strategies for placing asteroids inside a field region.
//!
//! This module defines the [`DistributionStrategy`] trait, the [`Distribution`]
//! selector that maps configuration names onto concrete strategies, and the
//! random-shape primitives in [`shape`] the strategies draw from.
use std::fmt;
use std::str::FromStr;

use rand::Rng as RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::field::config::FieldConfig;
use crate::vector::Vector3;

pub mod box_uniform;
pub mod ellipsoid;
pub mod plane;
pub mod shape;
pub mod sphere;
pub mod spiral;
pub mod spiral2;

pub use box_uniform::BoxDistribution;
pub use ellipsoid::EllipsoidDistribution;
pub use plane::{PlaneOrientation, PlaneTestDistribution};
pub use sphere::SphereDistribution;
pub use spiral::SpiralDistribution;
pub use spiral2::Spiral2Distribution;

/// How voxel maps are attached to the positions a strategy produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinAssignment {
    /// Each asteroid draws a voxel map uniformly from the pool.
    Random,
    /// Position `i` takes voxel map `i`.
    Ordered,
}

/// Trait for asteroid position generation.
pub trait DistributionStrategy: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Checks the parameters this strategy divides by or loops on.
    fn validate(&self, _config: &FieldConfig) -> Result<()> {
        Ok(())
    }

    /// Produce raw positions. Rounding happens afterwards in the field.
    fn generate(&self, config: &FieldConfig, rng: &mut dyn RngCore) -> Result<Vec<Vector3>>;

    fn skin_assignment(&self) -> SkinAssignment {
        SkinAssignment::Random
    }
}

/// Built-in distribution kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distribution {
    #[cfg_attr(feature = "serde", serde(rename = "quader"))]
    Box,
    #[cfg_attr(feature = "serde", serde(rename = "ellipsoid"))]
    Ellipsoid,
    #[cfg_attr(feature = "serde", serde(rename = "spiral"))]
    Spiral,
    #[cfg_attr(feature = "serde", serde(rename = "spiral2"))]
    Spiral2,
    #[cfg_attr(feature = "serde", serde(rename = "testPlane"))]
    PlaneTest,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "sphere"))]
    Sphere,
}

impl Distribution {
    pub const ALL: [Distribution; 6] = [
        Distribution::Box,
        Distribution::Ellipsoid,
        Distribution::Spiral,
        Distribution::Spiral2,
        Distribution::PlaneTest,
        Distribution::Sphere,
    ];

    /// Configuration name of this distribution.
    pub fn name(self) -> &'static str {
        match self {
            Distribution::Box => "quader",
            Distribution::Ellipsoid => "ellipsoid",
            Distribution::Spiral => "spiral",
            Distribution::Spiral2 => "spiral2",
            Distribution::PlaneTest => "testPlane",
            Distribution::Sphere => "sphere",
        }
    }

    /// Looks up a distribution by name, falling back to [`Distribution::Sphere`].
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown distribution '{}'; using sphere.", name);
            Distribution::Sphere
        })
    }

    /// The strategy implementing this distribution.
    pub fn strategy(self) -> Box<dyn DistributionStrategy> {
        match self {
            Distribution::Box => Box::new(BoxDistribution),
            Distribution::Ellipsoid => Box::new(EllipsoidDistribution),
            Distribution::Spiral => Box::new(SpiralDistribution::default()),
            Distribution::Spiral2 => Box::new(Spiral2Distribution::default()),
            Distribution::PlaneTest => Box::new(PlaneTestDistribution::default()),
            Distribution::Sphere => Box::new(SphereDistribution),
        }
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Distribution::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| Error::UnsupportedDistribution(s.to_owned()))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width in degrees of one angular band when the circle is split into `intervals`.
pub(crate) fn sector_degrees(intervals: u32) -> f64 {
    360.0 / intervals as f64
}

pub(crate) fn require_intervals(strategy: &str, config: &FieldConfig) -> Result<()> {
    if config.intervals == 0 {
        return Err(Error::InvalidConfig(format!(
            "{strategy} requires intervals >= 1"
        )));
    }
    Ok(())
}

pub(crate) fn require_radius(strategy: &str, config: &FieldConfig) -> Result<()> {
    if !config.max_radius.is_finite() || config.max_radius < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "{strategy} requires a finite max_radius >= 0"
        )));
    }
    Ok(())
}
