//! Generation request for an [`crate::field::AsteroidField`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::{Distribution, PlaneOrientation};
use crate::vector::Vector3;

/// Configuration for generating an asteroid field.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Number of asteroids to generate. Ignored by [`Distribution::PlaneTest`].
    pub amount: usize,
    /// Placement algorithm.
    pub distribution: Distribution,
    /// Logical center of the field.
    pub center: Vector3,
    /// Bounding box size of the field.
    pub dimension: Vector3,
    /// Outer radius for sphere and spiral placement.
    pub max_radius: f64,
    /// Voxel map names asteroids draw their storage name from.
    pub voxel_maps: Vec<String>,
    /// Number of angular bands for the spiral distributions.
    pub intervals: u32,
    /// Nominal band angle in degrees. Band width itself follows `360 / intervals`.
    pub section_angle: f64,
    /// Band spread, as a fraction of the band width (spiral) or ellipsoid width (spiral2).
    pub max_width: f64,
    /// Ellipsoid height used by spiral2.
    pub max_height: f64,
    /// Twist in degrees applied across the radius.
    pub max_offset: f64,
    /// Grid plane used by [`Distribution::PlaneTest`].
    pub plane_orientation: PlaneOrientation,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            amount: 0,
            distribution: Distribution::Sphere,
            center: Vector3::ZERO,
            dimension: Vector3::splat(6000.0),
            max_radius: 100.0,
            voxel_maps: Vec::new(),
            intervals: 5,
            section_angle: 36.0,
            max_width: 0.5,
            max_height: 0.5,
            max_offset: 0.0,
            plane_orientation: PlaneOrientation::Xy,
        }
    }
}

impl FieldConfig {
    /// Creates a new [`FieldConfig`] for `amount` asteroids.
    pub fn new(amount: usize) -> Self {
        Self {
            amount,
            ..Default::default()
        }
    }

    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Sets the distribution by configuration name; unknown names select the sphere.
    pub fn with_distribution_name(mut self, name: &str) -> Self {
        self.distribution = Distribution::from_name_or_default(name);
        self
    }

    pub fn with_center(mut self, center: Vector3) -> Self {
        self.center = center;
        self
    }

    pub fn with_dimension(mut self, dimension: Vector3) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }

    pub fn with_voxel_maps<I, S>(mut self, voxel_maps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.voxel_maps = voxel_maps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_intervals(mut self, intervals: u32) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn with_section_angle(mut self, section_angle: f64) -> Self {
        self.section_angle = section_angle;
        self
    }

    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_max_offset(mut self, max_offset: f64) -> Self {
        self.max_offset = max_offset;
        self
    }

    pub fn with_plane_orientation(mut self, orientation: PlaneOrientation) -> Self {
        self.plane_orientation = orientation;
        self
    }

    /// Validates the parameters shared by every distribution.
    ///
    /// Strategy specific requirements are checked by
    /// [`crate::sampling::DistributionStrategy::validate`].
    pub fn validate(&self) -> Result<()> {
        if !self.center.is_finite() {
            return Err(Error::InvalidConfig("center must be finite".into()));
        }
        if !self.dimension.is_finite() {
            return Err(Error::InvalidConfig("dimension must be finite".into()));
        }
        if self.dimension.x < 0.0 || self.dimension.y < 0.0 || self.dimension.z < 0.0 {
            return Err(Error::InvalidConfig(
                "dimension must be >= 0 in all components".into(),
            ));
        }
        let shape = [
            ("max_radius", self.max_radius),
            ("section_angle", self.section_angle),
            ("max_width", self.max_width),
            ("max_height", self.max_height),
            ("max_offset", self.max_offset),
        ];
        if let Some((name, _)) = shape.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfig(format!("{name} must be finite")));
        }

        Ok(())
    }
}
