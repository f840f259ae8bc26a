//! Position type used throughout field generation.
//!
//! Positions are plain [`glam::DVec3`] values. This module adds the two things the
//! field needs on top of glam: round-half-up snapping and the tab separated text form
//! used in asteroid listings.
use std::fmt;

use glam::DVec3;

/// A 3D vector in field units.
pub type Vector3 = DVec3;

/// Rounds every component to the nearest integer, halves towards positive infinity.
pub fn round_half_up(v: Vector3) -> Vector3 {
    (v + 0.5).floor()
}

/// Displays a position as `x: .. \ty: .. \tz: ..`.
#[derive(Debug, Clone, Copy)]
pub struct Coordinates(pub Vector3);

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} \ty: {} \tz: {}", self.0.x, self.0.y, self.0.z)
    }
}
