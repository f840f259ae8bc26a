//! Generated asteroid entities and the factory that numbers them.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::vector::{Coordinates, Vector3};

/// Offset added to every entity id.
pub const ASTEROID_ID_BASE: u64 = 42_000;

/// Voxel map used when a field has no voxel maps configured.
pub const DEFAULT_VOXEL_MAP: &str = "custom_asteroid";

/// A single placed asteroid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Asteroid {
    id: u64,
    position: Vector3,
    voxel_map: String,
}

impl Asteroid {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    /// Storage name of the voxel map this asteroid references.
    pub fn voxel_map(&self) -> &str {
        &self.voxel_map
    }

    pub(crate) fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }
}

impl fmt::Display for Asteroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file: {}_{}.vx: \t{}",
            self.voxel_map,
            self.id,
            Coordinates(self.position)
        )
    }
}

/// Hands out strictly increasing asteroid ids.
///
/// One factory is meant to live as long as the ids it issued must stay unique,
/// typically one per exported world.
#[derive(Debug, Default)]
pub struct AsteroidFactory {
    created: u64,
}

impl AsteroidFactory {
    pub fn new() -> Self {
        Self { created: 0 }
    }

    /// Creates an asteroid with the next id.
    pub fn create(&mut self, position: Vector3, voxel_map: impl Into<String>) -> Asteroid {
        let id = self.next_id();
        self.created += 1;
        Asteroid {
            id,
            position,
            voxel_map: voxel_map.into(),
        }
    }

    /// Id the next [`AsteroidFactory::create`] call will assign.
    pub fn next_id(&self) -> u64 {
        ASTEROID_ID_BASE + self.created
    }

    /// Number of asteroids created since construction or the last reset.
    pub fn created(&self) -> u64 {
        self.created
    }

    pub fn reset(&mut self) {
        self.created = 0;
    }
}
