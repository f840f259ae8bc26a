#![forbid(unsafe_code)]
//! asteroid_field: Procedural asteroid field generation.
//!
//! Modules:
//! - vector: the glam backed position type and half-up rounding
//! - sampling: distribution strategies and random-shape primitives
//! - field: field configuration, one-shot generation, scaling and recentering, events
//! - asteroid: generated entities and the id factory
//! - export: object builder XML for generated asteroids
//! - error: error type and result alias
pub mod asteroid;
pub mod error;
pub mod export;
pub mod field;
pub mod sampling;
pub mod vector;

/// Convenient re-exports for common types. Import with `use asteroid_field::prelude::*;`.
pub mod prelude {
    pub use crate::asteroid::{Asteroid, AsteroidFactory, ASTEROID_ID_BASE, DEFAULT_VOXEL_MAP};
    pub use crate::error::{Error, Result};
    pub use crate::export::{field_to_xml, write_field_xml};
    pub use crate::field::config::FieldConfig;
    pub use crate::field::events::{
        EventSink, FnSink, GenerationEvent, GenerationEventKind, VecSink,
    };
    pub use crate::field::{AsteroidField, FieldView};
    pub use crate::sampling::{
        BoxDistribution, Distribution, DistributionStrategy, EllipsoidDistribution,
        PlaneOrientation, PlaneTestDistribution, SkinAssignment, SphereDistribution,
        Spiral2Distribution, SpiralDistribution,
    };
    pub use crate::vector::{round_half_up, Coordinates, Vector3};
}
