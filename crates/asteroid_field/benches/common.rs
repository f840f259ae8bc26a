use std::time::Duration;

use asteroid_field::prelude::*;
use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Asteroid counts every bench group runs with.
pub const AMOUNTS: [usize; 3] = [100, 1_000, 10_000];

pub const VOXEL_MAPS: [&str; 3] = ["rock_a", "rock_b", "rock_c"];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

/// Wide enough for every banded strategy to validate at the default dimension.
pub fn field_config(amount: usize, distribution: Distribution) -> FieldConfig {
    FieldConfig::new(amount)
        .with_distribution(distribution)
        .with_max_radius(3000.0)
        .with_max_width(40.0)
        .with_max_height(20.0)
        .with_voxel_maps(VOXEL_MAPS)
}

/// Deterministic generator per bench group and amount.
pub fn seeded_rng(group_seed: u64, amount: usize) -> StdRng {
    StdRng::seed_from_u64(group_seed ^ amount as u64)
}

pub fn asteroid_throughput(amount: usize) -> Throughput {
    Throughput::Elements(amount.max(1) as u64)
}
