//! Random-shape primitives used to bias asteroid placement.
//!
//! Every function draws from the supplied RNG and has no other state:
//! - [uniform]: one draw in `[0, 1)`.
//! - [powered_mean]: mean of `k` draws, approaching a bell shape around `0.5` as `k` grows.
//! - [squared_power]: one draw squared repeatedly, pulling values towards `0`.
//! - [inverse_sqrt]: square root of a draw, the area-uniform radius for a unit disk.
//! - [weighted_index]: discrete tier selection from threshold cut points.
//! - [random_index]: uniform integer below a bound.
use rand::Rng as RngCore;

/// Generate a random float in the range [0, 1).
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

#[inline]
pub fn uniform(rng: &mut dyn RngCore) -> f64 {
    rand01(rng)
}

/// Average of `k` uniform draws. `k == 0` is treated as a single draw.
pub fn powered_mean(rng: &mut dyn RngCore, k: u32) -> f64 {
    let k = k.max(1);
    let sum: f64 = (0..k).map(|_| rand01(rng)).sum();
    sum / k as f64
}

/// One uniform draw squared `pow - 1` times.
pub fn squared_power(rng: &mut dyn RngCore, pow: u32) -> f64 {
    let mut value = rand01(rng);
    for _ in 1..pow {
        value *= value;
    }
    value
}

#[inline]
pub fn inverse_sqrt(rng: &mut dyn RngCore) -> f64 {
    rand01(rng).sqrt()
}

/// Draws once and returns `thresholds.len() - i` for the first threshold `i`
/// exceeding the draw, or `1` when none does.
pub fn weighted_index(rng: &mut dyn RngCore, thresholds: &[f64]) -> usize {
    let roll = rand01(rng);
    thresholds
        .iter()
        .position(|&t| t > roll)
        .map_or(1, |i| thresholds.len() - i)
}

/// Uniform integer in `[0, max(bound, 1))`.
pub fn random_index(rng: &mut dyn RngCore, bound: usize) -> usize {
    let bound = bound.max(1);
    ((bound as f64 * rand01(rng)).floor() as usize).min(bound - 1)
}
