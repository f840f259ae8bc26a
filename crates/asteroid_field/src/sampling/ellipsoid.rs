//! Ellipsoid distribution: the sphere sampler stretched to the field dimension.
use rand::Rng as RngCore;

use crate::error::{Error, Result};
use crate::field::config::FieldConfig;
use crate::sampling::shape::inverse_sqrt;
use crate::sampling::sphere::unit_direction;
use crate::sampling::DistributionStrategy;
use crate::vector::Vector3;

/// Points inside the ellipsoid inscribed in the field's bounding box.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipsoidDistribution;

impl DistributionStrategy for EllipsoidDistribution {
    fn name(&self) -> &'static str {
        "ellipsoid"
    }

    fn validate(&self, config: &FieldConfig) -> Result<()> {
        let d = config.dimension;
        if d.x <= 0.0 || d.y <= 0.0 || d.z <= 0.0 {
            return Err(Error::InvalidConfig(
                "ellipsoid requires dimension > 0 in all components".into(),
            ));
        }
        Ok(())
    }

    fn generate(&self, config: &FieldConfig, rng: &mut dyn RngCore) -> Result<Vec<Vector3>> {
        let semi_axes = config.dimension * 0.5;

        let out = (0..config.amount)
            .map(|_| {
                let scale = inverse_sqrt(rng);
                config.center + unit_direction(rng) * scale * semi_axes
            })
            .collect();

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn points_satisfy_ellipsoid_inequality() {
        let mut rng = StdRng::seed_from_u64(5);
        let center = Vector3::new(10.0, 20.0, 30.0);
        let config = FieldConfig::new(800)
            .with_center(center)
            .with_dimension(Vector3::new(400.0, 100.0, 200.0));

        let pts = EllipsoidDistribution.generate(&config, &mut rng).unwrap();
        assert_eq!(pts.len(), 800);
        for p in pts {
            let d = p - center;
            let q = (d.x / 200.0).powi(2) + (d.y / 50.0).powi(2) + (d.z / 100.0).powi(2);
            assert!(q <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn rejects_flat_dimension() {
        let config = FieldConfig::new(1).with_dimension(Vector3::new(10.0, 0.0, 10.0));
        assert!(matches!(
            EllipsoidDistribution.validate(&config),
            Err(Error::InvalidConfig(_))
        ));
    }
}
