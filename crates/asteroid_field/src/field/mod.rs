//! Asteroid fields: configuration, one-shot generation, and whole-field transforms.
//!
//! A field is constructed from a [`config::FieldConfig`] and holds no asteroids until
//! [`AsteroidField::generate`] runs its distribution strategy. Generation happens at
//! most once; later calls hand back the cached asteroids. A failed generation leaves
//! the field untouched and consumes no entity ids.
use std::io;

use rand::Rng as RngCore;
use tracing::{debug, info, warn};

use crate::asteroid::{Asteroid, AsteroidFactory, DEFAULT_VOXEL_MAP};
use crate::error::{Error, Result};
use crate::export::{field_to_xml, write_field_xml};
use crate::sampling::shape::random_index;
use crate::sampling::{DistributionStrategy, SkinAssignment};
use crate::vector::{round_half_up, Vector3};

pub mod config;
pub mod events;

use config::FieldConfig;
use events::{EventSink, GenerationEvent, GenerationEventKind};

/// Borrowed view of a field's asteroids and region.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub asteroids: &'a [Asteroid],
    pub center: Vector3,
    pub dimension: Vector3,
}

/// A configured asteroid field.
pub struct AsteroidField {
    config: FieldConfig,
    strategy: Box<dyn DistributionStrategy>,
    asteroids: Option<Vec<Asteroid>>,
}

impl AsteroidField {
    /// Creates a field using the strategy of `config.distribution`.
    pub fn new(config: FieldConfig) -> Self {
        let strategy = config.distribution.strategy();
        Self::with_strategy(config, strategy)
    }

    /// Creates a field driven by a custom strategy. `config.distribution` is kept for
    /// reporting only.
    pub fn with_strategy(config: FieldConfig, strategy: Box<dyn DistributionStrategy>) -> Self {
        Self {
            config,
            strategy,
            asteroids: None,
        }
    }

    /// Creates a field driven by a concrete strategy.
    pub fn new_with<S: DistributionStrategy + 'static>(config: FieldConfig, strategy: S) -> Self {
        Self::with_strategy(config, Box::new(strategy))
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn is_generated(&self) -> bool {
        self.asteroids.is_some()
    }

    /// Generates the asteroids on first call, returns the cached field afterwards.
    pub fn generate<R: RngCore>(
        &mut self,
        factory: &mut AsteroidFactory,
        rng: &mut R,
    ) -> Result<FieldView<'_>> {
        self.generate_with_events(factory, rng, &mut ())
    }

    pub fn generate_with_events<R: RngCore>(
        &mut self,
        factory: &mut AsteroidFactory,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<FieldView<'_>> {
        if let Some(existing) = &self.asteroids {
            debug!("Field already generated; reusing {} asteroids.", existing.len());
            if sink.wants(GenerationEventKind::CachedResultReused) {
                sink.send(GenerationEvent::CachedResultReused {
                    count: existing.len(),
                });
            }
            return Ok(self.view());
        }

        let asteroids = build_asteroids(&self.config, self.strategy.as_ref(), factory, rng, sink)?;
        self.asteroids = Some(asteroids);
        Ok(self.view())
    }

    pub fn view(&self) -> FieldView<'_> {
        FieldView {
            asteroids: self.asteroids(),
            center: self.config.center,
            dimension: self.config.dimension,
        }
    }

    /// Generated asteroids, empty before generation.
    pub fn asteroids(&self) -> &[Asteroid] {
        self.asteroids.as_deref().unwrap_or(&[])
    }

    pub fn into_asteroids(self) -> Vec<Asteroid> {
        self.asteroids.unwrap_or_default()
    }

    pub fn center(&self) -> Vector3 {
        self.config.center
    }

    pub fn dimension(&self) -> Vector3 {
        self.config.dimension
    }

    /// Scales every asteroid's offset from the field center by `factor`.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        self.scale_by(Vector3::splat(factor))
    }

    /// Scales every asteroid's offset from the field center componentwise.
    ///
    /// Fails without moving anything if `factor` or any scaled position is not finite.
    pub fn scale_by(&mut self, factor: Vector3) -> Result<()> {
        if !factor.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "scale factor must be finite, got {factor}"
            )));
        }
        let center = self.config.center;
        debug!("Scaling field around {} by {}.", center, factor);
        self.move_asteroids("scaling", |p| (p - center) * factor + center)
    }

    /// Moves the field center, carrying every asteroid along.
    ///
    /// Fails without moving anything if `center` or any moved position is not finite.
    pub fn recenter(&mut self, center: Vector3) -> Result<()> {
        if !center.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "field center must be finite, got {center}"
            )));
        }
        let delta = center - self.config.center;
        debug!("Recentering field to {}.", center);
        self.move_asteroids("recentering", |p| p + delta)?;
        self.config.center = center;
        Ok(())
    }

    fn move_asteroids(&mut self, action: &str, f: impl Fn(Vector3) -> Vector3) -> Result<()> {
        let Some(asteroids) = self.asteroids.as_mut() else {
            return Ok(());
        };
        let moved: Vec<Vector3> = asteroids.iter().map(|a| f(a.position())).collect();
        if let Some(i) = moved.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "{action} moves asteroid {} to a non-finite position",
                asteroids[i].id()
            )));
        }
        for (asteroid, position) in asteroids.iter_mut().zip(moved) {
            asteroid.set_position(position);
        }
        Ok(())
    }

    /// Object builder XML for every asteroid.
    pub fn to_xml(&self) -> String {
        field_to_xml(self.asteroids())
    }

    pub fn write_xml<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        write_field_xml(self.asteroids(), writer)
    }
}

fn build_asteroids(
    config: &FieldConfig,
    strategy: &dyn DistributionStrategy,
    factory: &mut AsteroidFactory,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> Result<Vec<Asteroid>> {
    let name = strategy.name();
    config.validate()?;
    strategy.validate(config)?;

    info!(
        "Generating field: strategy '{}' | amount: {}.",
        name, config.amount
    );
    if sink.wants(GenerationEventKind::GenerationStarted) {
        sink.send(GenerationEvent::GenerationStarted {
            strategy: name,
            distribution: config.distribution,
            amount: config.amount,
        });
    }

    let assignment = strategy.skin_assignment();
    match assignment {
        SkinAssignment::Ordered if config.amount != config.voxel_maps.len() => {
            let message = format!(
                "Amount {} ignored; placing one asteroid per voxel map ({})",
                config.amount,
                config.voxel_maps.len()
            );
            emit_warning(sink, name, message);
        }
        SkinAssignment::Random if config.voxel_maps.is_empty() && config.amount > 0 => {
            let message = format!("No voxel maps configured; using '{DEFAULT_VOXEL_MAP}'");
            emit_warning(sink, name, message);
        }
        _ => {}
    }

    let positions = strategy.generate(config, rng)?;
    if let Some(i) = positions.iter().position(|p| !p.is_finite()) {
        return Err(Error::InvalidConfig(format!(
            "{name} produced a non-finite position at index {i}"
        )));
    }
    if assignment == SkinAssignment::Ordered && positions.len() != config.voxel_maps.len() {
        return Err(Error::InvalidConfig(format!(
            "{name} produced {} positions for {} voxel maps",
            positions.len(),
            config.voxel_maps.len()
        )));
    }

    let mut asteroids = Vec::with_capacity(positions.len());
    for (i, position) in positions.into_iter().enumerate() {
        let voxel_map = match assignment {
            SkinAssignment::Random => pick_voxel_map(&config.voxel_maps, rng),
            SkinAssignment::Ordered => config.voxel_maps[i].as_str(),
        };
        let asteroid = factory.create(round_half_up(position), voxel_map);
        if sink.wants(GenerationEventKind::AsteroidCreated) {
            sink.send(GenerationEvent::AsteroidCreated {
                id: asteroid.id(),
                position: asteroid.position(),
                voxel_map: asteroid.voxel_map().to_owned(),
            });
        }
        asteroids.push(asteroid);
    }

    info!("Generated {} asteroids with '{}'.", asteroids.len(), name);
    if sink.wants(GenerationEventKind::GenerationFinished) {
        sink.send(GenerationEvent::GenerationFinished {
            count: asteroids.len(),
        });
    }

    Ok(asteroids)
}

fn emit_warning(sink: &mut dyn EventSink, context: &str, message: String) {
    warn!("{}: {}.", context, message);
    if sink.wants(GenerationEventKind::Warning) {
        sink.send(GenerationEvent::Warning {
            context: context.to_owned(),
            message,
        });
    }
}

/// Uniform pick from the pool, or [`DEFAULT_VOXEL_MAP`] when it is empty.
pub(crate) fn pick_voxel_map<'a>(voxel_maps: &'a [String], rng: &mut dyn RngCore) -> &'a str {
    if voxel_maps.is_empty() {
        DEFAULT_VOXEL_MAP
    } else {
        voxel_maps[random_index(rng, voxel_maps.len())].as_str()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::asteroid::ASTEROID_ID_BASE;
    use crate::field::events::VecSink;
    use crate::sampling::{Distribution, Spiral2Distribution};

    fn sphere_config() -> FieldConfig {
        FieldConfig::new(10)
            .with_distribution(Distribution::Sphere)
            .with_dimension(Vector3::splat(100.0))
            .with_max_radius(50.0)
    }

    fn is_integral(p: Vector3) -> bool {
        p.to_array().iter().all(|c| c.fract() == 0.0)
    }

    #[test]
    fn sphere_field_is_rounded_and_within_radius() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut factory = AsteroidFactory::new();
        let mut field = AsteroidField::new(sphere_config());

        let view = field.generate(&mut factory, &mut rng).unwrap();
        assert_eq!(view.asteroids.len(), 10);
        assert_eq!(view.center, Vector3::ZERO);
        assert_eq!(view.dimension, Vector3::splat(100.0));
        let tolerance = 3f64.sqrt() * 0.5;
        for a in view.asteroids {
            assert!(is_integral(a.position()));
            assert!(a.position().length() <= 50.0 + tolerance);
        }
    }

    #[test]
    fn every_random_strategy_produces_the_requested_amount() {
        for distribution in Distribution::ALL {
            if distribution == Distribution::PlaneTest {
                continue;
            }
            let mut rng = StdRng::seed_from_u64(7);
            let mut factory = AsteroidFactory::new();
            let config = FieldConfig::new(64)
                .with_distribution(distribution)
                .with_voxel_maps(["a", "b", "c"]);
            let mut field = AsteroidField::new(config);

            let view = field.generate(&mut factory, &mut rng).unwrap();
            assert_eq!(view.asteroids.len(), 64, "{distribution}");
            assert!(view.asteroids.iter().all(|a| is_integral(a.position())));
            assert!(view
                .asteroids
                .iter()
                .all(|a| ["a", "b", "c"].contains(&a.voxel_map())));
        }
    }

    #[test]
    fn plane_test_places_one_asteroid_per_voxel_map_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut factory = AsteroidFactory::new();
        let config = FieldConfig::new(99)
            .with_distribution_name("testPlane")
            .with_voxel_maps(["a", "b", "c", "d"]);
        let mut field = AsteroidField::new(config);

        let mut sink = VecSink::new();
        let view = field
            .generate_with_events(&mut factory, &mut rng, &mut sink)
            .unwrap();
        let tags: Vec<_> = view.asteroids.iter().map(|a| a.voxel_map()).collect();
        assert_eq!(tags, vec!["a", "b", "c", "d"]);
        assert_eq!(view.asteroids[3].position(), Vector3::new(0.0, -250.0, 0.0));
        assert_eq!(sink.count(GenerationEventKind::Warning), 1);
    }

    #[test]
    fn empty_pool_uses_default_voxel_map() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut factory = AsteroidFactory::new();
        let mut field = AsteroidField::new(sphere_config());
        let view = field.generate(&mut factory, &mut rng).unwrap();
        assert!(view
            .asteroids
            .iter()
            .all(|a| a.voxel_map() == DEFAULT_VOXEL_MAP));
    }

    #[test]
    fn ids_increase_across_fields_sharing_a_factory() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut factory = AsteroidFactory::new();
        let mut first = AsteroidField::new(sphere_config());
        let mut second = AsteroidField::new(sphere_config().with_distribution(Distribution::Box));
        first.generate(&mut factory, &mut rng).unwrap();
        second.generate(&mut factory, &mut rng).unwrap();

        let ids: Vec<u64> = first
            .asteroids()
            .iter()
            .chain(second.asteroids())
            .map(Asteroid::id)
            .collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(ids[0], ASTEROID_ID_BASE);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn second_generate_returns_cached_field() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut factory = AsteroidFactory::new();
        let mut field = AsteroidField::new(sphere_config());
        assert!(!field.is_generated());
        assert!(field.asteroids().is_empty());

        let first: Vec<Asteroid> = field
            .generate(&mut factory, &mut rng)
            .unwrap()
            .asteroids
            .to_vec();
        let mut sink = VecSink::new();
        let again = field
            .generate_with_events(&mut factory, &mut rng, &mut sink)
            .unwrap();

        assert_eq!(again.asteroids, first.as_slice());
        assert_eq!(factory.created(), 10);
        assert_eq!(sink.count(GenerationEventKind::CachedResultReused), 1);
        assert_eq!(sink.count(GenerationEventKind::AsteroidCreated), 0);
    }

    #[test]
    fn failed_generation_leaves_field_and_factory_untouched() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut factory = AsteroidFactory::new();

        let degenerate = FieldConfig::new(10)
            .with_distribution(Distribution::Spiral2)
            .with_dimension(Vector3::splat(40.0));
        let mut field = AsteroidField::new(degenerate);
        assert!(matches!(
            field.generate(&mut factory, &mut rng),
            Err(Error::InvalidConfig(_))
        ));
        assert!(!field.is_generated());

        let config = FieldConfig::new(10).with_distribution(Distribution::Spiral2);
        let mut stuck = AsteroidField::new_with(
            config,
            Spiral2Distribution::default().with_max_rejection_attempts(0),
        );
        assert!(matches!(
            stuck.generate(&mut factory, &mut rng),
            Err(Error::NotConverging { .. })
        ));
        assert!(!stuck.is_generated());
        assert_eq!(factory.created(), 0);
    }

    #[test]
    fn events_trace_a_full_generation() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut factory = AsteroidFactory::new();
        let mut field = AsteroidField::new(sphere_config().with_voxel_maps(["rock"]));
        let mut sink = VecSink::new();
        field
            .generate_with_events(&mut factory, &mut rng, &mut sink)
            .unwrap();

        let events = sink.into_inner();
        assert!(matches!(
            events.first(),
            Some(GenerationEvent::GenerationStarted {
                strategy: "sphere",
                amount: 10,
                ..
            })
        ));
        assert!(matches!(
            events.last(),
            Some(GenerationEvent::GenerationFinished { count: 10 })
        ));
        let created = events
            .iter()
            .filter(|e| matches!(e, GenerationEvent::AsteroidCreated { .. }))
            .count();
        assert_eq!(created, 10);
    }

    #[test]
    fn unit_scale_keeps_positions() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut factory = AsteroidFactory::new();
        let mut field =
            AsteroidField::new(sphere_config().with_center(Vector3::new(10.0, 20.0, 30.0)));
        field.generate(&mut factory, &mut rng).unwrap();

        let before = field.asteroids().to_vec();
        field.scale(1.0).unwrap();
        assert_eq!(field.asteroids(), before.as_slice());
    }

    #[test]
    fn scale_stretches_offsets_from_center() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut factory = AsteroidFactory::new();
        let center = Vector3::new(10.0, 20.0, 30.0);
        let mut field = AsteroidField::new(sphere_config().with_center(center));
        field.generate(&mut factory, &mut rng).unwrap();
        let before = field.asteroids().to_vec();

        field.scale(2.0).unwrap();
        for (a, b) in field.asteroids().iter().zip(&before) {
            let expected = (b.position() - center) * 2.0 + center;
            assert!(a.position().distance(expected) < 1e-9);
            assert_eq!(a.id(), b.id());
        }

        field.scale_by(Vector3::new(0.5, 1.0, 0.0)).unwrap();
        for (a, b) in field.asteroids().iter().zip(&before) {
            let offset = b.position() - center;
            let expected = Vector3::new(offset.x, offset.y * 2.0, 0.0) + center;
            assert!(a.position().distance(expected) < 1e-9);
        }
    }

    #[test]
    fn recenter_moves_asteroids_and_round_trips() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut factory = AsteroidFactory::new();
        let mut field = AsteroidField::new(sphere_config());
        field.generate(&mut factory, &mut rng).unwrap();
        let before = field.asteroids().to_vec();

        let target = Vector3::new(1000.0, -500.0, 250.0);
        field.recenter(target).unwrap();
        assert_eq!(field.center(), target);
        assert_eq!(field.view().center, target);
        for (a, b) in field.asteroids().iter().zip(&before) {
            assert_eq!(a.position(), b.position() + target);
        }

        field.recenter(Vector3::ZERO).unwrap();
        assert_eq!(field.asteroids(), before.as_slice());
    }

    #[test]
    fn recenter_before_generation_moves_the_region() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut factory = AsteroidFactory::new();
        let mut field = AsteroidField::new(sphere_config());
        let target = Vector3::new(500.0, 0.0, 0.0);
        field.recenter(target).unwrap();

        let view = field.generate(&mut factory, &mut rng).unwrap();
        let tolerance = 3f64.sqrt() * 0.5;
        assert!(view
            .asteroids
            .iter()
            .all(|a| a.position().distance(target) <= 50.0 + tolerance));
    }

    #[test]
    fn non_finite_transforms_are_rejected_without_moving_anything() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut factory = AsteroidFactory::new();
        let mut config = sphere_config();
        config.amount = 5;
        let mut field = AsteroidField::new(config);
        field.generate(&mut factory, &mut rng).unwrap();
        let before = field.asteroids().to_vec();

        assert!(matches!(
            field.scale(f64::INFINITY),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            field.scale_by(Vector3::new(1.0, f64::NAN, 1.0)),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            field.recenter(Vector3::new(f64::NAN, 0.0, 0.0)),
            Err(Error::InvalidConfig(_))
        ));
        // Finite but overflowing.
        assert!(matches!(field.scale(f64::MAX), Err(Error::InvalidConfig(_))));

        assert_eq!(field.asteroids(), before.as_slice());
        assert_eq!(field.center(), Vector3::ZERO);
        assert!(field.asteroids().iter().all(|a| a.position().is_finite()));
    }

    #[test]
    fn xml_export_covers_every_asteroid() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut factory = AsteroidFactory::new();
        let mut field = AsteroidField::new(sphere_config());
        assert!(field.to_xml().is_empty());
        field.generate(&mut factory, &mut rng).unwrap();

        let xml = field.to_xml();
        assert_eq!(xml.matches("<EntityId>").count(), 10);

        let mut buf = Vec::new();
        field.write_xml(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), xml);
    }
}
