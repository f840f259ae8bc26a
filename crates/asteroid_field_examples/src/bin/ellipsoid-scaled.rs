use asteroid_field::prelude::*;
use asteroid_field_examples::{init_tracing, render_field_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = FieldConfig::new(600)
        .with_distribution(Distribution::Ellipsoid)
        .with_dimension(Vector3::new(800.0, 200.0, 400.0));

    let mut factory = AsteroidFactory::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = AsteroidField::new(config);
    field.generate(&mut factory, &mut rng)?;

    let rc = RenderConfig::new(PlaneOrientation::Xy).with_pixels_per_unit(0.5);
    render_field_to_png(&field.view(), &rc, "ellipsoid-unscaled.png")?;

    // Squash vertically, keep the footprint.
    field.scale_by(Vector3::new(1.0, 0.5, 1.0))?;
    render_field_to_png(&field.view(), &rc, "ellipsoid-squashed.png")?;
    Ok(())
}
