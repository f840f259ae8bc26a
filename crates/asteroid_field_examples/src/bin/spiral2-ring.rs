use asteroid_field::prelude::*;
use asteroid_field_examples::{init_tracing, render_field_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Ellipsoidal cross-section 30 km high and 80 km wide, swept into six bands.
    let config = FieldConfig::new(1200)
        .with_distribution(Distribution::Spiral2)
        .with_dimension(Vector3::new(2000.0, 100.0, 2000.0))
        .with_max_height(30.0)
        .with_max_width(80.0)
        .with_intervals(6)
        .with_max_offset(25.0);

    let mut factory = AsteroidFactory::new();
    let mut rng = StdRng::seed_from_u64(23);
    let mut field = AsteroidField::new(config);
    let view = field.generate(&mut factory, &mut rng)?;

    let rc = RenderConfig::new(PlaneOrientation::Xz).with_pixels_per_unit(0.5);
    render_field_to_png(&view, &rc, "spiral2-ring-top.png")?;
    Ok(())
}
