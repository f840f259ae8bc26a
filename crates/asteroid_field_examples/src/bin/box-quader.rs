use asteroid_field::prelude::*;
use asteroid_field_examples::{init_tracing, render_field_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // The box distribution ignores the center; recenter afterwards to move it.
    let dimension = Vector3::new(600.0, 300.0, 400.0);
    let config = FieldConfig::new(800)
        .with_distribution_name("quader")
        .with_dimension(dimension);

    let mut factory = AsteroidFactory::new();
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = AsteroidField::new(config);
    field.generate(&mut factory, &mut rng)?;
    field.recenter(dimension * 0.5)?;

    for perspective in [PlaneOrientation::Xy, PlaneOrientation::Yz, PlaneOrientation::Xz] {
        let rc = RenderConfig::new(perspective);
        let out = format!("box-quader-{perspective:?}.png").to_lowercase();
        render_field_to_png(&field.view(), &rc, out)?;
    }

    Ok(())
}
