use asteroid_field::prelude::*;
use asteroid_field_examples::{
    init_tracing, render_field_to_png, write_field_xml_file, RenderConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A compact sphere of 400 asteroids, 250 km across.
    let config = FieldConfig::new(400)
        .with_distribution(Distribution::Sphere)
        .with_dimension(Vector3::splat(500.0))
        .with_max_radius(250.0)
        .with_voxel_maps(["AsteroidSmall_01", "AsteroidSmall_02", "AsteroidLarge_01"]);

    let mut factory = AsteroidFactory::new();
    let mut rng = StdRng::seed_from_u64(2025);
    let mut field = AsteroidField::new(config);
    let view = field.generate(&mut factory, &mut rng)?;

    for perspective in [PlaneOrientation::Xy, PlaneOrientation::Xz] {
        let rc = RenderConfig::new(perspective).with_background([26, 26, 26]);
        let out = format!("sphere-basic-{perspective:?}.png").to_lowercase();
        render_field_to_png(&view, &rc, out)?;
    }

    write_field_xml_file(&field, "sphere-basic.xml")?;
    Ok(())
}
