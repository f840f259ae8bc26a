use asteroid_field::prelude::*;
use asteroid_field_examples::{
    init_tracing, render_field_to_png, write_field_xml_file, RenderConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Five twisted bands in a 1200 km disk, 60 km thick.
    let config = FieldConfig::new(1500)
        .with_distribution(Distribution::Spiral)
        .with_dimension(Vector3::new(1200.0, 60.0, 1200.0))
        .with_max_radius(600.0)
        .with_intervals(5)
        .with_max_width(0.4)
        .with_max_offset(60.0)
        .with_voxel_maps(["AsteroidSmall_01", "AsteroidSmall_02"]);

    let mut factory = AsteroidFactory::new();
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = AsteroidField::new(config);
    field.generate(&mut factory, &mut rng)?;

    let rc = RenderConfig::new(PlaneOrientation::Xz).with_pixels_per_unit(0.75);
    render_field_to_png(&field.view(), &rc, "spiral-bands-top.png")?;

    // Export in a world where the field sits 5000 km out along x.
    field.recenter(Vector3::new(5000.0, 0.0, 0.0))?;
    write_field_xml_file(&field, "spiral-bands.xml")?;
    Ok(())
}
