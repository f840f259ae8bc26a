use asteroid_field::prelude::*;
use asteroid_field_examples::{init_tracing, write_field_xml_file};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One asteroid per voxel map, laid out for side by side inspection.
    let voxel_maps: Vec<String> = (1..=9).map(|i| format!("AsteroidTest_{i:02}")).collect();
    let config = FieldConfig::new(0)
        .with_distribution(Distribution::PlaneTest)
        .with_plane_orientation(PlaneOrientation::Xy)
        .with_voxel_maps(voxel_maps);

    let mut factory = AsteroidFactory::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mut field = AsteroidField::new(config);
    let view = field.generate(&mut factory, &mut rng)?;
    for asteroid in view.asteroids {
        info!("{}", asteroid);
    }

    write_field_xml_file(&field, "test-plane-grid.xml")?;
    Ok(())
}
