#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_field, render_field_to_png, RenderConfig};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use asteroid_field::prelude::*;
use tracing::info;

/// Writes the object builder XML of `field` next to the preview images.
pub fn write_field_xml_file<P: AsRef<Path>>(field: &AsteroidField, path: P) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    field.write_xml(&mut writer)?;
    info!(
        "Wrote {} asteroids to {}.",
        field.asteroids().len(),
        path.as_ref().display()
    );
    Ok(())
}
