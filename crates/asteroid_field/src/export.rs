//! Object builder XML for generated asteroids.
//!
//! Each asteroid becomes one `MyObjectBuilder_EntityBase` voxel map block. Positions
//! are converted from field units (km) to meters, orientation is always the identity.
use std::io;

use crate::asteroid::Asteroid;
use crate::error::Result;

/// Field units to exported position units.
pub const POSITION_SCALE: f64 = 1000.0;

/// Indentation of every block in a whole-field export.
pub const FIELD_INDENT: usize = 4;

impl Asteroid {
    /// Renders this asteroid as an entity block, every line prefixed by `indent` spaces.
    pub fn to_xml(&self, indent: usize) -> String {
        let lead = " ".repeat(indent);
        let p = self.position() * POSITION_SCALE;
        let lines = [
            "<MyObjectBuilder_EntityBase xsi:type=\"MyObjectBuilder_VoxelMap\">".to_owned(),
            "  <SubtypeName />".to_owned(),
            format!("  <EntityId>{}</EntityId>", self.id()),
            "  <PersistentFlags>CastShadows InScene</PersistentFlags>".to_owned(),
            "  <PositionAndOrientation>".to_owned(),
            format!(
                "    <Position x=\"{}\" y=\"{}\" z=\"{}\" />",
                coord(p.x),
                coord(p.y),
                coord(p.z)
            ),
            "    <Forward x=\"-0\" y=\"-0\" z=\"-1\" />".to_owned(),
            "    <Up x=\"0\" y=\"1\" z=\"0\" />".to_owned(),
            "    <Orientation>".to_owned(),
            "      <X>0</X>".to_owned(),
            "      <Y>0</Y>".to_owned(),
            "      <Z>0</Z>".to_owned(),
            "      <W>1</W>".to_owned(),
            "    </Orientation>".to_owned(),
            "  </PositionAndOrientation>".to_owned(),
            "  <ContentChanged>false</ContentChanged>".to_owned(),
            format!("  <StorageName>{}</StorageName>", self.voxel_map()),
            "</MyObjectBuilder_EntityBase>".to_owned(),
        ];

        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&lead);
            out.push_str(line);
        }
        out
    }
}

/// Negative zero prints as `0`.
fn coord(v: f64) -> f64 {
    v + 0.0
}

/// All asteroid blocks separated by blank lines.
pub fn field_to_xml(asteroids: &[Asteroid]) -> String {
    asteroids
        .iter()
        .map(|a| a.to_xml(FIELD_INDENT))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Streams [`field_to_xml`] output into `writer`.
pub fn write_field_xml<W: io::Write>(asteroids: &[Asteroid], writer: &mut W) -> Result<()> {
    for (i, asteroid) in asteroids.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n\n")?;
        }
        writer.write_all(asteroid.to_xml(FIELD_INDENT).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}
