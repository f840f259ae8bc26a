use std::path::Path;

use asteroid_field::prelude::*;
use image::{ImageResult, Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Lowest cross opacity, used for the asteroids farthest from the viewer.
const MIN_ALPHA: f64 = 0.25;

/// Installs a formatting subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}

/// Preview settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Projection plane. `Xy` looks from the front, `Yz` from the side, `Xz` from the top.
    pub perspective: PlaneOrientation,
    /// Border around the projected field in pixels.
    pub margin: u32,
    pub pixels_per_unit: f64,
    pub background: [u8; 3],
    pub color: [u8; 3],
    /// Half length of each cross arm in pixels.
    pub cross_size: i32,
}

impl RenderConfig {
    pub fn new(perspective: PlaneOrientation) -> Self {
        Self {
            perspective,
            margin: 20,
            pixels_per_unit: 1.0,
            background: [255, 255, 255],
            color: [60, 140, 255],
            cross_size: 4,
        }
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(PlaneOrientation::Xz)
    }
}

/// Screen axes and depth for a position relative to the field's region.
///
/// Returns `(u, v, depth)` where `u`/`v` are field units from the region's corner
/// and `depth` is the normalized distance along the viewing axis.
fn project(offset: Vector3, dimension: Vector3, perspective: PlaneOrientation) -> (f64, f64, f64) {
    let half = dimension * 0.5;
    let depth = |value: f64, extent: f64| {
        if extent > 0.0 {
            ((value + extent / 2.0) / extent).clamp(0.0, 1.0)
        } else {
            1.0
        }
    };
    match perspective {
        PlaneOrientation::Xy => (
            offset.x + half.x,
            offset.y + half.y,
            depth(offset.z, dimension.z),
        ),
        PlaneOrientation::Yz => (
            offset.z + half.z,
            offset.y + half.y,
            depth(offset.x, dimension.x),
        ),
        PlaneOrientation::Xz => (
            offset.x + half.x,
            offset.z + half.z,
            depth(offset.y, dimension.y),
        ),
    }
}

fn canvas_size(view: &FieldView<'_>, config: &RenderConfig) -> (u32, u32) {
    let d = view.dimension * config.pixels_per_unit;
    let (w, h) = match config.perspective {
        PlaneOrientation::Xy => (d.x, d.y),
        PlaneOrientation::Yz => (d.z, d.y),
        PlaneOrientation::Xz => (d.x, d.z),
    };
    let m = config.margin * 2;
    (w.max(0.0).ceil() as u32 + m, h.max(0.0).ceil() as u32 + m)
}

/// Draws every asteroid as a cross, fading with depth.
pub fn render_field(view: &FieldView<'_>, config: &RenderConfig) -> RgbImage {
    let (width, height) = canvas_size(view, config);
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));
    let margin = config.margin as f64;

    for asteroid in view.asteroids {
        let offset = asteroid.position() - view.center;
        let (u, v, depth) = project(offset, view.dimension, config.perspective);
        let alpha = depth * (1.0 - MIN_ALPHA) + MIN_ALPHA;
        let x = (u * config.pixels_per_unit + margin).round() as i64;
        let y = (v * config.pixels_per_unit + margin).round() as i64;
        draw_cross(&mut img, x, y, config.cross_size, config.color, alpha);
    }

    img
}

pub fn render_field_to_png<P: AsRef<Path>>(
    view: &FieldView<'_>,
    config: &RenderConfig,
    path: P,
) -> ImageResult<()> {
    let img = render_field(view, config);
    img.save(path.as_ref())?;
    info!(
        "Wrote {}x{} preview of {} asteroids to {}.",
        img.width(),
        img.height(),
        view.asteroids.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn draw_cross(img: &mut RgbImage, x: i64, y: i64, size: i32, color: [u8; 3], alpha: f64) {
    let size = size as i64;
    for d in -size..=size {
        blend(img, x + d, y, color, alpha);
        if d != 0 {
            blend(img, x, y + d, color, alpha);
        }
    }
}

fn blend(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3], alpha: f64) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let px = img.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in px.0.iter_mut().zip(color) {
        let mixed = *dst as f64 * (1.0 - alpha) + src as f64 * alpha;
        *dst = mixed.round().clamp(0.0, 255.0) as u8;
    }
}
