//! Shared helpers for the example binaries: tracing setup and PNG output of grids.
use std::path::Path;

use grid2d::prelude::Grid2D;
use image::{ImageBuffer, Rgb as ImageRgb};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 8-bit RGB color.
pub type Rgb = [u8; 3];

/// Installs a formatting subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How a grid is turned into pixels.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Square pixel block drawn per cell.
    pub pixels_per_cell: u32,
    /// Color of the one-pixel cell border, if any.
    pub grid_lines: Option<Rgb>,
}

impl RenderConfig {
    pub fn new(pixels_per_cell: u32) -> Self {
        Self {
            pixels_per_cell: pixels_per_cell.max(1),
            grid_lines: None,
        }
    }

    pub fn with_grid_lines(mut self, color: Rgb) -> Self {
        self.grid_lines = Some(color);
        self
    }
}

/// Renders every cell as a block colored by `color` and writes a PNG to `path`.
pub fn render_grid_to_png<V>(
    grid: &Grid2D<V>,
    config: &RenderConfig,
    path: impl AsRef<Path>,
    color: impl Fn(&V) -> Rgb,
) -> anyhow::Result<()> {
    let scale = config.pixels_per_cell;
    let width = u32::try_from(grid.columns())? * scale;
    let height = u32::try_from(grid.rows())? * scale;

    let image = ImageBuffer::from_fn(width, height, |x, y| {
        let (row, column) = ((y / scale) as usize, (x / scale) as usize);
        let on_line = scale > 2 && (x % scale == 0 || y % scale == 0);
        match (config.grid_lines, on_line) {
            (Some(line), true) => ImageRgb(line),
            _ => ImageRgb(grid.get(row, column).map(&color).unwrap_or([0, 0, 0])),
        }
    });

    let path = path.as_ref();
    image.save(path)?;
    info!("wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

/// Linear blend between two colors, `t` clamped to `[0, 1]`.
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}
