use glam::Vec2;
use grid2d::prelude::*;
use grid2d_examples::{init_tracing, render_grid_to_png, RenderConfig, Rgb};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::info;

const SEGMENTS: u8 = 12;
const STEP: f32 = 0.5;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = GridConfig::square(200.0, 4.0).with_origin(-100.0, -100.0);
    let mut grid: Grid2D<u8> = Grid2D::try_with_default(config)?;
    let mut rng = StdRng::seed_from_u64(7);

    // Endpoints may fall outside the grid; those samples are dropped.
    let bounds = grid.bounds();
    for id in 1..=SEGMENTS {
        let p1 = random_point(&mut rng, &bounds, 1.2);
        let p2 = random_point(&mut rng, &bounds, 1.2);
        let cells = grid.cells_in_segment(p1, p2, STEP);
        let crosses_existing = !grid.true_in_segment(p1, p2, STEP, |v| *v == 0);
        info!(
            id,
            samples = cells.len(),
            crosses_existing,
            "rasterizing segment {} -> {}",
            p1,
            p2
        );
        grid.set_in_segment(p1, p2, STEP, id);
    }

    let render = RenderConfig::new(6).with_grid_lines([24, 24, 24]);
    render_grid_to_png(&grid, &render, "segments-rasterize.png", color_for)?;
    Ok(())
}

fn random_point(rng: &mut StdRng, bounds: &Bounds, spread: f32) -> Vec2 {
    let center = Vec2::new(
        (bounds.left + bounds.right) * 0.5,
        (bounds.top + bounds.bottom) * 0.5,
    );
    let half = Vec2::new(bounds.width(), bounds.height()) * 0.5 * spread;
    let unit = Vec2::new(rng.random::<f32>(), rng.random::<f32>()) * 2.0 - Vec2::ONE;
    center + unit * half
}

fn color_for(id: &u8) -> Rgb {
    const PALETTE: [Rgb; 6] = [
        [230, 57, 70],
        [241, 250, 238],
        [168, 218, 220],
        [69, 123, 157],
        [244, 162, 97],
        [42, 157, 143],
    ];
    match *id {
        0 => [8, 8, 12],
        n => PALETTE[usize::from(n - 1) % PALETTE.len()],
    }
}
