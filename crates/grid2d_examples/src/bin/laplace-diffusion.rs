use grid2d::prelude::*;
use grid2d_examples::{init_tracing, lerp_rgb, render_grid_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::info;

const ITERATIONS: usize = 200;
const RATE: f32 = 0.9;
const HOT_SPOTS: usize = 24;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = GridConfig::square(128.0, 1.0);
    let mut current: Grid2D<f32> = Grid2D::try_with_default(config)?;
    let mut next = current.clone();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..HOT_SPOTS {
        let row = (rng.random::<f32>() * current.rows() as f32) as usize;
        let column = (rng.random::<f32>() * current.columns() as f32) as usize;
        for cell in current.neighborhood(row, column, 2).collect::<Vec<_>>() {
            current.set(cell.row, cell.column, 1.0);
        }
    }

    for _ in 0..ITERATIONS {
        next.fill(|row, column| {
            let value = current.get(row, column).copied().unwrap_or_default();
            let laplace = current.laplace_3x3(row, column, &LAPLACE_KERNEL, |v| *v);
            (value + RATE * laplace).clamp(0.0, 1.0)
        });
        std::mem::swap(&mut current, &mut next);
    }

    let total: f32 = current.as_slice().iter().sum();
    info!(iterations = ITERATIONS, total, "diffusion finished");

    let render = RenderConfig::new(4);
    render_grid_to_png(&current, &render, "laplace-diffusion.png", |v| {
        lerp_rgb([10, 12, 40], [255, 190, 60], v.sqrt())
    })?;
    Ok(())
}
