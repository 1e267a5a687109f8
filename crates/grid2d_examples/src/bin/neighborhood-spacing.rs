use glam::Vec2;
use grid2d::prelude::*;
use grid2d_examples::{init_tracing, render_grid_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::info;

const ATTEMPTS: usize = 20_000;
const SPACING: usize = 3;

#[derive(Clone, Copy, Default, PartialEq)]
enum Cell {
    #[default]
    Empty,
    Seed,
    Halo,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = GridConfig::new(160.0, 100.0).with_cell_size(1.0, 1.0);
    let mut grid: Grid2D<Cell> = Grid2D::try_with_default(config)?;
    let mut rng = StdRng::seed_from_u64(2024);

    let extent = Vec2::new(grid.bounds().width(), grid.bounds().height());
    let mut placed = 0;
    for _ in 0..ATTEMPTS {
        let p = Vec2::new(rng.random::<f32>(), rng.random::<f32>()) * extent;
        let Some(cell) = grid.cell_at_point(p) else {
            continue;
        };
        if grid.true_for_every_neighbor(cell.row, cell.column, SPACING, |v| *v != Cell::Seed) {
            grid.set(cell.row, cell.column, Cell::Seed);
            placed += 1;
        }
    }

    let halo: Vec<CellIndex> = grid
        .cells()
        .filter(|c| grid.get(c.row, c.column) == Some(&Cell::Empty))
        .filter(|c| grid.true_for_at_least_one_neighbor(c.row, c.column, 1, |v| *v == Cell::Seed))
        .collect();
    for cell in &halo {
        grid.set(cell.row, cell.column, Cell::Halo);
    }

    let first = grid.find_first_cell(0, 0, |r, c| grid.get(r, c) == Some(&Cell::Seed));
    info!(placed, halo = halo.len(), ?first, "placed seeds");

    let render = RenderConfig::new(5);
    render_grid_to_png(&grid, &render, "neighborhood-spacing.png", |v| match v {
        Cell::Empty => [16, 16, 24],
        Cell::Seed => [250, 220, 120],
        Cell::Halo => [90, 70, 40],
    })?;
    Ok(())
}
