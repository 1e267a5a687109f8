use std::time::Duration;

use criterion::{Criterion, Throughput};
use grid2d::prelude::{Grid2D, GridConfig};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

/// Edge lengths, in cells, of the square grids benchmarked.
pub const GRID_SIDES: [usize; 3] = [64, 256, 1024];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Square grid of `side x side` unit cells, filled with a deterministic ramp.
pub fn ramp_grid(side: usize) -> Grid2D<f32> {
    let extent = side as f32;
    let mut grid = Grid2D::try_new(GridConfig::square(extent, 1.0), 0.0).expect("valid grid");
    grid.fill(|row, column| ((row * 31 + column * 17) % 101) as f32 / 100.0);
    grid
}
