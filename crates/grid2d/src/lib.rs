#![forbid(unsafe_code)]
//! grid2d: a generic 2D cell grid mapped onto a continuous coordinate space.
//!
//! Building block for generative algorithms such as flow fields and line-growth systems.
//!
//! Modules:
//! - config: construction parameters ([`GridConfig`](config::GridConfig)) with defaults and validation
//! - grid: [`Grid2D`](grid::Grid2D) storage and access, coordinate mapping, neighborhood
//!   predicates, segment rasterization and the 3x3 convolution
//! - error: crate error type and result alias
//!
//! ```
//! use grid2d::prelude::*;
//! use glam::Vec2;
//!
//! let mut grid = Grid2D::try_new(GridConfig::square(100.0, 10.0), 0)?;
//! grid.set(5, 5, 7);
//! assert_eq!(grid.get_at_point(Vec2::new(55.0, 55.0)), Some(&7));
//! # Ok::<(), grid2d::error::Error>(())
//! ```
pub mod config;
pub mod error;
pub mod grid;

/// Convenient re-exports for common types. Import with `use grid2d::prelude::*;`.
pub mod prelude {
    pub use crate::config::GridConfig;
    pub use crate::error::{Error, Result};
    pub use crate::grid::{
        Bounds, CellIndex, Grid2D, GridLayout, Neighborhood, LAPLACE_KERNEL, MAX_SEGMENT_SAMPLES,
    };
}
