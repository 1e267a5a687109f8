//! Generic cell storage mapped onto a continuous coordinate space.
//!
//! [`Grid2D`] pairs a [`GridLayout`] with one value per cell, stored row-major. Reads
//! outside the grid return `None` and writes outside the grid are ignored; use
//! [`Grid2D::try_set`] when a miss must be reported.
//!
//! Neighborhood queries, segment rasterization and the 3x3 convolution live in the
//! submodules and are methods on [`Grid2D`].
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::GridConfig;
use crate::error::{Error, Result};

pub mod convolution;
pub mod layout;
pub mod neighborhood;
pub mod segment;

pub use convolution::LAPLACE_KERNEL;
pub use layout::{Bounds, CellIndex, GridLayout};
pub use neighborhood::Neighborhood;
pub use segment::MAX_SEGMENT_SAMPLES;

/// A rectangular grid of values addressed by `(row, column)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "GridParts<V>",
        bound(deserialize = "V: Deserialize<'de>")
    )
)]
pub struct Grid2D<V> {
    layout: GridLayout,
    cells: Vec<V>,
}

/// Unchecked serialized form of a [`Grid2D`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GridParts<V> {
    layout: GridLayout,
    cells: Vec<V>,
}

#[cfg(feature = "serde")]
impl<V> TryFrom<GridParts<V>> for Grid2D<V> {
    type Error = Error;

    fn try_from(parts: GridParts<V>) -> Result<Self> {
        if parts.cells.len() != parts.layout.len() {
            return Err(Error::InvalidConfig(format!(
                "{} cells stored for a {}x{} grid",
                parts.cells.len(),
                parts.layout.rows(),
                parts.layout.columns()
            )));
        }
        Ok(Self {
            layout: parts.layout,
            cells: parts.cells,
        })
    }
}

impl<V: Clone> Grid2D<V> {
    /// Creates a grid with every cell holding its own clone of `initial`.
    pub fn try_new(config: GridConfig, initial: V) -> Result<Self> {
        let layout = GridLayout::try_new(&config)?;
        debug!(
            rows = layout.rows(),
            columns = layout.columns(),
            cell_width = config.cell_width,
            cell_height = config.cell_height,
            "created grid"
        );
        let len = layout.len();
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|err| {
            Error::InvalidConfig(format!(
                "cannot allocate {}x{} cells: {err}",
                layout.rows(),
                layout.columns()
            ))
        })?;
        cells.resize(len, initial);
        Ok(Self { layout, cells })
    }
}

impl<V: Clone + Default> Grid2D<V> {
    /// Creates a grid with every cell set to `V::default()`.
    pub fn try_with_default(config: GridConfig) -> Result<Self> {
        Self::try_new(config, V::default())
    }
}

impl<V> Grid2D<V> {
    /// Geometry of this grid.
    #[inline]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.layout.columns()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell size as `(cell_width, cell_height)`.
    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        self.layout.cell_size()
    }

    /// Top-left corner in coordinate space.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.layout.origin()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.layout.bounds()
    }

    /// Cell values in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.cells
    }

    #[inline]
    pub fn cell_in_grid(&self, row: usize, column: usize) -> bool {
        self.layout.cell_in_grid(row, column)
    }

    /// Returns the value of a cell, or `None` when it is out of range.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<&V> {
        self.layout
            .offset(row, column)
            .and_then(|i| self.cells.get(i))
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut V> {
        self.layout
            .offset(row, column)
            .and_then(|i| self.cells.get_mut(i))
    }

    /// Writes a cell. Does nothing when the cell is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: V) {
        if let Some(cell) = self.get_mut(row, column) {
            *cell = value;
        }
    }

    /// Writes a cell, failing with [`Error::OutOfBounds`] when it is out of range.
    pub fn try_set(&mut self, row: usize, column: usize, value: V) -> Result<()> {
        let (rows, columns) = (self.rows(), self.columns());
        match self.get_mut(row, column) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => {
                trace!(row, column, "rejected write outside grid");
                Err(Error::OutOfBounds {
                    row,
                    column,
                    rows,
                    columns,
                })
            }
        }
    }

    /// See [`GridLayout::point_in_grid`].
    #[inline]
    pub fn point_in_grid(&self, p: impl Into<Vec2>, margin: f32) -> bool {
        self.layout.point_in_grid(p, margin)
    }

    /// See [`GridLayout::cell_at_point`].
    #[inline]
    pub fn cell_at_point(&self, p: impl Into<Vec2>) -> Option<CellIndex> {
        self.layout.cell_at_point(p)
    }

    /// Value of the cell containing `p`, or `None` when `p` is outside the grid.
    pub fn get_at_point(&self, p: impl Into<Vec2>) -> Option<&V> {
        let cell = self.cell_at_point(p)?;
        self.get(cell.row, cell.column)
    }

    pub fn get_at_point_mut(&mut self, p: impl Into<Vec2>) -> Option<&mut V> {
        let cell = self.cell_at_point(p)?;
        self.get_mut(cell.row, cell.column)
    }

    /// Writes the cell containing `p`. Does nothing when `p` is outside the grid.
    pub fn set_at_point(&mut self, p: impl Into<Vec2>, value: V) {
        if let Some(cell) = self.get_at_point_mut(p) {
            *cell = value;
        }
    }

    /// See [`GridLayout::cell_center`].
    #[inline]
    pub fn cell_center(&self, row: usize, column: usize) -> Option<Vec2> {
        self.layout.cell_center(row, column)
    }

    /// See [`GridLayout::cell_point`].
    #[inline]
    pub fn cell_point(&self, row: usize, column: usize, w_disp: f32, h_disp: f32) -> Option<Vec2> {
        self.layout.cell_point(row, column, w_disp, h_disp)
    }

    /// Overwrites every cell with `f(row, column)`, in row-major order.
    pub fn fill(&mut self, mut f: impl FnMut(usize, usize) -> V) {
        let columns = self.columns();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(i / columns, i % columns);
        }
    }

    /// Calls `f(row, column, &value)` for every cell, in row-major order.
    pub fn for_each_cell(&self, mut f: impl FnMut(usize, usize, &V)) {
        for (cell, value) in self.iter() {
            f(cell.row, cell.column, value);
        }
    }

    /// Scans rows `start_row..rows` and, within each of them, columns `start_column..columns`,
    /// returning the first cell for which `condition(row, column)` holds.
    ///
    /// `start_column` bounds the column scan on every row, not only the first.
    pub fn find_first_cell(
        &self,
        start_row: usize,
        start_column: usize,
        mut condition: impl FnMut(usize, usize) -> bool,
    ) -> Option<CellIndex> {
        for row in start_row..self.rows() {
            for column in start_column..self.columns() {
                if condition(row, column) {
                    return Some(CellIndex::new(row, column));
                }
            }
        }
        None
    }

    /// Iterates `(cell, &value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &V)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, value)| (self.layout.cell_at_offset(i), value))
    }

    /// Iterates cell indices in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.len()).map(|i| self.layout.cell_at_offset(i))
    }
}
