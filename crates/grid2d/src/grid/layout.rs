//! Grid geometry: cell counts and the mapping between cell indices and coordinate space.
//!
//! [`GridLayout`] carries everything about a grid except its values. It is immutable once
//! built and can be used on its own to map points to cells.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::error::{Error, Result};

/// Relative tolerance under which a cell count quotient is snapped to the nearest integer.
const SNAP_EPSILON: f32 = 1e-4;

/// Largest cell count accepted along one axis.
const MAX_AXIS_CELLS: f32 = u32::MAX as f32;

/// Row and column of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub column: usize,
}

impl CellIndex {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for CellIndex {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl From<CellIndex> for (usize, usize) {
    fn from(cell: CellIndex) -> Self {
        (cell.row, cell.column)
    }
}

/// Axis-aligned rectangle in coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns `true` if `p` lies in the rectangle shrunk by `margin` on every side, edges included.
    #[inline]
    pub fn contains(&self, p: Vec2, margin: f32) -> bool {
        p.x >= self.left + margin
            && p.x <= self.right - margin
            && p.y >= self.top + margin
            && p.y <= self.bottom - margin
    }
}

/// Immutable geometry of a grid.
///
/// Cell counts are `ceil(extent / cell_size)` per axis, so the last row and column may be
/// partial. The covered region stays the requested extent: points past `left + width` or
/// `top + height` are outside the grid even when the partial cell would reach further.
///
/// With the `serde` feature a layout is stored as its [`GridConfig`] and rebuilt through
/// [`GridLayout::try_new`] on deserialization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "GridConfig", into = "GridConfig")
)]
pub struct GridLayout {
    origin: Vec2,
    extent: Vec2,
    cell_size: Vec2,
    rows: usize,
    columns: usize,
}

impl GridLayout {
    /// Builds the layout for a configuration, validating it first.
    pub fn try_new(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        let columns = cell_count(config.width, config.cell_width)?;
        let rows = cell_count(config.height, config.cell_height)?;
        if rows.checked_mul(columns).is_none() {
            return Err(Error::InvalidConfig(format!(
                "{rows}x{columns} cells do not fit in memory"
            )));
        }

        Ok(Self {
            origin: config.origin(),
            extent: config.extent(),
            cell_size: config.cell_size(),
            rows,
            columns,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    /// Always `false`: a valid layout has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell size as `(cell_width, cell_height)`.
    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Top-left corner in coordinate space.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.origin.x,
            top: self.origin.y,
            right: self.origin.x + self.extent.x,
            bottom: self.origin.y + self.extent.y,
        }
    }

    #[inline]
    pub fn cell_in_grid(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Position of a cell in row-major storage, or `None` when out of range.
    #[inline]
    pub fn offset(&self, row: usize, column: usize) -> Option<usize> {
        self.cell_in_grid(row, column)
            .then(|| row * self.columns + column)
    }

    /// Inverse of [`offset`](Self::offset). No bounds checking.
    #[inline]
    pub fn cell_at_offset(&self, offset: usize) -> CellIndex {
        CellIndex::new(offset / self.columns, offset % self.columns)
    }

    /// Returns `true` if `p` lies within the grid bounds shrunk by `margin`, edges included.
    #[inline]
    pub fn point_in_grid(&self, p: impl Into<Vec2>, margin: f32) -> bool {
        self.bounds().contains(p.into(), margin)
    }

    /// Converts a point to signed `(row, column)` indices without bounds checking.
    #[inline]
    pub fn point_to_index(&self, p: impl Into<Vec2>) -> (isize, isize) {
        let local = (p.into() - self.origin) / self.cell_size;
        (local.y.floor() as isize, local.x.floor() as isize)
    }

    /// Maps a point to the cell containing it, or `None` when the point is outside the grid.
    ///
    /// A point exactly on the right or bottom edge belongs to the last column or row.
    pub fn cell_at_point(&self, p: impl Into<Vec2>) -> Option<CellIndex> {
        let p = p.into();
        if !self.point_in_grid(p, 0.0) {
            return None;
        }
        let (row, column) = self.point_to_index(p);
        Some(CellIndex::new(
            (row.max(0) as usize).min(self.rows - 1),
            (column.max(0) as usize).min(self.columns - 1),
        ))
    }

    /// Top-left corner of a cell. No bounds checking.
    #[inline]
    pub fn cell_corner(&self, row: usize, column: usize) -> Vec2 {
        self.origin + Vec2::new(column as f32, row as f32) * self.cell_size
    }

    /// Center of a cell in coordinate space.
    pub fn cell_center(&self, row: usize, column: usize) -> Option<Vec2> {
        self.cell_point(row, column, 0.5, 0.5)
    }

    /// Point inside a cell, displaced from its top-left corner by
    /// `w_disp * cell_width` and `h_disp * cell_height`.
    pub fn cell_point(&self, row: usize, column: usize, w_disp: f32, h_disp: f32) -> Option<Vec2> {
        self.cell_in_grid(row, column)
            .then(|| self.cell_corner(row, column) + Vec2::new(w_disp, h_disp) * self.cell_size)
    }
}

impl TryFrom<GridConfig> for GridLayout {
    type Error = Error;

    fn try_from(config: GridConfig) -> Result<Self> {
        Self::try_new(&config)
    }
}

impl From<GridLayout> for GridConfig {
    fn from(layout: GridLayout) -> Self {
        GridConfig::new(layout.extent.x, layout.extent.y)
            .with_cell_size(layout.cell_size.x, layout.cell_size.y)
            .with_origin(layout.origin.x, layout.origin.y)
    }
}

/// Number of cells needed to cover `extent`, rounding partial cells up.
fn cell_count(extent: f32, cell: f32) -> Result<usize> {
    let quotient = extent / cell;
    if !quotient.is_finite() || quotient > MAX_AXIS_CELLS {
        return Err(Error::InvalidConfig(format!(
            "extent {extent} with cell size {cell} needs too many cells"
        )));
    }
    let nearest = quotient.round();
    let count = if (quotient - nearest).abs() <= SNAP_EPSILON * nearest.max(1.0) {
        nearest
    } else {
        quotient.ceil()
    };
    Ok((count as usize).max(1))
}
