//! Construction parameters for [`Grid2D`](crate::grid::Grid2D).
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for building a grid.
///
/// The grid covers `width x height` coordinate units starting at `(left, top)`,
/// divided into cells of `cell_width x cell_height` units.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Extent along the X axis in coordinate units.
    pub width: f32,
    /// Extent along the Y axis in coordinate units.
    pub height: f32,
    /// Cell extent along the X axis.
    pub cell_width: f32,
    /// Cell extent along the Y axis.
    pub cell_height: f32,
    /// X coordinate of the top-left corner.
    pub left: f32,
    /// Y coordinate of the top-left corner.
    pub top: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            cell_width: 1.0,
            cell_height: 1.0,
            left: 0.0,
            top: 0.0,
        }
    }
}

impl GridConfig {
    /// Creates a new [`GridConfig`] with unit cells and the origin at `(0, 0)`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Square grid of `extent x extent` units with square cells.
    pub fn square(extent: f32, cell_size: f32) -> Self {
        Self::new(extent, extent).with_cell_size(cell_size, cell_size)
    }

    /// Sets both cell dimensions.
    pub fn with_cell_size(mut self, cell_width: f32, cell_height: f32) -> Self {
        self.cell_width = cell_width;
        self.cell_height = cell_height;
        self
    }

    /// Sets the cell width.
    pub fn with_cell_width(mut self, cell_width: f32) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Sets the cell height.
    pub fn with_cell_height(mut self, cell_height: f32) -> Self {
        self.cell_height = cell_height;
        self
    }

    /// Sets the coordinate of the grid's top-left corner.
    pub fn with_origin(mut self, left: f32, top: f32) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    /// Grid extent as a vector.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Cell size as a vector.
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(self.cell_width, self.cell_height)
    }

    /// Top-left corner as a vector.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidDimension { name, value });
            }
        }
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "origin must be finite, got ({}, {})",
                self.left, self.top
            )));
        }

        Ok(())
    }
}
