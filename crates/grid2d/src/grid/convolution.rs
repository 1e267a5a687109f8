//! 3x3 weighted sums over cell values.
use super::Grid2D;

/// Diffusion kernel commonly used with [`Grid2D::laplace_3x3`] for reaction-diffusion.
///
/// Row-major: top-left, top, top-right, left, center, right, bottom-left, bottom, bottom-right.
pub const LAPLACE_KERNEL: [f32; 9] = [0.05, 0.2, 0.05, 0.2, -1.0, 0.2, 0.05, 0.2, 0.05];

/// Moves `index` inward so a 3-wide window around it stays inside `[0, len)`.
#[inline]
fn window_center(index: usize, len: usize) -> usize {
    if len >= 3 {
        index.clamp(1, len - 2)
    } else {
        index.min(len.saturating_sub(1))
    }
}

impl<V> Grid2D<V> {
    /// Weighted sum of `project(value)` over the 3x3 window around `(row, column)`.
    ///
    /// `weights` are row-major over the window. A center on the outer boundary (or outside
    /// the grid) is shifted inward by one cell so the window never leaves the grid. When an
    /// axis has fewer than 3 cells, window cells that do not exist contribute nothing.
    pub fn laplace_3x3(
        &self,
        row: usize,
        column: usize,
        weights: &[f32; 9],
        project: impl Fn(&V) -> f32,
    ) -> f32 {
        let center_row = window_center(row, self.rows());
        let center_column = window_center(column, self.columns());

        let mut sum = 0.0;
        for (i, weight) in weights.iter().enumerate() {
            let (dr, dc) = (i / 3, i % 3);
            let cell = (center_row + dr)
                .checked_sub(1)
                .zip((center_column + dc).checked_sub(1))
                .and_then(|(r, c)| self.get(r, c));
            if let Some(value) = cell {
                sum += project(value) * weight;
            }
        }
        sum
    }
}
