//! Square neighborhood queries.
//!
//! The neighborhood of `(row, column)` at distance `d` is every cell with
//! `row - d <= r <= row + d` and `column - d <= c <= column + d`, clipped to the grid.
//! Both ends are inclusive and the center cell is part of it.
use std::ops::RangeInclusive;

use super::layout::CellIndex;
use super::Grid2D;

/// Iterator over the cells of a clipped square neighborhood, in row-major order.
#[derive(Clone, Debug)]
pub struct Neighborhood {
    rows: RangeInclusive<usize>,
    columns: RangeInclusive<usize>,
    row: usize,
    column: usize,
}

impl Neighborhood {
    fn new(rows: RangeInclusive<usize>, columns: RangeInclusive<usize>) -> Self {
        let (row, column) = (*rows.start(), *columns.start());
        Self {
            rows,
            columns,
            row,
            column,
        }
    }

    fn empty() -> Self {
        Self::new(RangeInclusive::new(1, 0), RangeInclusive::new(1, 0))
    }
}

impl Iterator for Neighborhood {
    type Item = CellIndex;

    fn next(&mut self) -> Option<CellIndex> {
        if self.columns.is_empty() {
            return None;
        }
        while self.rows.contains(&self.row) {
            if self.columns.contains(&self.column) {
                let cell = CellIndex::new(self.row, self.column);
                self.column += 1;
                return Some(cell);
            }
            self.row += 1;
            self.column = *self.columns.start();
        }
        None
    }
}

/// Inclusive range `[center - distance, center + distance]` clipped to `[0, len - 1]`.
fn clip(center: usize, distance: usize, len: usize) -> Option<RangeInclusive<usize>> {
    let start = center.saturating_sub(distance);
    let end = center.saturating_add(distance).min(len.checked_sub(1)?);
    (start <= end).then_some(start..=end)
}

impl<V> Grid2D<V> {
    /// Cells within `distance` of `(row, column)`, clipped to the grid, center included.
    pub fn neighborhood(&self, row: usize, column: usize, distance: usize) -> Neighborhood {
        match (
            clip(row, distance, self.rows()),
            clip(column, distance, self.columns()),
        ) {
            (Some(rows), Some(columns)) => Neighborhood::new(rows, columns),
            _ => Neighborhood::empty(),
        }
    }

    /// Returns `true` if `condition` holds for every cell within `distance` of `(row, column)`.
    ///
    /// A `distance` of zero returns `true` without inspecting any cell.
    pub fn true_for_every_neighbor(
        &self,
        row: usize,
        column: usize,
        distance: usize,
        condition: impl FnMut(&V) -> bool,
    ) -> bool {
        if distance == 0 {
            return true;
        }
        self.neighborhood(row, column, distance)
            .filter_map(|cell| self.get(cell.row, cell.column))
            .all(condition)
    }

    /// Returns `true` if `condition` holds for at least one cell within `distance` of `(row, column)`.
    ///
    /// A `distance` of zero also returns `true`, even though no cell is inspected.
    pub fn true_for_at_least_one_neighbor(
        &self,
        row: usize,
        column: usize,
        distance: usize,
        condition: impl FnMut(&V) -> bool,
    ) -> bool {
        if distance == 0 {
            return true;
        }
        self.neighborhood(row, column, distance)
            .filter_map(|cell| self.get(cell.row, cell.column))
            .any(condition)
    }
}
