//! Segment rasterization.
//!
//! A segment from `p1` to `p2` is measured in cell units,
//! `steps = max(|dx| / cell_width, |dy| / cell_height)`, and sampled at `t = i * step / steps`
//! for every `i` with `i * step <= steps`. Each sample inside the grid contributes the cell
//! containing it. Consecutive samples in the same cell are all reported.
//!
//! A segment needing more than [`MAX_SEGMENT_SAMPLES`] samples is rejected as empty.
use glam::Vec2;
use tracing::warn;

use super::layout::CellIndex;
use super::Grid2D;

/// Largest number of samples taken along one segment.
pub const MAX_SEGMENT_SAMPLES: usize = 1 << 24;

impl<V> Grid2D<V> {
    /// Sample points along the segment, in order from `p1`.
    ///
    /// `p2` itself is only sampled when `steps` is a multiple of `step`. Returns nothing
    /// for a non-positive or non-finite `step`, non-finite endpoints, or a segment that
    /// would need more than [`MAX_SEGMENT_SAMPLES`] samples.
    pub fn segment_points(
        &self,
        p1: impl Into<Vec2>,
        p2: impl Into<Vec2>,
        step: f32,
    ) -> impl Iterator<Item = Vec2> {
        let (p1, p2) = (p1.into(), p2.into());
        let delta = p2 - p1;
        let steps = (delta.abs() / self.cell_size()).max_element();

        let count = if !(step.is_finite() && step > 0.0) {
            warn!("segment step must be finite and > 0, got {}", step);
            0
        } else if !(p1.is_finite() && p2.is_finite()) {
            warn!("segment endpoints must be finite, got {} -> {}", p1, p2);
            0
        } else if steps == 0.0 {
            1
        } else {
            let samples = (f64::from(steps) / f64::from(step)).floor() + 1.0;
            if samples.is_finite() && samples <= MAX_SEGMENT_SAMPLES as f64 {
                samples as usize
            } else {
                warn!(
                    "segment needs {} samples at step {}, limit is {}",
                    samples, step, MAX_SEGMENT_SAMPLES
                );
                0
            }
        };

        (0..count).map(move |i| {
            if steps == 0.0 {
                p1
            } else {
                p1 + delta * ((i as f32 * step) / steps)
            }
        })
    }

    /// Cells containing the samples of the segment from `p1` to `p2`, in traversal order.
    ///
    /// Samples outside the grid are skipped. Adjacent duplicates are kept.
    pub fn cells_in_segment(
        &self,
        p1: impl Into<Vec2>,
        p2: impl Into<Vec2>,
        step: f32,
    ) -> Vec<CellIndex> {
        self.segment_points(p1, p2, step)
            .filter_map(|p| self.cell_at_point(p))
            .collect()
    }

    /// Returns `true` if `condition` holds for the value of every cell in the segment.
    /// An empty segment is vacuously `true`.
    pub fn true_in_segment(
        &self,
        p1: impl Into<Vec2>,
        p2: impl Into<Vec2>,
        step: f32,
        condition: impl FnMut(&V) -> bool,
    ) -> bool {
        self.cells_in_segment(p1, p2, step)
            .into_iter()
            .filter_map(|cell| self.get(cell.row, cell.column))
            .all(condition)
    }

    /// Sets every cell in the segment to `value`.
    pub fn set_in_segment(&mut self, p1: impl Into<Vec2>, p2: impl Into<Vec2>, step: f32, value: V)
    where
        V: Clone,
    {
        for cell in self.cells_in_segment(p1, p2, step) {
            self.set(cell.row, cell.column, value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::GridConfig;

    fn grid() -> Grid2D<u8> {
        Grid2D::try_new(GridConfig::square(100.0, 10.0), 0).expect("valid grid")
    }

    #[test]
    fn horizontal_segment_walks_each_column() {
        let cells = grid().cells_in_segment(Vec2::new(5.0, 5.0), Vec2::new(95.0, 5.0), 1.0);
        let expected: Vec<_> = (0..10).map(|c| CellIndex::new(0, c)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn diagonal_segment_walks_the_diagonal() {
        let cells = grid().cells_in_segment(Vec2::new(5.0, 5.0), Vec2::new(95.0, 95.0), 1.0);
        let expected: Vec<_> = (0..10).map(|i| CellIndex::new(i, i)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn reversed_segment_walks_backwards() {
        let cells = grid().cells_in_segment(Vec2::new(95.0, 45.0), Vec2::new(5.0, 45.0), 1.0);
        let expected: Vec<_> = (0..10).rev().map(|c| CellIndex::new(4, c)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn steps_follow_the_longer_axis_in_cell_units() {
        let grid: Grid2D<u8> = Grid2D::try_new(
            GridConfig::new(100.0, 50.0).with_cell_size(10.0, 5.0),
            0,
        )
        .expect("valid grid");
        let cells = grid.cells_in_segment(Vec2::new(5.0, 2.5), Vec2::new(15.0, 47.5), 1.0);
        assert_eq!(cells.len(), 10);
        assert_eq!(cells.first(), Some(&CellIndex::new(0, 0)));
        assert_eq!(cells.last(), Some(&CellIndex::new(9, 1)));
        assert!(cells.windows(2).all(|w| w[1].row == w[0].row + 1));
    }

    #[test]
    fn small_steps_repeat_cells() {
        let cells = grid().cells_in_segment(Vec2::new(2.0, 5.0), Vec2::new(92.0, 5.0), 0.5);
        assert_eq!(cells.len(), 19);
        assert_eq!(cells[0], cells[1]);
        assert_eq!(cells[18], CellIndex::new(0, 9));

        let mut distinct = cells.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn samples_outside_grid_are_skipped() {
        // steps = 4.5, so x = -15, -5, 5, 15, 25 and the endpoint is never sampled.
        let cells = grid().cells_in_segment(Vec2::new(-15.0, 5.0), Vec2::new(30.0, 5.0), 1.0);
        assert_eq!(
            cells,
            vec![
                CellIndex::new(0, 0),
                CellIndex::new(0, 1),
                CellIndex::new(0, 2)
            ]
        );
    }

    #[test]
    fn zero_length_segment_yields_at_most_one_cell() {
        let grid = grid();
        let p = Vec2::new(42.0, 17.0);
        assert_eq!(grid.cells_in_segment(p, p, 1.0), vec![CellIndex::new(1, 4)]);

        let outside = Vec2::new(-3.0, 17.0);
        assert!(grid.cells_in_segment(outside, outside, 1.0).is_empty());
    }

    #[test]
    fn degenerate_steps_yield_nothing() {
        let grid = grid();
        let (a, b) = (Vec2::new(5.0, 5.0), Vec2::new(95.0, 5.0));
        assert!(grid.cells_in_segment(a, b, 0.0).is_empty());
        assert!(grid.cells_in_segment(a, b, -1.0).is_empty());
        assert!(grid.cells_in_segment(a, b, f32::NAN).is_empty());
        assert!(grid.cells_in_segment(a, Vec2::new(f32::INFINITY, 5.0), 1.0).is_empty());
    }

    #[test]
    fn oversampled_segments_are_rejected() {
        let grid = grid();
        let (a, b) = (Vec2::new(5.0, 5.0), Vec2::new(15.0, 5.0));
        assert!(grid.cells_in_segment(a, b, 1e-20).is_empty());
        assert_eq!(grid.segment_points(a, b, 1e-20).count(), 0);
        assert!(grid.true_in_segment(a, b, 1e-20, |_| false));

        let wide = (Vec2::new(-3e38, 5.0), Vec2::new(3e38, 5.0));
        assert!(grid.cells_in_segment(wide.0, wide.1, 1.0).is_empty());
    }

    #[test]
    fn small_valid_steps_are_still_sampled() {
        let grid = grid();
        let (a, b) = (Vec2::new(5.0, 5.0), Vec2::new(15.0, 5.0));
        let count = grid.segment_points(a, b, 1e-5).count();
        assert!((100_000..=100_002).contains(&count));

        let cells = grid.cells_in_segment(a, b, 1e-5);
        assert_eq!(cells.first(), Some(&CellIndex::new(0, 0)));
        assert!(cells.contains(&CellIndex::new(0, 1)));
    }

    #[test]
    fn true_in_segment_checks_every_cell_on_path() {
        let mut grid = grid();
        let (a, b) = (Vec2::new(5.0, 5.0), Vec2::new(95.0, 95.0));
        assert!(grid.true_in_segment(a, b, 1.0, |v| *v == 0));

        grid.set(6, 6, 1);
        assert!(!grid.true_in_segment(a, b, 1.0, |v| *v == 0));
        assert!(grid.true_in_segment(
            Vec2::new(5.0, 95.0),
            Vec2::new(95.0, 95.0),
            1.0,
            |v| *v == 0
        ));
    }

    #[test]
    fn true_in_segment_is_vacuous_outside_grid() {
        let grid = grid();
        assert!(grid.true_in_segment(
            Vec2::new(-50.0, -50.0),
            Vec2::new(-10.0, -20.0),
            1.0,
            |_| false
        ));
    }

    #[test]
    fn set_in_segment_marks_exactly_the_path() {
        let mut grid = grid();
        let (a, b) = (Vec2::new(5.0, 25.0), Vec2::new(95.0, 25.0));
        grid.set_in_segment(a, b, 1.0, 3);

        for (cell, value) in grid.iter() {
            let expected = if cell.row == 2 { 3 } else { 0 };
            assert_eq!(*value, expected, "unexpected value at {cell:?}");
        }
    }

    proptest! {
        #[test]
        fn zero_length_segment_matches_cell_at_point(
            x in -20.0f32..120.0,
            y in -20.0f32..120.0,
            step in 0.1f32..3.0,
        ) {
            let grid = grid();
            let p = Vec2::new(x, y);
            let cells = grid.cells_in_segment(p, p, step);
            prop_assert!(cells.len() <= 1);
            prop_assert_eq!(cells.first().copied(), grid.cell_at_point(p));
        }

        #[test]
        fn segment_cells_are_in_grid_and_start_at_p1(
            x1 in 0.0f32..100.0,
            y1 in 0.0f32..100.0,
            x2 in 0.0f32..100.0,
            y2 in 0.0f32..100.0,
        ) {
            let grid = grid();
            let (p1, p2) = (Vec2::new(x1, y1), Vec2::new(x2, y2));
            let cells = grid.cells_in_segment(p1, p2, 1.0);
            prop_assert!(!cells.is_empty());
            prop_assert_eq!(Some(cells[0]), grid.cell_at_point(p1));
            for cell in &cells {
                prop_assert!(grid.cell_in_grid(cell.row, cell.column));
            }
        }
    }
}
