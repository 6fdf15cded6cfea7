// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid: parameters, kind, and the rings built from them.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::{GridError, UnsupportedConfiguration};
use crate::figure::Figure;
use crate::params::GridParameters;
use crate::{polygon, rectangle};

/// Which ring shape a grid is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridKind {
    /// Rectangular rings.
    Rectangle {
        /// Offset every other row by half a cell, giving a brick pattern.
        shifted: bool,
    },
    /// Hexagon-like rings assembled from stacked rectangles.
    Polygon,
}

/// A concentric grid of cells numbered in a spiral from the center outwards.
///
/// Construction validates the parameters; [`Grid::create_grid`] lays out the
/// cells. Until then the grid is empty.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_concentric_grid::Grid;
///
/// let cell = Size::new(50.0, 50.0);
/// let mut grid = Grid::new_rectangle(Size::new(500.0, 500.0), false, cell, cell, 5.0)?;
/// grid.create_grid();
///
/// assert_eq!(grid.len(), 49);
/// assert_eq!(grid.point_at(0), Some(Point::new(250.0, 250.0)));
/// assert_eq!(grid.point_at(1), Some(Point::new(190.0, 190.0)));
/// assert_eq!(grid.point_at(49), None);
/// # Ok::<(), understory_concentric_grid::GridError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    params: GridParameters,
    kind: GridKind,
    figures: Vec<Figure>,
}

impl Grid {
    /// Creates a rectangle grid.
    ///
    /// # Errors
    ///
    /// Fails if the parameters do not resolve (see [`GridParameters::resolve`]),
    /// or if the central cell occupies more than one block and `shifted` is
    /// `false`.
    pub fn new_rectangle(
        grid_size: Size,
        shifted: bool,
        central_cell: Size,
        peripheral_cell: Size,
        cell_margin: f64,
    ) -> Result<Self, GridError> {
        let params =
            GridParameters::resolve(grid_size, central_cell, peripheral_cell, cell_margin)?;
        Self::with_kind(params, GridKind::Rectangle { shifted })
    }

    /// Creates a polygon grid.
    ///
    /// # Errors
    ///
    /// Fails if the parameters do not resolve (see [`GridParameters::resolve`]),
    /// or if the central cell occupies more than one block.
    pub fn new_polygon(
        grid_size: Size,
        central_cell: Size,
        peripheral_cell: Size,
        cell_margin: f64,
    ) -> Result<Self, GridError> {
        let params =
            GridParameters::resolve(grid_size, central_cell, peripheral_cell, cell_margin)?;
        Self::with_kind(params, GridKind::Polygon)
    }

    /// Creates a grid of `kind` from a configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new_rectangle`] and [`Grid::new_polygon`].
    pub fn from_config(config: &GridConfig, kind: GridKind) -> Result<Self, GridError> {
        Self::with_kind(GridParameters::from_config(config)?, kind)
    }

    fn with_kind(mut params: GridParameters, kind: GridKind) -> Result<Self, GridError> {
        match kind {
            GridKind::Rectangle { shifted } if !params.has_uniform_cells() => {
                if !shifted {
                    return Err(GridError::Unsupported(
                        UnsupportedConfiguration::UnequalCellsWithoutShift,
                    ));
                }
                params.normalize_central_cell();
            }
            GridKind::Polygon if !params.has_uniform_cells() => {
                return Err(GridError::Unsupported(
                    UnsupportedConfiguration::UnequalPolygonCells,
                ));
            }
            _ => {}
        }
        Ok(Self {
            params,
            kind,
            figures: Vec::new(),
        })
    }

    /// Lays out every ring and cell. Calling it again rebuilds from scratch
    /// with the same result.
    pub fn create_grid(&mut self) {
        self.figures = match self.kind {
            GridKind::Rectangle { shifted } => rectangle::build(&self.params, shifted),
            GridKind::Polygon => polygon::build(&self.params),
        };
        debug_assert!(
            self.cells().enumerate().all(|(i, cell)| cell.index() == i),
            "cell indices must be contiguous in discovery order"
        );
        log::debug!(
            "built {:?} grid: {} rings, {} cells",
            self.kind,
            self.figures.len(),
            self.len()
        );
    }

    /// Center of the cell with spiral index `index`, or `None` past the last
    /// cell.
    #[must_use]
    pub fn point_at(&self, index: usize) -> Option<Point> {
        self.cell_at(index).map(Cell::center)
    }

    /// Frame of the cell with spiral index `index`.
    #[must_use]
    pub fn frame_at(&self, index: usize) -> Option<Rect> {
        self.cell_at(index).map(Cell::frame)
    }

    /// The cell with spiral index `index`.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        self.figures
            .iter()
            .find_map(|figure| figure.cell_by_index(index))
    }

    /// Number of laid-out cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.iter().map(|figure| figure.cells().len()).sum()
    }

    /// Whether no cell has been laid out yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.figures.iter().flat_map(|figure| figure.cells().iter())
    }

    /// `(index, center)` for every cell, in index order.
    pub fn points(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.cells().map(|cell| (cell.index(), cell.center()))
    }

    /// The rings, innermost first.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    /// The resolved parameters.
    #[must_use]
    pub fn params(&self) -> &GridParameters {
        &self.params
    }

    /// The ring shape.
    #[must_use]
    pub fn kind(&self) -> GridKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BlockSize;

    fn cell() -> Size {
        Size::new(50.0, 50.0)
    }

    #[test]
    fn empty_until_created() {
        let mut grid = Grid::new_polygon(Size::new(500.0, 500.0), cell(), cell(), 5.0)
            .expect("feasible grid");
        assert!(grid.is_empty());
        assert_eq!(grid.point_at(0), None);
        grid.create_grid();
        assert_eq!(grid.len(), 37);
        assert!(!grid.is_empty());
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let mut grid =
            Grid::new_rectangle(Size::new(320.0, 568.0), true, cell(), cell(), 5.0)
                .expect("feasible grid");
        grid.create_grid();
        let first: Vec<_> = grid.points().collect();
        grid.create_grid();
        let second: Vec<_> = grid.points().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 41);
    }

    #[test]
    fn unequal_cells_need_a_shifted_rectangle() {
        let central = Size::new(100.0, 100.0);
        let size = Size::new(600.0, 600.0);
        assert_eq!(
            Grid::new_rectangle(size, false, central, cell(), 5.0).unwrap_err(),
            GridError::Unsupported(UnsupportedConfiguration::UnequalCellsWithoutShift)
        );
        assert_eq!(
            Grid::new_polygon(size, central, cell(), 5.0).unwrap_err(),
            GridError::Unsupported(UnsupportedConfiguration::UnequalPolygonCells)
        );

        let grid = Grid::new_rectangle(size, true, central, cell(), 5.0).expect("shifted grid");
        assert_eq!(grid.params().central_cell_box_in_blocks(), BlockSize::new(3, 3));
    }

    #[test]
    fn sizes_rounding_to_one_block_count_as_equal() {
        let grid = Grid::new_rectangle(
            Size::new(500.0, 500.0),
            false,
            Size::new(40.0, 45.0),
            cell(),
            5.0,
        );
        assert!(grid.is_ok());
    }

    #[test]
    fn config_and_kind_round_trip() {
        let config = GridConfig::new(Size::new(500.0, 500.0), cell()).with_cell_margin(5.0);
        let mut grid = Grid::from_config(&config, GridKind::Rectangle { shifted: false })
            .expect("feasible grid");
        assert_eq!(grid.kind(), GridKind::Rectangle { shifted: false });
        grid.create_grid();
        assert_eq!(grid.figures().len(), 4);
        assert_eq!(grid.frame_at(0), Some(Rect::new(220.0, 220.0, 280.0, 280.0)));
        assert_eq!(grid.cell_at(48).map(Cell::index), Some(48));
    }
}
