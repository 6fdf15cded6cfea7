// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid parameter resolution: block counts, feasibility, and normalization.

use kurbo::{Point, Rect, Size};

use crate::config::GridConfig;
use crate::error::{Axis, GridError};
use crate::geometry::{ceil_ratio, floor_ratio, is_odd};

/// An integer size measured in blocks, where one block is one peripheral cell
/// box (cell plus margins).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockSize {
    /// Number of blocks along the x axis.
    pub width: usize,
    /// Number of blocks along the y axis.
    pub height: usize,
}

impl BlockSize {
    /// A single block.
    pub const ONE: Self = Self::new(1, 1);

    /// Creates a block size.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns the extent along `axis`.
    #[must_use]
    pub const fn get(self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Converts to points using `block` as the size of one block.
    #[must_use]
    pub fn to_size(self, block: Size) -> Size {
        Size::new(
            self.width as f64 * block.width,
            self.height as f64 * block.height,
        )
    }
}

/// Resolved, immutable parameters of one grid.
///
/// The central cell is measured in whole peripheral blocks so that every ring
/// around it is made of whole peripheral cells. The viewport is measured in
/// blocks too and always has an odd number of them per axis, which gives the
/// grid a true center column and row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParameters {
    grid_size: Size,
    central_cell_size: Size,
    peripheral_cell_size: Size,
    cell_margin: f64,
    peripheral_cell_box: Size,
    central_cell_box_in_blocks: BlockSize,
    grid_in_blocks: BlockSize,
}

impl GridParameters {
    /// Resolves the derived values and validates feasibility.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidDimensions`] if any size or the margin is negative
    ///   or not finite, or if the peripheral cell box is empty.
    /// - [`GridError::Infeasible`] if the central cell needs more blocks than the
    ///   normalized viewport offers on either axis.
    pub fn resolve(
        grid_size: Size,
        central_cell_size: Size,
        peripheral_cell_size: Size,
        cell_margin: f64,
    ) -> Result<Self, GridError> {
        let inputs = [
            grid_size.width,
            grid_size.height,
            central_cell_size.width,
            central_cell_size.height,
            peripheral_cell_size.width,
            peripheral_cell_size.height,
            cell_margin,
        ];
        if inputs.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(GridError::InvalidDimensions);
        }

        let peripheral_cell_box = Size::new(
            peripheral_cell_size.width + 2.0 * cell_margin,
            peripheral_cell_size.height + 2.0 * cell_margin,
        );
        if peripheral_cell_box.width <= 0.0 || peripheral_cell_box.height <= 0.0 {
            return Err(GridError::InvalidDimensions);
        }

        // An empty central cell still claims its block.
        let central_cell_box_in_blocks = BlockSize::new(
            ceil_ratio(
                central_cell_size.width + 2.0 * cell_margin,
                peripheral_cell_box.width,
            )
            .max(1),
            ceil_ratio(
                central_cell_size.height + 2.0 * cell_margin,
                peripheral_cell_box.height,
            )
            .max(1),
        );

        let grid_in_blocks = BlockSize::new(
            normalize_to_odd(floor_ratio(grid_size.width, peripheral_cell_box.width)),
            normalize_to_odd(floor_ratio(grid_size.height, peripheral_cell_box.height)),
        );

        for axis in [Axis::Horizontal, Axis::Vertical] {
            if grid_in_blocks.get(axis) < central_cell_box_in_blocks.get(axis) {
                return Err(GridError::Infeasible {
                    axis,
                    central_blocks: central_cell_box_in_blocks.get(axis),
                    grid_blocks: grid_in_blocks.get(axis),
                });
            }
        }

        Ok(Self {
            grid_size,
            central_cell_size,
            peripheral_cell_size,
            cell_margin,
            peripheral_cell_box,
            central_cell_box_in_blocks,
            grid_in_blocks,
        })
    }

    /// Resolves the parameters described by `config`.
    ///
    /// # Errors
    ///
    /// See [`GridParameters::resolve`].
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Self::resolve(
            config.grid_size,
            config.central_cell,
            config.peripheral_cell,
            config.cell_margin,
        )
    }

    /// Grows the central cell by one block on every axis where the blocks
    /// left around it are nonzero and odd, so both sides get the same count.
    ///
    /// Only meaningful when the central footprint differs from a peripheral
    /// one; with uniform cells the remaining count is always even.
    pub(crate) fn normalize_central_cell(&mut self) {
        let remaining_width = self.grid_in_blocks.width - self.central_cell_box_in_blocks.width;
        let remaining_height =
            self.grid_in_blocks.height - self.central_cell_box_in_blocks.height;

        if remaining_width != 0 && is_odd(remaining_width) {
            self.central_cell_box_in_blocks.width += 1;
        }
        if remaining_height != 0 && is_odd(remaining_height) {
            self.central_cell_box_in_blocks.height += 1;
        }
    }

    /// Returns `true` if the central cell occupies exactly one block, i.e.
    /// it renders at the same footprint as a peripheral cell.
    #[must_use]
    pub fn has_uniform_cells(&self) -> bool {
        self.central_cell_box_in_blocks == BlockSize::ONE
    }

    /// The viewport size the grid was resolved for.
    #[must_use]
    pub fn grid_size(&self) -> Size {
        self.grid_size
    }

    /// The viewport as a rectangle anchored at the origin.
    #[must_use]
    pub fn grid_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.grid_size)
    }

    /// The requested central cell size, without margins.
    #[must_use]
    pub fn central_cell_size(&self) -> Size {
        self.central_cell_size
    }

    /// The requested peripheral cell size, without margins.
    #[must_use]
    pub fn peripheral_cell_size(&self) -> Size {
        self.peripheral_cell_size
    }

    /// Margin on each side of every cell.
    #[must_use]
    pub fn cell_margin(&self) -> f64 {
        self.cell_margin
    }

    /// A peripheral cell including its margins: the size of one block.
    #[must_use]
    pub fn peripheral_cell_box(&self) -> Size {
        self.peripheral_cell_box
    }

    /// The central cell footprint in blocks.
    #[must_use]
    pub fn central_cell_box_in_blocks(&self) -> BlockSize {
        self.central_cell_box_in_blocks
    }

    /// The central cell footprint in points; always a whole number of blocks.
    #[must_use]
    pub fn central_cell_box(&self) -> Size {
        self.central_cell_box_in_blocks
            .to_size(self.peripheral_cell_box)
    }

    /// The viewport in blocks, odd on both axes.
    #[must_use]
    pub fn grid_in_blocks(&self) -> BlockSize {
        self.grid_in_blocks
    }

    /// Center of the viewport.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.grid_size.width / 2.0, self.grid_size.height / 2.0)
    }

    /// Top-left corner of the central cell.
    #[must_use]
    pub fn central_cell_origin(&self) -> Point {
        let center = self.center();
        let central = self.central_cell_box();
        Point::new(
            center.x - central.width / 2.0,
            center.y - central.height / 2.0,
        )
    }

    /// Frame of the central cell.
    #[must_use]
    pub fn central_cell(&self) -> Rect {
        Rect::from_origin_size(self.central_cell_origin(), self.central_cell_box())
    }
}

fn normalize_to_odd(blocks: usize) -> usize {
    if is_odd(blocks) {
        blocks
    } else {
        blocks.saturating_sub(1)
    }
}
