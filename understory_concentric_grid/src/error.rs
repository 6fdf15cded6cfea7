// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while constructing a grid.

use core::fmt;

/// One of the two grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis (widths).
    Horizontal,
    /// The y axis (heights).
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("width"),
            Self::Vertical => f.write_str("height"),
        }
    }
}

/// Cell configurations that parse fine but cannot be laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnsupportedConfiguration {
    /// A rectangle grid whose central cell footprint differs from the
    /// peripheral one must be shifted.
    UnequalCellsWithoutShift,
    /// Polygon cells must all share one footprint, otherwise rings overlap.
    UnequalPolygonCells,
}

/// Error returned by the grid constructors.
///
/// All variants are raised before any ring is built; a failed constructor
/// never yields a partial grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridError {
    /// The central cell does not fit into the viewport on `axis`.
    Infeasible {
        /// The axis that overflowed.
        axis: Axis,
        /// Central cell footprint on that axis, in blocks.
        central_blocks: usize,
        /// Normalized viewport footprint on that axis, in blocks.
        grid_blocks: usize,
    },
    /// The combination of cell sizes and grid options is not supported.
    Unsupported(UnsupportedConfiguration),
    /// A size or margin is negative or not finite, or the peripheral cell box
    /// (cell plus margins) is empty.
    InvalidDimensions,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infeasible {
                axis,
                central_blocks,
                grid_blocks,
            } => write!(
                f,
                "{axis} of the central cell ({central_blocks} blocks) exceeds the {axis} of the grid ({grid_blocks} blocks)"
            ),
            Self::Unsupported(UnsupportedConfiguration::UnequalCellsWithoutShift) => f.write_str(
                "central and peripheral cells differ in size; a rectangle grid must be shifted",
            ),
            Self::Unsupported(UnsupportedConfiguration::UnequalPolygonCells) => {
                f.write_str("polygon grids require equal central and peripheral cells")
            }
            Self::InvalidDimensions => {
                f.write_str("grid and cell sizes must be finite, non-negative and non-empty")
            }
        }
    }
}

impl core::error::Error for GridError {}
