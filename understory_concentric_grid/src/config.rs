// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid configuration as hosts describe it.

use kurbo::Size;

/// User-facing description of a grid, before any derived value is computed.
///
/// `GridConfig` is what hosts keep around (or load from disk with the `serde`
/// feature); [`crate::GridParameters`] is what the builders work with.
///
/// ```rust
/// use kurbo::Size;
/// use understory_concentric_grid::GridConfig;
///
/// let config = GridConfig::new(Size::new(500.0, 500.0), Size::new(50.0, 50.0))
///     .with_central_cell(Size::new(100.0, 100.0))
///     .with_cell_margin(5.0);
/// assert_eq!(config.peripheral_cell, Size::new(50.0, 50.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// The viewport to fill, in points.
    pub grid_size: Size,
    /// Size of the central cell, without margins.
    pub central_cell: Size,
    /// Size of every other cell, without margins.
    pub peripheral_cell: Size,
    /// Margin applied on all four sides of every cell.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cell_margin: f64,
}

impl GridConfig {
    /// A configuration where every cell, central one included, has size `cell`
    /// and there is no margin.
    #[must_use]
    pub fn new(grid_size: Size, cell: Size) -> Self {
        Self {
            grid_size,
            central_cell: cell,
            peripheral_cell: cell,
            cell_margin: 0.0,
        }
    }

    /// Sets the size of the central cell.
    #[must_use]
    pub fn with_central_cell(mut self, size: Size) -> Self {
        self.central_cell = size;
        self
    }

    /// Sets the size of the peripheral cells.
    #[must_use]
    pub fn with_peripheral_cell(mut self, size: Size) -> Self {
        self.peripheral_cell = size;
        self
    }

    /// Sets the margin around each cell.
    #[must_use]
    pub fn with_cell_margin(mut self, margin: f64) -> Self {
        self.cell_margin = margin;
        self
    }
}
