// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_concentric_grid --heading-base-level=0

//! Understory Concentric Grid: cells laid out in rings around a central cell.
//!
//! This crate computes where the `n`-th item of a collection goes when items
//! are placed from the middle of a viewport outwards. Cell 0 is the central
//! cell; the rest are peripheral cells numbered ring by ring, each ring walked
//! clockwise starting at its top-left. It focuses on:
//! - Resolving cell and viewport sizes into whole blocks, with an odd block
//!   count per axis so the grid has a true center.
//! - Rectangle rings, optionally shifted into a brick pattern.
//! - Polygon (hexagon-like) rings assembled from stacked rectangles.
//! - Index to point lookup once the grid is built.
//!
//! It does **not** render, animate, or own the items being placed. Callers
//! are expected to:
//! - Build a [`Grid`] for the current viewport and rebuild it when the
//!   viewport or cell sizes change.
//! - Position their items at [`Grid::point_at`] (cell centers) or
//!   [`Grid::frame_at`] (cell frames, margins included).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_concentric_grid::Grid;
//!
//! let cell = Size::new(50.0, 50.0);
//! let mut grid = Grid::new_polygon(Size::new(600.0, 600.0), cell, cell, 5.0)?;
//! grid.create_grid();
//!
//! // The first ring of a polygon grid has six cells around the center.
//! assert_eq!(grid.point_at(0), Some(Point::new(300.0, 300.0)));
//! assert_eq!(grid.figures()[1].cells().len(), 6);
//! assert_eq!(grid.point_at(1), Some(Point::new(240.0, 300.0)));
//! # Ok::<(), understory_concentric_grid::GridError>(())
//! ```
//!
//! ## Shifted rectangle grids
//!
//! With `shifted` set, rows an odd number of blocks above or below the
//! central row move right by half a block. Cells to the left of the central
//! cell, on rows it spans, stay in place. A central cell larger than one block
//! is only supported in this mode; it is grown to leave the same number of
//! blocks on each side.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_concentric_grid::{Grid, GridConfig, GridKind};
//!
//! let config = GridConfig::new(Size::new(600.0, 600.0), Size::new(50.0, 50.0))
//!     .with_central_cell(Size::new(100.0, 100.0))
//!     .with_cell_margin(5.0);
//! let mut grid = Grid::from_config(&config, GridKind::Rectangle { shifted: true })?;
//! grid.create_grid();
//!
//! assert_eq!(grid.point_at(0), Some(Point::new(300.0, 300.0)));
//! assert_eq!(grid.point_at(1), Some(Point::new(210.0, 180.0)));
//! # Ok::<(), understory_concentric_grid::GridError>(())
//! ```
//!
//! ## Logging
//!
//! Builds are reported through the [`log`] facade: a `debug` summary per
//! build and a `trace` line per ring. No logger is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod config;
mod error;
mod figure;
mod geometry;
mod grid;
mod params;
mod polygon;
mod rectangle;
mod walker;

pub use cell::{Cell, CellTag, PositionOnSide, RectSide};
pub use config::GridConfig;
pub use error::{Axis, GridError, UnsupportedConfiguration};
pub use figure::{Figure, FigureShape, PolygonRing, RectangleRing};
pub use grid::{Grid, GridKind};
pub use params::{BlockSize, GridParameters};
