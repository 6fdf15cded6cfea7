// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon grids: hexagon-like rings made of stacked rectangles.
//!
//! Ring `k` is the union of `k + 1` inner rectangles of decreasing width and
//! increasing height, all centered on the grid. The rectangles are discovered
//! by swinging between diagonal runs above and below the first one, and each
//! is walked by its four corners. The last rectangle would walk the same
//! corners twice, so it is split into nested slices first.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use smallvec::SmallVec;

use crate::cell::CellTag;
use crate::figure::{Figure, FigureShape, PolygonRing};
use crate::geometry::is_odd;
use crate::params::{BlockSize, GridParameters};
use crate::walker::{Corner, Diagonal, Direction, Placement, Walker};

impl Figure {
    /// Number of inner rectangles making up this polygon ring.
    #[must_use]
    pub fn inner_rectangles_count(&self) -> usize {
        self.index() + 1
    }

    /// Half the number of inner rectangles, rounded down.
    #[must_use]
    pub fn half_side_in_cells(&self) -> usize {
        self.inner_rectangles_count() / 2
    }

    /// Size of inner rectangle `index`: each step away from index 0 trades
    /// one column for two rows.
    #[must_use]
    pub fn inner_rectangle_size_in_cells(&self, index: usize) -> BlockSize {
        BlockSize::new(self.size_in_cells().width - index, 2 * index + 1)
    }

    /// Which inner rectangle the walker lands on at `priority`, given the
    /// current `swing` away from the middle one.
    #[must_use]
    pub fn inner_rectangle_index(&self, priority: usize, swing: usize) -> usize {
        let half = self.half_side_in_cells();
        if self.is_odd() {
            let index = if is_odd(priority) {
                half + swing
            } else {
                half - swing
            };
            index - 1
        } else if is_odd(priority) {
            half - swing
        } else {
            half + swing
        }
    }
}

/// Builds and walks every ring of a polygon grid.
pub(crate) fn build(params: &GridParameters) -> Vec<Figure> {
    let mut figures = ring_stack(params);
    let rings = figures.len();
    let mut walker = Walker::new(&mut figures, params, Placement::AsIs);
    for index in 1..rings {
        enter_ring(&mut walker, index);
        let primitives = primitives(&mut walker);
        walker
            .figure_mut()
            .set_polygon_rectangles(primitives.iter().map(|(rect, _)| *rect).collect());
        walk_primitives(&mut walker, &primitives);
        log::trace!(
            "polygon ring {index}: {} primitives, {} cells",
            primitives.len(),
            walker.figure().cells().len()
        );
    }
    drop(walker);
    figures
}

fn ring_stack(params: &GridParameters) -> Vec<Figure> {
    let grid = params.grid_in_blocks();
    let block = params.peripheral_cell_box();
    let mut remaining_rows = grid.height - 1;
    let mut remaining_columns = grid.width - 1;

    let mut central = Figure::central(params.central_cell(), BlockSize::ONE);
    if remaining_rows == 0 && remaining_columns == 0 {
        central.mark_last();
    }
    let mut figures = vec![central];

    while let Some(current) = figures.last().filter(|figure| !figure.is_last()) {
        remaining_rows = remaining_rows.saturating_sub(2);
        remaining_columns = remaining_columns.saturating_sub(2);

        let size = current.size_in_cells();
        let mut next = Figure::around(
            current,
            current.frame().inflate(block.width, block.height),
            BlockSize::new(size.width + 2, size.height + 2),
            FigureShape::Polygon(PolygonRing::default()),
        );
        if remaining_rows == 0 && remaining_columns == 0 {
            next.mark_last();
        }
        figures.push(next);
    }
    figures
}

/// Moves from the previous ring onto the first primitive of ring `index`.
fn enter_ring(walker: &mut Walker<'_>, index: usize) {
    let previous = walker.figure();
    let anchor = previous
        .polygon()
        .and_then(|ring| ring.rectangles().first().copied());
    let previous_is_odd = previous.is_odd();

    if let Some(anchor) = anchor {
        walker.jump_to_corner(anchor, Corner::TopLeft, false);
    }
    if previous_is_odd {
        walker.step(Direction::Up, CellTag::Plain, false);
        walker.half_step(Direction::Left, false);
    } else {
        walker.step(Direction::Left, CellTag::Plain, false);
    }
    walker.enter(index);
}

/// Discovers the inner rectangles of the current ring, with their sizes in
/// blocks, by swinging diagonally around the first one.
fn primitives(walker: &mut Walker<'_>) -> Vec<(Rect, BlockSize)> {
    let figure = walker.figure();
    let count = figure.inner_rectangles_count();
    let odd = figure.is_odd();
    let first = if odd {
        figure.half_side_in_cells() - 1
    } else {
        figure.half_side_in_cells()
    };
    let sizes: Vec<BlockSize> = (0..count)
        .map(|i| figure.inner_rectangle_size_in_cells(i))
        .collect();
    let block = walker.peripheral_cell();

    let mut primitives = Vec::with_capacity(count);
    primitives.push(primitive_at(walker, sizes[first], block));

    let mut swing = 1;
    for priority in 1..count {
        let index = walker.figure().inner_rectangle_index(priority, swing);
        let diagonal = if odd == is_odd(priority) {
            Diagonal::TopRight
        } else {
            Diagonal::BottomLeft
        };
        walker.run_diagonally(diagonal, priority, false);
        primitives.push(primitive_at(walker, sizes[index], block));
        if !is_odd(priority) {
            swing += 1;
        }
    }
    primitives
}

fn primitive_at(walker: &Walker<'_>, size: BlockSize, block: Size) -> (Rect, BlockSize) {
    let origin = walker.cell().frame().origin();
    (Rect::from_origin_size(origin, size.to_size(block)), size)
}

fn walk_primitives(walker: &mut Walker<'_>, primitives: &[(Rect, BlockSize)]) {
    let Some(((last, last_size), rest)) = primitives.split_last() else {
        return;
    };
    for (rect, _) in rest {
        walk_corners(walker, *rect);
    }
    for slice in split_primitive(walker, *last, *last_size) {
        walk_corners(walker, slice);
    }
}

/// Cuts `rect` into nested slices centered on its middle column: one column
/// wide for odd widths, two for even ones, each slice two columns wider than
/// the one before.
fn split_primitive(
    walker: &mut Walker<'_>,
    rect: Rect,
    size: BlockSize,
) -> SmallVec<[Rect; 8]> {
    let block = walker.peripheral_cell();
    let odd_width = is_odd(size.width);
    let left = size.width.div_ceil(2);
    let right = size.width / 2;

    walker.jump_to_corner(rect, Corner::TopLeft, false);
    for _ in 0..right {
        walker.step(Direction::Right, CellTag::Plain, false);
    }

    let mut slice_width = if odd_width { 1 } else { 2 };
    let mut slices = SmallVec::new();
    for i in 1..=left {
        if odd_width && i == 1 {
            walker.memorize_current();
        } else {
            walker.step(Direction::Left, CellTag::Plain, false);
        }
        let origin = walker.cell().frame().origin();
        slices.push(Rect::from_origin_size(
            origin,
            BlockSize::new(slice_width, size.height).to_size(block),
        ));
        slice_width += 2;
    }
    slices
}

fn walk_corners(walker: &mut Walker<'_>, rect: Rect) {
    for corner in [
        Corner::TopLeft,
        Corner::BottomRight,
        Corner::TopRight,
        Corner::BottomLeft,
    ] {
        walker.jump_to_corner(rect, corner, true);
    }
}
