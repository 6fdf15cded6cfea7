// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rings of cells.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::cell::Cell;
use crate::params::BlockSize;

/// How a rectangle ring relates to the viewport edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RectangleRing {
    /// The ring did not grow horizontally: it only has a top and a bottom row
    /// beyond the previous ring.
    pub cut_horizontally: bool,
    /// The ring did not grow vertically: it only has a left and a right column
    /// beyond the previous ring.
    pub cut_vertically: bool,
    /// The next ring is the first one cut horizontally.
    pub last_horizontally_uncut: bool,
}

/// The inner rectangles a polygon ring is assembled from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonRing {
    rectangles: Vec<Rect>,
}

impl PolygonRing {
    /// Primitive rectangles in construction order. The first one anchors the
    /// next ring.
    #[must_use]
    pub fn rectangles(&self) -> &[Rect] {
        &self.rectangles
    }
}

/// Per-kind data of a ring.
#[derive(Clone, Debug, PartialEq)]
pub enum FigureShape {
    /// Ring 0: the central cell alone.
    Central,
    /// A ring of a rectangle grid.
    Rectangle(RectangleRing),
    /// A ring of a polygon grid.
    Polygon(PolygonRing),
}

/// One ring of a grid.
///
/// Figures live in an arena owned by [`Grid`](crate::Grid); `previous` is the
/// arena index of the ring this one was grown from.
#[derive(Clone, Debug)]
pub struct Figure {
    index: usize,
    frame: Rect,
    size_in_cells: BlockSize,
    pub(crate) cells: Vec<Cell>,
    previous: Option<usize>,
    is_last: bool,
    pub(crate) shape: FigureShape,
}

impl Figure {
    /// Ring 0, covering the central cell.
    pub(crate) fn central(frame: Rect, size_in_cells: BlockSize) -> Self {
        Self {
            index: 0,
            frame,
            size_in_cells,
            cells: Vec::new(),
            previous: None,
            is_last: false,
            shape: FigureShape::Central,
        }
    }

    /// The ring grown around `previous`.
    pub(crate) fn around(
        previous: &Self,
        frame: Rect,
        size_in_cells: BlockSize,
        shape: FigureShape,
    ) -> Self {
        Self {
            index: previous.index + 1,
            frame,
            size_in_cells,
            cells: Vec::new(),
            previous: Some(previous.index),
            is_last: false,
            shape,
        }
    }

    pub(crate) fn mark_last(&mut self) {
        self.is_last = true;
    }

    /// Distance of this ring from the center, in rings.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Outer bounding box of the ring.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Outer bounding box measured in peripheral blocks.
    #[must_use]
    pub const fn size_in_cells(&self) -> BlockSize {
        self.size_in_cells
    }

    /// Cells of this ring in discovery order, which is also index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Arena index of the ring this one grew from.
    #[must_use]
    pub const fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Whether this is the outermost ring.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.is_last
    }

    /// Per-kind ring data.
    #[must_use]
    pub const fn shape(&self) -> &FigureShape {
        &self.shape
    }

    /// Rectangle ring data, if this ring belongs to a rectangle grid.
    #[must_use]
    pub const fn rectangle(&self) -> Option<&RectangleRing> {
        match &self.shape {
            FigureShape::Rectangle(ring) => Some(ring),
            _ => None,
        }
    }

    /// Polygon ring data, if this ring belongs to a polygon grid.
    #[must_use]
    pub const fn polygon(&self) -> Option<&PolygonRing> {
        match &self.shape {
            FigureShape::Polygon(ring) => Some(ring),
            _ => None,
        }
    }

    pub(crate) fn set_polygon_rectangles(&mut self, rectangles: Vec<Rect>) {
        self.shape = FigureShape::Polygon(PolygonRing { rectangles });
    }

    /// Whether the ring index is odd.
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.index % 2 != 0
    }

    /// Whether the ring index is even.
    #[must_use]
    pub const fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// The cell with spiral index `index`, if it belongs to this ring.
    #[must_use]
    pub fn cell_by_index(&self, index: usize) -> Option<&Cell> {
        let first = self.cells.first()?.index();
        self.cells.get(index.checked_sub(first)?)
    }

    /// The cell whose frame is exactly `frame`.
    #[must_use]
    pub fn cell_by_frame(&self, frame: Rect) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.frame() == frame)
    }

    /// The most recently discovered cell of this ring.
    #[must_use]
    pub fn last_cell(&self) -> Option<&Cell> {
        self.cells.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellTag;

    fn ring_with_cells(first: usize, count: usize) -> Figure {
        let central = Figure::central(Rect::new(0.0, 0.0, 10.0, 10.0), BlockSize::ONE);
        let mut ring = Figure::around(
            &central,
            Rect::new(-10.0, -10.0, 20.0, 20.0),
            BlockSize::new(3, 3),
            FigureShape::Rectangle(RectangleRing::default()),
        );
        for i in 0..count {
            let x = i as f64 * 10.0;
            ring.cells.push(Cell::new(
                first + i,
                Rect::new(x, -10.0, x + 10.0, 0.0),
                CellTag::Plain,
            ));
        }
        ring
    }

    #[test]
    fn lookup_by_index_uses_contiguous_range() {
        let ring = ring_with_cells(1, 8);
        assert_eq!(ring.cell_by_index(0), None);
        assert_eq!(ring.cell_by_index(1).map(Cell::index), Some(1));
        assert_eq!(ring.cell_by_index(8).map(Cell::index), Some(8));
        assert_eq!(ring.cell_by_index(9), None);
        assert_eq!(ring.last_cell().map(Cell::index), Some(8));
    }

    #[test]
    fn lookup_by_frame() {
        let ring = ring_with_cells(1, 3);
        let hit = ring.cell_by_frame(Rect::new(10.0, -10.0, 20.0, 0.0));
        assert_eq!(hit.map(Cell::index), Some(2));
        assert!(ring.cell_by_frame(Rect::new(0.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn parity_and_shape() {
        let ring = ring_with_cells(1, 0);
        assert_eq!(ring.index(), 1);
        assert_eq!(ring.previous(), Some(0));
        assert!(ring.is_odd());
        assert!(!ring.is_even());
        assert!(ring.rectangle().is_some());
        assert!(ring.polygon().is_none());
        assert!(ring.cell_by_index(1).is_none());
    }
}
