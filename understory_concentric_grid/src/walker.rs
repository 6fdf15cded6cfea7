// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cursor that moves across the plane in peripheral-cell steps and registers
//! the cells it lands on.
//!
//! The walker only ever appends to the figure it is currently inside. Every
//! move produces a cell; a cell is memorized (kept, and counted) only when the
//! caller asks for it and its placed frame lies within the grid bounds. Moves
//! onto a frame already memorized in the current figure re-enter that cell and
//! do not consume an index.

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};

use crate::cell::{Cell, CellTag};
use crate::figure::Figure;
use crate::geometry::{FrameKey, cell_frame, contains_rect, frame_key, round_to_i64};
use crate::params::GridParameters;

/// A unit move along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, -1.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Down => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
        }
    }
}

/// A corner of a rectangle, for corner-aligned cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// A diagonal run: one full vertical step followed by a half horizontal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Diagonal {
    TopRight,
    BottomLeft,
}

/// Where a frame ends up once the grid is finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Placement {
    /// Frames stay where they were walked.
    AsIs,
    /// Rows an odd number of blocks away from the top of `central` are moved
    /// right by half a block, except where they pass beside `central` on its
    /// left.
    BrickRows { central: Rect, block: Size },
}

impl Placement {
    pub(crate) fn brick_rows(params: &GridParameters) -> Self {
        Self::BrickRows {
            central: params.central_cell(),
            block: params.peripheral_cell_box(),
        }
    }

    /// Whether a cell walked at `frame` gets shifted.
    ///
    /// Cells left of the central cell, on rows it spans, stay put so none of
    /// them is pushed into it.
    pub(crate) fn shifts(self, frame: Rect) -> bool {
        match self {
            Self::AsIs => false,
            Self::BrickRows { central, block } => {
                let odd_row = round_to_i64((frame.y0 - central.y0) / block.height) % 2 != 0;
                let center = frame.center();
                let beside_central =
                    center.x < central.x0 && center.y > central.y0 && center.y < central.y1;
                odd_row && !beside_central
            }
        }
    }

    /// The final frame of a cell walked at `frame`.
    pub(crate) fn place(self, frame: Rect) -> Rect {
        match self {
            Self::BrickRows { block, .. } if self.shifts(frame) => {
                frame + Vec2::new(block.width / 2.0, 0.0)
            }
            _ => frame,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Walker<'a> {
    figures: &'a mut [Figure],
    figure: usize,
    cell: Cell,
    peripheral_cell: Size,
    bounds: Rect,
    placement: Placement,
    visited: HashMap<FrameKey, usize>,
}

impl<'a> Walker<'a> {
    /// Starts a walk standing on the central cell, which becomes cell 0 of
    /// ring 0.
    pub(crate) fn new(
        figures: &'a mut [Figure],
        params: &GridParameters,
        placement: Placement,
    ) -> Self {
        let central = Cell::new(0, params.central_cell(), CellTag::Plain);
        let mut visited = HashMap::new();
        if let Some(ring) = figures.first_mut() {
            ring.cells.clear();
            ring.cells.push(central);
            visited.insert(frame_key(central.frame()), 0);
        }
        Self {
            figures,
            figure: 0,
            cell: central,
            peripheral_cell: params.peripheral_cell_box(),
            bounds: params.grid_bounds(),
            placement,
            visited,
        }
    }

    /// Makes `figure` the one new cells are appended to.
    pub(crate) fn enter(&mut self, figure: usize) {
        self.figure = figure;
        self.visited.clear();
        for (slot, cell) in self.figures[figure].cells.iter().enumerate() {
            self.visited.insert(frame_key(cell.frame()), slot);
        }
    }

    pub(crate) fn figure(&self) -> &Figure {
        &self.figures[self.figure]
    }

    pub(crate) fn figure_mut(&mut self) -> &mut Figure {
        &mut self.figures[self.figure]
    }

    /// The cell last moved to, memorized or not.
    pub(crate) fn cell(&self) -> Cell {
        self.cell
    }

    pub(crate) fn peripheral_cell(&self) -> Size {
        self.peripheral_cell
    }

    pub(crate) fn placement(&self) -> Placement {
        self.placement
    }

    /// The frame one full step away from the current cell.
    pub(crate) fn neighbor(&self, direction: Direction) -> Rect {
        let step = direction.unit();
        let origin = self.cell.frame().origin()
            + Vec2::new(
                step.x * self.peripheral_cell.width,
                step.y * self.peripheral_cell.height,
            );
        cell_frame(origin.x, origin.y, self.peripheral_cell)
    }

    /// Moves onto `frame`.
    pub(crate) fn move_to(&mut self, frame: Rect, tag: CellTag, memorize: bool) {
        let key = frame_key(frame);
        if let Some(&slot) = self.visited.get(&key) {
            self.cell = self.figures[self.figure].cells[slot];
            return;
        }

        let cell = Cell::new(self.next_index(), frame, tag);
        if memorize && contains_rect(self.bounds, self.placement.place(frame)) {
            let figure = &mut self.figures[self.figure];
            self.visited.insert(key, figure.cells.len());
            figure.cells.push(cell);
        }
        self.cell = cell;
    }

    pub(crate) fn move_relative(&mut self, dx: f64, dy: f64, tag: CellTag, memorize: bool) {
        let origin = self.cell.frame().origin() + Vec2::new(dx, dy);
        self.move_absolute(origin.x, origin.y, tag, memorize);
    }

    pub(crate) fn move_absolute(&mut self, x: f64, y: f64, tag: CellTag, memorize: bool) {
        self.move_to(cell_frame(x, y, self.peripheral_cell), tag, memorize);
    }

    pub(crate) fn step(&mut self, direction: Direction, tag: CellTag, memorize: bool) {
        let frame = self.neighbor(direction);
        self.move_to(frame, tag, memorize);
    }

    pub(crate) fn half_step(&mut self, direction: Direction, memorize: bool) {
        let step = direction.unit();
        self.move_relative(
            step.x * self.peripheral_cell.width / 2.0,
            step.y * self.peripheral_cell.height / 2.0,
            CellTag::Plain,
            memorize,
        );
    }

    /// Moves onto the cell-sized frame aligned with `corner` inside `rect`.
    pub(crate) fn jump_to_corner(&mut self, rect: Rect, corner: Corner, memorize: bool) {
        let Size { width, height } = self.peripheral_cell;
        let origin = match corner {
            Corner::TopLeft => Point::new(rect.x0, rect.y0),
            Corner::TopRight => Point::new(rect.x1 - width, rect.y0),
            Corner::BottomRight => Point::new(rect.x1 - width, rect.y1 - height),
            Corner::BottomLeft => Point::new(rect.x0, rect.y1 - height),
        };
        self.move_absolute(origin.x, origin.y, CellTag::Plain, memorize);
    }

    /// Moves straight down across the current figure, from its top row to its
    /// bottom row.
    pub(crate) fn jump_to_opposite_bottom_cell(&mut self, tag: CellTag, memorize: bool) {
        let dy = self.figure().frame().height() - self.peripheral_cell.height;
        self.move_relative(0.0, dy, tag, memorize);
    }

    /// Runs `steps` times along `diagonal`; only the final landing may be
    /// memorized.
    pub(crate) fn run_diagonally(&mut self, diagonal: Diagonal, steps: usize, memorize: bool) {
        let (vertical, horizontal) = match diagonal {
            Diagonal::TopRight => (Direction::Up, Direction::Right),
            Diagonal::BottomLeft => (Direction::Down, Direction::Left),
        };
        for i in 1..=steps {
            self.step(vertical, CellTag::Plain, false);
            self.half_step(horizontal, memorize && i == steps);
        }
    }

    /// Registers the cell the walker is standing on.
    pub(crate) fn memorize_current(&mut self) {
        let cell = self.cell;
        self.move_to(cell.frame(), cell.tag(), true);
    }

    /// Index for a newly discovered cell: one past the last cell of the
    /// nearest ring, walking inwards, that has any.
    fn next_index(&self) -> usize {
        let mut figure = Some(self.figure);
        while let Some(current) = figure {
            let ring = &self.figures[current];
            if let Some(last) = ring.last_cell() {
                return last.index() + 1;
            }
            figure = ring.previous();
        }
        0
    }
}
