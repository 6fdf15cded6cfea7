// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle grids: concentric rectangular rings walked clockwise.
//!
//! A ring grows by one block on each side of every axis that still has room.
//! Once an axis runs out of room the ring is *cut* on that axis and only its
//! two outer rows (or columns) are new. In shifted mode, rows an odd number of
//! blocks away from the central row are offset by half a block, which is why
//! the shifted walks skip the cells that would slide past the right edge.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::cell::{CellTag, PositionOnSide, RectSide};
use crate::figure::{Figure, FigureShape, RectangleRing};
use crate::params::{BlockSize, GridParameters};
use crate::walker::{Direction, Placement, Walker};

/// Builds and walks every ring of a rectangle grid.
pub(crate) fn build(params: &GridParameters, shifted: bool) -> Vec<Figure> {
    let mut figures = ring_stack(params);
    let placement = if shifted {
        Placement::brick_rows(params)
    } else {
        Placement::AsIs
    };

    let rings = figures.len();
    let mut walker = Walker::new(&mut figures, params, placement);
    for index in 1..rings {
        walker.enter(index);
        let mut ring = RingWalker { walker: &mut walker };
        ring.enter();
        if shifted {
            ring.walk_shifted();
        } else {
            ring.walk();
        }
        log::trace!(
            "rectangle ring {index}: {} cells",
            walker.figure().cells().len()
        );
    }
    drop(walker);

    if shifted {
        shift_rows(&mut figures, placement);
    }
    figures
}

/// Lays out the ring frames from the central cell outwards.
fn ring_stack(params: &GridParameters) -> Vec<Figure> {
    let grid = params.grid_in_blocks();
    let block = params.peripheral_cell_box();
    let mut figures = vec![Figure::central(
        params.central_cell(),
        params.central_cell_box_in_blocks(),
    )];

    loop {
        let Some(current) = figures.last_mut() else {
            break;
        };
        let size = current.size_in_cells();
        let cut_horizontally = grid.width - size.width <= 1;
        let cut_vertically = grid.height - size.height <= 1;

        if let FigureShape::Rectangle(ring) = &mut current.shape {
            if cut_horizontally && !ring.cut_horizontally {
                ring.last_horizontally_uncut = true;
            }
        }
        if cut_horizontally && cut_vertically {
            current.mark_last();
            break;
        }

        let grow_x = if cut_horizontally { 0 } else { 2 };
        let grow_y = if cut_vertically { 0 } else { 2 };
        let frame = current.frame().inflate(
            if cut_horizontally { 0.0 } else { block.width },
            if cut_vertically { 0.0 } else { block.height },
        );
        let next = Figure::around(
            current,
            frame,
            BlockSize::new(size.width + grow_x, size.height + grow_y),
            FigureShape::Rectangle(RectangleRing {
                cut_horizontally,
                cut_vertically,
                last_horizontally_uncut: false,
            }),
        );
        figures.push(next);
    }
    figures
}

/// Moves the cells on shifted rows into their final place.
fn shift_rows(figures: &mut [Figure], placement: Placement) {
    for figure in figures.iter_mut().skip(1) {
        for cell in &mut figure.cells {
            let placed = placement.place(cell.frame());
            cell.set_frame(placed);
        }
    }
}

struct RingWalker<'w, 'a> {
    walker: &'w mut Walker<'a>,
}

impl RingWalker<'_, '_> {
    fn ring(&self) -> RectangleRing {
        self.walker
            .figure()
            .rectangle()
            .copied()
            .unwrap_or_default()
    }

    /// Steps from the previous ring's top-left cell onto this ring.
    fn enter(&mut self) {
        let ring = self.ring();
        if ring.cut_horizontally {
            self.walker.step(
                Direction::Up,
                CellTag::side_at(RectSide::Top, PositionOnSide::TopLeft),
                true,
            );
        } else if ring.cut_vertically {
            self.walker.step(
                Direction::Left,
                CellTag::side_at(RectSide::Left, PositionOnSide::TopLeft),
                true,
            );
        } else {
            let frame = self.walker.figure().frame();
            self.walker.move_absolute(
                frame.x0,
                frame.y0,
                CellTag::Side {
                    side: None,
                    position: Some(PositionOnSide::TopLeft),
                },
                true,
            );
        }
    }

    fn walk(&mut self) {
        let ring = self.ring();
        if ring.cut_horizontally {
            self.walk_side(RectSide::Top, 0, false);
            self.jump_to_opposite_side(true, false);
            self.walk_side(RectSide::Bottom, 0, false);
            self.jump_to_opposite_side(true, false);
        } else if ring.cut_vertically {
            self.jump_to_opposite_side(true, false);
            self.walk_side(RectSide::Right, 0, false);
            self.jump_to_opposite_side(true, false);
            self.walk_side(RectSide::Left, 0, false);
        } else {
            self.walk_perimeter();
        }
    }

    fn walk_shifted(&mut self) {
        let ring = self.ring();
        let odd = self.walker.figure().is_odd();
        if ring.cut_horizontally {
            if odd {
                self.walk_top_short_of_corner();
                self.jump_to_opposite_side(false, false);
            } else {
                self.walk_side(RectSide::Top, 0, false);
                self.jump_to_opposite_side(true, false);
            }
            self.walk_side(RectSide::Bottom, 0, false);
            self.jump_to_opposite_side(true, false);
        } else if ring.cut_vertically {
            let skip = ring.last_horizontally_uncut;
            self.jump_to_opposite_side(true, skip);
            self.walk_side(RectSide::Right, 0, skip);
            self.jump_to_opposite_side(true, skip);
            self.walk_side(RectSide::Left, 0, false);
        } else if ring.last_horizontally_uncut {
            if odd {
                self.walk_top_short_of_corner();
            } else {
                self.walk_side(RectSide::Top, 0, false);
            }
            self.walk_side(RectSide::Right, 0, true);
            self.walk_side(RectSide::Bottom, 0, false);
            self.walk_side(RectSide::Left, 0, false);
        } else {
            self.walk_perimeter();
        }
    }

    fn walk_perimeter(&mut self) {
        for side in [RectSide::Top, RectSide::Right, RectSide::Bottom, RectSide::Left] {
            self.walk_side(side, 0, false);
        }
    }

    /// Walks the top row but leaves its right-most cell, which a shifted odd
    /// row pushes out of the grid, as an unmemorized landing.
    fn walk_top_short_of_corner(&mut self) {
        self.walk_side(RectSide::Top, 1, false);
        self.walker
            .step(Direction::Right, CellTag::side(RectSide::Top), false);
    }

    /// Walks clockwise along `side`, stopping `skip_last` cells early. With
    /// `skip_shifted_rows`, cells that get shifted are passed over without
    /// being memorized.
    fn walk_side(&mut self, side: RectSide, skip_last: usize, skip_shifted_rows: bool) {
        let size = self.walker.figure().size_in_cells();
        let length = match side {
            RectSide::Top | RectSide::Bottom => size.width,
            RectSide::Right | RectSide::Left => size.height,
        };
        let direction = match side {
            RectSide::Top => Direction::Right,
            RectSide::Right => Direction::Down,
            RectSide::Bottom => Direction::Left,
            RectSide::Left => Direction::Up,
        };
        let count = length.saturating_sub(1).saturating_sub(skip_last);

        for i in 1..=count {
            let destination = self.walker.neighbor(direction);
            if skip_shifted_rows && self.walker.placement().shifts(destination) {
                self.walker
                    .move_to(destination, CellTag::side(side), false);
                continue;
            }
            let tag = if i == count {
                CellTag::side_at(side, side.ending_corner())
            } else if i == count / 2 {
                CellTag::side_at(side, side.middle())
            } else {
                CellTag::side(side)
            };
            self.walker.move_to(destination, tag, true);
        }
    }

    /// Crosses the ring to the side opposite the current cell's side.
    fn jump_to_opposite_side(&mut self, memorize: bool, skip_shifted_rows: bool) {
        let Some(side) = self.walker.cell().side() else {
            return;
        };
        let frame = self.walker.figure().frame();
        let block = self.walker.peripheral_cell();
        let across_x = frame.width() - block.width;
        let across_y = frame.height() - block.height;
        let (dx, dy, landing) = match side {
            RectSide::Top => (0.0, across_y, PositionOnSide::BottomRight),
            RectSide::Bottom => (0.0, -across_y, PositionOnSide::TopLeft),
            RectSide::Left => (across_x, 0.0, PositionOnSide::TopRight),
            RectSide::Right => (-across_x, 0.0, PositionOnSide::BottomLeft),
        };
        let tag = CellTag::side_at(side.opposite(), landing);

        let origin = self.walker.cell().frame().origin();
        let destination = Rect::from_origin_size((origin.x + dx, origin.y + dy), block);
        let memorize =
            memorize && !(skip_shifted_rows && self.walker.placement().shifts(destination));

        if side == RectSide::Top {
            self.walker.jump_to_opposite_bottom_cell(tag, memorize);
        } else {
            self.walker.move_relative(dx, dy, tag, memorize);
        }
    }
}
