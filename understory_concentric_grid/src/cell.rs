// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cells and the side tags rectangle rings attach to them.

use kurbo::{Point, Rect};

/// A side of a rectangle ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RectSide {
    /// The top row, walked left to right.
    Top,
    /// The right column, walked top to bottom.
    Right,
    /// The bottom row, walked right to left.
    Bottom,
    /// The left column, walked bottom to top.
    Left,
}

impl RectSide {
    /// The side facing this one across the ring.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The corner a clockwise walk along this side ends on.
    #[must_use]
    pub const fn ending_corner(self) -> PositionOnSide {
        match self {
            Self::Top => PositionOnSide::TopRight,
            Self::Right => PositionOnSide::BottomRight,
            Self::Bottom => PositionOnSide::BottomLeft,
            Self::Left => PositionOnSide::TopLeft,
        }
    }

    /// The middle position of this side.
    #[must_use]
    pub const fn middle(self) -> PositionOnSide {
        match self {
            Self::Top => PositionOnSide::TopMiddle,
            Self::Right => PositionOnSide::RightMiddle,
            Self::Bottom => PositionOnSide::BottomMiddle,
            Self::Left => PositionOnSide::LeftMiddle,
        }
    }
}

/// A notable position along a ring's perimeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionOnSide {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top side.
    TopMiddle,
    /// Top-right corner.
    TopRight,
    /// Middle of the right side.
    RightMiddle,
    /// Bottom-right corner.
    BottomRight,
    /// Middle of the bottom side.
    BottomMiddle,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the left side.
    LeftMiddle,
}

/// Placement metadata attached to a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellTag {
    /// No placement metadata: the central cell and every polygon cell.
    #[default]
    Plain,
    /// A cell on a rectangle ring.
    Side {
        /// The side the cell was walked along, if any. The first cell of a full
        /// ring is reached by a jump and has no side.
        side: Option<RectSide>,
        /// Corner or middle position, if the cell sits on one.
        position: Option<PositionOnSide>,
    },
}

impl CellTag {
    /// A side tag without a notable position.
    #[must_use]
    pub const fn side(side: RectSide) -> Self {
        Self::Side {
            side: Some(side),
            position: None,
        }
    }

    /// A side tag with a notable position.
    #[must_use]
    pub const fn side_at(side: RectSide, position: PositionOnSide) -> Self {
        Self::Side {
            side: Some(side),
            position: Some(position),
        }
    }
}

/// One laid-out cell.
///
/// Cells compare equal when their frames are equal; the index is a label
/// assigned in discovery order and does not take part in equality.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    index: usize,
    frame: Rect,
    tag: CellTag,
}

impl Cell {
    pub(crate) const fn new(index: usize, frame: Rect, tag: CellTag) -> Self {
        Self { index, frame, tag }
    }

    /// Position of this cell in the spiral numbering.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Frame of the cell, margins included.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// Placement metadata.
    #[must_use]
    pub const fn tag(&self) -> CellTag {
        self.tag
    }

    /// Mid-point of the frame.
    #[must_use]
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// The side this cell was walked along, if it has one.
    #[must_use]
    pub const fn side(&self) -> Option<RectSide> {
        match self.tag {
            CellTag::Side { side, .. } => side,
            CellTag::Plain => None,
        }
    }

    /// The corner or middle position of this cell, if it has one.
    #[must_use]
    pub const fn position_on_side(&self) -> Option<PositionOnSide> {
        match self.tag {
            CellTag::Side { position, .. } => position,
            CellTag::Plain => None,
        }
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.frame == other.frame
    }
}
