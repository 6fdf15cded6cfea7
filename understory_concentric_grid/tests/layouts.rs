// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact layouts for a handful of viewports.
//!
//! All grids here use 50x50 cells with a 5pt margin, so one block is 60pt.

use kurbo::{Point, Size};
use understory_concentric_grid::{Grid, GridConfig, GridKind, PositionOnSide, RectSide};

fn grid(width: f64, height: f64, kind: GridKind) -> Grid {
    let config =
        GridConfig::new(Size::new(width, height), Size::new(50.0, 50.0)).with_cell_margin(5.0);
    let mut grid = Grid::from_config(&config, kind).expect("feasible grid");
    grid.create_grid();
    grid
}

fn ring_sizes(grid: &Grid) -> Vec<usize> {
    grid.figures().iter().map(|ring| ring.cells().len()).collect()
}

fn points(grid: &Grid, count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| grid.point_at(i).map(|p| (p.x, p.y)).expect("cell exists"))
        .collect()
}

#[test]
fn square_spiral() {
    let grid = grid(500.0, 500.0, GridKind::Rectangle { shifted: false });
    assert_eq!(ring_sizes(&grid), [1, 8, 16, 24]);
    assert_eq!(
        points(&grid, 25),
        [
            (250.0, 250.0),
            (190.0, 190.0),
            (250.0, 190.0),
            (310.0, 190.0),
            (310.0, 250.0),
            (310.0, 310.0),
            (250.0, 310.0),
            (190.0, 310.0),
            (190.0, 250.0),
            (130.0, 130.0),
            (190.0, 130.0),
            (250.0, 130.0),
            (310.0, 130.0),
            (370.0, 130.0),
            (370.0, 190.0),
            (370.0, 250.0),
            (370.0, 310.0),
            (370.0, 370.0),
            (310.0, 370.0),
            (250.0, 370.0),
            (190.0, 370.0),
            (130.0, 370.0),
            (130.0, 310.0),
            (130.0, 250.0),
            (130.0, 190.0),
        ]
    );
}

#[test]
fn square_spiral_corners_and_middles() {
    let grid = grid(500.0, 500.0, GridKind::Rectangle { shifted: false });
    let tagged: Vec<_> = (1..=8)
        .map(|i| {
            let cell = grid.cell_at(i).expect("cell exists");
            (cell.side(), cell.position_on_side())
        })
        .collect();
    assert_eq!(
        tagged,
        [
            (None, Some(PositionOnSide::TopLeft)),
            (Some(RectSide::Top), Some(PositionOnSide::TopMiddle)),
            (Some(RectSide::Top), Some(PositionOnSide::TopRight)),
            (Some(RectSide::Right), Some(PositionOnSide::RightMiddle)),
            (Some(RectSide::Right), Some(PositionOnSide::BottomRight)),
            (Some(RectSide::Bottom), Some(PositionOnSide::BottomMiddle)),
            (Some(RectSide::Bottom), Some(PositionOnSide::BottomLeft)),
            (Some(RectSide::Left), Some(PositionOnSide::LeftMiddle)),
        ]
    );
}

#[test]
fn shifted_square() {
    let grid = grid(500.0, 500.0, GridKind::Rectangle { shifted: true });
    assert_eq!(ring_sizes(&grid), [1, 8, 16, 20]);
    assert_eq!(
        points(&grid, 45),
        [
            (250.0, 250.0),
            (220.0, 190.0),
            (280.0, 190.0),
            (340.0, 190.0),
            (310.0, 250.0),
            (340.0, 310.0),
            (280.0, 310.0),
            (220.0, 310.0),
            (190.0, 250.0),
            (130.0, 130.0),
            (190.0, 130.0),
            (250.0, 130.0),
            (310.0, 130.0),
            (370.0, 130.0),
            (400.0, 190.0),
            (370.0, 250.0),
            (400.0, 310.0),
            (370.0, 370.0),
            (310.0, 370.0),
            (250.0, 370.0),
            (190.0, 370.0),
            (130.0, 370.0),
            (160.0, 310.0),
            (130.0, 250.0),
            (160.0, 190.0),
            (100.0, 70.0),
            (160.0, 70.0),
            (220.0, 70.0),
            (280.0, 70.0),
            (340.0, 70.0),
            (400.0, 70.0),
            (430.0, 130.0),
            (430.0, 250.0),
            (430.0, 370.0),
            (400.0, 430.0),
            (340.0, 430.0),
            (280.0, 430.0),
            (220.0, 430.0),
            (160.0, 430.0),
            (100.0, 430.0),
            (70.0, 370.0),
            (100.0, 310.0),
            (70.0, 250.0),
            (100.0, 190.0),
            (70.0, 130.0),
        ]
    );
}

#[test]
fn shifted_grid_with_a_large_central_cell() {
    let config = GridConfig::new(Size::new(600.0, 600.0), Size::new(50.0, 50.0))
        .with_central_cell(Size::new(100.0, 100.0))
        .with_cell_margin(5.0);
    let mut grid =
        Grid::from_config(&config, GridKind::Rectangle { shifted: true }).expect("feasible grid");
    grid.create_grid();

    assert_eq!(grid.len(), 68);
    assert_eq!(ring_sizes(&grid), [1, 16, 24, 27]);
    assert_eq!(grid.params().central_cell_origin(), Point::new(210.0, 210.0));
    assert_eq!(points(&grid, 3), [(300.0, 300.0), (210.0, 180.0), (270.0, 180.0)]);

    // The left cell on the central cell's middle row keeps its walked place,
    // while the right one is shifted.
    let left = grid.cell_at(15).expect("cell exists");
    assert_eq!(left.position_on_side(), Some(PositionOnSide::LeftMiddle));
    assert_eq!(left.center(), Point::new(180.0, 300.0));
    let right = grid.cell_at(7).expect("cell exists");
    assert_eq!(right.position_on_side(), Some(PositionOnSide::RightMiddle));
    assert_eq!(right.center(), Point::new(450.0, 300.0));
}

#[test]
fn tall_viewport_is_cut_into_rows() {
    let grid = grid(320.0, 568.0, GridKind::Rectangle { shifted: false });
    let blocks = grid.params().grid_in_blocks();
    assert_eq!((blocks.width, blocks.height), (5, 9));
    assert_eq!(ring_sizes(&grid), [1, 8, 16, 10, 10]);

    let rings = grid.figures();
    let cut = |i: usize| rings[i].rectangle().map(|r| (r.cut_horizontally, r.cut_vertically));
    assert_eq!(cut(2), Some((false, false)));
    assert_eq!(cut(3), Some((true, false)));
    assert_eq!(cut(4), Some((true, false)));
    assert!(rings[2].rectangle().is_some_and(|r| r.last_horizontally_uncut));
    assert!(rings[4].is_last());

    // A cut ring only adds a top and a bottom row.
    let centers: Vec<_> = rings[3].cells().iter().map(|c| c.center().y).collect();
    assert!(centers.iter().all(|y| *y == 104.0 || *y == 464.0));
}

#[test]
fn shifted_rectangles_in_other_viewports() {
    assert_eq!(
        ring_sizes(&grid(320.0, 568.0, GridKind::Rectangle { shifted: true })),
        [1, 8, 14, 8, 10]
    );
    assert_eq!(
        ring_sizes(&grid(568.0, 320.0, GridKind::Rectangle { shifted: true })),
        [1, 8, 16, 10, 8]
    );
    assert_eq!(
        ring_sizes(&grid(600.0, 600.0, GridKind::Rectangle { shifted: true })),
        [1, 8, 16, 24, 28]
    );
}

#[test]
fn wide_and_tall_unshifted_counts() {
    assert_eq!(grid(568.0, 320.0, GridKind::Rectangle { shifted: false }).len(), 45);
    assert_eq!(grid(375.0, 667.0, GridKind::Rectangle { shifted: false }).len(), 55);
    assert_eq!(grid(1000.0, 1000.0, GridKind::Rectangle { shifted: false }).len(), 225);
}

#[test]
fn polygon_rings() {
    let grid = grid(600.0, 600.0, GridKind::Polygon);
    assert_eq!(ring_sizes(&grid), [1, 6, 12, 18, 24]);
    assert_eq!(
        points(&grid, 19),
        [
            (300.0, 300.0),
            (240.0, 300.0),
            (360.0, 300.0),
            (270.0, 240.0),
            (330.0, 360.0),
            (330.0, 240.0),
            (270.0, 360.0),
            (210.0, 240.0),
            (390.0, 360.0),
            (390.0, 240.0),
            (210.0, 360.0),
            (180.0, 300.0),
            (420.0, 300.0),
            (300.0, 180.0),
            (300.0, 420.0),
            (240.0, 180.0),
            (360.0, 420.0),
            (360.0, 180.0),
            (240.0, 420.0),
        ]
    );
}

#[test]
fn polygon_rings_in_other_viewports() {
    assert_eq!(ring_sizes(&grid(500.0, 500.0, GridKind::Polygon)), [1, 6, 12, 18]);
    assert_eq!(ring_sizes(&grid(320.0, 568.0, GridKind::Polygon)), [1, 6, 12, 12, 10]);
    assert_eq!(ring_sizes(&grid(1000.0, 1000.0, GridKind::Polygon)).iter().sum::<usize>(), 169);
}

#[test]
fn tiny_viewports_hold_one_cell() {
    for kind in [
        GridKind::Rectangle { shifted: false },
        GridKind::Rectangle { shifted: true },
        GridKind::Polygon,
    ] {
        for side in [60.0, 130.0] {
            let grid = grid(side, side, kind);
            assert_eq!(grid.len(), 1);
            assert_eq!(grid.point_at(0), Some(Point::new(side / 2.0, side / 2.0)));
        }
    }
}
