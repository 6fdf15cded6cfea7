// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small helpers on top of Kurbo's rectangle type.

use kurbo::{Rect, Size};

/// Bit-exact identity of a frame, used to memoize visited cells.
pub(crate) type FrameKey = [u64; 4];

/// Returns the memo key of `frame`.
///
/// Two frames share a key exactly when they compare equal, so `-0.0` is folded
/// into `0.0` first.
pub(crate) fn frame_key(frame: Rect) -> FrameKey {
    [
        (frame.x0 + 0.0).to_bits(),
        (frame.y0 + 0.0).to_bits(),
        (frame.x1 + 0.0).to_bits(),
        (frame.y1 + 0.0).to_bits(),
    ]
}

/// Returns `true` if `inner` lies entirely within `outer`, edges included.
pub(crate) fn contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && inner.x1 <= outer.x1 && inner.y1 <= outer.y1
}

/// A cell-sized frame with its top-left corner at `(x, y)`.
pub(crate) fn cell_frame(x: f64, y: f64, cell: Size) -> Rect {
    Rect::from_origin_size((x, y), cell)
}

pub(crate) const fn is_odd(n: usize) -> bool {
    n % 2 != 0
}

/// Floor of `numerator / denominator` for non-negative finite operands.
pub(crate) fn floor_ratio(numerator: f64, denominator: f64) -> usize {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Block counts are small and non-negative; truncation is the floor we want"
    )]
    {
        (numerator / denominator) as usize
    }
}

/// Ceiling of `numerator / denominator` for non-negative finite operands.
pub(crate) fn ceil_ratio(numerator: f64, denominator: f64) -> usize {
    let ratio = numerator / denominator;
    let floor = floor_ratio(numerator, denominator);
    if (floor as f64) < ratio {
        floor + 1
    } else {
        floor
    }
}

/// Rounds half away from zero.
pub(crate) fn round_to_i64(value: f64) -> i64 {
    let nudged = if value < 0.0 { value - 0.5 } else { value + 0.5 };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Row offsets are bounded by the number of rings"
    )]
    {
        nudged as i64
    }
}
