//! Size and bounds constraints applied while a brush is resized or dragged.
//!
//! All functions expect normalized bounds (see [`crate::normalize_bounds`]).
//! Minimum size is applied before bounds clamping, so bounds tighter than the
//! minimum size win.

use crate::{add, subtract, Bounds, Dimensions, Point};

/// Pushes `point` away from `start` so that every axis which already moved
/// spans at least `min_size`. Axes without movement stay at zero span.
pub fn enforce_minimum_size(point: Point, start: Point, min_size: f32) -> Point {
    if min_size.is_nan() || min_size <= 0.0 {
        return point;
    }
    Point::new(
        enforce_axis(point.x, start.x, min_size),
        enforce_axis(point.y, start.y, min_size),
    )
}

fn enforce_axis(value: f32, start: f32, min_size: f32) -> f32 {
    let span = value - start;
    if span != 0.0 && span.abs() < min_size {
        start + min_size.copysign(span)
    } else {
        value
    }
}

/// Keeps the rectangle spanned by `start` and `current` inside `bounds`.
///
/// `current` is clamped first. `start` may still lie outside (the gesture
/// began outside or the bounds shrank), so each edge is checked in the order
/// left, right, upper, lower and the corner on the offending side is shifted
/// back by the overflow.
pub fn constrain_rectangle_within_bounds(
    start: Point,
    current: Point,
    bounds: &Bounds,
) -> Dimensions {
    let mut start = start;
    let mut current = bounds.clamp(current);

    let min_x = start.x.min(current.x);
    if min_x < bounds.left {
        let overflow = bounds.left - min_x;
        if start.x <= current.x {
            start.x += overflow;
        } else {
            current.x += overflow;
        }
    }

    let max_x = start.x.max(current.x);
    if max_x > bounds.right {
        let overflow = max_x - bounds.right;
        if start.x >= current.x {
            start.x -= overflow;
        } else {
            current.x -= overflow;
        }
    }

    let min_y = start.y.min(current.y);
    if min_y < bounds.upper {
        let overflow = bounds.upper - min_y;
        if start.y <= current.y {
            start.y += overflow;
        } else {
            current.y += overflow;
        }
    }

    let max_y = start.y.max(current.y);
    if max_y > bounds.lower {
        let overflow = max_y - bounds.lower;
        if start.y >= current.y {
            start.y -= overflow;
        } else {
            current.y -= overflow;
        }
    }

    Dimensions { start, current }
}

/// Resize step of a brush: minimum size first, then bounds.
pub fn resize_brush(
    point: Point,
    start: Point,
    min_size: f32,
    bounds: Option<&Bounds>,
) -> Dimensions {
    let current = enforce_minimum_size(point, start, min_size);
    match bounds {
        Some(bounds) => constrain_rectangle_within_bounds(start, current, bounds),
        None => Dimensions { start, current },
    }
}

/// Translates `dims` by the pointer movement since `previous_position`.
///
/// With bounds, every axis is handled on its own: an axis on which the brush
/// fits is clamped so the brush stays inside, an axis on which the brush is
/// larger than the bounds is pinned flush against the edge in the direction
/// of movement (its lower edge when moving towards larger values, its upper
/// edge otherwise) and left alone without movement on that axis. The same
/// offset is applied to both corners, so `start` and `current` keep their
/// relative order.
pub fn move_brush(
    point: Point,
    dims: Dimensions,
    previous_position: Point,
    bounds: Option<&Bounds>,
) -> Dimensions {
    let diff = subtract(point, previous_position);
    let moved = Dimensions {
        start: add(dims.start, diff),
        current: add(dims.current, diff),
    };
    let Some(bounds) = bounds else {
        return moved;
    };

    let width = (dims.start.x - dims.current.x).abs();
    let height = (dims.start.y - dims.current.y).abs();
    let min_x = moved.start.x.min(moved.current.x);
    let min_y = moved.start.y.min(moved.current.y);

    let offset_x = clamp_axis(min_x, width, diff.x, bounds.left, bounds.right) - min_x;
    let offset_y = clamp_axis(min_y, height, diff.y, bounds.upper, bounds.lower) - min_y;
    let offset = Point::new(offset_x, offset_y);

    Dimensions {
        start: add(moved.start, offset),
        current: add(moved.current, offset),
    }
}

/// Returns the clamped minimum of a segment of length `size` moved by `delta`.
fn clamp_axis(min: f32, size: f32, delta: f32, low: f32, high: f32) -> f32 {
    if size <= high - low {
        return min.max(low).min(high - size);
    }
    if delta > 0.0 {
        low
    } else if delta < 0.0 {
        high - size
    } else {
        min
    }
}
