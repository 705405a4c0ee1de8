use emath::Pos2;

mod bounds;

pub use bounds::*;

/// A point in the brush's coordinate space. The brush never converts units,
/// so this is whatever space the caller maps pointer positions into.
pub type Point = Pos2;

/// The two corners of a rectangle in progress. Corner order is arbitrary,
/// `start` is where the gesture began.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub start: Point,
    pub current: Point,
}

impl Dimensions {
    pub const ZERO: Self = Self {
        start: Pos2::ZERO,
        current: Pos2::ZERO,
    };

    pub fn new(start: Point, current: Point) -> Self {
        Self { start, current }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn min(&self) -> Point {
        Pos2::new(self.x, self.y)
    }

    pub fn max(&self) -> Point {
        Pos2::new(self.x + self.width, self.y + self.height)
    }

    pub fn to_emath(self) -> emath::Rect {
        emath::Rect::from_min_max(self.min(), self.max())
    }
}

pub fn dimensions_to_rect(dims: &Dimensions) -> Rect {
    let Dimensions { start, current } = dims;
    Rect {
        x: start.x.min(current.x),
        y: start.y.min(current.y),
        width: (start.x - current.x).abs(),
        height: (start.y - current.y).abs(),
    }
}

/// Same as [`dimensions_to_rect`]. Kept under the name adapters use for rendering.
pub fn rect_of(dims: &Dimensions) -> Rect {
    dimensions_to_rect(dims)
}

pub fn dimensions_to_bounds(dims: &Dimensions) -> Bounds {
    let Dimensions { start, current } = dims;
    Bounds {
        left: start.x.min(current.x),
        right: start.x.max(current.x),
        upper: start.y.min(current.y),
        lower: start.y.max(current.y),
    }
}

/// Strict interior test. A point lying exactly on an edge is outside.
pub fn point_in_bounds(bounds: &Bounds, point: Point) -> bool {
    let Bounds {
        left,
        right,
        upper,
        lower,
    } = *bounds;
    (point.x - left) * (point.x - right) < 0.0 && (point.y - upper) * (point.y - lower) < 0.0
}

pub fn add(a: Point, b: Point) -> Point {
    a + b.to_vec2()
}

pub fn subtract(a: Point, b: Point) -> Point {
    (a - b).to_pos2()
}
