use emath::Pos2;

use super::Point;

/// Axis aligned region a brush may be constrained to.
/// `upper` is the smaller y value, matching screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub upper: f32,
    pub lower: f32,
}

/// Recoverable problems found by [`normalize_bounds`]. Never fatal.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum BoundsWarning {
    #[error("Bounds contain non-finite values, passing them through unchanged: {0:?}")]
    NonFinite(Bounds),
    #[error("Bounds were inverted (horizontal: {horizontal}, vertical: {vertical}) and got reordered")]
    Inverted { horizontal: bool, vertical: bool },
}

impl Bounds {
    /// Creates bounds as given. Use [`normalize_bounds`] for caller supplied values.
    pub const fn new(left: f32, right: f32, upper: f32, lower: f32) -> Self {
        Self {
            left,
            right,
            upper,
            lower,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.lower - self.upper
    }

    pub fn is_finite(&self) -> bool {
        [self.left, self.right, self.upper, self.lower]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Clamps `point` into `[left, right] x [upper, lower]`.
    /// Unlike `f32::clamp` this never panics on unnormalized bounds.
    pub fn clamp(&self, point: Point) -> Point {
        Pos2::new(
            point.x.max(self.left).min(self.right),
            point.y.max(self.upper).min(self.lower),
        )
    }

    pub fn to_emath(self) -> emath::Rect {
        emath::Rect::from_min_max(
            Pos2::new(self.left, self.upper),
            Pos2::new(self.right, self.lower),
        )
    }
}

impl From<emath::Rect> for Bounds {
    fn from(r: emath::Rect) -> Self {
        Self::new(r.min.x, r.max.x, r.min.y, r.max.y)
    }
}

/// Validates caller supplied bounds.
///
/// Non-finite bounds are returned unchanged, inverted bounds get swapped.
/// Both cases are reported as a warning and logged, neither is an error.
pub fn normalize_bounds(bounds: Bounds) -> (Bounds, Option<BoundsWarning>) {
    if !bounds.is_finite() {
        let warning = BoundsWarning::NonFinite(bounds);
        log::warn!("{warning}");
        return (bounds, Some(warning));
    }

    let horizontal = bounds.left > bounds.right;
    let vertical = bounds.upper > bounds.lower;
    if !horizontal && !vertical {
        return (bounds, None);
    }

    let warning = BoundsWarning::Inverted {
        horizontal,
        vertical,
    };
    log::warn!("{warning}");
    let normalized = Bounds {
        left: bounds.left.min(bounds.right),
        right: bounds.left.max(bounds.right),
        upper: bounds.upper.min(bounds.lower),
        lower: bounds.upper.max(bounds.lower),
    };
    (normalized, Some(warning))
}
