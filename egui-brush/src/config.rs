use crate::{normalize_bounds, Bounds, BoundsWarning};

/// Behaviour of a brush. Bounds are always stored normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    /// Allows moving a closed selection by pressing inside it
    pub drag_mode: bool,
    #[serde(deserialize_with = "deserialize_bounds")]
    bounds: Option<Bounds>,
    /// Smallest span per axis once the pointer moved on that axis. `0` disables it.
    pub min_size: f32,
}

impl BrushConfig {
    pub fn with_drag_mode(mut self, drag_mode: bool) -> Self {
        self.drag_mode = drag_mode;
        self
    }

    /// Constrains the brush to `bounds`. Inverted bounds are reordered,
    /// non-finite bounds leave the brush unconstrained.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = accept_bounds(bounds);
        self
    }

    pub fn without_bounds(mut self) -> Self {
        self.bounds = None;
        self
    }

    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }
}

fn accept_bounds(bounds: Bounds) -> Option<Bounds> {
    match normalize_bounds(bounds) {
        (_, Some(BoundsWarning::NonFinite(_))) => None,
        (normalized, _) => Some(normalized),
    }
}

fn deserialize_bounds<'de, D>(deserializer: D) -> Result<Option<Bounds>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let bounds: Option<Bounds> = serde::Deserialize::deserialize(deserializer)?;
    Ok(bounds.and_then(accept_bounds))
}
