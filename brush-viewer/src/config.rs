use egui_brush::BrushConfig;
use emath::Vec2;

#[derive(serde::Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub viewport: Vec2,
    pub brush: BrushConfig,
    /// Number of sample data points
    pub points: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: [960.0, 760.0].into(),
            brush: BrushConfig::default().with_drag_mode(true),
            points: 120,
        }
    }
}
