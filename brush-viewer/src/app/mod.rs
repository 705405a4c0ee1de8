use egui::{Color32, Sense, Vec2};
use egui_brush::{Brush, BrushTool, Phase, ToolContext};
use emath::{pos2, Pos2, Rect, RectTransform};
use itertools::Itertools;
use log::info;

use crate::{
    config::Config,
    scatter::{self, Datum},
};

mod menu;
mod native;

pub use native::run_native;

/// Brush coordinate space of the plot
const PLOT: Rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(900.0, 600.0));
const PLOT_MARGIN: f32 = 20.0;
const POINT_RADIUS: f32 = 5.0;

pub(crate) struct BrushViewerApp {
    tool: BrushTool,
    data: Vec<Datum>,
    positions: Vec<Pos2>,
}

impl BrushViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let data = scatter::sample_data(config.points);
        let positions = scatter::layout(&data, PLOT.shrink(PLOT_MARGIN));
        Self {
            tool: BrushTool::new(config.brush),
            data,
            positions,
        }
    }

    fn selected(&self) -> impl Iterator<Item = (&Datum, Pos2)> + '_ {
        let session = self.tool.session();
        self.data
            .iter()
            .zip(self.positions.iter().copied())
            .filter(move |(_, p)| session.contains(*p))
    }
}

impl eframe::App for BrushViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Brush selection");
            self.menu_ui(ui);

            let size = (ui.available_size() - Vec2::new(0.0, 60.0)).max(Vec2::splat(1.0));
            let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
            let to_brush = RectTransform::from_to(response.rect, PLOT);
            let to_screen = to_brush.inverse();

            if let Some(selection) = self
                .tool
                .handle_interaction(ToolContext::new(&response, to_brush))
            {
                info!(
                    "Selection {selection:?} contains {} points",
                    self.selected().count()
                );
            }

            painter.rect_filled(response.rect, 0.0, Color32::from_gray(24));
            for p in &self.positions {
                let color = if self.tool.session().contains(*p) {
                    Color32::RED
                } else {
                    Color32::LIGHT_BLUE
                };
                painter.circle_filled(to_screen.transform_pos(*p), POINT_RADIUS, color);
            }
            self.tool.paint(&painter, &to_screen);

            let selection = self.tool.session().selection();
            ui.label(format!(
                "Brush: {}, selection: [{:.1}, {:.1}] x [{:.1}, {:.1}]",
                status(self.tool.session().brush()),
                selection.left,
                selection.right,
                selection.upper,
                selection.lower,
            ));
            let names = self.selected().map(|(d, _)| d.name.as_str()).take(12).join(", ");
            ui.label(format!("Selected {}: {names}", self.selected().count()));
        });
    }
}

fn status(brush: &Brush) -> &'static str {
    match brush {
        Brush::Closed { .. } => "closed",
        Brush::Brushing {
            phase: Phase::Start,
            ..
        } => "brush started",
        Brush::Brushing { .. } => "brushing",
        Brush::Dragging {
            phase: Phase::Start,
            ..
        } => "drag started",
        Brush::Dragging { .. } => "dragging",
    }
}
