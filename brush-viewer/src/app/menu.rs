use egui::Key;
use egui_brush::Bounds;
use log::info;

use super::PLOT;

impl super::BrushViewerApp {
    pub(super) fn menu_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut config = *self.tool.session().config();
            let mut changed = ui.checkbox(&mut config.drag_mode, "Drag mode").changed();

            let mut bounded = config.bounds().is_some();
            if ui.checkbox(&mut bounded, "Keep inside plot").changed() {
                config = if bounded {
                    config.with_bounds(Bounds::from(PLOT))
                } else {
                    config.without_bounds()
                };
                changed = true;
            }

            changed |= ui
                .add(egui::Slider::new(&mut config.min_size, 0.0..=200.0).text("Min size"))
                .changed();

            if changed {
                info!("Brush config changed: {config:?}");
                self.tool.session_mut().set_config(config);
            }

            let (undo, redo) = ui.input(|i| {
                let z = i.modifiers.command && i.key_pressed(Key::Z);
                (z && !i.modifiers.shift, z && i.modifiers.shift)
            });
            if ui.button("Undo").on_hover_text("Undo (cmd + Z)").clicked() || undo {
                info!("Undo");
                self.tool.session_mut().undo();
            }
            if ui
                .button("Redo")
                .on_hover_text("Redo (shift + cmd + Z)")
                .clicked()
                || redo
            {
                info!("Redo");
                self.tool.session_mut().redo();
            }
        });
    }
}
