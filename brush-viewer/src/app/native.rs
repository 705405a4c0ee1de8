use std::io;

use eframe::egui;
use log::info;

use crate::config::Config;

use super::BrushViewerApp;

pub fn run_native() -> Result<(), eframe::Error> {
    env_logger::init();

    let config: Config = match std::fs::File::open("config.json") {
        Ok(f) => serde_json::from_reader(f).map_err(|e| eframe::Error::AppCreation(Box::new(e)))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Config::default(),
        Err(e) => Err(eframe::Error::AppCreation(Box::new(e)))?,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.viewport),
        ..Default::default()
    };

    info!("Run with config: {config:?}");
    eframe::run_native(
        "Brush Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(BrushViewerApp::new(cc, &config)))),
    )
}
