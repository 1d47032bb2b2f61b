use eframe::egui;
use std::path::PathBuf;

use diginex_landing::config::{LandingConfig, DEFAULT_CONFIG_FILE};

mod app;
mod ui;

use app::LandingApp;

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = match LandingConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; falling back to defaults", e);
            LandingConfig::default()
        }
    };
    log::info!(
        "Starting {} ({}x{})",
        config.window.title,
        config.window.width,
        config.window.height
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([360.0, 480.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(LandingApp::new(cc, config)))),
    )
}
