//! МетодКопилка - Desktop catalog browser
//!
//! A single-window application for browsing a catalog of teaching
//! materials: search and filter the material list, read and post comments,
//! and view author profiles.

use anyhow::Context;
use eframe::egui;
use metodika_catalog::Catalog;
use metodika_gui::app::MetodikaApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // All tables are validated here; a broken seed table is a startup error.
    let catalog = Catalog::load().context("failed to load the seed catalog")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("МетодКопилка")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1024.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "МетодКопилка",
        options,
        Box::new(|cc| Ok(Box::new(MetodikaApp::new(cc, catalog)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the application: {e}"))
}
