//! ClubBoard - club training, member and news board
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clubboard::shell::Shell;
use clubboard::storage::config::{load_config, AppConfig};
use clubboard::storage::{FileKeyValueStore, PersistentStore};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ClubBoard v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let data_dir = config.data_dir();
    tracing::info!("Data directory: {:?}", data_dir);

    let shell = Shell::load(PersistentStore::new(FileKeyValueStore::new(data_dir)));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([420.0, 360.0])
            .with_title(config.club.name.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "ClubBoard",
        options,
        Box::new(move |cc| Ok(Box::new(app::ClubBoardApp::new(cc, shell, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run ClubBoard: {}", e))
}
