//! Sensor Info - motion and environment sensor viewer
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sensor Info v{}", env!("CARGO_PKG_VERSION"));

    let config = match sensorinfo::storage::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            sensorinfo::AppConfig {
                data_dir: sensorinfo::storage::config::get_data_dir(),
                ..Default::default()
            }
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 800.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title("Sensor info"),
        ..Default::default()
    };

    eframe::run_native(
        "Sensor info",
        options,
        Box::new(|cc| Ok(Box::new(app::SensorInfoApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
