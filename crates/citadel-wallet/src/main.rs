//! Citadel Wallet: a Rust-native digital asset wallet GUI

use eframe::egui;

mod app;
mod display;
mod sheets;
mod state;
mod ui;
mod vault_bridge;
mod wallet;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!(
        git = env!("GIT_HASH"),
        built = env!("BUILD_TIME"),
        "Starting Citadel Wallet"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Citadel Wallet")
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Citadel Wallet",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
