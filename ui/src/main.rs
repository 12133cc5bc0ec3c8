#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use chatdesk_business::BusinessConfig;
use chatdesk_ui::state::State;

#[global_allocator]
static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let config = BusinessConfig::from_env().unwrap_or_else(|err| {
        log::warn!("Falling back to default configuration: {err}");
        BusinessConfig::default()
    });
    log::info!("Using backend at {}", config.api_base_url);

    // The login call runs here; the UI thread only polls for its result.
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("Failed to start async runtime: {err}");
            return Err(eframe::Error::AppCreation(Box::new(err)));
        }
    };
    let handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 480.0])
            .with_min_inner_size([320.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chatdesk",
        native_options,
        Box::new(move |_cc| {
            let state = State::with_config(config, handle);
            Ok(Box::new(chatdesk_ui::ChatdeskApp::new(state)))
        }),
    )
}
