// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use blackjack::app::App;
use blackjack::cli;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = cli::process_cli();

    // Routes all log::info!() etc. to the debug log file.
    // CLI --log-level takes precedence, then RUST_LOG, then config (applied later).
    blackjack::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting Blackjack {}", blackjack::VERSION);

    // Drives async GPU adapter/device setup during window creation
    let runtime = Arc::new(Runtime::new()?);

    let app = App::new(Arc::clone(&runtime), runtime_options)?;
    let result = app.run();

    log::info!("Event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    if let Err(ref e) = result {
        eprintln!("blackjack: error: {e:#}");
        #[cfg(target_os = "linux")]
        {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display") || msg.contains("wayland") || msg.contains("x server") {
                eprintln!(
                    "blackjack: hint: no display server found; ensure DISPLAY (X11) or \
                     WAYLAND_DISPLAY (Wayland) is set"
                );
            }
        }
    }
    result
}
