// Release builds run as a GUI application (no console window).
// Debug builds keep the console so that log output is visible.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use coords::{config, demo, platform, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        // Show a modal error dialog — the only safe output path in a GUI app.
        platform::show_error_dialog(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    #[cfg(debug_assertions)]
    let t0 = std::time::Instant::now();

    platform::init_runtime()?;

    let cfg = config::load().unwrap_or_default();
    let report = demo::run(&cfg, &platform::NativeDialog)?;

    log::info!(
        "distance from {} to {} is {}",
        report.a_str,
        report.b_str,
        report.distance
    );

    #[cfg(debug_assertions)]
    log::debug!("finished in {:.1} ms", t0.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
