//! shapes2d - 2D shape model demo
//!
//! Builds the configured shapes, then draws, moves and rotates them,
//! printing each result to standard output.

use shapes2d::config::AppConfig;
use shapes2d::demo::run_demo;

fn main() {
    // Logging is configured from the loaded config, so hold any load error
    // until the logger exists
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting shapes2d with {} demo steps", config.demo.steps.len());

    let shapes = run_demo(&config.demo.steps, config.demo.remove_at_end);

    let remaining: usize = shapes.iter().map(|s| s.vertex_count()).sum();
    log::info!("Finished: {} shapes, {} vertices remaining", shapes.len(), remaining);
}
