mod args;
mod tui;

pub use args::Cli;

use anyhow::Result;
use chrono::Utc;
use murmur_runtime::{Config, FeedController, config::resolve_config_path};
use std::time::Duration;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    let delay = cli
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.post_delay());

    let mut controller = FeedController::new(delay);
    if config.feed.sample_thoughts && !cli.fresh {
        controller.seed_samples(Utc::now());
    }

    tui::run(controller, config.compose.prompts)
}
