pub mod config;
mod controller;
mod error;
mod seed;

pub use config::Config;
pub use controller::{DEFAULT_POST_DELAY, FeedController, FeedState, PendingPost};
pub use error::{Error, Result};
pub use seed::sample_thoughts;
