pub mod domain;
pub mod draft;
pub mod timeago;

pub use domain::*;
pub use draft::{MAX_THOUGHT_CHARS, NEAR_LIMIT_CHARS, can_submit, clip};
pub use timeago::time_ago;
