use serde::{Deserialize, Serialize};
use std::fmt;

/// The currently displayed panel.
///
/// Switching views never touches the draft or the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Write,
    Feed,
}

impl View {
    /// The other panel, for a single tab-style switch control.
    pub fn other(self) -> View {
        match self {
            View::Write => View::Feed,
            View::Feed => View::Write,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Write => write!(f, "Write"),
            View::Feed => write!(f, "Feed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_is_the_initial_view() {
        assert_eq!(View::default(), View::Write);
    }

    #[test]
    fn other_flips_between_the_two_panels() {
        assert_eq!(View::Write.other(), View::Feed);
        assert_eq!(View::Feed.other(), View::Write);
        assert_eq!(View::Write.other().other(), View::Write);
    }
}
