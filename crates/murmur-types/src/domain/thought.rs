use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a thought, allocated from a session-local counter.
///
/// Ids are unique for the lifetime of a session and increase in creation
/// order. They are never reused; the feed never removes entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThoughtId(u64);

impl ThoughtId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ThoughtId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One anonymous short-text post.
///
/// `content` and `timestamp` are immutable after creation; only `like_count`
/// changes, and only through the like toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thought {
    pub id: ThoughtId,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub like_count: u32,
}

impl Thought {
    /// Create a freshly composed thought with zero likes.
    ///
    /// Callers are responsible for validating and trimming `content` first;
    /// a stored thought is never empty or whitespace-only.
    pub fn new(id: ThoughtId, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp,
            like_count: 0,
        }
    }

    /// Create a thought with a preset like count (sample feed content).
    pub fn with_likes(
        id: ThoughtId,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        like_count: u32,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp,
            like_count,
        }
    }
}
