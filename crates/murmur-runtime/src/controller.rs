//! The feed state machine.
//!
//! `FeedController` is the single owner of all mutable session state: the
//! draft, the feed, the session's like set, and the active view. Every
//! transition is invoked sequentially by the caller; the only suspension
//! point is the simulated persistence latency of a submission, guarded by
//! the `is_submitting` flag (drop-while-busy, no queueing).

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use murmur_types::{Thought, ThoughtId, View, can_submit, clip};
use std::collections::HashSet;
use std::time::Duration;

use crate::seed::sample_thoughts;

/// Default simulated persistence latency for a post.
pub const DEFAULT_POST_DELAY: Duration = Duration::from_millis(600);

/// All mutable session state, owned exclusively by [`FeedController`].
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    draft: String,
    thoughts: Vec<Thought>,
    liked: HashSet<ThoughtId>,
    active_view: View,
    is_submitting: bool,
    next_id: u64,
}

impl FeedState {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Committed thoughts, newest-first.
    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether this session has liked the given thought.
    pub fn is_liked(&self, id: ThoughtId) -> bool {
        self.liked.contains(&id)
    }

    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }
}

/// A validated submission in its latency window.
///
/// Handed out by [`FeedController::begin_submit`] and consumed by
/// [`FeedController::commit_submit`]; the content is already trimmed. The
/// token being unforgeable outside this crate means a commit can only follow
/// a successful begin.
#[derive(Debug)]
pub struct PendingPost {
    content: String,
}

impl PendingPost {
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// State machine over [`FeedState`] with four transitions: edit the draft,
/// submit it, toggle a like, switch the visible panel.
#[derive(Debug)]
pub struct FeedController {
    state: FeedState,
    latency: Duration,
}

impl Default for FeedController {
    fn default() -> Self {
        Self::new(DEFAULT_POST_DELAY)
    }
}

impl FeedController {
    pub fn new(latency: Duration) -> Self {
        Self {
            state: FeedState::default(),
            latency,
        }
    }

    /// Prepend the starter thoughts, dated relative to `now`.
    ///
    /// Seeded ids come from the same monotonic counter as composed thoughts.
    pub fn seed_samples(&mut self, now: DateTime<Utc>) {
        for sample in sample_thoughts() {
            let id = self.alloc_id();
            let timestamp = now - ChronoDuration::minutes(sample.minutes_ago);
            self.state.thoughts.insert(
                0,
                Thought::with_likes(id, sample.content, timestamp, sample.like_count),
            );
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Replace the draft. Input is capped at 280 characters; excess is
    /// dropped rather than stored.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.state.draft = clip(&text).to_string();
    }

    /// Append one character to the draft, refusing input past the cap.
    pub fn push_char(&mut self, c: char) {
        if self.state.draft.chars().count() < murmur_types::MAX_THOUGHT_CHARS {
            self.state.draft.push(c);
        }
    }

    /// Remove the last character of the draft, if any.
    pub fn pop_char(&mut self) {
        self.state.draft.pop();
    }

    /// Whether the current draft would be accepted by [`Self::begin_submit`].
    pub fn can_submit_draft(&self) -> bool {
        !self.state.is_submitting && can_submit(&self.state.draft)
    }

    /// Start a submission: validate the draft and enter the latency window.
    ///
    /// Returns `None` (a no-op) when the draft is empty, whitespace-only, or
    /// over-length, and when a submission is already in flight. The draft is
    /// cleared at commit time, not here.
    pub fn begin_submit(&mut self) -> Option<PendingPost> {
        if self.state.is_submitting || !can_submit(&self.state.draft) {
            return None;
        }
        self.state.is_submitting = true;
        Some(PendingPost {
            content: self.state.draft.trim().to_string(),
        })
    }

    /// Finish a submission: commit the thought and leave the latency window.
    ///
    /// The new thought is prepended (newest-first, stable for everything
    /// already in the feed), the draft is cleared, and the view switches to
    /// the feed.
    pub fn commit_submit(&mut self, pending: PendingPost, now: DateTime<Utc>) -> ThoughtId {
        let id = self.alloc_id();
        self.state
            .thoughts
            .insert(0, Thought::new(id, pending.content, now));
        self.state.draft.clear();
        self.state.is_submitting = false;
        self.state.active_view = View::Feed;
        id
    }

    /// Submit the draft end-to-end: begin, wait the simulated persistence
    /// latency, commit.
    ///
    /// Returns the new thought's id, or `None` when the precondition fails
    /// (invalid draft, or a submission already in flight). Once started the
    /// submission always runs to completion; there is no cancellation. This
    /// delay is the seam where real asynchronous persistence would go.
    pub async fn submit_draft(&mut self) -> Option<ThoughtId> {
        let pending = self.begin_submit()?;
        tokio::time::sleep(self.latency).await;
        Some(self.commit_submit(pending, Utc::now()))
    }

    /// Toggle this session's like on a thought.
    ///
    /// Returns `Some(now_liked)` on success; unknown ids are a silent no-op
    /// returning `None`. Toggling twice in succession restores both the like
    /// count and the membership exactly.
    pub fn toggle_like(&mut self, id: ThoughtId) -> Option<bool> {
        let thought = self.state.thoughts.iter_mut().find(|t| t.id == id)?;

        if self.state.liked.remove(&id) {
            thought.like_count = thought.like_count.saturating_sub(1);
            Some(false)
        } else {
            self.state.liked.insert(id);
            thought.like_count += 1;
            Some(true)
        }
    }

    /// Show the given panel. Touches nothing else.
    pub fn switch_view(&mut self, view: View) {
        self.state.active_view = view;
    }

    fn alloc_id(&mut self) -> ThoughtId {
        let id = ThoughtId::new(self.state.next_id);
        self.state.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use murmur_types::MAX_THOUGHT_CHARS;

    fn controller() -> FeedController {
        FeedController::new(Duration::from_millis(0))
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn edit_draft_replaces_and_caps_input() {
        let mut c = controller();
        c.edit_draft("hello");
        assert_eq!(c.state().draft(), "hello");

        c.edit_draft("a".repeat(MAX_THOUGHT_CHARS + 25));
        assert_eq!(c.state().draft().chars().count(), MAX_THOUGHT_CHARS);
    }

    #[test]
    fn push_char_refuses_input_at_the_cap() {
        let mut c = controller();
        c.edit_draft("a".repeat(MAX_THOUGHT_CHARS));
        c.push_char('b');
        assert_eq!(c.state().draft().chars().count(), MAX_THOUGHT_CHARS);
        assert!(!c.state().draft().contains('b'));

        c.pop_char();
        c.push_char('b');
        assert!(c.state().draft().ends_with('b'));
    }

    #[test]
    fn begin_submit_rejects_blank_drafts_silently() {
        let mut c = controller();
        assert!(c.begin_submit().is_none());

        c.edit_draft("   \n  ");
        assert!(c.begin_submit().is_none());
        assert!(!c.state().is_submitting());
    }

    #[test]
    fn begin_submit_trims_the_content() {
        let mut c = controller();
        c.edit_draft("  hello world  ");
        let pending = c.begin_submit().expect("valid draft");
        assert_eq!(pending.content(), "hello world");
        assert!(c.state().is_submitting());
        // Draft is only cleared at commit time.
        assert_eq!(c.state().draft(), "  hello world  ");
    }

    #[test]
    fn second_submit_during_latency_window_is_dropped() {
        let mut c = controller();
        c.edit_draft("first");
        let pending = c.begin_submit().expect("valid draft");

        // Busy: both re-submission paths are no-ops, nothing is queued.
        assert!(c.begin_submit().is_none());
        assert!(!c.can_submit_draft());

        c.commit_submit(pending, at());
        assert_eq!(c.state().thoughts().len(), 1);
        assert!(!c.state().is_submitting());
    }

    #[test]
    fn commit_prepends_clears_and_switches_to_feed() {
        let mut c = controller();
        c.edit_draft("older");
        let pending = c.begin_submit().expect("valid draft");
        c.commit_submit(pending, at());

        c.edit_draft("newer");
        let pending = c.begin_submit().expect("valid draft");
        c.commit_submit(pending, at());

        let contents: Vec<_> = c.state().thoughts().iter().map(|t| &t.content).collect();
        assert_eq!(contents, ["newer", "older"]);
        assert_eq!(c.state().draft(), "");
        assert_eq!(c.state().active_view(), View::Feed);
        assert_eq!(c.state().thoughts()[0].like_count, 0);
    }

    #[test]
    fn ids_increase_in_creation_order() {
        let mut c = controller();
        c.edit_draft("one");
        let pending = c.begin_submit().expect("valid draft");
        let first = c.commit_submit(pending, at());

        c.edit_draft("two");
        let pending = c.begin_submit().expect("valid draft");
        let second = c.commit_submit(pending, at());

        assert!(second > first);
    }

    #[test]
    fn toggle_like_is_a_symmetric_toggle() {
        let mut c = controller();
        c.seed_samples(at());
        let id = c.state().thoughts()[0].id;
        let before = c.state().thoughts()[0].like_count;

        assert_eq!(c.toggle_like(id), Some(true));
        assert_eq!(c.state().thoughts()[0].like_count, before + 1);
        assert!(c.state().is_liked(id));

        assert_eq!(c.toggle_like(id), Some(false));
        assert_eq!(c.state().thoughts()[0].like_count, before);
        assert!(!c.state().is_liked(id));
    }

    #[test]
    fn toggle_like_on_unknown_id_is_a_no_op() {
        let mut c = controller();
        c.seed_samples(at());
        let snapshot: Vec<u32> = c.state().thoughts().iter().map(|t| t.like_count).collect();

        assert_eq!(c.toggle_like(ThoughtId::new(999)), None);

        let after: Vec<u32> = c.state().thoughts().iter().map(|t| t.like_count).collect();
        assert_eq!(snapshot, after);
        assert_eq!(c.state().liked_count(), 0);
    }

    #[test]
    fn unlike_never_underflows_a_zero_count() {
        let mut c = controller();
        c.edit_draft("fresh");
        let pending = c.begin_submit().expect("valid draft");
        let id = c.commit_submit(pending, at());

        c.toggle_like(id);
        c.toggle_like(id);
        c.toggle_like(id);
        c.toggle_like(id);
        assert_eq!(c.state().thoughts()[0].like_count, 0);
    }

    #[test]
    fn switch_view_touches_nothing_else() {
        let mut c = controller();
        c.seed_samples(at());
        c.edit_draft("in progress");

        c.switch_view(View::Feed);
        assert_eq!(c.state().active_view(), View::Feed);
        assert_eq!(c.state().draft(), "in progress");
        assert_eq!(c.state().thoughts().len(), 3);

        c.switch_view(View::Write);
        assert_eq!(c.state().active_view(), View::Write);
    }

    #[test]
    fn seeded_feed_is_newest_first_with_original_counts() {
        let mut c = controller();
        c.seed_samples(at());

        let thoughts = c.state().thoughts();
        assert_eq!(thoughts.len(), 3);
        assert!(thoughts[0].timestamp > thoughts[1].timestamp);
        assert!(thoughts[1].timestamp > thoughts[2].timestamp);

        let likes: Vec<u32> = thoughts.iter().map(|t| t.like_count).collect();
        assert_eq!(likes, [12, 47, 89]);
    }
}
