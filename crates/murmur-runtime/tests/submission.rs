//! End-to-end submission scenarios through the async path.

use murmur_runtime::FeedController;
use murmur_types::View;
use std::time::Duration;

fn fast_controller() -> FeedController {
    FeedController::new(Duration::from_millis(5))
}

#[tokio::test]
async fn submitting_hello_world_lands_in_the_feed() {
    let mut controller = fast_controller();
    controller.edit_draft("hello world");

    let id = controller.submit_draft().await.expect("submission commits");

    let thoughts = controller.state().thoughts();
    assert_eq!(thoughts.len(), 1);
    assert_eq!(thoughts[0].id, id);
    assert_eq!(thoughts[0].content, "hello world");
    assert_eq!(thoughts[0].like_count, 0);
    assert_eq!(controller.state().draft(), "");
    assert_eq!(controller.state().active_view(), View::Feed);
    assert!(!controller.state().is_submitting());
}

#[tokio::test]
async fn blank_draft_never_commits() {
    let mut controller = fast_controller();
    controller.edit_draft("   \n ");

    assert!(controller.submit_draft().await.is_none());
    assert!(controller.state().thoughts().is_empty());
    assert!(!controller.state().is_submitting());
}

#[tokio::test]
async fn submit_while_busy_is_dropped_not_queued() {
    let mut controller = fast_controller();
    controller.edit_draft("first");

    // Enter the latency window by hand, then try the full path: the
    // in-flight flag makes the second submission a no-op.
    let pending = controller.begin_submit().expect("valid draft");
    assert!(controller.submit_draft().await.is_none());
    assert!(controller.state().thoughts().is_empty());

    controller.commit_submit(pending, chrono::Utc::now());
    assert_eq!(controller.state().thoughts().len(), 1);
    assert_eq!(controller.state().thoughts()[0].content, "first");
}

#[tokio::test]
async fn submissions_stack_newest_first() {
    let mut controller = fast_controller();

    for text in ["one", "two", "three"] {
        controller.edit_draft(text);
        controller.submit_draft().await.expect("submission commits");
    }

    let contents: Vec<_> = controller
        .state()
        .thoughts()
        .iter()
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(contents, ["three", "two", "one"]);
}

#[tokio::test]
async fn like_toggle_round_trip_after_submission() {
    let mut controller = fast_controller();
    controller.edit_draft("toggle me");
    let id = controller.submit_draft().await.expect("submission commits");

    controller.toggle_like(id);
    assert_eq!(controller.state().thoughts()[0].like_count, 1);
    assert!(controller.state().is_liked(id));

    controller.toggle_like(id);
    assert_eq!(controller.state().thoughts()[0].like_count, 0);
    assert!(!controller.state().is_liked(id));
}
