//! Integration tests for the notification lifecycle.
//!
//! All tests run on a paused clock and move time with `tokio::time::advance`.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::Duration;

use jewelcraft_core::NotificationId;
use jewelcraft_integration_tests::{settle, store};
use jewelcraft_storefront::config::StorefrontConfig;
use jewelcraft_storefront::state::StoreHandle;
use jewelcraft_storefront::store::{NotificationKind, NotificationRequest};

async fn advance(millis: u64) {
    tokio::time::advance(Duration::from_millis(millis)).await;
    settle().await;
}

#[tokio::test(start_paused = true)]
async fn test_notification_expires_after_five_seconds() {
    let store = store();
    let id = store
        .add_notification(NotificationRequest::success("Saved", "Added to wishlist"))
        .unwrap();
    assert_eq!(store.pending_dismissals(), 1);

    advance(4_999).await;
    assert!(store.snapshot().notifications().get(id).is_some());

    advance(1).await;
    assert!(store.snapshot().notifications().is_empty());
    assert_eq!(store.pending_dismissals(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_fields_come_from_the_request() {
    let store = store();
    let id = store
        .add_notification(NotificationRequest::error("Payment declined").with_title("Checkout"))
        .unwrap();

    let state = store.snapshot();
    let shown = state.notifications().get(id).unwrap();
    assert_eq!(shown.kind, NotificationKind::Error);
    assert_eq!(shown.title.as_deref(), Some("Checkout"));
    assert_eq!(shown.message, "Payment declined");
    assert!(shown.auto_dismiss);
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismissal_cancels_timer() {
    let store = store();
    let id = store
        .add_notification(NotificationRequest::info("Welcome back"))
        .unwrap();

    let dismissed = store.remove_notification(id).unwrap();
    assert!(dismissed.notifications().is_empty());
    assert_eq!(store.pending_dismissals(), 0);

    advance(10_000).await;
    assert_eq!(store.snapshot(), dismissed);
}

#[tokio::test(start_paused = true)]
async fn test_double_dismissal_is_noop() {
    let store = store();
    let id = store
        .add_notification(NotificationRequest::info("Hello"))
        .unwrap();
    let once = store.remove_notification(id).unwrap();
    let twice = store.remove_notification(id).unwrap();
    assert_eq!(once, twice);

    // Never issued.
    let never = store.remove_notification(NotificationId::new(99)).unwrap();
    assert_eq!(once, never);
}

#[tokio::test(start_paused = true)]
async fn test_each_notification_has_its_own_window() {
    let store = store();
    let first = store
        .add_notification(NotificationRequest::info("first"))
        .unwrap();
    advance(2_000).await;
    let second = store
        .add_notification(NotificationRequest::info("second"))
        .unwrap();
    assert!(second > first);

    let state = store.snapshot();
    let ids: Vec<NotificationId> = state.notifications().items().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![first, second]);

    advance(3_000).await;
    let state = store.snapshot();
    assert!(state.notifications().get(first).is_none());
    assert!(state.notifications().get(second).is_some());

    advance(2_000).await;
    assert!(store.snapshot().notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dismissing_one_leaves_others_on_schedule() {
    let store = store();
    let first = store
        .add_notification(NotificationRequest::info("first"))
        .unwrap();
    let second = store
        .add_notification(NotificationRequest::info("second"))
        .unwrap();

    store.remove_notification(first).unwrap();
    assert_eq!(store.pending_dismissals(), 1);

    advance(5_000).await;
    assert!(store.snapshot().notifications().get(second).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_persistent_notification_stays() {
    let store = store();
    let id = store
        .add_notification(NotificationRequest::info("Order shipped").persistent())
        .unwrap();
    assert_eq!(store.pending_dismissals(), 0);

    advance(60_000).await;
    assert!(store.snapshot().notifications().get(id).is_some());

    let state = store.remove_notification(id).unwrap();
    assert!(state.notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_configured_window() {
    let store = StoreHandle::new(StorefrontConfig {
        notification_dismiss_after: Duration::from_secs(1),
        ..StorefrontConfig::default()
    });
    store
        .add_notification(NotificationRequest::info("Quick"))
        .unwrap();

    advance(1_000).await;
    assert!(store.snapshot().notifications().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_ids_are_not_reused_after_expiry() {
    let store = store();
    let first = store
        .add_notification(NotificationRequest::info("one"))
        .unwrap();
    advance(5_000).await;
    assert!(store.snapshot().notifications().is_empty());

    let second = store
        .add_notification(NotificationRequest::info("two"))
        .unwrap();
    assert_ne!(first, second);
}

#[tokio::test(start_paused = true)]
async fn test_timer_survives_other_intents() {
    let store = store();
    store
        .add_notification(NotificationRequest::info("Filters saved"))
        .unwrap();
    store
        .set_current_view("cart".parse().unwrap())
        .unwrap();
    store.clear_cart().unwrap();

    advance(5_000).await;
    assert!(store.snapshot().notifications().is_empty());
}
