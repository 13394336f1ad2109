//! Integration tests for intents decoded from JSON and YAML and dispatched
//! through the store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::Duration;

use jewelcraft_core::{ProductId, SustainabilityFlag};
use jewelcraft_integration_tests::{only_line, settle, store};
use jewelcraft_storefront::state::StoreHandle;
use jewelcraft_storefront::store::{AppState, Intent, View};
use rust_decimal::Decimal;

fn dispatch_all(store: &StoreHandle, intents: Vec<Intent>) -> AppState {
    let mut state = store.snapshot();
    for intent in intents {
        state = store.dispatch(intent).unwrap();
    }
    state
}

#[test]
fn test_json_action_log() {
    let log = r#"[
        {"type": "SET_USER", "payload": {"name": "Ada", "email": "ada@example.com"}},
        {"type": "SET_CURRENT_VIEW", "payload": "marketplace"},
        {"type": "ADD_TO_CART", "payload": {
            "productId": 2,
            "name": "Emerald Tennis Bracelet",
            "unitPrice": "1800",
            "customizations": {"length": "7in"}
        }},
        {"type": "ADD_TO_CART", "payload": {
            "productId": 2,
            "unitPrice": "1800",
            "customizations": {"length": "7in"}
        }},
        {"type": "ADD_TO_WISHLIST", "payload": {
            "id": 4,
            "name": "Sapphire Pendant Necklace",
            "price": "980"
        }}
    ]"#;
    let intents: Vec<Intent> = serde_json::from_str(log).unwrap();
    let store = store();
    let state = dispatch_all(&store, intents);

    assert_eq!(state.user().unwrap().email.as_str(), "ada@example.com");
    assert_eq!(state.current_view(), View::Marketplace);
    let line = &state.cart().lines()[0];
    assert_eq!(line.quantity, 2);
    assert_eq!(line.name, "Emerald Tennis Bracelet");
    assert_eq!(state.cart().subtotal(), Decimal::new(3600, 0));
    assert!(state.wishlist().contains(ProductId::new(4)));
    assert!(state.wishlist().entries()[0].in_stock);
}

#[test]
fn test_yaml_filters_and_quantity() {
    let yaml = r#"
- type: SET_FILTERS
  payload:
    category: necklaces
    priceRange:
      min: "100"
      max: "2000"
    sustainability: [recycled-metal]
- type: ADD_TO_CART
  payload:
    productId: 4
    unitPrice: "980"
"#;
    let intents: Vec<Intent> = serde_yaml::from_str(yaml).unwrap();
    let store = store();
    let state = dispatch_all(&store, intents);

    let filters = state.filters();
    assert_eq!(filters.category, "necklaces");
    assert_eq!(filters.price_range.max, Decimal::new(2000, 0));
    assert!(filters.sustainability.contains(&SustainabilityFlag::RecycledMetal));

    let line_id = only_line(&state);
    let update = format!(
        "type: UPDATE_CART_QUANTITY\npayload:\n  lineId: {line_id}\n  quantity: 4\n"
    );
    let state = store
        .dispatch(serde_yaml::from_str(&update).unwrap())
        .unwrap();
    assert_eq!(state.cart().lines()[0].quantity, 4);

    let state = store
        .dispatch(serde_yaml::from_str("type: CLEAR_CART").unwrap())
        .unwrap();
    assert!(state.cart().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_decoded_notification_auto_dismisses() {
    let store = store();
    let intent: Intent = serde_json::from_str(
        r#"{"type": "ADD_NOTIFICATION", "payload": {"kind": "warning", "message": "Low stock"}}"#,
    )
    .unwrap();
    let state = store.dispatch(intent).unwrap();
    let id = state.notifications().items()[0].id;

    let sticky: Intent = serde_json::from_str(
        r#"{"type": "ADD_NOTIFICATION", "payload": {"message": "Pinned", "autoDismiss": false}}"#,
    )
    .unwrap();
    store.dispatch(sticky).unwrap();

    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    let state = store.snapshot();
    assert!(state.notifications().get(id).is_none());
    assert_eq!(state.notifications().len(), 1);
    assert_eq!(state.notifications().items()[0].message, "Pinned");

    let remove = format!(r#"{{"type": "REMOVE_NOTIFICATION", "payload": {}}}"#, id.as_u64() + 1);
    let state = store.dispatch(serde_json::from_str(&remove).unwrap()).unwrap();
    assert!(state.notifications().is_empty());
}

#[test]
fn test_state_serializes_for_views() {
    let store = store();
    let intent = r#"{"type": "SET_CURRENT_VIEW", "payload": "style-assistant"}"#;
    store.dispatch(serde_json::from_str(intent).unwrap()).unwrap();
    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["currentView"], "style-assistant");
    assert!(json["cart"].is_object());
    assert!(json["expertReviews"].as_array().unwrap().is_empty());
}

#[test]
fn test_malformed_intents_do_not_decode() {
    let unknown_view = r#"{"type": "SET_CURRENT_VIEW", "payload": "checkout"}"#;
    assert!(serde_json::from_str::<Intent>(unknown_view).is_err());

    let unknown_type = r#"{"type": "EMPTY_WISHLIST"}"#;
    assert!(serde_json::from_str::<Intent>(unknown_type).is_err());

    let bad_email = r#"{"type": "SET_USER", "payload": {"name": "Ada", "email": "ada"}}"#;
    assert!(serde_json::from_str::<Intent>(bad_email).is_err());

    let fractional = "type: UPDATE_CART_QUANTITY\npayload:\n  lineId: 1-1\n  quantity: 1.5\n";
    assert!(serde_yaml::from_str::<Intent>(fractional).is_err());
}
