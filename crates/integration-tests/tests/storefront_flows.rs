//! Integration tests for the flows that sit on top of the store: browsing the
//! catalog through filter state, pricing the cart, the style assistant, and
//! expert review submission.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use jewelcraft_core::{EmailError, ProductId};
use jewelcraft_integration_tests::{item, settle, store};
use jewelcraft_storefront::catalog::{Catalog, SortOrder};
use jewelcraft_storefront::error::StoreError;
use jewelcraft_storefront::pricing::{LineAmount, PricingEngine, PromoCode, ShippingOptions};
use jewelcraft_storefront::reviews::{AnalysisTier, ReviewRequest};
use jewelcraft_storefront::store::{FilterUpdate, NotificationKind};
use jewelcraft_storefront::style::{
    recommend, MetalColor, QuestionnaireAnswers, SkinTone, StyleAesthetic, StyleProfile,
};
use rust_decimal::Decimal;

fn ids(products: &[&jewelcraft_core::Product]) -> Vec<i32> {
    products.iter().map(|p| p.id.as_i32()).collect()
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_store_filters_drive_listing() {
    let store = store();
    let catalog = Catalog::seeded();

    let state = store
        .set_filters(FilterUpdate {
            category: Some("rings".to_string()),
            ..FilterUpdate::default()
        })
        .unwrap();
    assert_eq!(
        ids(&catalog.filter(state.filters(), None, SortOrder::PriceHigh)),
        vec![5, 1]
    );

    let state = store
        .set_filters(FilterUpdate {
            in_stock_only: Some(true),
            ..FilterUpdate::default()
        })
        .unwrap();
    assert_eq!(
        ids(&catalog.filter(state.filters(), None, SortOrder::Featured)),
        vec![1]
    );

    let state = store.set_filters(FilterUpdate::reset()).unwrap();
    assert_eq!(catalog.filter(state.filters(), None, SortOrder::Featured).len(), 5);
}

#[test]
fn test_featured_products_into_wishlist() {
    let store = store();
    let catalog = Catalog::seeded();
    for product in catalog.featured() {
        store.add_to_wishlist(product.snapshot()).unwrap();
    }
    let state = store.snapshot();
    assert_eq!(state.wishlist().len(), 3);
    assert!(state.wishlist().contains(ProductId::new(4)));
}

// =============================================================================
// Pricing
// =============================================================================

#[test]
fn test_order_total_from_cart_lines() {
    let store = store();
    let catalog = Catalog::seeded();
    store.add_to_cart(item(1)).unwrap();
    store.add_to_cart(item(3)).unwrap();
    let state = store.add_to_cart(item(3)).unwrap();

    let lines: Vec<LineAmount> = state.cart().lines().iter().map(LineAmount::from).collect();
    let engine = PricingEngine::new(&catalog, store.config().pricing);
    let total = engine.order_total(
        &lines,
        &ShippingOptions {
            state: Some("ca".to_string()),
            ..ShippingOptions::default()
        },
    )
    .unwrap();

    assert_eq!(total.subtotal, Decimal::new(3400, 0));
    assert_eq!(total.shipping, Decimal::ZERO);
    assert_eq!(total.tax_rate, Decimal::new(975, 4));
    assert_eq!(total.tax, Decimal::new(3315, 1));
    assert_eq!(total.total, Decimal::new(37315, 1));
    assert_eq!(total.breakdown.items, 2);
    assert_eq!(total.breakdown.total_quantity, 3);
    assert!(total.breakdown.free_shipping_eligible);
}

#[test]
fn test_cart_summary_below_threshold_with_promo() {
    let store = store();
    let catalog = Catalog::seeded();
    let state = store.add_to_cart(item(3)).unwrap();
    let engine = PricingEngine::new(&catalog, store.config().pricing);

    let summary = engine.cart_summary(state.cart(), None).unwrap();
    assert_eq!(summary.shipping, Decimal::new(25, 0));
    assert_eq!(summary.tax, Decimal::new(36, 0));
    assert_eq!(summary.total, Decimal::new(511, 0));
    assert_eq!(summary.amount_to_free_shipping, Some(Decimal::new(50, 0)));

    let summary = engine.cart_summary(state.cart(), Some("welcome10")).unwrap();
    assert_eq!(summary.promo, Some(PromoCode::Welcome10));
    assert_eq!(summary.discount, Decimal::new(45, 0));
    assert_eq!(summary.total, Decimal::new(466, 0));

    let err = engine.cart_summary(state.cart(), Some("FREESHIP")).unwrap_err();
    assert_eq!(err, StoreError::InvalidPromoCode("FREESHIP".to_string()));
}

#[test]
fn test_threshold_boundary_differs_between_cart_and_billing() {
    let store = store();
    let catalog = Catalog::seeded();
    let mut half = item(3);
    half.unit_price = Decimal::new(250, 0);
    store.add_to_cart(half.clone()).unwrap();
    let state = store.add_to_cart(half).unwrap();
    assert_eq!(state.cart().subtotal(), Decimal::new(500, 0));

    let engine = PricingEngine::new(&catalog, store.config().pricing);
    let summary = engine.cart_summary(state.cart(), None).unwrap();
    assert_eq!(summary.shipping, Decimal::new(25, 0));

    let lines: Vec<LineAmount> = state.cart().lines().iter().map(LineAmount::from).collect();
    let total = engine.order_total(&lines, &ShippingOptions::default()).unwrap();
    assert_eq!(total.shipping, Decimal::ZERO);
}

#[test]
fn test_empty_cart_totals() {
    let store = store();
    let catalog = Catalog::seeded();
    let engine = PricingEngine::new(&catalog, store.config().pricing);

    let total = engine.order_total(&[], &ShippingOptions::default()).unwrap();
    assert_eq!(total.subtotal, Decimal::ZERO);
    assert_eq!(total.shipping, Decimal::new(25, 0));
    assert_eq!(total.breakdown.average_item_price, None);

    let summary = engine.cart_summary(store.snapshot().cart(), None).unwrap();
    assert_eq!(summary.total, Decimal::new(25, 0));
}

// =============================================================================
// Style assistant
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_questionnaire_to_profile_and_notice() {
    let store = store();
    let catalog = Catalog::seeded();
    let profile = StyleProfile::from_questionnaire(QuestionnaireAnswers {
        style: Some(StyleAesthetic::Modern),
        metal: Some(MetalColor::White),
        ..QuestionnaireAnswers::default()
    });
    assert_eq!(profile.skin_tone, SkinTone::Cool);

    let recommendations = recommend(&catalog, profile.clone());
    assert!(!recommendations.items.is_empty());
    assert_eq!(recommendations.tips.len(), 3);

    let state = store.complete_style_analysis(profile.clone()).unwrap();
    assert_eq!(state.style_profile(), Some(&profile));
    let notice = &state.notifications().items()[0];
    assert_eq!(notice.kind, NotificationKind::Success);
    assert_eq!(notice.title.as_deref(), Some("Style Analysis Complete!"));

    tokio::time::advance(store.config().notification_dismiss_after).await;
    settle().await;
    let state = store.snapshot();
    assert!(state.notifications().is_empty());
    assert_eq!(state.style_profile(), Some(&profile));
}

#[test]
fn test_photo_profile_replaces_questionnaire() {
    let store = store();
    store
        .complete_style_analysis(StyleProfile::from_questionnaire(
            QuestionnaireAnswers::default(),
        ))
        .unwrap();
    let state = store
        .complete_style_analysis(StyleProfile::from_photo(SkinTone::Neutral))
        .unwrap();

    let profile = state.style_profile().unwrap();
    assert_eq!(profile.skin_tone, SkinTone::Neutral);
    assert!(profile.answers.is_none());
    assert_eq!(state.notifications().len(), 2);
}

// =============================================================================
// Expert reviews
// =============================================================================

fn review_request() -> ReviewRequest {
    ReviewRequest {
        tier: Some(AnalysisTier::Premium),
        jewelry_type: "ring".to_string(),
        description: "Inherited band, stamped 18k".to_string(),
        contact_email: Some("owner@example.com".to_string()),
        image_count: 3,
        ..ReviewRequest::default()
    }
}

#[test]
fn test_submitted_review_is_recorded_and_confirmed() {
    let store = store();
    let review = store.submit_expert_review(review_request()).unwrap();

    let state = store.snapshot();
    assert_eq!(state.expert_reviews(), std::slice::from_ref(&review));
    assert_eq!(review.contact_email.as_ref().unwrap().domain(), "example.com");

    let notice = &state.notifications().items()[0];
    assert_eq!(notice.title.as_deref(), Some("Review Request Submitted"));
    assert_eq!(
        notice.message,
        "Your Premium Analysis request has been submitted successfully."
    );
}

#[test]
fn test_reviews_accumulate_with_unique_ids() {
    let store = store();
    let first = store.submit_expert_review(review_request()).unwrap();
    let second = store.submit_expert_review(review_request()).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.snapshot().expert_reviews().len(), 2);
}

#[test]
fn test_invalid_reviews_record_nothing() {
    let store = store();
    let before = store.snapshot();

    let no_images = ReviewRequest {
        image_count: 0,
        ..review_request()
    };
    assert!(matches!(
        store.submit_expert_review(no_images),
        Err(StoreError::InvalidReview(_))
    ));

    let bad_email = ReviewRequest {
        contact_email: Some("not-an-email".to_string()),
        ..review_request()
    };
    let err = store.submit_expert_review(bad_email).unwrap_err();
    assert!(matches!(err, StoreError::Email(EmailError::AtSymbolCount)));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_blank_email_is_optional() {
    let store = store();
    let review = store
        .submit_expert_review(ReviewRequest {
            contact_email: Some("   ".to_string()),
            ..review_request()
        })
        .unwrap();
    assert!(review.contact_email.is_none());
}
