//! The closed set of state changes the store accepts.

use jewelcraft_core::{NotificationId, ProductId, ProductSnapshot};
use serde::{Deserialize, Serialize};

use super::{CartItem, CartLineId, FilterUpdate, NotificationRequest, User, View};
use crate::reviews::ExpertReview;
use crate::style::StyleProfile;

/// A request to change application state.
///
/// Serialized as `{"type": "ADD_TO_CART", "payload": {...}}` so scripted
/// sessions read like the action log of the storefront UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    SetUser(Option<User>),
    AddToCart(CartItem),
    RemoveFromCart(CartLineId),
    #[serde(rename_all = "camelCase")]
    UpdateCartQuantity {
        line_id: CartLineId,
        quantity: i64,
    },
    AddToWishlist(ProductSnapshot),
    RemoveFromWishlist(ProductId),
    SetFilters(FilterUpdate),
    SetCurrentView(View),
    SetStyleProfile(StyleProfile),
    AddExpertReview(ExpertReview),
    AddNotification(NotificationRequest),
    RemoveNotification(NotificationId),
    ClearCart,
}

impl Intent {
    /// Name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetUser(_) => "set_user",
            Self::AddToCart(_) => "add_to_cart",
            Self::RemoveFromCart(_) => "remove_from_cart",
            Self::UpdateCartQuantity { .. } => "update_cart_quantity",
            Self::AddToWishlist(_) => "add_to_wishlist",
            Self::RemoveFromWishlist(_) => "remove_from_wishlist",
            Self::SetFilters(_) => "set_filters",
            Self::SetCurrentView(_) => "set_current_view",
            Self::SetStyleProfile(_) => "set_style_profile",
            Self::AddExpertReview(_) => "add_expert_review",
            Self::AddNotification(_) => "add_notification",
            Self::RemoveNotification(_) => "remove_notification",
            Self::ClearCart => "clear_cart",
        }
    }
}
