//! Application state and its pure transition function.
//!
//! [`AppState::apply`] is the only way state changes. It never mutates the
//! receiver: it returns the next state together with an [`Effect`] that the
//! owning [`StoreHandle`](crate::state::StoreHandle) carries out (starting or
//! aborting a dismissal timer). A rejected intent returns an error and the
//! caller keeps the previous state.

mod cart;
mod filters;
mod intent;
mod notifications;
mod view;
mod wishlist;

pub use cart::{
    Cart, CartItem, CartLine, CartLineId, MAX_LINE_QUANTITY, MAX_UNIT_PRICE, QuantityChange,
    check_unit_price,
};
pub use filters::{FilterState, FilterUpdate, PriceRange};
pub use intent::Intent;
pub use notifications::{Notification, NotificationKind, NotificationRequest, Notifications};
pub use view::View;
pub use wishlist::Wishlist;

use chrono::{DateTime, Utc};
use jewelcraft_core::{Email, NotificationId};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::reviews::ExpertReview;
use crate::style::StyleProfile;

/// The signed-in shopper. There is no authentication; this is a session stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: Email,
}

/// Work for the store handle after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the dismissal timer for a new notification.
    ScheduleDismiss(NotificationId),
    /// Abort the timer of a notification that was removed by hand.
    CancelDismiss(NotificationId),
}

/// Result of applying one intent.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub effect: Effect,
}

/// All cross-view state of a storefront session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    user: Option<User>,
    cart: Cart,
    wishlist: Wishlist,
    filters: FilterState,
    current_view: View,
    style_profile: Option<StyleProfile>,
    expert_reviews: Vec<ExpertReview>,
    notifications: Notifications,
}

impl AppState {
    /// Empty session starting on `view`.
    #[must_use]
    pub fn new(view: View) -> Self {
        Self {
            current_view: view,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub const fn current_view(&self) -> View {
        self.current_view
    }

    #[must_use]
    pub const fn style_profile(&self) -> Option<&StyleProfile> {
        self.style_profile.as_ref()
    }

    #[must_use]
    pub fn expert_reviews(&self) -> &[ExpertReview] {
        &self.expert_reviews
    }

    #[must_use]
    pub const fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Compute the state after `intent`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) for invalid values
    /// (negative quantity, inverted price range, quantity overflow). `self`
    /// is never modified.
    pub fn apply(&self, intent: Intent, now: DateTime<Utc>) -> Result<Transition> {
        let mut next = self.clone();
        let effect = next.transition(intent, now)?;
        Ok(Transition {
            state: next,
            effect,
        })
    }

    fn transition(&mut self, intent: Intent, now: DateTime<Utc>) -> Result<Effect> {
        match intent {
            Intent::SetUser(user) => {
                self.user = user;
            }
            Intent::AddToCart(item) => {
                self.cart.add(item)?;
            }
            Intent::RemoveFromCart(line_id) => {
                self.cart.remove(&line_id);
            }
            Intent::UpdateCartQuantity { line_id, quantity } => {
                self.cart.set_quantity(&line_id, quantity)?;
            }
            Intent::AddToWishlist(snapshot) => {
                self.wishlist.add(snapshot);
            }
            Intent::RemoveFromWishlist(product_id) => {
                self.wishlist.remove(product_id);
            }
            Intent::SetFilters(update) => {
                self.filters = self.filters.merge(update)?;
            }
            Intent::SetCurrentView(view) => {
                self.current_view = view;
            }
            Intent::SetStyleProfile(profile) => {
                self.style_profile = Some(profile);
            }
            Intent::AddExpertReview(review) => {
                self.expert_reviews.push(review);
            }
            Intent::AddNotification(request) => {
                let auto_dismiss = request.auto_dismiss;
                let id = self.notifications.push(request, now);
                if auto_dismiss {
                    return Ok(Effect::ScheduleDismiss(id));
                }
            }
            Intent::RemoveNotification(id) => {
                if self.notifications.remove(id) {
                    return Ok(Effect::CancelDismiss(id));
                }
            }
            Intent::ClearCart => {
                self.cart.clear();
            }
        }
        Ok(Effect::None)
    }
}
