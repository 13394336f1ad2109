//! Shared store handle.
//!
//! The handle serializes intents through a mutex and owns one timer task per
//! auto-dismissing notification.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use chrono::Utc;
use jewelcraft_core::{NotificationId, ProductId, ProductSnapshot};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::reviews::{ExpertReview, ReviewRequest};
use crate::store::{
    AppState, CartItem, CartLineId, Effect, FilterUpdate, Intent, NotificationRequest,
    Transition, User, View,
};
use crate::style::StyleProfile;

/// Handle to a storefront session.
///
/// Cheaply cloneable via `Arc`. Every clone sees the same state, and intents
/// from all clones are applied in the order they acquire the lock.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    config: StorefrontConfig,
    runtime: Option<Handle>,
    session: Mutex<Session>,
}

struct Session {
    state: AppState,
    timers: HashMap<NotificationId, JoinHandle<()>>,
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        let session = self
            .session
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, timer) in session.timers.drain() {
            timer.abort();
        }
    }
}

impl StoreHandle {
    /// Create a store with an empty session on `config.default_view`.
    ///
    /// Timers run on the tokio runtime current at construction. Without one,
    /// notifications stay until removed by hand.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let runtime = Handle::try_current().ok();
        if runtime.is_none() {
            warn!("no tokio runtime available, notification auto-dismiss disabled");
        }

        let state = AppState::new(config.default_view);
        Self {
            inner: Arc::new(StoreInner {
                config,
                runtime,
                session: Mutex::new(Session {
                    state,
                    timers: HashMap::new(),
                }),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.lock().state.clone()
    }

    /// Number of dismissal timers still waiting to fire.
    #[must_use]
    pub fn pending_dismissals(&self) -> usize {
        self.lock().timers.len()
    }

    /// Apply one intent and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`](crate::error::StoreError) of a rejected
    /// intent. The state is unchanged in that case.
    #[instrument(skip(self, intent), fields(intent = intent.name()))]
    pub fn dispatch(&self, intent: Intent) -> Result<AppState> {
        let mut session = self.lock();
        self.apply_locked(&mut session, intent)?;
        Ok(session.state.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_locked(&self, session: &mut Session, intent: Intent) -> Result<()> {
        let name = intent.name();
        let Transition { state, effect } = session
            .state
            .apply(intent, Utc::now())
            .inspect_err(|e| warn!(intent = name, error = %e, "intent rejected"))?;
        session.state = state;

        match effect {
            Effect::None => {}
            Effect::ScheduleDismiss(id) => self.schedule_dismiss(session, id),
            Effect::CancelDismiss(id) => {
                if let Some(timer) = session.timers.remove(&id) {
                    timer.abort();
                    debug!(notification_id = %id, "dismissal timer cancelled");
                }
            }
        }
        debug!(intent = name, "intent applied");
        Ok(())
    }

    fn schedule_dismiss(&self, session: &mut Session, id: NotificationId) {
        let Some(runtime) = &self.inner.runtime else {
            return;
        };

        let store: Weak<StoreInner> = Arc::downgrade(&self.inner);
        let deadline = tokio::time::Instant::now() + self.inner.config.notification_dismiss_after;
        let timer = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(inner) = store.upgrade() {
                StoreHandle { inner }.expire(id);
            }
        });
        session.timers.insert(id, timer);
    }

    /// Remove a notification whose window has elapsed.
    #[instrument(skip(self), fields(notification_id = %id))]
    fn expire(&self, id: NotificationId) {
        let mut session = self.lock();
        session.timers.remove(&id);
        if session.state.notifications().get(id).is_none() {
            debug!("notification already dismissed");
            return;
        }
        if self
            .apply_locked(&mut session, Intent::RemoveNotification(id))
            .is_ok()
        {
            info!("notification expired");
        }
    }

    // =========================================================================
    // Intent shorthands
    // =========================================================================

    /// # Errors
    ///
    /// Never fails; returns `Result` for uniformity with [`Self::dispatch`].
    pub fn set_user(&self, user: Option<User>) -> Result<AppState> {
        self.dispatch(Intent::SetUser(user))
    }

    /// # Errors
    ///
    /// Fails if the matching line is already at the maximum quantity.
    pub fn add_to_cart(&self, item: CartItem) -> Result<AppState> {
        self.dispatch(Intent::AddToCart(item))
    }

    /// # Errors
    ///
    /// Never fails; unknown lines are ignored.
    pub fn remove_from_cart(&self, line_id: CartLineId) -> Result<AppState> {
        self.dispatch(Intent::RemoveFromCart(line_id))
    }

    /// Set a line's quantity; zero removes the line.
    ///
    /// # Errors
    ///
    /// Fails for a negative quantity or one that does not fit a line.
    pub fn update_cart_quantity(&self, line_id: CartLineId, quantity: i64) -> Result<AppState> {
        self.dispatch(Intent::UpdateCartQuantity { line_id, quantity })
    }

    /// # Errors
    ///
    /// Never fails; duplicates are ignored.
    pub fn add_to_wishlist(&self, snapshot: ProductSnapshot) -> Result<AppState> {
        self.dispatch(Intent::AddToWishlist(snapshot))
    }

    /// # Errors
    ///
    /// Never fails; unknown products are ignored.
    pub fn remove_from_wishlist(&self, product_id: ProductId) -> Result<AppState> {
        self.dispatch(Intent::RemoveFromWishlist(product_id))
    }

    /// # Errors
    ///
    /// Fails if the merged price range has `min > max`.
    pub fn set_filters(&self, update: FilterUpdate) -> Result<AppState> {
        self.dispatch(Intent::SetFilters(update))
    }

    /// # Errors
    ///
    /// Never fails.
    pub fn set_current_view(&self, view: View) -> Result<AppState> {
        self.dispatch(Intent::SetCurrentView(view))
    }

    /// # Errors
    ///
    /// Never fails.
    pub fn set_style_profile(&self, profile: StyleProfile) -> Result<AppState> {
        self.dispatch(Intent::SetStyleProfile(profile))
    }

    /// # Errors
    ///
    /// Never fails.
    pub fn add_expert_review(&self, review: ExpertReview) -> Result<AppState> {
        self.dispatch(Intent::AddExpertReview(review))
    }

    /// Show a notification and return its ID.
    ///
    /// # Errors
    ///
    /// Never fails; returns `Result` for uniformity with [`Self::dispatch`].
    pub fn add_notification(&self, request: NotificationRequest) -> Result<NotificationId> {
        let mut session = self.lock();
        let id = session.state.notifications().next_id();
        self.apply_locked(&mut session, Intent::AddNotification(request))?;
        Ok(id)
    }

    /// # Errors
    ///
    /// Never fails; removing a dismissed notification is a no-op.
    pub fn remove_notification(&self, id: NotificationId) -> Result<AppState> {
        self.dispatch(Intent::RemoveNotification(id))
    }

    /// # Errors
    ///
    /// Never fails.
    pub fn clear_cart(&self) -> Result<AppState> {
        self.dispatch(Intent::ClearCart)
    }

    // =========================================================================
    // Flows
    // =========================================================================

    /// Store a finished style analysis and announce it.
    ///
    /// # Errors
    ///
    /// Never fails in practice; propagates dispatch errors.
    #[instrument(skip(self, profile), fields(method = ?profile.method))]
    pub fn complete_style_analysis(&self, profile: StyleProfile) -> Result<AppState> {
        let mut session = self.lock();
        self.apply_locked(&mut session, Intent::SetStyleProfile(profile))?;
        self.apply_locked(
            &mut session,
            Intent::AddNotification(NotificationRequest::success(
                "Style Analysis Complete!",
                "Your personalized jewelry recommendations are ready.",
            )),
        )?;
        Ok(session.state.clone())
    }

    /// Validate and record an expert review request, then confirm it.
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`ReviewRequest::submit`]; nothing is
    /// recorded in that case.
    #[instrument(skip(self, request))]
    pub fn submit_expert_review(&self, request: ReviewRequest) -> Result<ExpertReview> {
        let review = request.submit(Utc::now())?;
        let mut session = self.lock();
        self.apply_locked(&mut session, Intent::AddExpertReview(review.clone()))?;
        self.apply_locked(&mut session, Intent::AddNotification(review.confirmation()))?;
        info!(review_id = %review.id, tier = %review.tier, "expert review submitted");
        Ok(review)
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_expires_after_window() {
        let store = StoreHandle::new(StorefrontConfig::default());
        store
            .add_notification(NotificationRequest::info("Added to wishlist"))
            .unwrap();
        assert_eq!(store.pending_dismissals(), 1);

        tokio::time::advance(Duration::from_millis(4_999)).await;
        settle().await;
        assert_eq!(store.snapshot().notifications().len(), 1);

        tokio::time::advance(Duration::from_millis(2)).await;
        settle().await;
        assert!(store.snapshot().notifications().is_empty());
        assert_eq!(store.pending_dismissals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_removal_cancels_timer() {
        let store = StoreHandle::new(StorefrontConfig::default());
        let id = store
            .add_notification(NotificationRequest::info("Saved"))
            .unwrap();
        store.remove_notification(id).unwrap();
        assert_eq!(store.pending_dismissals(), 0);

        // Second removal is silent.
        let state = store.remove_notification(id).unwrap();
        assert!(state.notifications().is_empty());

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert!(store.snapshot().notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_notification_stays() {
        let store = StoreHandle::new(StorefrontConfig::default());
        store
            .add_notification(NotificationRequest::error("Card declined").persistent())
            .unwrap();
        assert_eq!(store.pending_dismissals(), 0);

        tokio::time::advance(Duration::from_secs(60)).await;
        settle().await;
        assert_eq!(store.snapshot().notifications().len(), 1);
    }

    #[test]
    fn test_without_runtime_notifications_persist() {
        let store = StoreHandle::new(StorefrontConfig::default());
        store
            .add_notification(NotificationRequest::info("hello"))
            .unwrap();
        assert_eq!(store.pending_dismissals(), 0);
        assert_eq!(store.snapshot().notifications().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_state() {
        let store = StoreHandle::new(StorefrontConfig::default());
        let other = store.clone();
        other.set_current_view(View::Billing).unwrap();
        assert_eq!(store.snapshot().current_view(), View::Billing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_style_analysis_notifies() {
        let store = StoreHandle::new(StorefrontConfig::default());
        let profile = StyleProfile::from_photo(crate::style::SkinTone::Warm);
        let state = store.complete_style_analysis(profile.clone()).unwrap();

        assert_eq!(state.style_profile(), Some(&profile));
        let notice = &state.notifications().items()[0];
        assert_eq!(notice.title.as_deref(), Some("Style Analysis Complete!"));
        assert_eq!(
            notice.message,
            "Your personalized jewelry recommendations are ready."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_review_records_nothing() {
        let store = StoreHandle::new(StorefrontConfig::default());
        let result = store.submit_expert_review(ReviewRequest::default());
        assert!(result.is_err());
        let state = store.snapshot();
        assert!(state.expert_reviews().is_empty());
        assert!(state.notifications().is_empty());
    }
}
