//! Top-level view identifiers.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The view currently shown to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Categories,
    Marketplace,
    ProductDetails,
    Search,
    Cart,
    Billing,
    StyleAssistant,
    ExpertReview,
    Sustainability,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::Categories,
        Self::Marketplace,
        Self::ProductDetails,
        Self::Search,
        Self::Cart,
        Self::Billing,
        Self::StyleAssistant,
        Self::ExpertReview,
        Self::Sustainability,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Categories => "categories",
            Self::Marketplace => "marketplace",
            Self::ProductDetails => "product-details",
            Self::Search => "search",
            Self::Cart => "cart",
            Self::Billing => "billing",
            Self::StyleAssistant => "style-assistant",
            Self::ExpertReview => "expert-review",
            Self::Sustainability => "sustainability",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for View {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| StoreError::unknown("view", s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_view_from_str_round_trips_every_view() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>().unwrap(), view);
        }
    }

    #[test]
    fn test_unknown_view_rejected() {
        let err = "checkout".parse::<View>().unwrap_err();
        assert_eq!(err, StoreError::unknown("view", "checkout"));
    }

    #[test]
    fn test_view_serde_matches_display() {
        let json = serde_json::to_string(&View::StyleAssistant).unwrap();
        assert_eq!(json, "\"style-assistant\"");
    }
}
