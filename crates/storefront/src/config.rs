//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `STOREFRONT_NOTIFICATION_DISMISS_SECS` - Auto-dismiss window for notifications (default: 5)
//! - `STOREFRONT_DEFAULT_TAX_RATE` - Tax rate for states without a specific rate (default: 0.08)
//! - `STOREFRONT_FREE_SHIPPING_THRESHOLD` - Order subtotal that ships free (default: 500)
//! - `STOREFRONT_DEFAULT_VIEW` - View shown when a session starts (default: home)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::View;

const DEFAULT_DISMISS_SECS: u64 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// How long a notification stays visible unless dismissed earlier
    pub notification_dismiss_after: Duration,
    /// Pricing rules applied to carts and orders
    pub pricing: PricingConfig,
    /// Initial view of a new session
    pub default_view: View,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. production, staging)
    pub sentry_environment: Option<String>,
}

/// Pricing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Tax rate used when a state has no specific rate
    pub default_tax_rate: Decimal,
    /// Subtotal at or above which shipping is free
    pub free_shipping_threshold: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_tax_rate: Decimal::new(8, 2),
            free_shipping_threshold: Decimal::new(500, 0),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            notification_dismiss_after: Duration::from_secs(DEFAULT_DISMISS_SECS),
            pricing: PricingConfig::default(),
            default_view: View::Home,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let dismiss_secs: u64 = parse_or(
            &lookup,
            "STOREFRONT_NOTIFICATION_DISMISS_SECS",
            DEFAULT_DISMISS_SECS,
        )?;
        let default_tax_rate: Decimal = parse_or(
            &lookup,
            "STOREFRONT_DEFAULT_TAX_RATE",
            defaults.pricing.default_tax_rate,
        )?;
        if default_tax_rate.is_sign_negative() || default_tax_rate >= Decimal::ONE {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_DEFAULT_TAX_RATE".to_string(),
                format!("must be in [0, 1), got {default_tax_rate}"),
            ));
        }
        let free_shipping_threshold: Decimal = parse_or(
            &lookup,
            "STOREFRONT_FREE_SHIPPING_THRESHOLD",
            defaults.pricing.free_shipping_threshold,
        )?;
        let default_view: View = parse_or(&lookup, "STOREFRONT_DEFAULT_VIEW", View::Home)?;

        Ok(Self {
            notification_dismiss_after: Duration::from_secs(dismiss_secs),
            pricing: PricingConfig {
                default_tax_rate,
                free_shipping_threshold,
            },
            default_view,
            sentry_dsn: non_empty(lookup("SENTRY_DSN")),
            sentry_environment: non_empty(lookup("SENTRY_ENVIRONMENT")),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if present, otherwise use the default.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

/// Treat empty strings the same as unset variables.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.notification_dismiss_after, Duration::from_secs(5));
        assert_eq!(config.pricing.default_tax_rate, Decimal::new(8, 2));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_NOTIFICATION_DISMISS_SECS", "10"),
            ("STOREFRONT_DEFAULT_TAX_RATE", "0.0725"),
            ("STOREFRONT_FREE_SHIPPING_THRESHOLD", "750"),
            ("STOREFRONT_DEFAULT_VIEW", "marketplace"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ]))
        .unwrap();

        assert_eq!(config.notification_dismiss_after, Duration::from_secs(10));
        assert_eq!(config.pricing.default_tax_rate, Decimal::new(725, 4));
        assert_eq!(config.pricing.free_shipping_threshold, Decimal::new(750, 0));
        assert_eq!(config.default_view, View::Marketplace);
        assert!(config.sentry_dsn.is_some());
        assert!(config.sentry_environment.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[(
            "STOREFRONT_NOTIFICATION_DISMISS_SECS",
            "soon",
        )]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "STOREFRONT_NOTIFICATION_DISMISS_SECS"));

        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_DEFAULT_TAX_RATE", "1.5")]));
        assert!(result.is_err());

        let result =
            StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_DEFAULT_VIEW", "checkout")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("SENTRY_DSN", ""),
            ("STOREFRONT_DEFAULT_VIEW", "  "),
        ]))
        .unwrap();
        assert!(config.sentry_dsn.is_none());
        assert_eq!(config.default_view, View::Home);
    }
}
